//! クロック抽象化
//!
//! ペーシングとバックオフを実時間待ちなしでテストするための注入点。

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

/// 時刻取得とスリープの抽象化
pub trait Clock: Send + Sync {
    /// 現在時刻
    fn now(&self) -> Instant;

    /// 指定時間スリープ
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// tokioタイマーによる本番実装
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(duration))
    }
}
