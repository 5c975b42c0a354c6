//! テスト用モック（API・クロック）

use super::clock::Clock;
use super::SavedQueryApi;
use crate::error::{BhqError, Result};
use crate::query::Query;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// 試行ごとのレスポンス
#[derive(Debug, Clone)]
pub enum MockResponse {
    Ok,
    Status(u16),
}

/// レスポンスをスクリプト化したモックAPI
///
/// スクリプトを前から消費し、尽きたら default を返し続ける。
pub struct MockApi {
    script: Mutex<VecDeque<MockResponse>>,
    default: MockResponse,
    /// 呼び出されたクエリ名の記録
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new(script: Vec<MockResponse>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            default: MockResponse::Ok,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always_status(status: u16) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            default: MockResponse::Status(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl SavedQueryApi for MockApi {
    fn create_query<'a>(
        &'a self,
        query: &'a Query,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(query.name.clone());

            let response = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| self.default.clone());

            match response {
                MockResponse::Ok => Ok(()),
                MockResponse::Status(status) => Err(BhqError::Api {
                    status,
                    message: format!("HTTP {status}"),
                }),
            }
        })
    }
}

/// スリープを記録し仮想時刻を進めるモッククロック
pub struct MockClock {
    now: Mutex<Instant>,
    /// 記録されたスリープ時間
    pub sleeps: Mutex<Vec<Duration>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            self.sleeps.lock().unwrap().push(duration);
            *self.now.lock().unwrap() += duration;
        })
    }
}
