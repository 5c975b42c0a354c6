//! レート制限付きのクエリ送信
//!
//! 送信は厳密に逐次・順序保存。リクエスト間隔は直近リクエスト時刻を
//! 明示的な状態として持ち回る。429 のみエスカレートする待機を挟んで
//! 再試行し、その他の失敗は即座に記録する。

pub mod clock;

#[cfg(test)]
pub mod mock;

pub use clock::{Clock, TokioClock};

use crate::error::Result;
use crate::query::Query;
use crate::report::ImportOutcome;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

/// 429リトライを含む最大試行回数
pub const MAX_ATTEMPTS: u32 = 3;

/// saved-query 作成APIの抽象化
///
/// 本番では署名付きクライアントが実装する。テストではレスポンスを
/// スクリプト化したモックを注入する。
pub trait SavedQueryApi: Send + Sync {
    /// クエリを1件作成する
    fn create_query<'a>(
        &'a self,
        query: &'a Query,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// 送信ループ
pub struct Submitter<'a> {
    api: &'a dyn SavedQueryApi,
    clock: &'a dyn Clock,
    rate_limit: Duration,
    /// 直近リクエストの時刻（ペーシング状態）
    last_request: Option<Instant>,
}

impl<'a> Submitter<'a> {
    pub fn new(api: &'a dyn SavedQueryApi, clock: &'a dyn Clock, rate_limit: Duration) -> Self {
        Self {
            api,
            clock,
            rate_limit,
            last_request: None,
        }
    }

    /// 全クエリを入力順に送信し、1件ごとの結果を返す
    pub async fn submit_all(
        &mut self,
        queries: &[Query],
        mut on_outcome: impl FnMut(&ImportOutcome),
    ) -> Vec<ImportOutcome> {
        let mut outcomes = Vec::with_capacity(queries.len());

        for query in queries {
            let outcome = self.submit_one(query).await;
            on_outcome(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    /// 1件送信する
    ///
    /// 429 のたびに待機時間を倍にして再試行する。非429の失敗は
    /// 再試行せずそのまま失敗として返す。
    async fn submit_one(&mut self, query: &Query) -> ImportOutcome {
        let mut backoff = self.rate_limit;
        let mut attempt = 0;

        loop {
            attempt += 1;
            self.pace().await;

            let result = self.api.create_query(query).await;
            self.last_request = Some(self.clock.now());

            match result {
                Ok(()) => return ImportOutcome::success(&query.name),
                Err(err) if err.is_rate_limited() && attempt < MAX_ATTEMPTS => {
                    backoff *= 2;
                    self.clock.sleep(backoff).await;
                }
                Err(err) => return ImportOutcome::failure(&query.name, err.to_string()),
            }
        }
    }

    /// 直近リクエストから rate_limit 経過するまで待つ
    async fn pace(&self) {
        let Some(last) = self.last_request else {
            return;
        };

        let elapsed = self.clock.now().saturating_duration_since(last);
        if elapsed < self.rate_limit {
            self.clock.sleep(self.rate_limit - elapsed).await;
        }
    }
}
