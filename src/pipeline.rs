//! インポートパイプライン
//!
//! ソース解決 → パース → 送信 → 集計 を1本の直列パスで実行する。
//! 致命的なのはソース解決の失敗のみで、それ以外の失敗はすべて
//! RunReport に集約されて返る。

use crate::parser;
use crate::query::Query;
use crate::report::{self, ImportOutcome, Summary};
use crate::source::{BlobSource, FetchError};
use crate::submit::{Clock, SavedQueryApi, Submitter};
use std::time::Duration;

/// パイプライン実行結果
#[derive(Debug)]
pub struct RunReport {
    pub summary: Summary,
    /// ファイル単位の取得失敗（リポジトリ・ディレクトリモード）
    pub fetch_errors: Vec<FetchError>,
    /// パース時の注記（プレーンテキストへの縮退など）
    pub notes: Vec<String>,
    /// cypher が空で破棄されたレコード数
    pub dropped: usize,
}

/// パイプラインを実行する
pub async fn run(
    source: &dyn BlobSource,
    api: &dyn SavedQueryApi,
    clock: &dyn Clock,
    rate_limit: Duration,
    mut on_outcome: impl FnMut(&ImportOutcome),
) -> crate::error::Result<RunReport> {
    let resolved = source.resolve().await?;

    let mut queries: Vec<Query> = Vec::new();
    let mut notes = Vec::new();
    let mut dropped = 0;

    for blob in &resolved.blobs {
        let parsed = parser::parse(blob);
        queries.extend(parsed.queries);
        dropped += parsed.dropped;

        if let Some(note) = parsed.note {
            notes.push(note);
        }
    }

    let mut submitter = Submitter::new(api, clock, rate_limit);
    let outcomes = submitter.submit_all(&queries, &mut on_outcome).await;

    Ok(RunReport {
        summary: report::aggregate(&outcomes),
        fetch_errors: resolved.fetch_errors,
        notes,
        dropped,
    })
}
