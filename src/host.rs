//! リポジトリホスト抽象化
//!
//! GitHub のディレクトリ一覧取得と raw コンテンツ取得を提供する。
//! テスト時にモックを注入できるよう trait で切り出す。

pub mod github;

pub use github::GitHubHost;


use crate::error::Result;
use crate::repo::RepoRef;
use std::future::Future;
use std::pin::Pin;

/// リポジトリ内のファイルエントリ
#[derive(Debug, Clone)]
pub struct RepoEntry {
    /// リポジトリルートからのパス
    pub path: String,
    /// ファイル名
    pub name: String,
}

/// リポジトリの一覧取得・取得機能を抽象化する trait
pub trait RepoHost: Send + Sync {
    /// ディレクトリ直下のファイル一覧を取得（APIの返却順を保持）
    fn list_files<'a>(
        &'a self,
        repo: &'a RepoRef,
        branch: &'a str,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RepoEntry>>> + Send + 'a>>;

    /// 単一ファイルのrawコンテンツを取得
    fn fetch_raw<'a>(
        &'a self,
        repo: &'a RepoRef,
        branch: &'a str,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}
