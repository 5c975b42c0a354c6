//! GitHubホストクライアント
//!
//! 一覧取得は contents API、コンテンツ取得は raw.githubusercontent.com
//! を使う。

use super::{RepoEntry, RepoHost};
use crate::config::HttpConfig;
use crate::env::EnvVar;
use crate::error::{BhqError, Result};
use crate::repo::RepoRef;
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::process::Command;

/// GitHubトークンを取得
/// 優先順位: 1. GITHUB_TOKEN環境変数, 2. gh CLI認証
fn github_token() -> Option<String> {
    if let Some(token) = EnvVar::get("GITHUB_TOKEN") {
        return Some(token);
    }

    if let Ok(output) = Command::new("gh").args(["auth", "token"]).output() {
        if output.status.success() {
            let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !token.is_empty() {
                return Some(token);
            }
        }
    }

    None
}

/// contents API のレスポンス要素
#[derive(Debug, Deserialize)]
struct ContentsEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    entry_type: String,
}

/// 一覧レスポンスからファイルエントリを抽出（返却順を保持）
pub(crate) fn parse_listing(json: &str) -> Result<Vec<RepoEntry>> {
    let entries: Vec<ContentsEntry> = serde_json::from_str(json)?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.entry_type == "file")
        .map(|entry| RepoEntry {
            path: entry.path,
            name: entry.name,
        })
        .collect())
}

/// GitHub APIクライアント
pub struct GitHubHost {
    client: Client,
    api_base: String,
    raw_base: String,
}

impl GitHubHost {
    /// HTTP設定からクライアントを作成
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            client: config.build_client(),
            api_base: "https://api.github.com".to_string(),
            raw_base: "https://raw.githubusercontent.com".to_string(),
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url);

        if let Some(token) = github_token() {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }

    async fn list_files_inner(
        &self,
        repo: &RepoRef,
        branch: &str,
        path: &str,
    ) -> Result<Vec<RepoEntry>> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_base,
            repo.owner(),
            repo.name(),
            path.trim_matches('/'),
            branch
        );

        let response = self.get(&url).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BhqError::GitHubApi { status, message });
        }

        parse_listing(&response.text().await?)
    }

    async fn fetch_raw_inner(&self, repo: &RepoRef, branch: &str, path: &str) -> Result<String> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            self.raw_base,
            repo.owner(),
            repo.name(),
            branch,
            path.trim_start_matches('/')
        );

        let response = self.get(&url).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BhqError::GitHubApi { status, message });
        }

        Ok(response.text().await?)
    }
}

impl RepoHost for GitHubHost {
    fn list_files<'a>(
        &'a self,
        repo: &'a RepoRef,
        branch: &'a str,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RepoEntry>>> + Send + 'a>> {
        Box::pin(self.list_files_inner(repo, branch, path))
    }

    fn fetch_raw<'a>(
        &'a self,
        repo: &'a RepoRef,
        branch: &'a str,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.fetch_raw_inner(repo, branch, path))
    }
}
