//! リポジトリロケータ
//!
//! 入力文字列から GitHub リポジトリ参照を生成する。
//!
//! ## 対応フォーマット
//!
//! - `owner/repo` - 短縮記法
//! - `owner/repo@ref` - ref指定（`--branch` より優先）
//! - `https://github.com/owner/repo` - HTTP URL（`.git` サフィックス可）

use crate::error::{BhqError, Result};

/// GitHubリポジトリ参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    owner: String,
    name: String,
    git_ref: Option<String>,
}

impl RepoRef {
    /// 新しいRepoRefを作成
    pub fn new(owner: impl Into<String>, name: impl Into<String>, git_ref: Option<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            git_ref,
        }
    }

    /// オーナー名
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// リポジトリ名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Git ref（ブランチ、タグ、コミットSHA）
    pub fn git_ref(&self) -> Option<&str> {
        self.git_ref.as_deref()
    }

    /// フルパス形式 (owner/repo)
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// 入力文字列からリポジトリ参照を生成
///
/// 1. HTTP URL なら github.com ホストを確認してパスを取り出す
/// 2. `@ref` を分離
/// 3. `owner/repo` をパースし `.git` サフィックスを除去
pub fn from_input(input: &str) -> Result<RepoRef> {
    let trimmed = input.trim();

    let path = if let Some((scheme, rest)) = trimmed.split_once("://") {
        match scheme {
            "http" | "https" => {}
            other => {
                return Err(BhqError::InvalidRepoFormat(format!(
                    "Unsupported scheme: {other}"
                )))
            }
        }

        let (host, path) = rest
            .split_once('/')
            .ok_or_else(|| BhqError::InvalidRepoFormat(trimmed.to_string()))?;

        if host != "github.com" && host != "www.github.com" {
            return Err(BhqError::InvalidRepoFormat(format!(
                "Unsupported host: {host}"
            )));
        }

        path
    } else {
        trimmed
    };

    let (path, git_ref) = match path.split_once('@') {
        Some((path, git_ref)) if !git_ref.is_empty() => (path, Some(git_ref.to_string())),
        Some((path, _)) => (path, None),
        None => (path, None),
    };

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let owner = segments
        .next()
        .ok_or_else(|| BhqError::InvalidRepoFormat(trimmed.to_string()))?;
    let name = segments
        .next()
        .ok_or_else(|| BhqError::InvalidRepoFormat(trimmed.to_string()))?;

    if segments.next().is_some() {
        return Err(BhqError::InvalidRepoFormat(trimmed.to_string()));
    }

    let name = name.trim_end_matches(".git");
    if owner.is_empty() || name.is_empty() {
        return Err(BhqError::InvalidRepoFormat(trimmed.to_string()));
    }

    Ok(RepoRef::new(owner, name, git_ref))
}
