//! GitHubリポジトリソース
//!
//! サブパス配下を一覧し、クエリ拡張子を持つファイルを1つずつ取得する。
//! 個々のファイルの取得失敗は記録のみで、残りのファイルは処理を続ける。

use super::{has_query_extension, BlobSource, FetchError, RawBlob, ResolvedSource, ShapeHint};
use crate::error::{BhqError, Result};
use crate::host::RepoHost;
use crate::repo::RepoRef;
use std::future::Future;
use std::pin::Pin;

/// リポジトリディレクトリからの取得
pub struct RepoSource {
    repo: RepoRef,
    branch: String,
    path: String,
    host: Box<dyn RepoHost>,
}

impl RepoSource {
    pub fn new(
        repo: RepoRef,
        branch: impl Into<String>,
        path: impl Into<String>,
        host: Box<dyn RepoHost>,
    ) -> Self {
        Self {
            repo,
            branch: branch.into(),
            path: path.into(),
            host,
        }
    }

    async fn resolve_inner(&self) -> Result<ResolvedSource> {
        let path = self.path.trim_matches('/');

        // サブパスが単一ファイルを指す場合は一覧を取らず直接取得する
        if has_query_extension(path) {
            return self.resolve_single_file(path).await;
        }

        let entries = self
            .host
            .list_files(&self.repo, &self.branch, path)
            .await
            .map_err(|e| {
                BhqError::SourceUnavailable(format!("{}: {}", self.repo.full_name(), e))
            })?;

        let mut resolved = ResolvedSource::default();

        for entry in entries {
            if !has_query_extension(&entry.name) {
                continue;
            }

            let origin = format!("{}/{}", self.repo.full_name(), entry.path);

            match self.host.fetch_raw(&self.repo, &self.branch, &entry.path).await {
                Ok(content) => resolved.blobs.push(RawBlob {
                    content,
                    hint: ShapeHint::from_path(&entry.path),
                    origin,
                }),
                Err(e) => resolved.fetch_errors.push(FetchError {
                    origin,
                    message: e.to_string(),
                }),
            }
        }

        if resolved.blobs.is_empty() && resolved.fetch_errors.is_empty() {
            return Err(BhqError::SourceEmpty(format!(
                "{}/{} (branch {})",
                self.repo.full_name(),
                path,
                self.branch
            )));
        }

        Ok(resolved)
    }

    async fn resolve_single_file(&self, path: &str) -> Result<ResolvedSource> {
        let origin = format!("{}/{}", self.repo.full_name(), path);

        let content = self
            .host
            .fetch_raw(&self.repo, &self.branch, path)
            .await
            .map_err(|e| BhqError::SourceUnavailable(format!("{origin}: {e}")))?;

        Ok(ResolvedSource {
            blobs: vec![RawBlob {
                content,
                hint: ShapeHint::from_path(path),
                origin,
            }],
            fetch_errors: Vec::new(),
        })
    }
}

impl BlobSource for RepoSource {
    fn resolve(&self) -> Pin<Box<dyn Future<Output = Result<ResolvedSource>> + Send + '_>> {
        Box::pin(self.resolve_inner())
    }

    fn describe(&self) -> String {
        format!(
            "repository {} (branch {}, path '{}')",
            self.repo.full_name(),
            self.branch,
            self.path
        )
    }
}
