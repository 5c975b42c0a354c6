//! 直接URLソース

use super::{BlobSource, RawBlob, ResolvedSource, ShapeHint};
use crate::config::HttpConfig;
use crate::error::{BhqError, Result};
use std::future::Future;
use std::pin::Pin;

/// 単一ファイルURLからの取得
pub struct DirectUrlSource {
    url: String,
    client: reqwest::Client,
}

impl DirectUrlSource {
    pub fn new(url: impl Into<String>, config: &HttpConfig) -> Self {
        let url: String = url.into();

        Self {
            url: normalize_github_url(&url),
            client: config.build_client(),
        }
    }

    async fn resolve_inner(&self) -> Result<ResolvedSource> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BhqError::SourceUnavailable(format!("{}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(BhqError::SourceUnavailable(format!(
                "{}: HTTP {}",
                self.url,
                response.status().as_u16()
            )));
        }

        let content = response
            .text()
            .await
            .map_err(|e| BhqError::SourceUnavailable(format!("{}: {}", self.url, e)))?;

        let hint = ShapeHint::from_path(url_path(&self.url)).or_default(ShapeHint::Json);

        Ok(ResolvedSource {
            blobs: vec![RawBlob {
                content,
                origin: self.url.clone(),
                hint,
            }],
            fetch_errors: Vec::new(),
        })
    }
}

impl BlobSource for DirectUrlSource {
    fn resolve(&self) -> Pin<Box<dyn Future<Output = Result<ResolvedSource>> + Send + '_>> {
        Box::pin(self.resolve_inner())
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

/// GitHubのblobページURLをrawコンテンツURLに変換する
fn normalize_github_url(url: &str) -> String {
    if url.contains("github.com") && url.contains("/blob/") {
        url.replace("github.com", "raw.githubusercontent.com")
            .replace("/blob/", "/")
    } else {
        url.to_string()
    }
}

/// クエリ文字列とフラグメントを除いたパス部分
fn url_path(url: &str) -> &str {
    let without_fragment = url.split_once('#').map_or(url, |(path, _)| path);
    without_fragment
        .split_once('?')
        .map_or(without_fragment, |(path, _)| path)
}
