use thiserror::Error;

/// bhq統一エラー型
#[derive(Debug, Error)]
pub enum BhqError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("BloodHound API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("GitHub API error: {message} (status: {status})")]
    GitHubApi { status: u16, message: String },

    #[error("Invalid repository format: {0}. Expected 'owner/repo', 'owner/repo@ref' or a GitHub URL")]
    InvalidRepoFormat(String),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("No query files found in source: {0}")]
    SourceEmpty(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BhqError>;

impl BhqError {
    /// レート制限による失敗かどうか
    ///
    /// リトライ対象は 429 のみ。その他の 4xx/5xx とネットワーク障害は
    /// 恒久的な失敗として即座に記録する。
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, BhqError::Api { status: 429, .. })
    }
}
