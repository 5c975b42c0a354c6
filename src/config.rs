//! HTTP設定と接続設定
//!
//! 接続設定は CLIフラグ > 環境変数 > 設定ファイル > デフォルト の
//! 順で解決する。

use crate::env::EnvVar;
use crate::error::{BhqError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// デフォルトのBloodHound URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// デフォルトのリクエスト間隔（秒）
pub const DEFAULT_RATE_LIMIT_SECS: f64 = 0.5;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "bhq-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// APIトークンペア
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token_id: String,
    pub token_key: String,
}

/// 設定ファイル（~/.bhq/config.toml）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub token_key: Option<String>,
    #[serde(default)]
    pub rate_limit: Option<f64>,
}

impl FileConfig {
    /// デフォルトパスから読み込む。ファイルが無ければ空の設定を返す。
    pub fn load_default() -> Result<Self> {
        match crate::env::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// 指定パスから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BhqError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        Ok(toml::from_str(&content)?)
    }
}

/// 解決済みの接続設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub credentials: Credentials,
    pub rate_limit: Duration,
}

impl Settings {
    /// CLIフラグ・環境変数・設定ファイルをマージして解決する
    pub fn resolve(
        flag_url: Option<String>,
        flag_token_id: Option<String>,
        flag_token_key: Option<String>,
        flag_rate_limit: Option<f64>,
        file: &FileConfig,
    ) -> Result<Self> {
        let base_url = flag_url
            .or_else(|| EnvVar::get("BHQ_URL"))
            .or_else(|| file.url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let token_id = flag_token_id
            .or_else(|| EnvVar::get("BHQ_TOKEN_ID"))
            .or_else(|| file.token_id.clone())
            .ok_or_else(|| {
                BhqError::Config(
                    "Missing API token ID (--token-id, BHQ_TOKEN_ID, or config file)".to_string(),
                )
            })?;

        let token_key = flag_token_key
            .or_else(|| EnvVar::get("BHQ_TOKEN_KEY"))
            .or_else(|| file.token_key.clone())
            .ok_or_else(|| {
                BhqError::Config(
                    "Missing API token key (--token-key, BHQ_TOKEN_KEY, or config file)"
                        .to_string(),
                )
            })?;

        let rate_limit = match flag_rate_limit {
            Some(value) => value,
            None => match EnvVar::get("BHQ_RATE_LIMIT") {
                Some(raw) => raw
                    .parse::<f64>()
                    .map_err(|_| BhqError::Config(format!("Invalid BHQ_RATE_LIMIT: {raw}")))?,
                None => file.rate_limit.unwrap_or(DEFAULT_RATE_LIMIT_SECS),
            },
        };

        if !rate_limit.is_finite() || rate_limit < 0.0 {
            return Err(BhqError::Config(format!("Invalid rate limit: {rate_limit}")));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: Credentials { token_id, token_key },
            rate_limit: Duration::from_secs_f64(rate_limit),
        })
    }
}
