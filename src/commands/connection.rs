//! 各サブコマンド共通の接続フラグと実行ヘルパー

use crate::api::BloodHoundClient;
use crate::config::{FileConfig, HttpConfig, Settings};
use crate::error::BhqError;
use crate::output;
use crate::pipeline;
use crate::source::BlobSource;
use crate::submit::TokioClock;
use clap::Args as ClapArgs;
use std::path::PathBuf;

/// BloodHound接続の共通フラグ
#[derive(Debug, Clone, ClapArgs)]
pub struct ConnectionArgs {
    /// BloodHound instance URL (default: http://localhost:8080)
    #[arg(long)]
    pub url: Option<String>,

    /// BloodHound API token ID
    #[arg(long = "token-id")]
    pub token_id: Option<String>,

    /// BloodHound API token key
    #[arg(long = "token-key")]
    pub token_key: Option<String>,

    /// Delay between requests in seconds (default: 0.5)
    #[arg(long = "rate-limit")]
    pub rate_limit: Option<f64>,

    /// Path to a TOML config file (default: ~/.bhq/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConnectionArgs {
    /// フラグ・環境変数・設定ファイルから接続設定を解決する
    pub fn settings(&self) -> crate::error::Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::load_from(path)?,
            None => FileConfig::load_default()?,
        };

        Settings::resolve(
            self.url.clone(),
            self.token_id.clone(),
            self.token_key.clone(),
            self.rate_limit,
            &file,
        )
    }
}

/// ソースに対してインポートパイプラインを実行する
///
/// SourceEmpty は空サマリとして扱い、正常終了させる。
pub async fn run_import(source: &dyn BlobSource, conn: &ConnectionArgs) -> Result<(), String> {
    let settings = conn.settings().map_err(|e| e.to_string())?;

    let client = BloodHoundClient::new(
        settings.base_url.clone(),
        settings.credentials.clone(),
        &HttpConfig::default(),
    );
    let clock = TokioClock;

    println!("Importing queries from {}", source.describe());

    let progress = output::submission_progress();
    let result = pipeline::run(source, &client, &clock, settings.rate_limit, |outcome| {
        if !outcome.success {
            progress.println(format!(
                "✗ {}: {}",
                outcome.query_name,
                outcome.error.as_deref().unwrap_or("unknown error")
            ));
        }
        progress.inc(1);
    })
    .await;
    progress.finish_and_clear();

    match result {
        Ok(report) => {
            output::print_report(&report);
            Ok(())
        }
        Err(BhqError::SourceEmpty(origin)) => {
            output::print_empty_source(&origin);
            Ok(())
        }
        Err(err) => Err(err.to_string()),
    }
}
