//! 環境変数ユーティリティ

use std::path::PathBuf;

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

/// デフォルトの設定ファイルパス（$HOME/.bhq/config.toml）
pub fn default_config_path() -> Option<PathBuf> {
    EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".bhq").join("config.toml"))
}
