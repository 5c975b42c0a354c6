//! クエリソースの解決
//!
//! ローカルパス・直接URL・GitHubリポジトリのいずれかから
//! 生コンテンツ（RawBlob）の列を取得する。ファイル単位の取得失敗は
//! 致命的エラーにせず、成功分と並べて保持する。

mod direct_url;
mod local_path;
mod repo_source;

pub use direct_url::DirectUrlSource;
pub use local_path::LocalPathSource;
pub use repo_source::RepoSource;

#[cfg(test)]
mod local_path_test;

use crate::error::Result;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

/// クエリファイルとして扱う拡張子
pub const QUERY_EXTENSIONS: [&str; 5] = ["json", "yaml", "yml", "txt", "cypher"];

/// コンテンツ形式のヒント
///
/// 拡張子から判定する。Unknown はパース時のスニッフィングで解決される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeHint {
    Json,
    Yaml,
    Text,
    Unknown,
}

impl ShapeHint {
    /// パスの拡張子から判定（不明ならUnknown）
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ShapeHint::Json,
            Some(ext)
                if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") =>
            {
                ShapeHint::Yaml
            }
            Some(ext)
                if ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("cypher") =>
            {
                ShapeHint::Text
            }
            _ => ShapeHint::Unknown,
        }
    }

    /// Unknown の場合は fallback に置き換える
    pub fn or_default(self, fallback: ShapeHint) -> Self {
        match self {
            ShapeHint::Unknown => fallback,
            other => other,
        }
    }
}

/// 取得した生コンテンツ
#[derive(Debug, Clone)]
pub struct RawBlob {
    pub content: String,
    /// 取得元（パスまたはURL）
    pub origin: String,
    pub hint: ShapeHint,
}

/// ファイル単位の取得失敗
#[derive(Debug, Clone)]
pub struct FetchError {
    pub origin: String,
    pub message: String,
}

/// ソース解決の結果
#[derive(Debug, Clone, Default)]
pub struct ResolvedSource {
    pub blobs: Vec<RawBlob>,
    pub fetch_errors: Vec<FetchError>,
}

/// クエリソースの抽象化
///
/// 各ソースタイプがこの trait を実装する。使う側は具体的なソース
/// タイプを意識せず `resolve()` を呼ぶだけ。
pub trait BlobSource: Send + Sync {
    /// ソースを解決して RawBlob の列を返す
    fn resolve(&self) -> Pin<Box<dyn Future<Output = Result<ResolvedSource>> + Send + '_>>;

    /// 表示用のソース記述
    fn describe(&self) -> String;
}

/// パスが既知のクエリ拡張子を持つかどうか
pub fn has_query_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| QUERY_EXTENSIONS.iter().any(|q| ext.eq_ignore_ascii_case(q)))
        .unwrap_or(false)
}
