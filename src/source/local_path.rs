//! ローカルパスソース
//!
//! 単一ファイルは1つのblobになる。ディレクトリは再帰的に走査し、
//! クエリ拡張子を持つファイルをパスのソート順で集める。

use super::{has_query_extension, BlobSource, FetchError, RawBlob, ResolvedSource, ShapeHint};
use crate::error::{BhqError, Result};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use walkdir::WalkDir;

/// ローカルファイル・ディレクトリからの取得
pub struct LocalPathSource {
    path: PathBuf,
}

impl LocalPathSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn resolve_sync(&self) -> Result<ResolvedSource> {
        if !self.path.exists() {
            return Err(BhqError::SourceUnavailable(format!(
                "File not found: {}",
                self.path.display()
            )));
        }

        if self.path.is_dir() {
            return self.resolve_dir();
        }

        let origin = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| BhqError::SourceUnavailable(format!("{origin}: {e}")))?;
        let hint = ShapeHint::from_path(&origin).or_default(ShapeHint::Text);

        Ok(ResolvedSource {
            blobs: vec![RawBlob {
                content,
                origin,
                hint,
            }],
            fetch_errors: Vec::new(),
        })
    }

    fn resolve_dir(&self) -> Result<ResolvedSource> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| has_query_extension(&path.to_string_lossy()))
            .collect();
        files.sort();

        let mut resolved = ResolvedSource::default();

        for file in files {
            let origin = file.display().to_string();

            match std::fs::read_to_string(&file) {
                Ok(content) => {
                    let hint = ShapeHint::from_path(&origin).or_default(ShapeHint::Text);
                    resolved.blobs.push(RawBlob {
                        content,
                        origin,
                        hint,
                    });
                }
                Err(e) => resolved.fetch_errors.push(FetchError {
                    origin,
                    message: e.to_string(),
                }),
            }
        }

        if resolved.blobs.is_empty() && resolved.fetch_errors.is_empty() {
            return Err(BhqError::SourceEmpty(self.path.display().to_string()));
        }

        Ok(resolved)
    }
}

impl BlobSource for LocalPathSource {
    fn resolve(&self) -> Pin<Box<dyn Future<Output = Result<ResolvedSource>> + Send + '_>> {
        Box::pin(async move { self.resolve_sync() })
    }

    fn describe(&self) -> String {
        format!("local path {}", self.path.display())
    }
}
