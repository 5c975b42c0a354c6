//! ローカルパスソースのテスト

use super::{BlobSource, LocalPathSource, ShapeHint};
use crate::error::BhqError;
use std::fs;

#[tokio::test]
async fn single_file_yields_one_blob() {
    let file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    fs::write(file.path(), r#"[{"name": "a", "query": "MATCH (n) RETURN n"}]"#).unwrap();

    let source = LocalPathSource::new(file.path());
    let resolved = source.resolve().await.unwrap();

    assert_eq!(resolved.blobs.len(), 1);
    assert_eq!(resolved.blobs[0].hint, ShapeHint::Json);
    assert!(resolved.blobs[0].content.contains("MATCH"));
    assert!(resolved.fetch_errors.is_empty());
}

#[tokio::test]
async fn missing_file_is_source_unavailable() {
    let source = LocalPathSource::new("/nonexistent/queries.json");
    let err = source.resolve().await.unwrap_err();

    assert!(matches!(err, BhqError::SourceUnavailable(_)));
}

#[tokio::test]
async fn extensionless_file_defaults_to_text_hint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("queries");
    fs::write(&path, "MATCH (n) RETURN n").unwrap();

    let source = LocalPathSource::new(&path);
    let resolved = source.resolve().await.unwrap();

    assert_eq!(resolved.blobs[0].hint, ShapeHint::Text);
}

#[tokio::test]
async fn directory_is_walked_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.json"), "[]").unwrap();
    fs::write(dir.path().join("a.yaml"), "[]").unwrap();
    fs::write(dir.path().join("c.txt"), "MATCH (n) RETURN n").unwrap();
    fs::write(dir.path().join("README.md"), "not a query file").unwrap();

    let source = LocalPathSource::new(dir.path());
    let resolved = source.resolve().await.unwrap();

    let names: Vec<String> = resolved
        .blobs
        .iter()
        .map(|b| b.origin.rsplit('/').next().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.yaml", "b.json", "c.txt"]);
}

#[tokio::test]
async fn nested_directories_are_included() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("deep.cypher"), "MATCH (n) RETURN n").unwrap();

    let source = LocalPathSource::new(dir.path());
    let resolved = source.resolve().await.unwrap();

    assert_eq!(resolved.blobs.len(), 1);
    assert!(resolved.blobs[0].origin.ends_with("deep.cypher"));
}

#[tokio::test]
async fn directory_without_query_files_is_source_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "nothing here").unwrap();

    let source = LocalPathSource::new(dir.path());
    let err = source.resolve().await.unwrap_err();

    assert!(matches!(err, BhqError::SourceEmpty(_)));
}
