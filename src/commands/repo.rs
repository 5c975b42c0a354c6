//! bhq repo コマンド
//!
//! GitHubリポジトリのディレクトリ（または単一ファイル）から
//! クエリをインポートする。

use super::connection::{run_import, ConnectionArgs};
use crate::config::HttpConfig;
use crate::host::GitHubHost;
use crate::repo;
use crate::source::RepoSource;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Import queries from a GitHub repository")]
pub struct Args {
    /// Repository in owner/repo form or a GitHub URL (owner/repo@ref selects a branch)
    pub repo: String,

    /// Branch name (an @ref on the repository argument takes precedence)
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Path within the repository to search for query files
    #[arg(long, default_value = "")]
    pub path: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: Args) -> Result<(), String> {
    let repo_ref = repo::from_input(&args.repo).map_err(|e| e.to_string())?;
    let branch = repo_ref
        .git_ref()
        .map(str::to_string)
        .unwrap_or_else(|| args.branch.clone());

    let host = GitHubHost::new(&HttpConfig::default());
    let source = RepoSource::new(repo_ref, branch, args.path.clone(), Box::new(host));
    run_import(&source, &args.connection).await
}
