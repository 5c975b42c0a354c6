use clap::{Parser, Subcommand};

use crate::commands::{file, repo, url};

#[derive(Debug, Parser)]
#[command(name = "bhq")]
#[command(about = "BloodHound CE custom query importer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ローカルファイル・ディレクトリからインポート
    ///
    /// Import queries from a local file or directory
    File(file::Args),

    /// 直接URLからインポート
    ///
    /// Import queries from a direct file URL
    Url(url::Args),

    /// GitHubリポジトリからインポート
    ///
    /// Import queries from a GitHub repository
    Repo(repo::Args),
}
