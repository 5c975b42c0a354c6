//! bhq file コマンド
//!
//! ローカルファイルまたはディレクトリからクエリをインポートする。

use super::connection::{run_import, ConnectionArgs};
use crate::source::LocalPathSource;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Import queries from a local file or directory")]
pub struct Args {
    /// File or directory containing query definitions (.json/.yaml/.txt/.cypher)
    pub path: PathBuf,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: Args) -> Result<(), String> {
    let source = LocalPathSource::new(args.path);
    run_import(&source, &args.connection).await
}
