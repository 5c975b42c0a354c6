//! bhq url コマンド
//!
//! 単一ファイルのURLからクエリをインポートする。

use super::connection::{run_import, ConnectionArgs};
use crate::config::HttpConfig;
use crate::source::DirectUrlSource;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Import queries from a direct file URL")]
pub struct Args {
    /// URL of the query file (GitHub blob URLs are rewritten to raw URLs)
    #[arg(id = "source_url", value_name = "URL")]
    pub url: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: Args) -> Result<(), String> {
    let source = DirectUrlSource::new(args.url, &HttpConfig::default());
    run_import(&source, &args.connection).await
}
