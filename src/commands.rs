use crate::cli::{Cli, Command};

pub mod connection;
pub mod file;
pub mod repo;
pub mod url;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::File(args) => file::run(args).await,
        Command::Url(args) => url::run(args).await,
        Command::Repo(args) => repo::run(args).await,
    }
}
