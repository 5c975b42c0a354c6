mod api;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod host;
mod output;
mod parser;
mod pipeline;
mod query;
mod repo;
mod report;
mod signing;
mod source;
mod submit;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod repo_proptests;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
