use anyhow::Result;
use clap::Parser;
use inventory_dashboard::cli::{self, Cli};
use inventory_dashboard::{classify, list, summary};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, command) = Cli::parse().into_parts();
    match command {
        cli::Command::Products(args) => list::run(&config, args).await,
        cli::Command::Summary => summary::run(&config).await,
        cli::Command::Status(args) => classify::run(args),
    }
}
