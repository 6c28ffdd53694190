use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::classify::ClassifyArgs;
use crate::config::DashboardConfig;
use crate::list::ListArgs;

#[derive(Debug, Parser)]
#[command(author, version, about = "Inventory dashboard data layer")]
pub struct Cli {
    /// Read products from a JSON file instead of the built-in mock catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Read the analytics snapshot from a JSON file
    #[arg(long, global = true)]
    analytics: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn into_parts(self) -> (DashboardConfig, Command) {
        let config = DashboardConfig {
            catalog_path: self.catalog,
            analytics_path: self.analytics,
        };
        (config, self.command.unwrap_or_default())
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products with their stock status
    Products(ListArgs),
    /// Print the analytics summary and stock status counts
    Summary,
    /// Print the label and style class for a raw status value
    Status(ClassifyArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Products(ListArgs::default())
    }
}
