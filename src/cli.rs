use clap::{Parser, Subcommand};

use crate::selector::{Policy, RemarkStyle, SelectorConfig};

/// Menu Combo Maker: rotates mains, sides, and drinks into daily combos.
#[derive(Parser, Debug)]
#[command(name = "menu_combos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu items CSV file.
    #[arg(short, long, env = "MENU_CATALOG", default_value = "data/menu_items.csv")]
    pub catalog: String,

    /// Selection policy.
    #[arg(short, long, value_enum, default_value_t = Policy::Greedy)]
    pub policy: Policy,

    /// Remark style (defaults to sentences for greedy, tags for diverse).
    #[arg(short, long, value_enum)]
    pub remarks: Option<RemarkStyle>,

    /// Random seed for reproducible shuffles and remarks.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            policy: self.policy,
            remark_style: self.remarks,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate combo batches and print them.
    Generate {
        /// Number of batches to generate in a row.
        #[arg(short, long, default_value = "1")]
        batches: usize,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Serve the menu API over HTTP.
    Serve {
        /// Address to bind.
        #[arg(short, long, env = "MENU_BIND", default_value = "127.0.0.1:5000")]
        bind: String,

        /// Include error details in 500 responses.
        #[arg(long)]
        debug: bool,
    },

    /// List the loaded catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            batches: 1,
            json: false,
        }
    }
}
