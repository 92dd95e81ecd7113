use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sigmap")]
#[command(about = "Canonical 4-byte function selector database builder", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect, verify, and emit the selector database
    Build {
        /// Directory of selector records to read
        #[arg(short, long)]
        input: PathBuf,

        /// File to write the database to (overwrites if it exists)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the 4-byte selector for each given signature
    Selector {
        /// Canonical signature strings, e.g. transfer(address,uint256)
        #[arg(required = true)]
        signatures: Vec<String>,
    },
}
