use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a report and emit the canonical record sets as JSON
    Dump {
        /// Path to the HTML battery report (falls back to $BATTERY_REPORT)
        #[arg(long)]
        report: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
