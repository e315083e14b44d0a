use std::error::Error;

use clap::Parser;
use report_ingestor::cli::commands::{Cli, Commands};
use shared_utils::env::get_env_var;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump { report, pretty } => {
            let path = match report {
                Some(p) => p,
                None => get_env_var("BATTERY_REPORT")?,
            };
            let parsed = report_ingestor::load_report(&path)?;
            let json = if pretty {
                serde_json::to_string_pretty(&parsed)?
            } else {
                serde_json::to_string(&parsed)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
