//! Prints the JSON schema of `config.toml` for editor integration.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Print the rastergrid config JSON schema")]
struct Args {
    /// Write the schema to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let schema = serde_json::to_string_pretty(&rastergrid::Config::json_schema())?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, schema + "\n")
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            log::info!("Wrote config schema to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}
