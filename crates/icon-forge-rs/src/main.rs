//! icon-forge-rs: generates typed UI components from SVG icon sets.

mod cli;
mod config;
mod orchestrator;
mod output;

use clap::Parser;
use cli::Args;
use miette::Result;
use output::Formatter;

fn main() -> Result<()> {
    let args = Args::parse();
    let formatter = Formatter::new(args.output);

    match orchestrator::run(&args) {
        Ok(summary) => {
            println!("{}", formatter.format(&summary));
            if !summary.skipped.is_empty() {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
