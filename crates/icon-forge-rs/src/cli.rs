//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use icon_codegen::Framework;

/// SVG icon to typed-component generator.
#[derive(Debug, Parser)]
#[command(name = "icon-forge-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory containing source .svg icons
    #[arg(long, default_value = "icons")]
    pub input: Utf8PathBuf,

    /// Output directory for generated components
    #[arg(long = "out-dir")]
    pub out_dir: Option<Utf8PathBuf>,

    /// Target framework
    #[arg(long, value_enum)]
    pub target: Option<TargetArg>,

    /// Barrel index filename, relative to the output directory
    #[arg(long = "index-file")]
    pub index_file: Option<String>,

    /// Glob patterns to ignore
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Output format of the batch summary
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Print each generated component to stderr (for debugging)
    #[arg(long = "emit-source")]
    pub emit_source: bool,

    /// Print timing breakdowns
    #[arg(long)]
    pub timings: bool,
}

/// Framework selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TargetArg {
    /// React function components (.tsx)
    React,
    /// Vue render-function components (.ts)
    Vue,
}

impl From<TargetArg> for Framework {
    fn from(value: TargetArg) -> Self {
        match value {
            TargetArg::React => Framework::React,
            TargetArg::Vue => Framework::Vue,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["icon-forge-rs"]);
        assert_eq!(args.input.as_str(), "icons");
        assert!(args.out_dir.is_none());
        assert!(args.target.is_none());
        assert_eq!(args.output, OutputFormat::Human);
    }

    #[test]
    fn test_target_flag() {
        let args = Args::parse_from(["icon-forge-rs", "--target", "vue"]);
        assert!(matches!(args.target, Some(TargetArg::Vue)));
    }

    #[test]
    fn test_ignore_accumulates() {
        let args = Args::parse_from([
            "icon-forge-rs",
            "--ignore",
            "**/draft/**",
            "--ignore",
            "**/wip-*.svg",
        ]);
        assert_eq!(args.ignore.len(), 2);
    }
}
