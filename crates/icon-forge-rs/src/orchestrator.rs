//! Main orchestration logic: discover sources, run the pipeline per
//! icon, write components and the barrel index.
//!
//! Per-file failures are recorded and never abort the batch; only
//! batch-level preconditions (missing input directory, zero sources) are
//! fatal.

use crate::cli::Args;
use crate::config::ForgeConfig;
use crate::output::{BatchSummary, SkippedIcon, Timings};
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSetBuilder};
use icon_codegen::{generate, ComponentSpec, Framework, IndexManifest, TargetConfig};
use icon_parser::{parse_with_options, ParseOptions};
use rayon::prelude::*;
use std::fs;
use std::time::Instant;
use thiserror::Error;
use walkdir::WalkDir;

/// Orchestration errors. All of these abort the run.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The input directory does not exist.
    #[error("input directory not found: {0}")]
    MissingInputDir(Utf8PathBuf),

    /// The input directory contains no source files.
    #[error("no .svg sources found under {0}")]
    EmptyBatch(Utf8PathBuf),

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Failed to write generated output.
    #[error("failed to write {path}: {message}")]
    WriteFailed {
        /// The file that could not be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        message: String,
    },
}

/// Runs one generation batch.
pub fn run(args: &Args) -> Result<BatchSummary, OrchestratorError> {
    let config = ForgeConfig::load(Utf8Path::new("."));

    let framework = args
        .target
        .map(Framework::from)
        .or_else(|| config.target.as_deref().and_then(parse_framework))
        .unwrap_or(Framework::React);
    let mut target = TargetConfig::for_framework(framework);
    if let Some(module) = &config.defaults_module {
        target.defaults_module = module.clone();
    }

    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| config.out_dir.as_deref().map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from("src/components"));
    let index_file = args
        .index_file
        .clone()
        .or(config.index_file)
        .unwrap_or_else(|| "index.ts".to_string());

    if !args.input.is_dir() {
        return Err(OrchestratorError::MissingInputDir(args.input.clone()));
    }

    // Build ignore glob set
    let mut ignore_builder = GlobSetBuilder::new();
    for pattern in args.ignore.iter().chain(&config.ignore) {
        let glob = Glob::new(pattern).map_err(|e| OrchestratorError::InvalidGlob(e.to_string()))?;
        ignore_builder.add(glob);
    }
    for pattern in ["**/node_modules/**", "**/.*/**"] {
        if let Ok(glob) = Glob::new(pattern) {
            ignore_builder.add(glob);
        }
    }
    let ignore_set = ignore_builder
        .build()
        .map_err(|e| OrchestratorError::InvalidGlob(e.to_string()))?;

    // Discover icon sources, lexicographic for reproducible index order
    let scan_start = Instant::now();
    let mut files: Vec<Utf8PathBuf> = WalkDir::new(&args.input)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
        .filter(|p| p.extension() == Some("svg"))
        .filter(|p| {
            let relative = p.strip_prefix(&args.input).unwrap_or(p);
            !ignore_set.is_match(relative.as_str())
        })
        .collect();
    files.sort();
    let scan_time = scan_start.elapsed();

    if files.is_empty() {
        return Err(OrchestratorError::EmptyBatch(args.input.clone()));
    }

    let parse_options = ParseOptions {
        attr_case: target.attr_case,
    };

    // Process icons in parallel; collect preserves discovery order
    let generate_start = Instant::now();
    let outcomes: Vec<(String, Result<ComponentSpec, String>)> = files
        .par_iter()
        .map(|path| {
            let identifier = component_identifier(path.file_stem().unwrap_or("icon"));
            let result = fs::read_to_string(path)
                .map_err(|e| format!("failed to read: {e}"))
                .and_then(|source| {
                    parse_with_options(&source, parse_options).map_err(|e| e.to_string())
                })
                .and_then(|parsed| {
                    generate(&identifier, &parsed, &target).map_err(|e| e.to_string())
                });
            (identifier, result)
        })
        .collect();
    let generate_time = generate_start.elapsed();

    // Write components and flush the index
    let write_start = Instant::now();
    fs::create_dir_all(&out_dir).map_err(|e| OrchestratorError::WriteFailed {
        path: out_dir.clone(),
        message: e.to_string(),
    })?;

    let mut manifest = IndexManifest::new();
    let mut generated = 0usize;
    let mut skipped = Vec::new();
    for (identifier, result) in outcomes {
        match result {
            Ok(spec) => {
                let filename = target.component_filename(&identifier);
                let path = out_dir.join(&filename);
                fs::write(&path, &spec.source_text).map_err(|e| {
                    OrchestratorError::WriteFailed {
                        path: path.clone(),
                        message: e.to_string(),
                    }
                })?;
                if args.emit_source {
                    eprintln!("=== {} ===\n{}", filename, spec.source_text);
                }
                manifest.record_export(&identifier, &format!("./{identifier}"));
                generated += 1;
            }
            Err(reason) => {
                eprintln!("Skipping {identifier}: {reason}");
                skipped.push(SkippedIcon { identifier, reason });
            }
        }
    }

    let index_path = out_dir.join(&index_file);
    fs::write(&index_path, manifest.render()).map_err(|e| OrchestratorError::WriteFailed {
        path: index_path.clone(),
        message: e.to_string(),
    })?;
    let write_time = write_start.elapsed();

    Ok(BatchSummary {
        generated,
        skipped,
        index_entries: manifest.entries().len(),
        timings: args.timings.then(|| Timings {
            scan_ms: scan_time.as_millis(),
            generate_ms: generate_time.as_millis(),
            write_ms: write_time.as_millis(),
        }),
    })
}

fn parse_framework(value: &str) -> Option<Framework> {
    match value.to_ascii_lowercase().as_str() {
        "react" => Some(Framework::React),
        "vue" => Some(Framework::Vue),
        other => {
            eprintln!("Warning: unknown target {other:?} in config, using CLI/default");
            None
        }
    }
}

/// Derives the component identifier from a file stem: PascalCase with an
/// `Icon` suffix (`arrow-down` -> `ArrowDownIcon`).
fn component_identifier(stem: &str) -> String {
    let mut name = String::with_capacity(stem.len() + 4);
    let mut capitalize_next = true;
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            if capitalize_next {
                name.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                name.push(c);
            }
        } else {
            capitalize_next = true;
        }
    }
    if name.is_empty() {
        name.push_str("Unnamed");
    }
    if !name.ends_with("Icon") {
        name.push_str("Icon");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_component_identifier() {
        assert_eq!(component_identifier("arrow-down"), "ArrowDownIcon");
        assert_eq!(component_identifier("call_end_04"), "CallEnd04Icon");
        assert_eq!(component_identifier("archive-icon"), "ArchiveIcon");
        assert_eq!(component_identifier("qr.code"), "QrCodeIcon");
        assert_eq!(component_identifier(""), "UnnamedIcon");
    }

    #[test]
    fn test_parse_framework() {
        assert_eq!(parse_framework("react"), Some(Framework::React));
        assert_eq!(parse_framework("Vue"), Some(Framework::Vue));
        assert_eq!(parse_framework("angular"), None);
    }
}
