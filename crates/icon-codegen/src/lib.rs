//! Component code generation for icon-forge-rs.
//!
//! This crate takes a parsed icon tree and produces framework-idiomatic
//! component source text:
//! - Capability analysis (stroke-based vs fill-based vs mixed styling)
//! - Attribute cleaning (strip what the component supplies uniformly)
//! - Two emitter backends behind one trait: unrolled literal TSX for
//!   React, a generic recursive renderer for Vue
//! - Slug derivation and the barrel index manifest
//!
//! # Example
//!
//! ```
//! use icon_codegen::{generate, TargetConfig};
//! use icon_parser::{parse_with_options, ParseOptions};
//!
//! let target = TargetConfig::react();
//! let parsed = parse_with_options(
//!     r#"<svg stroke="currentColor"><path d="M4 4h16"/></svg>"#,
//!     ParseOptions { attr_case: target.attr_case },
//! )
//! .unwrap();
//! let spec = generate("ArchiveIcon", &parsed, &target).unwrap();
//! assert!(spec.source_text.contains("export default ArchiveIcon;"));
//! ```

mod capabilities;
mod clean;
mod emit;
mod naming;
mod react;
mod target;
mod types;
mod vue;

pub use capabilities::{analyze, CapabilityDescriptor};
pub use clean::clean;
pub use emit::{emit, ComponentEmitter, EmitError};
pub use naming::{preview_url, to_slug, ExportEntry, IndexManifest, PREVIEW_BASE_URL};
pub use react::ReactEmitter;
pub use target::{Framework, TargetConfig};
pub use types::ComponentSpec;
pub use vue::VueEmitter;

use icon_parser::ParseResult;

/// Runs analysis, cleaning, and emission for one parsed icon.
///
/// The parse must have used the target's attribute spelling (see
/// [`TargetConfig::attr_case`]).
pub fn generate(
    name: &str,
    parsed: &ParseResult,
    target: &TargetConfig,
) -> Result<ComponentSpec, EmitError> {
    let capabilities = analyze(&parsed.children, &parsed.root);
    let cleaned_tree = clean(&parsed.children, &capabilities);
    let source_text = emit(name, &parsed.root, &capabilities, &cleaned_tree, target)?;
    Ok(ComponentSpec {
        name: name.to_string(),
        root: parsed.root.clone(),
        capabilities,
        cleaned_tree,
        source_text,
    })
}
