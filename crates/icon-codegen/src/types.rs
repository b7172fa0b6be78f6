//! Output types of one full pipeline run.

use crate::capabilities::CapabilityDescriptor;
use icon_parser::{ElementNode, RootDescriptor};

/// Everything produced for one icon. Only `source_text` outlives the
/// pipeline; the rest is intermediate state kept for inspection.
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    /// The component identifier (PascalCase).
    pub name: String,
    /// Metadata from the source's `<svg>` tag.
    pub root: RootDescriptor,
    /// The derived styling capabilities.
    pub capabilities: CapabilityDescriptor,
    /// The cleaned element tree the source text was rendered from.
    pub cleaned_tree: Vec<ElementNode>,
    /// The final emitted file content, written verbatim by the caller.
    pub source_text: String,
}
