//! Slug derivation and the barrel index manifest.

use regex::Regex;
use std::sync::LazyLock;

/// Base URL for documentation preview links embedded in generated
/// component headers.
pub const PREVIEW_BASE_URL: &str = "https://icon-forge.dev/preview";

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").expect("lower-upper boundary pattern"));

static UPPER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([A-Z])([A-Z][a-z])").expect("acronym boundary pattern"));

/// Converts a component identifier into a URL-safe slug: a trailing
/// `Icon` suffix is removed, hyphens are inserted at case boundaries
/// (including acronym runs), and the result is lowercased.
///
/// Used only to build documentation preview URLs, never for file paths.
pub fn to_slug(identifier: &str) -> String {
    let base = identifier
        .strip_suffix("Icon")
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(identifier);
    let hyphenated = LOWER_UPPER.replace_all(base, "$1-$2");
    let hyphenated = UPPER_RUN.replace_all(&hyphenated, "$1-$2");
    hyphenated.to_lowercase()
}

/// Documentation preview URL for one component.
pub fn preview_url(identifier: &str) -> String {
    format!("{PREVIEW_BASE_URL}/{}", to_slug(identifier))
}

/// One entry of the barrel index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    /// The name under which the component is re-exported.
    pub exported_name: String,
    /// The import path the export points at.
    pub import_path: String,
}

/// The barrel index accumulated across all processed icons and flushed
/// once per batch.
#[derive(Debug, Clone, Default)]
pub struct IndexManifest {
    entries: Vec<ExportEntry>,
}

impl IndexManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the export pair for one successfully generated component:
    /// the full identifier plus, when a trailing `Icon` suffix can be
    /// stripped, an alias without it. Both point at the same import path
    /// so consumers can use either spelling.
    pub fn record_export(&mut self, name: &str, import_path: &str) {
        self.entries.push(ExportEntry {
            exported_name: name.to_string(),
            import_path: import_path.to_string(),
        });
        if let Some(alias) = name.strip_suffix("Icon") {
            if !alias.is_empty() {
                self.entries.push(ExportEntry {
                    exported_name: alias.to_string(),
                    import_path: import_path.to_string(),
                });
            }
        }
    }

    /// The recorded entries in insertion order.
    pub fn entries(&self) -> &[ExportEntry] {
        &self.entries
    }

    /// Returns true if no exports were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the manifest as one export statement per entry,
    /// newline-separated, ready to be written to the barrel file.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "export {{ default as {} }} from '{}';\n",
                entry.exported_name, entry.import_path
            ));
        }
        out
    }
}
