//! SVG icon parser for icon-forge-rs.
//!
//! This crate turns one hand-authored SVG icon source into an ordered
//! element tree plus a descriptor of the root `<svg>` tag:
//! - Regex-driven recursive descent scanner over a restricted tag grammar
//! - Attribute normalization (forbidden-attribute filtering, per-target
//!   spelling)
//! - Tree types consumed by the analyzer, cleaner, and emitters
//!
//! # Example
//!
//! ```
//! use icon_parser::parse;
//!
//! let source = r#"<svg viewBox="0 0 24 24" stroke="currentColor">
//!     <path d="M4 4h16v16H4z"/>
//! </svg>"#;
//!
//! let result = parse(source).unwrap();
//! assert_eq!(result.root.view_box, "0 0 24 24");
//! assert_eq!(result.children.len(), 1);
//! ```

mod ast;
mod error;
mod normalize;
mod scanner;

pub use ast::{ElementNode, NodeChildren, RootDescriptor};
pub use error::{ParseError, ParseErrorKind};
pub use normalize::{apply_case, canonical, is_dropped_attr, to_camel, AttrCase};

/// Options for parsing icon sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// The attribute spelling convention of the emitter target the tree
    /// is being parsed for.
    pub attr_case: AttrCase,
}

/// The result of parsing one icon source.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Metadata from the top-level `<svg>` tag.
    pub root: RootDescriptor,
    /// The root's child elements in document order.
    pub children: Vec<ElementNode>,
}

/// Parses an SVG icon source into an element tree.
///
/// Fails with a malformed-source error when no `<svg>` opening tag (or no
/// matching `</svg>`) can be located; callers skip the file and continue
/// with the rest of the batch.
pub fn parse(source: &str) -> Result<ParseResult, ParseError> {
    parse_with_options(source, ParseOptions::default())
}

/// Parses an SVG icon source with explicit options.
pub fn parse_with_options(
    source: &str,
    options: ParseOptions,
) -> Result<ParseResult, ParseError> {
    scanner::parse_document(source, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_icon() {
        let result = parse(r#"<svg viewBox="0 0 16 16"><path d="M1 1h14"/></svg>"#).unwrap();
        assert_eq!(result.root.view_box, "0 0 16 16");
        assert_eq!(result.children.len(), 1);
        assert_eq!(result.children[0].tag, "path");
    }

    #[test]
    fn test_root_style_attributes() {
        let source = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="12" cy="12" r="10"/>
        </svg>"#;
        let result = parse(source).unwrap();
        assert_eq!(result.root.stroke.as_deref(), Some("currentColor"));
        assert_eq!(result.root.fill.as_deref(), Some("none"));
        assert_eq!(result.root.stroke_width.as_deref(), Some("2"));
        assert_eq!(result.root.stroke_linecap.as_deref(), Some("round"));
        assert_eq!(result.root.stroke_linejoin.as_deref(), Some("round"));
    }

    #[test]
    fn test_view_box_default() {
        let result = parse(r#"<svg><path d="M1 1"/></svg>"#).unwrap();
        assert_eq!(result.root.view_box, "0 0 24 24");
    }

    #[test]
    fn test_missing_root_is_malformed() {
        let err = parse("<div>not an icon</div>").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::MissingRoot));
    }

    #[test]
    fn test_unclosed_root_is_malformed() {
        let err = parse(r#"<svg viewBox="0 0 24 24"><path d="M1 1"/>"#).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnclosedRoot));
    }

    #[test]
    fn test_empty_body_parses_to_no_children() {
        let result = parse("<svg></svg>").unwrap();
        assert!(result.children.is_empty());
    }

    #[test]
    fn test_xml_prolog_ignored() {
        let source = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><path d=\"M1 1\"/></svg>";
        let result = parse(source).unwrap();
        assert_eq!(result.children.len(), 1);
    }
}
