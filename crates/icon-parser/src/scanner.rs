//! Regex-driven recursive descent scanner for icon markup.
//!
//! This is intentionally not an XML parser. Icon sources are a narrow,
//! hand-authored subset of SVG, and the scanner trades
//! correctness-on-arbitrary-input for simplicity: it matches tag starts
//! with a pattern, finds closing tags by first-occurrence scan, and
//! tolerates missing closers by treating the element as self-closing.
//! The one structural assumption is that same-named tags are not nested
//! inside each other in a way that defeats a first-match search.

use crate::ast::{ElementNode, NodeChildren, RootDescriptor};
use crate::error::{ParseError, ParseErrorKind};
use crate::normalize::{apply_case, is_dropped_attr, AttrCase};
use crate::{ParseOptions, ParseResult};
use indexmap::IndexMap;
use regex::Regex;
use smol_str::SmolStr;
use std::sync::LazyLock;

static SVG_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b([^>]*)>").expect("svg open pattern"));

static TAG_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([A-Za-z][A-Za-z0-9_-]*)((?:"[^"]*"|'[^']*'|[^>"'])*?)(/?)>"#)
        .expect("tag start pattern")
});

static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][A-Za-z0-9_:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute pattern")
});

/// Parses one icon source into a root descriptor and its element tree.
pub(crate) fn parse_document(
    source: &str,
    options: &ParseOptions,
) -> Result<ParseResult, ParseError> {
    let caps = SVG_OPEN
        .captures(source)
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingRoot))?;
    let open = caps
        .get(0)
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingRoot))?;
    let root = root_descriptor(caps.get(1).map_or("", |m| m.as_str()));

    let rest = &source[open.end()..];
    let inner_end = rest
        .find("</svg>")
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnclosedRoot))?;

    let children = scan_nodes(&rest[..inner_end], options.attr_case);
    Ok(ParseResult { root, children })
}

/// Extracts `viewBox` and root style attributes from the raw text of the
/// `<svg ...>` opening tag. Descendant attributes are never consulted.
fn root_descriptor(raw_attrs: &str) -> RootDescriptor {
    let mut root = RootDescriptor::default();
    for caps in ATTR.captures_iter(raw_attrs) {
        let value = attr_value(&caps);
        match &caps[1] {
            "viewBox" => root.view_box = value.to_string(),
            "stroke" => root.stroke = Some(value.to_string()),
            "fill" => root.fill = Some(value.to_string()),
            "stroke-width" => root.stroke_width = Some(value.to_string()),
            "stroke-linecap" => root.stroke_linecap = Some(value.to_string()),
            "stroke-linejoin" => root.stroke_linejoin = Some(value.to_string()),
            _ => {}
        }
    }
    root
}

/// Returns the value of a matched attribute, from whichever quote style
/// captured it.
fn attr_value<'t>(caps: &regex::Captures<'t>) -> &'t str {
    caps.get(2)
        .or_else(|| caps.get(3))
        .map_or("", |m| m.as_str())
}

/// Collects the attributes of one element, dropping forbidden names and
/// applying the target spelling. Source order is preserved.
fn collect_attrs(raw_attrs: &str, case: AttrCase) -> IndexMap<SmolStr, String> {
    let mut attrs = IndexMap::new();
    for caps in ATTR.captures_iter(raw_attrs) {
        let name = &caps[1];
        if is_dropped_attr(name) {
            continue;
        }
        attrs.insert(apply_case(name, case), attr_value(&caps).to_string());
    }
    attrs
}

/// Scans `content` for elements in document order, recursing into
/// non-self-closing tags.
fn scan_nodes(content: &str, case: AttrCase) -> Vec<ElementNode> {
    let mut nodes = Vec::new();
    let mut cursor = 0;

    while let Some(caps) = TAG_START.captures_at(content, cursor) {
        let Some(open) = caps.get(0) else { break };
        let tag = SmolStr::new(&caps[1]);
        let attributes = collect_attrs(caps.get(2).map_or("", |m| m.as_str()), case);
        let self_closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());

        if self_closing {
            nodes.push(ElementNode {
                tag,
                attributes,
                children: NodeChildren::None,
            });
            cursor = open.end();
            continue;
        }

        let close = format!("</{tag}>");
        match content[open.end()..].find(&close) {
            Some(rel) => {
                let inner = &content[open.end()..open.end() + rel];
                let children = if inner.contains('<') {
                    NodeChildren::Nodes(scan_nodes(inner, case))
                } else if inner.trim().is_empty() {
                    NodeChildren::None
                } else {
                    NodeChildren::Text(inner.trim().to_string())
                };
                nodes.push(ElementNode {
                    tag,
                    attributes,
                    children,
                });
                cursor = open.end() + rel + close.len();
            }
            None => {
                // No matching closing tag: tolerate it as self-closing.
                nodes.push(ElementNode {
                    tag,
                    attributes,
                    children: NodeChildren::None,
                });
                cursor = open.end();
            }
        }
    }

    nodes
}
