//! Tree types for parsed SVG icon markup.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// One SVG markup element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    /// The tag name (`path`, `circle`, `g`, ...).
    pub tag: SmolStr,
    /// Attributes in source order, already normalized for the target
    /// spelling. Insertion order is preserved so output is deterministic.
    pub attributes: IndexMap<SmolStr, String>,
    /// The element's content.
    pub children: NodeChildren,
}

/// The content of an element.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeChildren {
    /// Self-closing or empty element.
    #[default]
    None,
    /// Inline text content.
    Text(String),
    /// Nested elements in document order.
    Nodes(Vec<ElementNode>),
}

impl ElementNode {
    /// Creates a leaf element with no children.
    pub fn leaf(tag: impl Into<SmolStr>, attributes: IndexMap<SmolStr, String>) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children: NodeChildren::None,
        }
    }

    /// Returns the nested child elements, or an empty slice for leaf and
    /// text nodes.
    pub fn child_nodes(&self) -> &[ElementNode] {
        match &self.children {
            NodeChildren::Nodes(nodes) => nodes,
            _ => &[],
        }
    }

    /// Looks up an attribute value by its exact (normalized) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Metadata lifted from the top-level `<svg>` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct RootDescriptor {
    /// The `viewBox` attribute, defaulting to `0 0 24 24` when absent.
    pub view_box: String,
    /// The root's own `stroke`, if declared.
    pub stroke: Option<String>,
    /// The root's own `fill`, if declared.
    pub fill: Option<String>,
    /// The root's own `stroke-width`, if declared.
    pub stroke_width: Option<String>,
    /// The root's own `stroke-linecap`, if declared.
    pub stroke_linecap: Option<String>,
    /// The root's own `stroke-linejoin`, if declared.
    pub stroke_linejoin: Option<String>,
}

impl Default for RootDescriptor {
    fn default() -> Self {
        Self {
            view_box: "0 0 24 24".to_string(),
            stroke: None,
            fill: None,
            stroke_width: None,
            stroke_linecap: None,
            stroke_linejoin: None,
        }
    }
}
