//! Attribute cleaning: strip what the generated component will supply.

use crate::capabilities::CapabilityDescriptor;
use icon_parser::{canonical, ElementNode, NodeChildren};
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Attributes the generated component applies uniformly at render time.
/// Stripped from every element unless the icon uses mixed styling.
static UNIFORM_ATTRS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    ["stroke", "fill", "stroke-width", "stroke-linecap", "stroke-linejoin"]
        .into_iter()
        .collect()
});

/// Shape-local rendering intent, never safely defaulted: preserved
/// unconditionally.
static PRESERVED_ATTRS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "fill-rule",
        "clip-rule",
        "clip-path",
        "opacity",
        "stroke-dasharray",
        "stroke-dashoffset",
        "stroke-miterlimit",
    ]
    .into_iter()
    .collect()
});

/// Produces a new tree with the same shape and a subset of attributes.
///
/// For mixed-styling icons the uniformly-applied attributes are preserved
/// verbatim, because uniform substitution would destroy per-element
/// intent. The input tree is never mutated.
pub fn clean(tree: &[ElementNode], caps: &CapabilityDescriptor) -> Vec<ElementNode> {
    tree.iter().map(|node| clean_node(node, caps)).collect()
}

fn clean_node(node: &ElementNode, caps: &CapabilityDescriptor) -> ElementNode {
    let attributes = node
        .attributes
        .iter()
        .filter(|(name, _)| keep_attr(name, caps))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    let children = match &node.children {
        NodeChildren::Nodes(kids) => {
            NodeChildren::Nodes(kids.iter().map(|kid| clean_node(kid, caps)).collect())
        }
        other => other.clone(),
    };

    ElementNode {
        tag: node.tag.clone(),
        attributes,
        children,
    }
}

fn keep_attr(name: &str, caps: &CapabilityDescriptor) -> bool {
    let canon = canonical(name);
    if PRESERVED_ATTRS.contains(canon.as_str()) {
        return true;
    }
    if UNIFORM_ATTRS.contains(canon.as_str()) {
        return caps.has_mixed_styling;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::analyze;
    use icon_parser::parse;

    fn pipeline(source: &str) -> (Vec<ElementNode>, CapabilityDescriptor) {
        let result = parse(source).unwrap();
        let caps = analyze(&result.children, &result.root);
        let cleaned = clean(&result.children, &caps);
        (cleaned, caps)
    }

    fn count_attr(tree: &[ElementNode], name: &str) -> usize {
        tree.iter()
            .map(|node| {
                let own = usize::from(node.attr(name).is_some());
                own + count_attr(node.child_nodes(), name)
            })
            .sum()
    }

    #[test]
    fn test_uniform_attrs_stripped_for_plain_icon() {
        let (cleaned, caps) = pipeline(
            r#"<svg>
                <path d="M4 4h16" stroke="currentColor" stroke-width="2"
                    stroke-linecap="round" stroke-linejoin="round"/>
            </svg>"#,
        );
        assert!(!caps.has_mixed_styling);
        for name in ["stroke", "fill", "stroke-width", "stroke-linecap", "stroke-linejoin"] {
            assert_eq!(count_attr(&cleaned, name), 0, "{name} should be stripped");
        }
        assert_eq!(count_attr(&cleaned, "d"), 1);
    }

    #[test]
    fn test_shape_shading_attrs_always_preserved() {
        let (cleaned, _) = pipeline(
            r#"<svg>
                <path d="M4 4h16" fill="currentColor" fill-rule="evenodd"
                    clip-rule="evenodd" opacity="0.4" stroke-dasharray="2 2"/>
            </svg>"#,
        );
        assert_eq!(count_attr(&cleaned, "fill"), 0);
        assert_eq!(count_attr(&cleaned, "fill-rule"), 1);
        assert_eq!(count_attr(&cleaned, "clip-rule"), 1);
        assert_eq!(count_attr(&cleaned, "opacity"), 1);
        assert_eq!(count_attr(&cleaned, "stroke-dasharray"), 1);
    }

    #[test]
    fn test_mixed_styling_preserves_everything() {
        let source = r##"<svg>
            <path d="M4 4h16" stroke="currentColor" stroke-width="2"/>
            <circle cx="12" cy="12" r="3" fill="#22C55E"/>
        </svg>"##;
        let (cleaned, caps) = pipeline(source);
        assert!(caps.has_mixed_styling);
        assert_eq!(count_attr(&cleaned, "stroke"), 1);
        assert_eq!(count_attr(&cleaned, "stroke-width"), 1);
        assert_eq!(count_attr(&cleaned, "fill"), 1);
        assert_eq!(cleaned[0].attr("stroke"), Some("currentColor"));
        assert_eq!(cleaned[1].attr("fill"), Some("#22C55E"));
    }

    #[test]
    fn test_nested_children_cleaned_recursively() {
        let (cleaned, _) = pipeline(
            r#"<svg>
                <g stroke="currentColor">
                    <path d="M4 4h16" stroke="currentColor"/>
                </g>
            </svg>"#,
        );
        assert_eq!(count_attr(&cleaned, "stroke"), 0);
        assert_eq!(cleaned[0].child_nodes().len(), 1);
    }

    #[test]
    fn test_original_tree_untouched() {
        let result = parse(r#"<svg><path d="M4 4h16" stroke="currentColor"/></svg>"#).unwrap();
        let caps = analyze(&result.children, &result.root);
        let _cleaned = clean(&result.children, &caps);
        assert_eq!(result.children[0].attr("stroke"), Some("currentColor"));
    }

    #[test]
    fn test_camel_spelled_attrs_matched_by_concept() {
        let result = icon_parser::parse_with_options(
            r#"<svg><path d="M4 4h16" stroke="currentColor" stroke-width="2"/></svg>"#,
            icon_parser::ParseOptions {
                attr_case: icon_parser::AttrCase::Camel,
            },
        )
        .unwrap();
        let caps = analyze(&result.children, &result.root);
        let cleaned = clean(&result.children, &caps);
        assert!(cleaned[0].attr("strokeWidth").is_none());
        assert!(cleaned[0].attr("stroke").is_none());
        assert_eq!(cleaned[0].attr("d"), Some("M4 4h16"));
    }
}
