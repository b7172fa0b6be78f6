//! Capability analysis: which styling concepts does an icon actually use.

use icon_parser::{canonical, ElementNode, RootDescriptor};

/// Derived, read-only summary of one icon's styling model, computed once
/// per icon and consumed by both the cleaner and the emitters.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityDescriptor {
    /// Any element (root or descendant) carries a meaningful stroke.
    pub has_stroke: bool,
    /// Any element carries a meaningful fill.
    pub has_fill: bool,
    /// Any element carries a meaningful stroke or stroke-width.
    pub has_stroke_width: bool,
    /// First non-empty `stroke-linecap`, root-first then document order.
    pub stroke_linecap: Option<String>,
    /// First non-empty `stroke-linejoin`, root-first then document order.
    pub stroke_linejoin: Option<String>,
    /// The largest numeric stroke-width observed anywhere, if any.
    pub max_stroke_width: Option<f32>,
    /// Fallback width for components that declare stroke-width attributes:
    /// the maximum observed value, or `2.0` when none parsed.
    pub default_stroke_width: f32,
    /// At least one descendant declares a stroke AND at least one declares
    /// a fill, so per-element styling intent must not be collapsed into a
    /// single uniform color.
    pub has_mixed_styling: bool,
}

impl Default for CapabilityDescriptor {
    fn default() -> Self {
        Self {
            has_stroke: false,
            has_fill: false,
            has_stroke_width: false,
            stroke_linecap: None,
            stroke_linejoin: None,
            max_stroke_width: None,
            default_stroke_width: 2.0,
            has_mixed_styling: false,
        }
    }
}

/// A stroke/fill value is meaningful iff present, non-empty, not `none`,
/// and not `0`.
fn is_meaningful(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "none" && value != "0"
}

struct Analysis {
    caps: CapabilityDescriptor,
    stroke_elements: u32,
    fill_elements: u32,
    saw_styling: bool,
}

/// Analyzes a parsed tree (plus the root tag's attributes) into a
/// capability descriptor. Pure function, single depth-first pass.
///
/// The root `<svg>` tag is treated as a pseudo-element: its meaningful
/// stroke/fill count toward the mixed-styling decision exactly like a
/// descendant's would.
pub fn analyze(tree: &[ElementNode], root: &RootDescriptor) -> CapabilityDescriptor {
    let mut analysis = Analysis {
        caps: CapabilityDescriptor::default(),
        stroke_elements: 0,
        fill_elements: 0,
        saw_styling: false,
    };

    visit_root(root, &mut analysis);
    for node in tree {
        visit_element(node, &mut analysis);
    }

    analysis.caps.has_mixed_styling = analysis.stroke_elements > 0 && analysis.fill_elements > 0;
    if !analysis.saw_styling {
        // An icon with zero explicit styling is assumed to be filled.
        analysis.caps.has_fill = true;
    }
    if let Some(max) = analysis.caps.max_stroke_width {
        analysis.caps.default_stroke_width = max;
    }
    analysis.caps
}

fn visit_root(root: &RootDescriptor, analysis: &mut Analysis) {
    if root.stroke.as_deref().is_some_and(is_meaningful) {
        analysis.caps.has_stroke = true;
        analysis.caps.has_stroke_width = true;
        analysis.stroke_elements += 1;
        analysis.saw_styling = true;
    }
    if root.fill.as_deref().is_some_and(is_meaningful) {
        analysis.caps.has_fill = true;
        analysis.fill_elements += 1;
        analysis.saw_styling = true;
    }
    if let Some(width) = root.stroke_width.as_deref() {
        if is_meaningful(width) {
            analysis.caps.has_stroke_width = true;
            analysis.saw_styling = true;
            record_width(width, analysis);
        }
    }
    if analysis.caps.stroke_linecap.is_none() {
        analysis.caps.stroke_linecap = root
            .stroke_linecap
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string);
    }
    if analysis.caps.stroke_linejoin.is_none() {
        analysis.caps.stroke_linejoin = root
            .stroke_linejoin
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string);
    }
}

fn visit_element(node: &ElementNode, analysis: &mut Analysis) {
    for (name, value) in &node.attributes {
        match canonical(name).as_str() {
            "stroke" if is_meaningful(value) => {
                analysis.caps.has_stroke = true;
                analysis.caps.has_stroke_width = true;
                analysis.stroke_elements += 1;
                analysis.saw_styling = true;
            }
            "fill" if is_meaningful(value) => {
                analysis.caps.has_fill = true;
                analysis.fill_elements += 1;
                analysis.saw_styling = true;
            }
            "stroke-width" if is_meaningful(value) => {
                analysis.caps.has_stroke_width = true;
                analysis.saw_styling = true;
                record_width(value, analysis);
            }
            "stroke-linecap" => {
                if analysis.caps.stroke_linecap.is_none() && !value.trim().is_empty() {
                    analysis.caps.stroke_linecap = Some(value.trim().to_string());
                }
            }
            "stroke-linejoin" => {
                if analysis.caps.stroke_linejoin.is_none() && !value.trim().is_empty() {
                    analysis.caps.stroke_linejoin = Some(value.trim().to_string());
                }
            }
            _ => {}
        }
    }

    for child in node.child_nodes() {
        visit_element(child, analysis);
    }
}

fn record_width(value: &str, analysis: &mut Analysis) {
    if let Ok(width) = value.trim().parse::<f32>() {
        let max = analysis.caps.max_stroke_width.map_or(width, |m| m.max(width));
        analysis.caps.max_stroke_width = Some(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icon_parser::parse;

    fn analyze_source(source: &str) -> CapabilityDescriptor {
        let result = parse(source).unwrap();
        analyze(&result.children, &result.root)
    }

    #[test]
    fn test_stroke_only_icon() {
        let caps = analyze_source(
            r#"<svg stroke="currentColor" stroke-width="2" stroke-linecap="round">
                <path d="M4 4h16"/>
            </svg>"#,
        );
        assert!(caps.has_stroke);
        assert!(caps.has_stroke_width);
        assert!(!caps.has_fill);
        assert!(!caps.has_mixed_styling);
        assert_eq!(caps.stroke_linecap.as_deref(), Some("round"));
    }

    #[test]
    fn test_fill_only_icon() {
        let caps = analyze_source(
            r#"<svg><path d="M4 4h16" fill="currentColor" fill-rule="evenodd"/></svg>"#,
        );
        assert!(caps.has_fill);
        assert!(!caps.has_stroke);
        assert!(!caps.has_mixed_styling);
    }

    #[test]
    fn test_none_values_are_not_meaningful() {
        let caps = analyze_source(
            r#"<svg fill="none"><path d="M4 4h16" stroke="currentColor"/></svg>"#,
        );
        assert!(caps.has_stroke);
        assert!(!caps.has_fill);
        assert!(!caps.has_mixed_styling);
    }

    #[test]
    fn test_mixed_styling_across_descendants() {
        let caps = analyze_source(
            r##"<svg>
                <path d="M4 4h16" stroke="currentColor"/>
                <circle cx="12" cy="12" r="3" fill="#22C55E"/>
            </svg>"##,
        );
        assert!(caps.has_mixed_styling);
        assert!(caps.has_stroke);
        assert!(caps.has_fill);
    }

    #[test]
    fn test_root_counts_toward_mixed_styling() {
        // The root is a pseudo-element: root stroke + descendant fill is
        // mixed styling.
        let caps = analyze_source(
            r##"<svg stroke="currentColor">
                <circle cx="12" cy="12" r="3" fill="#EF4444"/>
            </svg>"##,
        );
        assert!(caps.has_mixed_styling);
    }

    #[test]
    fn test_unstyled_root_with_single_concept_is_not_mixed() {
        let caps = analyze_source(
            r#"<svg>
                <path d="M4 4h16" stroke="currentColor"/>
                <path d="M4 12h16" stroke="currentColor"/>
            </svg>"#,
        );
        assert!(!caps.has_mixed_styling);
    }

    #[test]
    fn test_unstyled_icon_defaults_to_fill() {
        let caps = analyze_source(r#"<svg><path d="M4 4h16"/></svg>"#);
        assert!(caps.has_fill);
        assert!(!caps.has_stroke);
        assert!(!caps.has_stroke_width);
    }

    #[test]
    fn test_max_stroke_width_retained() {
        let caps = analyze_source(
            r#"<svg>
                <path d="M4 4h16" stroke="currentColor" stroke-width="1.5"/>
                <path d="M4 12h16" stroke="currentColor" stroke-width="2.5"/>
            </svg>"#,
        );
        assert_eq!(caps.max_stroke_width, Some(2.5));
        assert_eq!(caps.default_stroke_width, 2.5);
    }

    #[test]
    fn test_linecap_first_wins_root_before_descendants() {
        let caps = analyze_source(
            r#"<svg stroke-linecap="square">
                <path d="M4 4h16" stroke="currentColor" stroke-linecap="round"/>
            </svg>"#,
        );
        assert_eq!(caps.stroke_linecap.as_deref(), Some("square"));
    }

    #[test]
    fn test_camel_case_tree_is_analyzed_identically() {
        let result = icon_parser::parse_with_options(
            r#"<svg><path d="M4 4h16" stroke="currentColor" stroke-width="2"/></svg>"#,
            icon_parser::ParseOptions {
                attr_case: icon_parser::AttrCase::Camel,
            },
        )
        .unwrap();
        let caps = analyze(&result.children, &result.root);
        assert!(caps.has_stroke);
        assert!(caps.has_stroke_width);
    }
}
