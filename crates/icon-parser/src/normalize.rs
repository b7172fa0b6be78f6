//! Attribute name normalization and filtering.
//!
//! Raw SVG attributes are hyphenated (`stroke-width`); each emitter target
//! declares which spelling it wants. Attributes injected by tooling must
//! never be copied into generated output, so they are dropped here during
//! parsing rather than downstream.

use smol_str::SmolStr;

/// Attribute names starting with this prefix are never copied through.
const RESERVED_DATA_PREFIX: &str = "data-";

/// Presentational class attribute, stripped from icon sources.
const PRESENTATIONAL_CLASS: &str = "class";

/// Marker substring of attributes injected by design-tool exports.
const INTERNAL_MARKER: &str = "figma";

/// The attribute spelling convention of an emitter target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttrCase {
    /// Keep the source (kebab-case) spelling.
    #[default]
    Preserve,
    /// Rewrite hyphenated names to camelCase (`stroke-width` ->
    /// `strokeWidth`).
    Camel,
}

/// Returns true if the attribute must never appear in generated output.
pub fn is_dropped_attr(name: &str) -> bool {
    name.starts_with(RESERVED_DATA_PREFIX)
        || name == PRESENTATIONAL_CLASS
        || name.contains(INTERNAL_MARKER)
}

/// Applies the target spelling convention to one attribute name.
pub fn apply_case(name: &str, case: AttrCase) -> SmolStr {
    match case {
        AttrCase::Preserve => SmolStr::new(name),
        AttrCase::Camel => to_camel(name),
    }
}

/// Rewrites a hyphenated attribute name to camelCase.
///
/// Names without hyphens (including already-camel names like `viewBox`)
/// pass through unchanged.
pub fn to_camel(name: &str) -> SmolStr {
    if !name.contains('-') {
        return SmolStr::new(name);
    }
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    SmolStr::new(out)
}

/// Maps an attribute name in either spelling back to its canonical
/// kebab-case form, so the analyzer and cleaner can match styling
/// concepts regardless of the target convention the tree was parsed for.
pub fn canonical(name: &str) -> SmolStr {
    if !name.chars().any(|c| c.is_ascii_uppercase()) {
        return SmolStr::new(name);
    }
    let mut out = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    SmolStr::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dropped_attrs() {
        assert!(is_dropped_attr("data-name"));
        assert!(is_dropped_attr("data-testid"));
        assert!(is_dropped_attr("class"));
        assert!(is_dropped_attr("figma:type"));
        assert!(!is_dropped_attr("d"));
        assert!(!is_dropped_attr("stroke-width"));
    }

    #[test]
    fn test_to_camel() {
        assert_eq!(to_camel("stroke-width"), "strokeWidth");
        assert_eq!(to_camel("stroke-linecap"), "strokeLinecap");
        assert_eq!(to_camel("fill-rule"), "fillRule");
        assert_eq!(to_camel("d"), "d");
        assert_eq!(to_camel("viewBox"), "viewBox");
    }

    #[test]
    fn test_canonical_round_trip() {
        assert_eq!(canonical("strokeWidth"), "stroke-width");
        assert_eq!(canonical("stroke-width"), "stroke-width");
        assert_eq!(canonical("fillRule"), "fill-rule");
        assert_eq!(canonical("d"), "d");
    }
}
