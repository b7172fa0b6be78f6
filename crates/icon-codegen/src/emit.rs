//! Emission entry point and the backend trait.

use crate::capabilities::CapabilityDescriptor;
use crate::react::ReactEmitter;
use crate::target::{Framework, TargetConfig};
use crate::vue::VueEmitter;
use icon_parser::{ElementNode, RootDescriptor};
use thiserror::Error;

/// An error raised while building component source text. Recorded per
/// file by the caller; never fatal to the batch.
#[derive(Debug, Clone, Error)]
pub enum EmitError {
    /// The icon body contained no renderable elements.
    #[error("no renderable elements in icon body")]
    EmptyTree,

    /// The component identifier is unusable in the target language.
    #[error("invalid component name: {0:?}")]
    InvalidName(String),

    /// An attribute cannot be expressed in the target syntax.
    #[error("attribute `{0}` cannot be expressed in the target syntax")]
    UnsupportedAttribute(String),

    /// Any other failure while building the component text.
    #[error("emission failed: {0}")]
    Failed(String),
}

/// One emitter backend: cleaned tree plus capability descriptor in,
/// framework-idiomatic component source text out.
pub trait ComponentEmitter {
    /// Renders one component's full source text.
    fn emit(
        &self,
        name: &str,
        root: &RootDescriptor,
        caps: &CapabilityDescriptor,
        tree: &[ElementNode],
    ) -> Result<String, EmitError>;
}

/// Emits component source for the configured target.
pub fn emit(
    name: &str,
    root: &RootDescriptor,
    caps: &CapabilityDescriptor,
    tree: &[ElementNode],
    target: &TargetConfig,
) -> Result<String, EmitError> {
    check_preconditions(name, tree)?;
    match target.framework {
        Framework::React => ReactEmitter::new(target).emit(name, root, caps, tree),
        Framework::Vue => VueEmitter::new(target).emit(name, root, caps, tree),
    }
}

fn check_preconditions(name: &str, tree: &[ElementNode]) -> Result<(), EmitError> {
    if tree.is_empty() {
        return Err(EmitError::EmptyTree);
    }
    let mut chars = name.chars();
    let valid_start = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    if !valid_start || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(EmitError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Formats a numeric default the way the target language writes it:
/// integral values without a trailing `.0`.
pub(crate) fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Escapes an attribute value for inclusion inside double quotes.
pub(crate) fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_rejected() {
        let root = RootDescriptor::default();
        let caps = CapabilityDescriptor::default();
        let err = emit("ArchiveIcon", &root, &caps, &[], &TargetConfig::react()).unwrap_err();
        assert!(matches!(err, EmitError::EmptyTree));
    }

    #[test]
    fn test_invalid_name_rejected() {
        let root = RootDescriptor::default();
        let caps = CapabilityDescriptor::default();
        let tree = vec![ElementNode::leaf("path", Default::default())];
        let err = emit("archive icon", &root, &caps, &tree, &TargetConfig::react()).unwrap_err();
        assert!(matches!(err, EmitError::InvalidName(_)));
    }

    #[test]
    fn test_fmt_number() {
        assert_eq!(fmt_number(24.0), "24");
        assert_eq!(fmt_number(2.0), "2");
        assert_eq!(fmt_number(1.8), "1.8");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"M1 1 "q""#), "M1 1 &quot;q&quot;");
        assert_eq!(escape_attr("a&b"), "a&amp;b");
    }
}
