//! Emitter target configuration.
//!
//! Everything that differs between frameworks lives here as data: file
//! extension, attribute spelling, literal defaults, and the import path
//! of the shared runtime configuration module. A new target declares its
//! own values without touching shared logic.

use icon_parser::AttrCase;

/// The component frameworks we can emit for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    /// React function components (`.tsx`), unrolled literal markup.
    React,
    /// Vue render-function components (`.ts`), generic recursive renderer.
    Vue,
}

/// Per-target emission parameters.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    /// The framework backend to use.
    pub framework: Framework,
    /// Extension of generated component files, without the dot.
    pub file_extension: &'static str,
    /// Attribute spelling the tree must be parsed with for this target.
    pub attr_case: AttrCase,
    /// Literal fallback for the `size` prop.
    pub default_size: u32,
    /// Literal fallback for the `strokeWidth` prop.
    pub default_stroke_width: f64,
    /// Import path of the shared runtime configuration module that
    /// generated components read their second-tier defaults from.
    pub defaults_module: String,
}

impl TargetConfig {
    /// The React target: camelCase attributes, 24px/2 defaults.
    pub fn react() -> Self {
        Self {
            framework: Framework::React,
            file_extension: "tsx",
            attr_case: AttrCase::Camel,
            default_size: 24,
            default_stroke_width: 2.0,
            defaults_module: "../defaults".to_string(),
        }
    }

    /// The Vue target: kebab-case attributes, 16px/1.8 defaults.
    pub fn vue() -> Self {
        Self {
            framework: Framework::Vue,
            file_extension: "ts",
            attr_case: AttrCase::Preserve,
            default_size: 16,
            default_stroke_width: 1.8,
            defaults_module: "../defaults".to_string(),
        }
    }

    /// Builds the config for a framework.
    pub fn for_framework(framework: Framework) -> Self {
        match framework {
            Framework::React => Self::react(),
            Framework::Vue => Self::vue(),
        }
    }

    /// Filename of one generated component.
    pub fn component_filename(&self, name: &str) -> String {
        format!("{name}.{}", self.file_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_defaults_differ() {
        let react = TargetConfig::react();
        let vue = TargetConfig::vue();
        assert_eq!(react.default_size, 24);
        assert_eq!(vue.default_size, 16);
        assert_eq!(react.default_stroke_width, 2.0);
        assert_eq!(vue.default_stroke_width, 1.8);
        assert_eq!(react.attr_case, AttrCase::Camel);
        assert_eq!(vue.attr_case, AttrCase::Preserve);
    }

    #[test]
    fn test_component_filename() {
        assert_eq!(
            TargetConfig::react().component_filename("ArchiveIcon"),
            "ArchiveIcon.tsx"
        );
        assert_eq!(
            TargetConfig::vue().component_filename("ArchiveIcon"),
            "ArchiveIcon.ts"
        );
    }
}
