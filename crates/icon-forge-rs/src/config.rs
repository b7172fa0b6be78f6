//! Configuration loading.

use camino::Utf8Path;
use serde::Deserialize;
use std::fs;

/// Project configuration read from `iconforge.config.json`.
///
/// Every field is optional; CLI flags take precedence over config values,
/// which take precedence over built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForgeConfig {
    /// Output directory for generated components.
    pub out_dir: Option<String>,

    /// Target framework (`react` or `vue`).
    pub target: Option<String>,

    /// Barrel index filename, relative to the output directory.
    pub index_file: Option<String>,

    /// Glob patterns to ignore during discovery.
    pub ignore: Vec<String>,

    /// Import path of the shared runtime defaults module referenced by
    /// generated components.
    pub defaults_module: Option<String>,
}

impl ForgeConfig {
    /// Loads configuration from the project root, probing the supported
    /// config file names. A missing file yields defaults; an unreadable
    /// or unparsable file warns and yields defaults.
    pub fn load(project_root: &Utf8Path) -> Self {
        let config_files = ["iconforge.config.json", ".iconforgerc.json"];

        for config_file in config_files {
            let config_path = project_root.join(config_file);
            if config_path.exists() {
                return match fs::read_to_string(&config_path)
                    .map_err(|e| e.to_string())
                    .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
                {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", config_path, e);
                        Self::default()
                    }
                };
            }
        }

        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        let config = ForgeConfig::load(root);
        assert!(config.out_dir.is_none());
        assert!(config.ignore.is_empty());
    }

    #[test]
    fn test_config_fields_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        fs::write(
            root.join("iconforge.config.json"),
            r#"{
                "outDir": "src/icons",
                "target": "vue",
                "indexFile": "index.ts",
                "ignore": ["**/draft/**"],
                "defaultsModule": "@acme/icon-defaults"
            }"#,
        )
        .unwrap();
        let config = ForgeConfig::load(root);
        assert_eq!(config.out_dir.as_deref(), Some("src/icons"));
        assert_eq!(config.target.as_deref(), Some("vue"));
        assert_eq!(config.ignore, vec!["**/draft/**"]);
        assert_eq!(config.defaults_module.as_deref(), Some("@acme/icon-defaults"));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        fs::write(root.join("iconforge.config.json"), "{ not json").unwrap();
        let config = ForgeConfig::load(root);
        assert!(config.out_dir.is_none());
    }
}
