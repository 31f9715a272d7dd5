// Runtime configuration.
//
// Defaults come from `constants.rs`; the host page may override them with
// `data-*` attributes on `<body>` (`data-catalog-origin`, `data-pixi-url`,
// `data-spine-url`, `data-log-level`).

use super::catalog::CatalogKind;
use super::constants::{DEFAULT_PIXI_URL, DEFAULT_SPINE_URL};

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewConfig {
    /// Origin both catalog endpoints are resolved against. Empty means the
    /// page's own origin.
    pub catalog_origin: String,
    pub pixi_url: String,
    pub spine_url: String,
    pub log_level: log::Level,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            catalog_origin: String::new(),
            pixi_url: DEFAULT_PIXI_URL.to_string(),
            spine_url: DEFAULT_SPINE_URL.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl PreviewConfig {
    /// Build a config from a key lookup (dataset keys in camelCase). Missing or
    /// blank values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            catalog_origin: get("catalogOrigin").unwrap_or(defaults.catalog_origin),
            pixi_url: get("pixiUrl").unwrap_or(defaults.pixi_url),
            spine_url: get("spineUrl").unwrap_or(defaults.spine_url),
            log_level: get("logLevel")
                .and_then(|v| v.parse::<log::Level>().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn catalog_url(&self, kind: CatalogKind) -> String {
        kind.url(&self.catalog_origin)
    }

    /// Runtime scripts in load order, each with the label used in status messages.
    pub fn scripts(&self) -> [(&'static str, &str); 2] {
        [("PIXI.js", self.pixi_url.as_str()), ("pixi-spine", self.spine_url.as_str())]
    }
}
