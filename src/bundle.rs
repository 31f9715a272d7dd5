// The three companion files that make up one Spine asset.

use thiserror::Error;

/// One named request handed to the engine's asset loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceRequest {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BundleError {
    #[error("some required files failed to load: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("skeleton data is missing from {0}")]
    NoSkeletonData(String),
    #[error("failed to load resource {url}: {message}")]
    Load { url: String, message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpineBundle {
    base: String,
}

impl SpineBundle {
    /// Bundle for a selected catalog entry; `hero.json` and `hero` both name
    /// the `hero` bundle.
    pub fn from_selection(file_name: &str) -> Self {
        Self {
            base: file_name.replacen(".json", "", 1),
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base
    }

    /// Loader key of the skeleton resource.
    pub fn skeleton_key(&self) -> String {
        format!("{}_spine", self.base)
    }

    pub fn skeleton_url(&self) -> String {
        format!("{}.json", self.base)
    }

    pub fn atlas_url(&self) -> String {
        format!("{}.atlas", self.base)
    }

    pub fn texture_url(&self) -> String {
        format!("{}.png", self.base)
    }

    /// Skeleton, atlas and texture, in load order. The atlas and texture are
    /// keyed by their own URL.
    pub fn requests(&self) -> [ResourceRequest; 3] {
        [
            ResourceRequest {
                key: self.skeleton_key(),
                url: self.skeleton_url(),
            },
            ResourceRequest {
                key: self.atlas_url(),
                url: self.atlas_url(),
            },
            ResourceRequest {
                key: self.texture_url(),
                url: self.texture_url(),
            },
        ]
    }

    /// Requests whose key is absent from the loaded set.
    pub fn missing<F>(&self, mut is_loaded: F) -> Vec<ResourceRequest>
    where
        F: FnMut(&str) -> bool,
    {
        self.requests()
            .into_iter()
            .filter(|r| !is_loaded(&r.key))
            .collect()
    }

    /// `Ok` when all three resources are present.
    pub fn check_loaded<F>(&self, is_loaded: F) -> Result<(), BundleError>
    where
        F: FnMut(&str) -> bool,
    {
        let missing = self.missing(is_loaded);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BundleError::Missing(missing.into_iter().map(|r| r.url).collect()))
        }
    }
}
