// File catalogs served by the preview host.
//
// Both lists are a plain JSON array of file names. A failed request or an
// unreadable body is reported by the caller and treated as an empty catalog.

use super::constants::{BG_IMAGES_PATH, SPINE_FILES_PATH};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKind {
    SpineFiles,
    BackgroundImages,
}

impl CatalogKind {
    pub fn path(self) -> &'static str {
        match self {
            CatalogKind::SpineFiles => SPINE_FILES_PATH,
            CatalogKind::BackgroundImages => BG_IMAGES_PATH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::SpineFiles => "spine files",
            CatalogKind::BackgroundImages => "background images",
        }
    }

    /// Endpoint URL under `origin`. An empty origin yields a same-origin path.
    pub fn url(self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("server responded with {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("malformed catalog: {0}")]
    Malformed(String),
    #[error("request failed: {0}")]
    Request(String),
}

/// Decode a catalog response. Only 2xx statuses with a JSON array of strings
/// are accepted.
pub fn parse_catalog(status: u16, status_text: &str, body: &str) -> Result<Vec<String>, CatalogError> {
    if !(200..=299).contains(&status) {
        return Err(CatalogError::Status {
            status,
            status_text: status_text.to_string(),
        });
    }
    serde_json::from_str::<Vec<String>>(body).map_err(|e| CatalogError::Malformed(e.to_string()))
}

/// One `<option>` of a selection list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn file(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }

    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// Options for a catalog list, with an optional leading placeholder.
pub fn catalog_options(files: &[String], placeholder: Option<&str>) -> Vec<SelectOption> {
    placeholder
        .map(SelectOption::placeholder)
        .into_iter()
        .chain(files.iter().map(|f| SelectOption::file(f)))
        .collect()
}
