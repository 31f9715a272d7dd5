use super::catalog::{parse_catalog, CatalogError, CatalogKind};
use super::config::PreviewConfig;
use super::dom::js_err;
use super::status::StatusLog;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn request_catalog(url: &str, status: &StatusLog) -> Result<Vec<String>, CatalogError> {
    let window = web::window().ok_or_else(|| CatalogError::Request("no window".to_string()))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| CatalogError::Request(js_err(&e)))?
        .dyn_into()
        .map_err(|e| CatalogError::Request(js_err(&e)))?;
    status.info(&format!("server response status: {}", response.status()));
    if !response.ok() {
        return parse_catalog(response.status(), &response.status_text(), "");
    }

    let text_promise = response
        .text()
        .map_err(|e| CatalogError::Request(js_err(&e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| CatalogError::Request(js_err(&e)))?
        .as_string()
        .unwrap_or_default();
    status.info(&format!("server response body: {}", body));
    parse_catalog(response.status(), &response.status_text(), &body)
}

/// Fetch one catalog. Failures are reported and yield an empty list.
pub async fn fetch_catalog(config: &PreviewConfig, kind: CatalogKind, status: &StatusLog) -> Vec<String> {
    let url = config.catalog_url(kind);
    status.info(&format!("fetching {} list from {}", kind.label(), url));
    match request_catalog(&url, status).await {
        Ok(files) => {
            status.info(&format!("found {} {}", files.len(), kind.label()));
            files
        }
        Err(e) => {
            status.warn(&format!("failed to fetch {} list: {}", kind.label(), e));
            Vec::new()
        }
    }
}
