//! Runtime dependency loading.
//!
//! PIXI.js and pixi-spine are injected as `<script>` tags one after the other;
//! pixi-spine registers itself on the `PIXI` global, so the order matters.

use super::config::PreviewConfig;
use super::status::StatusLog;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to load {name} from {url}")]
    ScriptLoad { name: String, url: String },
    #[error("{0} is not defined")]
    MissingGlobal(&'static str),
    #[error("document has no <head>")]
    NoHead,
}

async fn load_script(document: &web::Document, url: &str) -> anyhow::Result<()> {
    let head = document.head().ok_or(BootstrapError::NoHead)?;
    let script = document
        .create_element("script")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlScriptElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    script.set_src(url);
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });
    head.append_child(&script)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(loaded)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Load every configured script in order, stopping at the first failure.
pub async fn load_libraries(
    document: &web::Document,
    config: &PreviewConfig,
    status: &StatusLog,
) -> Result<(), BootstrapError> {
    status.info("loading libraries...");
    for (name, url) in config.scripts() {
        if let Err(e) = load_script(document, url).await {
            log::error!("[bootstrap] {}: {:?}", name, e);
            return Err(BootstrapError::ScriptLoad {
                name: name.to_string(),
                url: url.to_string(),
            });
        }
        status.info(&format!("{} loaded", name));
    }
    Ok(())
}

fn global(target: &JsValue, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Confirm both libraries registered their globals.
pub fn check_libraries(status: &StatusLog) -> Result<(), BootstrapError> {
    status.info("checking libraries...");
    let pixi = global(&js_sys::global(), "PIXI").ok_or(BootstrapError::MissingGlobal("PIXI"))?;
    status.info("PIXI is available");
    global(&pixi, "spine").ok_or(BootstrapError::MissingGlobal("PIXI.spine"))?;
    status.info("PIXI.spine is available");
    Ok(())
}
