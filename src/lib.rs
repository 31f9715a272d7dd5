#![cfg(target_arch = "wasm32")]
use crate::catalog::CatalogKind;
use crate::config::PreviewConfig;
use crate::constants::{GAME_SCREEN_ID, PHONE_CONTAINER_ID, STATUS_ID};
use crate::preview::Preview;
use crate::stage::PixiStage;
use crate::status::StatusLog;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bootstrap;
mod bundle;
mod catalog;
mod config;
mod constants;
mod dom;
mod events;
mod fetch;
mod fit;
mod loader;
mod orientation;
mod pixi;
mod preview;
mod stage;
mod status;
mod transform;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = dom::window_document()
        .map(|d| PreviewConfig::from_lookup(dom::body_dataset(&d)))
        .unwrap_or_default();
    console_log::init_with_level(config.log_level).ok();
    log::info!("spine-preview starting");

    spawn_local(async move {
        if let Err(e) = init(config).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(config: PreviewConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let status = StatusLog::new(document.get_element_by_id(STATUS_ID));

    // Nothing below can run without both libraries.
    if let Err(e) = bootstrap::load_libraries(&document, &config, &status).await {
        status.warn(&format!("error loading libraries: {}", e));
        return Ok(());
    }
    if let Err(e) = bootstrap::check_libraries(&status) {
        status.warn(&format!("error: {}", e));
        return Ok(());
    }

    let controls = ui::Controls::from_document(&document)?;
    let game_screen: web::HtmlElement = dom::element(&document, GAME_SCREEN_ID)?;
    let app = stage::create_application(&game_screen)?;
    let container = dom::element::<web::HtmlElement>(&document, PHONE_CONTAINER_ID).ok();
    let preview = Rc::new(RefCell::new(Preview::new(PixiStage::new(app, container))));

    let spine_files = fetch::fetch_catalog(&config, CatalogKind::SpineFiles, &status).await;
    controls.add_spine_files(&spine_files)?;

    let bg_images = fetch::fetch_catalog(&config, CatalogKind::BackgroundImages, &status).await;
    match controls.set_background_images(&bg_images) {
        Ok(()) => status.info(&format!(
            "background list updated, {} options",
            bg_images.len()
        )),
        Err(e) => status.warn(&format!("error initialising background list: {:?}", e)),
    }

    events::wire_controls(
        &document,
        events::Wiring {
            preview,
            status,
            controls,
        },
    );
    Ok(())
}
