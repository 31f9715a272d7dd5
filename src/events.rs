use super::bundle::SpineBundle;
use super::constants::*;
use super::dom;
use super::loader;
use super::preview::{Preview, PreviewError};
use super::stage::PixiStage;
use super::status::StatusLog;
use super::ui::Controls;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct Wiring {
    pub preview: Rc<RefCell<Preview<PixiStage>>>,
    pub status: StatusLog,
    pub controls: Controls,
}

pub fn wire_controls(document: &web::Document, w: Wiring) {
    let load = w.clone();
    dom::add_change_listener(document, SPINE_FILE_SELECT_ID, move || load_animation(&load));
    let load = w.clone();
    dom::add_click_listener(document, LOAD_SPINE_ID, move || load_animation(&load));

    let apply = w.clone();
    dom::add_click_listener(document, APPLY_CHANGES_ID, move || apply_transform(&apply));

    let background = w.clone();
    dom::add_change_listener(document, BG_IMAGE_SELECT_ID, move || load_background(&background));

    let select = w.clone();
    dom::add_change_listener(document, ANIMATION_SELECT_ID, move || select_animation(&select));

    dom::add_click_listener(document, TOGGLE_ORIENTATION_ID, move || toggle_orientation(&w));
}

fn load_animation(w: &Wiring) {
    let file_name = w.controls.spine_select.value();
    if file_name.is_empty() {
        w.status.warn("select a Spine file first");
        return;
    }
    w.status.info(&format!("loading Spine animation: {}", file_name));

    let bundle = SpineBundle::from_selection(&file_name);
    let ticket = w.preview.borrow_mut().begin_animation_load();
    let w = w.clone();
    spawn_local(async move {
        let spine = match loader::load_spine(&bundle).await {
            Ok(spine) => spine,
            Err(e) => {
                if w.preview.borrow().is_current(ticket) {
                    w.status.warn(&format!("error: {}", e));
                } else {
                    log::info!("[events] ignoring failure of superseded load: {}", e);
                }
                return;
            }
        };
        w.status.info("all files loaded, creating Spine animation...");

        let input = w.controls.transform_input();
        let installed = w
            .preview
            .borrow_mut()
            .finish_animation_load(ticket, spine, &input);
        match installed {
            Ok(names) => {
                if let Err(e) = w.controls.set_animation_names(&names) {
                    log::warn!("[events] animation list: {:?}", e);
                }
                w.status.info(&format!("found {} animations", names.len()));
                w.status.info(&input.describe());
                w.status.info(&format!("playing animation: {}", names[0]));
                w.status.info("animation added to stage");
            }
            Err(PreviewError::Superseded(_)) => {
                log::info!("[events] {} superseded by a newer request", bundle.base_name());
            }
            Err(e) => {
                _ = w.controls.set_animation_names(&[]);
                w.status.warn(&format!("error: {}", e));
            }
        }
    });
}

fn select_animation(w: &Wiring) {
    let name = w.controls.animation_select.value();
    match w.preview.borrow_mut().select_animation(&name) {
        Ok(()) => w.status.info(&format!("switched to animation: {}", name)),
        Err(e) => w.status.warn(&e.to_string()),
    }
}

fn apply_transform(w: &Wiring) {
    let input = w.controls.transform_input();
    let applied = w.preview.borrow_mut().apply_transform(&input);
    match applied {
        Ok(_) => w.status.info(&input.describe()),
        Err(e) => w.status.warn(&e.to_string()),
    }
}

fn load_background(w: &Wiring) {
    let url = w.controls.bg_select.value();
    if url.is_empty() {
        w.status.warn("select a background image first");
        return;
    }
    w.status.info(&format!("loading background image: {}", url));

    let ticket = w.preview.borrow_mut().begin_background_load();
    let key = format!("background_{}", ticket.generation());
    let w = w.clone();
    spawn_local(async move {
        let sprite = match loader::load_sprite(&key, &url).await {
            Ok(sprite) => sprite,
            Err(e) => {
                w.status.warn(&format!("failed to load background {}: {}", url, e));
                return;
            }
        };
        let installed = w.preview.borrow_mut().finish_background_load(ticket, sprite);
        match installed {
            Ok(fit) => {
                log::debug!("[events] background fit {:?}", fit);
                w.status.info(&format!("background set: {}", url));
            }
            Err(e) => log::info!("[events] {}: {}", url, e),
        }
    });
}

fn toggle_orientation(w: &Wiring) {
    let input = w.controls.transform_input();
    let change = w.preview.borrow_mut().toggle_orientation(&input);
    w.status
        .info(&format!("orientation: {}", change.orientation.label()));
    match change.transform {
        Ok(_) => w.status.info(&input.describe()),
        Err(e) => w.status.warn(&e.to_string()),
    }
}
