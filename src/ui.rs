use super::catalog::{catalog_options, SelectOption};
use super::constants::*;
use super::dom;
use super::transform::TransformInput;
use web_sys as web;

/// Form controls of the preview page.
#[derive(Clone)]
pub struct Controls {
    pub spine_select: web::HtmlSelectElement,
    pub animation_select: web::HtmlSelectElement,
    pub bg_select: web::HtmlSelectElement,
    x: web::HtmlInputElement,
    y: web::HtmlInputElement,
    scale: web::HtmlInputElement,
    rotation: web::HtmlInputElement,
}

impl Controls {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            spine_select: dom::element(document, SPINE_FILE_SELECT_ID)?,
            animation_select: dom::element(document, ANIMATION_SELECT_ID)?,
            bg_select: dom::element(document, BG_IMAGE_SELECT_ID)?,
            x: dom::element(document, X_POS_ID)?,
            y: dom::element(document, Y_POS_ID)?,
            scale: dom::element(document, SCALE_ID)?,
            rotation: dom::element(document, ROTATION_ID)?,
        })
    }

    /// Current contents of the four transform fields.
    pub fn transform_input(&self) -> TransformInput {
        TransformInput::parse(
            &self.x.value(),
            &self.y.value(),
            &self.scale.value(),
            &self.rotation.value(),
        )
    }

    /// Spine files are appended after whatever the page declares statically.
    pub fn add_spine_files(&self, files: &[String]) -> anyhow::Result<()> {
        dom::append_options(&self.spine_select, &catalog_options(files, None))
    }

    pub fn set_background_images(&self, files: &[String]) -> anyhow::Result<()> {
        dom::replace_options(&self.bg_select, &catalog_options(files, Some(BG_PLACEHOLDER_LABEL)))
    }

    pub fn set_animation_names(&self, names: &[String]) -> anyhow::Result<()> {
        let options: Vec<SelectOption> = names.iter().map(|n| SelectOption::file(n)).collect();
        dom::replace_options(&self.animation_select, &options)
    }
}
