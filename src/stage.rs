use super::constants::{ANIMATION_TRACK, BACKGROUND_COLOR};
use super::dom::js_err;
use super::fit::{BackgroundFit, Size};
use super::pixi;
use super::preview::Stage;
use super::transform::AnimationTransform;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationOptions {
    width: i32,
    height: i32,
    background_color: u32,
    transparent: bool,
}

/// Create the engine application sized to `host` and mount its canvas there.
pub fn create_application(host: &web::HtmlElement) -> anyhow::Result<pixi::Application> {
    let options = ApplicationOptions {
        width: host.client_width(),
        height: host.client_height(),
        background_color: BACKGROUND_COLOR,
        transparent: false,
    };
    let options = js_sys::JSON::parse(&serde_json::to_string(&options)?)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let app = pixi::Application::new(&options).map_err(|e| anyhow::anyhow!(js_err(&e)))?;
    host.append_child(&app.view())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!(
        "[stage] renderer {}x{}",
        app.renderer().width(),
        app.renderer().height()
    );
    Ok(app)
}

/// Stage backed by a PIXI application and the DOM element framing it.
pub struct PixiStage {
    app: pixi::Application,
    container: Option<web::HtmlElement>,
}

impl PixiStage {
    pub fn new(app: pixi::Application, container: Option<web::HtmlElement>) -> Self {
        Self { app, container }
    }

    #[inline]
    fn node<'a, T: AsRef<pixi::DisplayObject>>(value: &'a T) -> &'a pixi::DisplayObject {
        value.as_ref()
    }
}

impl Stage for PixiStage {
    type Animation = pixi::Spine;
    type Background = pixi::Sprite;

    fn viewport(&self) -> Size {
        let screen = self.app.screen();
        Size::new(screen.width() as f32, screen.height() as f32)
    }

    fn resize(&mut self, size: Size) {
        self.app
            .renderer()
            .resize(size.width as f64, size.height as f64);
    }

    fn rotate_container(&mut self, css_transform: &str) {
        if let Some(el) = self.container.as_ref() {
            _ = el.style().set_property("transform", css_transform);
        }
    }

    fn animation_names(&self, animation: &pixi::Spine) -> Vec<String> {
        animation
            .spine_data()
            .animations()
            .iter()
            .filter_map(|a| js_sys::Reflect::get(&a, &JsValue::from_str("name")).ok())
            .filter_map(|n| n.as_string())
            .collect()
    }

    fn set_animation_transform(&mut self, animation: &pixi::Spine, transform: &AnimationTransform) {
        let node = Self::node(animation);
        node.position()
            .set(transform.position.x as f64, transform.position.y as f64);
        node.scale().set(transform.scale as f64, transform.scale as f64);
        node.set_rotation(transform.rotation as f64);
    }

    fn play(&mut self, animation: &pixi::Spine, name: &str, looping: bool) {
        if let Err(e) = animation
            .state()
            .set_animation(ANIMATION_TRACK, name, looping)
        {
            log::warn!("[stage] setAnimation({}) failed: {}", name, js_err(&e));
        }
    }

    fn attach_animation(&mut self, animation: &pixi::Spine) {
        self.app.stage().add_child(Self::node(animation));
    }

    fn release_animation(&mut self, animation: pixi::Spine) {
        let node = Self::node(&animation);
        self.app.stage().remove_child(node);
        node.destroy();
    }

    fn texture_size(&self, background: &pixi::Sprite) -> Size {
        let texture = background.texture();
        Size::new(texture.width() as f32, texture.height() as f32)
    }

    fn set_background_fit(&mut self, background: &pixi::Sprite, fit: &BackgroundFit) {
        let scale = fit.scale as f64;
        Self::node(background).set_transform(
            fit.offset.x as f64,
            fit.offset.y as f64,
            scale,
            scale,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
        );
    }

    fn attach_background(&mut self, background: &pixi::Sprite) {
        self.app.stage().add_child_at(Self::node(background), 0);
    }

    fn release_background(&mut self, background: pixi::Sprite) {
        let node = Self::node(&background);
        self.app.stage().remove_child(node);
        node.destroy();
    }
}
