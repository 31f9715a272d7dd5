//! Bindings to the parts of PIXI.js v5 and pixi-spine v2 the previewer uses.
//!
//! Both libraries are injected at runtime, so none of these may be called
//! before `bootstrap::check_libraries` has passed.

use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(js_namespace = PIXI)]
extern "C" {
    pub type Application;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(options: &JsValue) -> Result<Application, JsValue>;

    #[wasm_bindgen(method, getter)]
    pub fn view(this: &Application) -> web::HtmlCanvasElement;

    #[wasm_bindgen(method, getter)]
    pub fn stage(this: &Application) -> Container;

    #[wasm_bindgen(method, getter)]
    pub fn renderer(this: &Application) -> Renderer;

    #[wasm_bindgen(method, getter)]
    pub fn screen(this: &Application) -> Rectangle;

    pub type Renderer;

    #[wasm_bindgen(method, getter)]
    pub fn width(this: &Renderer) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &Renderer) -> f64;

    #[wasm_bindgen(method)]
    pub fn resize(this: &Renderer, width: f64, height: f64);

    pub type Rectangle;

    #[wasm_bindgen(method, getter)]
    pub fn width(this: &Rectangle) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &Rectangle) -> f64;

    pub type ObservablePoint;

    #[wasm_bindgen(method)]
    pub fn set(this: &ObservablePoint, x: f64, y: f64);

    pub type DisplayObject;

    #[wasm_bindgen(method, getter)]
    pub fn position(this: &DisplayObject) -> ObservablePoint;

    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &DisplayObject) -> ObservablePoint;

    #[wasm_bindgen(method, setter)]
    pub fn set_rotation(this: &DisplayObject, radians: f64);

    #[wasm_bindgen(method, js_name = setTransform)]
    pub fn set_transform(
        this: &DisplayObject,
        x: f64,
        y: f64,
        scale_x: f64,
        scale_y: f64,
        rotation: f64,
        skew_x: f64,
        skew_y: f64,
        pivot_x: f64,
        pivot_y: f64,
    );

    #[wasm_bindgen(method)]
    pub fn destroy(this: &DisplayObject);

    #[wasm_bindgen(extends = DisplayObject)]
    pub type Container;

    #[wasm_bindgen(method, js_name = addChild)]
    pub fn add_child(this: &Container, child: &DisplayObject);

    #[wasm_bindgen(method, js_name = addChildAt)]
    pub fn add_child_at(this: &Container, child: &DisplayObject, index: u32);

    #[wasm_bindgen(method, js_name = removeChild)]
    pub fn remove_child(this: &Container, child: &DisplayObject);

    pub type Texture;

    #[wasm_bindgen(method, getter)]
    pub fn width(this: &Texture) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &Texture) -> f64;

    #[wasm_bindgen(extends = Container, extends = DisplayObject)]
    pub type Sprite;

    #[wasm_bindgen(constructor)]
    pub fn new(texture: &Texture) -> Sprite;

    #[wasm_bindgen(method, getter)]
    pub fn texture(this: &Sprite) -> Texture;

    pub type Loader;

    #[wasm_bindgen(constructor)]
    pub fn new() -> Loader;

    #[wasm_bindgen(method)]
    pub fn add(this: &Loader, name: &str, url: &str) -> Loader;

    #[wasm_bindgen(method)]
    pub fn load(this: &Loader, on_complete: &js_sys::Function) -> Loader;

    #[wasm_bindgen(method)]
    pub fn reset(this: &Loader) -> Loader;

    #[wasm_bindgen(method, getter, js_name = onError)]
    pub fn on_error(this: &Loader) -> Signal;

    pub type Signal;

    #[wasm_bindgen(method)]
    pub fn add(this: &Signal, handler: &js_sys::Function);
}

#[wasm_bindgen(js_namespace = ["PIXI", "spine"])]
extern "C" {
    #[wasm_bindgen(extends = Container, extends = DisplayObject)]
    pub type Spine;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(skeleton_data: &JsValue) -> Result<Spine, JsValue>;

    #[wasm_bindgen(method, getter, js_name = spineData)]
    pub fn spine_data(this: &Spine) -> SkeletonData;

    #[wasm_bindgen(method, getter)]
    pub fn state(this: &Spine) -> AnimationState;

    pub type SkeletonData;

    #[wasm_bindgen(method, getter)]
    pub fn animations(this: &SkeletonData) -> js_sys::Array;

    pub type AnimationState;

    #[wasm_bindgen(method, catch, js_name = setAnimation)]
    pub fn set_animation(
        this: &AnimationState,
        track_index: u32,
        name: &str,
        looping: bool,
    ) -> Result<JsValue, JsValue>;
}
