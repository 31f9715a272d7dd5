//! Asset loading through the engine's resource loader.
//!
//! Every load gets its own `PIXI.Loader`, so overlapping requests never reset
//! each other's queue.

use super::bundle::{BundleError, SpineBundle};
use super::dom::js_err;
use super::pixi;
use instant::Instant;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Resolves with the loader's resource map, or rejects with `{ message, url }`
/// for the first resource that fails.
fn loader_promise(loader: &pixi::Loader) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, reject| {
        let on_complete = Closure::once(move |_loader: JsValue, resources: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &resources);
        });
        let mut reject = Some(reject);
        let on_error = Closure::<dyn FnMut(JsValue, JsValue, JsValue)>::new(
            move |error: JsValue, _loader: JsValue, resource: JsValue| {
                let Some(reject) = reject.take() else {
                    return;
                };
                let detail = js_sys::Object::new();
                let url = Reflect::get(&resource, &"url".into()).unwrap_or(JsValue::UNDEFINED);
                let _ = Reflect::set(&detail, &"message".into(), &JsValue::from_str(&js_err(&error)));
                let _ = Reflect::set(&detail, &"url".into(), &url);
                let _ = reject.call1(&JsValue::NULL, &detail);
            },
        );
        loader.on_error().add(on_error.as_ref().unchecked_ref());
        loader.load(on_complete.as_ref().unchecked_ref());
        on_complete.forget();
        on_error.forget();
    })
}

async fn run(loader: &pixi::Loader) -> Result<JsValue, BundleError> {
    JsFuture::from(loader_promise(loader)).await.map_err(|detail| {
        let field = |name: &str| {
            Reflect::get(&detail, &name.into())
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default()
        };
        BundleError::Load {
            url: field("url"),
            message: field("message"),
        }
    })
}

fn resource(resources: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(resources, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn resource_field(resources: &JsValue, key: &str, field: &str) -> Option<JsValue> {
    resource(resources, key)
        .and_then(|r| Reflect::get(&r, &field.into()).ok())
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Fetch skeleton, atlas and texture and build the animation object.
pub async fn load_spine(bundle: &SpineBundle) -> Result<pixi::Spine, BundleError> {
    let started = Instant::now();
    let loader = pixi::Loader::new();
    for request in bundle.requests() {
        loader.add(&request.key, &request.url);
    }
    let result = build_spine(bundle, &run(&loader).await);
    loader.reset();
    log::debug!("[loader] {} finished in {:?}", bundle.base_name(), started.elapsed());
    result
}

fn build_spine(
    bundle: &SpineBundle,
    loaded: &Result<JsValue, BundleError>,
) -> Result<pixi::Spine, BundleError> {
    let resources = loaded.as_ref().map_err(Clone::clone)?;
    bundle.check_loaded(|key| resource(resources, key).is_some())?;
    let skeleton = resource_field(resources, &bundle.skeleton_key(), "spineData")
        .ok_or_else(|| BundleError::NoSkeletonData(bundle.skeleton_url()))?;
    pixi::Spine::new(&skeleton).map_err(|e| BundleError::Load {
        url: bundle.skeleton_url(),
        message: js_err(&e),
    })
}

/// Fetch a single image and wrap it in a sprite.
pub async fn load_sprite(key: &str, url: &str) -> Result<pixi::Sprite, BundleError> {
    let loader = pixi::Loader::new();
    loader.add(key, url);
    let loaded = run(&loader).await;
    let sprite = loaded.and_then(|resources| {
        resource_field(&resources, key, "texture")
            .map(|texture| pixi::Sprite::new(texture.unchecked_ref::<pixi::Texture>()))
            .ok_or_else(|| BundleError::Missing(vec![url.to_string()]))
    });
    loader.reset();
    sprite
}
