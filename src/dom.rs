use super::catalog::SelectOption;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it to the expected element type.
pub fn element<T: JsCast>(document: &web::Document, element_id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", element_id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    add_listener(document, element_id, "click", handler);
}

#[inline]
pub fn add_change_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    add_listener(document, element_id, "change", handler);
}

fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to listen for {}", element_id, event);
    }
}

/// Append one `<option>` per entry.
pub fn append_options(select: &web::HtmlSelectElement, options: &[SelectOption]) -> anyhow::Result<()> {
    for opt in options {
        let el = web::HtmlOptionElement::new_with_text_and_value(&opt.label, &opt.value)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        select
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Drop every existing `<option>` and append `options`.
pub fn replace_options(select: &web::HtmlSelectElement, options: &[SelectOption]) -> anyhow::Result<()> {
    select.set_inner_html("");
    append_options(select, options)
}

/// `data-*` lookup on `<body>`, keyed by dataset (camelCase) name.
pub fn body_dataset(document: &web::Document) -> impl Fn(&str) -> Option<String> {
    let dataset = document.body().map(|b| b.dataset());
    move |key| dataset.as_ref().and_then(|d| d.get(key))
}

/// Best-effort text for a thrown JS value.
pub fn js_err(error: &JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(message) = js_sys::Reflect::get(error, &JsValue::from_str("message")) {
        if let Some(value) = message.as_string() {
            return value;
        }
    }
    if let Ok(json) = js_sys::JSON::stringify(error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
