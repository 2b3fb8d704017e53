use crate::constants::MAX_PIXEL_RATIO;
use crate::markup;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .document_element()
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// The `<a>` an event started in, if any.
pub fn enclosing_link(ev: &web::Event) -> Option<web::Element> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
}

/// Css size of the canvas, or None while it has no layout box.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Option<(f32, f32)> {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    (w > 0.0 && h > 0.0).then_some((w, h))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    markup::pixel_ratio(dpr, MAX_PIXEL_RATIO)
}

#[inline]
pub fn window_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dim(w.inner_width()), dim(w.inner_height()))
}

/// Short vibration pulse where the platform supports it.
#[inline]
pub fn haptic(ms: u32) {
    if let Some(w) = web::window() {
        _ = w.navigator().vibrate_with_duration(ms);
    }
}

#[inline]
pub fn page_protocol() -> Option<String> {
    web::window().and_then(|w| w.location().protocol().ok())
}
