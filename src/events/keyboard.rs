use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

pub fn wire_escape(document: &web::Document, mut on_escape: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if is_escape(&ev.key()) {
            on_escape();
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
