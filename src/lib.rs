#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bike;
mod constants;
mod desk;
mod dom;
mod events;
mod frame;
mod host;
mod markup;
mod overlay;

use constants::{BIKE_CANVAS_ID, DESK_CANVAS_ID};

pub(crate) fn wire_window_resize(mut on_resize: impl FnMut() + 'static) {
    let resize_closure = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // the page markup decides which controller runs
    if let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(&document, DESK_CANVAS_ID) {
        return desk::init(document, canvas).await;
    }
    if let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(&document, BIKE_CANVAS_ID) {
        return bike::init(document, canvas).await;
    }
    log::warn!("no #{} or #{} canvas on this page", DESK_CANVAS_ID, BIKE_CANVAS_ID);
    Ok(())
}
