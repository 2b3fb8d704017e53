use crate::dom;
use showcase_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A page whose particle field reacts to the pointer.
pub trait PointerTarget {
    /// True when any mouse motion engages the field, not only canvas hover.
    const MOVE_ACTIVATES: bool;
    /// True when leaving the canvas mid-touch keeps the field engaged.
    const LEAVE_KEEPS_TOUCH: bool;

    fn pointer_mut(&mut self) -> &mut PointerState;
}

fn passive(capture: bool) -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    opts.set_capture(capture);
    opts
}

pub(crate) fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    kind: &str,
    opts: Option<&web::AddEventListenerOptions>,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let cb = closure.as_ref().unchecked_ref();
    _ = match opts {
        Some(o) => target.add_event_listener_with_callback_and_add_event_listener_options(kind, cb, o),
        None => target.add_event_listener_with_callback(kind, cb),
    };
    closure.forget();
}

pub fn wire_pointer_handlers<P: PointerTarget + 'static>(page: Rc<RefCell<P>>, canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let p = page.clone();
    listen(&window, "mousemove", None, move |ev: web::MouseEvent| {
        let (w, h) = dom::window_size();
        let mut page = p.borrow_mut();
        let ptr = page.pointer_mut();
        ptr.mouse_move(P::MOVE_ACTIVATES);
        ptr.capture(ev.client_x() as f32, ev.client_y() as f32, w, h);
    });

    for kind in ["touchstart", "touchmove"] {
        listen(&document, kind, Some(&passive(true)), touch_handler(page.clone()));
    }

    for kind in ["touchend", "touchcancel"] {
        let p = page.clone();
        listen(&window, kind, Some(&passive(false)), move |_: web::TouchEvent| {
            p.borrow_mut().pointer_mut().touch_end();
        });
    }

    if !P::MOVE_ACTIVATES {
        let p = page.clone();
        listen(canvas, "mouseenter", None, move |_: web::MouseEvent| {
            p.borrow_mut().pointer_mut().mouse_enter();
        });
    }
    let p = page;
    listen(canvas, "mouseleave", None, move |_: web::MouseEvent| {
        p.borrow_mut().pointer_mut().mouse_leave(P::LEAVE_KEEPS_TOUCH);
    });
}

fn touch_handler<P: PointerTarget + 'static>(page: Rc<RefCell<P>>) -> impl FnMut(web::TouchEvent) {
    move |ev: web::TouchEvent| {
        let mut page = page.borrow_mut();
        let ptr = page.pointer_mut();
        ptr.touch();
        if let Some(t) = ev.touches().get(0) {
            let (w, h) = dom::window_size();
            ptr.capture(t.client_x() as f32, t.client_y() as f32, w, h);
        }
    }
}

/// Short vibration when a link is tapped anywhere on the page.
pub fn wire_link_haptics(document: &web::Document, pulse_ms: u32) {
    listen(document, "click", None, move |ev: web::MouseEvent| {
        if dom::enclosing_link(&ev).is_some() {
            dom::haptic(pulse_ms);
        }
    });
}
