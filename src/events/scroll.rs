//! Section detection for the desk page: scroll position and intersection
//! entries both report a section index; the session keeps the latest.

use js_sys::Array;
use showcase_core::constants::SECTION_ACTIVE_RATIO;
use showcase_core::stage::{nearest_section, section_from_intersection};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Index of the section closest to the viewport midpoint.
pub fn closest_section(sections: &[web::Element]) -> Option<usize> {
    let mid = web::window()?.inner_height().ok()?.as_f64()? * 0.5;
    let centers: Vec<f64> = sections
        .iter()
        .map(|s| {
            let r = s.get_bounding_client_rect();
            r.top() + r.height() / 2.0
        })
        .collect();
    nearest_section(&centers, mid)
}

pub fn wire_section_scroll(sections: Rc<Vec<web::Element>>, on_section: Rc<RefCell<dyn FnMut(usize)>>) {
    let Some(window) = web::window() else {
        return;
    };
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(i) = closest_section(&sections) {
            (&mut *on_section.borrow_mut())(i);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Observe every section; an entry at least [`SECTION_ACTIVE_RATIO`] visible
/// reports its `data-stage` index.
pub fn wire_section_observer(
    sections: &[web::Element],
    on_section: Rc<RefCell<dyn FnMut(usize)>>,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move |entries: Array, _obs: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            let index = entry
                .target()
                .get_attribute("data-stage")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(0);
            if let Some(i) = section_from_intersection(entry.is_intersecting(), entry.intersection_ratio(), index) {
                (&mut *on_section.borrow_mut())(i);
            }
        }
    }) as Box<dyn FnMut(Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&Array::of1(&SECTION_ACTIVE_RATIO.into()));
    let observer = web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for s in sections {
        observer.observe(s);
    }
    closure.forget();
    Ok(())
}
