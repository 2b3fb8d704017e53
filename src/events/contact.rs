use super::keyboard::is_escape;
use super::pointer::listen;
use crate::constants::*;
use crate::dom;
use crate::markup::aria_bool;
use showcase_core::constants::HAPTIC_TAP_MS;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ContactMenu {
    dropdown: web::Element,
    toggle: web::Element,
}

impl ContactMenu {
    fn is_open(&self) -> bool {
        self.dropdown.class_list().contains(CLASS_OPEN)
    }

    fn set_open(&self, open: bool) {
        dom::toggle_class(&self.dropdown, CLASS_OPEN, open);
        _ = self.toggle.set_attribute("aria-expanded", aria_bool(open));
    }

    fn contains(&self, ev: &web::Event) -> bool {
        ev.target()
            .and_then(|t| t.dyn_into::<web::Node>().ok())
            .is_some_and(|node| self.dropdown.contains(Some(&node)))
    }
}

/// Contact action dropdown: toggle button, outside click, Escape and menu
/// link clicks. Does nothing when the page has no dropdown.
pub fn wire_contact_menu(document: &web::Document) {
    let (Some(dropdown), Some(toggle)) = (
        dom::element_by_id::<web::Element>(document, CONTACT_DROPDOWN_ID),
        dom::element_by_id::<web::Element>(document, CONTACT_TOGGLE_ID),
    ) else {
        return;
    };
    let links = dom::query_all(&dropdown, CONTACT_MENU_LINK_SELECTOR);
    let menu = Rc::new(ContactMenu { dropdown, toggle });

    let m = menu.clone();
    listen(&menu.toggle, "click", None, move |ev: web::MouseEvent| {
        ev.stop_propagation();
        m.set_open(!m.is_open());
        dom::haptic(HAPTIC_TAP_MS);
    });

    let m = menu.clone();
    listen(document, "click", None, move |ev: web::MouseEvent| {
        if !m.contains(&ev) {
            m.set_open(false);
        }
    });

    let m = menu.clone();
    listen(document, "keydown", None, move |ev: web::KeyboardEvent| {
        if is_escape(&ev.key()) {
            m.set_open(false);
        }
    });

    for link in links {
        let m = menu.clone();
        listen(&link, "click", None, move |_: web::MouseEvent| m.set_open(false));
    }
}
