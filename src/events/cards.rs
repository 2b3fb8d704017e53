use super::pointer::listen;
use crate::constants::PROJECT_CARD_SELECTOR;
use crate::dom;
use crate::markup::is_activation_key;
use showcase_core::constants::HAPTIC_TAP_MS;
use web_sys as web;

/// Project cards with a `data-href` behave like links: click anywhere
/// except an inner `<a>`, or press Enter/Space while focused.
pub fn wire_project_cards(document: &web::Document) {
    let mut wired = 0;
    for card in dom::query_document(document, PROJECT_CARD_SELECTOR) {
        let Some(href) = card.get_attribute("data-href").filter(|h| !h.is_empty()) else {
            continue;
        };

        let target = href.clone();
        listen(&card, "click", None, move |ev: web::MouseEvent| {
            if dom::enclosing_link(&ev).is_none() {
                follow(&target);
            }
        });
        listen(&card, "keydown", None, move |ev: web::KeyboardEvent| {
            if is_activation_key(&ev.key()) {
                ev.prevent_default();
                follow(&href);
            }
        });
        wired += 1;
    }
    if wired > 0 {
        log::info!("[cards] {} clickable project cards", wired);
    }
}

fn follow(href: &str) {
    dom::haptic(HAPTIC_TAP_MS);
    let Some(window) = web::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        log::warn!("[cards] navigation to {} failed: {:?}", href, e);
    }
}
