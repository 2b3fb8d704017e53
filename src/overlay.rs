use crate::constants::{STATUS_ERROR_COLOR, STATUS_OK_COLOR};
use showcase_core::LoadStatus;
use web_sys as web;

#[inline]
pub fn set_message(el: &web::HtmlElement, text: &str, color: Option<&str>) {
    el.set_text_content(Some(text));
    if let Some(c) = color {
        _ = el.style().set_property("color", c);
    }
}

pub fn show_status(el: &web::HtmlElement, status: &LoadStatus) {
    let color = match status {
        LoadStatus::Loading(_) => None,
        LoadStatus::Loaded => Some(STATUS_OK_COLOR),
        LoadStatus::Failed => Some(STATUS_ERROR_COLOR),
    };
    set_message(el, &status.message(), color);
}

#[inline]
pub fn warn(el: &web::HtmlElement, text: &str) {
    set_message(el, text, Some(STATUS_ERROR_COLOR));
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.style().set_property("display", "none");
}
