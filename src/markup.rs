// Pure helpers between session state and DOM strings or attributes.

use glam::Vec2;
use std::collections::HashMap;
use showcase_core::layout::Side;

use crate::constants::{CLASS_HOTSPOT, CLASS_HOTSPOT_LEFT};

/// Escape text for insertion into `innerHTML`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<li>` list for the feature sheet bullet points.
pub fn feature_points_html(points: &[&str]) -> String {
    points
        .iter()
        .map(|p| format!("<li>{}</li>", escape_html(p)))
        .collect()
}

#[inline]
pub fn hotspot_class(side: Side) -> String {
    match side {
        Side::Left => format!("{} {}", CLASS_HOTSPOT, CLASS_HOTSPOT_LEFT),
        Side::Right => CLASS_HOTSPOT.to_string(),
    }
}

#[inline]
pub fn hotspot_aria_label(label: &str) -> String {
    format!("Focus {}", label)
}

pub fn hotspot_inner_html(label: &str) -> String {
    format!(
        "<span class=\"hotspot-dot\"></span><span class=\"hotspot-label\">{}</span>",
        escape_html(label)
    )
}

/// CSS `left`/`top` for a projected marker, or None to hide it.
pub fn marker_offsets(screen: Option<Vec2>) -> Option<(String, String)> {
    let p = screen?;
    if !p.x.is_finite() || !p.y.is_finite() {
        return None;
    }
    Some((format!("{:.1}px", p.x), format!("{:.1}px", p.y)))
}

/// Heading text: the cached `data-text` if set, else the trimmed content.
pub fn heading_text(data_text: Option<String>, text_content: Option<String>) -> String {
    match data_text {
        Some(t) if !t.is_empty() => t,
        _ => text_content.unwrap_or_default().trim().to_string(),
    }
}

/// Renderer pixel ratio: the device ratio capped at `max_ratio`.
#[inline]
pub fn pixel_ratio(dpr: f64, max_ratio: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(max_ratio)
    } else {
        1.0
    }
}

/// Target id of an in-page link (`"#intro"` -> `"intro"`).
pub fn href_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Section index each nav link points at, matched by `href` fragment
/// against the section ids. Unmatched links map to None.
pub fn nav_link_targets(section_ids: &[Option<String>], hrefs: &[Option<String>]) -> Vec<Option<usize>> {
    let index: HashMap<&str, usize> = section_ids
        .iter()
        .enumerate()
        .filter_map(|(i, id)| Some((id.as_deref().filter(|id| !id.is_empty())?, i)))
        .collect();
    hrefs
        .iter()
        .map(|href| {
            let id = href_fragment(href.as_deref()?)?;
            index.get(id).copied()
        })
        .collect()
}

/// Keys that activate a focused card the way a click does.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[inline]
pub fn aria_bool(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}
