//! Desk page controller: DOM and scene-host glue around [`DeskSession`].

use crate::constants::*;
use crate::dom;
use crate::events::{self, PointerTarget};
use crate::frame::{self, PageClock, PageLoop};
use crate::host::{self, HostOptions, HostSink, SceneHost};
use crate::overlay;
use rand::rngs::StdRng;
use rand::SeedableRng;
use showcase_core::catalog::DESK_MODEL_CANDIDATES;
use showcase_core::constants::HAPTIC_TAP_MS;
use showcase_core::desk::DESK_FOV_DEG;
use showcase_core::loader::file_protocol_warning;
use showcase_core::{
    load_with_fallback, DeskAnchors, DeskEffect, DeskSession, FieldParams, PointerState, TextSlot,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct DeskDom {
    sections: Rc<Vec<web::Element>>,
    /// Each link with the section index its `href` fragment names.
    nav_links: Vec<(web::Element, Option<usize>)>,
    headings: Vec<Option<web::Element>>,
    caption: Option<web::HtmlElement>,
    loading: Option<web::HtmlElement>,
}

impl DeskDom {
    fn collect(document: &web::Document) -> Self {
        let sections = dom::query_document(document, SECTION_SELECTOR);
        let headings = sections
            .iter()
            .map(|s| s.query_selector(HEADING_SELECTOR).ok().flatten())
            .collect();
        let links = dom::query_document(document, NAV_LINK_SELECTOR);
        let ids: Vec<Option<String>> = sections.iter().map(|s| Some(s.id())).collect();
        let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();
        let targets = crate::markup::nav_link_targets(&ids, &hrefs);
        Self {
            sections: Rc::new(sections),
            nav_links: links.into_iter().zip(targets).collect(),
            headings,
            caption: dom::element_by_id(document, STAGE_CAPTION_ID),
            loading: dom::element_by_id(document, LOADING_INDICATOR_ID),
        }
    }

    /// Cache each heading's full text in `data-text` and show it untyped.
    fn prime_headings(&self) -> Vec<String> {
        self.headings
            .iter()
            .map(|h| {
                let Some(el) = h else {
                    return String::new();
                };
                let text = crate::markup::heading_text(el.get_attribute("data-text"), el.text_content());
                _ = el.set_attribute("data-text", &text);
                el.set_text_content(Some(&text));
                text
            })
            .collect()
    }

    fn text_element(&self, slot: TextSlot) -> Option<web::Element> {
        match slot {
            TextSlot::Caption => self.caption.clone().map(Into::into),
            TextSlot::Heading(i) => self.headings.get(i).cloned().flatten(),
        }
    }
}

pub struct DeskPage {
    session: DeskSession,
    host: SceneHost,
    canvas: web::HtmlCanvasElement,
    dom: DeskDom,
    clock: PageClock,
    effects: Vec<DeskEffect>,
    model: Option<JsValue>,
}

impl PointerTarget for DeskPage {
    const MOVE_ACTIVATES: bool = false;
    const LEAVE_KEEPS_TOUCH: bool = false;

    fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.session.pointer
    }
}

impl PageLoop for DeskPage {
    fn frame(&mut self) {
        let t = self.clock.tick();
        self.host.update_controls();
        if let Some(pose) = self.host.camera_pose() {
            self.session.sync_camera(pose);
        }

        let mut out = std::mem::take(&mut self.effects);
        self.session
            .frame(t.now_ms, t.delta_sec, t.elapsed_sec, &mut out);
        self.apply(&mut out);
        self.effects = out;

        if self.session.field.take_dirty() {
            self.host.set_particles(self.session.field.positions_flat());
        }
        if self.model.is_some() {
            self.host.set_root_y(self.session.root_y());
        }
        self.host.render();
    }
}

impl DeskPage {
    fn resize(&mut self) {
        let Some((w, h)) = dom::canvas_css_size(&self.canvas) else {
            return;
        };
        if self.session.resize(w, h) {
            self.host.resize(w, h);
            self.apply_projection();
        }
    }

    fn apply_projection(&self) {
        let cam = &self.session.camera;
        self.host
            .set_projection(cam.fovy_radians.to_degrees(), cam.aspect, cam.znear, cam.zfar);
    }

    fn on_model_loaded(&mut self, model: JsValue) {
        let Some(bounds) = self.host.model_bounds(&model) else {
            log::warn!("[model] host returned no bounds");
            return;
        };
        let nodes = self.host.named_nodes(&model);
        let anchors = DeskAnchors::from_named_nodes(nodes.iter().map(|(n, p)| (n.as_str(), *p)));
        log::info!("[model] anchors {:?}", anchors);

        let mut out = std::mem::take(&mut self.effects);
        let fit = self
            .session
            .on_model_loaded(bounds, &anchors, self.clock.now_ms(), &mut out);
        let o = fit.model.offset;
        self.host.set_model_offset(&model, o.x, o.y, o.z);
        self.host
            .set_orbit_limits(fit.limits.min_distance, fit.limits.max_distance);
        self.apply_projection();
        self.apply(&mut out);
        self.effects = out;
        self.model = Some(model);
    }

    fn controls_start(&mut self) {
        let mut out = std::mem::take(&mut self.effects);
        self.session.controls_start(&mut out);
        self.apply(&mut out);
        self.effects = out;
    }

    fn apply(&self, effects: &mut Vec<DeskEffect>) {
        for effect in effects.drain(..) {
            match effect {
                DeskEffect::SectionActive(index) => self.mark_section(index),
                DeskEffect::CardsVisible(index) => {
                    for (i, s) in self.dom.sections.iter().enumerate() {
                        dom::toggle_class(s, CLASS_CARD_VISIBLE, Some(i) == index);
                    }
                }
                DeskEffect::Text { slot, text, typing } => {
                    if let Some(el) = self.dom.text_element(slot) {
                        el.set_text_content(Some(&text));
                        dom::toggle_class(&el, CLASS_TYPING, typing);
                    }
                }
                DeskEffect::Camera(pose) => self.host.set_camera_pose(pose),
                DeskEffect::Haptic(ms) => dom::haptic(ms),
                DeskEffect::HideLoading => {
                    if let Some(el) = &self.dom.loading {
                        overlay::hide(el);
                    }
                }
            }
        }
    }

    fn mark_section(&self, index: usize) {
        for (i, s) in self.dom.sections.iter().enumerate() {
            dom::toggle_class(s, CLASS_ACTIVE, i == index);
        }
        for (link, target) in &self.dom.nav_links {
            let on = *target == Some(index);
            dom::toggle_class(link, CLASS_ACTIVE, on);
            if on {
                _ = link.set_attribute("aria-current", "page");
            } else {
                _ = link.remove_attribute("aria-current");
            }
        }
    }
}

fn wire_controls(page: &Rc<RefCell<DeskPage>>, host: &SceneHost) {
    let p = page.clone();
    let start = Closure::wrap(Box::new(move || {
        if let Ok(mut page) = p.try_borrow_mut() {
            page.controls_start();
        }
    }) as Box<dyn FnMut()>);
    let p = page.clone();
    let end = Closure::wrap(Box::new(move || {
        if let Ok(mut page) = p.try_borrow_mut() {
            page.session.controls_end();
        }
    }) as Box<dyn FnMut()>);
    host.on_controls(start.as_ref().unchecked_ref(), end.as_ref().unchecked_ref());
    start.forget();
    end.forget();
}

fn wire_sections(page: &Rc<RefCell<DeskPage>>) {
    let sections = page.borrow().dom.sections.clone();
    let p = page.clone();
    let on_section: Rc<RefCell<dyn FnMut(usize)>> = Rc::new(RefCell::new(move |i: usize| {
        p.borrow_mut().session.observe_section(i);
    }));
    if let Err(e) = events::wire_section_observer(&sections, on_section.clone()) {
        log::warn!("[stage] intersection observer unavailable: {:?}", e);
    }
    events::wire_section_scroll(sections.clone(), on_section);
    if let Some(i) = events::scroll::closest_section(&sections) {
        page.borrow_mut().session.observe_section(i);
    }
}

pub async fn init(document: web::Document, canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    let params = FieldParams::desk();
    let host = host::create_scene_host(
        &canvas,
        HostOptions {
            fov_deg: DESK_FOV_DEG,
            particle_count: params.count,
            pixel_ratio: dom::device_pixel_ratio(),
            auto_rotate: false,
        },
    )?;

    let desk_dom = DeskDom::collect(&document);
    if let (Some(el), Some(msg)) = (
        &desk_dom.loading,
        dom::page_protocol().and_then(|p| file_protocol_warning(&p)),
    ) {
        overlay::warn(el, msg);
    }
    let headings = desk_dom.prime_headings();
    let loading = desk_dom.loading.clone();
    log::info!("[desk] {} sections", desk_dom.sections.len());

    let page = Rc::new(RefCell::new(DeskPage {
        session: DeskSession::new(headings, StdRng::from_entropy()),
        host: host.clone(),
        canvas: canvas.clone(),
        dom: desk_dom,
        clock: PageClock::new(),
        effects: Vec::new(),
        model: None,
    }));

    page.borrow_mut().resize();
    let p = page.clone();
    crate::wire_window_resize(move || p.borrow_mut().resize());
    events::wire_pointer_handlers(page.clone(), &canvas);
    events::wire_link_haptics(&document, HAPTIC_TAP_MS);
    events::wire_contact_menu(&document);
    events::wire_project_cards(&document);
    wire_controls(&page, &host);
    frame::start_loop(page.clone());

    let mut sink = HostSink {
        host: &host,
        indicator: loading,
    };
    match load_with_fallback(DESK_MODEL_CANDIDATES, host::host_loader(&host), &mut sink).await {
        Ok(loaded) => {
            page.borrow_mut().on_model_loaded(loaded.model);
            wire_sections(&page);
        }
        Err(e) => log::error!("[model] {}", e),
    }
    Ok(())
}
