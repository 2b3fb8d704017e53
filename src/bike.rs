//! Bike page controller: orbit-driven module label, hotspot markers and the
//! feature sheet around [`BikeSession`].

use crate::constants::*;
use crate::dom;
use crate::events::{self, PointerTarget};
use crate::frame::{self, PageClock, PageLoop};
use crate::host::{self, HostOptions, HostSink, SceneHost};
use crate::markup;
use rand::rngs::StdRng;
use rand::SeedableRng;
use showcase_core::bike::{BIKE_FOV_DEG, BIKE_MODEL_SCALE};
use showcase_core::catalog::{ModuleContent, BIKE_MODEL_CANDIDATES};
use showcase_core::{load_with_fallback, BikeEffect, BikeSession, FieldParams, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FeatureSheet {
    root: web::HtmlElement,
    title: web::HtmlElement,
    description: web::HtmlElement,
    points: web::HtmlElement,
}

impl FeatureSheet {
    fn collect(document: &web::Document) -> Option<Self> {
        Some(Self {
            root: dom::element_by_id(document, FEATURE_SHEET_ID)?,
            title: dom::element_by_id(document, FEATURE_SHEET_TITLE_ID)?,
            description: dom::element_by_id(document, FEATURE_SHEET_DESCRIPTION_ID)?,
            points: dom::element_by_id(document, FEATURE_SHEET_POINTS_ID)?,
        })
    }

    fn open(&self, content: &ModuleContent) {
        self.title.set_text_content(Some(content.title));
        self.description.set_text_content(Some(content.description));
        self.points
            .set_inner_html(&markup::feature_points_html(&content.points));
        self.root.set_hidden(false);
    }

    fn hide(&self) {
        self.root.set_hidden(true);
    }
}

struct Marker {
    id: &'static str,
    el: web::HtmlElement,
}

pub struct BikePage {
    session: BikeSession,
    host: SceneHost,
    canvas: web::HtmlCanvasElement,
    label: Option<web::HtmlElement>,
    layer: Option<web::HtmlElement>,
    sheet: Option<FeatureSheet>,
    markers: Vec<Marker>,
    clock: PageClock,
    effects: Vec<BikeEffect>,
    loaded: bool,
}

impl PointerTarget for BikePage {
    const MOVE_ACTIVATES: bool = true;
    const LEAVE_KEEPS_TOUCH: bool = true;

    fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.session.pointer
    }
}

impl PageLoop for BikePage {
    fn frame(&mut self) {
        let t = self.clock.tick();
        self.host.update_controls();
        if let Some(pose) = self.host.camera_pose() {
            self.session.sync_camera(pose);
        }

        let mut out = std::mem::take(&mut self.effects);
        self.session.frame(
            t.now_ms,
            t.delta_sec,
            t.elapsed_sec,
            self.host.azimuth(),
            &mut out,
        );
        self.apply(&mut out);
        self.effects = out;

        if self.loaded {
            self.host.set_root_y(self.session.root_y());
            self.place_markers();
        }
        if self.session.field.take_dirty() {
            self.host.set_particles(self.session.field.positions_flat());
        }
        self.host.render();
    }
}

impl BikePage {
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

    fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    fn on_model_loaded(&mut self, model: &JsValue) {
        self.host.set_model_scale(model, BIKE_MODEL_SCALE);
        let Some(bounds) = self.host.model_bounds(model) else {
            log::warn!("[model] host returned no bounds");
            return;
        };
        let mut out = std::mem::take(&mut self.effects);
        let fit = self.session.on_model_loaded(bounds, &mut out);
        let o = fit.model.offset;
        self.host.set_model_offset(model, o.x, o.y, o.z);
        self.host
            .set_orbit_limits(fit.limits.min_distance, fit.limits.max_distance);
        self.apply_projection();
        self.apply(&mut out);
        self.effects = out;
        self.loaded = true;
        log::info!("[model] bike radius {:.3}", fit.model.radius);
    }

    fn focus(&mut self, index: usize) {
        let now = self.now_ms();
        let mut out = std::mem::take(&mut self.effects);
        self.session.focus_hotspot(index, now, &mut out);
        self.apply(&mut out);
        self.effects = out;
    }

    fn close_sheet(&mut self) {
        let now = self.now_ms();
        let mut out = std::mem::take(&mut self.effects);
        self.session.close_panel(true, now, &mut out);
        self.apply(&mut out);
        self.effects = out;
    }

    fn escape(&mut self) {
        let now = self.now_ms();
        let mut out = std::mem::take(&mut self.effects);
        self.session.key_escape(now, &mut out);
        self.apply(&mut out);
        self.effects = out;
    }

    fn apply(&self, effects: &mut Vec<BikeEffect>) {
        for effect in effects.drain(..) {
            match effect {
                BikeEffect::Label(text) => {
                    if let Some(el) = &self.label {
                        el.set_text_content(Some(&text));
                    }
                }
                BikeEffect::HotspotSelected(id) => {
                    for m in &self.markers {
                        dom::toggle_class(&m.el, CLASS_ACTIVE, Some(m.id) == id);
                    }
                }
                BikeEffect::PanelOpen(content) => {
                    if let Some(sheet) = &self.sheet {
                        sheet.open(&content);
                    }
                }
                BikeEffect::PanelHidden => {
                    if let Some(sheet) = &self.sheet {
                        sheet.hide();
                    }
                }
                BikeEffect::AutoRotate(on) => self.host.set_auto_rotate(on),
                BikeEffect::Camera(pose) => self.host.set_camera_pose(pose),
            }
        }
    }

    fn place_markers(&self) {
        let positions = self.session.hotspot_screen_positions();
        for (m, pos) in self.markers.iter().zip(positions) {
            let style = m.el.style();
            match markup::marker_offsets(pos) {
                Some((left, top)) => {
                    _ = style.set_property("display", "block");
                    _ = style.set_property("left", &left);
                    _ = style.set_property("top", &top);
                }
                None => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}

fn build_markers(page: &Rc<RefCell<BikePage>>, document: &web::Document) -> anyhow::Result<()> {
    let Some(layer) = page.borrow().layer.clone() else {
        return Ok(());
    };
    layer.set_inner_html("");

    let defs: Vec<_> = page.borrow().session.hotspots().iter().map(|h| h.def).collect();
    let mut markers = Vec::with_capacity(defs.len());
    for (index, def) in defs.into_iter().enumerate() {
        let el: web::HtmlElement = document
            .create_element("button")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = el.set_attribute("type", "button");
        el.set_class_name(&markup::hotspot_class(def.side));
        _ = el.set_attribute("aria-label", &markup::hotspot_aria_label(def.label));
        el.set_inner_html(&markup::hotspot_inner_html(def.label));

        let p = page.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.stop_propagation();
            p.borrow_mut().focus(index);
        }) as Box<dyn FnMut(web::MouseEvent)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();

        _ = layer.append_child(&el);
        markers.push(Marker { id: def.id, el });
    }

    // keep marker clicks away from page-level handlers
    let stop = Closure::wrap(Box::new(|ev: web::MouseEvent| ev.stop_propagation()) as Box<dyn FnMut(web::MouseEvent)>);
    _ = layer.add_event_listener_with_callback("click", stop.as_ref().unchecked_ref());
    stop.forget();

    page.borrow_mut().markers = markers;
    Ok(())
}

pub async fn init(document: web::Document, canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    let params = FieldParams::bike();
    let host = host::create_scene_host(
        &canvas,
        HostOptions {
            fov_deg: BIKE_FOV_DEG,
            particle_count: params.count,
            pixel_ratio: dom::device_pixel_ratio(),
            auto_rotate: false,
        },
    )?;

    let page = Rc::new(RefCell::new(BikePage {
        session: BikeSession::new(StdRng::from_entropy()),
        host: host.clone(),
        canvas: canvas.clone(),
        label: dom::element_by_id(&document, ROTATION_LABEL_ID),
        layer: dom::element_by_id(&document, HOTSPOTS_LAYER_ID),
        sheet: FeatureSheet::collect(&document),
        markers: Vec::new(),
        clock: PageClock::new(),
        effects: Vec::new(),
        loaded: false,
    }));

    {
        let mut page = page.borrow_mut();
        let has_sheet = page.sheet.is_some();
        page.session.set_panel_available(has_sheet);
        page.resize();
    }
    let p = page.clone();
    crate::wire_window_resize(move || p.borrow_mut().resize());
    events::wire_pointer_handlers(page.clone(), &canvas);

    let p = page.clone();
    dom::add_click_listener(&document, FEATURE_SHEET_CLOSE_ID, move || {
        p.borrow_mut().close_sheet();
    });
    let p = page.clone();
    events::wire_escape(&document, move || p.borrow_mut().escape());
    frame::start_loop(page.clone());

    let mut sink = HostSink {
        host: &host,
        indicator: None,
    };
    match load_with_fallback(BIKE_MODEL_CANDIDATES, host::host_loader(&host), &mut sink).await {
        Ok(loaded) => {
            page.borrow_mut().on_model_loaded(&loaded.model);
            build_markers(&page, &document)?;
        }
        Err(e) => {
            log::error!("[model] {}", e);
            if let Some(el) = &page.borrow().label {
                el.set_text_content(Some(BIKE_LOAD_FAILED_TEXT));
            }
        }
    }
    Ok(())
}
