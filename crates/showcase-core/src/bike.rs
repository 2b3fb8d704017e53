//! Page B session: orbit-driven bike modules with hotspot focus.

use crate::cancel::{Generation, Ticket};
use crate::catalog::{bike_module_content, ModuleContent, BIKE_HOTSPOTS, BIKE_MODULE_STOPS};
use crate::constants::{FEATURE_REVEAL_DELAY_MS, HOTSPOT_TWEEN_MS, RESTORE_TWEEN_MS};
use crate::layout::{bike_default_view, build_hotspots, fit_model, Aabb, Hotspot, ModelFit, OrbitLimits};
use crate::orbit::{rotation_label, ModuleSelector};
use crate::particles::{FieldParams, ParticleField};
use crate::pointer::PointerState;
use crate::scheduler::{Scheduler, TimerId};
use crate::tween::{CameraPose, TweenEngine, TweenStep};
use crate::viewport::{Camera, Viewport};
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;

pub const BIKE_FOV_DEG: f32 = 38.0;
pub const BIKE_MODEL_SCALE: f32 = 1.22;
const BIKE_MODEL_DROP: f32 = 0.1;
const BIKE_MIN_RADIUS: f32 = 0.8;

#[derive(Clone, Debug, PartialEq)]
pub enum BikeEffect {
    /// New text for the rotation label.
    Label(String),
    /// Highlight one hotspot marker (None clears every highlight).
    HotspotSelected(Option<&'static str>),
    PanelOpen(ModuleContent),
    PanelHidden,
    AutoRotate(bool),
    Camera(CameraPose),
}

/// What to do once a camera flight lands.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Landing {
    RevealPanel(&'static str),
    Restored,
}

#[derive(Clone, Copy, Debug)]
enum BikeTimer {
    OpenPanel { ticket: Ticket, module_id: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BikeFit {
    pub model: ModelFit,
    pub limits: OrbitLimits,
    pub view: CameraPose,
    pub near: f32,
    pub far: f32,
}

pub struct BikeSession {
    pub pointer: PointerState,
    pub field: ParticleField,
    pub camera: Camera,
    pub viewport: Viewport,
    selector: ModuleSelector,
    content: FnvHashMap<&'static str, ModuleContent>,
    tween: TweenEngine<Landing>,
    hotspots: Vec<Hotspot>,
    selected: Option<&'static str>,
    panel_open: bool,
    has_panel: bool,
    reveal: Generation,
    reveal_timer: Option<TimerId>,
    timers: Scheduler<BikeTimer>,
    default_view: Option<CameraPose>,
    model_radius: f32,
    root_base_y: f32,
    root_y: f32,
    loaded: bool,
}

impl BikeSession {
    pub fn new(rng: StdRng) -> Self {
        let start = CameraPose::new(Vec3::new(0.0, 1.1, 3.2), Vec3::new(0.0, 0.35, 0.0));
        Self {
            pointer: PointerState::default(),
            field: ParticleField::new(FieldParams::bike(), rng),
            camera: Camera::new(BIKE_FOV_DEG, 0.01, 3000.0, start),
            viewport: Viewport::default(),
            selector: ModuleSelector::new(&BIKE_MODULE_STOPS),
            content: bike_module_content(),
            tween: TweenEngine::new(),
            hotspots: Vec::new(),
            selected: None,
            panel_open: false,
            has_panel: true,
            reveal: Generation::new(),
            reveal_timer: None,
            timers: Scheduler::new(),
            default_view: None,
            model_radius: 1.0,
            root_base_y: 0.0,
            root_y: 0.0,
            loaded: false,
        }
    }

    #[inline]
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    #[inline]
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Pages without feature-sheet markup never open the panel, so the
    /// orbit-driven module label keeps tracking after a hotspot lands.
    pub fn set_panel_available(&mut self, available: bool) {
        self.has_panel = available;
        if !available {
            self.panel_open = false;
        }
    }

    #[inline]
    pub fn selected_hotspot(&self) -> Option<&'static str> {
        self.selected
    }

    #[inline]
    pub fn active_module(&self) -> Option<&str> {
        self.selector.active()
    }

    #[inline]
    pub fn root_y(&self) -> f32 {
        self.root_y
    }

    #[inline]
    pub fn model_radius(&self) -> f32 {
        self.model_radius
    }

    /// `raw_bounds` is measured after the host applied [`BIKE_MODEL_SCALE`].
    pub fn on_model_loaded(&mut self, raw_bounds: Aabb, out: &mut Vec<BikeEffect>) -> BikeFit {
        let fit = fit_model(raw_bounds, BIKE_MODEL_DROP, BIKE_MIN_RADIUS);
        let r = fit.radius;
        self.model_radius = r;
        self.field.sync_with_model(r);
        self.camera.fit_clip_planes(r, 260.0, 24.0);

        let view = bike_default_view(r);
        self.camera.set_pose(view);
        self.default_view = Some(view);
        self.root_base_y = r * 0.205;
        self.hotspots = build_hotspots(&fit.bounds, &BIKE_HOTSPOTS);
        self.loaded = true;
        out.push(BikeEffect::Camera(view));

        if let Some(label) = self.selector.set_active("dashboard", "Pilot Dashboard") {
            out.push(BikeEffect::Label(rotation_label(&label)));
        }

        BikeFit {
            model: fit,
            limits: OrbitLimits::scaled(r, 0.78, 2.9),
            view,
            near: self.camera.znear,
            far: self.camera.zfar,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.viewport.resize(width, height, &mut self.camera)
    }

    pub fn sync_camera(&mut self, pose: CameraPose) {
        self.camera.set_pose(pose);
    }

    /// Fly to a hotspot; the detail panel opens shortly after the camera lands.
    pub fn focus_hotspot(&mut self, index: usize, now_ms: f64, out: &mut Vec<BikeEffect>) {
        let Some(hotspot) = self.hotspots.get(index) else {
            return;
        };
        let def = hotspot.def;
        let to = hotspot.focus_pose(Vec3::new(0.0, self.root_y, 0.0), self.model_radius);

        out.push(BikeEffect::AutoRotate(false));
        self.select(Some(def.id), out);
        if let Some(label) = self.selector.set_active(def.module_id, def.label) {
            out.push(BikeEffect::Label(rotation_label(&label)));
        }
        self.hide_panel(out);
        self.cancel_reveal();

        log::info!("[hotspot] focus {}", def.id);
        self.tween.start(
            self.camera.pose(),
            to,
            HOTSPOT_TWEEN_MS,
            now_ms,
            Some(Landing::RevealPanel(def.module_id)),
        );
    }

    /// Close the detail panel (close button or Escape).
    pub fn close_panel(&mut self, restore_camera: bool, now_ms: f64, out: &mut Vec<BikeEffect>) {
        self.cancel_reveal();
        self.hide_panel(out);
        self.select(None, out);
        if let (true, Some(view)) = (restore_camera, self.default_view) {
            self.tween.start(
                self.camera.pose(),
                view,
                RESTORE_TWEEN_MS,
                now_ms,
                Some(Landing::Restored),
            );
        }
    }

    pub fn key_escape(&mut self, now_ms: f64, out: &mut Vec<BikeEffect>) {
        if self.panel_open {
            self.close_panel(true, now_ms, out);
        }
    }

    /// Advance one animation frame. `azimuth_rad` is the orbit controls'
    /// current azimuthal angle.
    pub fn frame(
        &mut self,
        now_ms: f64,
        delta_sec: f32,
        elapsed_sec: f32,
        azimuth_rad: f32,
        out: &mut Vec<BikeEffect>,
    ) {
        self.field.step(delta_sec, elapsed_sec, &mut self.pointer);

        if let Some(label) = self.selector.update_from_azimuth(azimuth_rad, self.panel_open) {
            out.push(BikeEffect::Label(rotation_label(&label)));
        }

        match self.tween.advance(now_ms) {
            TweenStep::Idle => {}
            TweenStep::Frame(pose) => {
                self.camera.set_pose(pose);
                out.push(BikeEffect::Camera(pose));
            }
            TweenStep::Finished(pose, landing) => {
                self.camera.set_pose(pose);
                out.push(BikeEffect::Camera(pose));
                match landing {
                    Some(Landing::RevealPanel(module_id)) => {
                        let ticket = self.reveal.next();
                        self.reveal_timer = Some(self.timers.schedule(
                            now_ms + FEATURE_REVEAL_DELAY_MS,
                            BikeTimer::OpenPanel { ticket, module_id },
                        ));
                    }
                    Some(Landing::Restored) => out.push(BikeEffect::AutoRotate(false)),
                    None => {}
                }
            }
        }

        for timer in self.timers.drain_due(now_ms) {
            match timer {
                BikeTimer::OpenPanel { ticket, module_id } => {
                    if self.reveal.is_current(ticket) {
                        self.reveal_timer = None;
                        self.open_panel(module_id, out);
                    }
                }
            }
        }

        if self.loaded {
            let bob = ((now_ms * 0.0007).sin() as f32) * self.model_radius * 0.01;
            self.root_y = self.root_base_y + bob;
        }
    }

    /// Screen position of every hotspot marker (None when off the depth range).
    pub fn hotspot_screen_positions(&self) -> Vec<Option<Vec2>> {
        let root = Vec3::new(0.0, self.root_y, 0.0);
        self.hotspots
            .iter()
            .map(|h| self.viewport.screen_position(&self.camera, h.anchor + root))
            .collect()
    }

    fn open_panel(&mut self, module_id: &str, out: &mut Vec<BikeEffect>) {
        if !self.has_panel {
            return;
        }
        let Some(content) = self.content.get(module_id) else {
            return;
        };
        self.panel_open = true;
        out.push(BikeEffect::PanelOpen(content.clone()));
    }

    fn hide_panel(&mut self, out: &mut Vec<BikeEffect>) {
        self.panel_open = false;
        out.push(BikeEffect::PanelHidden);
    }

    fn select(&mut self, id: Option<&'static str>, out: &mut Vec<BikeEffect>) {
        self.selected = id;
        out.push(BikeEffect::HotspotSelected(id));
    }

    fn cancel_reveal(&mut self) {
        self.reveal.invalidate();
        if let Some(id) = self.reveal_timer.take() {
            self.timers.cancel(id);
        }
    }
}
