//! Page A session: scroll-driven desk stages.
//!
//! Owns every piece of mutable page state (pointer, particles, stage index,
//! tween, typewriters, timers). DOM and scene-host glue feed events in and
//! apply the [`DeskEffect`]s produced by [`DeskSession::frame`].

use crate::cancel::Ticket;
use crate::catalog::DESK_STAGE_LABELS;
use crate::constants::*;
use crate::layout::{desk_stage_poses, fit_model, Aabb, DeskAnchors, ModelFit, OrbitLimits};
use crate::particles::{FieldParams, ParticleField};
use crate::pointer::PointerState;
use crate::scheduler::Scheduler;
use crate::stage::{CameraMove, CardReveal, Stage, StageActivation, StageSequencer};
use crate::tween::{CameraPose, TweenEngine, TweenStep};
use crate::typewriter::Typewriter;
use crate::viewport::{Camera, Viewport};
use glam::Vec3;
use rand::rngs::StdRng;

pub const DESK_FOV_DEG: f32 = 45.0;
const DESK_MODEL_DROP: f32 = 0.08;
const DESK_MIN_RADIUS: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSlot {
    Caption,
    Heading(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeskEffect {
    /// Toggle `is-active` on sections and nav links.
    SectionActive(usize),
    /// Toggle `is-card-visible`; None hides every card.
    CardsVisible(Option<usize>),
    Text {
        slot: TextSlot,
        text: String,
        typing: bool,
    },
    Camera(CameraPose),
    Haptic(u32),
    HideLoading,
}

#[derive(Clone, Copy, Debug)]
enum DeskTimer {
    CardReveal { ticket: Ticket, index: usize },
    HideLoading,
}

/// Host adjustments computed once the desk model has been measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeskFit {
    pub model: ModelFit,
    pub limits: OrbitLimits,
    pub near: f32,
    pub far: f32,
}

/// Pointer-following camera drift used on the project showcase stage.
#[derive(Clone, Copy, Debug)]
struct MouseNudge {
    base: CameraPose,
    cam_offset: Vec3,
    target_offset: Vec3,
}

impl MouseNudge {
    fn reset(&mut self, base: CameraPose) {
        self.base = base;
        self.cam_offset = Vec3::ZERO;
        self.target_offset = Vec3::ZERO;
    }

    fn step(&mut self, pointer: &PointerState, r: f32) -> CameraPose {
        let (px, py) = (pointer.x, pointer.y);
        let want_cam = Vec3::new(px * r * 0.36, -py * r * 0.2, px.abs() * r * 0.08);
        let want_target = Vec3::new(px * r * 0.16, -py * r * 0.1, 0.0);
        self.cam_offset = self.cam_offset.lerp(want_cam, MOUSE_NUDGE_ALPHA);
        self.target_offset = self.target_offset.lerp(want_target, MOUSE_NUDGE_ALPHA);
        CameraPose::new(
            self.base.position + self.cam_offset,
            self.base.target + self.target_offset,
        )
    }
}

pub struct DeskSession {
    pub pointer: PointerState,
    pub field: ParticleField,
    pub camera: Camera,
    pub viewport: Viewport,
    sequencer: StageSequencer,
    tween: TweenEngine<()>,
    caption: Typewriter,
    headings: Vec<Typewriter>,
    heading_texts: Vec<String>,
    timers: Scheduler<DeskTimer>,
    pending_section: Option<usize>,
    interacting: bool,
    nudge: MouseNudge,
    model_radius: f32,
    root_y: f32,
    loaded: bool,
}

impl DeskSession {
    /// `heading_texts` are the section headings in section order.
    pub fn new(heading_texts: Vec<String>, rng: StdRng) -> Self {
        let start = CameraPose::new(Vec3::new(0.0, 1.2, 3.4), Vec3::new(0.0, 0.2, 0.0));
        Self {
            pointer: PointerState::default(),
            field: ParticleField::new(FieldParams::desk(), rng),
            camera: Camera::new(DESK_FOV_DEG, 0.01, 2000.0, start),
            viewport: Viewport::default(),
            sequencer: StageSequencer::default(),
            tween: TweenEngine::new(),
            caption: Typewriter::new(),
            headings: heading_texts.iter().map(|_| Typewriter::new()).collect(),
            heading_texts,
            timers: Scheduler::new(),
            pending_section: None,
            interacting: false,
            nudge: MouseNudge {
                base: start,
                cam_offset: Vec3::ZERO,
                target_offset: Vec3::ZERO,
            },
            model_radius: 1.0,
            root_y: 0.0,
            loaded: false,
        }
    }

    #[inline]
    pub fn current_stage(&self) -> Option<usize> {
        self.sequencer.current()
    }

    #[inline]
    pub fn model_radius(&self) -> f32 {
        self.model_radius
    }

    #[inline]
    pub fn root_y(&self) -> f32 {
        self.root_y
    }

    #[inline]
    pub fn is_tweening(&self) -> bool {
        self.tween.is_active()
    }

    /// Measure the model, derive the six stage viewpoints, re-seed particles,
    /// then snap to the first stage.
    pub fn on_model_loaded(
        &mut self,
        raw_bounds: Aabb,
        anchors: &DeskAnchors,
        now_ms: f64,
        out: &mut Vec<DeskEffect>,
    ) -> DeskFit {
        let fit = fit_model(raw_bounds, DESK_MODEL_DROP, DESK_MIN_RADIUS);
        self.model_radius = fit.radius;
        self.field.sync_with_model(fit.radius);
        self.camera.fit_clip_planes(fit.radius, 220.0, 34.0);

        // anchors were measured before centering
        let shifted = DeskAnchors {
            monitor: anchors.monitor.map(|p| p + fit.offset),
            keyboard: anchors.keyboard.map(|p| p + fit.offset),
            book: anchors.book.map(|p| p + fit.offset),
        };
        let stages = desk_stage_poses(fit.center, fit.radius, &shifted)
            .iter()
            .zip(DESK_STAGE_LABELS.iter())
            .map(|(pose, label)| Stage {
                label: *label,
                pose: *pose,
            })
            .collect();
        self.sequencer = StageSequencer::new(stages);
        self.loaded = true;
        self.activate(0, true, now_ms, out);
        self.timers
            .schedule(now_ms + LOADING_HIDE_DELAY_MS, DeskTimer::HideLoading);

        DeskFit {
            model: fit,
            limits: OrbitLimits::scaled(fit.radius, 0.55, 6.5),
            near: self.camera.znear,
            far: self.camera.zfar,
        }
    }

    /// Record a section signal from scroll or intersection; the latest one
    /// seen before the next frame wins.
    pub fn observe_section(&mut self, index: usize) {
        self.pending_section = Some(index);
    }

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.viewport.resize(width, height, &mut self.camera)
    }

    /// Camera pose as left by the orbit controls (damping, user drag).
    pub fn sync_camera(&mut self, pose: CameraPose) {
        self.camera.set_pose(pose);
    }

    /// User grabbed the orbit controls: stop any stage flight.
    pub fn controls_start(&mut self, out: &mut Vec<DeskEffect>) {
        self.interacting = true;
        self.tween.cancel();
        out.push(DeskEffect::Haptic(HAPTIC_ORBIT_MS));
    }

    pub fn controls_end(&mut self) {
        self.interacting = false;
        if self.sequencer.current() == Some(MOUSE_REACTIVE_STAGE) {
            let pose = self.camera.pose();
            self.nudge.base = CameraPose::new(
                pose.position - self.nudge.cam_offset,
                pose.target - self.nudge.target_offset,
            );
        }
    }

    /// Advance one animation frame: particles, stage, tween, nudge, text, timers.
    pub fn frame(&mut self, now_ms: f64, delta_sec: f32, elapsed_sec: f32, out: &mut Vec<DeskEffect>) {
        self.field.step(delta_sec, elapsed_sec, &mut self.pointer);

        if let Some(index) = self.pending_section.take() {
            self.activate(index, false, now_ms, out);
        }

        match self.tween.advance(now_ms) {
            TweenStep::Idle => {}
            TweenStep::Frame(pose) | TweenStep::Finished(pose, _) => {
                self.camera.set_pose(pose);
                out.push(DeskEffect::Camera(pose));
            }
        }

        if self.sequencer.current() == Some(MOUSE_REACTIVE_STAGE)
            && !self.tween.is_active()
            && !self.interacting
        {
            let pose = self.nudge.step(&self.pointer, self.model_radius);
            self.camera.set_pose(pose);
            out.push(DeskEffect::Camera(pose));
        }

        self.advance_text(now_ms, out);

        for timer in self.timers.drain_due(now_ms) {
            match timer {
                DeskTimer::CardReveal { ticket, index } => {
                    if self.sequencer.card_reveal_due(ticket) {
                        out.push(DeskEffect::CardsVisible(Some(index)));
                    }
                }
                DeskTimer::HideLoading => out.push(DeskEffect::HideLoading),
            }
        }

        if self.loaded {
            self.root_y = ((now_ms * 0.001 * 0.6).sin() * 0.008) as f32;
        }
    }

    fn activate(&mut self, index: usize, immediate: bool, now_ms: f64, out: &mut Vec<DeskEffect>) {
        let Some(act) = self.sequencer.activate(index, immediate, now_ms) else {
            return;
        };
        let StageActivation {
            index,
            caption,
            camera,
            cards,
        } = act;

        out.push(DeskEffect::SectionActive(index));
        match cards {
            CardReveal::Now => out.push(DeskEffect::CardsVisible(Some(index))),
            CardReveal::Deferred { ticket, at_ms } => {
                out.push(DeskEffect::CardsVisible(None));
                self.timers
                    .schedule(at_ms, DeskTimer::CardReveal { ticket, index });
            }
        }

        match caption {
            Some(text) => {
                self.caption.start(text, CAPTION_TYPE_INTERVAL_MS, now_ms);
                out.push(self.text_effect(TextSlot::Caption));
            }
            None => {
                self.caption.clear();
                out.push(DeskEffect::Text {
                    slot: TextSlot::Caption,
                    text: String::new(),
                    typing: false,
                });
            }
        }
        if let (Some(tw), Some(text)) = (self.headings.get_mut(index), self.heading_texts.get(index)) {
            if tw.start(text, HEADING_TYPE_INTERVAL_MS, now_ms).is_some() {
                out.push(self.text_effect(TextSlot::Heading(index)));
            }
        }
        out.push(DeskEffect::Haptic(HAPTIC_STAGE_MS));

        match camera {
            CameraMove::Snap(pose) => {
                self.nudge.reset(pose);
                self.tween.cancel();
                self.camera.set_pose(pose);
                out.push(DeskEffect::Camera(pose));
            }
            CameraMove::Tween { to, duration_ms } => {
                self.nudge.reset(to);
                self.tween
                    .start(self.camera.pose(), to, duration_ms, now_ms, None);
            }
        }
    }

    fn advance_text(&mut self, now_ms: f64, out: &mut Vec<DeskEffect>) {
        if self.caption.advance(now_ms) {
            out.push(self.text_effect(TextSlot::Caption));
        }
        for i in 0..self.headings.len() {
            if self.headings[i].advance(now_ms) {
                out.push(self.text_effect(TextSlot::Heading(i)));
            }
        }
    }

    fn text_effect(&self, slot: TextSlot) -> DeskEffect {
        let tw = match slot {
            TextSlot::Caption => &self.caption,
            TextSlot::Heading(i) => &self.headings[i],
        };
        DeskEffect::Text {
            slot,
            text: tw.visible(),
            typing: tw.is_typing(),
        }
    }
}
