//! Eased camera transitions, one in flight per page.

use crate::cancel::{Generation, Ticket};
use glam::Vec3;

/// Camera eye position plus the orbit target it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    #[inline]
    pub fn lerp(&self, to: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(to.position, t),
            target: self.target.lerp(to.target, t),
        }
    }
}

/// Cubic ease-in-out over t in \[0, 1\].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

struct ActiveTween<C> {
    ticket: Ticket,
    from: CameraPose,
    to: CameraPose,
    start_ms: f64,
    duration_ms: f64,
    on_complete: Option<C>,
}

/// Result of advancing the engine by one display frame.
#[derive(Debug, PartialEq)]
pub enum TweenStep<C> {
    Idle,
    Frame(CameraPose),
    /// Final frame; carries the completion payload supplied at start.
    Finished(CameraPose, Option<C>),
}

/// Drives a single camera transition. `C` is whatever the caller wants handed
/// back on completion (e.g. "open the detail panel").
pub struct TweenEngine<C> {
    generation: Generation,
    active: Option<ActiveTween<C>>,
}

impl<C> Default for TweenEngine<C> {
    fn default() -> Self {
        Self {
            generation: Generation::new(),
            active: None,
        }
    }
}

impl<C> TweenEngine<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a transition from `from` (captured now) to `to`, superseding any
    /// transition already in flight.
    pub fn start(
        &mut self,
        from: CameraPose,
        to: CameraPose,
        duration_ms: f64,
        now_ms: f64,
        on_complete: Option<C>,
    ) -> Ticket {
        let ticket = self.generation.next();
        self.active = Some(ActiveTween {
            ticket,
            from,
            to,
            start_ms: now_ms,
            duration_ms,
            on_complete,
        });
        ticket
    }

    /// Stop the in-flight transition where it stands. Its completion never fires.
    pub fn cancel(&mut self) {
        self.generation.invalidate();
        self.active = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| self.generation.is_current(a.ticket))
    }

    #[inline]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.is_current(ticket)
    }

    pub fn advance(&mut self, now_ms: f64) -> TweenStep<C> {
        let Some(active) = self.active.as_mut() else {
            return TweenStep::Idle;
        };
        if !self.generation.is_current(active.ticket) {
            self.active = None;
            return TweenStep::Idle;
        }
        let t = if active.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - active.start_ms) / active.duration_ms).clamp(0.0, 1.0) as f32
        };
        let pose = active.from.lerp(&active.to, ease_in_out_cubic(t));
        if t < 1.0 {
            return TweenStep::Frame(pose);
        }
        let done = active.on_complete.take();
        self.active = None;
        TweenStep::Finished(pose, done)
    }
}
