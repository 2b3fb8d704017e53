//! Scroll-driven stage sequencing for the desk page.

use crate::cancel::{Generation, Ticket};
use crate::constants::{CARD_REVEAL_DELAY_MS, SECTION_ACTIVE_RATIO, STAGE_TWEEN_MS};
use crate::tween::CameraPose;

#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub label: &'static str,
    pub pose: CameraPose,
}

/// How the camera should reach a newly activated stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraMove {
    Snap(CameraPose),
    Tween { to: CameraPose, duration_ms: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardReveal {
    Now,
    Deferred { ticket: Ticket, at_ms: f64 },
}

/// Everything the page has to do in response to a stage change.
#[derive(Clone, Debug, PartialEq)]
pub struct StageActivation {
    pub index: usize,
    /// None clears the caption.
    pub caption: Option<&'static str>,
    pub camera: CameraMove,
    pub cards: CardReveal,
}

/// Section index signalled by an intersection observer entry.
#[inline]
pub fn section_from_intersection(is_intersecting: bool, ratio: f64, index: usize) -> Option<usize> {
    (is_intersecting && ratio >= SECTION_ACTIVE_RATIO).then_some(index)
}

/// Section whose vertical center sits closest to the viewport midpoint.
pub fn nearest_section(centers: &[f64], viewport_mid: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in centers.iter().enumerate() {
        let delta = (c - viewport_mid).abs();
        match best {
            Some((_, bd)) if delta >= bd => {}
            _ => best = Some((i, delta)),
        }
    }
    best.map(|(i, _)| i)
}

#[derive(Default)]
pub struct StageSequencer {
    stages: Vec<Stage>,
    current: Option<usize>,
    cards: Generation,
}

impl StageSequencer {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self {
            stages,
            current: None,
            cards: Generation::new(),
        }
    }

    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Switch to `index`. Unknown or already-active indices are a no-op.
    /// `immediate` snaps the camera and shows the cards at once (first load).
    pub fn activate(&mut self, index: usize, immediate: bool, now_ms: f64) -> Option<StageActivation> {
        let stage = self.stages.get(index)?;
        if self.current == Some(index) {
            return None;
        }
        self.current = Some(index);
        log::info!("[stage] activate {} immediate={}", index, immediate);

        let caption = (!stage.label.is_empty()).then_some(stage.label);
        let camera = if immediate {
            CameraMove::Snap(stage.pose)
        } else {
            CameraMove::Tween {
                to: stage.pose,
                duration_ms: STAGE_TWEEN_MS,
            }
        };
        let cards = if immediate {
            self.cards.invalidate();
            CardReveal::Now
        } else {
            CardReveal::Deferred {
                ticket: self.cards.next(),
                at_ms: now_ms + CARD_REVEAL_DELAY_MS,
            }
        };
        Some(StageActivation {
            index,
            caption,
            camera,
            cards,
        })
    }

    /// A deferred card reveal only lands if no later activation superseded it.
    #[inline]
    pub fn card_reveal_due(&self, ticket: Ticket) -> bool {
        self.cards.is_current(ticket)
    }
}
