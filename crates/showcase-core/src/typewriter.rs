use crate::cancel::{Generation, Ticket};

/// Character-by-character text reveal for one text element.
///
/// The latest `start` always wins: it resets the visible text to empty and
/// the previous string's remaining characters are never shown.
#[derive(Debug, Default)]
pub struct Typewriter {
    generation: Generation,
    ticket: Option<Ticket>,
    chars: Vec<char>,
    shown: usize,
    interval_ms: f64,
    started_ms: f64,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `text`. The first character appears immediately.
    /// Empty text is ignored and leaves the element as it was.
    pub fn start(&mut self, text: &str, interval_ms: f64, now_ms: f64) -> Option<Ticket> {
        if text.is_empty() {
            return None;
        }
        let ticket = self.generation.next();
        self.ticket = Some(ticket);
        self.chars = text.chars().collect();
        self.shown = 1;
        self.interval_ms = interval_ms.max(0.0);
        self.started_ms = now_ms;
        Some(ticket)
    }

    /// Blank the element and drop any reveal in progress.
    pub fn clear(&mut self) {
        self.generation.invalidate();
        self.ticket = None;
        self.chars.clear();
        self.shown = 0;
    }

    /// Reveal every character whose tick has come due. Returns true when the
    /// visible text changed.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let Some(ticket) = self.ticket else {
            return false;
        };
        if !self.generation.is_current(ticket) || self.shown >= self.chars.len() {
            return false;
        }
        let due = if self.interval_ms <= 0.0 {
            self.chars.len()
        } else {
            1 + ((now_ms - self.started_ms) / self.interval_ms).floor().max(0.0) as usize
        };
        let next = due.min(self.chars.len());
        if next <= self.shown {
            return false;
        }
        self.shown = next;
        true
    }

    #[inline]
    pub fn is_typing(&self) -> bool {
        self.ticket.is_some() && self.shown < self.chars.len()
    }

    #[inline]
    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }
}
