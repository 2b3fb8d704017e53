//! Generation counters for cooperative cancellation.
//!
//! Every deferred continuation (tween frame, typewriter tick, delayed reveal)
//! captures a [`Ticket`] when it is started. Starting a newer operation of the
//! same kind bumps the [`Generation`], so the older ticket no longer matches and
//! its continuation becomes a no-op at its next resumption point.

/// Opaque handle identifying one started operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new operation, invalidating every previously issued ticket.
    #[inline]
    pub fn next(&mut self) -> Ticket {
        self.current = self.current.wrapping_add(1);
        Ticket(self.current)
    }

    /// Invalidate outstanding tickets without starting anything.
    #[inline]
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    #[inline]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current == ticket.0
    }
}
