//! Single-threaded timer queue drained once per animation frame.
//!
//! Replaces ad hoc `setTimeout` continuations: a page session schedules a task
//! for a point in time and the frame loop hands back every task that has come
//! due, in due-time order (insertion order breaks ties).

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    due_ms: f64,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    entries: SmallVec<[Entry<T>; 4]>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, task: T) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        // keep sorted by due time; equal times stay in insertion order
        let at = self
            .entries
            .iter()
            .position(|e| e.due_ms > due_ms)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, Entry { id, due_ms, task });
        id
    }

    /// Drop a pending task. Returns false when it already ran or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn drain_due(&mut self, now_ms: f64) -> Vec<T> {
        let split = self
            .entries
            .iter()
            .position(|e| e.due_ms > now_ms)
            .unwrap_or(self.entries.len());
        self.entries.drain(..split).map(|e| e.task).collect()
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_due_order_and_keeps_future_tasks() {
        let mut s = Scheduler::new();
        s.schedule(300.0, "c");
        s.schedule(100.0, "a");
        s.schedule(100.0, "b");
        assert_eq!(s.drain_due(150.0), vec!["a", "b"]);
        assert_eq!(s.pending(), 1);
        assert!(s.drain_due(299.0).is_empty());
        assert_eq!(s.drain_due(300.0), vec!["c"]);
        assert!(s.is_empty());
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut s = Scheduler::new();
        let id = s.schedule(10.0, 1);
        s.schedule(20.0, 2);
        assert!(s.cancel(id));
        assert!(!s.cancel(id));
        assert_eq!(s.drain_due(100.0), vec![2]);
    }
}
