//! Deferred tasks on a logical clock
//!
//! Tasks are tagged with the [`GameId`] that scheduled them. The queue never
//! inspects that tag; the consumer compares it against the live game when a
//! task comes due and drops tasks that belong to a replaced game.

use super::state::GameId;

/// A task waiting for its due time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<T> {
    pub due_ms: u64,
    pub owner: GameId,
    pub task: T,
    seq: u64,
}

/// Queue of deferred tasks ordered by due time, then by insertion
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    pending: Vec<Pending<T>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, owner: GameId, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due_ms: now_ms.saturating_add(delay_ms),
            owner,
            task,
            seq,
        });
    }

    /// Remove and return every task due at or before `now_ms`, in firing order
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<Pending<T>> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due_ms <= now_ms);
        self.pending = waiting;
        due.sort_by_key(|p| (p.due_ms, p.seq));
        due
    }

    /// Earliest due time, if anything is queued
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Latest due time, if anything is queued
    #[must_use]
    pub fn last_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).max()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: GameId = GameId::FIRST;

    #[test]
    fn nothing_due_before_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, 100, A, "x");
        assert!(scheduler.drain_due(99).is_empty());
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_due(), Some(100));
    }

    #[test]
    fn due_tasks_fire_in_time_then_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, 300, A, "late");
        scheduler.schedule(0, 100, A, "first");
        scheduler.schedule(0, 100, A, "second");
        scheduler.schedule(0, 500, A, "waiting");

        let fired: Vec<&str> = scheduler.drain_due(300).into_iter().map(|p| p.task).collect();
        assert_eq!(fired, ["first", "second", "late"]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.last_due(), Some(500));
    }

    #[test]
    fn owner_is_preserved() {
        let mut scheduler = Scheduler::new();
        let b = A.next();
        scheduler.schedule(10, 5, b, ());
        let fired = scheduler.drain_due(15);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].owner, b);
        assert_eq!(fired[0].due_ms, 15);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn empty_scheduler_has_no_due_time() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.next_due(), None);
        assert_eq!(scheduler.last_due(), None);
        assert!(scheduler.drain_due(u64::MAX).is_empty());
    }
}
