//! Scheduled-event queue: logical timers keyed by due tick.
//!
//! Spawn timers and delayed enemy fire live here instead of in callbacks.
//! The queue is drained once per Playing tick and cancelled as a unit
//! when a session ends.

use std::collections::BTreeMap;

use broadside_core::components::EntityId;

/// A timer payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEvent {
    /// Repeating hazard spawn.
    SpawnHazard,
    /// Repeating enemy spawn.
    SpawnEnemy,
    /// One-shot: the given enemy fires at the vessel, if it still exists.
    EnemyFire { enemy: EntityId },
}

/// Events ordered by (due tick, scheduling sequence). Ties on the same
/// tick pop in the order they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: BTreeMap<(u64, u64), ScheduledEvent>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_tick: u64, event: ScheduledEvent) {
        self.pending.insert((due_tick, self.next_seq), event);
        self.next_seq += 1;
    }

    /// Pop the earliest event due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(u64, ScheduledEvent)> {
        let (&(due, _), _) = self.pending.first_key_value()?;
        if due > now {
            return None;
        }
        self.pending.pop_first().map(|((due, _), event)| (due, event))
    }

    /// Drop every armed timer.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Due tick of the first pending event matching `event`.
    pub fn due_tick_of(&self, event: ScheduledEvent) -> Option<u64> {
        self.pending
            .iter()
            .find(|(_, e)| **e == event)
            .map(|(&(due, _), _)| due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order_then_schedule_order() {
        let mut queue = EventQueue::new();
        queue.schedule(10, ScheduledEvent::SpawnEnemy);
        queue.schedule(5, ScheduledEvent::SpawnHazard);
        queue.schedule(10, ScheduledEvent::EnemyFire { enemy: EntityId(3) });

        assert_eq!(queue.pop_due(4), None);
        assert_eq!(queue.pop_due(10), Some((5, ScheduledEvent::SpawnHazard)));
        assert_eq!(queue.pop_due(10), Some((10, ScheduledEvent::SpawnEnemy)));
        assert_eq!(
            queue.pop_due(10),
            Some((10, ScheduledEvent::EnemyFire { enemy: EntityId(3) }))
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn cancel_all_disarms_everything() {
        let mut queue = EventQueue::new();
        queue.schedule(1, ScheduledEvent::SpawnHazard);
        queue.schedule(2, ScheduledEvent::EnemyFire { enemy: EntityId(0) });
        queue.cancel_all();
        assert!(queue.is_empty());
        assert_eq!(queue.pop_due(u64::MAX), None);
    }

    #[test]
    fn due_tick_lookup() {
        let mut queue = EventQueue::new();
        queue.schedule(120, ScheduledEvent::SpawnHazard);
        queue.schedule(240, ScheduledEvent::SpawnEnemy);
        assert_eq!(queue.due_tick_of(ScheduledEvent::SpawnEnemy), Some(240));
        assert_eq!(
            queue.due_tick_of(ScheduledEvent::EnemyFire { enemy: EntityId(1) }),
            None
        );
    }
}
