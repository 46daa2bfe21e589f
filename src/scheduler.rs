//! Delayed actions on game time.
//!
//! Every pending action names the entity it belongs to. Despawning a
//! character should go through [`Scheduler::cancel_entity`]; an action whose
//! entity is gone by the time it fires is still harmless, because `hecs`
//! entity ids carry a generation and never alias a later entity.

use hecs::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Drop `ControllerState::jumping` back to false.
    ClearJumpFlag,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: f64,
    entity: Entity,
    action: ScheduledAction,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    /// Kept in f64 so a frame's dt still registers after days of uptime.
    now: f64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Game time accumulated through [`advance`](Self::advance).
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, entity: Entity, action: ScheduledAction) -> bool {
        self.pending
            .iter()
            .any(|p| p.entity == entity && p.action == action)
    }

    pub fn schedule(&mut self, entity: Entity, delay: f32, action: ScheduledAction) {
        self.pending.push(Pending {
            due: self.now + f64::from(delay.max(0.0)),
            entity,
            action,
        });
    }

    /// Replace any pending `action` for `entity` with a fresh one.
    pub fn reschedule(&mut self, entity: Entity, delay: f32, action: ScheduledAction) {
        self.pending
            .retain(|p| !(p.entity == entity && p.action == action));
        self.schedule(entity, delay, action);
    }

    /// Drop every pending action for `entity`. Returns how many were dropped.
    pub fn cancel_entity(&mut self, entity: Entity) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.entity != entity);
        before - self.pending.len()
    }

    /// Move the clock forward by `dt` and return the actions now due, oldest
    /// deadline first.
    pub fn advance(&mut self, dt: f32) -> Vec<(Entity, ScheduledAction)> {
        self.now += f64::from(dt.max(0.0));
        let now = self.now;

        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|p| (p.entity, p.action)).collect()
    }
}
