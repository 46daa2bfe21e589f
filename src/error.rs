//! Error taxonomy.
//!
//! Configuration problems are fatal and surface as [`ConfigError`] from
//! construction. Everything that can go wrong mid-tick is a
//! [`MissingCollaborator`]: the affected component does nothing that tick
//! and the problem is logged once.

use std::collections::HashSet;
use std::fmt;

use hecs::Entity;

pub use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingCollaborator {
    /// A controlled character without a rigid body (velocity).
    Body,
    /// The camera's follow target is gone.
    CameraTarget,
}

impl fmt::Display for MissingCollaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingCollaborator::Body => write!(f, "character has no physics body"),
            MissingCollaborator::CameraTarget => write!(f, "camera follow target is missing"),
        }
    }
}

/// Remembers which collaborators have already been reported, so a missing
/// body does not flood the log at 60 Hz.
#[derive(Debug, Default)]
pub struct CollaboratorLog {
    reported: HashSet<MissingCollaborator>,
}

impl CollaboratorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log `kind` the first time it is seen. Returns whether this call logged.
    pub fn report(&mut self, kind: MissingCollaborator, entity: Option<Entity>) -> bool {
        if !self.reported.insert(kind) {
            return false;
        }
        match entity {
            Some(e) => log::warn!("{kind} ({e:?}); skipping it until it comes back"),
            None => log::warn!("{kind}; skipping it until it comes back"),
        }
        true
    }

    pub fn has_reported(&self, kind: MissingCollaborator) -> bool {
        self.reported.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_kind_once() {
        let mut log = CollaboratorLog::new();
        assert!(log.report(MissingCollaborator::Body, None));
        assert!(!log.report(MissingCollaborator::Body, None));
        assert!(log.report(MissingCollaborator::CameraTarget, None));
        assert!(log.has_reported(MissingCollaborator::Body));
    }
}
