/// Minimal finite-state-machine container.
///
/// `S` is the state type (usually a fieldless enum). The machine tracks the
/// current state and how long it has been in it. Transition rules are not
/// part of the machine; the system that owns it decides what `next` is and
/// calls [`go`](Self::go).
///
/// # Usage
/// ```
/// use chargejump::fsm::StateMachine;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Door { Open, Closed }
///
/// let mut fsm = StateMachine::new(Door::Closed);
/// fsm.tick(0.016);
/// assert!(fsm.go(Door::Open));
/// assert_eq!(fsm.elapsed(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct StateMachine<S: Copy + PartialEq> {
    state: S,
    /// Seconds spent in the current state. Reset to 0.0 on each transition.
    elapsed: f32,
}

impl<S: Copy + PartialEq> StateMachine<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            elapsed: 0.0,
        }
    }

    pub fn state(&self) -> S {
        self.state
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Move to `next` if it differs from the current state. Returns whether
    /// a transition happened.
    pub fn go(&mut self, next: S) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        self.elapsed = 0.0;
        true
    }

    /// Advance the in-state timer. Call once per tick **before** evaluating
    /// transitions.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}
