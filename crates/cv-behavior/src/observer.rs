//! State-change observers.
//!
//! Observers are owned by the caller and lent to the state machine for the
//! duration of each call.  The callback returns nothing: a sink that can
//! fail keeps its error to itself (see `cv_output::TraceObserver`), so a
//! notification can never hold up a transition.

use crate::StateChange;

pub trait StateObserver {
    fn on_state_changed(&mut self, change: &StateChange);
}

/// A [`StateObserver`] that ignores every notification.
pub struct NoopObserver;

impl StateObserver for NoopObserver {
    fn on_state_changed(&mut self, _change: &StateChange) {}
}

/// Records every notification in order.
#[derive(Debug, Default, Clone)]
pub struct StateLog(pub Vec<StateChange>);

impl StateLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> &[StateChange] {
        &self.0
    }
}

impl StateObserver for StateLog {
    fn on_state_changed(&mut self, change: &StateChange) {
        self.0.push(*change);
    }
}

impl<O: StateObserver + ?Sized> StateObserver for &mut O {
    fn on_state_changed(&mut self, change: &StateChange) {
        (**self).on_state_changed(change);
    }
}

/// Fan-out: notify every observer in list order.
impl StateObserver for [&mut dyn StateObserver] {
    fn on_state_changed(&mut self, change: &StateChange) {
        for observer in self.iter_mut() {
            observer.on_state_changed(change);
        }
    }
}
