//! The state machine driver.

use cv_core::Tick;
use tracing::debug;

use crate::{
    AgentContext, Behavior, BehaviorError, BehaviorResult, BehaviorState, StateKind,
    StateObserver, Transition,
};

/// Notification sent to observers after every state change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StateChange {
    pub tick: Tick,
    /// The state that was exited; `None` for initialization.
    pub from: Option<StateKind>,
    pub to:   StateKind,
}

/// Holds exactly one current state once initialized and runs transitions.
///
/// Every transition is `exit(old)` → replace → `enter(new)` → notify,
/// synchronously.  There is no self-transition guard: changing to the kind
/// that is already current exits and re-enters it.
#[derive(Debug, Default)]
pub struct StateMachine {
    current:     Option<BehaviorState>,
    transitions: u64,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the starting state, enter it, and notify.
    ///
    /// # Errors
    ///
    /// [`BehaviorError::AlreadyInitialized`] if a state is already current.
    pub fn initialize<O: StateObserver + ?Sized>(
        &mut self,
        start:    BehaviorState,
        ctx:      &mut AgentContext<'_>,
        observer: &mut O,
    ) -> BehaviorResult<()> {
        if self.current.is_some() {
            return Err(BehaviorError::AlreadyInitialized);
        }
        self.change_state(start, ctx, observer);
        Ok(())
    }

    /// Exit the current state (if any), enter `next`, and notify.
    pub fn change_state<O: StateObserver + ?Sized>(
        &mut self,
        next:     BehaviorState,
        ctx:      &mut AgentContext<'_>,
        observer: &mut O,
    ) {
        let from = self.current.as_mut().map(|state| {
            state.exit(ctx);
            state.kind()
        });

        let state = self.current.insert(next);
        state.enter(ctx);
        let to = state.kind();
        self.transitions += 1;

        debug!(tick = ctx.tick.0, from = ?from, %to, "state change");
        observer.on_state_changed(&StateChange { tick: ctx.tick, from, to });
    }

    /// Run one tick of the current state, applying any transition it asks
    /// for before returning.
    ///
    /// # Errors
    ///
    /// [`BehaviorError::NotInitialized`] if called before
    /// [`initialize`](Self::initialize).
    pub fn update<O: StateObserver + ?Sized>(
        &mut self,
        ctx:      &mut AgentContext<'_>,
        observer: &mut O,
    ) -> BehaviorResult<()> {
        let state = self.current.as_mut().ok_or(BehaviorError::NotInitialized)?;
        if let Transition::To(kind) = state.execute(ctx) {
            self.change_state(kind.into(), ctx, observer);
        }
        Ok(())
    }

    pub fn current(&self) -> Option<&BehaviorState> {
        self.current.as_ref()
    }

    pub fn current_kind(&self) -> Option<StateKind> {
        self.current.as_ref().map(Behavior::kind)
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Number of `enter` calls so far, initialization included.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }
}
