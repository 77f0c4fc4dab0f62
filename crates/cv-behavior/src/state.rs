//! The behavior capability and the closed set of agent states.

use std::fmt;

use crate::{AgentContext, FleeState, GatherState, IdleState};

// ── StateKind ─────────────────────────────────────────────────────────────────

/// Identity of a behavior state, without its private data.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StateKind {
    Idle,
    Gather,
    Flee,
}

impl StateKind {
    /// Human-readable label, used in logs and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::Idle   => "idle",
            StateKind::Gather => "gather",
            StateKind::Flee   => "flee",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Transition ────────────────────────────────────────────────────────────────

/// What a state asks the machine to do after its `execute`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Transition {
    Stay,
    To(StateKind),
}

// ── Behavior ──────────────────────────────────────────────────────────────────

/// One unit of agent behavior.
///
/// The lifecycle, driven by [`StateMachine`][crate::StateMachine]:
///
/// 1. `enter`: once, when the state becomes current.
/// 2. `execute`: every tick while current; may request a transition.
/// 3. `exit`: once, when another state replaces it.
pub trait Behavior {
    fn kind(&self) -> StateKind;

    fn enter(&mut self, _ctx: &mut AgentContext<'_>) {}

    fn execute(&mut self, ctx: &mut AgentContext<'_>) -> Transition;

    fn exit(&mut self, _ctx: &mut AgentContext<'_>) {}
}

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// The current state of an agent, carrying only that state's private data.
#[derive(Clone, Debug)]
pub enum BehaviorState {
    Idle(IdleState),
    Gather(GatherState),
    Flee(FleeState),
}

impl BehaviorState {
    /// The Flee state's data when fleeing (cover point, cover held).
    pub fn as_flee(&self) -> Option<&FleeState> {
        match self {
            BehaviorState::Flee(flee) => Some(flee),
            _ => None,
        }
    }
}

impl From<StateKind> for BehaviorState {
    /// A fresh state of the given kind.
    fn from(kind: StateKind) -> Self {
        match kind {
            StateKind::Idle   => BehaviorState::Idle(IdleState),
            StateKind::Gather => BehaviorState::Gather(GatherState),
            StateKind::Flee   => BehaviorState::Flee(FleeState::default()),
        }
    }
}

impl Behavior for BehaviorState {
    fn kind(&self) -> StateKind {
        match self {
            BehaviorState::Idle(s)   => s.kind(),
            BehaviorState::Gather(s) => s.kind(),
            BehaviorState::Flee(s)   => s.kind(),
        }
    }

    fn enter(&mut self, ctx: &mut AgentContext<'_>) {
        match self {
            BehaviorState::Idle(s)   => s.enter(ctx),
            BehaviorState::Gather(s) => s.enter(ctx),
            BehaviorState::Flee(s)   => s.enter(ctx),
        }
    }

    fn execute(&mut self, ctx: &mut AgentContext<'_>) -> Transition {
        match self {
            BehaviorState::Idle(s)   => s.execute(ctx),
            BehaviorState::Gather(s) => s.execute(ctx),
            BehaviorState::Flee(s)   => s.execute(ctx),
        }
    }

    fn exit(&mut self, ctx: &mut AgentContext<'_>) {
        match self {
            BehaviorState::Idle(s)   => s.exit(ctx),
            BehaviorState::Gather(s) => s.exit(ctx),
            BehaviorState::Flee(s)   => s.exit(ctx),
        }
    }
}
