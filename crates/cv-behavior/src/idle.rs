//! Idle: stand still until a threat comes close.

use tracing::debug;

use crate::{AgentContext, Behavior, StateKind, Transition};

#[derive(Clone, Copy, Debug, Default)]
pub struct IdleState;

impl Behavior for IdleState {
    fn kind(&self) -> StateKind {
        StateKind::Idle
    }

    fn enter(&mut self, ctx: &mut AgentContext<'_>) {
        debug!(tick = ctx.tick.0, "entering Idle");
    }

    fn execute(&mut self, ctx: &mut AgentContext<'_>) -> Transition {
        if ctx.is_threat_detected() {
            Transition::To(StateKind::Flee)
        } else {
            Transition::Stay
        }
    }
}
