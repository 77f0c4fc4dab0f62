//! Gather: resource work that a detected threat always interrupts.

use tracing::debug;

use crate::{AgentContext, Behavior, StateKind, Transition};

#[derive(Clone, Copy, Debug, Default)]
pub struct GatherState;

impl Behavior for GatherState {
    fn kind(&self) -> StateKind {
        StateKind::Gather
    }

    fn enter(&mut self, ctx: &mut AgentContext<'_>) {
        debug!(tick = ctx.tick.0, "entering Gather");
    }

    fn execute(&mut self, ctx: &mut AgentContext<'_>) -> Transition {
        // Threat check runs first; nothing else happens on a tick it fires.
        if ctx.is_threat_detected() {
            return Transition::To(StateKind::Flee);
        }
        Transition::Stay
    }
}
