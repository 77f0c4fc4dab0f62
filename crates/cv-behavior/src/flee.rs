//! Flee: run at panic speed toward cover, re-checking it on a budget.
//!
//! # Re-evaluation policy (per tick)
//!
//! 1. Cover held and the agent has arrived (remaining distance below
//!    `arrival_threshold`): test the agent's own position.  If the threat
//!    can see it, the cover is compromised and the search runs again.
//! 2. Otherwise, on ticks that are a multiple of
//!    `reevaluate_interval_ticks`: if cover is not held, search again.
//! 3. Independently of 1 and 2: once the threat is farther than
//!    `flee_exit_distance`, go back to Idle.

use tracing::{debug, warn};

use crate::{AgentContext, Behavior, CoverFinder, StateKind, Transition};

#[derive(Clone, Copy, Debug, Default)]
pub struct FleeState {
    finder: CoverFinder,
}

impl FleeState {
    pub fn finder(&self) -> &CoverFinder {
        &self.finder
    }

    pub fn has_cover(&self) -> bool {
        self.finder.has_cover()
    }
}

impl Behavior for FleeState {
    fn kind(&self) -> StateKind {
        StateKind::Flee
    }

    fn enter(&mut self, ctx: &mut AgentContext<'_>) {
        debug!(tick = ctx.tick.0, "entering Flee");
        ctx.nav.set_stopped(false);
        ctx.nav.set_speed(ctx.config.panic_speed);

        if self.finder.find_cover(ctx).is_none() {
            warn!(tick = ctx.tick.0, "fleeing with no known threat");
        }
    }

    fn execute(&mut self, ctx: &mut AgentContext<'_>) -> Transition {
        let Some(threat) = ctx.threat else {
            return Transition::To(StateKind::Idle);
        };

        if self.finder.has_cover() && ctx.nav.remaining_distance() < ctx.config.arrival_threshold {
            if CoverFinder::can_threat_see(ctx, ctx.position) {
                debug!(tick = ctx.tick.0, "cover compromised");
                self.finder.find_cover(ctx);
            }
        } else if ctx.tick.is_multiple_of(ctx.config.reevaluate_interval_ticks)
            && !self.finder.has_cover()
        {
            self.finder.find_cover(ctx);
        }

        if ctx.position.distance(threat) > ctx.config.flee_exit_distance {
            Transition::To(StateKind::Idle)
        } else {
            Transition::Stay
        }
    }

    fn exit(&mut self, ctx: &mut AgentContext<'_>) {
        debug!(tick = ctx.tick.0, "leaving Flee");
        ctx.nav.set_speed(ctx.config.base_speed);
        self.finder.release();
    }
}
