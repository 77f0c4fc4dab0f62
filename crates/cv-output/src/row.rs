//! Plain data row types written by output backends.

use cv_behavior::{StateChange, StateKind};
use cv_core::AgentId;
use cv_sim::Diagnostics;

/// One agent at one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentTraceRow {
    pub tick:      u64,
    pub agent_id:  u32,
    /// `None` before the agent's state machine is initialized.
    pub state:     Option<StateKind>,
    pub x:         f32,
    pub y:         f32,
    pub z:         f32,
    pub has_cover: bool,
    /// Last cover point of the current Flee, if any.
    pub cover:     Option<[f32; 3]>,
}

impl From<&Diagnostics> for AgentTraceRow {
    fn from(d: &Diagnostics) -> Self {
        Self {
            tick:      d.tick.0,
            agent_id:  d.agent.0,
            state:     d.state,
            x:         d.position.x,
            y:         d.position.y,
            z:         d.position.z,
            has_cover: d.has_cover,
            cover:     d.cover_point.map(|p| p.to_array()),
        }
    }
}

/// One state machine transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChangeRow {
    pub tick:     u64,
    pub agent_id: u32,
    /// `None` for the initial state.
    pub from:     Option<StateKind>,
    pub to:       StateKind,
}

impl StateChangeRow {
    pub fn new(agent: AgentId, change: &StateChange) -> Self {
        Self {
            tick:     change.tick.0,
            agent_id: agent.0,
            from:     change.from,
            to:       change.to,
        }
    }
}
