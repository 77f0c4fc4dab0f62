//! Simulation observer trait for progress reporting and data collection.

use cv_behavior::StateChange;
use cv_core::{AgentId, Tick};

use crate::Diagnostics;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: flee counter
///
/// ```rust,ignore
/// struct FleeCounter(usize);
///
/// impl SimObserver for FleeCounter {
///     fn on_state_changed(&mut self, _agent: AgentId, change: &StateChange) {
///         if change.to == StateKind::Flee {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every state machine transition, initialization included,
    /// tagged with the agent it happened to.
    fn on_state_changed(&mut self, _agent: AgentId, _change: &StateChange) {}

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with one snapshot per agent, in
    /// ascending `AgentId` order.
    fn on_tick_end(&mut self, _tick: Tick, _agents: &[Diagnostics]) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks), right after `on_tick_end`.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Diagnostics]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
