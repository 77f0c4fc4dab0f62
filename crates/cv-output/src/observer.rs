//! `TraceObserver<W>`: bridges `SimObserver` to a `TraceWriter`.

use cv_behavior::StateChange;
use cv_core::{AgentId, Tick};
use cv_sim::{Diagnostics, SimObserver};

use crate::row::{AgentTraceRow, StateChangeRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes state changes and agent traces to any
/// [`TraceWriter`] backend.
///
/// Every transition is written.  Agent rows are written on snapshot ticks,
/// or on every tick after [`every_tick`](Self::every_tick).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    every_tick: bool,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, every_tick: false, last_error: None }
    }

    /// Trace every tick instead of only snapshot ticks.
    pub fn every_tick(mut self) -> Self {
        self.every_tick = true;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_agents(&mut self, agents: &[Diagnostics]) {
        if agents.is_empty() {
            return;
        }
        let rows: Vec<AgentTraceRow> = agents.iter().map(AgentTraceRow::from).collect();
        let result = self.writer.write_trace(&rows);
        self.store_err(result);
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_state_changed(&mut self, agent: AgentId, change: &StateChange) {
        let result = self.writer.write_state_change(&StateChangeRow::new(agent, change));
        self.store_err(result);
    }

    fn on_tick_end(&mut self, _tick: Tick, agents: &[Diagnostics]) {
        if self.every_tick {
            self.write_agents(agents);
        }
    }

    fn on_snapshot(&mut self, _tick: Tick, agents: &[Diagnostics]) {
        if !self.every_tick {
            self.write_agents(agents);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
