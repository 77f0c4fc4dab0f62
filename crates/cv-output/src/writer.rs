//! The `TraceWriter` trait implemented by backend writers.

use crate::{AgentTraceRow, OutputResult, StateChangeRow};

/// Sink for trace rows.
///
/// Errors are returned here but stored by [`TraceObserver`][crate::TraceObserver],
/// since observer callbacks cannot fail.
pub trait TraceWriter {
    /// Write a batch of per-agent rows for one tick.
    fn write_trace(&mut self, rows: &[AgentTraceRow]) -> OutputResult<()>;

    fn write_state_change(&mut self, row: &StateChangeRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
