//! `cv-output`: trace writers for the rust_cover framework.
//!
//! The CSV backend creates two files:
//!
//! | File                | One row per                                     |
//! |---------------------|-------------------------------------------------|
//! | `agent_trace.csv`   | agent per traced tick (position, state, cover)  |
//! | `state_changes.csv` | state machine transition                        |
//!
//! Backends implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `cv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cv_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output")).unwrap();
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{AgentTraceRow, StateChangeRow};
pub use writer::TraceWriter;
