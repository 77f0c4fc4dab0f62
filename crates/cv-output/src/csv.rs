//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_trace.csv`
//! - `state_changes.csv`
//!
//! Missing values (no state yet, no cover point) are written as empty
//! fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{AgentTraceRow, OutputResult, StateChangeRow};

pub const TRACE_FILE: &str = "agent_trace.csv";
pub const CHANGES_FILE: &str = "state_changes.csv";

/// Writes simulation output to two CSV files.
pub struct CsvTraceWriter {
    trace:    Writer<File>,
    changes:  Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join(TRACE_FILE))?;
        trace.write_record([
            "tick", "agent_id", "state", "x", "y", "z", "has_cover", "cover_x", "cover_y", "cover_z",
        ])?;

        let mut changes = Writer::from_path(dir.join(CHANGES_FILE))?;
        changes.write_record(["tick", "agent_id", "from", "to"])?;

        Ok(Self {
            trace,
            changes,
            finished: false,
        })
    }
}

fn opt_str<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl TraceWriter for CsvTraceWriter {
    fn write_trace(&mut self, rows: &[AgentTraceRow]) -> OutputResult<()> {
        for row in rows {
            let [cx, cy, cz] = match row.cover {
                Some([x, y, z]) => [Some(x), Some(y), Some(z)],
                None => [None; 3],
            };
            self.trace.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                opt_str(row.state),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                (row.has_cover as u8).to_string(),
                opt_str(cx),
                opt_str(cy),
                opt_str(cz),
            ])?;
        }
        Ok(())
    }

    fn write_state_change(&mut self, row: &StateChangeRow) -> OutputResult<()> {
        self.changes.write_record(&[
            row.tick.to_string(),
            row.agent_id.to_string(),
            opt_str(row.from),
            row.to.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.changes.flush()?;
        Ok(())
    }
}
