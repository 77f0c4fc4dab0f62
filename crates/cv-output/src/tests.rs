//! Integration tests for cv-output.

#[cfg(test)]
mod csv_tests {
    use cv_behavior::StateKind;
    use tempfile::TempDir;

    use crate::csv::{CHANGES_FILE, CsvTraceWriter, TRACE_FILE};
    use crate::row::{AgentTraceRow, StateChangeRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trace_row(agent_id: u32, tick: u64, cover: Option<[f32; 3]>) -> AgentTraceRow {
        AgentTraceRow {
            tick,
            agent_id,
            state:     Some(StateKind::Flee),
            x:         1.5,
            y:         0.0,
            z:         -2.0,
            has_cover: cover.is_some(),
            cover,
        }
    }

    fn records(path: std::path::PathBuf) -> Vec<Vec<String>> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect()
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRACE_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, [
            "tick", "agent_id", "state", "x", "y", "z", "has_cover", "cover_x", "cover_y", "cover_z",
        ]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(CHANGES_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "agent_id", "from", "to"]);
    }

    #[test]
    fn trace_rows_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_trace(&[trace_row(0, 5, Some([0.0, 0.0, 10.0])), trace_row(1, 5, None)]).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join(TRACE_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["5", "0", "flee", "1.5", "0", "-2", "1", "0", "0", "10"]);
        assert_eq!(rows[1], ["5", "1", "flee", "1.5", "0", "-2", "0", "", "", ""]);
    }

    #[test]
    fn initial_change_has_empty_from() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_state_change(&StateChangeRow { tick: 0, agent_id: 3, from: None, to: StateKind::Idle })
            .unwrap();
        w.write_state_change(&StateChangeRow {
            tick:     7,
            agent_id: 3,
            from:     Some(StateKind::Idle),
            to:       StateKind::Flee,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join(CHANGES_FILE));
        assert_eq!(rows, [["0", "3", "", "idle"], ["7", "3", "idle", "flee"]]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvTraceWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use cv_behavior::{StateChange, StateKind};
    use cv_core::{AgentConfig, AgentId, LayerMask, SimConfig, Tick, Vec3};
    use cv_sim::{Diagnostics, SimBuilder, SimObserver, ThreatTrack, World};
    use cv_spatial::{NavMeshBuilder, ObstacleFieldBuilder};

    use crate::{
        AgentTraceRow, CsvTraceWriter, OutputError, OutputResult, StateChangeRow, TraceObserver,
        TraceWriter,
    };

    /// Keeps rows in memory; fails every write once `fail` is set.
    #[derive(Default)]
    struct MemWriter {
        trace:    Vec<AgentTraceRow>,
        changes:  Vec<StateChangeRow>,
        finished: usize,
        fail:     bool,
    }

    impl MemWriter {
        fn check(&self) -> OutputResult<()> {
            if self.fail {
                Err(OutputError::Io(io::Error::other("disk full")))
            } else {
                Ok(())
            }
        }
    }

    impl TraceWriter for MemWriter {
        fn write_trace(&mut self, rows: &[AgentTraceRow]) -> OutputResult<()> {
            self.check()?;
            self.trace.extend_from_slice(rows);
            Ok(())
        }

        fn write_state_change(&mut self, row: &StateChangeRow) -> OutputResult<()> {
            self.check()?;
            self.changes.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            self.check()
        }
    }

    fn diag(agent: u32, tick: u64) -> Diagnostics {
        Diagnostics {
            agent:            AgentId(agent),
            tick:             Tick(tick),
            state:            Some(StateKind::Idle),
            position:         Vec3::new(agent as f32, 0.0, 0.0),
            threat:           None,
            detection_radius: 10.0,
            cover_point:      None,
            has_cover:        false,
            search_radius:    10.0,
        }
    }

    #[test]
    fn snapshots_only_by_default() {
        let mut obs = TraceObserver::new(MemWriter::default());
        obs.on_tick_end(Tick(0), &[diag(0, 0)]);
        obs.on_snapshot(Tick(0), &[diag(0, 0), diag(1, 0)]);
        let w = obs.into_writer();
        assert_eq!(w.trace.len(), 2);
        assert_eq!(w.trace[1].agent_id, 1);
    }

    #[test]
    fn every_tick_traces_tick_ends() {
        let mut obs = TraceObserver::new(MemWriter::default()).every_tick();
        obs.on_tick_end(Tick(0), &[diag(0, 0)]);
        obs.on_tick_end(Tick(1), &[diag(0, 1)]);
        obs.on_snapshot(Tick(1), &[diag(0, 1)]);
        assert_eq!(obs.into_writer().trace.len(), 2);
    }

    #[test]
    fn first_error_kept_and_finish_still_called() {
        let mut obs = TraceObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        let change = StateChange { tick: Tick(0), from: None, to: StateKind::Idle };
        obs.on_state_changed(AgentId(0), &change);
        obs.on_snapshot(Tick(0), &[diag(0, 0)]);
        obs.on_sim_end(Tick(1));

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().finished, 1);
    }

    #[test]
    fn full_run_to_csv() {
        let mut nav = NavMeshBuilder::new();
        nav.add_region(-20.0, -20.0, 20.0, 20.0, 0.0).unwrap();
        let mut walls = ObstacleFieldBuilder::new();
        walls.add_wall(-5.0, 4.0, 5.0, 5.0, 3.0, LayerMask::layer(0)).unwrap();

        let config = SimConfig { tick_duration_secs: 0.1, total_ticks: 30, snapshot_interval_ticks: 10 };
        let mut b = SimBuilder::new(config)
            .world(World::new(nav.build(), walls.build()))
            .threat(ThreatTrack::stationary(Vec3::new(0.0, 0.0, -6.0)));
        b.add_agent(AgentConfig::default(), Vec3::ZERO);
        b.add_agent(AgentConfig::default(), Vec3::new(15.0, 0.0, 15.0));
        let mut sim = b.build().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("state_changes.csv")).unwrap();
        let changes: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        assert_eq!(changes[0], ["0", "0", "", "idle"]);
        assert_eq!(changes[1], ["0", "1", "", "idle"]);
        assert_eq!(changes[2], ["0", "0", "idle", "flee"]);

        // Snapshots at ticks 0, 10, 20 for two agents.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_trace.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
    }
}
