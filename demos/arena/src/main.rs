//! arena: smallest example for the rust_cover tactical AI framework.
//!
//! A handful of agents idle or gather in a walled courtyard while a threat
//! patrols through it.  Agents that detect the threat flee to cover behind
//! the walls and pillars, then calm down once it has moved on.
//!
//! Usage: `arena [config.json]`.  The optional JSON file may override any
//! of `sim`, `agent` and `output_dir`; log verbosity follows `RUST_LOG`.

mod arena;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cv_behavior::{StateChange, StateKind};
use cv_core::{AgentConfig, AgentId, SimConfig, Tick, Vec3};
use cv_output::{CsvTraceWriter, TraceObserver, TraceWriter};
use cv_sim::{Diagnostics, SimBuilder, SimObserver, ThreatTrack};

// ── Constants ─────────────────────────────────────────────────────────────────

const THREAT_SPEED: f32 = 4.0;

// ── Run configuration ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunConfig {
    sim:        SimConfig,
    agent:      AgentConfig,
    output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig {
                tick_duration_secs:      0.1,
                total_ticks:             600,
                snapshot_interval_ticks: 10,
            },
            agent:      AgentConfig::default(),
            output_dir: PathBuf::from("output/arena"),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer wrapper to count events ──────────────────────────────────────────

struct CountingObserver<W: TraceWriter> {
    inner:       TraceObserver<W>,
    flee_events: usize,
    trace_rows:  usize,
}

impl<W: TraceWriter> CountingObserver<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self { inner, flee_events: 0, trace_rows: 0 }
    }
}

impl<W: TraceWriter> SimObserver for CountingObserver<W> {
    fn on_state_changed(&mut self, agent: AgentId, change: &StateChange) {
        if change.to == StateKind::Flee {
            self.flee_events += 1;
        }
        self.inner.on_state_changed(agent, change);
    }

    fn on_tick_end(&mut self, tick: Tick, agents: &[Diagnostics]) {
        self.inner.on_tick_end(tick, agents);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[Diagnostics]) {
        self.trace_rows += agents.len();
        self.inner.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let run = load_config(config_path.as_deref())?;
    info!(?config_path, total_ticks = run.sim.total_ticks, "arena starting");

    // 1. World.
    let world = arena::build_world()?;
    info!(
        regions = world.navmesh.region_count(),
        obstacles = world.obstacles.obstacle_count(),
        "world built"
    );

    // 2. Threat: enters from the south, sweeps the courtyard, leaves north.
    let threat = ThreatTrack::patrol(
        Vec3::new(0.0, 0.0, -40.0),
        vec![
            Vec3::new(0.0, 0.0, -8.0),
            Vec3::new(12.0, 0.0, -4.0),
            Vec3::new(-12.0, 0.0, 4.0),
            Vec3::new(0.0, 0.0, 40.0),
        ],
        THREAT_SPEED,
    );

    // 3. Agents: scouts idle in the middle, workers gather near the walls.
    let mut builder = SimBuilder::new(run.sim.clone()).world(world).threat(threat);
    for (x, z) in [(-3.0, -3.0), (3.0, -3.0), (0.0, 6.0)] {
        builder.add_agent(run.agent.clone(), Vec3::new(x, 0.0, z));
    }
    for (x, z) in [(-15.0, 12.0), (15.0, -12.0), (20.0, 20.0)] {
        builder.add_agent_in(run.agent.clone(), Vec3::new(x, 0.0, z), StateKind::Gather);
    }
    let agent_count = builder.agent_count();
    let mut sim = builder.build()?;

    // 4. Output.
    std::fs::create_dir_all(&run.output_dir)
        .with_context(|| format!("creating {}", run.output_dir.display()))?;
    let writer = CsvTraceWriter::new(&run.output_dir)?;
    let mut obs = CountingObserver::new(TraceObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output incomplete");
    }

    // 6. Summary.
    info!(
        agents = agent_count,
        flee_events = obs.flee_events,
        trace_rows = obs.trace_rows,
        elapsed_ms = elapsed.as_millis() as u64,
        "simulation complete"
    );

    println!("{:<8} {:<8} {:>8} {:>8} {:<6}", "Agent", "State", "x", "z", "Cover");
    println!("{}", "-".repeat(42));
    for d in sim.diagnostics() {
        println!(
            "{:<8} {:<8} {:>8.2} {:>8.2} {:<6}",
            d.agent.0,
            d.state.map_or("-", StateKind::as_str),
            d.position.x,
            d.position.z,
            if d.has_cover { "yes" } else { "no" },
        );
    }

    Ok(())
}
