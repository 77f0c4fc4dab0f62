//! The `Sim` struct and its tick loop.

use cv_behavior::StateKind;
use cv_core::{AgentId, SimClock, SimConfig, Tick};
use tracing::{debug, info};

use crate::{Controller, Diagnostics, SimError, SimObserver, SimResult, ThreatTrack, World};

/// The main simulation runner.
///
/// `Sim` holds all simulation state and drives the tick loop:
///
/// 1. **Threat**: the [`ThreatTrack`] advances by one tick duration.
/// 2. **Behavior**: every [`Controller`] runs its state machine against the
///    new threat position, in ascending `AgentId` order.
/// 3. **Movement**: every mover steps toward its destination.
/// 4. **Hooks**: `on_tick_end`, then `on_snapshot` on snapshot ticks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, tick duration, snapshot cadence).
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick.
    pub clock: SimClock,

    /// Walkable surface and obstacles shared by all agents.
    pub world: World,

    pub threat: ThreatTrack,

    /// One controller per agent, indexed by `AgentId`.
    pub agents: Vec<Controller>,

    /// Start state per agent, consumed on the first tick.
    pub(crate) starts: Vec<StateKind>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            agents = self.agents.len(),
            total_ticks = self.config.total_ticks,
            "simulation starting"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        info!(final_tick = self.clock.current_tick.0, "simulation finished");
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    pub fn agent(&self, id: AgentId) -> Option<&Controller> {
        self.agents.get(id.index())
    }

    /// Order an agent into `kind` right now, outside the tick loop.
    ///
    /// Uninitialized agents take `kind` as their first state.
    pub fn change_state<O: SimObserver>(
        &mut self,
        id:       AgentId,
        kind:     StateKind,
        observer: &mut O,
    ) -> SimResult<()> {
        let controller = self.agents.get_mut(id.index()).ok_or(SimError::AgentNotFound(id))?;
        controller.change_state(
            kind,
            &self.world,
            self.threat.position(),
            self.clock.current_tick,
            observer,
        );
        Ok(())
    }

    /// One snapshot per agent at the current tick.
    pub fn diagnostics(&self) -> Vec<Diagnostics> {
        let threat = self.threat.position();
        self.agents
            .iter()
            .map(|c| c.diagnostics(self.clock.current_tick, threat))
            .collect()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let diagnostics = self.process_tick(now, observer)?;

        observer.on_tick_end(now, &diagnostics);
        if now.is_multiple_of(self.config.snapshot_interval_ticks) {
            observer.on_snapshot(now, &diagnostics);
        }
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<Vec<Diagnostics>> {
        let dt = self.clock.tick_duration_secs;

        // ── Phase 0: first-tick initialization ────────────────────────────
        let threat = self.threat.position();
        for (controller, &start) in self.agents.iter_mut().zip(&self.starts) {
            if !controller.is_initialized() {
                controller.initialize(start, &self.world, threat, now, observer)?;
            }
        }

        // ── Phase 1: threat movement ──────────────────────────────────────
        self.threat.advance(dt);
        let threat = self.threat.position();

        // ── Phase 2: behavior ─────────────────────────────────────────────
        for controller in &mut self.agents {
            controller.tick(&self.world, threat, now, observer)?;
        }

        // ── Phase 3: movement ─────────────────────────────────────────────
        let mut moved = 0;
        for controller in &mut self.agents {
            if controller.advance(dt) > 0.0 {
                moved += 1;
            }
        }
        debug!(tick = now.0, moved, "tick processed");

        Ok(self.agents.iter().map(|c| c.diagnostics(now, threat)).collect())
    }
}
