//! Fluent builder for constructing a [`Sim`].

use cv_behavior::StateKind;
use cv_core::{AgentConfig, AgentId, SimConfig, Vec3};

use crate::{Controller, Sim, SimError, SimResult, ThreatTrack, World};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                 |
/// |---------------|-------------------------|
/// | `.world(w)`   | `World::empty()`        |
/// | `.threat(t)`  | `ThreatTrack::absent()` |
///
/// Agents are added one at a time and get sequential `AgentId`s from 0.
///
/// # Example
///
/// ```rust,ignore
/// let mut b = SimBuilder::new(config).world(world).threat(track);
/// let scout = b.add_agent(AgentConfig::default(), Vec3::ZERO);
/// b.add_agent_in(AgentConfig::default(), Vec3::new(4.0, 0.0, 0.0), StateKind::Gather);
/// let mut sim = b.build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    world:  Option<World>,
    threat: ThreatTrack,
    agents: Vec<AgentSeed>,
}

struct AgentSeed {
    config:   AgentConfig,
    position: Vec3,
    start:    StateKind,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            world:  None,
            threat: ThreatTrack::absent(),
            agents: Vec::new(),
        }
    }

    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    pub fn threat(mut self, threat: ThreatTrack) -> Self {
        self.threat = threat;
        self
    }

    /// Add an agent that starts in Idle.
    pub fn add_agent(&mut self, config: AgentConfig, position: Vec3) -> AgentId {
        self.add_agent_in(config, position, StateKind::Idle)
    }

    /// Add an agent that starts in `start`.
    pub fn add_agent_in(&mut self, config: AgentConfig, position: Vec3, start: StateKind) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(AgentSeed { config, position, start });
        id
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Validate every config and return a ready-to-run [`Sim`].
    ///
    /// State machines are initialized on the first tick so that the
    /// initial transitions reach the run's observer.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        self.threat.validate()?;

        let mut agents = Vec::with_capacity(self.agents.len());
        let mut starts = Vec::with_capacity(self.agents.len());
        for (i, seed) in self.agents.into_iter().enumerate() {
            let id = AgentId(i as u32);
            seed.config
                .validate()
                .map_err(|source| SimError::AgentConfig { agent: id, source })?;
            agents.push(Controller::new(id, seed.config, seed.position));
            starts.push(seed.start);
        }

        Ok(Sim {
            clock:  self.config.make_clock(),
            config: self.config,
            world:  self.world.unwrap_or_default(),
            threat: self.threat,
            agents,
            starts,
        })
    }
}
