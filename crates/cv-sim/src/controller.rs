//! Per-agent controller: the host-side owner of one state machine.

use cv_behavior::{AgentContext, BehaviorState, StateChange, StateKind, StateMachine, StateObserver};
use cv_core::{AgentConfig, AgentId, Tick, Vec3};
use cv_mobility::{MeshNavigator, Mover};

use crate::{SimError, SimObserver, SimResult, World};

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Read-only snapshot of one agent, for observers and visualization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Diagnostics {
    pub agent: AgentId,
    pub tick:  Tick,

    /// `None` until the state machine has been initialized.
    pub state: Option<StateKind>,

    pub position: Vec3,
    pub threat:   Option<Vec3>,

    pub detection_radius: f32,

    /// The last cover point chosen during the current Flee; `None` outside
    /// of Flee.
    pub cover_point: Option<Vec3>,
    pub has_cover:   bool,

    pub search_radius: f32,
}

// ── Controller ────────────────────────────────────────────────────────────────

/// One agent: its config, its movement state, and its state machine.
///
/// The controller is the only place an [`AgentContext`] is assembled.  Each
/// call borrows the world and the agent's [`Mover`] for exactly one behavior
/// update.
#[derive(Debug)]
pub struct Controller {
    id:      AgentId,
    config:  AgentConfig,
    mover:   Mover,
    machine: StateMachine,
}

impl Controller {
    /// A controller at `position` moving at the configured base speed.
    ///
    /// The state machine starts uninitialized; see [`initialize`](Self::initialize).
    pub fn new(id: AgentId, config: AgentConfig, position: Vec3) -> Self {
        let mover = Mover::new(position, config.base_speed);
        Self { id, config, mover, machine: StateMachine::new() }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    pub fn state_kind(&self) -> Option<StateKind> {
        self.machine.current_kind()
    }

    pub fn is_initialized(&self) -> bool {
        self.machine.is_initialized()
    }

    /// `true` iff `threat` exists and is strictly inside this agent's
    /// detection radius.
    pub fn is_threat_detected(&self, threat: Option<Vec3>) -> bool {
        threat.is_some_and(|t| self.mover.position.distance(t) < self.config.detection_radius)
    }

    /// Enter `start` and report it with no previous state.
    pub fn initialize<O: SimObserver + ?Sized>(
        &mut self,
        start:    StateKind,
        world:    &World,
        threat:   Option<Vec3>,
        tick:     Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let agent = self.id;
        self.with_context(world, threat, tick, observer, |machine, ctx, obs| {
            machine.initialize(start.into(), ctx, obs)
        })
        .map_err(|source| SimError::Behavior { agent, source })
    }

    /// Run one behavior update.
    ///
    /// # Errors
    ///
    /// [`SimError::Behavior`] if the state machine was never initialized.
    pub fn tick<O: SimObserver + ?Sized>(
        &mut self,
        world:    &World,
        threat:   Option<Vec3>,
        tick:     Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let agent = self.id;
        self.with_context(world, threat, tick, observer, |machine, ctx, obs| {
            machine.update(ctx, obs)
        })
        .map_err(|source| SimError::Behavior { agent, source })
    }

    /// Force a transition from outside the behavior layer (e.g. ordering an
    /// agent to go gather).  The current state exits and `kind` enters even
    /// when `kind` is already current.
    pub fn change_state<O: SimObserver + ?Sized>(
        &mut self,
        kind:     StateKind,
        world:    &World,
        threat:   Option<Vec3>,
        tick:     Tick,
        observer: &mut O,
    ) {
        self.with_context(world, threat, tick, observer, |machine, ctx, obs| {
            machine.change_state(BehaviorState::from(kind), ctx, obs)
        });
    }

    /// Step the mover for one tick.  Returns the distance covered.
    pub fn advance(&mut self, dt_secs: f32) -> f32 {
        self.mover.advance(dt_secs)
    }

    pub fn diagnostics(&self, tick: Tick, threat: Option<Vec3>) -> Diagnostics {
        let flee = self.machine.current().and_then(BehaviorState::as_flee);
        Diagnostics {
            agent:            self.id,
            tick,
            state:            self.machine.current_kind(),
            position:         self.mover.position,
            threat,
            detection_radius: self.config.detection_radius,
            cover_point:      flee.and_then(|f| f.finder().cover_point()),
            has_cover:        flee.is_some_and(|f| f.has_cover()),
            search_radius:    self.config.cover.search_radius,
        }
    }

    /// Assemble the per-tick context and hand it, the machine, and a tagged
    /// observer to `f`.
    fn with_context<O, R>(
        &mut self,
        world:    &World,
        threat:   Option<Vec3>,
        tick:     Tick,
        observer: &mut O,
        f:        impl FnOnce(&mut StateMachine, &mut AgentContext<'_>, &mut AgentTag<'_, O>) -> R,
    ) -> R
    where
        O: SimObserver + ?Sized,
    {
        let Controller { id, config, mover, machine } = self;
        let position = mover.position;
        let forward = mover.heading;

        let mut nav = MeshNavigator::new(&world.navmesh, mover);
        let mut ctx = AgentContext::new(tick, position, forward, threat, config, &mut nav, &world.obstacles);
        let mut tag = AgentTag { agent: *id, inner: observer };
        f(machine, &mut ctx, &mut tag)
    }
}

/// Forwards machine notifications to a [`SimObserver`] with the agent's id.
struct AgentTag<'o, O: ?Sized> {
    agent: AgentId,
    inner: &'o mut O,
}

impl<O: SimObserver + ?Sized> StateObserver for AgentTag<'_, O> {
    fn on_state_changed(&mut self, change: &StateChange) {
        self.inner.on_state_changed(self.agent, change);
    }
}
