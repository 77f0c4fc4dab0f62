//! Per-tick state passed to every behavior callback.

use cv_core::{AgentConfig, Tick, Vec3};
use cv_spatial::{NavigationService, VisibilityService};

/// Everything a behavior may read or drive during one tick.
///
/// Built by the controller at the start of each tick from the agent's
/// current movement state and the world, then handed to the state machine.
/// Position and threat are snapshots: issuing a destination does not move
/// the agent within the same tick.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's behavior update.
pub struct AgentContext<'a> {
    /// Current simulation tick.  Drives the cover re-evaluation throttle.
    pub tick: Tick,

    pub position: Vec3,

    /// Horizontal facing of the agent.  Only consulted when the cover search
    /// samples in the heading frame.
    pub forward: Vec3,

    /// Where the threat is, or `None` when there is no known threat.
    pub threat: Option<Vec3>,

    pub config: &'a AgentConfig,

    pub nav: &'a mut dyn NavigationService,

    pub visibility: &'a dyn VisibilityService,
}

impl<'a> AgentContext<'a> {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        tick:       Tick,
        position:   Vec3,
        forward:    Vec3,
        threat:     Option<Vec3>,
        config:     &'a AgentConfig,
        nav:        &'a mut dyn NavigationService,
        visibility: &'a dyn VisibilityService,
    ) -> Self {
        Self { tick, position, forward, threat, config, nav, visibility }
    }

    /// Straight-line distance to the threat, if there is one.
    #[inline]
    pub fn distance_to_threat(&self) -> Option<f32> {
        self.threat.map(|t| self.position.distance(t))
    }

    /// `true` iff a threat exists and is strictly inside the detection
    /// radius.  Pure distance: no field-of-view or line-of-sight filtering.
    #[inline]
    pub fn is_threat_detected(&self) -> bool {
        self.distance_to_threat()
            .is_some_and(|d| d < self.config.detection_radius)
    }
}
