//! Where the threat is, tick by tick.

use cv_core::{CoreError, CoreResult, Vec3};

/// The threat's trajectory.
///
/// The threat walks its waypoints in order at a fixed speed, stopping on the
/// last one (or wrapping to the first when looping).  A track with no
/// position models "no known threat".
#[derive(Clone, Debug, PartialEq)]
pub struct ThreatTrack {
    position:  Option<Vec3>,
    waypoints: Vec<Vec3>,
    next:      usize,
    speed:     f32,
    looping:   bool,
}

impl ThreatTrack {
    /// No threat anywhere.
    pub fn absent() -> Self {
        Self { position: None, waypoints: Vec::new(), next: 0, speed: 0.0, looping: false }
    }

    pub fn stationary(at: Vec3) -> Self {
        Self { position: Some(at), ..Self::absent() }
    }

    /// Start at `start` and walk `waypoints` at `speed` units per second.
    pub fn patrol(start: Vec3, waypoints: Vec<Vec3>, speed: f32) -> Self {
        Self { position: Some(start), waypoints, next: 0, speed, looping: false }
    }

    /// Wrap back to the first waypoint after the last.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    #[inline]
    pub fn position(&self) -> Option<Vec3> {
        self.position
    }

    /// Teleport the threat, or remove it with `None`.  Waypoint progress is
    /// kept.
    pub fn set_position(&mut self, position: Option<Vec3>) {
        self.position = position;
    }

    /// `true` once a non-looping track has reached its last waypoint.
    pub fn is_finished(&self) -> bool {
        !self.looping && self.next >= self.waypoints.len()
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(CoreError::InvalidConfig {
                field:  "threat.speed",
                reason: "must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Move along the track for `dt_secs` seconds, carrying leftover
    /// distance past each waypoint reached.
    pub fn advance(&mut self, dt_secs: f32) {
        let Some(mut pos) = self.position else {
            return;
        };
        let mut budget = self.speed * dt_secs;
        let mut stalled = 0;

        while budget > 0.0 && !self.is_finished() && !self.waypoints.is_empty() {
            let target = self.waypoints[self.next % self.waypoints.len()];
            let dist = pos.distance(target);
            if dist > budget {
                pos += (target - pos) * (budget / dist);
                break;
            }
            pos = target;
            budget -= dist;
            self.next += 1;
            if self.looping {
                self.next %= self.waypoints.len();
            }
            // A loop of coincident waypoints never spends the budget.
            stalled = if dist == 0.0 { stalled + 1 } else { 0 };
            if stalled > self.waypoints.len() {
                break;
            }
        }
        self.position = Some(pos);
    }
}

impl Default for ThreatTrack {
    fn default() -> Self {
        Self::absent()
    }
}
