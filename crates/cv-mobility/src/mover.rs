//! Per-agent movement state.

use cv_core::{Vec3, geometry::WORLD_FORWARD, horizontal};

/// The movement state for a single agent.
///
/// The agent is **moving** while it has a destination it has not reached and
/// is not stopped.  Reaching the destination leaves it in place with a
/// remaining distance of zero; the destination is kept until replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    pub position: Vec3,

    /// Horizontal unit facing.  Updated whenever the agent moves.
    pub heading: Vec3,

    /// The outstanding movement goal, if any.
    pub destination: Option<Vec3>,

    /// Units per second.  Never negative.
    pub speed: f32,

    /// `true` halts movement without clearing the destination.
    pub stopped: bool,
}

impl Mover {
    /// A stationary agent at `position` facing world forward.
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            heading:     WORLD_FORWARD,
            destination: None,
            speed:       speed.max(0.0),
            stopped:     false,
        }
    }

    pub fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Straight-line distance to the destination; 0 with none.
    #[inline]
    pub fn remaining_distance(&self) -> f32 {
        self.destination.map_or(0.0, |d| self.position.distance(d))
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        !self.stopped && self.speed > 0.0 && self.remaining_distance() > 0.0
    }

    /// Move toward the destination for `dt_secs` seconds.
    ///
    /// Returns the distance actually covered.  Overshoot is clamped: the
    /// agent lands exactly on the destination.
    pub fn advance(&mut self, dt_secs: f32) -> f32 {
        let Some(dest) = self.destination else {
            return 0.0;
        };
        if self.stopped || dt_secs <= 0.0 {
            return 0.0;
        }

        let delta = dest - self.position;
        let dist = delta.length();
        if dist <= 0.0 {
            return 0.0;
        }

        let facing = horizontal(delta).normalize_or_zero();
        if facing != Vec3::ZERO {
            self.heading = facing;
        }

        let step = self.speed * dt_secs;
        if step >= dist {
            self.position = dest;
            dist
        } else {
            self.position += delta * (step / dist);
            step
        }
    }
}
