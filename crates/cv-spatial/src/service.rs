//! Collaborator contracts consumed by the behavior layer.
//!
//! Both services are synchronous: every call returns its answer before the
//! tick continues.  There is no retry and no cancellation; an empty answer
//! (no navigable point, clear sightline) is a normal outcome the caller
//! handles.

use cv_core::{LayerMask, Vec3};

/// Movement on a traversable surface.
///
/// The service owns path computation and path following; the behavior layer
/// only picks destinations and turns the speed/stop knobs.
pub trait NavigationService {
    /// Nearest point on the traversable surface within `tolerance` of
    /// `point`, or `None` if nothing walkable is that close.
    fn sample_position(&self, point: Vec3, tolerance: f32) -> Option<Vec3>;

    /// Issue a movement goal, superseding any outstanding one.
    fn set_destination(&mut self, point: Vec3);

    /// Distance left to the outstanding destination (0 when there is none).
    fn remaining_distance(&self) -> f32;

    fn set_stopped(&mut self, stopped: bool);

    fn set_speed(&mut self, speed: f32);
}

/// Line-of-sight queries against an obstruction mask.
pub trait VisibilityService {
    /// `true` if nothing on a layer in `mask` obstructs the segment from
    /// `origin` toward `target`, considered up to `max_distance` along it.
    fn has_line_of_sight(
        &self,
        origin:       Vec3,
        target:       Vec3,
        max_distance: f32,
        mask:         LayerMask,
    ) -> bool;
}
