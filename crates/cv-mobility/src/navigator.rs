//! The `NavigationService` used by the simulation.

use cv_core::Vec3;
use cv_spatial::{NavMesh, NavigationService};

use crate::Mover;

/// A per-tick view joining the shared walkable surface with one agent's
/// movement state.
///
/// Built by the controller right before the behavior update and dropped
/// right after, so the mesh can stay shared while the mover is borrowed
/// mutably.
pub struct MeshNavigator<'a> {
    pub mesh:  &'a NavMesh,
    pub mover: &'a mut Mover,
}

impl<'a> MeshNavigator<'a> {
    #[inline]
    pub fn new(mesh: &'a NavMesh, mover: &'a mut Mover) -> Self {
        Self { mesh, mover }
    }
}

impl NavigationService for MeshNavigator<'_> {
    fn sample_position(&self, point: Vec3, tolerance: f32) -> Option<Vec3> {
        self.mesh.sample_position(point, tolerance)
    }

    fn set_destination(&mut self, point: Vec3) {
        self.mover.set_destination(point);
    }

    fn remaining_distance(&self) -> f32 {
        self.mover.remaining_distance()
    }

    fn set_stopped(&mut self, stopped: bool) {
        self.mover.stopped = stopped;
    }

    fn set_speed(&mut self, speed: f32) {
        self.mover.set_speed(speed);
    }
}
