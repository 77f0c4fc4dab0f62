//! The static environment every agent shares.

use cv_spatial::{NavMesh, ObstacleField};

/// Walkable surface plus sight-blocking geometry.
///
/// Read-only for the whole run; controllers borrow it each tick.
pub struct World {
    pub navmesh:   NavMesh,
    pub obstacles: ObstacleField,
}

impl World {
    pub fn new(navmesh: NavMesh, obstacles: ObstacleField) -> Self {
        Self { navmesh, obstacles }
    }

    /// No walkable surface and nothing blocking sight.  Every cover search
    /// in an empty world ends in the directional fallback.
    pub fn empty() -> Self {
        Self::new(NavMesh::empty(), ObstacleField::empty())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::empty()
    }
}
