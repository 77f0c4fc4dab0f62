//! Walkable-surface representation and point snapping.
//!
//! # Data layout
//!
//! The surface is a set of axis-aligned rectangles in the XZ plane, each at a
//! fixed height.  Rectangles may overlap (a ramp landing, a bridge over a
//! floor); snapping picks the closest point over all of them in 3-D.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the XZ footprints answers "which rectangles
//! are near this point" in order of footprint distance.  The footprint
//! distance is a lower bound on the 3-D distance, so the snap query can stop
//! as soon as it exceeds the tolerance.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use cv_core::{RegionId, Vec3};

use crate::{SpatialError, SpatialResult};

// ── WalkableRegion ────────────────────────────────────────────────────────────

/// One walkable rectangle: `[min_x, max_x] × [min_z, max_z]` at height `y`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WalkableRegion {
    pub id:     RegionId,
    pub min_x:  f32,
    pub min_z:  f32,
    pub max_x:  f32,
    pub max_z:  f32,
    pub height: f32,
}

impl WalkableRegion {
    /// The point of this region closest to `p`.
    #[inline]
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min_x, self.max_x),
            self.height,
            p.z.clamp(self.min_z, self.max_z),
        )
    }

    /// `true` if `(x, z)` lies on the footprint (edges included).
    #[inline]
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_z..=self.max_z).contains(&z)
    }
}

impl RTreeObject for WalkableRegion {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_z], [self.max_x, self.max_z])
    }
}

impl PointDistance for WalkableRegion {
    /// Squared XZ distance from the footprint (0 inside).
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = (self.min_x - point[0]).max(0.0).max(point[0] - self.max_x);
        let dz = (self.min_z - point[1]).max(0.0).max(point[1] - self.max_z);
        dx * dx + dz * dz
    }
}

// ── NavMesh ───────────────────────────────────────────────────────────────────

/// The walkable surface.  Do not construct directly; use [`NavMeshBuilder`].
pub struct NavMesh {
    regions:     Vec<WalkableRegion>,
    spatial_idx: RTree<WalkableRegion>,
}

impl NavMesh {
    /// A mesh with nothing walkable.  Every snap misses.
    pub fn empty() -> Self {
        NavMeshBuilder::new().build()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> &[WalkableRegion] {
        &self.regions
    }

    /// Closest walkable point within `tolerance` (3-D distance) of `point`.
    ///
    /// Ties between regions keep the first one the index yields.
    pub fn sample_position(&self, point: Vec3, tolerance: f32) -> Option<Vec3> {
        let tol_2 = tolerance * tolerance;
        let query = [point.x, point.z];
        let mut best: Option<(f32, Vec3)> = None;

        for region in self.spatial_idx.nearest_neighbor_iter(&query) {
            if region.distance_2(&query) > tol_2 {
                break;
            }
            let snapped = region.closest_point(point);
            let d_2 = snapped.distance_squared(point);
            if d_2 <= tol_2 && best.is_none_or(|(b, _)| d_2 < b) {
                best = Some((d_2, snapped));
            }
        }

        best.map(|(_, p)| p)
    }

    /// `true` if `point` snaps to the surface within `tolerance`.
    #[inline]
    pub fn is_walkable(&self, point: Vec3, tolerance: f32) -> bool {
        self.sample_position(point, tolerance).is_some()
    }
}

// ── NavMeshBuilder ────────────────────────────────────────────────────────────

/// Construct a [`NavMesh`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use cv_core::Vec3;
/// use cv_spatial::NavMeshBuilder;
///
/// let mut b = NavMeshBuilder::new();
/// b.add_region(-10.0, -10.0, 10.0, 10.0, 0.0).unwrap();
/// let mesh = b.build();
/// assert_eq!(mesh.sample_position(Vec3::new(11.0, 0.0, 0.0), 2.0), Some(Vec3::new(10.0, 0.0, 0.0)));
/// assert_eq!(mesh.sample_position(Vec3::new(13.0, 0.0, 0.0), 2.0), None);
/// ```
pub struct NavMeshBuilder {
    regions: Vec<WalkableRegion>,
}

impl NavMeshBuilder {
    pub fn new() -> Self {
        Self { regions: Vec::new() }
    }

    /// Add a walkable rectangle and return its `RegionId` (sequential from 0).
    pub fn add_region(
        &mut self,
        min_x:  f32,
        min_z:  f32,
        max_x:  f32,
        max_z:  f32,
        height: f32,
    ) -> SpatialResult<RegionId> {
        let finite = [min_x, min_z, max_x, max_z, height].iter().all(|v| v.is_finite());
        if !finite || min_x > max_x || min_z > max_z {
            return Err(SpatialError::InvalidRegion);
        }
        let id = RegionId(self.regions.len() as u32);
        self.regions.push(WalkableRegion { id, min_x, min_z, max_x, max_z, height });
        Ok(id)
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Consume the builder and bulk-load the R-tree.
    pub fn build(self) -> NavMesh {
        let spatial_idx = RTree::bulk_load(self.regions.clone());
        NavMesh { regions: self.regions, spatial_idx }
    }
}

impl Default for NavMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}
