//! Layered box obstacles and segment line-of-sight.
//!
//! Obstacles are axis-aligned boxes tagged with a [`LayerMask`].  A sightline
//! query collects the boxes whose envelopes overlap the segment's bounding
//! box (R-tree, via `rstar`) and runs an exact slab test on each one whose
//! layers intersect the query mask.

use rstar::{RTree, RTreeObject, AABB};

use cv_core::{LayerMask, ObstacleId, Vec3};

use crate::{SpatialError, SpatialResult, VisibilityService};

/// Below this length a sightline is treated as a single point and is clear.
const MIN_SEGMENT_LEN: f32 = 1e-6;

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// An axis-aligned box that blocks sightlines on its layers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub id:     ObstacleId,
    pub min:    Vec3,
    pub max:    Vec3,
    pub layers: LayerMask,
}

impl Obstacle {
    /// `true` if the segment `from → to` touches the box.
    pub fn intersects_segment(&self, from: Vec3, to: Vec3) -> bool {
        let d = to - from;
        let mut t_min = 0.0_f32;
        let mut t_max = 1.0_f32;

        for axis in 0..3 {
            let (o, dir, lo, hi) = (from[axis], d[axis], self.min[axis], self.max[axis]);
            if dir.abs() < f32::EPSILON {
                // Parallel to this slab: must already be inside it.
                if o < lo || o > hi {
                    return false;
                }
                continue;
            }
            let inv = 1.0 / dir;
            let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
        true
    }
}

impl RTreeObject for Obstacle {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min.to_array(), self.max.to_array())
    }
}

// ── ObstacleField ─────────────────────────────────────────────────────────────

/// All obstacles in the world.  Build with [`ObstacleFieldBuilder`].
pub struct ObstacleField {
    obstacles:   Vec<Obstacle>,
    spatial_idx: RTree<Obstacle>,
}

impl ObstacleField {
    /// A field with no obstacles: every sightline is clear.
    pub fn empty() -> Self {
        ObstacleFieldBuilder::new().build()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// First obstacle on `mask` that blocks the segment `from → to`, if any.
    pub fn first_blocker(&self, from: Vec3, to: Vec3, mask: LayerMask) -> Option<ObstacleId> {
        if mask.is_empty() {
            return None;
        }
        let envelope = AABB::from_corners(from.min(to).to_array(), from.max(to).to_array());
        self.spatial_idx
            .locate_in_envelope_intersecting(&envelope)
            .filter(|o| o.layers.intersects(mask))
            .find(|o| o.intersects_segment(from, to))
            .map(|o| o.id)
    }
}

impl VisibilityService for ObstacleField {
    fn has_line_of_sight(
        &self,
        origin:       Vec3,
        target:       Vec3,
        max_distance: f32,
        mask:         LayerMask,
    ) -> bool {
        let delta = target - origin;
        let len = delta.length();
        if len < MIN_SEGMENT_LEN || max_distance <= 0.0 {
            return true;
        }
        let end = origin + delta * (len.min(max_distance) / len);
        self.first_blocker(origin, end, mask).is_none()
    }
}

// ── ObstacleFieldBuilder ──────────────────────────────────────────────────────

/// Construct an [`ObstacleField`] incrementally, then call [`build`](Self::build).
pub struct ObstacleFieldBuilder {
    obstacles: Vec<Obstacle>,
}

impl ObstacleFieldBuilder {
    pub fn new() -> Self {
        Self { obstacles: Vec::new() }
    }

    /// Add a box from its `min` and `max` corners (`min <= max` per axis).
    pub fn add_box(&mut self, min: Vec3, max: Vec3, layers: LayerMask) -> SpatialResult<ObstacleId> {
        if !min.is_finite() || !max.is_finite() || min.cmpgt(max).any() {
            return Err(SpatialError::InvalidObstacle);
        }
        let id = ObstacleId(self.obstacles.len() as u32);
        self.obstacles.push(Obstacle { id, min, max, layers });
        Ok(id)
    }

    /// Convenience: a wall standing on the ground, `height` tall, spanning
    /// the XZ rectangle `[min_x, max_x] × [min_z, max_z]`.
    pub fn add_wall(
        &mut self,
        min_x:  f32,
        min_z:  f32,
        max_x:  f32,
        max_z:  f32,
        height: f32,
        layers: LayerMask,
    ) -> SpatialResult<ObstacleId> {
        self.add_box(Vec3::new(min_x, 0.0, min_z), Vec3::new(max_x, height, max_z), layers)
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Consume the builder and bulk-load the R-tree.
    pub fn build(self) -> ObstacleField {
        let spatial_idx = RTree::bulk_load(self.obstacles.clone());
        ObstacleField { obstacles: self.obstacles, spatial_idx }
    }
}

impl Default for ObstacleFieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}
