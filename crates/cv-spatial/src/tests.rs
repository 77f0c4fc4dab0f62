//! Unit tests for cv-spatial.
//!
//! All tests use hand-built meshes and obstacle fields.

#[cfg(test)]
mod helpers {
    use cv_core::LayerMask;

    use crate::{NavMesh, NavMeshBuilder, ObstacleField, ObstacleFieldBuilder};

    /// A 20×20 floor centred on the origin plus a raised 4×4 platform at
    /// height 3 off to the east.
    pub fn floor_and_platform() -> NavMesh {
        let mut b = NavMeshBuilder::new();
        b.add_region(-10.0, -10.0, 10.0, 10.0, 0.0).unwrap();
        b.add_region(20.0, -2.0, 24.0, 2.0, 3.0).unwrap();
        b.build()
    }

    /// One wall on layer 0 across the north, one on layer 1 across the south.
    pub fn two_walls() -> ObstacleField {
        let mut b = ObstacleFieldBuilder::new();
        b.add_wall(-5.0, 4.0, 5.0, 5.0, 3.0, LayerMask::layer(0)).unwrap();
        b.add_wall(-5.0, -5.0, 5.0, -4.0, 3.0, LayerMask::layer(1)).unwrap();
        b.build()
    }
}

// ── NavMesh ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod navmesh {
    use cv_core::{RegionId, Vec3};

    use super::helpers::floor_and_platform;
    use crate::{NavMesh, NavMeshBuilder, SpatialError};

    #[test]
    fn empty_mesh_never_snaps() {
        let mesh = NavMesh::empty();
        assert!(mesh.is_empty());
        assert_eq!(mesh.sample_position(Vec3::ZERO, 100.0), None);
    }

    #[test]
    fn point_on_surface_snaps_to_itself() {
        let mesh = floor_and_platform();
        let p = Vec3::new(3.0, 0.0, -4.0);
        assert_eq!(mesh.sample_position(p, 2.0), Some(p));
    }

    #[test]
    fn point_above_surface_drops_to_height() {
        let mesh = floor_and_platform();
        let p = Vec3::new(1.0, 1.5, 1.0);
        assert_eq!(mesh.sample_position(p, 2.0), Some(Vec3::new(1.0, 0.0, 1.0)));
    }

    #[test]
    fn point_past_edge_snaps_to_edge() {
        let mesh = floor_and_platform();
        let snapped = mesh.sample_position(Vec3::new(11.5, 0.0, 0.0), 2.0);
        assert_eq!(snapped, Some(Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn point_beyond_tolerance_misses() {
        let mesh = floor_and_platform();
        assert_eq!(mesh.sample_position(Vec3::new(12.5, 0.0, 0.0), 2.0), None);
        assert!(!mesh.is_walkable(Vec3::new(0.0, 0.0, -14.0), 2.0));
    }

    #[test]
    fn height_counts_toward_tolerance() {
        let mesh = floor_and_platform();
        // Inside the platform footprint but 3 units below its surface.
        let p = Vec3::new(22.0, 0.0, 0.0);
        assert_eq!(mesh.sample_position(p, 2.0), None);
        assert_eq!(mesh.sample_position(p, 3.5), Some(Vec3::new(22.0, 3.0, 0.0)));
    }

    #[test]
    fn closest_of_overlapping_regions_wins() {
        let mut b = NavMeshBuilder::new();
        b.add_region(-5.0, -5.0, 5.0, 5.0, 0.0).unwrap();
        b.add_region(-5.0, -5.0, 5.0, 5.0, 2.0).unwrap();
        let mesh = b.build();
        let low = mesh.sample_position(Vec3::new(0.0, 0.6, 0.0), 2.0).unwrap();
        let high = mesh.sample_position(Vec3::new(0.0, 1.4, 0.0), 2.0).unwrap();
        assert_eq!(low.y, 0.0);
        assert_eq!(high.y, 2.0);
    }

    #[test]
    fn region_ids_are_sequential() {
        let mut b = NavMeshBuilder::new();
        assert_eq!(b.add_region(0.0, 0.0, 1.0, 1.0, 0.0), Ok(RegionId(0)));
        assert_eq!(b.add_region(2.0, 0.0, 3.0, 1.0, 0.0), Ok(RegionId(1)));
        assert_eq!(b.build().region_count(), 2);
    }

    #[test]
    fn inverted_region_rejected() {
        let mut b = NavMeshBuilder::new();
        assert_eq!(b.add_region(1.0, 0.0, 0.0, 1.0, 0.0), Err(SpatialError::InvalidRegion));
        assert_eq!(b.add_region(0.0, 0.0, f32::NAN, 1.0, 0.0), Err(SpatialError::InvalidRegion));
        assert_eq!(b.region_count(), 0);
    }
}

// ── ObstacleField ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacles {
    use cv_core::{LayerMask, ObstacleId, Vec3};

    use super::helpers::two_walls;
    use crate::{ObstacleField, ObstacleFieldBuilder, SpatialError, VisibilityService};

    fn los(field: &ObstacleField, from: Vec3, to: Vec3, mask: LayerMask) -> bool {
        field.has_line_of_sight(from, to, from.distance(to), mask)
    }

    #[test]
    fn empty_field_is_always_clear() {
        let field = ObstacleField::empty();
        assert!(los(&field, Vec3::ZERO, Vec3::new(0.0, 0.0, 50.0), LayerMask::ALL));
    }

    #[test]
    fn wall_blocks_crossing_segment() {
        let field = two_walls();
        let from = Vec3::new(0.0, 1.5, 0.0);
        let to = Vec3::new(0.0, 0.5, 10.0);
        assert!(!los(&field, from, to, LayerMask::ALL));
        assert_eq!(field.first_blocker(from, to, LayerMask::ALL), Some(ObstacleId(0)));
    }

    #[test]
    fn segment_past_wall_end_is_clear() {
        let field = two_walls();
        let from = Vec3::new(8.0, 1.5, 0.0);
        let to = Vec3::new(8.0, 0.5, 10.0);
        assert!(los(&field, from, to, LayerMask::ALL));
    }

    #[test]
    fn segment_over_wall_is_clear() {
        let field = two_walls();
        let from = Vec3::new(0.0, 4.0, 0.0);
        let to = Vec3::new(0.0, 3.5, 10.0);
        assert!(los(&field, from, to, LayerMask::ALL));
    }

    #[test]
    fn mask_filters_layers() {
        let field = two_walls();
        let from = Vec3::new(0.0, 1.0, 0.0);
        let north = Vec3::new(0.0, 1.0, 10.0);
        let south = Vec3::new(0.0, 1.0, -10.0);
        assert!(!los(&field, from, north, LayerMask::layer(0)));
        assert!(los(&field, from, north, LayerMask::layer(1)));
        assert!(los(&field, from, south, LayerMask::layer(0)));
        assert!(!los(&field, from, south, LayerMask::layer(1)));
        assert!(los(&field, from, south, LayerMask::NONE));
    }

    #[test]
    fn max_distance_clips_segment() {
        let field = two_walls();
        let from = Vec3::new(0.0, 1.0, 0.0);
        let to = Vec3::new(0.0, 1.0, 10.0);
        // The wall starts at z = 4; stopping at 3 never reaches it.
        assert!(field.has_line_of_sight(from, to, 3.0, LayerMask::ALL));
        assert!(!field.has_line_of_sight(from, to, 4.5, LayerMask::ALL));
    }

    #[test]
    fn degenerate_segment_is_clear() {
        let field = two_walls();
        let p = Vec3::new(0.0, 1.0, 4.5); // inside the north wall
        assert!(field.has_line_of_sight(p, p, 1.0, LayerMask::ALL));
    }

    #[test]
    fn axis_parallel_segment_outside_slab_misses() {
        let field = two_walls();
        // Runs along x at z = 0, between the walls.
        let from = Vec3::new(-20.0, 1.0, 0.0);
        let to = Vec3::new(20.0, 1.0, 0.0);
        assert!(los(&field, from, to, LayerMask::ALL));
    }

    #[test]
    fn inverted_box_rejected() {
        let mut b = ObstacleFieldBuilder::new();
        let result = b.add_box(Vec3::ONE, Vec3::ZERO, LayerMask::ALL);
        assert_eq!(result, Err(SpatialError::InvalidObstacle));
        assert_eq!(b.obstacle_count(), 0);
    }
}
