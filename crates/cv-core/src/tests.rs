//! Unit tests for cv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ObstacleId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(ObstacleId::default(), ObstacleId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod layer {
    use crate::LayerMask;

    #[test]
    fn single_layers_do_not_intersect() {
        assert!(!LayerMask::layer(0).intersects(LayerMask::layer(1)));
        assert!(LayerMask::layer(3).intersects(LayerMask::ALL));
    }

    #[test]
    fn none_intersects_nothing() {
        assert!(!LayerMask::NONE.intersects(LayerMask::ALL));
        assert!(LayerMask::NONE.is_empty());
    }

    #[test]
    fn union_combines() {
        let m = LayerMask::layer(0) | LayerMask::layer(4);
        assert_eq!(m, LayerMask(0b1_0001));
        assert!(m.intersects(LayerMask::layer(4)));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3) + 4, Tick(7));
        assert_eq!(Tick(10) - Tick(4), 6);
        assert_eq!(Tick(2).to_string(), "T2");
    }

    #[test]
    fn multiple_of_interval() {
        assert!(Tick(0).is_multiple_of(30));
        assert!(Tick(60).is_multiple_of(30));
        assert!(!Tick(31).is_multiple_of(30));
        assert!(!Tick(0).is_multiple_of(0));
    }

    #[test]
    fn clock_advances() {
        let config = SimConfig { tick_duration_secs: 0.5, ..SimConfig::default() };
        let mut clock = config.make_clock();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_tick_duration_rejected() {
        let config = SimConfig { tick_duration_secs: 0.0, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }
}

#[cfg(test)]
mod geometry {
    use proptest::prelude::*;

    use crate::{Vec3, sample_angle_deg, sample_direction, sample_directions};

    #[test]
    fn ninety_degrees_points_east() {
        let d = sample_direction(Vec3::Z, 90.0);
        assert!((d - Vec3::X).length() < 1e-5, "got {d}");
    }

    #[test]
    fn one_eighty_points_back() {
        let d = sample_direction(Vec3::Z, 180.0);
        assert!((d + Vec3::Z).length() < 1e-5, "got {d}");
    }

    #[test]
    fn twelve_samples_thirty_degrees_apart() {
        let angles: Vec<f32> = sample_directions(Vec3::Z, 12).map(|(_, a, _)| a).collect();
        assert_eq!(angles.len(), 12);
        assert_eq!(angles[0], 0.0);
        assert!((angles[5] - 150.0).abs() < 1e-4);
        assert!((angles[11] - 330.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn samples_are_evenly_spaced_unit_vectors(n in 1usize..64) {
            let dirs: Vec<_> = sample_directions(Vec3::Z, n).collect();
            prop_assert_eq!(dirs.len(), n);
            let step = 360.0 / n as f32;
            for (i, angle, dir) in &dirs {
                prop_assert!((angle - sample_angle_deg(*i, n)).abs() < 1e-4);
                prop_assert!((angle - *i as f32 * step).abs() < 1e-3);
                prop_assert!((dir.length() - 1.0).abs() < 1e-4);
                prop_assert!(dir.y.abs() < 1e-6);
            }
            // Direction i is (sin θ, 0, cos θ) for θ = i * 360 / n.
            for (_, angle, dir) in &dirs {
                let theta = angle.to_radians();
                prop_assert!((dir.x - theta.sin()).abs() < 1e-4);
                prop_assert!((dir.z - theta.cos()).abs() < 1e-4);
            }
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{AgentConfig, CoreError, CoverConfig};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(AgentConfig::default().validate(), Ok(()));
    }

    #[test]
    fn defaults_match_reference_tuning() {
        let c = AgentConfig::default();
        assert_eq!(c.detection_radius, 10.0);
        assert_eq!(c.flee_exit_distance, 15.0);
        assert_eq!(c.base_speed, 3.5);
        assert_eq!(c.panic_speed, 6.0);
        assert_eq!(c.reevaluate_interval_ticks, 30);
        assert_eq!(c.cover.sample_count, 12);
        assert_eq!(c.cover.search_radius, 10.0);
        assert_eq!(c.cover.nav_tolerance, 2.0);
        assert_eq!(c.cover.fallback_distance, 5.0);
    }

    #[test]
    fn zero_samples_rejected() {
        let c = AgentConfig {
            cover: CoverConfig { sample_count: 0, ..CoverConfig::default() },
            ..AgentConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(CoreError::InvalidConfig { field: "cover.sample_count", .. })
        ));
    }

    #[test]
    fn nan_radius_rejected() {
        let c = AgentConfig { detection_radius: f32::NAN, ..AgentConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_interval_rejected() {
        let c = AgentConfig { reevaluate_interval_ticks: 0, ..AgentConfig::default() };
        assert!(matches!(
            c.validate(),
            Err(CoreError::InvalidConfig { field: "reevaluate_interval_ticks", .. })
        ));
    }

    #[test]
    fn zero_knee_height_allowed() {
        let c = AgentConfig { knee_height: 0.0, ..AgentConfig::default() };
        assert!(c.validate().is_ok());
    }
}
