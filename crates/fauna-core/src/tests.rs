//! Unit tests for fauna-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn try_from_rejects_out_of_range_index() {
        assert_eq!(AgentId::try_from(u32::MAX as usize).unwrap(), AgentId(u32::MAX));
        #[cfg(target_pointer_width = "64")]
        assert!(AgentId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point, Point2, Point3};

    #[test]
    fn zero_distance() {
        let p = Point2::xy(3.0, -4.0);
        assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point2::xy(0.0, 0.0);
        let b = Point2::xy(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn three_dimensional_distance() {
        let a = Point3::xyz(1.0, 2.0, 2.0);
        assert!((Point3::origin().distance(&a) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn one_dimensional_points_work() {
        let a = Point::new([2.5]);
        let b = Point::new([-1.5]);
        assert_eq!(a.distance(&b), 4.0);
    }

    #[test]
    fn finiteness() {
        assert!(Point2::xy(1.0, 2.0).is_finite());
        assert!(!Point2::xy(f64::NAN, 2.0).is_finite());
    }

    #[test]
    fn display() {
        assert_eq!(Point2::xy(1.0, 2.5).to_string(), "(1.000, 2.500)");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        assert_ne!(r0.unit(), r1.unit(), "seeds for adjacent agents should diverge");
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform(0.0, 2.0);
            assert!((0.0..2.0).contains(&v));
        }
    }

    #[test]
    fn normal_sample_moments() {
        let mut rng = SimRng::new(7);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.normal(0.5, 0.2)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean {mean}");
        assert!((var.sqrt() - 0.2).abs() < 0.01, "sd {}", var.sqrt());
    }

    #[test]
    fn zero_spread_normal_is_the_mean() {
        let mut rng = AgentRng::new(3, AgentId(3));
        assert_eq!(rng.normal(0.75, 0.0), 0.75);
    }
}

#[cfg(test)]
mod config {
    use crate::{BehaviorConfig, FaunaError};

    #[test]
    fn defaults_match_reference_model() {
        let cfg = BehaviorConfig::default();
        assert_eq!(cfg.quality_mean, 0.5);
        assert!((cfg.quality_std_dev - 0.95 / 6.0).abs() < 1e-15);
        assert_eq!(cfg.initial_energy, 0.5);
        assert_eq!(cfg.intercourse_relief, 0.5);
        assert_eq!(cfg.social_relief, 0.2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_sex_ratio() {
        let cfg = BehaviorConfig { default_sex_ratio: 1.5, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(FaunaError::Config(_))));
    }

    #[test]
    fn rejects_negative_spread() {
        let cfg = BehaviorConfig { quality_std_dev: -0.1, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_draw_ceiling() {
        let cfg = BehaviorConfig { socialise_draw_max: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use crate::{Point2, RandomSource, SimRng};

    proptest! {
        #[test]
        fn distance_is_symmetric_and_non_negative(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3,
        ) {
            let a = Point2::xy(ax, ay);
            let b = Point2::xy(bx, by);
            prop_assert!(a.distance(&b) >= 0.0);
            prop_assert!((a.distance(&b) - b.distance(&a)).abs() < 1e-9);
        }

        #[test]
        fn uniform_respects_bounds(seed in any::<u64>(), lo in -10.0f64..10.0, width in 0.001f64..10.0) {
            let mut rng = SimRng::new(seed);
            let v = rng.uniform(lo, lo + width);
            prop_assert!(v >= lo && v <= lo + width);
        }
    }
}
