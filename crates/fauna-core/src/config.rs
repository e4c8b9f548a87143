//! Behavioral constants.
//!
//! Every number the behavior operations depend on lives in
//! [`BehaviorConfig`].  `Default` reproduces the reference model; drivers
//! that want to experiment load their own values (via the `serde` feature)
//! and call [`BehaviorConfig::validate`] once before the run.

use crate::{FaunaError, FaunaResult};

/// Spread shared by the quality and mate-chance distributions.
const TRAIT_STD_DEV: f64 = 0.95 / 6.0;

/// Tunable constants for construction, mating and socialising.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    /// Mean quality of an agent created without parents.  Default: 0.5.
    pub quality_mean: f64,

    /// Standard deviation of quality, both de novo and inherited.
    /// Default: 0.95 / 6.
    pub quality_std_dev: f64,

    /// Standard deviation of the per-encounter mate chance.  Default: 0.95 / 6.
    pub mate_chance_std_dev: f64,

    /// Energy every new agent starts with.  Default: 0.5.
    pub initial_energy: f64,

    /// Probability that a new agent is female when the caller does not
    /// override it.  Default: 0.5.
    pub default_sex_ratio: f64,

    /// Upper bound of the uniform draw compared against combined stress in
    /// `socialise`.  Default: 2.0.
    pub socialise_draw_max: f64,

    /// Stress removed from each partner by intercourse.  Default: 0.5.
    pub intercourse_relief: f64,

    /// Stress removed from each partner by ordinary contact.  Default: 0.2.
    pub social_relief: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            quality_mean:        0.5,
            quality_std_dev:     TRAIT_STD_DEV,
            mate_chance_std_dev: TRAIT_STD_DEV,
            initial_energy:      0.5,
            default_sex_ratio:   0.5,
            socialise_draw_max:  2.0,
            intercourse_relief:  0.5,
            social_relief:       0.2,
        }
    }
}

impl BehaviorConfig {
    /// Reject values that would make the behavior operations meaningless.
    pub fn validate(&self) -> FaunaResult<()> {
        let finite = [
            ("quality_mean", self.quality_mean),
            ("initial_energy", self.initial_energy),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(FaunaError::Config(format!("{name} must be finite, got {v}")));
            }
        }

        let non_negative = [
            ("quality_std_dev", self.quality_std_dev),
            ("mate_chance_std_dev", self.mate_chance_std_dev),
            ("intercourse_relief", self.intercourse_relief),
            ("social_relief", self.social_relief),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(FaunaError::Config(format!(
                    "{name} must be a finite non-negative number, got {v}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.default_sex_ratio) {
            return Err(FaunaError::Config(format!(
                "default_sex_ratio must lie in [0, 1], got {}",
                self.default_sex_ratio
            )));
        }

        if !self.socialise_draw_max.is_finite() || self.socialise_draw_max <= 0.0 {
            return Err(FaunaError::Config(format!(
                "socialise_draw_max must be positive, got {}",
                self.socialise_draw_max
            )));
        }

        Ok(())
    }
}
