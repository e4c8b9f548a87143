//! Fluent builder for constructing an [`Agent`].
//!
//! # Usage
//!
//! ```rust
//! use fauna_agent::{AgentBuilder, Diet};
//! use fauna_core::{BehaviorConfig, Point2, SimRng};
//!
//! let cfg = BehaviorConfig::default();
//! let mut rng = SimRng::new(42);
//!
//! let doe = AgentBuilder::new("deer", Diet::Herbivore, Point2::xy(1.0, 2.0), 0.6)
//!     .build(&cfg, &mut rng)?;
//! let buck = AgentBuilder::new("deer", Diet::Herbivore, Point2::xy(1.5, 2.0), 0.7)
//!     .build(&cfg, &mut rng)?;
//!
//! let fawn = AgentBuilder::new("deer", Diet::Herbivore, doe.position, 0.1)
//!     .parents([&doe, &buck])
//!     .build(&cfg, &mut rng)?;
//! assert_eq!(fawn.energy, 0.5);
//! # Ok::<(), fauna_core::FaunaError>(())
//! ```
//!
//! # Draw order
//!
//! `build` consumes at most one uniform draw (sex) followed by one normal
//! draw (quality).  Overriding either with [`sex`](AgentBuilder::sex) or
//! [`quality`](AgentBuilder::quality) skips that draw.

use fauna_core::{BehaviorConfig, FaunaError, FaunaResult, Point, RandomSource};

use crate::{Agent, Diet, FoodType, Sex, Species};

/// Fluent builder for [`Agent`].
pub struct AgentBuilder<'p, const D: usize = 2> {
    species:   Species,
    diet:      Diet,
    position:  Point<D>,
    size:      f64,
    alive:     bool,
    food_type: FoodType,
    sex_ratio: Option<f64>,
    sex:       Option<Sex>,
    quality:   Option<f64>,
    parents:   Vec<&'p Agent<D>>,
}

impl<'p, const D: usize> AgentBuilder<'p, D> {
    /// Start a builder with the four required traits.  Everything else
    /// defaults: alive, meat-bodied, no parents, configured sex ratio.
    pub fn new(species: impl Into<Species>, diet: Diet, position: Point<D>, size: f64) -> Self {
        Self {
            species: species.into(),
            diet,
            position,
            size,
            alive: true,
            food_type: FoodType::Meat,
            sex_ratio: None,
            sex: None,
            quality: None,
            parents: Vec::new(),
        }
    }

    /// Create the agent already dead (a carcass placed by the driver).
    pub fn alive(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }

    /// What the agent's body counts as when eaten.  Default: meat.
    pub fn food_type(mut self, food_type: FoodType) -> Self {
        self.food_type = food_type;
        self
    }

    /// Probability the agent is female.  Overrides
    /// [`BehaviorConfig::default_sex_ratio`].
    pub fn sex_ratio(mut self, ratio: f64) -> Self {
        self.sex_ratio = Some(ratio);
        self
    }

    /// Fix the sex instead of drawing it.
    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Fix the quality instead of drawing it (restoring a saved agent).
    pub fn quality(mut self, quality: f64) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Add one parent.  `build` accepts exactly zero or two.
    pub fn parent(mut self, parent: &'p Agent<D>) -> Self {
        self.parents.push(parent);
        self
    }

    /// Add several parents at once.
    pub fn parents<I>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = &'p Agent<D>>,
    {
        self.parents.extend(parents);
        self
    }

    /// Validate inputs, draw sex and quality, and return the agent.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the parent count is not 0 or 2, the size is
    /// negative or not finite, the position is not finite, the sex ratio
    /// lies outside `[0, 1]`, or a fixed quality is not finite.
    pub fn build<R>(self, cfg: &BehaviorConfig, rng: &mut R) -> FaunaResult<Agent<D>>
    where
        R: RandomSource + ?Sized,
    {
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(FaunaError::invalid(format!(
                "size must be a finite non-negative number, got {}",
                self.size
            )));
        }
        if !self.position.is_finite() {
            return Err(FaunaError::invalid(format!("position {} is not finite", self.position)));
        }

        let sex_ratio = self.sex_ratio.unwrap_or(cfg.default_sex_ratio);
        if !(0.0..=1.0).contains(&sex_ratio) {
            return Err(FaunaError::invalid(format!("sex_ratio must lie in [0, 1], got {sex_ratio}")));
        }

        let quality_mean = match self.parents.as_slice() {
            [] => cfg.quality_mean,
            [a, b] => (a.quality() + b.quality()) / 2.0,
            other => {
                return Err(FaunaError::invalid(format!(
                    "an agent has zero or two parents, got {}",
                    other.len()
                )));
            }
        };

        if let Some(q) = self.quality {
            if !q.is_finite() {
                return Err(FaunaError::invalid(format!("quality must be finite, got {q}")));
            }
        }

        let sex = match self.sex {
            Some(sex) => sex,
            None if rng.uniform(0.0, 1.0) < sex_ratio => Sex::Female,
            None => Sex::Male,
        };

        let quality = match self.quality {
            Some(q) => q,
            None => rng.normal(quality_mean, cfg.quality_std_dev),
        };

        Ok(Agent::from_parts(
            self.species,
            self.diet,
            self.food_type,
            sex,
            quality,
            self.size,
            self.alive,
            self.position,
            cfg.initial_energy,
        ))
    }
}
