//! The `Agent` entity and its single-agent operations.
//!
//! Pairwise interactions (`eat`, `mate`, `socialise`) live in
//! [`behavior`][crate::behavior]; construction lives in
//! [`builder`][crate::builder].
//!
//! # Field access
//!
//! Traits fixed at birth (species, diet, sex, quality, food type, size) and
//! the life/decay state are private with getters, so the invariants below
//! cannot be broken from outside.  Counters the driver owns (`age`,
//! `energy`, `position`, `pregnant`, `mated_recently`) are plain `pub`
//! fields.
//!
//! # Invariants
//!
//! - `stress >= 0` at all times.
//! - `decay_fraction` is in `[0, 1]`, starts at 0 and never decreases.
//! - `alive` only ever goes from `true` to `false`.

use fauna_core::{FaunaError, FaunaResult, Point};
use tracing::{debug, trace};

use crate::{Diet, FoodType, Sex, Species};

/// One simulated animal living in `D`-dimensional map space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent<const D: usize = 2> {
    species:        Species,
    diet:           Diet,
    food_type:      FoodType,
    sex:            Sex,
    quality:        f64,
    size:           f64,
    alive:          bool,
    stress:         f64,
    decay_fraction: f64,

    /// Where the agent is.  Only the driver moves it (see [`Agent::relocate`]).
    pub position: Point<D>,

    /// Ticks lived.  Advanced by the driver.
    pub age: u32,

    /// Spent by movement, gained by eating.  Unclamped: negative energy is
    /// the driver's to interpret.
    pub energy: f64,

    /// Set by a successful mating; cleared by the driver at birth.
    pub pregnant: bool,

    /// Reserved for mating cooldowns.  No operation reads or writes it.
    pub mated_recently: bool,
}

impl<const D: usize> Agent<D> {
    /// Assemble an agent from already-validated parts.  Used by
    /// [`AgentBuilder`][crate::AgentBuilder].
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        species:   Species,
        diet:      Diet,
        food_type: FoodType,
        sex:       Sex,
        quality:   f64,
        size:      f64,
        alive:     bool,
        position:  Point<D>,
        energy:    f64,
    ) -> Self {
        Self {
            species,
            diet,
            food_type,
            sex,
            quality,
            size,
            alive,
            stress: 0.0,
            decay_fraction: 0.0,
            position,
            age: 0,
            energy,
            pregnant: false,
            mated_recently: false,
        }
    }

    // ── Getters ───────────────────────────────────────────────────────────

    #[inline]
    pub fn species(&self) -> &Species {
        &self.species
    }

    #[inline]
    pub fn diet(&self) -> Diet {
        self.diet
    }

    #[inline]
    pub fn food_type(&self) -> FoodType {
        self.food_type
    }

    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[inline]
    pub fn quality(&self) -> f64 {
        self.quality
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn stress(&self) -> f64 {
        self.stress
    }

    /// How far the carcass has rotted, in `[0, 1]`.  Always 0 while alive.
    #[inline]
    pub fn decay_fraction(&self) -> f64 {
        self.decay_fraction
    }

    #[inline]
    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }

    /// `true` if `other` is the same species.
    #[inline]
    pub fn is_conspecific(&self, other: &Agent<D>) -> bool {
        self.species == other.species
    }

    /// Energy an eater would gain from this body right now.
    #[inline]
    pub fn food_value(&self) -> f64 {
        self.size * (1.0 - self.decay_fraction)
    }

    /// `true` if an agent with `diet` is willing to eat this one.
    #[inline]
    pub fn is_edible_by(&self, diet: Diet) -> bool {
        diet.can_eat(self.food_type)
    }

    // ── Stress ────────────────────────────────────────────────────────────

    /// Raise (or, with a negative `delta`, lower) stress.  The result is
    /// floored at 0; non-finite deltas are rejected.
    pub fn add_stress(&mut self, delta: f64) -> FaunaResult<()> {
        if !delta.is_finite() {
            return Err(FaunaError::invalid(format!("stress delta must be finite, got {delta}")));
        }
        self.stress = (self.stress + delta).max(0.0);
        Ok(())
    }

    /// Subtract `relief` from stress, flooring at 0.
    #[inline]
    pub(crate) fn relieve_stress(&mut self, relief: f64) {
        self.stress = (self.stress - relief).max(0.0);
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Energy a trip to `target` would cost, without spending it:
    ///
    ///   cost = distance(position, target) / map_size * terrain_modifier
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `map_size` is not a positive finite number, or if
    /// `terrain_modifier` or `target` is not finite.
    pub fn travel_cost(
        &self,
        target:           &Point<D>,
        map_size:         f64,
        terrain_modifier: f64,
    ) -> FaunaResult<f64> {
        if !map_size.is_finite() || map_size <= 0.0 {
            return Err(FaunaError::invalid(format!("map_size must be positive, got {map_size}")));
        }
        if !terrain_modifier.is_finite() {
            return Err(FaunaError::invalid(format!(
                "terrain_modifier must be finite, got {terrain_modifier}"
            )));
        }
        if !target.is_finite() {
            return Err(FaunaError::invalid(format!("target location {target} is not finite")));
        }
        Ok(self.position.distance(target) / map_size * terrain_modifier)
    }

    /// Pay the energy cost of travelling to `target` and return it.
    ///
    /// Position is left untouched: the driver commits the move with
    /// [`relocate`](Self::relocate) once it has decided the trip happens.
    /// A dead agent pays nothing and the call returns `Ok(0.0)`.
    pub fn move_toward(
        &mut self,
        target:           &Point<D>,
        map_size:         f64,
        terrain_modifier: f64,
    ) -> FaunaResult<f64> {
        let cost = self.travel_cost(target, map_size, terrain_modifier)?;
        if !self.alive {
            trace!(species = %self.species, "dead agent asked to move; ignored");
            return Ok(0.0);
        }
        self.energy -= cost;
        trace!(species = %self.species, cost, energy = self.energy, "paid travel cost");
        Ok(cost)
    }

    /// Commit a new position.  No energy is charged.
    #[inline]
    pub fn relocate(&mut self, position: Point<D>) {
        self.position = position;
    }

    // ── Death and decay ───────────────────────────────────────────────────

    /// Mark the agent dead.  Calling it again has no effect.
    pub fn die(&mut self) {
        if self.alive {
            self.alive = false;
            debug!(species = %self.species, age = self.age, "agent died");
        }
    }

    /// Rot a dead agent by `rate`, capping `decay_fraction` at 1.  Returns
    /// the new fraction.  Living agents do not rot; the call leaves them
    /// unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `rate` is negative or not finite.
    pub fn advance_decay(&mut self, rate: f64) -> FaunaResult<f64> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(FaunaError::invalid(format!(
                "decay rate must be a finite non-negative number, got {rate}"
            )));
        }
        if self.alive {
            return Ok(self.decay_fraction);
        }
        let before = self.decay_fraction;
        self.decay_fraction = (before + rate).min(1.0);
        if before < 1.0 && self.decay_fraction >= 1.0 {
            debug!(species = %self.species, "carcass fully decayed");
        }
        Ok(self.decay_fraction)
    }
}
