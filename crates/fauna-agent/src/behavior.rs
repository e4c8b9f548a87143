//! Pairwise interactions: eating, mating and socialising.
//!
//! None of these return errors.  An interaction that the ecology does not
//! allow (wrong diet, different species, a dead participant) is a silent
//! no-op reported through the outcome enum, so the driver can pair agents
//! freely and inspect what happened.

use fauna_core::{BehaviorConfig, RandomSource};
use tracing::{debug, trace};

use crate::{Agent, Sex};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of [`Agent::eat`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EatOutcome {
    /// The meal happened.  The target no longer exists as far as the model is
    /// concerned and its owner must remove it.
    Consumed { energy_gained: f64 },

    /// Nothing changed.
    Refused(Refusal),
}

impl EatOutcome {
    #[inline]
    pub fn is_consumed(&self) -> bool {
        matches!(self, EatOutcome::Consumed { .. })
    }
}

/// Why a meal did not happen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Refusal {
    /// Dead agents do not eat.
    EaterDead,
    /// The target's food type does not fit the eater's diet.
    Inedible,
}

/// Result of [`Agent::socialise`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SocialOutcome {
    /// Both partners lost up to `relief` stress.
    Relieved { relief: f64 },
    /// The draw did not clear the combined-stress threshold.
    Unmoved,
    /// Different species; no draw was made.
    Incompatible,
}

/// Which side of a mating became pregnant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MateRole {
    /// The agent `mate` was called on.
    Initiator,
    /// The agent passed as the partner.
    Partner,
}

/// Result of [`Agent::mate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MateOutcome {
    /// Opposite sexes, the chance draw succeeded: the pair socialised and
    /// the female is now pregnant.
    Conceived { mother: MateRole, social: SocialOutcome },

    /// Opposite sexes, the chance draw failed.  Nothing changed.
    Rejected { mate_chance: f64 },

    /// Same sex: the pair socialised, no pregnancy is possible.
    Bonded(SocialOutcome),

    /// Different species or a dead participant.  No draws were made.
    Incompatible,
}

impl MateOutcome {
    #[inline]
    pub fn conceived(&self) -> bool {
        matches!(self, MateOutcome::Conceived { .. })
    }
}

// ── Interactions ──────────────────────────────────────────────────────────────

impl<const D: usize> Agent<D> {
    /// Eat `target` if the diet allows it.
    ///
    /// On success the eater gains `target.size * (1 - target.decay_fraction)`
    /// and the outcome is [`EatOutcome::Consumed`]; the caller owns `target`
    /// and must drop it.  [`Population::eat`][crate::Population::eat] does
    /// that automatically.
    pub fn eat(&mut self, target: &Agent<D>) -> EatOutcome {
        if !self.is_alive() {
            return EatOutcome::Refused(Refusal::EaterDead);
        }
        if !target.is_edible_by(self.diet()) {
            trace!(
                eater = %self.species(),
                diet = %self.diet(),
                food = %target.food_type(),
                "refused inedible target"
            );
            return EatOutcome::Refused(Refusal::Inedible);
        }

        let energy_gained = target.food_value();
        self.energy += energy_gained;
        debug!(
            eater = %self.species(),
            prey = %target.species(),
            energy_gained,
            "target consumed"
        );
        EatOutcome::Consumed { energy_gained }
    }

    /// Attempt to mate with `partner`.
    ///
    /// Opposite sexes draw `mate_chance ~ N(1 - |Δquality|, σ)` and then
    /// `u ~ U[0, 1)`; when `u <= mate_chance` the pair socialises with
    /// intercourse and the female becomes pregnant.  Same-sex pairs always
    /// socialise with intercourse.  Different species or a dead participant
    /// leave both agents untouched.
    pub fn mate<R>(&mut self, partner: &mut Agent<D>, cfg: &BehaviorConfig, rng: &mut R) -> MateOutcome
    where
        R: RandomSource + ?Sized,
    {
        if !self.is_alive() || !partner.is_alive() || !self.is_conspecific(partner) {
            return MateOutcome::Incompatible;
        }

        if self.sex() == partner.sex() {
            return MateOutcome::Bonded(self.socialise(partner, true, cfg, rng));
        }

        let quality_diff = (self.quality() - partner.quality()).abs();
        let mate_chance = rng.normal(1.0 - quality_diff, cfg.mate_chance_std_dev);
        if rng.uniform(0.0, 1.0) > mate_chance {
            trace!(species = %self.species(), mate_chance, "mating declined");
            return MateOutcome::Rejected { mate_chance };
        }

        let social = self.socialise(partner, true, cfg, rng);
        let mother = if self.sex() == Sex::Female {
            self.pregnant = true;
            MateRole::Initiator
        } else {
            partner.pregnant = true;
            MateRole::Partner
        };
        debug!(species = %self.species(), mate_chance, ?mother, "conception");
        MateOutcome::Conceived { mother, social }
    }

    /// Socialise with `other`.
    ///
    /// Conspecifics draw `u ~ U[0, socialise_draw_max)`; if `u` reaches the
    /// pair's combined stress, each partner's stress drops by the intercourse
    /// or ordinary relief amount, floored at 0 independently.  Calmer pairs
    /// therefore bond more easily.
    pub fn socialise<R>(
        &mut self,
        other:       &mut Agent<D>,
        intercourse: bool,
        cfg:         &BehaviorConfig,
        rng:         &mut R,
    ) -> SocialOutcome
    where
        R: RandomSource + ?Sized,
    {
        if !self.is_conspecific(other) {
            return SocialOutcome::Incompatible;
        }

        let threshold = self.stress() + other.stress();
        if rng.uniform(0.0, cfg.socialise_draw_max) < threshold {
            return SocialOutcome::Unmoved;
        }

        let relief = if intercourse { cfg.intercourse_relief } else { cfg.social_relief };
        self.relieve_stress(relief);
        other.relieve_stress(relief);
        trace!(species = %self.species(), relief, "stress relieved");
        SocialOutcome::Relieved { relief }
    }
}
