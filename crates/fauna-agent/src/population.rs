//! `Population` — the driver-owned arena that agents live in.
//!
//! Agents are stored in a slot vector indexed by [`AgentId`].  Removing an
//! agent leaves a tombstone; slots are never reused, so an id held by the
//! driver can go stale (lookups return `AgentNotFound`) but can never start
//! pointing at a different animal.
//!
//! The pairwise helpers resolve two ids to two disjoint `&mut Agent`s and
//! forward to the behavior operations.  [`Population::eat`] is where a
//! consumed prey actually disappears.
//!
//! ```ignore
//! // driver tick (simplified):
//! for (hunter, prey) in pairs {
//!     herd.eat(hunter, prey)?;               // prey removed on success
//! }
//! for (a, b) in courting {
//!     herd.mate(a, b, &cfg, &mut rng)?;
//! }
//! ```

use fauna_core::{AgentId, BehaviorConfig, FaunaError, FaunaResult, Point, RandomSource};
use tracing::debug;

use crate::{Agent, AgentBuilder, EatOutcome, MateOutcome, SocialOutcome};

/// Id for the slot at `index`.
///
/// # Errors
///
/// `PopulationFull` once `index` no longer fits an [`AgentId`].
pub(crate) fn slot_id(index: usize) -> FaunaResult<AgentId> {
    AgentId::try_from(index).map_err(|_| FaunaError::PopulationFull(index))
}

/// Slot storage for every agent a driver manages.
///
/// Every occupied slot index fits an [`AgentId`]; [`Population::insert`]
/// refuses to grow past that.
pub struct Population<const D: usize = 2> {
    slots: Vec<Option<Agent<D>>>,
    live:  usize,
}

impl<const D: usize> Default for Population<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> Population<D> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), live: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), live: 0 }
    }

    /// Number of agents currently present (tombstones excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Add an agent and return its id.
    ///
    /// # Errors
    ///
    /// `PopulationFull` when every id has been handed out.
    pub fn insert(&mut self, agent: Agent<D>) -> FaunaResult<AgentId> {
        let id = slot_id(self.slots.len())?;
        self.slots.push(Some(agent));
        self.live += 1;
        Ok(id)
    }

    /// Take an agent out of the population.  `None` if it was already gone.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent<D>> {
        let taken = self.slots.get_mut(id.index()).and_then(Option::take);
        if taken.is_some() {
            self.live -= 1;
        }
        taken
    }

    #[inline]
    pub fn contains(&self, id: AgentId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent<D>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent<D>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Iterator over the ids of present agents, ascending.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Iterator over `(id, agent)` for present agents, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent<D>)> + '_ {
        // `insert` keeps every slot index within `u32`.
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|a| (AgentId(i as u32), a)))
    }

    /// Mutable iterator over `(id, agent)` for present agents, ascending.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AgentId, &mut Agent<D>)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|a| (AgentId(i as u32), a)))
    }

    /// Two distinct agents, mutably.
    ///
    /// # Errors
    ///
    /// `SelfInteraction` if `a == b`; `AgentNotFound` if either is absent.
    pub fn pair_mut(&mut self, a: AgentId, b: AgentId) -> FaunaResult<(&mut Agent<D>, &mut Agent<D>)> {
        if a == b {
            return Err(FaunaError::SelfInteraction(a));
        }
        for id in [a, b] {
            if !self.contains(id) {
                return Err(FaunaError::AgentNotFound(id));
            }
        }

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi.index());
        let lo_ref = head[lo.index()].as_mut().ok_or(FaunaError::AgentNotFound(lo))?;
        let hi_ref = tail[0].as_mut().ok_or(FaunaError::AgentNotFound(hi))?;

        if a < b { Ok((lo_ref, hi_ref)) } else { Ok((hi_ref, lo_ref)) }
    }

    // ── Pairwise drivers ──────────────────────────────────────────────────

    /// `eater` eats `prey`; on success `prey` is removed from the population.
    pub fn eat(&mut self, eater: AgentId, prey: AgentId) -> FaunaResult<EatOutcome> {
        let (e, p) = self.pair_mut(eater, prey)?;
        let outcome = e.eat(p);
        if outcome.is_consumed() {
            self.remove(prey);
            debug!(%eater, %prey, "prey removed from population");
        }
        Ok(outcome)
    }

    /// `a` attempts to mate with `b`.
    pub fn mate<R>(
        &mut self,
        a:   AgentId,
        b:   AgentId,
        cfg: &BehaviorConfig,
        rng: &mut R,
    ) -> FaunaResult<MateOutcome>
    where
        R: RandomSource + ?Sized,
    {
        let (x, y) = self.pair_mut(a, b)?;
        Ok(x.mate(y, cfg, rng))
    }

    /// `a` socialises with `b`.
    pub fn socialise<R>(
        &mut self,
        a:           AgentId,
        b:           AgentId,
        intercourse: bool,
        cfg:         &BehaviorConfig,
        rng:         &mut R,
    ) -> FaunaResult<SocialOutcome>
    where
        R: RandomSource + ?Sized,
    {
        let (x, y) = self.pair_mut(a, b)?;
        Ok(x.socialise(y, intercourse, cfg, rng))
    }

    /// Build a child of `mother` and `father` at `position` and insert it.
    ///
    /// The child takes species, diet and food type from `mother`; quality is
    /// inherited from both.  The mother's `pregnant` flag is left for the
    /// driver to clear.
    pub fn spawn_offspring<R>(
        &mut self,
        mother:   AgentId,
        father:   AgentId,
        position: Point<D>,
        size:     f64,
        cfg:      &BehaviorConfig,
        rng:      &mut R,
    ) -> FaunaResult<AgentId>
    where
        R: RandomSource + ?Sized,
    {
        if mother == father {
            return Err(FaunaError::SelfInteraction(mother));
        }
        let m = self.get(mother).ok_or(FaunaError::AgentNotFound(mother))?;
        let f = self.get(father).ok_or(FaunaError::AgentNotFound(father))?;

        let child = AgentBuilder::new(m.species().clone(), m.diet(), position, size)
            .food_type(m.food_type())
            .parents([m, f])
            .build(cfg, rng)?;

        let id = self.insert(child)?;
        debug!(%mother, %father, child = %id, "offspring born");
        Ok(id)
    }
}
