//! meadow — smallest driver for the fauna behavior model.
//!
//! A handful of deer, wolves and clover patches share a 100 × 100 meadow.
//! Each tick the driver wanders every animal, pairs up neighbours, delivers
//! births, starves the exhausted and rots the dead: all the bookkeeping the
//! agent crate leaves to its caller.
//!
//! Plants never court or eat.  Only adults court, a pregnancy lasts
//! `GESTATION_TICKS`, and a birth needs the father within contact range and
//! room under `CARRYING_CAPACITY`.
//!
//! Run with `RUST_LOG=debug` to see individual meals and conceptions.

use std::collections::BTreeMap;
use std::io::Cursor;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fauna_agent::{Agent, FoodType, Population, Sex, load_herd_reader};
use fauna_core::{AgentId, BehaviorConfig, Point2, RandomSource, SimRng};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64   = 42;
const TICKS:             u32   = 200;
const SUMMARY_INTERVAL:  u32   = 20;
const MAP_SIZE:          f64   = 100.0;
const STEP:              f64   = 8.0;
const CONTACT_RADIUS:    f64   = 6.0;
const TERRAIN_MODIFIER:  f64   = 0.5;
const DECAY_RATE:        f64   = 0.1;
const NEWBORN_SIZE:      f64   = 0.2;
const STRESS_PER_TICK:   f64   = 0.05;
const MATURITY_AGE:      u32   = 30;
const GESTATION_TICKS:   u32   = 15;
const CARRYING_CAPACITY: usize = 60;

// ── Herd CSV ──────────────────────────────────────────────────────────────────

const HERD_CSV: &str = "\
species,diet,food_type,x,y,size\n\
deer,h,meat,20,20,0.6\n\
deer,h,meat,22,18,0.6\n\
deer,h,meat,25,24,0.5\n\
deer,h,meat,18,26,0.5\n\
deer,h,meat,60,60,0.6\n\
deer,h,meat,62,58,0.6\n\
wolf,c,meat,80,80,0.9\n\
wolf,c,meat,82,78,0.8\n\
boar,o,meat,50,50,0.7\n\
clover,h,plant,21,21,0.3\n\
clover,h,plant,24,19,0.3\n\
clover,h,plant,61,59,0.3\n\
clover,h,plant,40,45,0.3\n\
clover,h,plant,70,30,0.3\n\
";

// ── World ─────────────────────────────────────────────────────────────────────

/// Everything the driver owns between ticks.
struct Meadow {
    herd:      Population,
    /// Tick at which each currently pregnant female conceived.
    gestation: BTreeMap<AgentId, u32>,
    cfg:       BehaviorConfig,
    rng:       SimRng,
}

/// Counts reported for one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct TickReport {
    meals:   usize,
    born:    usize,
    starved: usize,
    cleared: usize,
}

fn is_animal(agent: &Agent) -> bool {
    agent.food_type() != FoodType::Plant
}

fn alive_count(herd: &Population) -> usize {
    herd.iter().filter(|(_, a)| a.is_alive()).count()
}

impl Meadow {
    fn new(herd: Population, cfg: BehaviorConfig, rng: SimRng) -> Self {
        Self { herd, gestation: BTreeMap::new(), cfg, rng }
    }

    fn tick(&mut self, tick: u32) -> Result<TickReport> {
        self.wander()?;
        let meals = self.interact()?;
        let born = self.births(tick)?;
        let (starved, cleared) = self.upkeep()?;
        Ok(TickReport { meals, born, starved, cleared })
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Move every living animal a random step and age everyone alive.
    fn wander(&mut self) -> Result<()> {
        for (_, agent) in self.herd.iter_mut() {
            if !agent.is_alive() {
                continue;
            }
            agent.age += 1;
            agent.add_stress(STRESS_PER_TICK)?;
            if !is_animal(agent) {
                continue;
            }

            let [x, y] = *agent.position.coords();
            let target = Point2::xy(
                (x + self.rng.uniform(-STEP, STEP)).clamp(0.0, MAP_SIZE),
                (y + self.rng.uniform(-STEP, STEP)).clamp(0.0, MAP_SIZE),
            );
            agent.move_toward(&target, MAP_SIZE, TERRAIN_MODIFIER)?;
            agent.relocate(target);
        }
        Ok(())
    }

    /// Let every pair within contact range meet once: adult conspecific
    /// animals court, otherwise an animal tries to eat the other.
    fn interact(&mut self) -> Result<usize> {
        let ids: Vec<AgentId> = self.herd.ids().collect();
        let mut meals = 0;

        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                let (Some(x), Some(y)) = (self.herd.get(a), self.herd.get(b)) else {
                    continue;
                };
                if x.position.distance(&y.position) > CONTACT_RADIUS {
                    continue;
                }
                let (x_animal, y_animal) = (is_animal(x), is_animal(y));
                let courting = x_animal
                    && y_animal
                    && x.is_conspecific(y)
                    && x.age >= MATURITY_AGE
                    && y.age >= MATURITY_AGE;

                if courting {
                    self.herd.mate(a, b, &self.cfg, &mut self.rng)?;
                } else if (x_animal && self.herd.eat(a, b)?.is_consumed())
                    || (y_animal && self.herd.eat(b, a)?.is_consumed())
                {
                    meals += 1;
                }
            }
        }
        Ok(meals)
    }

    /// Pregnant females past gestation give birth when a living conspecific
    /// male is within contact range and the meadow has room.
    fn births(&mut self, tick: u32) -> Result<usize> {
        let herd = &self.herd;
        self.gestation
            .retain(|id, _| herd.get(*id).is_some_and(|m| m.is_alive() && m.pregnant));
        for (id, mother) in herd.iter() {
            if mother.is_alive() && mother.pregnant {
                self.gestation.entry(id).or_insert(tick);
            }
        }

        let due: Vec<AgentId> = self
            .gestation
            .iter()
            .filter(|&(_, &conceived)| tick.saturating_sub(conceived) >= GESTATION_TICKS)
            .map(|(&id, _)| id)
            .collect();

        let mut born = 0;
        for mother in due {
            if alive_count(&self.herd) >= CARRYING_CAPACITY {
                break;
            }
            let Some(m) = self.herd.get(mother) else { continue };
            let father = self
                .herd
                .iter()
                .find(|(_, f)| {
                    f.is_alive()
                        && f.sex() == Sex::Male
                        && f.is_conspecific(m)
                        && f.position.distance(&m.position) <= CONTACT_RADIUS
                })
                .map(|(id, _)| id);
            let Some(father) = father else { continue };

            let position = m.position;
            self.herd
                .spawn_offspring(mother, father, position, NEWBORN_SIZE, &self.cfg, &mut self.rng)?;
            if let Some(m) = self.herd.get_mut(mother) {
                m.pregnant = false;
            }
            self.gestation.remove(&mother);
            born += 1;
        }
        Ok(born)
    }

    /// Starve animals out of energy, rot carcasses, clear away what has fully
    /// decayed.  Returns `(starved, cleared)`.
    fn upkeep(&mut self) -> Result<(usize, usize)> {
        let mut starved = 0;
        let mut rotten = Vec::new();

        for (id, agent) in self.herd.iter_mut() {
            if agent.is_alive() {
                if agent.energy < 0.0 {
                    agent.die();
                    starved += 1;
                }
            } else if agent.advance_decay(DECAY_RATE)? >= 1.0 {
                rotten.push(id);
            }
        }

        for &id in &rotten {
            self.herd.remove(id);
            self.gestation.remove(&id);
        }
        Ok((starved, rotten.len()))
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn populate(seed: u64) -> Result<Meadow> {
    let cfg = BehaviorConfig::default();
    cfg.validate()?;

    let mut rng = SimRng::new(seed);
    let herd = load_herd_reader(Cursor::new(HERD_CSV), &cfg, &mut rng)?;
    Ok(Meadow::new(herd, cfg, rng))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut meadow = populate(SEED)?;
    info!(animals = meadow.herd.len(), seed = SEED, "meadow populated");

    for tick in 0..TICKS {
        let report = meadow.tick(tick)?;

        if tick % SUMMARY_INTERVAL == 0 {
            let alive = alive_count(&meadow.herd);
            info!(
                tick,
                alive,
                carcasses = meadow.herd.len() - alive,
                meals = report.meals,
                born = report.born,
                starved = report.starved,
                cleared = report.cleared,
                "tick summary"
            );
        }
    }

    info!(ticks = TICKS, alive = alive_count(&meadow.herd), total = meadow.herd.len(), "run complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use fauna_agent::{AgentBuilder, Diet};

    use super::*;

    fn adult(species: &str, food_type: FoodType, sex: Sex, at: Point2) -> Agent {
        let cfg = BehaviorConfig::default();
        let mut agent = AgentBuilder::new(species, Diet::Herbivore, at, 0.5)
            .food_type(food_type)
            .sex(sex)
            .quality(0.5)
            .build(&cfg, &mut SimRng::new(0))
            .unwrap();
        agent.age = MATURITY_AGE;
        agent
    }

    fn meadow_of(agents: Vec<Agent>) -> Meadow {
        let mut herd = Population::new();
        for agent in agents {
            herd.insert(agent).unwrap();
        }
        Meadow::new(herd, BehaviorConfig::default(), SimRng::new(1))
    }

    #[test]
    fn full_run_stays_under_capacity() {
        let mut meadow = populate(SEED).unwrap();
        for tick in 0..TICKS {
            meadow.tick(tick).unwrap();
            assert!(alive_count(&meadow.herd) <= CARRYING_CAPACITY, "tick {tick}");
        }
    }

    #[test]
    fn plants_never_court() {
        let here = Point2::xy(10.0, 10.0);
        let mut meadow = meadow_of(vec![
            adult("clover", FoodType::Plant, Sex::Female, here),
            adult("clover", FoodType::Plant, Sex::Male, here),
        ]);
        for tick in 0..GESTATION_TICKS * 3 {
            meadow.interact().unwrap();
            meadow.births(tick).unwrap();
        }
        assert_eq!(meadow.herd.len(), 2);
        assert!(meadow.herd.iter().all(|(_, a)| !a.pregnant));
    }

    #[test]
    fn birth_waits_for_gestation() {
        let here = Point2::xy(10.0, 10.0);
        let mut meadow = meadow_of(vec![
            adult("deer", FoodType::Meat, Sex::Female, here),
            adult("deer", FoodType::Meat, Sex::Male, here),
        ]);
        meadow.herd.get_mut(AgentId(0)).unwrap().pregnant = true;

        assert_eq!(meadow.births(0).unwrap(), 0);
        assert_eq!(meadow.births(GESTATION_TICKS - 1).unwrap(), 0);
        assert_eq!(meadow.births(GESTATION_TICKS).unwrap(), 1);
        assert_eq!(meadow.herd.len(), 3);
        assert!(!meadow.herd.get(AgentId(0)).unwrap().pregnant);
    }

    #[test]
    fn birth_needs_a_father_in_range() {
        let mut meadow = meadow_of(vec![
            adult("deer", FoodType::Meat, Sex::Female, Point2::xy(10.0, 10.0)),
            adult("deer", FoodType::Meat, Sex::Male, Point2::xy(90.0, 90.0)),
        ]);
        meadow.herd.get_mut(AgentId(0)).unwrap().pregnant = true;

        meadow.births(0).unwrap();
        assert_eq!(meadow.births(GESTATION_TICKS).unwrap(), 0);

        meadow.herd.get_mut(AgentId(1)).unwrap().relocate(Point2::xy(12.0, 10.0));
        assert_eq!(meadow.births(GESTATION_TICKS + 1).unwrap(), 1);
    }

    #[test]
    fn newborns_do_not_court() {
        let here = Point2::xy(10.0, 10.0);
        let mut meadow = meadow_of(vec![
            adult("deer", FoodType::Meat, Sex::Female, here),
            adult("deer", FoodType::Meat, Sex::Male, here),
        ]);
        for (_, agent) in meadow.herd.iter_mut() {
            agent.age = 0;
        }
        meadow.interact().unwrap();
        assert!(meadow.herd.iter().all(|(_, a)| !a.pregnant));
    }
}
