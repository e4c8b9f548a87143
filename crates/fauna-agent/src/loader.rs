//! CSV herd loader.
//!
//! # CSV format
//!
//! One row per planar (2-D) agent:
//!
//! ```csv
//! species,diet,food_type,x,y,size
//! deer,h,meat,10.0,4.5,0.6
//! wolf,carnivore,meat,80.0,12.0,0.8
//! clover,h,plant,3.0,3.0,0.1
//! ```
//!
//! `diet` and `food_type` accept every spelling their `FromStr` impls do.
//! Sex and quality are drawn from `rng` exactly as [`AgentBuilder::build`]
//! would, in row order, so a fixed seed reproduces the same herd.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fauna_core::{BehaviorConfig, FaunaError, FaunaResult, Point2, RandomSource};

use crate::{AgentBuilder, Diet, FoodType, Population};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HerdRecord {
    species:   String,
    diet:      String,
    food_type: String,
    x:         f64,
    y:         f64,
    size:      f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a herd from a CSV file.
pub fn load_herd_csv<R>(path: &Path, cfg: &BehaviorConfig, rng: &mut R) -> FaunaResult<Population<2>>
where
    R: RandomSource + ?Sized,
{
    let file = std::fs::File::open(path)?;
    load_herd_reader(file, cfg, rng)
}

/// Like [`load_herd_csv`] but accepts any `Read` source.
///
/// # Errors
///
/// `Parse` for malformed CSV rows; `InvalidArgument` for unknown diet or food
/// type values and anything [`AgentBuilder::build`] rejects.
pub fn load_herd_reader<Src, R>(
    reader: Src,
    cfg:    &BehaviorConfig,
    rng:    &mut R,
) -> FaunaResult<Population<2>>
where
    Src: Read,
    R: RandomSource + ?Sized,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut herd = Population::new();

    for (line, result) in csv_reader.deserialize::<HerdRecord>().enumerate() {
        let row = result.map_err(|e| FaunaError::Parse(e.to_string()))?;
        let at_row = |e: FaunaError| match e {
            FaunaError::InvalidArgument(msg) => {
                FaunaError::InvalidArgument(format!("herd row {}: {msg}", line + 1))
            }
            other => other,
        };

        let diet: Diet = row.diet.parse().map_err(at_row)?;
        let food_type: FoodType = row.food_type.parse().map_err(at_row)?;

        let agent = AgentBuilder::new(row.species, diet, Point2::xy(row.x, row.y), row.size)
            .food_type(food_type)
            .build(cfg, rng)
            .map_err(at_row)?;
        herd.insert(agent)?;
    }

    Ok(herd)
}
