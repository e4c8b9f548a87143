//! Categorical traits: species, diet, sex and food type.
//!
//! Each enum parses from the single-letter codes used in population files
//! (`h`/`c`/`o`, `m`/`f`) as well as the full word, case-insensitively.
//! Anything else is an `InvalidArgument`.

use std::fmt;
use std::str::FromStr;

use fauna_core::{FaunaError, FaunaResult};

// ── Species ───────────────────────────────────────────────────────────────────

/// Species identifier.  Equality is the only thing the behavior model asks
/// of it: agents of the same species may mate and socialise.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species(String);

impl Species {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Species {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Species {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── FoodType ──────────────────────────────────────────────────────────────────

/// What an agent's own body counts as when something else eats it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FoodType {
    #[default]
    Meat,
    Plant,
}

impl FoodType {
    pub fn as_str(self) -> &'static str {
        match self {
            FoodType::Meat  => "meat",
            FoodType::Plant => "plant",
        }
    }
}

impl FromStr for FoodType {
    type Err = FaunaError;

    fn from_str(s: &str) -> FaunaResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meat" => Ok(FoodType::Meat),
            "plant" => Ok(FoodType::Plant),
            other => Err(FaunaError::invalid(format!(
                "unknown food type {other:?}: expected \"meat\" or \"plant\""
            ))),
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Diet ──────────────────────────────────────────────────────────────────────

/// What an agent is willing to eat.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Diet {
    Herbivore,
    Carnivore,
    Omnivore,
}

impl Diet {
    /// The compatibility rule applied by `eat`.
    #[inline]
    pub fn can_eat(self, food: FoodType) -> bool {
        match self {
            Diet::Omnivore  => true,
            Diet::Carnivore => food == FoodType::Meat,
            Diet::Herbivore => food == FoodType::Plant,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Diet::Herbivore => "herbivore",
            Diet::Carnivore => "carnivore",
            Diet::Omnivore  => "omnivore",
        }
    }
}

impl FromStr for Diet {
    type Err = FaunaError;

    fn from_str(s: &str) -> FaunaResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "herbivore" => Ok(Diet::Herbivore),
            "c" | "carnivore" => Ok(Diet::Carnivore),
            "o" | "omnivore" => Ok(Diet::Omnivore),
            other => Err(FaunaError::invalid(format!(
                "unknown diet {other:?}: expected herbivore (h), carnivore (c) or omnivore (o)"
            ))),
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Sex ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male   => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = FaunaError;

    fn from_str(s: &str) -> FaunaResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            other => Err(FaunaError::invalid(format!(
                "unknown sex {other:?}: expected male (m) or female (f)"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
