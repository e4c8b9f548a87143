//! `fauna-agent` — individual animals and their behavior.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`traits`]      | `Species`, `Diet`, `Sex`, `FoodType`                          |
//! | [`agent`]       | `Agent<D>` — state, movement cost, death, decay               |
//! | [`builder`]     | `AgentBuilder` — de novo and two-parent construction          |
//! | [`behavior`]    | `eat`, `mate`, `socialise` and their outcome enums            |
//! | [`population`]  | `Population<D>` — driver-owned arena keyed by `AgentId`       |
//! | [`loader`]      | CSV herd loader                                               |
//!
//! # Contract with the driver
//!
//! This crate has no tick loop.  A driver owns a [`Population`] (or its own
//! collection), decides which agents meet, and calls the operations here.
//! Every stochastic operation takes the driver's [`RandomSource`] so a
//! seeded run is fully reproducible.  The driver also advances `age`, calls
//! [`Agent::advance_decay`] on carcasses, clears `pregnant` at birth and
//! decides what negative energy means.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on agents and traits.   |
//!
//! [`RandomSource`]: fauna_core::RandomSource

pub mod agent;
pub mod behavior;
pub mod builder;
pub mod loader;
pub mod population;
pub mod traits;


pub use agent::Agent;
pub use behavior::{EatOutcome, MateOutcome, MateRole, Refusal, SocialOutcome};
pub use builder::AgentBuilder;
pub use loader::{load_herd_csv, load_herd_reader};
pub use population::Population;
pub use traits::{Diet, FoodType, Sex, Species};
