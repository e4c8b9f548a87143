//! `fauna-core` — foundational types for the `fauna` animal behavior model.
//!
//! This crate is a dependency of every other `fauna-*` crate.  It has no
//! `fauna-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Point<D>`, `Point2`, `Point3`, euclidean distance    |
//! | [`rng`]         | `RandomSource`, `AgentRng` (per-agent), `SimRng`      |
//! | [`config`]      | `BehaviorConfig` — every behavioral constant          |
//! | [`error`]       | `FaunaError`, `FaunaResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BehaviorConfig;
pub use error::{FaunaError, FaunaResult};
pub use geo::{Point, Point2, Point3};
pub use ids::AgentId;
pub use rng::{AgentRng, RandomSource, SimRng};
