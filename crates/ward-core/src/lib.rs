//! `ward-core` — foundational types for the `rust_ward` simulation.
//!
//! This crate is a dependency of every other `ward-*` crate.  It intentionally
//! has no `ward-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `AgentId`                                  |
//! | [`step`]   | `Step` — the simulation step counter       |
//! | [`rng`]    | `SimRng` — the single shared generator     |
//! | [`config`] | `WardConfig`, pain-scale constants         |
//! | [`error`]  | `WardError`, `WardResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PAIN_MAX, PAIN_MIN, WardConfig};
pub use error::{WardError, WardResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use step::Step;
