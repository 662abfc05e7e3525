//! `ward-agent` — mutable agent state for the `rust_ward` simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`patient`] | `Patient` — per-patient condition and treatment flag   |
//! | [`doctor`]  | `Doctor` — treatment policy parameters and counter     |
//! | [`roster`]  | `Ward`, `AgentKind` — the shared agent collection      |
//! | [`builder`] | `Ward::from_config` — validated construction           |
//!
//! All agent state is owned by the [`Ward`]; the step loop in `ward-sim`
//! mutates it strictly sequentially, so no field needs interior mutability or
//! locking.

pub mod builder;
pub mod doctor;
pub mod patient;
pub mod roster;

#[cfg(test)]
mod tests;

pub use doctor::Doctor;
pub use patient::Patient;
pub use roster::{AgentKind, Ward};
