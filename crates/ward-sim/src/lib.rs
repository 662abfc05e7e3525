//! `ward-sim` — step loop orchestrator for the rust_ward simulation.
//!
//! # One step, in order
//!
//! ```text
//! for step in 0..config.total_steps:
//!   ① Snapshot  — expose the pre-step state to the observer.
//!   ② Shuffle   — draw a fresh uniform permutation of all agents.
//!   ③ Activate  — run each agent's turn strictly sequentially:
//!                   patient → reset treated flag, evolve pain
//!                   doctor  → allocate treatments against live patient state
//!   ④ Advance   — increment the step counter.
//! ```
//!
//! Whether the doctor sees a given patient's pre-step or post-step pain
//! depends on where that patient's turn fell relative to the doctor's in the
//! permutation.  That is the intended emergent behavior of random activation
//! with live reads — the loop deliberately takes no pre-step copy of patient
//! state.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ward_core::WardConfig;
//! use ward_sim::{HistoryRecorder, Sim};
//!
//! let mut sim = Sim::new(WardConfig::default())?;
//! let mut recorder = HistoryRecorder::new();
//! sim.run(&mut recorder);
//! for snapshot in recorder.history() { /* aggregate / print */ }
//! ```

pub mod error;
pub mod history;
pub mod observer;
pub mod scheduler;
pub mod sim;
pub mod snapshot;


pub use error::{SimError, SimResult};
pub use history::HistoryRecorder;
pub use observer::{NoopObserver, WardObserver};
pub use sim::Sim;
pub use snapshot::{DoctorRow, PatientRow, StepSnapshot};
