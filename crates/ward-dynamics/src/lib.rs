//! `ward-dynamics` — the two decision procedures of the `rust_ward` core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`pain`]      | `evolve` — autonomous per-step pain dynamics          |
//! | [`allocator`] | `allocate` — priority, quota-bounded treatment choice |
//!
//! Both are free functions over `ward-agent` state: `evolve` is pure except
//! for its RNG draw, and `allocate` mutates only the patients it selects plus
//! the doctor's counter.  Neither can fail — quota and threshold are branch
//! conditions, not error conditions.

pub mod allocator;
pub mod pain;


pub use allocator::allocate;
pub use pain::{evolve, evolve_with_noise, oscillation};
