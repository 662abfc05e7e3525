//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `WardError` via `From` impls, or keep them separate and wrap `WardError` as
//! one variant.  The step loop itself has no error conditions — all quantities
//! are clamped rather than rejected — so the only errors are raised at
//! construction time.

use thiserror::Error;

/// The top-level error type for `ward-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WardError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ward-*` crates.
pub type WardResult<T> = Result<T, WardError>;
