//! Simulation observer trait for progress reporting and data collection.

use ward_agent::Ward;
use ward_core::Step;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The `&Ward` borrow in `on_snapshot` is
/// read-only and valid only for the duration of the call.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl WardObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, treated: usize) {
///         println!("step {step}: treated {treated} patients");
///     }
/// }
/// ```
pub trait WardObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called once per step with the pre-step state, before any agent runs.
    ///
    /// Use [`StepSnapshot::capture`][crate::StepSnapshot::capture] to copy the
    /// observable fields out if they need to outlive the call.
    fn on_snapshot(&mut self, _step: Step, _ward: &Ward) {}

    /// Called at the end of each step.
    ///
    /// `treated` is the number of treatments the doctor administered this
    /// step (0 if the doctor's turn found no qualifying patient).
    fn on_step_end(&mut self, _step: Step, _treated: usize) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`WardObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl WardObserver for NoopObserver {}
