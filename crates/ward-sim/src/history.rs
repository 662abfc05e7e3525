//! In-memory history collection for post-run aggregation.

use ward_agent::Ward;
use ward_core::Step;

use crate::observer::WardObserver;
use crate::snapshot::StepSnapshot;

/// A [`WardObserver`] that records every per-step snapshot in order.
///
/// This is the enumeration surface for the external Reporter collaborator:
/// after `sim.run(&mut recorder)` the full history is available as a slice of
/// [`StepSnapshot`]s, one per step, each showing the pre-step state.
#[derive(Default)]
pub struct HistoryRecorder {
    steps: Vec<StepSnapshot>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded snapshots, in step order.
    pub fn history(&self) -> &[StepSnapshot] {
        &self.steps
    }

    /// Consume the recorder, yielding the owned history.
    pub fn into_history(self) -> Vec<StepSnapshot> {
        self.steps
    }
}

impl WardObserver for HistoryRecorder {
    fn on_snapshot(&mut self, step: Step, ward: &Ward) {
        self.steps.push(StepSnapshot::capture(step, ward));
    }
}
