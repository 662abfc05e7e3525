//! The `Sim` struct and its step loop.

use ward_agent::Ward;
use ward_core::{AgentId, SimRng, Step, WardConfig};

use crate::observer::WardObserver;
use crate::scheduler;
use crate::SimResult;

/// The main simulation driver.
///
/// Owns the step counter, the ward roster, the activation order buffer, and
/// the single shared RNG — everything else lives in the agents.  Each step it
/// exposes the pre-step state to the observer, draws a fresh activation
/// permutation, and runs every agent's turn exactly once in that order.
///
/// Create via [`Sim::new`]; drive with [`run`][Sim::run] or
/// [`run_steps`][Sim::run_steps].
pub struct Sim {
    /// Global configuration (total steps, seed, treatment policy, …).
    pub config: WardConfig,

    /// The current step — advanced once per completed step.
    pub step: Step,

    /// All agent state: the patient population plus the doctor.
    pub ward: Ward,

    /// This step's agent permutation.  Regenerated (never cached) at the top
    /// of every step; kept as a field only to reuse the allocation.
    pub activation_order: Vec<AgentId>,

    /// The shared RNG — advanced by every draw, never reseeded mid-run.
    rng: SimRng,
}

impl Sim {
    /// Validate `config`, seed the RNG, and build the ward roster.
    ///
    /// Base-pain sampling happens here, so two `Sim`s built from identical
    /// configs start with identical rosters *and* identical RNG positions.
    pub fn new(config: WardConfig) -> SimResult<Sim> {
        let mut rng = SimRng::new(config.seed);
        let ward = Ward::from_config(&config, &mut rng)?;
        let activation_order = Vec::with_capacity(ward.agent_count());
        Ok(Sim {
            config,
            step: Step::ZERO,
            ward,
            activation_order,
            rng,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current step to `config.end_step()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: WardObserver>(&mut self, observer: &mut O) {
        while self.step < self.config.end_step() {
            let now = self.step;
            observer.on_step_start(now);
            observer.on_snapshot(now, &self.ward);
            let treated = self.process_step(now);
            observer.on_step_end(now, treated);
            self.step = self.step.offset(1);
        }
        observer.on_sim_end(self.step);
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: WardObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.step;
            observer.on_step_start(now);
            observer.on_snapshot(now, &self.ward);
            let treated = self.process_step(now);
            observer.on_step_end(now, treated);
            self.step = self.step.offset(1);
        }
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn process_step(&mut self, now: Step) -> usize {
        scheduler::draw_activation_order(&mut self.activation_order, &self.ward, &mut self.rng);
        scheduler::run_step(&mut self.ward, &self.activation_order, now, &mut self.rng)
    }
}
