//! Random activation: per-step agent ordering and turn execution.

use ward_agent::{AgentKind, Ward};
use ward_core::{AgentId, SimRng, Step};
use ward_dynamics::{allocate, evolve};

/// Refill `order` with every agent id and shuffle it uniformly.
///
/// Called once at the top of each step; the permutation is never cached
/// across steps.  This is the step's first draw from the shared RNG.
pub fn draw_activation_order(order: &mut Vec<AgentId>, ward: &Ward, rng: &mut SimRng) {
    order.clear();
    order.extend(ward.agent_ids());
    rng.shuffle(order);
}

/// Execute one step: run each agent's turn exactly once, strictly
/// sequentially in `order`.
///
/// A patient's turn resets its treated flag and refreshes its pain from the
/// dynamics engine (one noise draw, in activation order).  The doctor's turn
/// runs the allocator against the live patient slice, passing the same
/// permutation so equal-pain ties resolve by it.
///
/// Returns the number of treatments administered this step.
pub fn run_step(ward: &mut Ward, order: &[AgentId], step: Step, rng: &mut SimRng) -> usize {
    let mut treated = 0;
    for &id in order {
        match ward.kind(id) {
            AgentKind::Patient => {
                let p = &mut ward.patients[id.index()];
                p.treated_this_step = false;
                p.current_pain = evolve(p.base_pain, step, rng);
            }
            AgentKind::Doctor => {
                treated = allocate(&mut ward.doctor, &mut ward.patients, order);
            }
        }
    }
    treated
}
