use tracing::{debug, warn};

use super::MeritOrder;
use crate::utils::truncate_mw;

/// What the repair pass did to the allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairSummary {
    /// Pairs where output was shifted to lift the next plant to its pmin
    pub repaired: usize,
    /// Pairs left below the next plant's pmin
    pub unresolved: usize,
}

/// Single forward pass over adjacent plants in merit order.
///
/// When the load left after plant `i` runs at capacity is positive but below
/// the next plant's pmin, plant `i` gives up just enough output for plant
/// `i + 1` to run exactly at its pmin. The total stays the same. If plant `i`
/// cannot give up that much, the pair is left alone.
///
/// The pass is not repeated, so chains of tight minimums may remain
/// infeasible. Each step sees the outputs written by the previous one.
pub fn repair(order: &MeritOrder, load: f64, production: &mut [f64]) -> RepairSummary {
    let mut summary = RepairSummary::default();
    let plants = order.plants();

    for i in 0..plants.len().saturating_sub(1) {
        let remainder = load - order.cumulative_pmax()[i];
        let next_pmin = truncate_mw(plants[i + 1].pmin);

        if remainder <= 0.0 || remainder >= next_pmin {
            continue;
        }

        let deficit = next_pmin - remainder;
        if production[i] > deficit {
            production[i] -= deficit;
            production[i + 1] = next_pmin;
            summary.repaired += 1;
            debug!(
                plant = %plants[i].name,
                next_plant = %plants[i + 1].name,
                deficit,
                "shifted output to meet pmin of next plant"
            );
        } else {
            summary.unresolved += 1;
            warn!(
                plant = %plants[i].name,
                next_plant = %plants[i + 1].name,
                remainder,
                next_pmin,
                "next plant left below its pmin"
            );
        }
    }

    summary
}
