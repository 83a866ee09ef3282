use super::MeritOrder;
use crate::utils::truncate_mw;

/// Cascading allocation over the merit order.
///
/// Each plant takes whatever load is left once every cheaper plant runs at
/// full capacity, clamped to `[0, pmax]` and truncated to one decimal.
pub fn allocate(order: &MeritOrder, load: f64) -> Vec<f64> {
    order
        .plants()
        .iter()
        .zip(order.cumulative_pmax())
        .map(|(plant, cumulative)| {
            let residual = load - (cumulative - plant.pmax);
            truncate_mw(residual.max(0.0).min(plant.pmax))
        })
        .collect()
}
