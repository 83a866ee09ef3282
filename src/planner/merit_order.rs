use ordered_float::OrderedFloat;

use super::EnrichedPlant;

/// Plants ranked from cheapest to most expensive marginal cost, together with
/// the running sum of their capacity.
///
/// The ranking is stable: plants with equal marginal cost keep the order in
/// which they were submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct MeritOrder {
    plants: Vec<EnrichedPlant>,
    cumulative_pmax: Vec<f64>,
}

impl MeritOrder {
    pub fn rank(mut plants: Vec<EnrichedPlant>) -> Self {
        plants.sort_by_key(|plant| OrderedFloat(plant.marginal_cost));

        let cumulative_pmax = plants
            .iter()
            .scan(0.0, |total, plant| {
                *total += plant.pmax;
                Some(*total)
            })
            .collect();

        Self {
            plants,
            cumulative_pmax,
        }
    }

    pub fn plants(&self) -> &[EnrichedPlant] {
        &self.plants
    }

    /// Capacity of each plant plus all cheaper ones, MW
    pub fn cumulative_pmax(&self) -> &[f64] {
        &self.cumulative_pmax
    }

    pub fn total_capacity(&self) -> f64 {
        self.cumulative_pmax.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
