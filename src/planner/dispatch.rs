use tracing::{debug, info};

use super::{
    allocate, enrich_plants, repair, DispatchResult, DispatchStrategy, FuelPriceTable, MeritOrder,
};
use crate::domain::{Allocation, DispatchRequest};

/// Greedy merit-order dispatch: cheapest plants first, then one repair pass for
/// plants that would otherwise run below their minimum output.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeritOrderDispatch;

impl DispatchStrategy for MeritOrderDispatch {
    fn plan(&self, request: &DispatchRequest) -> DispatchResult<Vec<Allocation>> {
        let fuels = FuelPriceTable::from_fuels(&request.fuels)?;
        let order = MeritOrder::rank(enrich_plants(&request.powerplants, &fuels)?);

        for (rank, plant) in order.plants().iter().enumerate() {
            debug!(
                rank,
                plant = %plant.name,
                plant_type = %plant.plant_type,
                marginal_cost = plant.marginal_cost,
                pmin = plant.pmin,
                pmax = plant.pmax,
                "merit order"
            );
        }

        let mut production = allocate(&order, request.load);
        let summary = repair(&order, request.load, &mut production);

        let dispatched: f64 = production.iter().sum();
        info!(
            load = request.load,
            plants = order.len(),
            capacity = order.total_capacity(),
            dispatched,
            repaired = summary.repaired,
            unresolved = summary.unresolved,
            "production plan computed"
        );

        Ok(order
            .plants()
            .iter()
            .zip(production)
            .map(|(plant, p)| Allocation::new(plant.name.clone(), p))
            .collect())
    }

    fn name(&self) -> &'static str {
        "merit-order"
    }
}

/// Compute a production plan with the merit-order strategy.
pub fn production_plan(request: &DispatchRequest) -> DispatchResult<Vec<Allocation>> {
    MeritOrderDispatch.plan(request)
}
