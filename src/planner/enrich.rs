use std::str::FromStr;

use super::{DispatchError, DispatchResult, FuelPriceTable};
use crate::domain::{PlantType, PowerPlant};
use crate::utils::truncate_mw;

/// A plant with everything the dispatch passes need precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPlant {
    pub name: String,
    pub plant_type: PlantType,
    pub efficiency: f64,
    /// MW, truncated to one decimal
    pub pmin: f64,
    /// MW, truncated to one decimal; scaled by wind availability for wind turbines
    pub pmax: f64,
    /// Fuel price, euro/MWh of fuel
    pub price: f64,
    /// tons CO2/MWh
    pub emission_factor: f64,
    /// euro/MWh produced
    pub marginal_cost: f64,
}

pub fn enrich_plant(plant: &PowerPlant, fuels: &FuelPriceTable) -> DispatchResult<EnrichedPlant> {
    let plant_type =
        PlantType::from_str(&plant.plant_type).map_err(|_| DispatchError::UnknownPlantType {
            plant: plant.name.clone(),
            plant_type: plant.plant_type.clone(),
        })?;

    if plant.efficiency <= 0.0 || !plant.efficiency.is_finite() {
        return Err(DispatchError::NonPositiveEfficiency {
            plant: plant.name.clone(),
            efficiency: plant.efficiency,
        });
    }

    let price = fuels.price(plant_type.fuel())?;
    let pmax = if plant_type.is_wind() {
        plant.pmax * fuels.wind_ratio()
    } else {
        plant.pmax
    };
    let emission_factor = plant_type.emission_factor();
    let marginal_cost = price / plant.efficiency + emission_factor * fuels.co2_price();

    Ok(EnrichedPlant {
        name: plant.name.clone(),
        plant_type,
        efficiency: plant.efficiency,
        pmin: truncate_mw(plant.pmin),
        pmax: truncate_mw(pmax),
        price,
        emission_factor,
        marginal_cost,
    })
}

/// Enrich every plant, keeping input order. Fails on the first invalid plant.
pub fn enrich_plants(
    plants: &[PowerPlant],
    fuels: &FuelPriceTable,
) -> DispatchResult<Vec<EnrichedPlant>> {
    plants.iter().map(|plant| enrich_plant(plant, fuels)).collect()
}
