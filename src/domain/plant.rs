use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::{Validate, ValidationError};

use super::Fuel;

/// CO2 emitted per MWh produced by thermal plants, in tons
pub const THERMAL_EMISSION_FACTOR: f64 = 0.3;

/// Kind of generating unit.
///
/// Every plant type knows which fuel it burns and how much CO2 it emits, so a
/// new type only needs a new variant and its two match arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlantType {
    GasFired,
    TurboJet,
    WindTurbine,
}

impl PlantType {
    pub fn fuel(&self) -> Fuel {
        match self {
            PlantType::GasFired => Fuel::Gas,
            PlantType::TurboJet => Fuel::Kerosine,
            PlantType::WindTurbine => Fuel::Wind,
        }
    }

    /// Tons of CO2 per MWh
    pub fn emission_factor(&self) -> f64 {
        match self {
            PlantType::GasFired | PlantType::TurboJet => THERMAL_EMISSION_FACTOR,
            PlantType::WindTurbine => 0.0,
        }
    }

    pub fn is_wind(&self) -> bool {
        matches!(self, PlantType::WindTurbine)
    }
}

/// A power plant as submitted by the caller.
///
/// `plant_type` stays a plain string here: resolving it to a [`PlantType`] is
/// the planner's job and an unknown type is reported as a planning error.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_capacity_bounds"))]
pub struct PowerPlant {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: String,
    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub efficiency: f64,
    /// Minimum output when committed, MW
    #[validate(range(min = 0.0))]
    pub pmin: f64,
    /// Maximum output, MW
    pub pmax: f64,
}

impl PowerPlant {
    pub fn new(
        name: impl Into<String>,
        plant_type: impl Into<String>,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    ) -> Self {
        Self {
            name: name.into(),
            plant_type: plant_type.into(),
            efficiency,
            pmin,
            pmax,
        }
    }
}

fn validate_capacity_bounds(plant: &PowerPlant) -> Result<(), ValidationError> {
    if plant.pmax < plant.pmin {
        let mut err = ValidationError::new("pmax_below_pmin");
        err.message = Some(format!("pmax of plant '{}' is below its pmin", plant.name).into());
        return Err(err);
    }
    Ok(())
}
