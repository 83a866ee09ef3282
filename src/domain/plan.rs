use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{Fuel, PowerPlant};

/// Everything needed to compute one production plan.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_names"))]
pub struct DispatchRequest {
    /// Required load, MW
    #[validate(range(min = 0.0))]
    pub load: f64,
    #[validate(custom(function = "validate_fuels"))]
    pub fuels: BTreeMap<String, f64>,
    #[validate(nested)]
    pub powerplants: Vec<PowerPlant>,
}

/// Output of a single plant in the plan.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub name: String,
    /// Produced power, MW
    pub p: f64,
}

impl Allocation {
    pub fn new(name: impl Into<String>, p: f64) -> Self {
        Self { name: name.into(), p }
    }
}

fn validate_fuels(fuels: &BTreeMap<String, f64>) -> Result<(), ValidationError> {
    for fuel in [Fuel::Co2, Fuel::Wind] {
        if !fuels.contains_key(fuel.key()) {
            let mut err = ValidationError::new("missing_fuel");
            err.message = Some(format!("fuels must contain '{}'", fuel.key()).into());
            return Err(err);
        }
    }
    Ok(())
}

fn validate_unique_names(request: &DispatchRequest) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for plant in &request.powerplants {
        if !seen.insert(plant.name.as_str()) {
            let mut err = ValidationError::new("duplicate_plant_name");
            err.message = Some(format!("plant name '{}' is used more than once", plant.name).into());
            return Err(err);
        }
    }
    Ok(())
}
