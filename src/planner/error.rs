use thiserror::Error;

/// Reasons a production plan cannot be computed.
///
/// All of them are defects in the submitted plant park or fuel prices; none is
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Unknown plant type '{plant_type}' for plant '{plant}'")]
    UnknownPlantType { plant: String, plant_type: String },

    #[error("Plant '{plant}' has non-positive efficiency {efficiency}")]
    NonPositiveEfficiency { plant: String, efficiency: f64 },

    #[error("Missing fuel price '{0}'")]
    MissingFuel(&'static str),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
