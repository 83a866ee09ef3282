use utoipa::OpenApi;

use crate::api::error::ErrorResponse;
use crate::domain::{Allocation, DispatchRequest, PowerPlant};

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::production_plan::production_plan),
    components(schemas(DispatchRequest, PowerPlant, Allocation, ErrorResponse)),
    tags((name = "planner", description = "Merit-order production planning"))
)]
pub struct ApiDoc;
