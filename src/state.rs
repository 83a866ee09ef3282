use std::sync::Arc;

use crate::planner::ProductionPlanner;

#[derive(Clone, Default)]
pub struct AppState {
    pub planner: Arc<ProductionPlanner>,
}

