use super::{DispatchResult, MeritOrderDispatch};
use crate::domain::{Allocation, DispatchRequest};

/// A way of turning a load and a plant park into per-plant output.
pub trait DispatchStrategy: Send + Sync {
    fn plan(&self, request: &DispatchRequest) -> DispatchResult<Vec<Allocation>>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

pub struct ProductionPlanner {
    pub strategy: Box<dyn DispatchStrategy>,
}

impl ProductionPlanner {
    pub fn new(strategy: Box<dyn DispatchStrategy>) -> Self {
        Self { strategy }
    }

    pub fn plan(&self, request: &DispatchRequest) -> DispatchResult<Vec<Allocation>> {
        self.strategy.plan(request)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl Default for ProductionPlanner {
    fn default() -> Self {
        Self::new(Box::new(MeritOrderDispatch))
    }
}
