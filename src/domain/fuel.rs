use strum::{Display, EnumString, IntoStaticStr};

/// Fuel entries understood by the planner, keyed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, IntoStaticStr)]
pub enum Fuel {
    #[strum(serialize = "gas(euro/MWh)")]
    Gas,
    #[strum(serialize = "kerosine(euro/MWh)")]
    Kerosine,
    /// Price of emission allowances, euro per ton of CO2
    #[strum(serialize = "co2(euro/ton)")]
    Co2,
    /// Share of nominal wind capacity available right now, in percent
    #[strum(serialize = "wind(%)")]
    Wind,
}

impl Fuel {
    /// Key under which this fuel appears in the request's `fuels` map.
    pub fn key(self) -> &'static str {
        self.into()
    }
}
