use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use super::{DispatchError, DispatchResult};
use crate::domain::Fuel;

/// Fuel prices of one request, keyed by [`Fuel`].
///
/// Wind is free to run: its entry in the table is always 0 while the original
/// percentage is kept aside as the availability of wind capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelPriceTable {
    prices: HashMap<Fuel, f64>,
    co2_price: f64,
    wind_percent: f64,
}

impl FuelPriceTable {
    /// Build the table from the raw `fuels` map. Unknown keys are ignored.
    pub fn from_fuels(fuels: &BTreeMap<String, f64>) -> DispatchResult<Self> {
        let co2_price = required(fuels, Fuel::Co2)?;
        let wind_percent = required(fuels, Fuel::Wind)?;

        let mut prices: HashMap<Fuel, f64> = fuels
            .iter()
            .filter_map(|(key, price)| Fuel::from_str(key).ok().map(|fuel| (fuel, *price)))
            .collect();
        prices.insert(Fuel::Wind, 0.0);

        Ok(Self {
            prices,
            co2_price,
            wind_percent,
        })
    }

    /// Variable cost of `fuel`, euro/MWh
    pub fn price(&self, fuel: Fuel) -> DispatchResult<f64> {
        self.prices
            .get(&fuel)
            .copied()
            .ok_or(DispatchError::MissingFuel(fuel.key()))
    }

    /// euro/ton
    pub fn co2_price(&self) -> f64 {
        self.co2_price
    }

    pub fn wind_percent(&self) -> f64 {
        self.wind_percent
    }

    /// Fraction of nominal wind capacity that can be dispatched.
    pub fn wind_ratio(&self) -> f64 {
        self.wind_percent / 100.0
    }
}

fn required(fuels: &BTreeMap<String, f64>, fuel: Fuel) -> DispatchResult<f64> {
    fuels
        .get(fuel.key())
        .copied()
        .ok_or(DispatchError::MissingFuel(fuel.key()))
}
