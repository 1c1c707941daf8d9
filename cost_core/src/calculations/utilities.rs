//! # Utility Consumption
//!
//! Cooling water, fired-heater natural gas and the resulting CO₂ for one
//! flowsheet. Not an equipment item: it has no purchased cost and is not
//! stored in an estimate.
//!
//! ```rust
//! use cost_core::calculations::utilities::{calculate, UtilitiesInput};
//!
//! let result = calculate(&UtilitiesInput::default()).unwrap();
//! assert!((result.cooling_water_kg_hr - 538_868.75).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{utilities as eq, Equation};
use crate::errors::{require_non_negative, require_positive, CostError, EstimateResult};

fn default_efficiency() -> f64 {
    eq::DEFAULT_HEATER_EFFICIENCY
}

/// Utility loads.
///
/// Defaults are the ethylbenzene-plant loads the calculator was built for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UtilitiesInput {
    /// Heat removed by cooling water (kcal/hr)
    pub cooling_load_kcal_hr: f64,

    /// Cooling water temperature rise (°C)
    pub cooling_water_delta_t_c: f64,

    /// Process heat supplied by the fired heater (kcal/hr)
    pub heating_load_kcal_hr: f64,

    /// Fired-heater efficiency in (0, 1]
    #[serde(default = "default_efficiency")]
    pub heater_efficiency: f64,
}

impl Default for UtilitiesInput {
    fn default() -> Self {
        Self {
            cooling_load_kcal_hr: 8_621_900.0,
            cooling_water_delta_t_c: 16.0,
            heating_load_kcal_hr: 7_194_400.0,
            heater_efficiency: eq::DEFAULT_HEATER_EFFICIENCY,
        }
    }
}

impl UtilitiesInput {
    pub fn validate(&self) -> EstimateResult<()> {
        require_non_negative("cooling_load_kcal_hr", self.cooling_load_kcal_hr)?;
        require_positive("cooling_water_delta_t_c", self.cooling_water_delta_t_c)?;
        require_non_negative("heating_load_kcal_hr", self.heating_load_kcal_hr)?;
        require_positive("heater_efficiency", self.heater_efficiency)?;
        if self.heater_efficiency > 1.0 {
            return Err(CostError::invalid_input(
                "heater_efficiency",
                self.heater_efficiency.to_string(),
                "Efficiency must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

/// Utility demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UtilitiesResult {
    /// m_cw (kg/hr)
    pub cooling_water_kg_hr: f64,
    /// Q_heater (kcal/hr)
    pub heater_duty_kcal_hr: f64,
    /// m_ng (kg/hr)
    pub natural_gas_kg_hr: f64,
    /// m_CO2 (kg/hr)
    pub co2_kg_hr: f64,
}

impl UtilitiesResult {
    pub fn equations(&self) -> Vec<Equation> {
        vec![Equation::CoolingWaterFlow, Equation::NaturalGasFlow, Equation::Co2Emissions]
    }
}

/// Calculate utility demand.
pub fn calculate(input: &UtilitiesInput) -> EstimateResult<UtilitiesResult> {
    input.validate()?;

    let cooling_water_kg_hr = eq::cooling_water_flow(input.cooling_load_kcal_hr, input.cooling_water_delta_t_c);
    let heater_duty_kcal_hr = eq::heater_duty(input.heating_load_kcal_hr, input.heater_efficiency);
    let natural_gas_kg_hr = eq::natural_gas_flow(heater_duty_kcal_hr);
    let co2_kg_hr = eq::co2_emissions(natural_gas_kg_hr);

    debug!(cooling_water_kg_hr, heater_duty_kcal_hr, natural_gas_kg_hr, co2_kg_hr, "utilities calculated");

    Ok(UtilitiesResult {
        cooling_water_kg_hr,
        heater_duty_kcal_hr,
        natural_gas_kg_hr,
        co2_kg_hr,
    })
}
