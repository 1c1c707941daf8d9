//! # Utility Consumption
//!
//! Steady-state utility demand for a fired-heater / cooling-water flowsheet.
//! Metric units throughout (kcal, kg, °C, hours).

/// Specific heat of cooling water, kcal/(kg·°C)
pub const CP_WATER: f64 = 1.0;

/// Lower heat of combustion of natural gas, kcal/kg
pub const NATURAL_GAS_HEAT_OF_COMBUSTION: f64 = 13_277.0;

/// kg CO₂ released per kg natural gas burned
pub const CO2_EMISSION_FACTOR: f64 = 2.74;

/// Default fired-heater thermal efficiency
pub const DEFAULT_HEATER_EFFICIENCY: f64 = 0.8;

/// Cooling water mass flow: m_cw = Q / (Cp·ΔT)
#[inline]
pub fn cooling_water_flow(heat_removed_kcal_hr: f64, delta_t_c: f64) -> f64 {
    heat_removed_kcal_hr / (CP_WATER * delta_t_c)
}

/// Fired-heater duty: Q_heater = Q / η
#[inline]
pub fn heater_duty(heat_added_kcal_hr: f64, efficiency: f64) -> f64 {
    heat_added_kcal_hr / efficiency
}

/// Natural gas burned for a heater duty: m_ng = Q_heater / ΔH_comb
#[inline]
pub fn natural_gas_flow(heater_duty_kcal_hr: f64) -> f64 {
    heater_duty_kcal_hr / NATURAL_GAS_HEAT_OF_COMBUSTION
}

/// CO₂ emitted: m_CO2 = m_ng · 2.74
#[inline]
pub fn co2_emissions(natural_gas_kg_hr: f64) -> f64 {
    natural_gas_kg_hr * CO2_EMISSION_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooling_water() {
        // 8.6219 Gcal/hr removed over a 16 °C rise
        let m = cooling_water_flow(8_621_900.0, 16.0);
        assert!((m - 538_868.75).abs() < 1e-6, "m_cw = {}", m);
    }

    #[test]
    fn test_natural_gas_chain() {
        let q = heater_duty(7_194_400.0, DEFAULT_HEATER_EFFICIENCY);
        assert!((q - 8_993_000.0).abs() < 1e-6, "Q_heater = {}", q);
        let m_ng = natural_gas_flow(q);
        assert!((m_ng - 677.336747759283).abs() < 1e-9, "m_ng = {}", m_ng);
    }

    #[test]
    fn test_co2() {
        let m = co2_emissions(677.43);
        assert!((m - 1856.1582).abs() < 1e-9, "m_CO2 = {}", m);
    }
}
