//! # Base Cost Correlations
//!
//! Empirical purchased-cost correlations on a single scale variable
//! (shell weight, transfer area, or shaft power). Costs are in the
//! correlation's reference-year US dollars; no index escalation is applied.
//!
//! ## Forms
//!
//! | Equipment        | Scale | Form                                           |
//! |------------------|-------|------------------------------------------------|
//! | Reactor vessel   | W, lb | exp(7.0132 + 0.18255·ln W + 0.02297·(ln W)²)   |
//! | Column vessel    | W, lb | exp(7.2756 + 0.18255·ln W + 0.02297·(ln W)²)   |
//! | Heat exchanger   | A, ft²| exp(11.667 − 0.8709·ln A + 0.09005·(ln A)²)    |
//! | Compressor       | P, hp | exp(7.580 + 0.8·ln P)                          |
//!
//! Every form takes the natural log of its scale variable, so a
//! non-positive scale variable is a `Domain` error, never a default.
//!
//! ## References
//!
//! - Seider et al., *Product and Process Design Principles*, Ch. 22

use crate::errors::{CostError, EstimateResult};

/// Shaft-power constant for ft³/min and psia inputs giving horsepower
pub const POWER_CONSTANT: f64 = 0.00436;

/// Natural log of a strictly positive quantity.
///
/// # Errors
/// `Domain` naming `quantity` when `x <= 0` or `x` is not finite.
pub fn checked_ln(quantity: &str, x: f64) -> EstimateResult<f64> {
    if x > 0.0 && x.is_finite() {
        Ok(x.ln())
    } else {
        Err(CostError::domain(
            quantity,
            x.to_string(),
            "Logarithm requires a strictly positive value",
        ))
    }
}

/// exp(c0 + c1·ln X + c2·(ln X)²)
fn log_quadratic(quantity: &str, x: f64, c0: f64, c1: f64, c2: f64) -> EstimateResult<f64> {
    let ln_x = checked_ln(quantity, x)?;
    Ok((c0 + c1 * ln_x + c2 * ln_x * ln_x).exp())
}

/// Reactor (vertical vessel) base cost from shell weight
pub fn reactor_base_cost(weight_lb: f64) -> EstimateResult<f64> {
    log_quadratic("weight_lb", weight_lb, 7.0132, 0.18255, 0.02297)
}

/// Distillation column shell base cost from shell weight
pub fn column_base_cost(weight_lb: f64) -> EstimateResult<f64> {
    log_quadratic("weight_lb", weight_lb, 7.2756, 0.18255, 0.02297)
}

/// Heat-transfer area: A = Q / q
///
/// # Errors
/// `Domain` when the flux is zero or negative.
pub fn exchanger_area(heat_duty: f64, flux: f64) -> EstimateResult<f64> {
    if !(flux > 0.0) {
        return Err(CostError::domain(
            "flux_rate",
            flux.to_string(),
            "Heat flux must be positive to compute transfer area",
        ));
    }
    Ok(heat_duty / flux)
}

/// Shell-and-tube exchanger base cost from transfer area
pub fn exchanger_base_cost(area_ft2: f64) -> EstimateResult<f64> {
    log_quadratic("area_ft2", area_ft2, 11.667, -0.8709, 0.09005)
}

/// Isentropic compressor shaft power.
///
/// # Formula
/// ```text
/// Pc = 0.00436·(k/(k−1))·(Q₁·P₁/η)·((P₂/P₁)^((k−1)/k) − 1)
/// ```
///
/// # Arguments
/// * `k` - Specific-heat ratio Cp/Cv, must exceed 1
/// * `efficiency` - Isentropic efficiency η
/// * `inlet_flow_ft3_min` - Inlet volumetric flow Q₁
/// * `inlet_pressure` - P₁ (psia)
/// * `outlet_pressure` - P₂ (psia)
///
/// # Errors
/// `Domain` when k ≤ 1, η or P₁ is zero, or the computed power is negative
/// (outlet below inlet). Equal pressures give exactly zero power.
pub fn compressor_power_hp(
    k: f64,
    efficiency: f64,
    inlet_flow_ft3_min: f64,
    inlet_pressure: f64,
    outlet_pressure: f64,
) -> EstimateResult<f64> {
    if !(k > 1.0) {
        return Err(CostError::domain(
            "k",
            k.to_string(),
            "Specific-heat ratio must exceed 1 (k/(k-1) is undefined)",
        ));
    }
    if efficiency == 0.0 {
        return Err(CostError::domain("efficiency", "0", "Division by zero efficiency"));
    }
    if inlet_pressure == 0.0 {
        return Err(CostError::domain("inlet_pressure", "0", "Division by zero inlet pressure"));
    }

    let exponent = (k - 1.0) / k;
    let bracket = (outlet_pressure / inlet_pressure).powf(exponent) - 1.0;
    let power = POWER_CONSTANT * (k / (k - 1.0)) * (inlet_flow_ft3_min * inlet_pressure / efficiency) * bracket;

    if power < 0.0 {
        return Err(CostError::domain(
            "power_hp",
            power.to_string(),
            "Computed shaft power is negative (outlet pressure below inlet)",
        ));
    }
    Ok(power)
}

/// Compressor base cost from shaft power: exp(7.580 + 0.8·ln Pc)
pub fn compressor_base_cost(power_hp: f64) -> EstimateResult<f64> {
    let ln_p = checked_ln("power_hp", power_hp)?;
    Ok((7.580 + 0.8 * ln_p).exp())
}
