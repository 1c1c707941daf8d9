//! # Shell-and-Tube Heat Exchanger Cost
//!
//! Area from duty and flux, base cost on area, then pressure, material and
//! tube-length corrections.
//!
//! ## Tube Length
//!
//! F_L is always 1.0. Tube length is accepted and validated but does not
//! change the price; the correction for tubes of 20 ft or longer is not
//! modeled.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::heat_exchanger::{calculate, HeatExchangerInput};
//! use cost_core::factors::LookupPolicy;
//!
//! let input = HeatExchangerInput {
//!     label: "E-101".to_string(),
//!     heat_duty_btu_hr: 1.0e6,
//!     flux_btu_hr_ft2: 100.0,
//!     pressure_psig: 300.0,
//!     materials: "carbon steel/carbon steel".to_string(),
//!     tube_length_ft: 16.0,
//! };
//! let result = calculate(&input, LookupPolicy::Strict).unwrap();
//! assert_eq!(result.area_ft2, 10_000.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CorrectionFactor, CostResult};
use crate::equations::{self, Equation};
use crate::errors::{require_finite, require_positive, EstimateResult};
use crate::factors::{ExchangerMaterialFactor, FactorLookup, LookupPolicy, EXCHANGER_MATERIALS};
use crate::units::Dollars;

/// Input parameters for a shell-and-tube exchanger.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "E-101",
///   "heat_duty_btu_hr": 1000000.0,
///   "flux_btu_hr_ft2": 100.0,
///   "pressure_psig": 150.0,
///   "materials": "carbon steel/stainless steel",
///   "tube_length_ft": 16.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatExchangerInput {
    /// User label (e.g., "E-101")
    pub label: String,

    /// Heat duty Q (Btu/hr)
    pub heat_duty_btu_hr: f64,

    /// Average heat flux q (Btu/hr·ft²)
    pub flux_btu_hr_ft2: f64,

    /// Shell-side design pressure (psig)
    pub pressure_psig: f64,

    /// Shell/tube material pair key, "shell/tube"
    pub materials: String,

    /// Tube length (ft)
    pub tube_length_ft: f64,
}

impl HeatExchangerInput {
    /// Validate input parameters.
    ///
    /// Duty must be positive. Flux only needs to be finite here; a
    /// non-positive flux is a domain error raised by the area equation.
    pub fn validate(&self) -> EstimateResult<()> {
        require_positive("heat_duty_btu_hr", self.heat_duty_btu_hr)?;
        require_finite("flux_btu_hr_ft2", self.flux_btu_hr_ft2)?;
        require_finite("pressure_psig", self.pressure_psig)?;
        require_positive("tube_length_ft", self.tube_length_ft)?;
        Ok(())
    }
}

/// Results from an exchanger calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatExchangerResult {
    pub label: String,

    /// A = Q/q (ft²)
    pub area_ft2: f64,

    /// Base cost C_B
    pub base_cost: Dollars,

    /// Material pair lookup (a, b)
    pub materials: FactorLookup<ExchangerMaterialFactor>,

    /// F_M = a + (A/100)^b
    pub material_factor: f64,

    /// F_P
    pub pressure_factor: f64,

    /// F_L (always 1.0)
    pub tube_length_factor: f64,

    /// F_P·F_M·F_L·C_B
    pub total_cost: Dollars,
}

impl HeatExchangerResult {
    pub fn cost_result(&self) -> CostResult {
        CostResult {
            equipment: "Shell-and-Tube Heat Exchanger".to_string(),
            base_cost: self.base_cost,
            correction_factors: vec![
                CorrectionFactor::new("F_P", "Design pressure", self.pressure_factor),
                CorrectionFactor::new(
                    "F_M",
                    format!("Materials ({})", self.materials.key),
                    self.material_factor,
                ),
                CorrectionFactor::new("F_L", "Tube length", self.tube_length_factor),
            ],
            total_cost: self.total_cost,
        }
    }

    pub fn equations(&self) -> Vec<Equation> {
        vec![
            Equation::ExchangerArea,
            Equation::ExchangerBaseCost,
            Equation::ExchangerPressureFactor,
            Equation::ExchangerMaterialFactor,
            Equation::ExchangerTubeLengthFactor,
            Equation::ExchangerPurchasedCost,
        ]
    }

    pub fn unmatched_keys(&self) -> Vec<String> {
        self.materials.fallback_note(EXCHANGER_MATERIALS.name()).into_iter().collect()
    }
}

/// Calculate exchanger purchased cost.
///
/// # Errors
///
/// * `InvalidInput` - non-finite input, non-positive duty or tube length
/// * `Domain` - flux ≤ 0
/// * `UnknownKey` - unknown material pair under [`LookupPolicy::Strict`]
pub fn calculate(input: &HeatExchangerInput, policy: LookupPolicy) -> EstimateResult<HeatExchangerResult> {
    input.validate()?;

    // === Area and Base Cost ===
    let area_ft2 = equations::exchanger_area(input.heat_duty_btu_hr, input.flux_btu_hr_ft2)?;
    let base_cost = equations::exchanger_base_cost(area_ft2)?;

    // === Correction Factors ===
    let materials = EXCHANGER_MATERIALS.resolve(&input.materials, policy)?;
    let material_factor = equations::exchanger_material_factor(materials.value, area_ft2);
    let pressure_factor = equations::exchanger_pressure_factor(input.pressure_psig);
    let tube_length_factor = equations::exchanger_tube_length_factor(input.tube_length_ft);

    let total_cost = equations::exchanger_total_cost(pressure_factor, material_factor, tube_length_factor, base_cost);

    debug!(
        label = %input.label,
        area_ft2,
        base_cost,
        material_factor,
        pressure_factor,
        total_cost,
        "heat exchanger priced"
    );

    Ok(HeatExchangerResult {
        label: input.label.clone(),
        area_ft2,
        base_cost: Dollars(base_cost),
        materials,
        material_factor,
        pressure_factor,
        tube_length_factor,
        total_cost: Dollars(total_cost),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CostError, ErrorKind};

    fn rel_eq(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    fn test_exchanger() -> HeatExchangerInput {
        HeatExchangerInput {
            label: "E-101".to_string(),
            heat_duty_btu_hr: 1.0e6,
            flux_btu_hr_ft2: 100.0,
            pressure_psig: 50.0,
            materials: "carbon steel/carbon steel".to_string(),
            tube_length_ft: 16.0,
        }
    }

    #[test]
    fn test_low_pressure_carbon_steel() {
        let result = calculate(&test_exchanger(), LookupPolicy::Strict).unwrap();
        assert_eq!(result.area_ft2, 10_000.0);
        assert!(rel_eq(result.base_cost.0, 79593.63191968329));
        assert!(rel_eq(result.material_factor, 1.5135612484362082));
        assert_eq!(result.pressure_factor, 1.0);
        assert_eq!(result.tube_length_factor, 1.0);
        assert!(rel_eq(result.total_cost.0, 1.5135612484362082 * 79593.63191968329));
    }

    #[test]
    fn test_high_pressure() {
        let mut input = test_exchanger();
        input.pressure_psig = 300.0;
        let result = calculate(&input, LookupPolicy::Strict).unwrap();
        assert!(rel_eq(result.pressure_factor, 1.0496));
        assert!(rel_eq(result.total_cost.0, 126445.1408059659), "total = {}", result.total_cost.0);
    }

    #[test]
    fn test_material_pair_normalization() {
        let mut input = test_exchanger();
        input.materials = "  Carbon Steel / Stainless  Steel ".to_string();
        let result = calculate(&input, LookupPolicy::Strict).unwrap();
        assert!(result.materials.matched);
        assert!(rel_eq(result.material_factor, 3.569700858609983));
    }

    #[test]
    fn test_unknown_pair_reproduces_carbon_steel() {
        let base = calculate(&test_exchanger(), LookupPolicy::Permissive).unwrap();
        let mut input = test_exchanger();
        input.materials = "brass/brass".to_string();
        let result = calculate(&input, LookupPolicy::Permissive).unwrap();

        assert!(!result.materials.matched);
        assert_eq!(result.materials.value, ExchangerMaterialFactor::new(0.0, 0.09));
        assert_eq!(result.total_cost, base.total_cost);
        assert_eq!(result.unmatched_keys().len(), 1);

        let err = calculate(&input, LookupPolicy::Strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownKey);
    }

    #[test]
    fn test_tube_length_does_not_change_price() {
        let short = calculate(&test_exchanger(), LookupPolicy::Permissive).unwrap();
        let mut input = test_exchanger();
        input.tube_length_ft = 24.0;
        let long = calculate(&input, LookupPolicy::Permissive).unwrap();
        assert_eq!(short.total_cost, long.total_cost);
    }

    #[test]
    fn test_flux_domain_error() {
        let mut input = test_exchanger();
        input.flux_btu_hr_ft2 = 0.0;
        let err = calculate(&input, LookupPolicy::Permissive).unwrap_err();
        assert!(matches!(err, CostError::Domain { ref quantity, .. } if quantity == "flux_rate"));
    }

    #[test]
    fn test_non_positive_duty_is_invalid_input() {
        for duty in [0.0, -1.0e6] {
            let mut input = test_exchanger();
            input.heat_duty_btu_hr = duty;
            let err = calculate(&input, LookupPolicy::Permissive).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "duty = {}", duty);
            assert!(matches!(err, CostError::InvalidInput { ref field, .. } if field == "heat_duty_btu_hr"));
        }
    }

    #[test]
    fn test_negative_flux_stays_domain_error() {
        let mut input = test_exchanger();
        input.flux_btu_hr_ft2 = -100.0;
        let err = calculate(&input, LookupPolicy::Permissive).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_non_finite_is_invalid_input() {
        let mut input = test_exchanger();
        input.pressure_psig = f64::NAN;
        let err = calculate(&input, LookupPolicy::Permissive).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
