//! # Compressor Cost
//!
//! Shaft power from an isentropic compression, base cost on power, then
//! drive and casing material factors.
//!
//! ## Boundaries
//!
//! - Equal inlet and outlet pressures give exactly zero power. That is a
//!   legal power, but the base-cost correlation needs ln(Pc), so pricing
//!   it fails with a `Domain` error on `power_hp`.
//! - Outlet below inlet gives negative power, reported as a `Domain` error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CorrectionFactor, CostResult};
use crate::equations::{self, Equation};
use crate::errors::{require_finite, require_positive, CostError, EstimateResult};
use crate::factors::{FactorLookup, LookupPolicy, COMPRESSOR_MATERIALS, DRIVE_TYPES};
use crate::units::Dollars;

/// Input parameters for a centrifugal compressor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "K-101",
///   "inlet_flow_ft3_min": 500.0,
///   "inlet_pressure_psia": 14.7,
///   "outlet_pressure_psia": 44.1,
///   "specific_heat_ratio": 1.4,
///   "efficiency": 0.78,
///   "drive": "electric",
///   "material": "carbon steel"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompressorInput {
    /// User label (e.g., "K-101")
    pub label: String,

    /// Inlet volumetric flow Q₁ (ft³/min)
    pub inlet_flow_ft3_min: f64,

    /// Inlet pressure P₁ (psia)
    pub inlet_pressure_psia: f64,

    /// Outlet pressure P₂ (psia)
    pub outlet_pressure_psia: f64,

    /// k = Cp/Cv
    pub specific_heat_ratio: f64,

    /// Isentropic efficiency η in (0, 1]
    pub efficiency: f64,

    /// Drive type key ("electric", "steam turbine", "gas turbine")
    pub drive: String,

    /// Casing material key
    pub material: String,
}

impl CompressorInput {
    /// Validate input parameters.
    ///
    /// k is only checked for finiteness here; k ≤ 1 is a domain error raised
    /// by the power equation.
    pub fn validate(&self) -> EstimateResult<()> {
        require_positive("inlet_flow_ft3_min", self.inlet_flow_ft3_min)?;
        require_positive("inlet_pressure_psia", self.inlet_pressure_psia)?;
        require_positive("outlet_pressure_psia", self.outlet_pressure_psia)?;
        require_finite("specific_heat_ratio", self.specific_heat_ratio)?;
        require_finite("efficiency", self.efficiency)?;
        if self.efficiency <= 0.0 || self.efficiency > 1.0 {
            return Err(CostError::invalid_input(
                "efficiency",
                self.efficiency.to_string(),
                "Efficiency must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

/// Results from a compressor calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressorResult {
    pub label: String,

    /// Shaft power Pc (hp)
    pub power_hp: f64,

    /// Base cost C_B
    pub base_cost: Dollars,

    /// Drive factor F_D
    pub drive: FactorLookup<f64>,

    /// Material factor F_M
    pub material: FactorLookup<f64>,

    /// F_D·F_M·C_B
    pub total_cost: Dollars,
}

impl CompressorResult {
    pub fn cost_result(&self) -> CostResult {
        CostResult {
            equipment: "Compressor".to_string(),
            base_cost: self.base_cost,
            correction_factors: vec![
                CorrectionFactor::new("F_D", format!("Drive ({})", self.drive.key), self.drive.value),
                CorrectionFactor::new("F_M", format!("Material ({})", self.material.key), self.material.value),
            ],
            total_cost: self.total_cost,
        }
    }

    pub fn equations(&self) -> Vec<Equation> {
        vec![
            Equation::CompressorPower,
            Equation::CompressorBaseCost,
            Equation::CompressorPurchasedCost,
        ]
    }

    pub fn unmatched_keys(&self) -> Vec<String> {
        [
            self.drive.fallback_note(DRIVE_TYPES.name()),
            self.material.fallback_note(COMPRESSOR_MATERIALS.name()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Calculate compressor purchased cost.
///
/// # Errors
///
/// * `InvalidInput` - non-positive flow or pressures, η outside (0, 1]
/// * `Domain` - k ≤ 1, outlet below inlet, or zero power
/// * `UnknownKey` - unknown drive or material under [`LookupPolicy::Strict`]
pub fn calculate(input: &CompressorInput, policy: LookupPolicy) -> EstimateResult<CompressorResult> {
    input.validate()?;

    // === Power and Base Cost ===
    let power_hp = equations::compressor_power_hp(
        input.specific_heat_ratio,
        input.efficiency,
        input.inlet_flow_ft3_min,
        input.inlet_pressure_psia,
        input.outlet_pressure_psia,
    )?;
    let base_cost = equations::compressor_base_cost(power_hp)?;

    // === Factors ===
    let drive = DRIVE_TYPES.resolve(&input.drive, policy)?;
    let material = COMPRESSOR_MATERIALS.resolve(&input.material, policy)?;
    let total_cost = equations::compressor_total_cost(drive.value, material.value, base_cost);

    debug!(
        label = %input.label,
        power_hp,
        base_cost,
        drive_factor = drive.value,
        material_factor = material.value,
        total_cost,
        "compressor priced"
    );

    Ok(CompressorResult {
        label: input.label.clone(),
        power_hp,
        base_cost: Dollars(base_cost),
        drive,
        material,
        total_cost: Dollars(total_cost),
    })
}
