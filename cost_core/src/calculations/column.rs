//! # Distillation Column Cost
//!
//! Prices a tray column: shell (with material upgrade), platforms and
//! ladders, and trays.
//!
//! ## Tray Cost
//!
//! The quantity factor F_NT is a shared multiplier applied once to the
//! whole tray set, not a per-tray cost. Columns with 20 or fewer trays pay
//! the small-order premium; the boundary is strictly `> 20`.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::column::{calculate, ColumnInput};
//! use cost_core::factors::LookupPolicy;
//!
//! let input = ColumnInput {
//!     label: "T-201".to_string(),
//!     diameter_ft: 5.0,
//!     length_ft: 40.0,
//!     tray_count: 25,
//!     material: "carbon steel".to_string(),
//!     tray_type: "sieve".to_string(),
//!     tray_material: "carbon steel".to_string(),
//! };
//! let result = calculate(&input, LookupPolicy::Permissive).unwrap();
//! assert_eq!(result.tray_quantity_factor, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CorrectionFactor, CostResult};
use crate::equations::{self, Equation};
use crate::errors::{require_positive, EstimateResult};
use crate::factors::{FactorLookup, LookupPolicy, MaterialSpec, TRAY_MATERIALS, TRAY_TYPES, VESSEL_MATERIALS};
use crate::units::Dollars;

/// Input parameters for a distillation column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "T-201",
///   "diameter_ft": 5.0,
///   "length_ft": 40.0,
///   "tray_count": 25,
///   "material": "carbon steel",
///   "tray_type": "valve",
///   "tray_material": "stainless steel"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnInput {
    /// User label (e.g., "T-201")
    pub label: String,

    /// Inside diameter in feet
    pub diameter_ft: f64,

    /// Tangent-to-tangent length in feet
    pub length_ft: f64,

    /// Number of trays (0 allowed: shell only)
    pub tray_count: u32,

    /// Shell material key
    pub material: String,

    /// Tray type key ("sieve" or "valve")
    pub tray_type: String,

    /// Tray material key
    pub tray_material: String,
}

impl ColumnInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        require_positive("diameter_ft", self.diameter_ft)?;
        require_positive("length_ft", self.length_ft)?;
        Ok(())
    }
}

/// Results from a column calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnResult {
    pub label: String,
    pub diameter_ft: f64,
    pub length_ft: f64,
    pub tray_count: u32,

    /// Shell material lookup (F_M and ρ)
    pub material: FactorLookup<MaterialSpec>,
    /// Tray type factor F_TT
    pub tray_type: FactorLookup<f64>,
    /// Tray material factor F_TM
    pub tray_material: FactorLookup<f64>,

    /// Shell weight W (lb)
    pub weight_lb: f64,
    /// Base shell cost C_V
    pub base_cost: Dollars,
    /// F_M·C_V
    pub adjusted_cost: Dollars,
    /// Platforms and ladders C_PL
    pub platform_ladder_cost: Dollars,

    /// Cost of one sieve carbon-steel tray C_BT
    pub base_tray_cost: Dollars,
    /// F_NT
    pub tray_quantity_factor: f64,
    /// N·F_NT·F_TT·F_TM·C_BT
    pub tray_cost: Dollars,

    /// F_M·C_V + C_PL + C_T
    pub total_cost: Dollars,
}

impl ColumnResult {
    pub fn cost_result(&self) -> CostResult {
        CostResult {
            equipment: "Distillation Column".to_string(),
            base_cost: self.base_cost,
            correction_factors: vec![
                CorrectionFactor::new(
                    "F_M",
                    format!("Vessel material ({})", self.material.key),
                    self.material.value.cost_factor,
                ),
                CorrectionFactor::new("F_NT", format!("Tray quantity ({} trays)", self.tray_count), self.tray_quantity_factor),
                CorrectionFactor::new("F_TT", format!("Tray type ({})", self.tray_type.key), self.tray_type.value),
                CorrectionFactor::new(
                    "F_TM",
                    format!("Tray material ({})", self.tray_material.key),
                    self.tray_material.value,
                ),
            ],
            total_cost: self.total_cost,
        }
    }

    pub fn equations(&self) -> Vec<Equation> {
        vec![
            Equation::ShellWeight,
            Equation::ColumnBaseCost,
            Equation::ColumnPlatformLadder,
            Equation::BaseTrayCost,
            Equation::TrayQuantityFactor,
            Equation::TrayCost,
            Equation::VesselPurchasedCost,
        ]
    }

    pub fn unmatched_keys(&self) -> Vec<String> {
        [
            self.material.fallback_note(VESSEL_MATERIALS.name()),
            self.tray_type.fallback_note(TRAY_TYPES.name()),
            self.tray_material.fallback_note(TRAY_MATERIALS.name()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Calculate distillation column purchased cost.
pub fn calculate(input: &ColumnInput, policy: LookupPolicy) -> EstimateResult<ColumnResult> {
    input.validate()?;

    // === Factor Lookup ===
    let material = VESSEL_MATERIALS.resolve(&input.material, policy)?;
    let tray_type = TRAY_TYPES.resolve(&input.tray_type, policy)?;
    let tray_material = TRAY_MATERIALS.resolve(&input.tray_material, policy)?;

    // === Shell ===
    let d = input.diameter_ft;
    let weight_lb = equations::shell_weight_lb(d, input.length_ft, material.value.density_lb_ft3)?;
    let base_cost = equations::column_base_cost(weight_lb)?;
    let adjusted_cost = equations::adjusted_vessel_cost(material.value.cost_factor, base_cost);
    let platform_ladder_cost = equations::column_platform_ladder_cost(d, input.length_ft);

    // === Trays ===
    let base_tray_cost = equations::base_tray_cost(d);
    let tray_quantity_factor = equations::tray_quantity_factor(input.tray_count);
    let tray_cost = equations::tray_cost(
        input.tray_count,
        tray_quantity_factor,
        tray_type.value,
        tray_material.value,
        base_tray_cost,
    );

    let total_cost = adjusted_cost + platform_ladder_cost + tray_cost;

    debug!(
        label = %input.label,
        weight_lb,
        base_cost,
        platform_ladder_cost,
        tray_quantity_factor,
        tray_cost,
        total_cost,
        "column priced"
    );

    Ok(ColumnResult {
        label: input.label.clone(),
        diameter_ft: d,
        length_ft: input.length_ft,
        tray_count: input.tray_count,
        material,
        tray_type,
        tray_material,
        weight_lb,
        base_cost: Dollars(base_cost),
        adjusted_cost: Dollars(adjusted_cost),
        platform_ladder_cost: Dollars(platform_ladder_cost),
        base_tray_cost: Dollars(base_tray_cost),
        tray_quantity_factor,
        tray_cost: Dollars(tray_cost),
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

    fn test_column() -> ColumnInput {
        ColumnInput {
            label: "T-201".to_string(),
            diameter_ft: 5.0,
            length_ft: 40.0,
            tray_count: 25,
            material: "carbon steel".to_string(),
            tray_type: "sieve".to_string(),
            tray_material: "carbon steel".to_string(),
        }
    }

    #[test]
    fn test_column_end_to_end() {
        let result = calculate(&test_column(), LookupPolicy::Strict).unwrap();

        assert!(rel_eq(result.weight_lb, 73494.72397069872), "W = {}", result.weight_lb);
        assert!(rel_eq(result.base_cost.0, 199781.80559099713));
        assert_eq!(result.adjusted_cost, result.base_cost);
        assert!(rel_eq(result.platform_ladder_cost.0, 16040.18398089038));
        assert!(rel_eq(result.base_tray_cost.0, 1116.5158819206522));
        assert_eq!(result.tray_quantity_factor, 1.0);
        assert!(rel_eq(result.tray_cost.0, 27912.897048016304));
        assert!(rel_eq(result.total_cost.0, 243734.88661990382), "total = {}", result.total_cost.0);
    }

    #[test]
    fn test_valve_stainless_trays_small_count() {
        let mut input = test_column();
        input.tray_count = 10;
        input.tray_type = "Valve".to_string();
        input.tray_material = "STAINLESS STEEL".to_string();
        let result = calculate(&input, LookupPolicy::Strict).unwrap();

        assert!(rel_eq(result.tray_quantity_factor, 1.4997082643358985));
        assert!(rel_eq(result.tray_cost.0, 27661.882535655892), "C_T = {}", result.tray_cost.0);
    }

    #[test]
    fn test_twenty_trays_take_premium_branch() {
        let mut input = test_column();
        input.tray_count = 20;
        let result = calculate(&input, LookupPolicy::Permissive).unwrap();
        assert!(rel_eq(result.tray_quantity_factor, 0.9996110569410637));
    }

    #[test]
    fn test_zero_trays_is_shell_only() {
        let mut input = test_column();
        input.tray_count = 0;
        let result = calculate(&input, LookupPolicy::Permissive).unwrap();
        assert_eq!(result.tray_cost.0, 0.0);
        assert!(rel_eq(
            result.total_cost.0,
            result.adjusted_cost.0 + result.platform_ladder_cost.0
        ));
    }

    #[test]
    fn test_unknown_tray_keys() {
        let mut input = test_column();
        input.tray_type = "bubble cap".to_string();
        input.tray_material = "copper".to_string();
        let result = calculate(&input, LookupPolicy::Permissive).unwrap();
        assert_eq!(result.tray_type.value, 1.0);
        assert_eq!(result.tray_material.value, 1.0);
        assert_eq!(result.unmatched_keys().len(), 2);

        let err = calculate(&input, LookupPolicy::Strict).unwrap_err();
        assert_eq!(err, CostError::unknown_key("tray type", "bubble cap"));
    }

    #[test]
    fn test_invalid_geometry() {
        let mut input = test_column();
        input.length_ft = 0.0;
        let err = calculate(&input, LookupPolicy::Permissive).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_cost_result_lists_four_factors() {
        let summary = calculate(&test_column(), LookupPolicy::Permissive).unwrap().cost_result();
        let symbols: Vec<_> = summary.correction_factors.iter().map(|f| f.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["F_M", "F_NT", "F_TT", "F_TM"]);
    }
}
