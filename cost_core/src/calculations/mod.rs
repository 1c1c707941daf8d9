//! # Equipment Cost Calculations
//!
//! One assembler per equipment type. Each follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Every intermediate value plus the total (JSON-serializable)
//! - `calculate(input, policy) -> EstimateResult<*Result>` - Pure pipeline:
//!   validate → scale variable → base cost → factor lookup → composition
//!
//! ## LLM Integration
//!
//! All types are designed for machine consumption:
//! - Clean JSON serialization with unit-suffixed field names
//! - Structured error responses ([`CostError`](crate::errors::CostError))
//! - Each factor lookup reports whether the requested key matched
//!
//! ## Available Calculations
//!
//! - [`reactor`] - Vertical pressure vessel, optionally sized from space time
//! - [`column`] - Distillation column shell, platforms and trays
//! - [`heat_exchanger`] - Shell-and-tube exchanger
//! - [`compressor`] - Centrifugal compressor
//! - [`utilities`] - Cooling water, natural gas and CO₂ (not equipment)

pub mod column;
pub mod compressor;
pub mod heat_exchanger;
pub mod reactor;
pub mod utilities;

use serde::{Deserialize, Serialize};

use crate::equations::Equation;
use crate::errors::EstimateResult;
use crate::factors::LookupPolicy;
use crate::units::Dollars;

pub use column::{ColumnInput, ColumnResult};
pub use compressor::{CompressorInput, CompressorResult};
pub use heat_exchanger::{HeatExchangerInput, HeatExchangerResult};
pub use reactor::{ReactorInput, ReactorResult};
pub use utilities::{UtilitiesInput, UtilitiesResult};

/// One named correction factor as applied to a base cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionFactor {
    /// Symbol used in the correlation (e.g., "F_M")
    pub symbol: String,
    /// What it corrects for, including the resolved table key when there is one
    pub name: String,
    pub value: f64,
}

impl CorrectionFactor {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            value,
        }
    }
}

/// Equipment-agnostic summary of a priced item.
///
/// ## JSON Example
///
/// ```json
/// {
///   "equipment": "Reactor",
///   "base_cost": 101790.99,
///   "correction_factors": [
///     { "symbol": "F_M", "name": "Vessel material (stainless steel 316)", "value": 2.1 }
///   ],
///   "total_cost": 222993.11
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub equipment: String,
    pub base_cost: Dollars,
    pub correction_factors: Vec<CorrectionFactor>,
    pub total_cost: Dollars,
}

/// Enum wrapper for all equipment inputs.
///
/// Stores heterogeneous equipment in a single collection with clean
/// tagged serialization (`{"type": "Reactor", ...}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EquipmentItem {
    Reactor(ReactorInput),
    Column(ColumnInput),
    HeatExchanger(HeatExchangerInput),
    Compressor(CompressorInput),
}

impl EquipmentItem {
    /// User-provided label
    pub fn label(&self) -> &str {
        match self {
            EquipmentItem::Reactor(r) => &r.label,
            EquipmentItem::Column(c) => &c.label,
            EquipmentItem::HeatExchanger(h) => &h.label,
            EquipmentItem::Compressor(c) => &c.label,
        }
    }

    /// Equipment type as a display string
    pub fn equipment_type(&self) -> &'static str {
        match self {
            EquipmentItem::Reactor(_) => "Reactor",
            EquipmentItem::Column(_) => "Distillation Column",
            EquipmentItem::HeatExchanger(_) => "Shell-and-Tube Heat Exchanger",
            EquipmentItem::Compressor(_) => "Compressor",
        }
    }

    /// Price this item with its assembler
    pub fn calculate(&self, policy: LookupPolicy) -> EstimateResult<EquipmentResult> {
        Ok(match self {
            EquipmentItem::Reactor(input) => EquipmentResult::Reactor(reactor::calculate(input, policy)?),
            EquipmentItem::Column(input) => EquipmentResult::Column(column::calculate(input, policy)?),
            EquipmentItem::HeatExchanger(input) => {
                EquipmentResult::HeatExchanger(heat_exchanger::calculate(input, policy)?)
            }
            EquipmentItem::Compressor(input) => EquipmentResult::Compressor(compressor::calculate(input, policy)?),
        })
    }
}

/// Enum wrapper for all equipment results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EquipmentResult {
    Reactor(ReactorResult),
    Column(ColumnResult),
    HeatExchanger(HeatExchangerResult),
    Compressor(CompressorResult),
}

impl EquipmentResult {
    /// Purchased cost
    pub fn total_cost(&self) -> Dollars {
        match self {
            EquipmentResult::Reactor(r) => r.total_cost,
            EquipmentResult::Column(c) => c.total_cost,
            EquipmentResult::HeatExchanger(h) => h.total_cost,
            EquipmentResult::Compressor(c) => c.total_cost,
        }
    }

    /// Generic summary record
    pub fn cost_result(&self) -> CostResult {
        match self {
            EquipmentResult::Reactor(r) => r.cost_result(),
            EquipmentResult::Column(c) => c.cost_result(),
            EquipmentResult::HeatExchanger(h) => h.cost_result(),
            EquipmentResult::Compressor(c) => c.cost_result(),
        }
    }

    /// Correlations evaluated, in pipeline order
    pub fn equations(&self) -> Vec<Equation> {
        match self {
            EquipmentResult::Reactor(r) => r.equations(),
            EquipmentResult::Column(c) => c.equations(),
            EquipmentResult::HeatExchanger(h) => h.equations(),
            EquipmentResult::Compressor(c) => c.equations(),
        }
    }

    /// Table keys that fell back to a default
    pub fn unmatched_keys(&self) -> Vec<String> {
        match self {
            EquipmentResult::Reactor(r) => r.unmatched_keys(),
            EquipmentResult::Column(c) => c.unmatched_keys(),
            EquipmentResult::HeatExchanger(h) => h.unmatched_keys(),
            EquipmentResult::Compressor(c) => c.unmatched_keys(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_tagged_serialization() {
        let json = r#"{
            "type": "Compressor",
            "label": "K-101",
            "inlet_flow_ft3_min": 500.0,
            "inlet_pressure_psia": 14.7,
            "outlet_pressure_psia": 44.1,
            "specific_heat_ratio": 1.4,
            "efficiency": 0.78,
            "drive": "steam turbine",
            "material": "stainless steel"
        }"#;
        let item: EquipmentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label(), "K-101");
        assert_eq!(item.equipment_type(), "Compressor");

        let result = item.calculate(LookupPolicy::Permissive).unwrap();
        assert!((result.total_cost().0 - 134946.6957207783).abs() / 134946.6957207783 < 1e-9);
        assert_eq!(result.cost_result().equipment, "Compressor");
        assert!(result.unmatched_keys().is_empty());
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let item = EquipmentItem::Reactor(ReactorInput::with_dimensions("R-101", 6.0, 15.0, "stainless steel 316"));
        let result = item.calculate(LookupPolicy::Strict).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"type\":\"Reactor\""));
        let back: EquipmentResult = serde_json::from_str(&json).unwrap();
        assert!((back.total_cost().0 - result.total_cost().0).abs() < 1e-6);
    }
}
