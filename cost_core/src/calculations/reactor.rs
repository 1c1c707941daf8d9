//! # Reactor Cost
//!
//! Prices a vertical pressure vessel used as a reactor: shell, material
//! upgrade, platforms and ladders.
//!
//! ## Geometry
//!
//! Geometry comes from one of two paths:
//! - **Sizing shortcut**: space time τ and flow rate Q both given and > 0.
//!   V = Q·τ, L = 2.5·D. Takes precedence over any direct dimensions.
//! - **Direct**: diameter and length, both > 0.
//!
//! A zero or absent τ or Q skips the shortcut.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::reactor::{calculate, ReactorInput};
//! use cost_core::factors::LookupPolicy;
//!
//! let input = ReactorInput::with_dimensions("R-101", 6.0, 15.0, "stainless steel 316");
//! let result = calculate(&input, LookupPolicy::Permissive).unwrap();
//! assert!((result.total_cost.0 - 222_993.11).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CorrectionFactor, CostResult};
use crate::equations::{self, Equation};
use crate::errors::{require_finite, require_positive, CostError, EstimateResult};
use crate::factors::{FactorLookup, LookupPolicy, MaterialSpec, VESSEL_MATERIALS};
use crate::units::Dollars;

/// Input parameters for a reactor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "R-101",
///   "space_time_min": 10.0,
///   "flow_rate_ft3_min": 50.0,
///   "material": "stainless steel 316"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReactorInput {
    /// User label (e.g., "R-101")
    pub label: String,

    /// Inside diameter in feet (direct geometry)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter_ft: Option<f64>,

    /// Length in feet (direct geometry)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<f64>,

    /// Space time τ in minutes (sizing shortcut)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_time_min: Option<f64>,

    /// Volumetric flow rate Q in ft³/min (sizing shortcut)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_rate_ft3_min: Option<f64>,

    /// Vessel material key (e.g., "stainless steel 316")
    pub material: String,
}

/// Geometry after resolving the sizing path
#[derive(Debug, Clone, Copy, PartialEq)]
struct Geometry {
    diameter_ft: f64,
    length_ft: f64,
    volume_ft3: Option<f64>,
}

impl ReactorInput {
    /// Reactor with directly specified dimensions
    pub fn with_dimensions(label: impl Into<String>, diameter_ft: f64, length_ft: f64, material: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            diameter_ft: Some(diameter_ft),
            length_ft: Some(length_ft),
            space_time_min: None,
            flow_rate_ft3_min: None,
            material: material.into(),
        }
    }

    /// Reactor sized from space time and flow rate
    pub fn from_space_time(
        label: impl Into<String>,
        space_time_min: f64,
        flow_rate_ft3_min: f64,
        material: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            diameter_ft: None,
            length_ft: None,
            space_time_min: Some(space_time_min),
            flow_rate_ft3_min: Some(flow_rate_ft3_min),
            material: material.into(),
        }
    }

    /// Whether τ and Q are both present and positive, so D and L are ignored.
    ///
    /// Adapters use this to decide whether to ask for dimensions.
    pub fn uses_space_time(&self) -> bool {
        matches!(
            (self.space_time_min, self.flow_rate_ft3_min),
            (Some(tau), Some(q)) if tau > 0.0 && q > 0.0
        )
    }

    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        self.resolve_geometry().map(|_| ())
    }

    fn resolve_geometry(&self) -> EstimateResult<Geometry> {
        let tau = optional_non_negative("space_time_min", self.space_time_min)?;
        let q = optional_non_negative("flow_rate_ft3_min", self.flow_rate_ft3_min)?;

        if let (Some(tau), Some(q)) = (tau, q) {
            if self.uses_space_time() {
                let volume = equations::reactor_volume(tau, q);
                let (diameter_ft, length_ft) = equations::reactor_dimensions(volume);
                return Ok(Geometry {
                    diameter_ft: require_positive("diameter_ft", diameter_ft)?,
                    length_ft: require_positive("length_ft", length_ft)?,
                    volume_ft3: Some(volume),
                });
            }
        }

        let diameter_ft = self.diameter_ft.ok_or_else(|| CostError::missing_field("diameter_ft"))?;
        let length_ft = self.length_ft.ok_or_else(|| CostError::missing_field("length_ft"))?;
        Ok(Geometry {
            diameter_ft: require_positive("diameter_ft", diameter_ft)?,
            length_ft: require_positive("length_ft", length_ft)?,
            volume_ft3: None,
        })
    }
}

fn optional_non_negative(field: &str, value: Option<f64>) -> EstimateResult<Option<f64>> {
    match value {
        Some(v) => {
            require_finite(field, v)?;
            if v < 0.0 {
                return Err(CostError::invalid_input(field, v.to_string(), "Value cannot be negative"));
            }
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

/// Results from a reactor calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "R-101",
///   "diameter_ft": 6.0,
///   "length_ft": 15.0,
///   "sized_from_space_time": false,
///   "weight_lb": 40227.11,
///   "base_cost": 101790.99,
///   "adjusted_cost": 213761.07,
///   "platform_ladder_cost": 9232.04,
///   "total_cost": 222993.11
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorResult {
    pub label: String,

    /// Resolved inside diameter (ft)
    pub diameter_ft: f64,

    /// Resolved length (ft)
    pub length_ft: f64,

    /// Whether D and L came from the space-time shortcut
    pub sized_from_space_time: bool,

    /// V = Q·τ when sized from space time (ft³)
    pub volume_ft3: Option<f64>,

    /// Vessel material lookup (F_M and ρ)
    pub material: FactorLookup<MaterialSpec>,

    /// Shell weight W (lb)
    pub weight_lb: f64,

    /// Base vessel cost C_V
    pub base_cost: Dollars,

    /// F_M·C_V
    pub adjusted_cost: Dollars,

    /// Platforms and ladders C_PL
    pub platform_ladder_cost: Dollars,

    /// F_M·C_V + C_PL
    pub total_cost: Dollars,
}

impl ReactorResult {
    /// Generic summary record
    pub fn cost_result(&self) -> CostResult {
        CostResult {
            equipment: "Reactor".to_string(),
            base_cost: self.base_cost,
            correction_factors: vec![CorrectionFactor::new(
                "F_M",
                format!("Vessel material ({})", self.material.key),
                self.material.value.cost_factor,
            )],
            total_cost: self.total_cost,
        }
    }

    /// Correlations evaluated
    pub fn equations(&self) -> Vec<Equation> {
        let mut used = Vec::with_capacity(5);
        if self.sized_from_space_time {
            used.push(Equation::ReactorSizing);
        }
        used.extend([
            Equation::ShellWeight,
            Equation::ReactorBaseCost,
            Equation::ReactorPlatformLadder,
            Equation::VesselPurchasedCost,
        ]);
        used
    }

    /// Keys that fell back to defaults
    pub fn unmatched_keys(&self) -> Vec<String> {
        self.material.fallback_note(VESSEL_MATERIALS.name()).into_iter().collect()
    }
}

/// Calculate reactor purchased cost.
///
/// # Errors
///
/// * `InvalidInput` / `MissingField` - geometry cannot be resolved
/// * `UnknownKey` - unknown material under [`LookupPolicy::Strict`]
pub fn calculate(input: &ReactorInput, policy: LookupPolicy) -> EstimateResult<ReactorResult> {
    // === Geometry ===
    let geometry = input.resolve_geometry()?;
    let material = VESSEL_MATERIALS.resolve(&input.material, policy)?;

    // === Weight and Base Cost ===
    let weight_lb = equations::shell_weight_lb(geometry.diameter_ft, geometry.length_ft, material.value.density_lb_ft3)?;
    let base_cost = equations::reactor_base_cost(weight_lb)?;

    // === Composition ===
    let adjusted_cost = equations::adjusted_vessel_cost(material.value.cost_factor, base_cost);
    let platform_ladder_cost = equations::reactor_platform_ladder_cost(geometry.diameter_ft, geometry.length_ft);
    let total_cost = adjusted_cost + platform_ladder_cost;

    debug!(
        label = %input.label,
        diameter_ft = geometry.diameter_ft,
        length_ft = geometry.length_ft,
        weight_lb,
        base_cost,
        material_factor = material.value.cost_factor,
        total_cost,
        "reactor priced"
    );

    Ok(ReactorResult {
        label: input.label.clone(),
        diameter_ft: geometry.diameter_ft,
        length_ft: geometry.length_ft,
        sized_from_space_time: geometry.volume_ft3.is_some(),
        volume_ft3: geometry.volume_ft3,
        material,
        weight_lb,
        base_cost: Dollars(base_cost),
        adjusted_cost: Dollars(adjusted_cost),
        platform_ladder_cost: Dollars(platform_ladder_cost),
        total_cost: Dollars(total_cost),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn rel_eq(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    #[test]
    fn test_reactor_end_to_end() {
        let input = ReactorInput::with_dimensions("R-101", 6.0, 15.0, "stainless steel 316");
        let result = calculate(&input, LookupPolicy::Permissive).unwrap();

        assert!(!result.sized_from_space_time);
        assert!(result.material.matched);
        assert!(rel_eq(result.weight_lb, 40227.112181513054), "W = {}", result.weight_lb);
        assert!(rel_eq(result.base_cost.0, 101790.98736508832));
        assert!(rel_eq(result.adjusted_cost.0, 213761.07346668548));
        assert!(rel_eq(result.platform_ladder_cost.0, 9232.037775588453));
        assert!(rel_eq(result.total_cost.0, 222993.11124227394), "total = {}", result.total_cost.0);
        assert_eq!(result.total_cost.to_string(), "$222,993.11");
    }

    #[test]
    fn test_reactor_sized_from_space_time() {
        let input = ReactorInput::from_space_time("R-102", 10.0, 50.0, "carbon steel");
        let result = calculate(&input, LookupPolicy::Permissive).unwrap();

        assert!(result.sized_from_space_time);
        assert_eq!(result.volume_ft3, Some(500.0));
        assert!(rel_eq(result.diameter_ft, 6.338405767549083));
        assert!(rel_eq(result.length_ft, 2.5 * result.diameter_ft));
        assert_eq!(result.equations()[0], Equation::ReactorSizing);
    }

    #[test]
    fn test_degenerate_sized_dimensions_are_invalid_input() {
        let underflow = ReactorInput::from_space_time("R-104", 1e-200, 1e-200, "carbon steel");
        let err = calculate(&underflow, LookupPolicy::Permissive).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(matches!(err, CostError::InvalidInput { ref field, .. } if field == "diameter_ft"));

        let overflow = ReactorInput::from_space_time("R-105", 1e200, 1e200, "carbon steel");
        let err = calculate(&overflow, LookupPolicy::Permissive).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_space_time_takes_precedence() {
        let mut input = ReactorInput::from_space_time("R-103", 10.0, 50.0, "carbon steel");
        input.diameter_ft = Some(2.0);
        input.length_ft = Some(3.0);
        let result = calculate(&input, LookupPolicy::Permissive).unwrap();
        assert!(result.sized_from_space_time);
        assert!(result.diameter_ft > 6.0);
    }

    #[test]
    fn test_zero_space_time_falls_back_to_dimensions() {
        let mut input = ReactorInput::with_dimensions("R-104", 6.0, 15.0, "carbon steel");
        input.space_time_min = Some(0.0);
        input.flow_rate_ft3_min = Some(50.0);
        let result = calculate(&input, LookupPolicy::Permissive).unwrap();
        assert!(!result.sized_from_space_time);
        assert_eq!(result.diameter_ft, 6.0);
    }

    #[test]
    fn test_indeterminate_geometry() {
        let input = ReactorInput {
            label: "R-105".to_string(),
            diameter_ft: None,
            length_ft: None,
            space_time_min: Some(10.0),
            flow_rate_ft3_min: None,
            material: "carbon steel".to_string(),
        };
        let err = calculate(&input, LookupPolicy::Permissive).unwrap_err();
        assert_eq!(err, CostError::missing_field("diameter_ft"));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_invalid_dimensions() {
        let input = ReactorInput::with_dimensions("R-106", -6.0, 15.0, "carbon steel");
        let err = calculate(&input, LookupPolicy::Permissive).unwrap_err();
        assert!(matches!(err, CostError::InvalidInput { ref field, .. } if field == "diameter_ft"));

        let input = ReactorInput::with_dimensions("R-106", 6.0, f64::NAN, "carbon steel");
        assert!(calculate(&input, LookupPolicy::Permissive).is_err());

        let input = ReactorInput::from_space_time("R-106", -1.0, 50.0, "carbon steel");
        let err = calculate(&input, LookupPolicy::Permissive).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_unknown_material_policy() {
        let input = ReactorInput::with_dimensions("R-107", 6.0, 15.0, "Hastelloy");
        let permissive = calculate(&input, LookupPolicy::Permissive).unwrap();
        assert!(!permissive.material.matched);
        assert_eq!(permissive.material.value, MaterialSpec::new(1.0, 490.0));
        assert_eq!(permissive.unmatched_keys().len(), 1);

        let carbon = calculate(
            &ReactorInput::with_dimensions("R-107", 6.0, 15.0, "carbon steel"),
            LookupPolicy::Permissive,
        )
        .unwrap();
        assert_eq!(permissive.total_cost, carbon.total_cost);

        let strict = calculate(&input, LookupPolicy::Strict).unwrap_err();
        assert_eq!(strict.kind(), ErrorKind::UnknownKey);
    }

    #[test]
    fn test_cost_result_summary() {
        let input = ReactorInput::with_dimensions("R-108", 6.0, 15.0, "Stainless Steel 316");
        let summary = calculate(&input, LookupPolicy::Strict).unwrap().cost_result();
        assert_eq!(summary.equipment, "Reactor");
        assert_eq!(summary.correction_factors.len(), 1);
        assert_eq!(summary.correction_factors[0].symbol, "F_M");
        assert_eq!(summary.correction_factors[0].value, 2.1);
    }

    #[test]
    fn test_input_json_without_optional_fields() {
        let json = r#"{"label": "R-109", "diameter_ft": 4.0, "length_ft": 10.0, "material": "titanium"}"#;
        let input: ReactorInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.space_time_min, None);
        assert!(input.validate().is_ok());
    }
}
