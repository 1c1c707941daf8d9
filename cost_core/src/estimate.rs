//! # Estimate Container
//!
//! The `Estimate` struct is the root container for a priced equipment list.
//! It lives in memory only; it serializes to JSON so adapters can move it
//! around, but nothing here reads or writes files.
//!
//! ## Structure
//!
//! ```text
//! Estimate
//! ├── meta: EstimateMetadata (version, estimator, job info, timestamps)
//! ├── settings: EstimateSettings (lookup policy, cost basis)
//! └── items: HashMap<Uuid, EquipmentItem> (all equipment)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::{EquipmentItem, ReactorInput};
//! use cost_core::estimate::Estimate;
//!
//! let mut estimate = Estimate::new("J. Estimator", "EB-2025", "Styrene Co");
//! estimate.add_item(EquipmentItem::Reactor(ReactorInput::with_dimensions(
//!     "R-101", 6.0, 15.0, "stainless steel 316",
//! )));
//!
//! let summary = estimate.evaluate().unwrap();
//! assert_eq!(summary.lines.len(), 1);
//! assert_eq!(summary.grand_total.to_string(), "$222,993.11");
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::calculations::{EquipmentItem, EquipmentResult};
use crate::equations::EquationTracker;
use crate::errors::EstimateResult;
use crate::factors::LookupPolicy;
use crate::units::Dollars;

/// Current schema version for serialized estimates
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Cost basis printed on cost sheets when none is configured
pub const DEFAULT_REFERENCE: &str = "Seider et al., Product and Process Design Principles";

/// Root estimate container.
///
/// Items are stored in a flat UUID-keyed map; evaluation orders them by label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    pub meta: EstimateMetadata,

    #[serde(default)]
    pub settings: EstimateSettings,

    /// All equipment items, keyed by UUID
    #[serde(default)]
    pub items: HashMap<Uuid, EquipmentItem>,
}

impl Estimate {
    /// Create a new empty estimate.
    ///
    /// # Arguments
    ///
    /// * `estimator` - Name of the person preparing the estimate
    /// * `job_id` - Job number (e.g., "EB-2025")
    /// * `client` - Client name
    pub fn new(estimator: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Estimate {
            meta: EstimateMetadata {
                version: SCHEMA_VERSION.to_string(),
                estimator: estimator.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: EstimateSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add an equipment item. Returns the UUID assigned to it.
    pub fn add_item(&mut self, item: EquipmentItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove an item by UUID, returning it if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<EquipmentItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&EquipmentItem> {
        self.items.get(id)
    }

    /// Mutable access to an item. Marks the estimate as modified when found.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut EquipmentItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items sorted by label, ties broken by UUID so the order is stable.
    pub fn sorted_items(&self) -> Vec<(&Uuid, &EquipmentItem)> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|(a_id, a), (b_id, b)| a.label().cmp(b.label()).then_with(|| a_id.cmp(b_id)));
        items
    }

    /// Price every item under the estimate's lookup policy.
    ///
    /// Stops at the first failing item; its error names the item label.
    pub fn evaluate(&self) -> EstimateResult<EstimateSummary> {
        let policy = self.settings.lookup_policy;
        let mut lines = Vec::with_capacity(self.items.len());
        let mut equations = EquationTracker::new();

        for (id, item) in self.sorted_items() {
            let label = item.label();
            let result = item.calculate(policy).map_err(|e| e.in_item(label))?;

            let mut used = EquationTracker::new();
            for equation in result.equations() {
                used.record_for_item(equation, equation.metadata().name, label);
            }
            equations.merge(used);

            let warnings = result.unmatched_keys();
            for note in &warnings {
                warn!(item = %label, "{}", note);
            }

            lines.push(EstimateLine {
                id: *id,
                label: label.to_string(),
                equipment_type: item.equipment_type().to_string(),
                result,
                warnings,
            });
        }

        let grand_total: Dollars = lines.iter().map(|l| l.result.total_cost()).sum();
        debug!(items = lines.len(), grand_total = grand_total.0, %policy, "estimate evaluated");

        Ok(EstimateSummary {
            lines,
            grand_total,
            equations,
        })
    }
}

impl Default for Estimate {
    fn default() -> Self {
        Estimate::new("", "", "")
    }
}

/// Estimate metadata stored in the header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the person preparing the estimate
    pub estimator: String,

    pub job_id: String,

    pub client: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// Estimate-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSettings {
    /// What to do with categorical keys missing from a factor table
    #[serde(default)]
    pub lookup_policy: LookupPolicy,

    /// Cost basis label printed on the cost sheet
    #[serde(default = "default_reference")]
    pub reference: String,
}

fn default_reference() -> String {
    DEFAULT_REFERENCE.to_string()
}

impl Default for EstimateSettings {
    fn default() -> Self {
        EstimateSettings {
            lookup_policy: LookupPolicy::default(),
            reference: default_reference(),
        }
    }
}

/// One priced item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateLine {
    pub id: Uuid,
    pub label: String,
    pub equipment_type: String,
    pub result: EquipmentResult,
    /// Fallback notes for keys that were not found in a factor table
    pub warnings: Vec<String>,
}

/// Priced estimate: one line per item plus the grand total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateSummary {
    /// Sorted by label
    pub lines: Vec<EstimateLine>,
    pub grand_total: Dollars,
    /// Correlations evaluated, per item
    pub equations: EquationTracker,
}

impl EstimateSummary {
    /// All fallback notes, prefixed with the item label
    pub fn warnings(&self) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|line| line.warnings.iter().map(move |w| format!("{}: {}", line.label, w)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{ColumnInput, CompressorInput, HeatExchangerInput, ReactorInput};
    use crate::equations::Equation;
    use crate::errors::{CostError, ErrorKind};

    fn rel_eq(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    fn column() -> EquipmentItem {
        EquipmentItem::Column(ColumnInput {
            label: "T-201".to_string(),
            diameter_ft: 5.0,
            length_ft: 40.0,
            tray_count: 25,
            material: "carbon steel".to_string(),
            tray_type: "sieve".to_string(),
            tray_material: "carbon steel".to_string(),
        })
    }

    fn reactor() -> EquipmentItem {
        EquipmentItem::Reactor(ReactorInput::with_dimensions("R-101", 6.0, 15.0, "stainless steel 316"))
    }

    #[test]
    fn test_estimate_creation() {
        let estimate = Estimate::new("J. Estimator", "EB-2025", "Styrene Co");
        assert_eq!(estimate.meta.estimator, "J. Estimator");
        assert_eq!(estimate.meta.job_id, "EB-2025");
        assert_eq!(estimate.meta.client, "Styrene Co");
        assert_eq!(estimate.meta.version, SCHEMA_VERSION);
        assert_eq!(estimate.settings.lookup_policy, LookupPolicy::Permissive);
        assert_eq!(estimate.settings.reference, DEFAULT_REFERENCE);
    }

    #[test]
    fn test_add_remove_item() {
        let mut estimate = Estimate::default();
        let id = estimate.add_item(reactor());
        assert_eq!(estimate.item_count(), 1);
        assert_eq!(estimate.get_item(&id).map(|i| i.label()), Some("R-101"));

        assert!(estimate.remove_item(&id).is_some());
        assert!(estimate.remove_item(&id).is_none());
        assert_eq!(estimate.item_count(), 0);
    }

    #[test]
    fn test_evaluate_sorts_and_totals() {
        let mut estimate = Estimate::default();
        estimate.add_item(column());
        estimate.add_item(reactor());

        let summary = estimate.evaluate().unwrap();
        let labels: Vec<_> = summary.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["R-101", "T-201"]);
        assert!(rel_eq(summary.grand_total.0, 222993.11124227394 + 243734.88661990382));
        assert!(summary.warnings().is_empty());

        let used = summary.equations.unique_equations();
        assert!(used.contains(&Equation::ReactorBaseCost));
        assert!(used.contains(&Equation::TrayCost));
    }

    #[test]
    fn test_empty_estimate_totals_zero() {
        let summary = Estimate::default().evaluate().unwrap();
        assert!(summary.lines.is_empty());
        assert_eq!(summary.grand_total, Dollars(0.0));
        assert!(summary.equations.is_empty());
    }

    #[test]
    fn test_failing_item_is_named() {
        let mut estimate = Estimate::default();
        estimate.add_item(reactor());
        estimate.add_item(EquipmentItem::HeatExchanger(HeatExchangerInput {
            label: "E-101".to_string(),
            heat_duty_btu_hr: 1.0e6,
            flux_btu_hr_ft2: 0.0,
            pressure_psig: 50.0,
            materials: "carbon steel/carbon steel".to_string(),
            tube_length_ft: 16.0,
        }));

        let err = estimate.evaluate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(matches!(err, CostError::Domain { ref quantity, .. } if quantity == "E-101.flux_rate"));
    }

    #[test]
    fn test_strict_policy_applies_to_every_item() {
        let mut estimate = Estimate::default();
        estimate.add_item(EquipmentItem::Compressor(CompressorInput {
            label: "K-101".to_string(),
            inlet_flow_ft3_min: 500.0,
            inlet_pressure_psia: 14.7,
            outlet_pressure_psia: 44.1,
            specific_heat_ratio: 1.4,
            efficiency: 0.78,
            drive: "diesel".to_string(),
            material: "carbon steel".to_string(),
        }));

        let summary = estimate.evaluate().unwrap();
        assert_eq!(summary.warnings().len(), 1);
        assert!(summary.warnings()[0].starts_with("K-101: "));

        estimate.settings.lookup_policy = LookupPolicy::Strict;
        let err = estimate.evaluate().unwrap_err();
        assert_eq!(err, CostError::unknown_key("drive type", "diesel"));
    }

    #[test]
    fn test_estimate_serialization() {
        let mut estimate = Estimate::new("J. Estimator", "EB-2025", "Styrene Co");
        estimate.add_item(reactor());
        let json = serde_json::to_string_pretty(&estimate).unwrap();
        assert!(json.contains("J. Estimator"));
        assert!(json.contains("\"type\": \"Reactor\""));

        let roundtrip: Estimate = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.estimator, "J. Estimator");
        assert_eq!(roundtrip.item_count(), 1);
    }

    #[test]
    fn test_settings_default_when_omitted() {
        let json = r#"{
            "meta": {
                "version": "0.1.0",
                "estimator": "",
                "job_id": "",
                "client": "",
                "created": "2025-01-01T00:00:00Z",
                "modified": "2025-01-01T00:00:00Z"
            }
        }"#;
        let estimate: Estimate = serde_json::from_str(json).unwrap();
        assert_eq!(estimate.settings, EstimateSettings::default());
        assert_eq!(estimate.item_count(), 0);
    }
}
