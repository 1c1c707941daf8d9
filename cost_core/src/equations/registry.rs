//! # Correlation Registry
//!
//! Central registry of every cost correlation and sizing equation used by the
//! estimators. Each equation carries its formula, source citation, variable
//! definitions and known limitations.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for cost-sheet citations and `EQUATIONS.md`
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use cost_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record_for_item(Equation::ShellWeight, "Shell weight", "R-101");
//!
//! let meta = Equation::ShellWeight.metadata();
//! assert!(meta.formula_plain.contains("0.8*D"));
//! assert_eq!(tracker.unique_equations(), vec![Equation::ShellWeight]);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of a correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Seider, Seader, Lewin & Widagdo, Product and Process Design Principles
    Seider { topic: &'static str },
    /// Plain cylinder geometry
    Geometry,
    /// Steady-state energy balance
    EnergyBalance,
}

impl CodeReference {
    /// Format the reference for cost sheets
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Seider { topic } => {
                format!("Seider et al., Product and Process Design Principles ({})", topic)
            }
            CodeReference::Geometry => "Cylinder geometry".to_string(),
            CodeReference::EnergyBalance => "Steady-state energy balance".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Seider { .. } => "Seider",
            CodeReference::Geometry => "Geometry",
            CodeReference::EnergyBalance => "Energy balance",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Grouping used in EQUATIONS.md and cost-sheet citations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Geometry and the scale variable (W, A, Pc) of each correlation
    Sizing,
    /// Base purchased cost on a single scale variable
    BaseCosts,
    /// Material, pressure, quantity and length factors
    CorrectionFactors,
    /// Platforms, ladders and trays
    Ancillaries,
    /// Composition of factors into a purchased cost
    Totals,
    /// Utility consumption
    Utilities,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Sizing => "Sizing and Scale Variables",
            EquationCategory::BaseCosts => "Base Costs",
            EquationCategory::CorrectionFactors => "Correction Factors",
            EquationCategory::Ancillaries => "Ancillaries",
            EquationCategory::Totals => "Purchased Cost Totals",
            EquationCategory::Utilities => "Utilities",
        }
    }

    /// Sort order (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Sizing => 1,
            EquationCategory::BaseCosts => 2,
            EquationCategory::CorrectionFactors => 3,
            EquationCategory::Ancillaries => 4,
            EquationCategory::Totals => 5,
            EquationCategory::Utilities => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one correlation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Reactor Vessel Base Cost")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the implementation lives
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Sizing
    // -------------------------------------------------------------------------
    /// D = (4V/(2.5π))^(1/3), L = 2.5D
    ReactorSizing,
    /// W = π(D+t)(L+0.8D)tρ
    ShellWeight,
    /// A = Q/q
    ExchangerArea,
    /// Isentropic shaft power
    CompressorPower,

    // -------------------------------------------------------------------------
    // Base costs
    // -------------------------------------------------------------------------
    ReactorBaseCost,
    ColumnBaseCost,
    ExchangerBaseCost,
    CompressorBaseCost,
    /// C_BT = 468·exp(0.1739D)
    BaseTrayCost,

    // -------------------------------------------------------------------------
    // Correction factors
    // -------------------------------------------------------------------------
    TrayQuantityFactor,
    ExchangerMaterialFactor,
    ExchangerPressureFactor,
    ExchangerTubeLengthFactor,

    // -------------------------------------------------------------------------
    // Ancillaries
    // -------------------------------------------------------------------------
    ReactorPlatformLadder,
    ColumnPlatformLadder,
    TrayCost,

    // -------------------------------------------------------------------------
    // Totals
    // -------------------------------------------------------------------------
    /// F_M·C_V + C_PL (+ C_T)
    VesselPurchasedCost,
    ExchangerPurchasedCost,
    CompressorPurchasedCost,

    // -------------------------------------------------------------------------
    // Utilities
    // -------------------------------------------------------------------------
    CoolingWaterFlow,
    NaturalGasFlow,
    Co2Emissions,
}

const VESSELS: CodeReference = CodeReference::Seider { topic: "pressure vessels and towers" };
const EXCHANGERS: CodeReference = CodeReference::Seider { topic: "shell-and-tube heat exchangers" };
const COMPRESSORS: CodeReference = CodeReference::Seider { topic: "gas compressors" };

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ReactorSizing => EquationMetadata {
                name: "Reactor Sizing Shortcut",
                description: "Cylinder diameter and length holding the residence volume at a fixed aspect ratio",
                formula_plain: "V = Q*tau, D = (4V / (2.5*pi))^(1/3), L = 2.5*D",
                reference: CodeReference::Geometry,
                variables: vec![
                    Variable::new("tau", "Space time", "min"),
                    Variable::new("Q", "Volumetric flow rate", "ft^3/min"),
                    Variable::new("V", "Reactor volume", "ft^3"),
                    Variable::new("D", "Inside diameter", "ft"),
                    Variable::new("L", "Length", "ft"),
                ],
                assumptions: vec!["L/D = 2.5", "Head volume neglected"],
                category: EquationCategory::Sizing,
                source_module: "equations/sizing.rs",
                source_function: "reactor_dimensions",
            },

            Equation::ShellWeight => EquationMetadata {
                name: "Vessel Shell Weight",
                description: "Weight of a cylindrical shell with an allowance for two heads",
                formula_plain: "W = pi*(D + t)*(L + 0.8*D)*t*rho",
                reference: VESSELS,
                variables: vec![
                    Variable::new("W", "Shell weight", "lb"),
                    Variable::new("D", "Inside diameter", "ft"),
                    Variable::new("L", "Tangent-to-tangent length", "ft"),
                    Variable::new("t", "Wall thickness (2.5 in)", "ft"),
                    Variable::new("rho", "Plate density", "lb/ft^3"),
                ],
                assumptions: vec![
                    "Uniform 2.5 in wall regardless of pressure",
                    "Heads approximated by a 0.8*D length allowance",
                ],
                category: EquationCategory::Sizing,
                source_module: "equations/sizing.rs",
                source_function: "shell_weight_lb",
            },

            Equation::ExchangerArea => EquationMetadata {
                name: "Heat-Transfer Area",
                description: "Area required to transfer the duty at a given average flux",
                formula_plain: "A = Q / q",
                reference: CodeReference::EnergyBalance,
                variables: vec![
                    Variable::new("A", "Heat-transfer area", "ft^2"),
                    Variable::new("Q", "Heat duty", "Btu/hr"),
                    Variable::new("q", "Average heat flux", "Btu/(hr*ft^2)"),
                ],
                assumptions: vec!["Flux supplied by the user already includes U and LMTD"],
                category: EquationCategory::Sizing,
                source_module: "equations/correlations.rs",
                source_function: "exchanger_area",
            },

            Equation::CompressorPower => EquationMetadata {
                name: "Compressor Shaft Power",
                description: "Isentropic compression power corrected by efficiency",
                formula_plain: "Pc = 0.00436*(k/(k-1))*(Q1*P1/eta)*((P2/P1)^((k-1)/k) - 1)",
                reference: COMPRESSORS,
                variables: vec![
                    Variable::new("Pc", "Shaft power", "hp"),
                    Variable::new("k", "Specific-heat ratio Cp/Cv", "-"),
                    Variable::new("eta", "Isentropic efficiency", "-"),
                    Variable::new("Q1", "Inlet volumetric flow", "ft^3/min"),
                    Variable::new("P1", "Inlet pressure", "psia"),
                    Variable::new("P2", "Outlet pressure", "psia"),
                ],
                assumptions: vec!["Ideal gas", "Single stage", "k > 1"],
                category: EquationCategory::Sizing,
                source_module: "equations/correlations.rs",
                source_function: "compressor_power_hp",
            },

            Equation::ReactorBaseCost => EquationMetadata {
                name: "Reactor Vessel Base Cost",
                description: "Carbon-steel vertical vessel cost from shell weight",
                formula_plain: "C_V = exp(7.0132 + 0.18255*ln(W) + 0.02297*ln(W)^2)",
                reference: VESSELS,
                variables: vec![
                    Variable::new("C_V", "Vessel base cost", "USD"),
                    Variable::new("W", "Shell weight", "lb"),
                ],
                assumptions: vec!["Carbon steel", "Reference-year dollars, not indexed"],
                category: EquationCategory::BaseCosts,
                source_module: "equations/correlations.rs",
                source_function: "reactor_base_cost",
            },

            Equation::ColumnBaseCost => EquationMetadata {
                name: "Column Shell Base Cost",
                description: "Carbon-steel tower shell cost from shell weight",
                formula_plain: "C_V = exp(7.2756 + 0.18255*ln(W) + 0.02297*ln(W)^2)",
                reference: VESSELS,
                variables: vec![
                    Variable::new("C_V", "Column shell base cost", "USD"),
                    Variable::new("W", "Shell weight", "lb"),
                ],
                assumptions: vec!["Carbon steel", "Excludes trays, platforms and ladders"],
                category: EquationCategory::BaseCosts,
                source_module: "equations/correlations.rs",
                source_function: "column_base_cost",
            },

            Equation::ExchangerBaseCost => EquationMetadata {
                name: "Shell-and-Tube Exchanger Base Cost",
                description: "Floating-head exchanger cost from transfer area",
                formula_plain: "C_B = exp(11.667 - 0.8709*ln(A) + 0.09005*ln(A)^2)",
                reference: EXCHANGERS,
                variables: vec![
                    Variable::new("C_B", "Exchanger base cost", "USD"),
                    Variable::new("A", "Heat-transfer area", "ft^2"),
                ],
                assumptions: vec!["Carbon steel shell and tubes", "20 ft tubes", "Up to 100 psig"],
                category: EquationCategory::BaseCosts,
                source_module: "equations/correlations.rs",
                source_function: "exchanger_base_cost",
            },

            Equation::CompressorBaseCost => EquationMetadata {
                name: "Centrifugal Compressor Base Cost",
                description: "Compressor cost from shaft power",
                formula_plain: "C_B = exp(7.580 + 0.8*ln(Pc))",
                reference: COMPRESSORS,
                variables: vec![
                    Variable::new("C_B", "Compressor base cost", "USD"),
                    Variable::new("Pc", "Shaft power", "hp"),
                ],
                assumptions: vec!["Electric motor drive", "Carbon steel casing", "Pc > 0"],
                category: EquationCategory::BaseCosts,
                source_module: "equations/correlations.rs",
                source_function: "compressor_base_cost",
            },

            Equation::BaseTrayCost => EquationMetadata {
                name: "Base Tray Cost",
                description: "Cost of one carbon-steel sieve tray",
                formula_plain: "C_BT = 468*exp(0.1739*D)",
                reference: VESSELS,
                variables: vec![
                    Variable::new("C_BT", "Base cost per tray", "USD"),
                    Variable::new("D", "Column diameter", "ft"),
                ],
                assumptions: vec!["Sieve tray, carbon steel"],
                category: EquationCategory::BaseCosts,
                source_module: "equations/composition.rs",
                source_function: "base_tray_cost",
            },

            Equation::TrayQuantityFactor => EquationMetadata {
                name: "Tray Quantity Factor",
                description: "Small-order premium shared by all trays of a column",
                formula_plain: "F_NT = 1.0 if N > 20, else 2.25 / 1.0414^N",
                reference: VESSELS,
                variables: vec![
                    Variable::new("F_NT", "Quantity factor", "-"),
                    Variable::new("N", "Number of trays", "-"),
                ],
                assumptions: vec!["Boundary is strict: N = 20 takes the premium branch"],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/composition.rs",
                source_function: "tray_quantity_factor",
            },

            Equation::ExchangerMaterialFactor => EquationMetadata {
                name: "Exchanger Material Factor",
                description: "Area-dependent material factor for a shell/tube material pair",
                formula_plain: "F_M = a + (A/100)^b",
                reference: EXCHANGERS,
                variables: vec![
                    Variable::new("F_M", "Material factor", "-"),
                    Variable::new("a, b", "Pair coefficients", "-"),
                    Variable::new("A", "Heat-transfer area", "ft^2"),
                ],
                assumptions: vec!["Unknown pairs use a = 0, b = 0.09"],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/composition.rs",
                source_function: "exchanger_material_factor",
            },

            Equation::ExchangerPressureFactor => EquationMetadata {
                name: "Exchanger Pressure Factor",
                description: "Shell-side design pressure correction",
                formula_plain: "F_P = 1.0 if P <= 100, else 0.9803 + 0.018*(P/100) + 0.0017*(P/100)^2",
                reference: EXCHANGERS,
                variables: vec![
                    Variable::new("F_P", "Pressure factor", "-"),
                    Variable::new("P", "Design pressure", "psig"),
                ],
                assumptions: vec![],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/composition.rs",
                source_function: "exchanger_pressure_factor",
            },

            Equation::ExchangerTubeLengthFactor => EquationMetadata {
                name: "Exchanger Tube-Length Factor",
                description: "Tube-length correction (fixed)",
                formula_plain: "F_L = 1.0",
                reference: EXCHANGERS,
                variables: vec![
                    Variable::new("F_L", "Tube-length factor", "-"),
                    Variable::new("L_t", "Tube length", "ft"),
                ],
                assumptions: vec![
                    "Known limitation: 1.0 for every tube length; the correction for tubes of 20 ft or longer is not modeled",
                ],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/composition.rs",
                source_function: "exchanger_tube_length_factor",
            },

            Equation::ReactorPlatformLadder => EquationMetadata {
                name: "Reactor Platforms and Ladders",
                description: "Platform and ladder cost for a vertical vessel",
                formula_plain: "C_PL = 361.8*D^0.73960*L^0.70684",
                reference: VESSELS,
                variables: vec![
                    Variable::new("C_PL", "Platform and ladder cost", "USD"),
                    Variable::new("D", "Diameter", "ft"),
                    Variable::new("L", "Length", "ft"),
                ],
                assumptions: vec!["Independent of vessel material"],
                category: EquationCategory::Ancillaries,
                source_module: "equations/composition.rs",
                source_function: "reactor_platform_ladder_cost",
            },

            Equation::ColumnPlatformLadder => EquationMetadata {
                name: "Column Platforms and Ladders",
                description: "Platform and ladder cost for a tower",
                formula_plain: "C_PL = 300.9*D^0.63316*L^0.80161",
                reference: VESSELS,
                variables: vec![
                    Variable::new("C_PL", "Platform and ladder cost", "USD"),
                    Variable::new("D", "Diameter", "ft"),
                    Variable::new("L", "Length", "ft"),
                ],
                assumptions: vec!["Independent of vessel material"],
                category: EquationCategory::Ancillaries,
                source_module: "equations/composition.rs",
                source_function: "column_platform_ladder_cost",
            },

            Equation::TrayCost => EquationMetadata {
                name: "Installed Tray Cost",
                description: "Cost of all trays in a column",
                formula_plain: "C_T = N*F_NT*F_TT*F_TM*C_BT",
                reference: VESSELS,
                variables: vec![
                    Variable::new("C_T", "Total tray cost", "USD"),
                    Variable::new("F_TT", "Tray type factor", "-"),
                    Variable::new("F_TM", "Tray material factor", "-"),
                ],
                assumptions: vec!["F_NT applied once as a shared multiplier"],
                category: EquationCategory::Ancillaries,
                source_module: "equations/composition.rs",
                source_function: "tray_cost",
            },

            Equation::VesselPurchasedCost => EquationMetadata {
                name: "Vessel Purchased Cost",
                description: "Material-adjusted shell plus platforms, ladders and (columns) trays",
                formula_plain: "C_P = F_M*C_V + C_PL + C_T",
                reference: VESSELS,
                variables: vec![
                    Variable::new("C_P", "Purchased cost", "USD"),
                    Variable::new("F_M", "Vessel material factor", "-"),
                    Variable::new("C_T", "Tray cost (columns only)", "USD"),
                ],
                assumptions: vec!["C_T = 0 for reactors"],
                category: EquationCategory::Totals,
                source_module: "equations/composition.rs",
                source_function: "adjusted_vessel_cost",
            },

            Equation::ExchangerPurchasedCost => EquationMetadata {
                name: "Exchanger Purchased Cost",
                description: "Base cost with pressure, material and length factors",
                formula_plain: "C_P = F_P*F_M*F_L*C_B",
                reference: EXCHANGERS,
                variables: vec![Variable::new("C_P", "Purchased cost", "USD")],
                assumptions: vec![],
                category: EquationCategory::Totals,
                source_module: "equations/composition.rs",
                source_function: "exchanger_total_cost",
            },

            Equation::CompressorPurchasedCost => EquationMetadata {
                name: "Compressor Purchased Cost",
                description: "Base cost with drive and material factors",
                formula_plain: "C_P = F_D*F_M*C_B",
                reference: COMPRESSORS,
                variables: vec![
                    Variable::new("C_P", "Purchased cost", "USD"),
                    Variable::new("F_D", "Drive factor", "-"),
                    Variable::new("F_M", "Material factor", "-"),
                ],
                assumptions: vec!["Unknown drive or material keys use 1.0"],
                category: EquationCategory::Totals,
                source_module: "equations/composition.rs",
                source_function: "compressor_total_cost",
            },

            Equation::CoolingWaterFlow => EquationMetadata {
                name: "Cooling Water Flow",
                description: "Cooling water circulation for a heat load",
                formula_plain: "m_cw = Q_cooling / (Cp_water*dT_cw)",
                reference: CodeReference::EnergyBalance,
                variables: vec![
                    Variable::new("m_cw", "Cooling water flow", "kg/hr"),
                    Variable::new("Q_cooling", "Heat removed", "kcal/hr"),
                    Variable::new("Cp_water", "Specific heat of water (1.0)", "kcal/(kg*C)"),
                    Variable::new("dT_cw", "Cooling water temperature rise", "C"),
                ],
                assumptions: vec!["Sensible heat only"],
                category: EquationCategory::Utilities,
                source_module: "equations/utilities.rs",
                source_function: "cooling_water_flow",
            },

            Equation::NaturalGasFlow => EquationMetadata {
                name: "Fired-Heater Natural Gas",
                description: "Fuel burned to supply a process heating load",
                formula_plain: "Q_heater = Q_heating / eta, m_ng = Q_heater / dH_comb",
                reference: CodeReference::EnergyBalance,
                variables: vec![
                    Variable::new("Q_heating", "Process heat load", "kcal/hr"),
                    Variable::new("eta", "Heater efficiency (default 0.8)", "-"),
                    Variable::new("dH_comb", "Heat of combustion (13,277)", "kcal/kg"),
                    Variable::new("m_ng", "Natural gas flow", "kg/hr"),
                ],
                assumptions: vec!["Lower heating value basis"],
                category: EquationCategory::Utilities,
                source_module: "equations/utilities.rs",
                source_function: "natural_gas_flow",
            },

            Equation::Co2Emissions => EquationMetadata {
                name: "CO2 Emissions",
                description: "Carbon dioxide released by burning natural gas",
                formula_plain: "m_CO2 = m_ng*2.74",
                reference: CodeReference::EnergyBalance,
                variables: vec![
                    Variable::new("m_CO2", "CO2 emitted", "kg/hr"),
                    Variable::new("m_ng", "Natural gas burned", "kg/hr"),
                ],
                assumptions: vec!["Complete combustion"],
                category: EquationCategory::Utilities,
                source_module: "equations/utilities.rs",
                source_function: "co2_emissions",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories, sorted
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Sizing, BaseCosts, CorrectionFactors, Ancillaries, Totals, Utilities];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::ReactorSizing,
    Equation::ShellWeight,
    Equation::ExchangerArea,
    Equation::CompressorPower,
    Equation::ReactorBaseCost,
    Equation::ColumnBaseCost,
    Equation::ExchangerBaseCost,
    Equation::CompressorBaseCost,
    Equation::BaseTrayCost,
    Equation::TrayQuantityFactor,
    Equation::ExchangerMaterialFactor,
    Equation::ExchangerPressureFactor,
    Equation::ExchangerTubeLengthFactor,
    Equation::ReactorPlatformLadder,
    Equation::ColumnPlatformLadder,
    Equation::TrayCost,
    Equation::VesselPurchasedCost,
    Equation::ExchangerPurchasedCost,
    Equation::CompressorPurchasedCost,
    Equation::CoolingWaterFlow,
    Equation::NaturalGasFlow,
    Equation::Co2Emissions,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used while pricing an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Where it was used (e.g., "Shell weight")
    pub context: String,
    /// Label of the equipment item, if any
    pub item_label: Option<String>,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            item_label: None,
        }
    }

    pub fn for_item(equation: Equation, context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            item_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage across an estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record equation usage for a specific item
    pub fn record_for_item(&mut self, equation: Equation, context: impl Into<String>, label: impl Into<String>) {
        self.usages.push(EquationUsage::for_item(equation, context, label));
    }

    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Unique equations in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation
    pub fn by_equation(&self) -> HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: HashMap<Equation, Vec<&EquationUsage>> = HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Group unique equations by category, categories sorted
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }
}

// ============================================================================
// EQUATIONS.md
// ============================================================================

const PREAMBLE: &str = r#"# Equicost Equations Reference

<!-- Written by `cargo run --bin gen-equations`; edits are overwritten. -->

Sizing equations, base-cost correlations and factor composition rules behind
every Equicost estimate. Costs are reference-year US dollars; no cost index is
applied.

Working units: ft, lb, ft^2, hp. Compressor pressures are psia, exchanger
shell pressure is psig, and the utility calculator works in kcal/hr, kg/hr
and C.

"#;

fn write_equation(out: &mut String, equation: Equation) -> fmt::Result {
    let meta = equation.metadata();

    writeln!(out, "### {}
", meta.name)?;
    writeln!(out, "{}
", meta.description)?;
    writeln!(out, "```text\n{}\n```\n", meta.formula_plain)?;

    writeln!(out, "| Symbol | Meaning | Units |")?;
    writeln!(out, "|--------|---------|-------|")?;
    for var in &meta.variables {
        writeln!(out, "| `{}` | {} | {} |", var.symbol, var.description, var.units)?;
    }
    writeln!(out)?;

    for assumption in &meta.assumptions {
        writeln!(out, "> {}", assumption)?;
    }
    if !meta.assumptions.is_empty() {
        writeln!(out)?;
    }

    writeln!(
        out,
        "Cited from {}. Implemented by `{}` in `src/{}`.\n",
        meta.reference.citation(),
        meta.source_function,
        meta.source_module
    )
}

/// Render the whole registry as the `EQUATIONS.md` document.
///
/// ```rust
/// use cost_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.starts_with("# Equicost Equations Reference"));
/// assert!(markdown.contains("## Base Costs"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut out = String::from(PREAMBLE);
    let categories = Equation::all_categories();

    let contents: Vec<String> = categories
        .iter()
        .map(|c| format!("{} ({})", c.display_name(), Equation::in_category(*c).len()))
        .collect();
    let _ = writeln!(out, "Contents: {}.\n", contents.join(", "));

    for category in &categories {
        let _ = writeln!(out, "## {}\n", category.display_name());
        for equation in Equation::in_category(*category) {
            let _ = write_equation(&mut out, equation);
        }
    }

    let _ = writeln!(
        out,
        "---\n\n{} equations in {} categories. `cargo test -p cost_core` checks each against worked values.",
        ALL_EQUATIONS.len(),
        categories.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 22);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} has no source", eq);
        }

        let weight = Equation::ShellWeight.metadata();
        assert!(weight.formula_plain.contains("(L + 0.8*D)"));
    }

    #[test]
    fn test_every_category_populated() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_tube_length_limitation_documented() {
        let meta = Equation::ExchangerTubeLengthFactor.metadata();
        assert!(meta.assumptions.iter().any(|a| a.contains("Known limitation")));
    }

    #[test]
    fn test_code_reference_citation() {
        assert_eq!(CodeReference::Geometry.citation(), "Cylinder geometry");
        assert!(VESSELS.citation().contains("pressure vessels"));
        assert_eq!(COMPRESSORS.short_form(), "Seider");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::ShellWeight, "R-101");
        tracker.record(Equation::ReactorBaseCost, "R-101");
        tracker.record(Equation::ShellWeight, "T-201");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations(), vec![Equation::ShellWeight, Equation::ReactorBaseCost]);
        assert_eq!(tracker.by_equation()[&Equation::ShellWeight].len(), 2);
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::CompressorPurchasedCost, "test");
        tracker.record(Equation::CompressorBaseCost, "test");
        tracker.record(Equation::CompressorPower, "test");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            cats,
            vec![EquationCategory::Sizing, EquationCategory::BaseCosts, EquationCategory::Totals]
        );
    }

    #[test]
    fn test_merge() {
        let mut a = EquationTracker::new();
        a.record_for_item(Equation::ExchangerArea, "Area", "E-101");
        let mut b = EquationTracker::new();
        b.record_for_item(Equation::ExchangerArea, "Area", "E-102");
        a.merge(b);
        assert_eq!(a.usages().len(), 2);
        assert_eq!(a.unique_equations().len(), 1);
        assert_eq!(a.usages()[1].item_label.as_deref(), Some("E-102"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.starts_with("# Equicost Equations Reference"));
        for cat in Equation::all_categories() {
            assert!(markdown.contains(&format!("## {}", cat.display_name())), "Missing {:?}", cat);
        }
        assert!(markdown.contains("### Vessel Shell Weight"));
        assert!(markdown.contains("F_NT = 1.0 if N > 20, else 2.25 / 1.0414^N"));
        assert!(markdown.contains("src/equations/correlations.rs"));
        assert!(markdown.contains("22 equations in 6 categories"));
        assert_eq!(markdown.matches("\n### ").count(), ALL_EQUATIONS.len());
    }
}
