//! # Cost Equations
//!
//! Every sizing equation and cost correlation used by the estimators lives
//! here, separate from the input handling in [`crate::calculations`]. Having
//! them in one place enables:
//! - Verification against the published correlations
//! - Documentation of units and known limitations
//! - A single registry for `EQUATIONS.md` and cost-sheet citations
//!
//! ## Modules
//!
//! - [`sizing`] - Reactor sizing shortcut and shell weight
//! - [`correlations`] - Base cost on a single scale variable
//! - [`composition`] - Correction factors and purchased-cost totals
//! - [`utilities`] - Cooling water, fuel and CO₂
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Units
//!
//! Correlations are regressed in US customary units (ft, lb, ft², hp, psi).
//! Utility equations are metric (kcal, kg, °C).

pub mod composition;
pub mod correlations;
pub mod registry;
pub mod sizing;
pub mod utilities;

pub use composition::{
    adjusted_vessel_cost,
    base_tray_cost,
    column_platform_ladder_cost,
    compressor_total_cost,
    exchanger_material_factor,
    exchanger_pressure_factor,
    exchanger_total_cost,
    exchanger_tube_length_factor,
    reactor_platform_ladder_cost,
    tray_cost,
    tray_quantity_factor,
};

pub use correlations::{
    checked_ln,
    column_base_cost,
    compressor_base_cost,
    compressor_power_hp,
    exchanger_area,
    exchanger_base_cost,
    reactor_base_cost,
};

pub use sizing::{reactor_dimensions, reactor_volume, shell_weight_lb, WALL_THICKNESS};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
