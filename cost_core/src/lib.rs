//! # cost_core - Process Equipment Cost Estimation Engine
//!
//! `cost_core` is the computational heart of Equicost, providing purchased-cost
//! estimates for chemical process equipment with a clean, LLM-friendly API.
//! All inputs and outputs are JSON-serializable, making it easy to drive from
//! a console, a desktop form, or an AI assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every intermediate and every table lookup is returned
//!
//! ## Quick Start
//!
//! ```rust
//! use cost_core::calculations::{EquipmentItem, ReactorInput};
//! use cost_core::LookupPolicy;
//!
//! let item = EquipmentItem::Reactor(ReactorInput::from_space_time(
//!     "R-101", 10.0, 50.0, "carbon steel",
//! ));
//! let result = item.calculate(LookupPolicy::Permissive).unwrap();
//! println!("{}: {}", item.label(), result.total_cost());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Equipment assemblers and the utility calculator
//! - [`equations`] - Sizing, base-cost and composition formulas plus the registry
//! - [`factors`] - Categorical factor tables and lookup policy
//! - [`estimate`] - Estimate container and evaluation
//! - [`report`] - Markdown cost sheet
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod estimate;
pub mod factors;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CostResult, EquipmentItem, EquipmentResult};
pub use errors::{CostError, ErrorKind, EstimateResult};
pub use estimate::{Estimate, EstimateMetadata, EstimateSettings, EstimateSummary};
pub use factors::LookupPolicy;
pub use report::render_cost_sheet;
pub use units::Dollars;
