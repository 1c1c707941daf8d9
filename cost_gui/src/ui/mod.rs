//! UI module for Equicost GUI
//!
//! # Panel Structure
//! - `items_panel` - Left sidebar: equipment editors, utilities, estimate, lookup policy
//! - `input_panel` - Center panel: dispatches to input_* child modules
//! - `results_panel` - Right panel: dispatches to result_* child modules
//! - `status_bar` - Bottom status messages

// Top-level panels
pub mod items_panel;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

// Input panel children
pub mod input_equipment;
pub mod input_estimate;

// Results panel children
pub mod result_equipment;
pub mod result_estimate;
