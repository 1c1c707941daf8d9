//! # Vessel Sizing and Shell Weight
//!
//! Geometry of the cylindrical pressure vessels priced as reactors and
//! distillation columns.
//!
//! ## Notation
//!
//! - `D` = Inside diameter (ft)
//! - `L` = Tangent-to-tangent length (ft)
//! - `t` = Wall thickness (ft), fixed at 2.5 in
//! - `ρ` = Plate density (lb/ft³)
//! - `τ` = Space time (min)
//! - `Q` = Volumetric flow rate (ft³/min)
//!
//! ## References
//!
//! - Seider, Seader, Lewin & Widagdo, *Product and Process Design
//!   Principles*, Eq. 22.59 (shell weight)

use std::f64::consts::PI;

use crate::errors::{CostError, EstimateResult};
use crate::units::{Feet, Inches};

/// Shell wall thickness used for every vessel (2.5 in)
pub const WALL_THICKNESS: Feet = Inches(2.5).to_feet();

/// Length-to-diameter ratio assumed by the reactor sizing shortcut
pub const ASPECT_RATIO: f64 = 2.5;

/// Length allowance for the two heads, as a multiple of D
pub const HEAD_ALLOWANCE: f64 = 0.8;

/// Reactor volume from space time and flow rate: V = Q·τ
#[inline]
pub fn reactor_volume(space_time_min: f64, flow_rate_ft3_min: f64) -> f64 {
    space_time_min * flow_rate_ft3_min
}

/// Diameter and length of a cylinder of volume V with L = 2.5·D.
///
/// # Formulas
/// ```text
/// V = (π/4)·D²·L,  L = 2.5·D
/// D = (4V / (2.5π))^(1/3)
/// ```
///
/// # Returns
/// (D, L) in feet
#[inline]
pub fn reactor_dimensions(volume_ft3: f64) -> (f64, f64) {
    let diameter = (4.0 * volume_ft3 / (ASPECT_RATIO * PI)).cbrt();
    (diameter, ASPECT_RATIO * diameter)
}

/// Shell weight with head allowance.
///
/// # Formula
/// ```text
/// W = π·(D + t)·(L + 0.8·D)·t·ρ
/// ```
///
/// # Errors
/// `Domain` if D, L or ρ is not strictly positive.
pub fn shell_weight_lb(diameter_ft: f64, length_ft: f64, density_lb_ft3: f64) -> EstimateResult<f64> {
    for (quantity, value) in [
        ("diameter_ft", diameter_ft),
        ("length_ft", length_ft),
        ("density_lb_ft3", density_lb_ft3),
    ] {
        if !(value > 0.0) {
            return Err(CostError::domain(
                quantity,
                value.to_string(),
                "Shell weight requires a positive dimension and density",
            ));
        }
    }
    let t = WALL_THICKNESS.0;
    Ok(PI * (diameter_ft + t) * (length_ft + HEAD_ALLOWANCE * diameter_ft) * t * density_lb_ft3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_wall_thickness_in_feet() {
        assert!((WALL_THICKNESS.0 - 0.2083333).abs() < 1e-6);
    }

    #[test]
    fn test_reactor_sizing_shortcut() {
        // τ = 10 min, Q = 50 ft³/min → V = 500 ft³
        let v = reactor_volume(10.0, 50.0);
        assert_eq!(v, 500.0);
        let (d, l) = reactor_dimensions(v);
        assert!(rel_eq(d, 6.338405767549083, 1e-9), "D = {}", d);
        assert!(rel_eq(l, 15.846014418872707, 1e-9), "L = {}", l);

        // Recovered volume matches
        let v_back = PI / 4.0 * d * d * l;
        assert!(rel_eq(v_back, 500.0, 1e-9), "V = {}", v_back);
    }

    #[test]
    fn test_shell_weight_reference() {
        // D = 6 ft, L = 15 ft, ρ = 500 lb/ft³
        let w = shell_weight_lb(6.0, 15.0, 500.0).unwrap();
        assert!(rel_eq(w, 40227.112181513054, 1e-9), "W = {}", w);
    }

    #[test]
    fn test_shell_weight_monotonic() {
        use crate::factors::VesselMaterial;

        let diameters = [1e-3, 0.01, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 6.0, 12.0, 30.0];
        let lengths = [1e-3, 0.01, 0.5, 1.0, 8.0, 15.0, 40.0, 120.0];
        let mut densities: Vec<f64> = VesselMaterial::ALL
            .iter()
            .map(|m| m.spec().density_lb_ft3)
            .chain([1.0, 100.0, 1000.0])
            .collect();
        densities.sort_by(f64::total_cmp);
        densities.dedup();

        let w = |d: f64, l: f64, rho: f64| shell_weight_lb(d, l, rho).unwrap();

        for &l in &lengths {
            for &rho in &densities {
                for pair in diameters.windows(2) {
                    assert!(w(pair[1], l, rho) > w(pair[0], l, rho), "D {:?} at L={} ρ={}", pair, l, rho);
                }
            }
        }
        for &d in &diameters {
            for &rho in &densities {
                for pair in lengths.windows(2) {
                    assert!(w(d, pair[1], rho) > w(d, pair[0], rho), "L {:?} at D={} ρ={}", pair, d, rho);
                }
            }
        }
        for &d in &diameters {
            for &l in &lengths {
                for pair in densities.windows(2) {
                    assert!(w(d, l, pair[1]) > w(d, l, pair[0]), "ρ {:?} at D={} L={}", pair, d, l);
                }
            }
        }
    }

    #[test]
    fn test_shell_weight_rejects_non_positive() {
        assert!(shell_weight_lb(0.0, 10.0, 490.0).is_err());
        assert!(shell_weight_lb(4.0, -1.0, 490.0).is_err());
        assert!(shell_weight_lb(4.0, 10.0, f64::NAN).is_err());
    }
}
