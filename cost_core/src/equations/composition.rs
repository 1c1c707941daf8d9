//! # Factor Composition
//!
//! Rules combining a base cost with its correction factors. Each equipment
//! type has its own rule and they are not interchangeable:
//!
//! - Vessels: `F_M·C_V + C_PL` (+ trays for columns)
//! - Trays: `N·F_NT·F_TT·F_TM·C_BT`
//! - Exchangers: `F_P·F_M·F_L·C_B` with `F_M = a + (A/100)^b`
//! - Compressors: `F_D·F_M·C_B`

use crate::factors::ExchangerMaterialFactor;

/// Tray counts above this get no small-quantity premium
pub const TRAY_QUANTITY_THRESHOLD: u32 = 20;

/// Exchanger pressures at or below this (psig) need no pressure correction
pub const PRESSURE_THRESHOLD_PSIG: f64 = 100.0;

// =============================================================================
// VESSELS
// =============================================================================

/// Reactor platforms and ladders: C_PL = 361.8·D^0.73960·L^0.70684
#[inline]
pub fn reactor_platform_ladder_cost(diameter_ft: f64, length_ft: f64) -> f64 {
    361.8 * diameter_ft.powf(0.73960) * length_ft.powf(0.70684)
}

/// Column platforms and ladders: C_PL = 300.9·D^0.63316·L^0.80161
#[inline]
pub fn column_platform_ladder_cost(diameter_ft: f64, length_ft: f64) -> f64 {
    300.9 * diameter_ft.powf(0.63316) * length_ft.powf(0.80161)
}

/// Material-adjusted vessel cost: F_M·C_V
#[inline]
pub fn adjusted_vessel_cost(material_factor: f64, base_cost: f64) -> f64 {
    material_factor * base_cost
}

// =============================================================================
// TRAYS
// =============================================================================

/// Base cost of one tray: C_BT = 468·exp(0.1739·D)
#[inline]
pub fn base_tray_cost(diameter_ft: f64) -> f64 {
    468.0 * (0.1739 * diameter_ft).exp()
}

/// Tray quantity factor.
///
/// ```text
/// F_NT = 1.0                    N > 20
/// F_NT = 2.25 / 1.0414^N        N ≤ 20
/// ```
///
/// The boundary is strict: exactly 20 trays still carries the premium.
#[inline]
pub fn tray_quantity_factor(tray_count: u32) -> f64 {
    if tray_count > TRAY_QUANTITY_THRESHOLD {
        1.0
    } else {
        2.25 / 1.0414_f64.powi(tray_count as i32)
    }
}

/// Installed tray cost: C_T = N·F_NT·F_TT·F_TM·C_BT
#[inline]
pub fn tray_cost(tray_count: u32, quantity_factor: f64, type_factor: f64, material_factor: f64, base_tray: f64) -> f64 {
    tray_count as f64 * quantity_factor * type_factor * material_factor * base_tray
}

// =============================================================================
// HEAT EXCHANGERS
// =============================================================================

/// Area-dependent material factor: F_M = a + (A/100)^b
#[inline]
pub fn exchanger_material_factor(coefficients: ExchangerMaterialFactor, area_ft2: f64) -> f64 {
    coefficients.a + (area_ft2 / 100.0).powf(coefficients.b)
}

/// Pressure factor.
///
/// ```text
/// F_P = 1.0                                        P ≤ 100 psig
/// F_P = 0.9803 + 0.018·(P/100) + 0.0017·(P/100)²   P > 100 psig
/// ```
#[inline]
pub fn exchanger_pressure_factor(pressure_psig: f64) -> f64 {
    if pressure_psig <= PRESSURE_THRESHOLD_PSIG {
        1.0
    } else {
        let p = pressure_psig / 100.0;
        0.9803 + 0.018 * p + 0.0017 * p * p
    }
}

/// Tube-length factor.
///
/// Always 1.0. The correlation for tubes of 20 ft or longer is not modeled,
/// so every length is priced as the 20 ft reference bundle.
#[inline]
pub fn exchanger_tube_length_factor(_tube_length_ft: f64) -> f64 {
    1.0
}

/// Exchanger purchased cost: F_P·F_M·F_L·C_B
#[inline]
pub fn exchanger_total_cost(pressure_factor: f64, material_factor: f64, length_factor: f64, base_cost: f64) -> f64 {
    pressure_factor * material_factor * length_factor * base_cost
}

// =============================================================================
// COMPRESSORS
// =============================================================================

/// Compressor purchased cost: F_D·F_M·C_B
#[inline]
pub fn compressor_total_cost(drive_factor: f64, material_factor: f64, base_cost: f64) -> f64 {
    drive_factor * material_factor * base_cost
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_eq(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    #[test]
    fn test_platform_ladder_costs() {
        assert!(rel_eq(reactor_platform_ladder_cost(6.0, 15.0), 9232.037775588453));
        assert!(rel_eq(column_platform_ladder_cost(5.0, 40.0), 16040.18398089038));
    }

    #[test]
    fn test_base_tray_cost() {
        assert!(rel_eq(base_tray_cost(5.0), 1116.5158819206522));
        assert_eq!(base_tray_cost(0.0), 468.0);
    }

    #[test]
    fn test_tray_quantity_factor_boundary_is_strict() {
        // 20 trays still uses the premium branch
        let f20 = tray_quantity_factor(20);
        assert!(rel_eq(f20, 0.9996110569410637), "F_NT(20) = {}", f20);
        assert_eq!(tray_quantity_factor(21), 1.0);
        assert_eq!(tray_quantity_factor(0), 2.25);
        assert!(rel_eq(tray_quantity_factor(10), 1.4997082643358985));
    }

    #[test]
    fn test_tray_quantity_factor_decreasing_below_threshold() {
        for n in 0..TRAY_QUANTITY_THRESHOLD {
            assert!(tray_quantity_factor(n) > tray_quantity_factor(n + 1));
        }
    }

    #[test]
    fn test_tray_cost() {
        // 25 sieve carbon steel trays in a 5 ft column
        let c = tray_cost(25, tray_quantity_factor(25), 1.0, 1.0, base_tray_cost(5.0));
        assert!(rel_eq(c, 27912.897048016304), "C_T = {}", c);
        assert_eq!(tray_cost(0, 2.25, 1.18, 1.4, 1000.0), 0.0);
    }

    #[test]
    fn test_exchanger_material_factor() {
        let cs = exchanger_material_factor(ExchangerMaterialFactor::new(0.0, 0.09), 10000.0);
        assert!(rel_eq(cs, 1.5135612484362082), "F_M = {}", cs);
        let ss = exchanger_material_factor(ExchangerMaterialFactor::new(1.75, 0.13), 10000.0);
        assert!(rel_eq(ss, 3.569700858609983), "F_M = {}", ss);
    }

    #[test]
    fn test_pressure_factor() {
        assert_eq!(exchanger_pressure_factor(100.0), 1.0);
        assert_eq!(exchanger_pressure_factor(-10.0), 1.0);
        assert!(rel_eq(exchanger_pressure_factor(300.0), 1.0496));
    }

    #[test]
    fn test_tube_length_factor_fixed() {
        assert_eq!(exchanger_tube_length_factor(8.0), 1.0);
        assert_eq!(exchanger_tube_length_factor(20.0), 1.0);
        assert_eq!(exchanger_tube_length_factor(40.0), 1.0);
    }

    #[test]
    fn test_compressor_total() {
        assert!(rel_eq(compressor_total_cost(1.15, 2.5, 1000.0), 2875.0));
    }
}
