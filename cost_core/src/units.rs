//! # Unit Types
//!
//! Type-safe wrappers for the units the cost correlations are fitted in.
//! These are lightweight f64 newtypes that serialize as bare numbers.
//!
//! ## US Customary Units
//!
//! The published correlations are regressed in US customary units, so the
//! engine works in them throughout:
//! - Length: feet (ft), inches (in)
//! - Volume: cubic feet (ft³), volumetric flow in ft³/min
//! - Weight: pounds (lb), density in lb/ft³
//! - Area: square feet (ft²)
//! - Power: horsepower (hp)
//! - Currency: US dollars at the correlation reference year (no indexing)
//!
//! ## Example
//!
//! ```rust
//! use cost_core::units::{Dollars, Feet, Inches};
//!
//! let wall = Inches(2.5);
//! let wall_ft: Feet = wall.into();
//! assert!((wall_ft.0 - 0.208333).abs() < 1e-6);
//!
//! assert_eq!(Dollars(1234567.891).to_string(), "$1,234,567.89");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl Inches {
    /// Const conversion for compile-time constants
    pub const fn to_feet(self) -> Feet {
        Feet(self.0 / 12.0)
    }
}

// ============================================================================
// Currency
// ============================================================================

/// Purchased cost in US dollars.
///
/// `Display` renders the adapter-facing form: `$` prefix, thousands
/// separators, rounded to cents. NaN and infinities print as `$NaN` and
/// `$inf`; amounts from 1e36 up switch to scientific notation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f64);

/// Amounts at or above this print in scientific notation (cents would overflow `u128`)
const MAX_GROUPED: f64 = 1.0e36;

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_sign_negative() && self.0 != 0.0 { "-" } else { "" };
        if self.0.is_nan() {
            return write!(f, "$NaN");
        }
        if self.0.is_infinite() {
            return write!(f, "{}$inf", sign);
        }
        if self.0.abs() >= MAX_GROUPED {
            return write!(f, "{}${:.2e}", sign, self.0.abs());
        }
        let cents = (self.0.abs() * 100.0).round() as u128;
        let whole = cents / 100;
        let frac = cents % 100;
        let sign = if cents > 0 { sign } else { "" };
        write!(f, "{}${}.{:02}", sign, group_thousands(whole), frac)
    }
}

fn group_thousands(mut n: u128) -> String {
    let mut groups = Vec::new();
    loop {
        groups.push(n % 1000);
        n /= 1000;
        if n == 0 {
            break;
        }
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{:03}", g));
    }
    out
}

impl std::ops::Add for Dollars {
    type Output = Dollars;
    fn add(self, rhs: Dollars) -> Dollars {
        Dollars(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Dollars {
    fn sum<I: Iterator<Item = Dollars>>(iter: I) -> Dollars {
        Dollars(iter.map(|d| d.0).sum())
    }
}
