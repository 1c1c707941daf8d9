//! # Factor Tables
//!
//! Static lookup data mapping categorical construction choices to numeric
//! correction factors (and, for vessel materials, density).
//!
//! ## Tables
//!
//! | Table                   | Key example                     | Value            | Default               |
//! |-------------------------|---------------------------------|------------------|-----------------------|
//! | Vessel material         | `stainless steel 316`           | F_M, ρ (lb/ft³)  | carbon steel 1.0, 490 |
//! | Tray type               | `valve`                         | F_TT             | 1.0                   |
//! | Tray material           | `stainless steel`               | F_TM             | 1.0                   |
//! | Exchanger material pair | `carbon steel/stainless steel`  | (a, b)           | (0.00, 0.09)          |
//! | Compressor drive        | `steam turbine`                 | F_D              | 1.0                   |
//! | Compressor material     | `nickel alloy`                  | F_M              | 1.0                   |
//!
//! Every table is a *total* function: a map with an enforced default entry.
//! Unknown keys resolve to the default under [`LookupPolicy::Permissive`]
//! and are rejected under [`LookupPolicy::Strict`].
//!
//! ## Example
//!
//! ```rust
//! use cost_core::factors::{LookupPolicy, vessel::VESSEL_MATERIALS};
//!
//! let hit = VESSEL_MATERIALS.lookup("  Stainless Steel   316 ");
//! assert!(hit.matched);
//! assert_eq!(hit.value.cost_factor, 2.1);
//!
//! let miss = VESSEL_MATERIALS.lookup("unobtainium");
//! assert!(!miss.matched);
//! assert_eq!(miss.value.density_lb_ft3, 490.0);
//!
//! assert!(VESSEL_MATERIALS.resolve("unobtainium", LookupPolicy::Strict).is_err());
//! ```

pub mod compressor;
pub mod exchanger;
pub mod vessel;

pub use compressor::{CompressorMaterial, DriveType, COMPRESSOR_MATERIALS, DRIVE_TYPES};
pub use exchanger::{ExchangerMaterialFactor, ExchangerMaterials, EXCHANGER_MATERIALS};
pub use vessel::{MaterialSpec, TrayMaterial, TrayType, VesselMaterial, TRAY_MATERIALS, TRAY_TYPES, VESSEL_MATERIALS};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CostError, EstimateResult};

/// How unknown categorical keys are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LookupPolicy {
    /// Unknown keys resolve to the table default (carbon steel / 1.0)
    #[default]
    Permissive,
    /// Unknown keys are an [`CostError::UnknownKey`] error
    Strict,
}

impl LookupPolicy {
    /// All policies for UI selection
    pub const ALL: [LookupPolicy; 2] = [LookupPolicy::Permissive, LookupPolicy::Strict];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LookupPolicy::Permissive => "Permissive (fall back to defaults)",
            LookupPolicy::Strict => "Strict (reject unknown keys)",
        }
    }
}

impl std::fmt::Display for LookupPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Normalize a categorical key for table lookup.
///
/// Lowercases, treats `_` as a space, and collapses whitespace runs. Each side
/// of a `/` (exchanger shell/tube pair) is normalized independently.
///
/// ```rust
/// use cost_core::factors::normalize_key;
///
/// assert_eq!(normalize_key("  Carbon_Steel / Stainless  Steel "), "carbon steel/stainless steel");
/// assert_eq!(normalize_key("NICKEL-200"), "nickel-200");
/// ```
pub fn normalize_key(raw: &str) -> String {
    raw.split('/')
        .map(|part| {
            part.replace('_', " ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Outcome of a single table lookup, kept in results for auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorLookup<T> {
    /// Key as supplied by the caller
    pub requested: String,
    /// Canonical key of the entry that supplied the value (the default entry's key on a miss)
    pub key: String,
    /// Whether the requested key matched a table entry
    pub matched: bool,
    /// The resolved value
    pub value: T,
}

impl<T> FactorLookup<T> {
    /// Describe a fallback to the default entry, `None` when the key matched
    pub fn fallback_note(&self, table: &str) -> Option<String> {
        (!self.matched).then(|| format!("{} '{}' → {}", table, self.requested, self.key))
    }
}

/// Immutable lookup table with an enforced default entry.
#[derive(Debug)]
pub struct FactorTable<T: Copy + 'static> {
    name: &'static str,
    order: Vec<&'static str>,
    entries: HashMap<&'static str, T>,
    default_key: &'static str,
    default: T,
}

impl<T: Copy + 'static> FactorTable<T> {
    /// Build a table from `(canonical key, value)` pairs.
    ///
    /// `default_key` must name one of the entries; unknown keys resolve to it.
    pub fn new(name: &'static str, pairs: &[(&'static str, T)], default_key: &'static str, fallback: T) -> Self {
        let entries: HashMap<&'static str, T> = pairs.iter().copied().collect();
        let default = entries.get(default_key).copied().unwrap_or(fallback);
        FactorTable {
            name,
            order: pairs.iter().map(|(k, _)| *k).collect(),
            entries,
            default_key,
            default,
        }
    }

    /// Human-readable table name (used in error messages)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a raw key. Total: misses return the default entry.
    pub fn lookup(&self, raw_key: &str) -> FactorLookup<T> {
        let normalized = normalize_key(raw_key);
        match self.entries.get_key_value(normalized.as_str()) {
            Some((key, value)) => FactorLookup {
                requested: raw_key.to_string(),
                key: key.to_string(),
                matched: true,
                value: *value,
            },
            None => FactorLookup {
                requested: raw_key.to_string(),
                key: self.default_key.to_string(),
                matched: false,
                value: self.default,
            },
        }
    }

    /// Look up a raw key under the given policy.
    pub fn resolve(&self, raw_key: &str, policy: LookupPolicy) -> EstimateResult<FactorLookup<T>> {
        let hit = self.lookup(raw_key);
        if !hit.matched {
            match policy {
                LookupPolicy::Strict => return Err(CostError::unknown_key(self.name, raw_key)),
                LookupPolicy::Permissive => {
                    tracing::warn!(table = self.name, key = raw_key, fallback = self.default_key, "unknown key, using default");
                }
            }
        }
        Ok(hit)
    }

    /// Canonical keys in table order
    pub fn keys(&self) -> &[&'static str] {
        &self.order
    }

    /// `(key, value)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, T)> + '_ {
        self.order.iter().filter_map(move |k| self.entries.get(k).map(|v| (*k, *v)))
    }

    /// Value used for unknown keys
    pub fn default_value(&self) -> T {
        self.default
    }
}
