//! Vessel and tray construction factors.
//!
//! Shell material factors and densities follow the pressure-vessel material
//! table of Seider et al. (Table 22.26). Tray factors apply to distillation
//! column internals only.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::FactorTable;

/// Cost factor and density of a vessel shell material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Material cost factor F_M relative to carbon steel
    pub cost_factor: f64,
    /// Plate density ρ (lb/ft³)
    pub density_lb_ft3: f64,
}

impl MaterialSpec {
    pub const fn new(cost_factor: f64, density_lb_ft3: f64) -> Self {
        Self { cost_factor, density_lb_ft3 }
    }
}

/// Pressure-vessel shell materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VesselMaterial {
    #[default]
    CarbonSteel,
    LowAlloySteel,
    StainlessSteel304,
    StainlessSteel316,
    Carpenter20Cb3,
    Nickel200,
    Monel400,
    Inconel600,
    Incoloy825,
    Titanium,
}

impl VesselMaterial {
    /// All vessel materials for UI selection
    pub const ALL: [VesselMaterial; 10] = [
        VesselMaterial::CarbonSteel,
        VesselMaterial::LowAlloySteel,
        VesselMaterial::StainlessSteel304,
        VesselMaterial::StainlessSteel316,
        VesselMaterial::Carpenter20Cb3,
        VesselMaterial::Nickel200,
        VesselMaterial::Monel400,
        VesselMaterial::Inconel600,
        VesselMaterial::Incoloy825,
        VesselMaterial::Titanium,
    ];

    /// Normalized table key
    pub fn key(&self) -> &'static str {
        match self {
            VesselMaterial::CarbonSteel => "carbon steel",
            VesselMaterial::LowAlloySteel => "low-alloy steel",
            VesselMaterial::StainlessSteel304 => "stainless steel 304",
            VesselMaterial::StainlessSteel316 => "stainless steel 316",
            VesselMaterial::Carpenter20Cb3 => "carpenter 20cb-3",
            VesselMaterial::Nickel200 => "nickel-200",
            VesselMaterial::Monel400 => "monel-400",
            VesselMaterial::Inconel600 => "inconel-600",
            VesselMaterial::Incoloy825 => "incoloy-825",
            VesselMaterial::Titanium => "titanium",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            VesselMaterial::CarbonSteel => "Carbon Steel",
            VesselMaterial::LowAlloySteel => "Low-Alloy Steel",
            VesselMaterial::StainlessSteel304 => "Stainless Steel 304",
            VesselMaterial::StainlessSteel316 => "Stainless Steel 316",
            VesselMaterial::Carpenter20Cb3 => "Carpenter 20CB-3",
            VesselMaterial::Nickel200 => "Nickel-200",
            VesselMaterial::Monel400 => "Monel-400",
            VesselMaterial::Inconel600 => "Inconel-600",
            VesselMaterial::Incoloy825 => "Incoloy-825",
            VesselMaterial::Titanium => "Titanium",
        }
    }

    /// Material factor and density (Table 22.26)
    pub fn spec(&self) -> MaterialSpec {
        match self {
            VesselMaterial::CarbonSteel => MaterialSpec::new(1.0, 490.0),
            VesselMaterial::LowAlloySteel => MaterialSpec::new(1.2, 490.0),
            VesselMaterial::StainlessSteel304 => MaterialSpec::new(1.7, 500.0),
            VesselMaterial::StainlessSteel316 => MaterialSpec::new(2.1, 500.0),
            VesselMaterial::Carpenter20Cb3 => MaterialSpec::new(3.2, 500.0),
            VesselMaterial::Nickel200 => MaterialSpec::new(5.4, 555.0),
            VesselMaterial::Monel400 => MaterialSpec::new(3.6, 555.0),
            VesselMaterial::Inconel600 => MaterialSpec::new(3.9, 555.0),
            VesselMaterial::Incoloy825 => MaterialSpec::new(3.7, 555.0),
            VesselMaterial::Titanium => MaterialSpec::new(7.7, 280.0),
        }
    }

    /// Parse a key (case and whitespace insensitive)
    pub fn from_key(s: &str) -> Option<Self> {
        let key = super::normalize_key(s);
        Self::ALL.iter().copied().find(|m| m.key() == key)
    }
}

impl std::fmt::Display for VesselMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Column tray types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrayType {
    #[default]
    Sieve,
    Valve,
}

impl TrayType {
    pub const ALL: [TrayType; 2] = [TrayType::Sieve, TrayType::Valve];

    pub fn key(&self) -> &'static str {
        match self {
            TrayType::Sieve => "sieve",
            TrayType::Valve => "valve",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TrayType::Sieve => "Sieve",
            TrayType::Valve => "Valve",
        }
    }

    /// Tray type factor F_TT
    pub fn factor(&self) -> f64 {
        match self {
            TrayType::Sieve => 1.0,
            TrayType::Valve => 1.18,
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        let key = super::normalize_key(s);
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

impl std::fmt::Display for TrayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Column tray materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrayMaterial {
    #[default]
    CarbonSteel,
    StainlessSteel,
}

impl TrayMaterial {
    pub const ALL: [TrayMaterial; 2] = [TrayMaterial::CarbonSteel, TrayMaterial::StainlessSteel];

    pub fn key(&self) -> &'static str {
        match self {
            TrayMaterial::CarbonSteel => "carbon steel",
            TrayMaterial::StainlessSteel => "stainless steel",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TrayMaterial::CarbonSteel => "Carbon Steel",
            TrayMaterial::StainlessSteel => "Stainless Steel",
        }
    }

    /// Tray material factor F_TM
    pub fn factor(&self) -> f64 {
        match self {
            TrayMaterial::CarbonSteel => 1.0,
            TrayMaterial::StainlessSteel => 1.4,
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        let key = super::normalize_key(s);
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

impl std::fmt::Display for TrayMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Vessel shell material table; unknown keys fall back to carbon steel.
pub static VESSEL_MATERIALS: Lazy<FactorTable<MaterialSpec>> = Lazy::new(|| {
    let pairs: Vec<_> = VesselMaterial::ALL.iter().map(|m| (m.key(), m.spec())).collect();
    FactorTable::new(
        "vessel material",
        &pairs,
        VesselMaterial::CarbonSteel.key(),
        VesselMaterial::CarbonSteel.spec(),
    )
});

/// Tray type table; unknown keys fall back to 1.0.
pub static TRAY_TYPES: Lazy<FactorTable<f64>> = Lazy::new(|| {
    let pairs: Vec<_> = TrayType::ALL.iter().map(|t| (t.key(), t.factor())).collect();
    FactorTable::new("tray type", &pairs, TrayType::Sieve.key(), 1.0)
});

/// Tray material table; unknown keys fall back to 1.0.
pub static TRAY_MATERIALS: Lazy<FactorTable<f64>> = Lazy::new(|| {
    let pairs: Vec<_> = TrayMaterial::ALL.iter().map(|t| (t.key(), t.factor())).collect();
    FactorTable::new("tray material", &pairs, TrayMaterial::CarbonSteel.key(), 1.0)
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vessel_material_table_complete() {
        assert_eq!(VESSEL_MATERIALS.keys().len(), VesselMaterial::ALL.len());
        for m in VesselMaterial::ALL {
            let hit = VESSEL_MATERIALS.lookup(m.display_name());
            assert!(hit.matched, "{} should be found by display name", m);
            assert_eq!(hit.value, m.spec());
        }
    }

    #[test]
    fn test_stainless_316() {
        let spec = VESSEL_MATERIALS.lookup("stainless steel 316").value;
        assert_eq!(spec.cost_factor, 2.1);
        assert_eq!(spec.density_lb_ft3, 500.0);
    }

    #[test]
    fn test_unknown_material_defaults_to_carbon_steel() {
        let miss = VESSEL_MATERIALS.lookup("hastelloy c-276");
        assert!(!miss.matched);
        assert_eq!(miss.key, "carbon steel");
        assert_eq!(miss.value, MaterialSpec::new(1.0, 490.0));
    }

    #[test]
    fn test_tray_factors() {
        assert_eq!(TRAY_TYPES.lookup("VALVE").value, 1.18);
        assert_eq!(TRAY_TYPES.lookup("bubble cap").value, 1.0);
        assert_eq!(TRAY_MATERIALS.lookup("Stainless Steel").value, 1.4);
        assert_eq!(TRAY_MATERIALS.lookup("copper").value, 1.0);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(VesselMaterial::from_key("Titanium"), Some(VesselMaterial::Titanium));
        assert_eq!(VesselMaterial::from_key("NICKEL-200"), Some(VesselMaterial::Nickel200));
        assert_eq!(VesselMaterial::from_key("brass"), None);
        assert_eq!(TrayType::from_key(" sieve "), Some(TrayType::Sieve));
        assert_eq!(TrayMaterial::from_key("stainless_steel"), Some(TrayMaterial::StainlessSteel));
    }

    #[test]
    fn test_material_serialization() {
        let json = serde_json::to_string(&VesselMaterial::Monel400).unwrap();
        let parsed: VesselMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, VesselMaterial::Monel400);
    }
}
