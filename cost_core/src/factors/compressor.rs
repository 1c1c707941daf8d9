//! Compressor drive and material factors.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::FactorTable;

/// Compressor driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DriveType {
    /// Electric motor: F_D = 1.0
    #[default]
    Electric,
    /// Steam turbine: F_D = 1.15
    SteamTurbine,
    /// Gas turbine: F_D = 1.25
    GasTurbine,
}

impl DriveType {
    pub const ALL: [DriveType; 3] = [DriveType::Electric, DriveType::SteamTurbine, DriveType::GasTurbine];

    pub fn key(&self) -> &'static str {
        match self {
            DriveType::Electric => "electric",
            DriveType::SteamTurbine => "steam turbine",
            DriveType::GasTurbine => "gas turbine",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DriveType::Electric => "Electric Motor",
            DriveType::SteamTurbine => "Steam Turbine",
            DriveType::GasTurbine => "Gas Turbine",
        }
    }

    /// Drive factor F_D
    pub fn factor(&self) -> f64 {
        match self {
            DriveType::Electric => 1.0,
            DriveType::SteamTurbine => 1.15,
            DriveType::GasTurbine => 1.25,
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        let key = super::normalize_key(s);
        Self::ALL.iter().copied().find(|d| d.key() == key)
    }
}

impl std::fmt::Display for DriveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Compressor casing material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompressorMaterial {
    #[default]
    CarbonSteel,
    StainlessSteel,
    NickelAlloy,
}

impl CompressorMaterial {
    pub const ALL: [CompressorMaterial; 3] = [
        CompressorMaterial::CarbonSteel,
        CompressorMaterial::StainlessSteel,
        CompressorMaterial::NickelAlloy,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CompressorMaterial::CarbonSteel => "carbon steel",
            CompressorMaterial::StainlessSteel => "stainless steel",
            CompressorMaterial::NickelAlloy => "nickel alloy",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CompressorMaterial::CarbonSteel => "Carbon Steel",
            CompressorMaterial::StainlessSteel => "Stainless Steel",
            CompressorMaterial::NickelAlloy => "Nickel Alloy",
        }
    }

    /// Material factor F_M
    pub fn factor(&self) -> f64 {
        match self {
            CompressorMaterial::CarbonSteel => 1.0,
            CompressorMaterial::StainlessSteel => 2.5,
            CompressorMaterial::NickelAlloy => 5.0,
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        let key = super::normalize_key(s);
        Self::ALL.iter().copied().find(|m| m.key() == key)
    }
}

impl std::fmt::Display for CompressorMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Drive factor table; unknown drives fall back to 1.0 (electric).
pub static DRIVE_TYPES: Lazy<FactorTable<f64>> = Lazy::new(|| {
    let pairs: Vec<_> = DriveType::ALL.iter().map(|d| (d.key(), d.factor())).collect();
    FactorTable::new("drive type", &pairs, DriveType::Electric.key(), 1.0)
});

/// Compressor material table; unknown materials fall back to 1.0.
pub static COMPRESSOR_MATERIALS: Lazy<FactorTable<f64>> = Lazy::new(|| {
    let pairs: Vec<_> = CompressorMaterial::ALL.iter().map(|m| (m.key(), m.factor())).collect();
    FactorTable::new("compressor material", &pairs, CompressorMaterial::CarbonSteel.key(), 1.0)
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_factors() {
        assert_eq!(DRIVE_TYPES.lookup("electric").value, 1.0);
        assert_eq!(DRIVE_TYPES.lookup("Steam Turbine").value, 1.15);
        assert_eq!(DRIVE_TYPES.lookup("GAS_TURBINE").value, 1.25);
    }

    #[test]
    fn test_unknown_drive_and_material_default_to_one() {
        assert_eq!(DRIVE_TYPES.lookup("diesel engine").value, 1.0);
        assert_eq!(COMPRESSOR_MATERIALS.lookup("bronze").value, 1.0);
    }

    #[test]
    fn test_material_factors() {
        assert_eq!(COMPRESSOR_MATERIALS.lookup("stainless steel").value, 2.5);
        assert_eq!(COMPRESSOR_MATERIALS.lookup("Nickel Alloy").value, 5.0);
    }

    #[test]
    fn test_display_name_is_not_a_key() {
        // "Electric Motor" is a label, not a table key
        assert!(!DRIVE_TYPES.lookup(DriveType::Electric.display_name()).matched);
        assert_eq!(DriveType::from_key("electric"), Some(DriveType::Electric));
    }
}
