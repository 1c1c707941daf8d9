//! Shell-and-tube exchanger material factors (Seider et al., Table 22.25).
//!
//! Unlike the other tables these are not plain multipliers: each shell/tube
//! pair carries coefficients `(a, b)` used as `F_M = a + (A/100)^b`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::FactorTable;

/// Coefficients of the area-dependent exchanger material factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangerMaterialFactor {
    pub a: f64,
    pub b: f64,
}

impl ExchangerMaterialFactor {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// Shell/tube material combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExchangerMaterials {
    #[default]
    CarbonSteelCarbonSteel,
    CarbonSteelBrass,
    CarbonSteelStainlessSteel,
    CarbonSteelMonel,
    CarbonSteelTitanium,
    CarbonSteelCrMoSteel,
    CrMoSteelCrMoSteel,
    StainlessSteelStainlessSteel,
    MonelMonel,
    TitaniumTitanium,
}

impl ExchangerMaterials {
    pub const ALL: [ExchangerMaterials; 10] = [
        ExchangerMaterials::CarbonSteelCarbonSteel,
        ExchangerMaterials::CarbonSteelBrass,
        ExchangerMaterials::CarbonSteelStainlessSteel,
        ExchangerMaterials::CarbonSteelMonel,
        ExchangerMaterials::CarbonSteelTitanium,
        ExchangerMaterials::CarbonSteelCrMoSteel,
        ExchangerMaterials::CrMoSteelCrMoSteel,
        ExchangerMaterials::StainlessSteelStainlessSteel,
        ExchangerMaterials::MonelMonel,
        ExchangerMaterials::TitaniumTitanium,
    ];

    /// Normalized "shell/tube" key
    pub fn key(&self) -> &'static str {
        match self {
            ExchangerMaterials::CarbonSteelCarbonSteel => "carbon steel/carbon steel",
            ExchangerMaterials::CarbonSteelBrass => "carbon steel/brass",
            ExchangerMaterials::CarbonSteelStainlessSteel => "carbon steel/stainless steel",
            ExchangerMaterials::CarbonSteelMonel => "carbon steel/monel",
            ExchangerMaterials::CarbonSteelTitanium => "carbon steel/titanium",
            ExchangerMaterials::CarbonSteelCrMoSteel => "carbon steel/cr-mo steel",
            ExchangerMaterials::CrMoSteelCrMoSteel => "cr-mo steel/cr-mo steel",
            ExchangerMaterials::StainlessSteelStainlessSteel => "stainless steel/stainless steel",
            ExchangerMaterials::MonelMonel => "monel/monel",
            ExchangerMaterials::TitaniumTitanium => "titanium/titanium",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExchangerMaterials::CarbonSteelCarbonSteel => "Carbon Steel / Carbon Steel",
            ExchangerMaterials::CarbonSteelBrass => "Carbon Steel / Brass",
            ExchangerMaterials::CarbonSteelStainlessSteel => "Carbon Steel / Stainless Steel",
            ExchangerMaterials::CarbonSteelMonel => "Carbon Steel / Monel",
            ExchangerMaterials::CarbonSteelTitanium => "Carbon Steel / Titanium",
            ExchangerMaterials::CarbonSteelCrMoSteel => "Carbon Steel / Cr-Mo Steel",
            ExchangerMaterials::CrMoSteelCrMoSteel => "Cr-Mo Steel / Cr-Mo Steel",
            ExchangerMaterials::StainlessSteelStainlessSteel => "Stainless Steel / Stainless Steel",
            ExchangerMaterials::MonelMonel => "Monel / Monel",
            ExchangerMaterials::TitaniumTitanium => "Titanium / Titanium",
        }
    }

    /// Coefficients (a, b) for F_M = a + (A/100)^b
    pub fn coefficients(&self) -> ExchangerMaterialFactor {
        match self {
            ExchangerMaterials::CarbonSteelCarbonSteel => ExchangerMaterialFactor::new(0.00, 0.09),
            ExchangerMaterials::CarbonSteelBrass => ExchangerMaterialFactor::new(1.08, 0.05),
            ExchangerMaterials::CarbonSteelStainlessSteel => ExchangerMaterialFactor::new(1.75, 0.13),
            ExchangerMaterials::CarbonSteelMonel => ExchangerMaterialFactor::new(2.7, 0.13),
            ExchangerMaterials::CarbonSteelTitanium => ExchangerMaterialFactor::new(3.2, 0.16),
            ExchangerMaterials::CarbonSteelCrMoSteel => ExchangerMaterialFactor::new(1.55, 0.05),
            ExchangerMaterials::CrMoSteelCrMoSteel => ExchangerMaterialFactor::new(1.70, 0.07),
            ExchangerMaterials::StainlessSteelStainlessSteel => ExchangerMaterialFactor::new(2.70, 0.07),
            ExchangerMaterials::MonelMonel => ExchangerMaterialFactor::new(3.3, 0.08),
            ExchangerMaterials::TitaniumTitanium => ExchangerMaterialFactor::new(9.6, 0.06),
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        let key = super::normalize_key(s);
        Self::ALL.iter().copied().find(|m| m.key() == key)
    }
}

impl std::fmt::Display for ExchangerMaterials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Exchanger material table; unknown pairs fall back to carbon steel/carbon steel.
pub static EXCHANGER_MATERIALS: Lazy<FactorTable<ExchangerMaterialFactor>> = Lazy::new(|| {
    let pairs: Vec<_> = ExchangerMaterials::ALL
        .iter()
        .map(|m| (m.key(), m.coefficients()))
        .collect();
    FactorTable::new(
        "exchanger material pair",
        &pairs,
        ExchangerMaterials::CarbonSteelCarbonSteel.key(),
        ExchangerMaterialFactor::new(0.00, 0.09),
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_lookup_is_format_insensitive() {
        let hit = EXCHANGER_MATERIALS.lookup("Carbon Steel / Stainless Steel");
        assert!(hit.matched);
        assert_eq!(hit.value, ExchangerMaterialFactor::new(1.75, 0.13));
    }

    #[test]
    fn test_unknown_pair_default() {
        let miss = EXCHANGER_MATERIALS.lookup("brass/brass");
        assert!(!miss.matched);
        assert_eq!(miss.value, ExchangerMaterialFactor::new(0.0, 0.09));
        assert_eq!(miss.value, ExchangerMaterials::CarbonSteelCarbonSteel.coefficients());
    }

    #[test]
    fn test_display_names_round_trip_through_lookup() {
        for m in ExchangerMaterials::ALL {
            assert_eq!(ExchangerMaterials::from_key(m.display_name()), Some(m));
        }
    }
}
