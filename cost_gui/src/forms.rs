//! Form state for the equipment editors.
//!
//! Text fields are kept as typed so partial input survives re-renders.
//! Converting a form to an engine input parses every field with
//! `cost_core::errors::parse_number`, so typos surface as the same
//! `InvalidInput` error the engine raises for bad values.

use cost_core::calculations::{ColumnInput, CompressorInput, HeatExchangerInput, ReactorInput, UtilitiesInput};
use cost_core::errors::{parse_count, parse_number};
use cost_core::factors::{CompressorMaterial, DriveType, ExchangerMaterials, TrayMaterial, TrayType, VesselMaterial};
use cost_core::{EquipmentItem, EstimateResult};

/// Every editable text field across the editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ReactorLabel,
    ReactorSpaceTime,
    ReactorFlowRate,
    ReactorDiameter,
    ReactorLength,
    ColumnLabel,
    ColumnDiameter,
    ColumnLength,
    ColumnTrays,
    ExchangerLabel,
    ExchangerDuty,
    ExchangerFlux,
    ExchangerPressure,
    ExchangerTubeLength,
    CompressorLabel,
    CompressorFlow,
    CompressorInletPressure,
    CompressorOutletPressure,
    CompressorK,
    CompressorEfficiency,
    CoolingLoad,
    CoolingDeltaT,
    HeatingLoad,
    HeaterEfficiency,
}

/// Blank means "not given".
fn optional(field: &str, raw: &str) -> EstimateResult<Option<f64>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_number(field, raw).map(Some)
    }
}

#[derive(Debug, Clone)]
pub struct ReactorForm {
    pub label: String,
    pub space_time_min: String,
    pub flow_rate_ft3_min: String,
    pub diameter_ft: String,
    pub length_ft: String,
    pub material: VesselMaterial,
}

impl Default for ReactorForm {
    fn default() -> Self {
        Self {
            label: "R-101".to_string(),
            space_time_min: String::new(),
            flow_rate_ft3_min: String::new(),
            diameter_ft: "6".to_string(),
            length_ft: "15".to_string(),
            material: VesselMaterial::CarbonSteel,
        }
    }
}

impl ReactorForm {
    pub fn to_input(&self) -> EstimateResult<ReactorInput> {
        Ok(ReactorInput {
            label: self.label.clone(),
            diameter_ft: optional("diameter_ft", &self.diameter_ft)?,
            length_ft: optional("length_ft", &self.length_ft)?,
            space_time_min: optional("space_time_min", &self.space_time_min)?,
            flow_rate_ft3_min: optional("flow_rate_ft3_min", &self.flow_rate_ft3_min)?,
            material: self.material.key().to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ColumnForm {
    pub label: String,
    pub diameter_ft: String,
    pub length_ft: String,
    pub tray_count: String,
    pub material: VesselMaterial,
    pub tray_type: TrayType,
    pub tray_material: TrayMaterial,
}

impl Default for ColumnForm {
    fn default() -> Self {
        Self {
            label: "T-101".to_string(),
            diameter_ft: "5".to_string(),
            length_ft: "40".to_string(),
            tray_count: "25".to_string(),
            material: VesselMaterial::CarbonSteel,
            tray_type: TrayType::Sieve,
            tray_material: TrayMaterial::CarbonSteel,
        }
    }
}

impl ColumnForm {
    pub fn to_input(&self) -> EstimateResult<ColumnInput> {
        Ok(ColumnInput {
            label: self.label.clone(),
            diameter_ft: parse_number("diameter_ft", &self.diameter_ft)?,
            length_ft: parse_number("length_ft", &self.length_ft)?,
            tray_count: parse_count("tray_count", &self.tray_count)?,
            material: self.material.key().to_string(),
            tray_type: self.tray_type.key().to_string(),
            tray_material: self.tray_material.key().to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ExchangerForm {
    pub label: String,
    pub heat_duty_btu_hr: String,
    pub flux_btu_hr_ft2: String,
    pub pressure_psig: String,
    pub tube_length_ft: String,
    pub materials: ExchangerMaterials,
}

impl Default for ExchangerForm {
    fn default() -> Self {
        Self {
            label: "E-101".to_string(),
            heat_duty_btu_hr: "1000000".to_string(),
            flux_btu_hr_ft2: "100".to_string(),
            pressure_psig: "50".to_string(),
            tube_length_ft: "16".to_string(),
            materials: ExchangerMaterials::CarbonSteelCarbonSteel,
        }
    }
}

impl ExchangerForm {
    pub fn to_input(&self) -> EstimateResult<HeatExchangerInput> {
        Ok(HeatExchangerInput {
            label: self.label.clone(),
            heat_duty_btu_hr: parse_number("heat_duty_btu_hr", &self.heat_duty_btu_hr)?,
            flux_btu_hr_ft2: parse_number("flux_btu_hr_ft2", &self.flux_btu_hr_ft2)?,
            pressure_psig: parse_number("pressure_psig", &self.pressure_psig)?,
            materials: self.materials.key().to_string(),
            tube_length_ft: parse_number("tube_length_ft", &self.tube_length_ft)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CompressorForm {
    pub label: String,
    pub inlet_flow_ft3_min: String,
    pub inlet_pressure_psia: String,
    pub outlet_pressure_psia: String,
    pub specific_heat_ratio: String,
    pub efficiency: String,
    pub drive: DriveType,
    pub material: CompressorMaterial,
}

impl Default for CompressorForm {
    fn default() -> Self {
        Self {
            label: "K-101".to_string(),
            inlet_flow_ft3_min: "500".to_string(),
            inlet_pressure_psia: "14.7".to_string(),
            outlet_pressure_psia: "44.1".to_string(),
            specific_heat_ratio: "1.4".to_string(),
            efficiency: "0.78".to_string(),
            drive: DriveType::Electric,
            material: CompressorMaterial::CarbonSteel,
        }
    }
}

impl CompressorForm {
    pub fn to_input(&self) -> EstimateResult<CompressorInput> {
        Ok(CompressorInput {
            label: self.label.clone(),
            inlet_flow_ft3_min: parse_number("inlet_flow_ft3_min", &self.inlet_flow_ft3_min)?,
            inlet_pressure_psia: parse_number("inlet_pressure_psia", &self.inlet_pressure_psia)?,
            outlet_pressure_psia: parse_number("outlet_pressure_psia", &self.outlet_pressure_psia)?,
            specific_heat_ratio: parse_number("specific_heat_ratio", &self.specific_heat_ratio)?,
            efficiency: parse_number("efficiency", &self.efficiency)?,
            drive: self.drive.key().to_string(),
            material: self.material.key().to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UtilitiesForm {
    pub cooling_load_kcal_hr: String,
    pub cooling_water_delta_t_c: String,
    pub heating_load_kcal_hr: String,
    pub heater_efficiency: String,
}

impl Default for UtilitiesForm {
    fn default() -> Self {
        let defaults = UtilitiesInput::default();
        Self {
            cooling_load_kcal_hr: defaults.cooling_load_kcal_hr.to_string(),
            cooling_water_delta_t_c: defaults.cooling_water_delta_t_c.to_string(),
            heating_load_kcal_hr: defaults.heating_load_kcal_hr.to_string(),
            heater_efficiency: defaults.heater_efficiency.to_string(),
        }
    }
}

impl UtilitiesForm {
    pub fn to_input(&self) -> EstimateResult<UtilitiesInput> {
        Ok(UtilitiesInput {
            cooling_load_kcal_hr: parse_number("cooling_load_kcal_hr", &self.cooling_load_kcal_hr)?,
            cooling_water_delta_t_c: parse_number("cooling_water_delta_t_c", &self.cooling_water_delta_t_c)?,
            heating_load_kcal_hr: parse_number("heating_load_kcal_hr", &self.heating_load_kcal_hr)?,
            heater_efficiency: parse_number("heater_efficiency", &self.heater_efficiency)?,
        })
    }
}

/// All editor state.
#[derive(Debug, Clone, Default)]
pub struct Forms {
    pub reactor: ReactorForm,
    pub column: ColumnForm,
    pub exchanger: ExchangerForm,
    pub compressor: CompressorForm,
    pub utilities: UtilitiesForm,
}

impl Forms {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::ReactorLabel => &mut self.reactor.label,
            Field::ReactorSpaceTime => &mut self.reactor.space_time_min,
            Field::ReactorFlowRate => &mut self.reactor.flow_rate_ft3_min,
            Field::ReactorDiameter => &mut self.reactor.diameter_ft,
            Field::ReactorLength => &mut self.reactor.length_ft,
            Field::ColumnLabel => &mut self.column.label,
            Field::ColumnDiameter => &mut self.column.diameter_ft,
            Field::ColumnLength => &mut self.column.length_ft,
            Field::ColumnTrays => &mut self.column.tray_count,
            Field::ExchangerLabel => &mut self.exchanger.label,
            Field::ExchangerDuty => &mut self.exchanger.heat_duty_btu_hr,
            Field::ExchangerFlux => &mut self.exchanger.flux_btu_hr_ft2,
            Field::ExchangerPressure => &mut self.exchanger.pressure_psig,
            Field::ExchangerTubeLength => &mut self.exchanger.tube_length_ft,
            Field::CompressorLabel => &mut self.compressor.label,
            Field::CompressorFlow => &mut self.compressor.inlet_flow_ft3_min,
            Field::CompressorInletPressure => &mut self.compressor.inlet_pressure_psia,
            Field::CompressorOutletPressure => &mut self.compressor.outlet_pressure_psia,
            Field::CompressorK => &mut self.compressor.specific_heat_ratio,
            Field::CompressorEfficiency => &mut self.compressor.efficiency,
            Field::CoolingLoad => &mut self.utilities.cooling_load_kcal_hr,
            Field::CoolingDeltaT => &mut self.utilities.cooling_water_delta_t_c,
            Field::HeatingLoad => &mut self.utilities.heating_load_kcal_hr,
            Field::HeaterEfficiency => &mut self.utilities.heater_efficiency,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.slot(field) = value;
    }

    /// Engine input for one equipment editor.
    pub fn item(&self, kind: EquipmentKind) -> EstimateResult<EquipmentItem> {
        Ok(match kind {
            EquipmentKind::Reactor => EquipmentItem::Reactor(self.reactor.to_input()?),
            EquipmentKind::Column => EquipmentItem::Column(self.column.to_input()?),
            EquipmentKind::HeatExchanger => EquipmentItem::HeatExchanger(self.exchanger.to_input()?),
            EquipmentKind::Compressor => EquipmentItem::Compressor(self.compressor.to_input()?),
        })
    }
}

/// Equipment editors offered in the left panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentKind {
    Reactor,
    Column,
    HeatExchanger,
    Compressor,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 4] = [
        EquipmentKind::Reactor,
        EquipmentKind::Column,
        EquipmentKind::HeatExchanger,
        EquipmentKind::Compressor,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EquipmentKind::Reactor => "Reactor",
            EquipmentKind::Column => "Distillation Column",
            EquipmentKind::HeatExchanger => "Shell-and-Tube Heat Exchanger",
            EquipmentKind::Compressor => "Compressor",
        }
    }
}
