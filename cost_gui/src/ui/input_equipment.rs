//! Input views for the equipment editors and the utilities calculator
//!
//! Every field is free text; `forms` parses it on each recalculation.

use iced::widget::{button, column, pick_list, row, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use cost_core::factors::{CompressorMaterial, DriveType, ExchangerMaterials, TrayMaterial, TrayType, VesselMaterial};

use crate::forms::{ColumnForm, CompressorForm, EquipmentKind, ExchangerForm, Field, ReactorForm, UtilitiesForm};
use crate::{App, Message};
use super::input_panel::labeled_input;

/// Render the editor for one equipment type
pub fn view(app: &App, kind: EquipmentKind) -> Column<'_, Message> {
    let fields = match kind {
        EquipmentKind::Reactor => view_reactor(&app.forms.reactor),
        EquipmentKind::Column => view_column(&app.forms.column),
        EquipmentKind::HeatExchanger => view_exchanger(&app.forms.exchanger),
        EquipmentKind::Compressor => view_compressor(&app.forms.compressor),
    };

    column![
        text(kind.display_name()).size(14),
        Space::new().height(8),
        fields,
        Space::new().height(15),
        row![
            button(text("Add to estimate").size(11))
                .on_press(Message::AddToEstimate)
                .padding(Padding::from([6, 12]))
                .style(button::primary),
        ],
    ]
}

fn text_field<'a>(label: &'static str, field: Field, value: &'a str) -> Element<'a, Message> {
    labeled_input(label, value, move |s| Message::TextChanged(field, s))
}

fn labeled<'a>(label: &'a str, control: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    row![text(label).size(11).width(Length::Fixed(150.0)), control.into()]
        .align_y(Alignment::Center)
        .into()
}

fn vessel_material_pick<'a>(selected: VesselMaterial, on_select: fn(VesselMaterial) -> Message) -> Element<'a, Message> {
    labeled(
        "Material:",
        pick_list(&VesselMaterial::ALL[..], Some(selected), on_select)
            .width(Length::Fill)
            .text_size(11),
    )
}

fn view_reactor(form: &ReactorForm) -> Column<'_, Message> {
    let sized_from_space_time = form
        .to_input()
        .map(|input| input.uses_space_time())
        .unwrap_or(false);

    let mut fields = column![
        text_field("Label:", Field::ReactorLabel, &form.label),
        text_field("Space time τ (min):", Field::ReactorSpaceTime, &form.space_time_min),
        text_field("Flow rate Q (ft³/min):", Field::ReactorFlowRate, &form.flow_rate_ft3_min),
    ]
    .spacing(6);

    if sized_from_space_time {
        fields = fields.push(
            text("Diameter and length are sized from V = τ·Q with L = 2.5·D")
                .size(10)
                .color([0.5, 0.5, 0.5]),
        );
    } else {
        fields = fields
            .push(text_field("Diameter D (ft):", Field::ReactorDiameter, &form.diameter_ft))
            .push(text_field("Length L (ft):", Field::ReactorLength, &form.length_ft));
    }

    fields.push(vessel_material_pick(form.material, Message::ReactorMaterialSelected))
}

fn view_column(form: &ColumnForm) -> Column<'_, Message> {
    column![
        text_field("Label:", Field::ColumnLabel, &form.label),
        text_field("Diameter D (ft):", Field::ColumnDiameter, &form.diameter_ft),
        text_field("Length L (ft):", Field::ColumnLength, &form.length_ft),
        text_field("Trays N:", Field::ColumnTrays, &form.tray_count),
        vessel_material_pick(form.material, Message::ColumnMaterialSelected),
        Space::new().height(4),
        text("Trays").size(12),
        labeled(
            "Tray type:",
            pick_list(&TrayType::ALL[..], Some(form.tray_type), Message::TrayTypeSelected)
                .width(Length::Fill)
                .text_size(11),
        ),
        labeled(
            "Tray material:",
            pick_list(&TrayMaterial::ALL[..], Some(form.tray_material), Message::TrayMaterialSelected)
                .width(Length::Fill)
                .text_size(11),
        ),
    ]
    .spacing(6)
}

fn view_exchanger(form: &ExchangerForm) -> Column<'_, Message> {
    column![
        text_field("Label:", Field::ExchangerLabel, &form.label),
        text_field("Heat duty Q (Btu/hr):", Field::ExchangerDuty, &form.heat_duty_btu_hr),
        text_field("Heat flux (Btu/hr·ft²):", Field::ExchangerFlux, &form.flux_btu_hr_ft2),
        text_field("Shell pressure (psig):", Field::ExchangerPressure, &form.pressure_psig),
        text_field("Tube length (ft):", Field::ExchangerTubeLength, &form.tube_length_ft),
        labeled(
            "Shell / tube:",
            pick_list(&ExchangerMaterials::ALL[..], Some(form.materials), Message::ExchangerMaterialsSelected)
                .width(Length::Fill)
                .text_size(11),
        ),
    ]
    .spacing(6)
}

fn view_compressor(form: &CompressorForm) -> Column<'_, Message> {
    column![
        text_field("Label:", Field::CompressorLabel, &form.label),
        text_field("Inlet flow (ft³/min):", Field::CompressorFlow, &form.inlet_flow_ft3_min),
        text_field("Inlet pressure (psia):", Field::CompressorInletPressure, &form.inlet_pressure_psia),
        text_field("Outlet pressure (psia):", Field::CompressorOutletPressure, &form.outlet_pressure_psia),
        text_field("Heat capacity ratio k:", Field::CompressorK, &form.specific_heat_ratio),
        text_field("Efficiency η:", Field::CompressorEfficiency, &form.efficiency),
        labeled(
            "Drive:",
            pick_list(&DriveType::ALL[..], Some(form.drive), Message::DriveSelected)
                .width(Length::Fill)
                .text_size(11),
        ),
        labeled(
            "Material:",
            pick_list(&CompressorMaterial::ALL[..], Some(form.material), Message::CompressorMaterialSelected)
                .width(Length::Fill)
                .text_size(11),
        ),
    ]
    .spacing(6)
}

/// Render the utilities calculator
pub fn view_utilities(form: &UtilitiesForm) -> Column<'_, Message> {
    column![
        text("Utility Consumption").size(14),
        Space::new().height(8),
        text("Cooling water").size(12),
        text_field("Cooling load (kcal/hr):", Field::CoolingLoad, &form.cooling_load_kcal_hr),
        text_field("Water ΔT (°C):", Field::CoolingDeltaT, &form.cooling_water_delta_t_c),
        Space::new().height(4),
        text("Fired heater").size(12),
        text_field("Heating load (kcal/hr):", Field::HeatingLoad, &form.heating_load_kcal_hr),
        text_field("Heater efficiency:", Field::HeaterEfficiency, &form.heater_efficiency),
    ]
    .spacing(6)
}
