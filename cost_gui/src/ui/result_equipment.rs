//! Results view for a single equipment item or the utilities calculator
//!
//! Shows every intermediate in pipeline order, any defaults applied by a
//! permissive lookup, and the purchased cost.

use iced::widget::{column, row, rule, text, Column, Space};
use iced::{Element, Length};

use cost_core::calculations::UtilitiesResult;
use cost_core::report::{detail_rows, utilities_rows, DetailRow};
use cost_core::EquipmentResult;

use crate::Message;

/// Render a priced equipment item
pub fn view(result: &EquipmentResult) -> Column<'_, Message> {
    let summary = result.cost_result();
    let mut content = column![
        text(summary.equipment).size(14),
        Space::new().height(8),
        rows(detail_rows(result)),
    ]
    .spacing(4);

    let notes = result.unmatched_keys();
    if !notes.is_empty() {
        content = content.push(Space::new().height(8)).push(text("Defaults applied:").size(11));
        for note in notes {
            content = content.push(text(format!("  {}", note)).size(11).color([0.6, 0.3, 0.0]));
        }
    }

    content
        .push(Space::new().height(8))
        .push(rule::horizontal(1))
        .push(text(format!("TOTAL PURCHASED COST: {}", result.total_cost())).size(16).color([0.2, 0.6, 0.2]))
}

/// Render utility consumption
pub fn view_utilities(result: &UtilitiesResult) -> Column<'_, Message> {
    column![
        text("Utility Consumption").size(14),
        Space::new().height(8),
        rows(utilities_rows(result)),
    ]
    .spacing(4)
}

fn rows<'a>(rows: Vec<DetailRow>) -> Element<'a, Message> {
    let mut table: Column<'a, Message> = column![].spacing(3);
    for DetailRow { name, value } in rows {
        table = table.push(row![
            text(name).size(11).width(Length::FillPortion(3)),
            text(value).size(11).width(Length::FillPortion(2)),
        ]);
    }
    table.into()
}
