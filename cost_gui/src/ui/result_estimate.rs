//! Results view for the running estimate

use iced::widget::{column, row, rule, text, Column, Space};
use iced::Length;

use cost_core::EstimateSummary;

use crate::Message;

/// Render each priced line and the grand total
pub fn view(summary: &EstimateSummary) -> Column<'_, Message> {
    let mut content: Column<'_, Message> = column![
        text("Purchased Equipment").size(14),
        Space::new().height(8),
        row![
            text("Item").size(11).width(Length::FillPortion(2)),
            text("Equipment").size(11).width(Length::FillPortion(3)),
            text("Purchased Cost").size(11).width(Length::FillPortion(2)),
        ],
        rule::horizontal(1),
    ]
    .spacing(4);

    for line in &summary.lines {
        content = content.push(row![
            text(line.label.as_str()).size(11).width(Length::FillPortion(2)),
            text(line.equipment_type.as_str()).size(11).width(Length::FillPortion(3)),
            text(line.result.total_cost().to_string()).size(11).width(Length::FillPortion(2)),
        ]);
    }

    content = content
        .push(rule::horizontal(1))
        .push(text(format!("GRAND TOTAL: {}", summary.grand_total)).size(16).color([0.2, 0.6, 0.2]));

    let warnings = summary.warnings();
    if !warnings.is_empty() {
        content = content.push(Space::new().height(8)).push(text("Defaults applied:").size(11));
        for warning in warnings {
            content = content.push(text(warning).size(11).color([0.6, 0.3, 0.0]));
        }
    }

    content
}
