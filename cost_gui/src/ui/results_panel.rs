//! Results Panel (Right Side)
//!
//! Dispatches on the current outcome:
//! - Equipment -> result_equipment (intermediates, factors, purchased cost)
//! - Utilities -> result_equipment::view_utilities
//! - Estimate -> result_estimate (lines and grand total)
//! - Error -> error display

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use cost_core::CostError;

use crate::{App, Message, Outcome};
use super::{result_equipment, result_estimate};

/// Render the results panel for the current outcome
///
/// Uses the complement of the input panel's `input_ratio`.
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = match &app.outcome {
        Outcome::Equipment(result) => result_equipment::view(result),
        Outcome::Utilities(result) => result_equipment::view_utilities(result),
        Outcome::Estimate(summary) => result_estimate::view(summary),
        Outcome::Error(error) => view_error(error),
    };

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_error(error: &CostError) -> Column<'_, Message> {
    column![
        text("Error").size(14),
        Space::new().height(8),
        text(error.to_string()).size(12).color([0.8, 0.2, 0.2]),
        text(error.error_code()).size(10).color([0.5, 0.5, 0.5]),
    ]
}
