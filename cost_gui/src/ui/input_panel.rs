//! Input Panel (Center)
//!
//! Dispatches to the editor for the current selection:
//! - Equipment -> input_equipment
//! - Utilities -> input_equipment::view_utilities
//! - Estimate -> input_estimate

use iced::widget::{container, row, scrollable, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::{App, Message, Selection};
use super::{input_equipment, input_estimate};

/// Render the input panel based on current selection
///
/// `ratio` is this panel's share of the width it splits with the results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match app.selection {
        Selection::Equipment(kind) => input_equipment::view(app, kind),
        Selection::Utilities => input_equipment::view_utilities(&app.forms.utilities),
        Selection::Estimate => input_estimate::view(&app.estimate),
    };

    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Label on the left, text input filling the rest
pub(super) fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(150.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
