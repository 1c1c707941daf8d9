//! Input view for the running estimate
//!
//! Header fields plus the item list with remove buttons.

use iced::widget::{button, column, row, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use cost_core::Estimate;

use crate::{Message, MetaField};
use super::input_panel::labeled_input;

/// Render the estimate editor
pub fn view(estimate: &Estimate) -> Column<'_, Message> {
    let meta = &estimate.meta;

    let mut items: Column<'_, Message> = column![].spacing(4);
    for (id, item) in estimate.sorted_items() {
        let id = *id;
        let item_row: Element<'_, Message> = row![
            text(item.label()).size(11).width(Length::Fixed(90.0)),
            text(item.equipment_type()).size(11).width(Length::Fill),
            button(text("Remove").size(10))
                .on_press(Message::RemoveItem(id))
                .padding(Padding::from([2, 8]))
                .style(button::secondary),
        ]
        .align_y(Alignment::Center)
        .into();
        items = items.push(item_row);
    }

    if estimate.item_count() == 0 {
        items = items.push(
            text("Open an equipment editor and use 'Add to estimate'.")
                .size(11)
                .color([0.5, 0.5, 0.5]),
        );
    }

    column![
        text("Estimate").size(14),
        Space::new().height(8),
        labeled_input("Estimator:", &meta.estimator, |s| Message::MetaChanged(MetaField::Estimator, s)),
        labeled_input("Job ID:", &meta.job_id, |s| Message::MetaChanged(MetaField::JobId, s)),
        labeled_input("Client:", &meta.client, |s| Message::MetaChanged(MetaField::Client, s)),
        Space::new().height(12),
        text(format!("Items ({})", estimate.item_count())).size(12),
        items,
    ]
    .spacing(6)
}
