//! Items Panel (Left Sidebar)
//!
//! - Equipment editors (reactor, column, exchanger, compressor)
//! - Utilities calculator
//! - The running estimate with its item labels
//! - Factor lookup policy

use iced::widget::{button, column, container, pick_list, rule, scrollable, text, Button, Column, Space};
use iced::{Element, Length, Padding};

use cost_core::LookupPolicy;

use crate::forms::EquipmentKind;
use crate::{App, Message, Selection};

/// Render the items panel (left sidebar)
pub fn view_items_panel(app: &App, width: f32) -> Element<'_, Message> {
    let mut panel_content: Column<'_, Message> = column![text("Equipment").size(12)].spacing(2);

    for kind in EquipmentKind::ALL {
        let selection = Selection::Equipment(kind);
        panel_content = panel_content.push(nav_button(kind.display_name(), selection, app.selection == selection));
    }

    panel_content = panel_content
        .push(Space::new().height(4))
        .push(rule::horizontal(1))
        .push(nav_button("Utilities", Selection::Utilities, app.selection == Selection::Utilities))
        .push(rule::horizontal(1));

    // ===== Estimate Section =====
    let estimate_title = format!("Estimate ({})", app.estimate.item_count());
    panel_content = panel_content.push(nav_button(
        estimate_title,
        Selection::Estimate,
        app.selection == Selection::Estimate,
    ));

    let mut labels: Column<'_, Message> = column![].spacing(2).padding(Padding::from([4, 8]));
    for (_, item) in app.estimate.sorted_items() {
        labels = labels.push(text(item.label().to_string()).size(10));
    }
    if app.estimate.item_count() == 0 {
        labels = labels.push(text("(none)").size(10).color([0.5, 0.5, 0.5]));
    }
    panel_content = panel_content.push(labels).push(rule::horizontal(1));

    panel_content = panel_content.push(
        column![
            text("Lookup policy").size(11),
            pick_list(&LookupPolicy::ALL[..], Some(app.policy()), Message::PolicySelected)
                .width(Length::Fill)
                .text_size(11),
        ]
        .spacing(4)
        .padding(Padding::from([6, 0])),
    );

    container(scrollable(panel_content.padding(4)))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}

fn nav_button<'a>(title: impl Into<String>, selection: Selection, selected: bool) -> Button<'a, Message> {
    let style = if selected { button::primary } else { button::secondary };
    button(text(title.into()).size(11))
        .on_press(Message::Select(selection))
        .padding(Padding::from([4, 8]))
        .style(style)
        .width(Length::Fill)
}
