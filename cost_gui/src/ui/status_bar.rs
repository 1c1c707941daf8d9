//! Status Bar (Bottom)
//!
//! Last status message on the left; lookup policy and estimate size on the right.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::{App, Message};

/// Render the status bar
pub fn view_status_bar(app: &App) -> Element<'_, Message> {
    row![
        text(app.status.as_str()).size(10),
        Space::new().width(Length::Fill),
        text(format!("Lookup: {}", app.policy())).size(10).color([0.4, 0.4, 0.4]),
        Space::new().width(12),
        text(format!("Items: {}", app.estimate.item_count())).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
