//! Status Bar (Bottom)
//!
//! Displays the last status message (report saved, cancelled, errors).

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str) -> Element<'_, Message> {
    row![
        text(status).size(10),
        Space::new().width(Length::Fill),
        text(concat!("v", env!("CARGO_PKG_VERSION"))).size(10).color([0.6, 0.6, 0.6]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
