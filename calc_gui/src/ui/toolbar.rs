//! Toolbar component
//!
//! Application header, the "add element" action and the unit price input.

use iced::widget::{button, column, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    column![
        text("StructCalc").size(28),
        text("Calculadora de peso para estructuras metálicas").size(12).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2)
    .into()
}

/// Render the toolbar: add button on the left, price per kg on the right
pub fn view_toolbar<'a>(price_input: &'a str, currency_symbol: &'a str) -> Element<'a, Message> {
    row![
        button(text("+ Agregar elemento").size(12))
            .on_press(Message::AddElement)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
        Space::new().width(Length::Fill),
        text("Precio/kg:").size(12),
        Space::new().width(6),
        text(currency_symbol).size(12),
        text_input("0", price_input)
            .on_input(Message::PriceChanged)
            .width(Length::Fixed(80.0))
            .padding(4)
            .size(12),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
