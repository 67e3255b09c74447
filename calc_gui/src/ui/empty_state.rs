//! Empty list placeholder

use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

pub fn view() -> Element<'static, Message> {
    let content = column![
        text("Comienza tu cálculo").size(18),
        text("Agrega elementos metálicos para calcular el peso total")
            .size(12)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(12),
        button(text("+ Agregar primer elemento").size(12))
            .on_press(Message::AddElement)
            .padding(Padding::from([8, 16]))
            .style(button::primary),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    container(content)
        .padding(48)
        .center_x(Length::Fill)
        .into()
}
