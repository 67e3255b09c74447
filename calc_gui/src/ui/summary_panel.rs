//! Summary Panel
//!
//! Element count, total weight and estimated cost, with the report download.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::estimate::EstimateSummary;
use calc_core::format::{format_currency, format_weight};

use crate::Message;

/// Render the totals panel
pub fn view<'a>(summary: EstimateSummary, currency_symbol: &'a str) -> Element<'a, Message> {
    let figures = row![
        view_figure(summary.element_count.to_string(), "elementos"),
        view_figure(format_weight(summary.total_weight_kg), "kg total"),
        view_figure(
            format!("{}{}", currency_symbol, format_currency(summary.total_cost)),
            "costo estimado"
        ),
    ]
    .spacing(24);

    let content = column![
        figures,
        Space::new().height(12),
        button(text("Descargar reporte").size(12))
            .on_press(Message::DownloadReport)
            .padding(Padding::from([8, 16]))
            .style(button::primary),
    ]
    .align_x(Alignment::Center);

    container(content)
        .padding(16)
        .center_x(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn view_figure(value: String, caption: &'static str) -> Element<'static, Message> {
    column![
        text(value).size(24),
        text(caption).size(11).color([0.5, 0.5, 0.5]),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}
