//! Element rows
//!
//! One editable row per element:
//! family | size | brand | length (m) | quantity (pz) | weight | remove
//!
//! The family picker issues a single message; the app switches the family and
//! resets the size together, so a row never shows a size from another family.

use std::collections::HashMap;

use iced::widget::{button, column, container, pick_list, row, text, text_input, Column};
use iced::{Alignment, Element, Length, Padding};
use uuid::Uuid;

use calc_core::estimate::{Element as LineItem, Estimate};
use calc_core::format::{format_length, format_weight};
use calc_core::profiles::reference_table;

use crate::{Message, RowInputs};

/// Render all element rows in list order
pub fn view<'a>(estimate: &'a Estimate, row_inputs: &'a HashMap<Uuid, RowInputs>) -> Element<'a, Message> {
    let mut rows: Column<'_, Message> = column![view_column_labels()].spacing(6);

    for item in estimate.elements() {
        rows = rows.push(view_row(item, row_inputs.get(&item.id())));
    }

    rows.into()
}

fn view_column_labels() -> Element<'static, Message> {
    let label = |s: &'static str, width: f32| text(s).size(10).color([0.5, 0.5, 0.5]).width(Length::Fixed(width));

    row![
        label("Perfil", 160.0),
        label("Medida", 120.0),
        label("Marca", 120.0),
        label("Largo", 90.0),
        label("Cantidad", 90.0),
        label("Peso", 90.0),
    ]
    .spacing(8)
    .padding(Padding::from([0, 10]))
    .into()
}

fn view_row<'a>(item: &'a LineItem, inputs: Option<&'a RowInputs>) -> Element<'a, Message> {
    let id = item.id();
    let table = reference_table();

    let families: Vec<String> = table.family_names().iter().map(|s| s.to_string()).collect();
    let sizes: Vec<String> = table
        .family(item.profile_family())
        .map(|f| f.size_labels().iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    // Numeric inputs show the raw text the user typed when available
    let (length_text, quantity_text) = match inputs {
        Some(inputs) => (inputs.length.clone(), inputs.quantity.clone()),
        None => (format_length(item.length_m()), item.quantity().to_string()),
    };

    let weight_color = if item.is_resolved() {
        [0.1, 0.1, 0.1]
    } else {
        [0.8, 0.2, 0.2]
    };

    let content = row![
        pick_list(families, Some(item.profile_family().to_string()), move |family| {
            Message::FamilySelected(id, family)
        })
        .width(Length::Fixed(160.0))
        .text_size(11),
        pick_list(sizes, Some(item.size().to_string()), move |size| {
            Message::SizeSelected(id, size)
        })
        .width(Length::Fixed(120.0))
        .text_size(11),
        text_input("Marca", item.brand())
            .on_input(move |brand| Message::BrandChanged(id, brand))
            .width(Length::Fixed(120.0))
            .padding(4)
            .size(11),
        row![
            text_input("0", &length_text)
                .on_input(move |s| Message::LengthChanged(id, s))
                .padding(4)
                .size(11),
            text("m").size(10),
        ]
        .spacing(4)
        .align_y(Alignment::Center)
        .width(Length::Fixed(90.0)),
        row![
            text_input("1", &quantity_text)
                .on_input(move |s| Message::QuantityChanged(id, s))
                .padding(4)
                .size(11),
            text("pz").size(10),
        ]
        .spacing(4)
        .align_y(Alignment::Center)
        .width(Length::Fixed(90.0)),
        text(format!("{} kg", format_weight(item.weight_kg())))
            .size(12)
            .color(weight_color)
            .width(Length::Fixed(90.0)),
        button(text("✕").size(11))
            .on_press(Message::RemoveElement(id))
            .padding(Padding::from([2, 8]))
            .style(button::danger),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(content)
        .padding(Padding::from([6, 10]))
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
