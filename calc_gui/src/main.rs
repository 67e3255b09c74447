//! # StructCalc GUI Application
//!
//! Form-style interface for the steel weight estimator.
//! Built with Iced for native desktops and the browser (WASM).
//!
//! One row per element (family, size, brand, length, quantity, weight) plus a
//! summary panel with the totals and the report download.

mod download;
mod ui;

use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::{column, container, rule, scrollable};
use iced::{Element, Length, Task};
use uuid::Uuid;

use calc_core::estimate::{ElementField, Estimate};
use calc_core::format::format_length;
use calc_core::input::{parse_length, parse_price, parse_quantity};

/// Raw text of a row's numeric inputs, kept so partial entries ("2.") survive re-render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowInputs {
    pub length: String,
    pub quantity: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    AddElement,
    FamilySelected(Uuid, String),
    SizeSelected(Uuid, String),
    BrandChanged(Uuid, String),
    LengthChanged(Uuid, String),
    QuantityChanged(Uuid, String),
    RemoveElement(Uuid),
    PriceChanged(String),
    DownloadReport,
    /// Native save dialog finished: `Ok(None)` means cancelled
    ReportSaved(Result<Option<PathBuf>, String>),
}

pub struct App {
    pub estimate: Estimate,
    pub row_inputs: HashMap<Uuid, RowInputs>,
    pub price_input: String,
    pub status: String,
}

impl App {
    fn new() -> Self {
        let estimate = Estimate::new();
        let price_input = estimate.unit_price().to_string();
        App {
            estimate,
            row_inputs: HashMap::new(),
            price_input,
            status: "Ready".to_string(),
        }
    }

    fn title(&self) -> String {
        format!("StructCalc - {} elementos", self.estimate.len())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddElement => {
                let id = self.estimate.add_element();
                if let Some(element) = self.estimate.element(id) {
                    self.row_inputs.insert(
                        id,
                        RowInputs {
                            length: format_length(element.length_m()),
                            quantity: element.quantity().to_string(),
                        },
                    );
                }
            }
            Message::FamilySelected(id, family) => {
                self.estimate.change_profile_family(id, family);
            }
            Message::SizeSelected(id, size) => {
                self.estimate.update_element(id, ElementField::Size(size));
            }
            Message::BrandChanged(id, brand) => {
                self.estimate.update_element(id, ElementField::Brand(brand));
            }
            Message::LengthChanged(id, text) => {
                self.estimate.update_element(id, ElementField::Length(parse_length(&text)));
                if let Some(inputs) = self.row_inputs.get_mut(&id) {
                    inputs.length = text;
                }
            }
            Message::QuantityChanged(id, text) => {
                self.estimate.update_element(id, ElementField::Quantity(parse_quantity(&text)));
                if let Some(inputs) = self.row_inputs.get_mut(&id) {
                    inputs.quantity = text;
                }
            }
            Message::RemoveElement(id) => {
                self.estimate.remove_element(id);
                self.row_inputs.remove(&id);
            }
            Message::PriceChanged(text) => {
                self.estimate.set_unit_price(parse_price(&text));
                self.price_input = text;
            }
            Message::DownloadReport => {
                let report = self.estimate.generate_report();
                tracing::info!(file = %report.file_name, "report requested");

                #[cfg(not(target_arch = "wasm32"))]
                {
                    self.status = "Choosing where to save the report...".to_string();
                    return Task::perform(download::save_with_dialog(report), Message::ReportSaved);
                }

                #[cfg(target_arch = "wasm32")]
                {
                    self.status = match download::download_report(&report) {
                        Ok(()) => format!("Downloaded {}", report.file_name),
                        Err(e) => format!("Download failed: {}", e),
                    };
                }
            }
            Message::ReportSaved(result) => {
                self.status = match result {
                    Ok(Some(path)) => format!("Saved {}", path.display()),
                    Ok(None) => "Save cancelled".to_string(),
                    Err(e) => {
                        tracing::error!(error = %e, "report save failed");
                        format!("Save failed: {}", e)
                    }
                };
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = if self.estimate.is_empty() {
            ui::empty_state::view()
        } else {
            column![
                ui::element_rows::view(&self.estimate, &self.row_inputs),
                ui::summary_panel::view(self.estimate.summary(), &self.estimate.settings().currency_symbol),
            ]
            .spacing(16)
            .into()
        };

        let content = column![
            ui::toolbar::view_header(),
            ui::toolbar::view_toolbar(&self.price_input, &self.estimate.settings().currency_symbol),
            rule::horizontal(1),
            scrollable(body).height(Length::Fill),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(8)
        .padding(12);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() -> iced::Result {
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window_size((960.0, 680.0))
        .run()
}
