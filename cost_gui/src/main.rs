//! # Equicost GUI Application
//!
//! Desktop form for process equipment cost estimates, built with Iced.
//!
//! ## Layout
//!
//! - Left: equipment selector, utilities, the running estimate, lookup policy
//! - Centre: the form for the selected editor
//! - Right: every intermediate and the total, or the error
//! - Bottom: status line
//!
//! Every edit recalculates immediately. All formulas, factors and validation
//! live in `cost_core`; this crate only parses text fields and renders results.

use iced::widget::{column, container, row};
use iced::{Element, Length, Size, Task, Theme};
use uuid::Uuid;

use cost_core::calculations::{utilities, UtilitiesResult};
use cost_core::factors::{CompressorMaterial, DriveType, ExchangerMaterials, TrayMaterial, TrayType, VesselMaterial};
use cost_core::{CostError, EquipmentResult, Estimate, EstimateSummary, LookupPolicy};

mod forms;
mod ui;

use forms::{EquipmentKind, Field, Forms};

/// Which editor is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Equipment(EquipmentKind),
    Utilities,
    Estimate,
}

/// Estimate header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Estimator,
    JobId,
    Client,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(Selection),
    PolicySelected(LookupPolicy),
    TextChanged(Field, String),
    ReactorMaterialSelected(VesselMaterial),
    ColumnMaterialSelected(VesselMaterial),
    TrayTypeSelected(TrayType),
    TrayMaterialSelected(TrayMaterial),
    ExchangerMaterialsSelected(ExchangerMaterials),
    DriveSelected(DriveType),
    CompressorMaterialSelected(CompressorMaterial),
    MetaChanged(MetaField, String),
    AddToEstimate,
    RemoveItem(Uuid),
}

/// What the results panel shows
#[derive(Debug, Clone)]
pub enum Outcome {
    Equipment(EquipmentResult),
    Utilities(UtilitiesResult),
    Estimate(EstimateSummary),
    Error(CostError),
}

pub struct App {
    pub selection: Selection,
    pub forms: Forms,
    pub estimate: Estimate,
    pub outcome: Outcome,
    pub status: String,
}

impl App {
    fn new() -> Self {
        let selection = Selection::Equipment(EquipmentKind::Reactor);
        let forms = Forms::default();
        let estimate = Estimate::default();
        let outcome = evaluate(selection, &forms, &estimate);
        App {
            selection,
            forms,
            estimate,
            outcome,
            status: "Ready".to_string(),
        }
    }

    pub fn policy(&self) -> LookupPolicy {
        self.estimate.settings.lookup_policy
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Select(selection) => self.selection = selection,
            Message::PolicySelected(policy) => {
                self.estimate.settings.lookup_policy = policy;
                self.estimate.touch();
            }
            Message::TextChanged(field, value) => self.forms.set(field, value),
            Message::ReactorMaterialSelected(m) => self.forms.reactor.material = m,
            Message::ColumnMaterialSelected(m) => self.forms.column.material = m,
            Message::TrayTypeSelected(t) => self.forms.column.tray_type = t,
            Message::TrayMaterialSelected(m) => self.forms.column.tray_material = m,
            Message::ExchangerMaterialsSelected(m) => self.forms.exchanger.materials = m,
            Message::DriveSelected(d) => self.forms.compressor.drive = d,
            Message::CompressorMaterialSelected(m) => self.forms.compressor.material = m,
            Message::MetaChanged(field, value) => {
                let meta = &mut self.estimate.meta;
                match field {
                    MetaField::Estimator => meta.estimator = value,
                    MetaField::JobId => meta.job_id = value,
                    MetaField::Client => meta.client = value,
                }
                self.estimate.touch();
            }
            Message::AddToEstimate => self.add_to_estimate(),
            Message::RemoveItem(id) => {
                if let Some(item) = self.estimate.remove_item(&id) {
                    self.status = format!("Removed {}", item.label());
                }
            }
        }

        self.recalculate();
        Task::none()
    }

    fn add_to_estimate(&mut self) {
        let Selection::Equipment(kind) = self.selection else {
            return;
        };
        match self.forms.item(kind).and_then(|item| item.calculate(self.policy()).map(|_| item)) {
            Ok(item) => {
                self.status = format!("Added {} to estimate", item.label());
                self.estimate.add_item(item);
            }
            Err(e) => self.status = format!("Not added: {}", e),
        }
    }

    fn recalculate(&mut self) {
        self.outcome = evaluate(self.selection, &self.forms, &self.estimate);
    }

    fn view(&self) -> Element<'_, Message> {
        let main_content = row![
            ui::items_panel::view_items_panel(self, 220.0),
            ui::input_panel::view_input_panel(self, 0.5),
            ui::results_panel::view_results_panel(self, 0.5),
        ]
        .spacing(8)
        .height(Length::Fill);

        container(column![main_content, ui::status_bar::view_status_bar(self)].spacing(4))
            .padding(8)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Price whatever the open editor shows.
fn evaluate(selection: Selection, forms: &Forms, estimate: &Estimate) -> Outcome {
    let policy = estimate.settings.lookup_policy;
    let outcome = match selection {
        Selection::Equipment(kind) => forms
            .item(kind)
            .and_then(|item| item.calculate(policy))
            .map(Outcome::Equipment),
        Selection::Utilities => forms
            .utilities
            .to_input()
            .and_then(|input| utilities::calculate(&input))
            .map(Outcome::Utilities),
        Selection::Estimate => estimate.evaluate().map(Outcome::Estimate),
    };
    outcome.unwrap_or_else(Outcome::Error)
}

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() -> InitResult {
    let filter = tracing_subscriber::EnvFilter::try_from_env("EQUICOST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() -> InitResult {
    Ok(())
}

fn main() -> iced::Result {
    if let Err(error) = init_tracing() {
        eprintln!("equicost-gui: failed to initialize tracing subscriber: {error}");
    }

    iced::application(App::new, App::update, App::view)
        .title("Equicost - Equipment Cost Estimator")
        .theme(App::theme)
        .window_size(Size::new(1280.0, 800.0))
        .run()
}
