//! Application state and the top-level frame layout.

use std::collections::BTreeMap;

use egui::Context;
use filmsim_core::inputs::{Field, Group, Inputs};
use filmsim_core::report::ModelReport;
use filmsim_core::request::ModelRequest;
use filmsim_core::search::{SearchRequest, SearchResponse};
use tracing::info;

use crate::runner::{
    ModelRunner, RunState, RunnerEvent, model_failure_message, search_failure_message,
};
use crate::screens::{ChartsPanel, InputPanel, SearchWindow, StatusBar};

/// Main application state.
///
/// The inputs/report pair lives here and is passed down to the panels;
/// children request changes through `&mut` access in their `show` calls
/// but nothing else holds a reference across frames.
pub struct SimApp {
    pub inputs: Inputs,
    /// Raw edit buffers, one per field. Coercion to numbers happens in
    /// [`Inputs::apply`] on every change.
    pub buffers: BTreeMap<Field, String>,

    runner: ModelRunner,
    pub model_state: RunState,
    /// Result of the most recent successful run. Replaced wholesale on
    /// each run, left untouched on failure.
    pub report: Option<ModelReport>,

    // Comparable-title search, independent of the model runner.
    pub search_open: bool,
    pub search_query: String,
    pub search_state: RunState,
    pub search_response: Option<SearchResponse>,
}

impl SimApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, runner: ModelRunner) -> Self {
        let inputs = Inputs::default();
        let buffers = Group::all()
            .iter()
            .flat_map(|g| g.fields().iter().copied())
            .map(|field| (field, trim_number(inputs.get(field))))
            .collect();

        Self {
            inputs,
            buffers,
            runner,
            model_state: RunState::default(),
            report: None,
            search_open: false,
            search_query: String::new(),
            search_state: RunState::default(),
            search_response: None,
        }
    }

    /// Serializes the current inputs and submits one model run.
    pub fn run_model(&mut self, ctx: &Context) {
        let request = ModelRequest::from_inputs(&self.inputs);
        let seq = self.runner.submit_model(request, ctx.clone());
        self.model_state.begin(seq);
    }

    /// Submits one comparable-title search for the current query.
    pub fn run_search(&mut self, ctx: &Context) {
        let query = self.search_query.trim();
        if query.is_empty() {
            return;
        }
        let seq = self
            .runner
            .submit_search(SearchRequest::new(query), ctx.clone());
        self.search_state.begin(seq);
    }

    /// Applies every backend call settled since the last frame.
    fn drain_runner(&mut self) {
        for event in self.runner.poll() {
            match event {
                RunnerEvent::Model { seq, result } => {
                    if let Some(report) =
                        self.model_state.settle(seq, result, model_failure_message)
                    {
                        info!(seq, scenarios = report.scenarios.len(), "model run applied");
                        self.report = Some(report);
                    }
                }
                RunnerEvent::Search { seq, result } => {
                    if let Some(response) =
                        self.search_state.settle(seq, result, search_failure_message)
                    {
                        self.search_response = Some(response);
                    }
                }
            }
        }
    }
}

/// Buffer text for a seed value: integers without a trailing ".0".
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

impl eframe::App for SimApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.drain_runner();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🎬 Film Finance Simulator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.search_open, "🔍 Comparable Titles")
                        .clicked()
                    {
                        self.search_open = !self.search_open;
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            StatusBar::show(self, ui);
        });

        egui::SidePanel::left("input_panel")
            .resizable(true)
            .default_width(340.0)
            .width_range(260.0..=500.0)
            .show(ctx, |ui| {
                InputPanel::show(self, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ChartsPanel::show(self, ui);
        });

        SearchWindow::show(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trim_number_drops_trailing_zero_fraction() {
        assert_eq!(trim_number(3_000.0), "3000");
        assert_eq!(trim_number(0.75), "0.75");
        assert_eq!(trim_number(1.3), "1.3");
    }
}
