use egui::Ui;

use crate::app::SimApp;

pub struct StatusBar;

impl StatusBar {
    pub fn show(app: &mut SimApp, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if app.model_state.loading {
                ui.spinner();
                ui.label("Running model…");
            } else if let Some(error) = app.model_state.error.clone() {
                ui.colored_label(egui::Color32::RED, error);
                if ui.small_button("✖").clicked() {
                    app.model_state.error = None;
                }
            } else if app.report.is_some() {
                ui.label("Model run complete.");
            } else {
                ui.weak("Ready.");
            }
        });
    }
}
