//! Collapsible form of model parameters.

use egui::Ui;
use filmsim_core::inputs::Group;

use crate::app::SimApp;

pub struct InputPanel;

impl InputPanel {
    /// Label column width for alignment
    const LABEL_WIDTH: f32 = 170.0;
    /// Numeric input field width
    const INPUT_WIDTH: f32 = 110.0;

    pub fn show(app: &mut SimApp, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            // Deterministic default: the first group starts open, the
            // rest start collapsed.
            for (idx, group) in Group::all().iter().enumerate() {
                egui::CollapsingHeader::new(group.label())
                    .default_open(idx == 0)
                    .show(ui, |ui| {
                        egui::Grid::new(group.label())
                            .num_columns(2)
                            .spacing([10.0, 6.0])
                            .show(ui, |ui| {
                                for &field in group.fields() {
                                    Self::field_row(app, ui, field);
                                }
                            });
                    });
                ui.add_space(4.0);
            }

            ui.add_space(12.0);

            let run_clicked = ui
                .add_enabled(
                    !app.model_state.loading,
                    egui::Button::new(if app.model_state.loading {
                        "Running…"
                    } else {
                        "Run Model"
                    })
                    .min_size(egui::vec2(ui.available_width(), 28.0)),
                )
                .clicked();
            if run_clicked {
                let ctx = ui.ctx().clone();
                app.run_model(&ctx);
            }

            ui.add_space(12.0);
        });
    }

    fn field_row(app: &mut SimApp, ui: &mut Ui, field: filmsim_core::inputs::Field) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.set_min_width(Self::LABEL_WIDTH);
            ui.label(field.label());
        });

        let buffer = app.buffers.entry(field).or_default();
        let changed = ui
            .add(
                egui::TextEdit::singleline(buffer)
                    .desired_width(Self::INPUT_WIDTH)
                    .hint_text("0"),
            )
            .changed();
        if changed {
            // Forwarded as (field, raw text); the model does the numeric
            // coercion, NaN included.
            let raw = buffer.clone();
            app.inputs.apply(field, &raw);
        }
        ui.end_row();
    }
}
