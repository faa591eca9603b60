//! Floating comparable-title search window.
//!
//! Optional affordance layered on top of the core flow: a free-text query
//! against `/search`, showing a revenue-range summary and the closest
//! matching titles. Independent loading state from the model runner.

use egui::Context;

use crate::app::SimApp;
use crate::util::fmt_usd_millions;

pub struct SearchWindow;

impl SearchWindow {
    pub fn show(app: &mut SimApp, ctx: &Context) {
        if !app.search_open {
            return;
        }

        let mut open = true;
        egui::Window::new("🔍 Comparable Titles")
            .open(&mut open)
            .default_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let edit = egui::TextEdit::singleline(&mut app.search_query)
                        .hint_text("Ask about a movie (e.g. cast, title, director)…")
                        .desired_width(300.0);
                    let submitted = ui
                        .add(edit)
                        .lost_focus()
                        .then(|| ui.input(|i| i.key_pressed(egui::Key::Enter)))
                        .unwrap_or(false);

                    let ask_clicked = ui
                        .add_enabled(
                            !app.search_state.loading,
                            egui::Button::new(if app.search_state.loading {
                                "Searching…"
                            } else {
                                "Ask"
                            }),
                        )
                        .clicked();

                    if (submitted || ask_clicked) && !app.search_state.loading {
                        let ctx = ui.ctx().clone();
                        app.run_search(&ctx);
                    }
                });

                if let Some(error) = &app.search_state.error {
                    ui.colored_label(egui::Color32::RED, error);
                }

                let Some(response) = &app.search_response else {
                    return;
                };

                if let Some(stats) = &response.revenue_millions {
                    ui.add_space(8.0);
                    ui.strong("Estimated Revenue Range:");
                    egui::Grid::new("revenue_stats")
                        .num_columns(2)
                        .spacing([20.0, 2.0])
                        .show(ui, |ui| {
                            // The stats block is already in millions.
                            ui.label("Min:");
                            ui.label(format!("${:.2}M", stats.min));
                            ui.end_row();
                            ui.label("Max:");
                            ui.label(format!("${:.2}M", stats.max));
                            ui.end_row();
                            ui.label("Median:");
                            ui.label(format!("${:.2}M", stats.median));
                            ui.end_row();
                            ui.label("Mean:");
                            ui.label(format!("${:.2}M", stats.mean));
                            ui.end_row();
                        });
                    ui.small("Based on most similar past movies.");
                }

                if !response.top_results.is_empty() {
                    ui.add_space(8.0);
                    ui.strong("Closest matches:");
                    egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                        for matched in &response.top_results {
                            ui.add_space(4.0);
                            ui.horizontal(|ui| {
                                ui.strong(&matched.title);
                                if let Some(revenue) = matched.revenue {
                                    ui.weak(fmt_usd_millions(revenue));
                                }
                            });
                            if let Some(overview) = &matched.overview {
                                ui.small(overview);
                            }
                        }
                    });
                }
            });

        if !open {
            app.search_open = false;
        }
    }
}
