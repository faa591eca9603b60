//! Result view: charts, KPI table, and the annual waterfall tables.
//!
//! Everything rendered here comes from the pure derivations in
//! `filmsim_core::charts`; this module only plots rows.

use egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use filmsim_core::charts;
use filmsim_core::report::ModelReport;

use crate::app::SimApp;
use crate::util::fmt_usd;

const ROI_COLOR: Color32 = Color32::from_rgb(0x88, 0x84, 0xd8);
const IRR_COLOR: Color32 = Color32::from_rgb(0x82, 0xca, 0x9d);
const PRINCIPAL_COLOR: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
const PROFIT_COLOR: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);

pub struct ChartsPanel;

impl ChartsPanel {
    pub fn show(app: &mut SimApp, ui: &mut Ui) {
        let Some(report) = &app.report else {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.label("Run the model to see results.");
            });
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            Self::roi_irr_chart(report, ui);
            ui.add_space(16.0);
            Self::composition_chart(report, ui);
            ui.add_space(16.0);
            Self::cash_flow_chart(report, ui);
            ui.add_space(16.0);

            ui.heading("Breakeven");
            ui.label(format!(
                "Estimated gross receipts of {} required to break even (0% ROI).",
                fmt_usd(report.breakeven_receipts)
            ));
            ui.add_space(16.0);

            Self::kpi_table(report, ui);
            Self::waterfall_tables(report, ui);
            ui.add_space(24.0);
        });
    }

    fn roi_irr_chart(report: &ModelReport, ui: &mut Ui) {
        ui.heading("📊 ROI & IRR by Scenario");
        let rows = charts::roi_irr_rows(report);

        let roi_bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Bar::new(i as f64 - 0.18, row.roi)
                    .width(0.32)
                    .name(format!("{} ROI", row.label))
            })
            .collect();
        let irr_bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                // A missing IRR is already collapsed to zero here.
                Bar::new(i as f64 + 0.18, row.irr)
                    .width(0.32)
                    .name(format!("{} IRR", row.label))
            })
            .collect();

        Plot::new("roi_irr_chart")
            .legend(Legend::default())
            .height(260.0)
            .y_axis_label("%")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(roi_bars).name("ROI %").color(ROI_COLOR));
                plot_ui.bar_chart(BarChart::new(irr_bars).name("IRR %").color(IRR_COLOR));
            });
        Self::axis_caption(ui, rows.iter().map(|r| r.label.as_str()));
    }

    fn composition_chart(report: &ModelReport, ui: &mut Ui) {
        let rows = charts::composition_rows(report);
        if rows.is_empty() {
            return;
        }

        ui.heading("💼 Composition of Investor Returns");
        let principal_bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Bar::new(i as f64, row.principal)
                    .width(0.5)
                    .name(format!("{} principal", row.label))
            })
            .collect();
        let profit_bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Bar::new(i as f64, row.profit)
                    .width(0.5)
                    .name(format!("{} profit", row.label))
            })
            .collect();

        let principal_chart = BarChart::new(principal_bars)
            .name("Principal")
            .color(PRINCIPAL_COLOR);
        let profit_chart = BarChart::new(profit_bars)
            .name("Profit")
            .color(PROFIT_COLOR)
            .stack_on(&[&principal_chart]);

        Plot::new("composition_chart")
            .legend(Legend::default())
            .height(260.0)
            .y_axis_label("Total return ($)")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(principal_chart);
                plot_ui.bar_chart(profit_chart);
            });
        Self::axis_caption(ui, rows.iter().map(|r| r.label.as_str()));
    }

    fn cash_flow_chart(report: &ModelReport, ui: &mut Ui) {
        ui.heading("💰 Cash Flow (Base Case)");
        let points = charts::cash_flow_points(report);

        let annual: PlotPoints = points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.annual])
            .collect();
        let cumulative: PlotPoints = points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.cumulative])
            .collect();

        Plot::new("cash_flow_chart")
            .legend(Legend::default())
            .height(260.0)
            .x_axis_label("Year")
            .y_axis_label("Cash flow to equity ($)")
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(annual).name("Annual").color(ROI_COLOR));
                plot_ui.line(Line::new(cumulative).name("Cumulative").color(IRR_COLOR));
            });
        Self::axis_caption(ui, points.iter().map(|p| p.year.as_str()));
    }

    fn kpi_table(report: &ModelReport, ui: &mut Ui) {
        let rows = charts::kpi_rows(report);
        if rows.is_empty() {
            return;
        }

        ui.heading("Key Performance Indicators");
        egui::Grid::new("kpi_table")
            .num_columns(5)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Scenario");
                ui.strong("Gross Receipts");
                ui.strong("Total Return");
                ui.strong("ROI");
                ui.strong("IRR");
                ui.end_row();

                for row in &rows {
                    ui.label(&row.label);
                    ui.label(fmt_usd(row.gross_receipts));
                    ui.label(fmt_usd(row.total_return));
                    ui.label(&row.roi);
                    // "N/A" here, zero in the bar chart; both come from
                    // the same null.
                    ui.label(&row.irr);
                    ui.end_row();
                }
            });
        ui.add_space(16.0);
    }

    fn waterfall_tables(report: &ModelReport, ui: &mut Ui) {
        let tables = charts::waterfall_tables(report);
        if tables.is_empty() {
            return;
        }

        ui.heading("Detailed Annual Waterfall");
        for (idx, table) in tables.iter().enumerate() {
            egui::CollapsingHeader::new(format!("Analysis for: {}", table.scenario_label))
                .default_open(false)
                .show(ui, |ui| {
                    egui::Grid::new(format!("waterfall_{idx}"))
                        .num_columns(table.years.len() + 1)
                        .striped(true)
                        .spacing([18.0, 4.0])
                        .show(ui, |ui| {
                            ui.strong("Line Item");
                            for year in &table.years {
                                ui.strong(year);
                            }
                            ui.end_row();

                            for (item, cells) in &table.rows {
                                ui.label(item);
                                for cell in cells {
                                    match cell {
                                        Some(amount) => ui.label(fmt_usd(*amount)),
                                        None => ui.label("—"),
                                    };
                                }
                                ui.end_row();
                            }
                        });
                });
        }
    }

    /// One-line x-axis caption: bar/point labels left to right.
    fn axis_caption<'a>(ui: &mut Ui, labels: impl Iterator<Item = &'a str>) {
        let joined = labels.collect::<Vec<_>>().join("  ·  ");
        ui.small(format!("Left to right: {joined}"));
    }
}
