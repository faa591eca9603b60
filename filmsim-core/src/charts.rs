//! Chart- and table-ready projections of a [`ModelReport`].
//!
//! Everything here is a pure function of the report; the UI layer only
//! plots rows it gets from this module. Two deliberate asymmetries from
//! the source system are preserved: a missing IRR is plotted as zero in
//! the bar chart but printed as "N/A" in the KPI table.

use crate::report::ModelReport;

/// One grouped bar per scenario in the ROI/IRR chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiIrrRow {
    pub label: String,
    pub roi: f64,
    /// Missing IRR collapses to `0.0` here, not "N/A".
    pub irr: f64,
}

/// One stacked bar per scenario in the investor-composition chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionRow {
    pub label: String,
    pub principal: f64,
    pub profit: f64,
}

/// One x position on the cash-flow line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowPoint {
    pub year: String,
    pub annual: f64,
    pub cumulative: f64,
}

/// One formatted row of the KPI table.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiRow {
    pub label: String,
    pub gross_receipts: f64,
    pub total_return: f64,
    /// Already formatted, e.g. "12.5%".
    pub roi: String,
    /// Already formatted, "N/A" when the IRR is undefined.
    pub irr: String,
}

/// Year-by-year waterfall table for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallTable {
    pub scenario_label: String,
    /// Column headers: sorted union of year keys across all line items.
    pub years: Vec<String>,
    /// (line item, amount per year column; `None` renders as a dash).
    pub rows: Vec<(String, Vec<Option<f64>>)>,
}

pub fn roi_irr_rows(report: &ModelReport) -> Vec<RoiIrrRow> {
    report
        .scenarios
        .iter()
        .enumerate()
        .map(|(i, key)| RoiIrrRow {
            label: report.label_for(key).to_string(),
            roi: report.roi_percent.get(i).copied().unwrap_or(0.0),
            irr: report
                .irr_percent
                .get(i)
                .copied()
                .flatten()
                .unwrap_or(0.0),
        })
        .collect()
}

/// Rows for every scenario key present in the composition mapping, in the
/// report's scenario order; keys unknown to `scenarios` are appended.
pub fn composition_rows(report: &ModelReport) -> Vec<CompositionRow> {
    let mut rows = Vec::new();
    let mut remaining: Vec<&String> = report.investor_composition.keys().collect();

    for key in &report.scenarios {
        if let Some(comp) = report.investor_composition.get(key) {
            remaining.retain(|k| *k != key);
            rows.push(CompositionRow {
                label: report.label_for(key).to_string(),
                principal: comp.principal,
                profit: comp.profit,
            });
        }
    }
    for key in remaining {
        let comp = &report.investor_composition[key];
        rows.push(CompositionRow {
            label: report.label_for(key).to_string(),
            principal: comp.principal,
            profit: comp.profit,
        });
    }
    rows
}

pub fn cash_flow_points(report: &ModelReport) -> Vec<CashFlowPoint> {
    report
        .cash_flows
        .years
        .iter()
        .enumerate()
        .map(|(i, year)| CashFlowPoint {
            year: year.clone(),
            annual: report.cash_flows.annual.get(i).copied().unwrap_or(0.0),
            cumulative: report.cash_flows.cumulative.get(i).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Formatted KPI rows, one per scenario key in the summary mapping, in
/// the report's scenario order; keys unknown to `scenarios` are appended.
/// Empty when the backend did not send a KPI summary.
pub fn kpi_rows(report: &ModelReport) -> Vec<KpiRow> {
    let Some(summary) = &report.kpi_summary else {
        return Vec::new();
    };

    let make_row = |key: &String| {
        let kpi = &summary[key];
        KpiRow {
            label: report.label_for(key).to_string(),
            gross_receipts: kpi.gross_receipts,
            total_return: kpi.total_return,
            roi: format!("{:.1}%", kpi.roi),
            irr: match kpi.irr {
                Some(irr) => format!("{irr:.1}%"),
                None => "N/A".to_string(),
            },
        }
    };

    let mut rows = Vec::new();
    let mut remaining: Vec<&String> = summary.keys().collect();

    for key in &report.scenarios {
        if summary.contains_key(key) {
            remaining.retain(|k| *k != key);
            rows.push(make_row(key));
        }
    }
    for key in remaining {
        rows.push(make_row(key));
    }
    rows
}

/// Builds the annual waterfall table for one scenario, or `None` when the
/// report has no waterfall section or the scenario is absent from it.
pub fn waterfall_table(report: &ModelReport, scenario: &str) -> Option<WaterfallTable> {
    let per_item = report.annual_waterfall.as_ref()?.get(scenario)?;

    // Union, not intersection: a line item missing a year still gets a
    // column, rendered as a placeholder.
    let mut years: Vec<String> = per_item
        .values()
        .flat_map(|by_year| by_year.keys().cloned())
        .collect();
    years.sort_by(|a, b| year_sort_key(a).cmp(&year_sort_key(b)));
    years.dedup();

    let rows = per_item
        .iter()
        .map(|(item, by_year)| {
            let cells = years.iter().map(|y| by_year.get(y).copied()).collect();
            (item.clone(), cells)
        })
        .collect();

    Some(WaterfallTable {
        scenario_label: report.label_for(scenario).to_string(),
        years,
        rows,
    })
}

/// All waterfall tables in presentation order: scenario-ordered keys
/// first, then waterfall keys absent from the scenario list. Empty when
/// the report carries no waterfall section or the section has no
/// scenarios, so the caller can skip the whole block.
pub fn waterfall_tables(report: &ModelReport) -> Vec<WaterfallTable> {
    let Some(per_scenario) = &report.annual_waterfall else {
        return Vec::new();
    };

    let mut remaining: Vec<&String> = per_scenario.keys().collect();
    let mut ordered: Vec<&String> = Vec::new();
    for key in &report.scenarios {
        if per_scenario.contains_key(key) {
            remaining.retain(|k| *k != key);
            ordered.push(key);
        }
    }
    ordered.extend(remaining);

    ordered
        .into_iter()
        .filter_map(|key| waterfall_table(report, key))
        .collect()
}

/// Natural ordering for "Year N" style keys: numeric suffix first, then
/// the raw string, so "Year 10" sorts after "Year 2".
fn year_sort_key(year: &str) -> (u32, String) {
    let number = year
        .rsplit(' ')
        .next()
        .and_then(|tail| tail.parse().ok())
        .unwrap_or(u32::MAX);
    (number, year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report_json() -> serde_json::Value {
        serde_json::json!({
            "scenarios": ["base_case", "best_case"],
            "scenario_labels": {"base_case": "Base Case", "best_case": "Best Case"},
            "roi_percent": [12.5, 48.1],
            "irr_percent": [12.5, null],
            "roi_series": [],
            "irr_series": [],
            "breakeven_receipts": 10_000_000,
            "cash_flows": {
                "years": ["Year 0", "Year 1"],
                "annual": [-100.0, 250.0],
                "cumulative": [-100.0, 150.0]
            }
        })
    }

    fn report() -> ModelReport {
        serde_json::from_value(report_json()).unwrap()
    }

    #[test]
    fn missing_irr_plots_as_zero_in_bars() {
        let rows = roi_irr_rows(&report());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].irr, 12.5);
        assert_eq!(rows[1].irr, 0.0);
        assert_eq!(rows[1].roi, 48.1);
        assert_eq!(rows[1].label, "Best Case");
    }

    #[test]
    fn missing_irr_formats_as_na_in_kpi_table() {
        let mut json = report_json();
        json["kpi_summary"] = serde_json::json!({
            "base_case": {
                "gross_receipts": 11.0, "total_return": 5.0, "roi": 12.5, "irr": 12.5
            },
            "best_case": {
                "gross_receipts": 15.0, "total_return": 8.0, "roi": 48.1, "irr": null
            }
        });
        let report: ModelReport = serde_json::from_value(json).unwrap();

        let rows = kpi_rows(&report);
        assert_eq!(rows[0].irr, "12.5%");
        assert_eq!(rows[1].irr, "N/A");
        assert_eq!(rows[0].roi, "12.5%");
    }

    #[test]
    fn kpi_rows_keep_keys_missing_from_scenario_list() {
        let mut json = report_json();
        json["kpi_summary"] = serde_json::json!({
            "base_case": {
                "gross_receipts": 11.0, "total_return": 5.0, "roi": 12.5, "irr": 12.5
            },
            "stress_case": {
                "gross_receipts": 3.0, "total_return": 1.0, "roi": -60.0, "irr": null
            }
        });
        let report: ModelReport = serde_json::from_value(json).unwrap();

        // One row per key in the summary mapping: scenario-ordered keys
        // first, then keys absent from the scenario list.
        let rows = kpi_rows(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Base Case");
        assert_eq!(rows[1].label, "stress_case");
        assert_eq!(rows[1].irr, "N/A");
    }

    #[test]
    fn kpi_rows_empty_without_summary() {
        assert!(kpi_rows(&report()).is_empty());
    }

    #[test]
    fn composition_rows_follow_scenario_order_and_resolve_labels() {
        let mut json = report_json();
        json["investor_composition"] = serde_json::json!({
            "best_case": {"principal": 100.0, "profit": 80.0},
            "base_case": {"principal": 100.0, "profit": 12.0}
        });
        let report: ModelReport = serde_json::from_value(json).unwrap();

        let rows = composition_rows(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Base Case");
        assert_eq!(rows[0].profit, 12.0);
        assert_eq!(rows[1].label, "Best Case");
    }

    #[test]
    fn composition_keeps_keys_missing_from_scenario_list() {
        let mut json = report_json();
        json["investor_composition"] = serde_json::json!({
            "stress_case": {"principal": 1.0, "profit": 2.0}
        });
        let report: ModelReport = serde_json::from_value(json).unwrap();

        let rows = composition_rows(&report);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "stress_case");
    }

    #[test]
    fn waterfall_columns_are_sorted_union_of_year_keys() {
        let mut json = report_json();
        json["annual_waterfall"] = serde_json::json!({
            "base_case": {
                "Net Receipts This Year": {"Year 1": 40.0, "Year 2": 20.0, "Year 10": 5.0},
                "Less: Paid to Debt": {"Year 1": -15.0}
            }
        });
        let report: ModelReport = serde_json::from_value(json).unwrap();

        let table = waterfall_table(&report, "base_case").unwrap();
        assert_eq!(table.years, vec!["Year 1", "Year 2", "Year 10"]);

        let debt = table
            .rows
            .iter()
            .find(|(item, _)| item == "Less: Paid to Debt")
            .unwrap();
        // Absent in Year 2 and Year 10: placeholder, not an error.
        assert_eq!(debt.1, vec![Some(-15.0), None, None]);
    }

    #[test]
    fn waterfall_absent_scenario_yields_none() {
        assert!(waterfall_table(&report(), "base_case").is_none());
    }

    #[test]
    fn waterfall_tables_empty_without_section() {
        assert!(waterfall_tables(&report()).is_empty());

        let mut json = report_json();
        json["annual_waterfall"] = serde_json::json!({});
        let report: ModelReport = serde_json::from_value(json).unwrap();
        assert!(waterfall_tables(&report).is_empty());
    }

    #[test]
    fn waterfall_tables_keep_keys_missing_from_scenario_list() {
        let mut json = report_json();
        json["annual_waterfall"] = serde_json::json!({
            "base_case": {"Net Receipts This Year": {"Year 1": 40.0}},
            "stress_case": {"Net Receipts This Year": {"Year 1": 10.0}}
        });
        let report: ModelReport = serde_json::from_value(json).unwrap();

        let tables = waterfall_tables(&report);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].scenario_label, "Base Case");
        assert_eq!(tables[1].scenario_label, "stress_case");
    }

    #[test]
    fn cash_flow_points_pair_years_with_both_series() {
        let points = cash_flow_points(&report());
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].year, "Year 1");
        assert_eq!(points[1].annual, 250.0);
        assert_eq!(points[1].cumulative, 150.0);
    }
}
