//! Typed result document returned by `POST /models`.
//!
//! The backend's JSON is decoded into these structs in one step; a shape
//! mismatch fails the whole decode rather than leaking missing fields into
//! rendering. Fields only emitted by newer backend revisions are optional
//! or defaulted.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Full report for one model run. Replaced wholesale on every run.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelReport {
    /// Scenario keys in presentation order (e.g. `worst_case`).
    pub scenarios: Vec<String>,
    /// Scenario key to display label (e.g. "Worst Case").
    pub scenario_labels: BTreeMap<String, String>,
    /// ROI per scenario, parallel to `scenarios`, already in percent.
    pub roi_percent: Vec<f64>,
    /// IRR per scenario, parallel to `scenarios`. `None` when the cash
    /// flows never turn net-positive.
    pub irr_percent: Vec<Option<f64>>,
    pub roi_series: Vec<RoiPoint>,
    pub irr_series: Vec<IrrPoint>,
    /// Gross receipts at which investor ROI is zero.
    pub breakeven_receipts: f64,
    pub cash_flows: CashFlows,
    /// Principal/profit split of the investor return per scenario.
    /// Absent from older backend revisions; defaults to empty.
    #[serde(default)]
    pub investor_composition: BTreeMap<String, InvestorComposition>,
    /// Per-scenario headline numbers. Newer revisions only.
    #[serde(default)]
    pub kpi_summary: Option<BTreeMap<String, KpiSummary>>,
    /// Scenario -> waterfall line item -> year column -> amount.
    /// Newer revisions only.
    #[serde(default)]
    pub annual_waterfall: Option<BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoiPoint {
    pub scenario: String,
    pub label: String,
    pub roi: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IrrPoint {
    pub scenario: String,
    pub label: String,
    pub irr: Option<f64>,
}

/// Base-case cash flow to equity, one entry per projection year.
/// The three vectors are index-aligned.
#[derive(Debug, Clone, Deserialize)]
pub struct CashFlows {
    pub years: Vec<String>,
    pub annual: Vec<f64>,
    pub cumulative: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InvestorComposition {
    pub principal: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct KpiSummary {
    pub gross_receipts: f64,
    pub total_return: f64,
    /// In percent, like `roi_percent`.
    pub roi: f64,
    pub irr: Option<f64>,
}

impl ModelReport {
    /// Display label for a scenario key, falling back to the key itself
    /// when the backend did not provide one.
    pub fn label_for<'a>(&'a self, scenario: &'a str) -> &'a str {
        self.scenario_labels
            .get(scenario)
            .map(String::as_str)
            .unwrap_or(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_report_json() -> serde_json::Value {
        serde_json::json!({
            "scenarios": ["worst_case", "base_case", "best_case"],
            "scenario_labels": {
                "worst_case": "Worst Case",
                "base_case": "Base Case",
                "best_case": "Best Case"
            },
            "roi_percent": [-35.2, 12.5, 48.1],
            "irr_percent": [null, 12.5, 31.0],
            "roi_series": [
                {"scenario": "worst_case", "label": "Worst Case", "roi": -35.2},
                {"scenario": "base_case", "label": "Base Case", "roi": 12.5},
                {"scenario": "best_case", "label": "Best Case", "roi": 48.1}
            ],
            "irr_series": [
                {"scenario": "worst_case", "label": "Worst Case", "irr": null},
                {"scenario": "base_case", "label": "Base Case", "irr": 12.5},
                {"scenario": "best_case", "label": "Best Case", "irr": 31.0}
            ],
            "breakeven_receipts": 10_250_000,
            "cash_flows": {
                "years": ["Year 0", "Year 1", "Year 2", "Year 3"],
                "annual": [-3_974_745, 1_200_000, 2_100_000, 1_500_000],
                "cumulative": [-3_974_745, -2_774_745, -674_745, 825_255]
            }
        })
    }

    #[test]
    fn decodes_older_revision_without_optional_sections() {
        let report: ModelReport = serde_json::from_value(minimal_report_json()).unwrap();
        assert_eq!(report.scenarios.len(), 3);
        assert_eq!(report.irr_percent[0], None);
        assert!(report.investor_composition.is_empty());
        assert!(report.kpi_summary.is_none());
        assert!(report.annual_waterfall.is_none());
    }

    #[test]
    fn decodes_optional_sections_when_present() {
        let mut json = minimal_report_json();
        json["investor_composition"] = serde_json::json!({
            "base_case": {"principal": 3_974_745, "profit": 1_100_000}
        });
        json["kpi_summary"] = serde_json::json!({
            "base_case": {
                "gross_receipts": 11_375_600,
                "total_return": 5_074_745,
                "roi": 12.5,
                "irr": 12.5
            },
            "worst_case": {
                "gross_receipts": 7_962_920,
                "total_return": 2_575_000,
                "roi": -35.2,
                "irr": null
            }
        });
        json["annual_waterfall"] = serde_json::json!({
            "base_case": {
                "Net Receipts This Year": {"Year 1": 4_000_000.0, "Year 2": 2_000_000.0}
            }
        });

        let report: ModelReport = serde_json::from_value(json).unwrap();
        assert_eq!(report.investor_composition["base_case"].profit, 1_100_000.0);
        let kpis = report.kpi_summary.unwrap();
        assert_eq!(kpis["worst_case"].irr, None);
        assert!(report.annual_waterfall.unwrap().contains_key("base_case"));
    }

    #[test]
    fn missing_required_field_fails_decode() {
        let mut json = minimal_report_json();
        json.as_object_mut().unwrap().remove("cash_flows");
        assert!(serde_json::from_value::<ModelReport>(json).is_err());
    }

    #[test]
    fn label_for_falls_back_to_key() {
        let report: ModelReport = serde_json::from_value(minimal_report_json()).unwrap();
        assert_eq!(report.label_for("base_case"), "Base Case");
        assert_eq!(report.label_for("stress_case"), "stress_case");
    }
}
