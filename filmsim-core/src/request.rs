//! Backend request document for `POST /models`.
//!
//! Field names here are the backend's wire contract and are carried by
//! serde rename attributes; the Rust side keeps its own naming. Percentage
//! inputs are rescaled from whole numbers to fractions at this boundary.

use serde::Serialize;

use crate::inputs::Inputs;

/// Title sent with every run; the project has no title field in the UI.
const PROJECT_TITLE: &str = "Demo Project";

/// Fraction of net receipts recognized in each projection year.
const REVENUE_RECOGNITION_SCHEDULE: [f64; 3] = [0.6, 0.3, 0.1];

#[derive(Debug, Clone, Serialize)]
pub struct ModelRequest {
    pub title: String,
    pub budget: Budget,
    pub financing: Financing,
    pub base_case_revenue: BaseCaseRevenue,
    pub scenario_multipliers: ScenarioMultipliers,
    pub waterfall_terms: WaterfallTerms,
    pub timeline: Timeline,
}

#[derive(Debug, Clone, Serialize)]
pub struct Budget {
    pub total_gross_budget: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Financing {
    #[serde(rename = "Equity_Investment")]
    pub equity_investment: f64,
    #[serde(rename = "Debt_Financing")]
    pub debt_financing: f64,
    #[serde(rename = "Gap_Financing")]
    pub gap_financing: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BaseCaseRevenue {
    #[serde(rename = "Domestic")]
    pub domestic: f64,
    #[serde(rename = "Foreign")]
    pub foreign: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioMultipliers {
    #[serde(rename = "Best_Case")]
    pub best_case: f64,
    #[serde(rename = "Worst_Case")]
    pub worst_case: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaterfallTerms {
    #[serde(rename = "Equity_Premium_Percent")]
    pub equity_premium: f64,
    #[serde(rename = "Net_Profit_Split_To_Investors")]
    pub net_profit_split_to_investors: f64,
    #[serde(rename = "CAM_Setup_Fee")]
    pub cam_setup_fee: f64,
    #[serde(rename = "CAM_Fee_Percent")]
    pub cam_fee: f64,
    #[serde(rename = "Distribution_Fee_Domestic_Percent")]
    pub distribution_fee_domestic: f64,
    #[serde(rename = "Distribution_Fee_Foreign_Percent")]
    pub distribution_fee_foreign: f64,
    pub sa_commission_domestic_percent: f64,
    pub sa_commission_foreign_percent: f64,
    pub sa_commission_foreign_deferral_percent: f64,
    #[serde(rename = "Gap_Financing_Premium_Percent")]
    pub gap_financing_premium: f64,
    #[serde(rename = "Talent_Deferrals")]
    pub talent_deferrals: f64,
    #[serde(rename = "Other_Deferrals")]
    pub other_deferrals: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub projection_years: u32,
    pub revenue_recognition_schedule: Vec<f64>,
    pub tax_credit_inflow_year: u32,
}

impl ModelRequest {
    /// Builds the outgoing document from the current form state.
    ///
    /// Whole-number percentages divide by 100 here and nowhere else.
    /// `projection_years` and `tax_credit_inflow_year` are truncated to
    /// integers for the wire (the backend expects ints).
    pub fn from_inputs(inputs: &Inputs) -> Self {
        Self {
            title: PROJECT_TITLE.to_string(),
            budget: Budget {
                total_gross_budget: inputs.total_gross_budget,
            },
            financing: Financing {
                equity_investment: inputs.equity_investment,
                debt_financing: inputs.debt_financing,
                gap_financing: inputs.gap_financing,
            },
            base_case_revenue: BaseCaseRevenue {
                domestic: inputs.base_case_domestic_revenue,
                foreign: inputs.base_case_foreign_revenue,
            },
            scenario_multipliers: ScenarioMultipliers {
                best_case: inputs.best_case_multiplier,
                worst_case: inputs.worst_case_multiplier,
            },
            waterfall_terms: WaterfallTerms {
                equity_premium: inputs.equity_premium_percent / 100.0,
                net_profit_split_to_investors: inputs.net_profit_split_percent / 100.0,
                cam_setup_fee: inputs.cam_setup_fee,
                cam_fee: inputs.cam_fee_percent / 100.0,
                distribution_fee_domestic: inputs.distribution_fee_domestic_percent / 100.0,
                distribution_fee_foreign: inputs.distribution_fee_foreign_percent / 100.0,
                sa_commission_domestic_percent: inputs.sa_commission_domestic_percent / 100.0,
                sa_commission_foreign_percent: inputs.sa_commission_foreign_percent / 100.0,
                sa_commission_foreign_deferral_percent: inputs
                    .sa_commission_foreign_deferral_percent
                    / 100.0,
                gap_financing_premium: inputs.gap_financing_premium_percent / 100.0,
                talent_deferrals: inputs.talent_deferrals,
                other_deferrals: inputs.other_deferrals,
            },
            timeline: Timeline {
                projection_years: inputs.projection_years as u32,
                revenue_recognition_schedule: REVENUE_RECOGNITION_SCHEDULE.to_vec(),
                tax_credit_inflow_year: inputs.tax_credit_inflow_year as u32,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percentage_fields_divide_by_exactly_one_hundred() {
        let mut inputs = Inputs::default();
        inputs.equity_premium_percent = 20.0;
        inputs.net_profit_split_percent = 50.0;
        inputs.cam_fee_percent = 1.0;
        inputs.distribution_fee_domestic_percent = 25.0;
        inputs.distribution_fee_foreign_percent = 25.0;
        inputs.sa_commission_domestic_percent = 7.5;
        inputs.sa_commission_foreign_percent = 12.0;
        inputs.sa_commission_foreign_deferral_percent = 30.0;
        inputs.gap_financing_premium_percent = 10.0;

        let req = ModelRequest::from_inputs(&inputs);
        let terms = &req.waterfall_terms;
        assert_eq!(terms.equity_premium, 0.2);
        assert_eq!(terms.net_profit_split_to_investors, 0.5);
        assert_eq!(terms.cam_fee, 0.01);
        assert_eq!(terms.distribution_fee_domestic, 0.25);
        assert_eq!(terms.distribution_fee_foreign, 0.25);
        assert_eq!(terms.sa_commission_domestic_percent, 0.075);
        assert_eq!(terms.sa_commission_foreign_percent, 0.12);
        assert_eq!(terms.sa_commission_foreign_deferral_percent, 0.3);
        assert_eq!(terms.gap_financing_premium, 0.1);
    }

    #[test]
    fn amount_fields_pass_through_unscaled() {
        let mut inputs = Inputs::default();
        inputs.equity_investment = 100_000.0;
        inputs.debt_financing = 0.0;
        inputs.gap_financing = 0.0;

        let req = ModelRequest::from_inputs(&inputs);
        assert_eq!(req.financing.equity_investment, 100_000.0);
        assert_eq!(req.financing.debt_financing, 0.0);
        assert_eq!(req.financing.gap_financing, 0.0);
        assert_eq!(req.budget.total_gross_budget, 8_892_544.0);
    }

    #[test]
    fn serialized_body_uses_backend_wire_names() {
        let inputs = Inputs::default();
        let body = serde_json::to_value(ModelRequest::from_inputs(&inputs)).unwrap();

        assert_eq!(body["title"], "Demo Project");
        assert_eq!(body["budget"]["total_gross_budget"], 8_892_544.0);
        assert_eq!(body["financing"]["Equity_Investment"], 3_974_745.0);
        assert_eq!(body["base_case_revenue"]["Domestic"], 4_500_000.0);
        assert_eq!(body["base_case_revenue"]["Foreign"], 6_875_600.0);
        assert_eq!(body["scenario_multipliers"]["Best_Case"], 1.3);
        assert_eq!(body["scenario_multipliers"]["Worst_Case"], 0.7);
        assert_eq!(body["waterfall_terms"]["Equity_Premium_Percent"], 0.2);
        assert_eq!(body["waterfall_terms"]["Net_Profit_Split_To_Investors"], 0.5);
        assert_eq!(body["waterfall_terms"]["CAM_Setup_Fee"], 3_000.0);
        assert_eq!(body["waterfall_terms"]["CAM_Fee_Percent"], 0.0075);
        assert_eq!(
            body["waterfall_terms"]["sa_commission_foreign_deferral_percent"],
            0.3
        );
        assert_eq!(body["waterfall_terms"]["Gap_Financing_Premium_Percent"], 0.1);
        assert_eq!(body["timeline"]["projection_years"], 4);
        assert_eq!(body["timeline"]["tax_credit_inflow_year"], 1);
        assert_eq!(
            body["timeline"]["revenue_recognition_schedule"],
            serde_json::json!([0.6, 0.3, 0.1])
        );
    }

    #[test]
    fn example_from_contract_serializes_expected_values() {
        let mut inputs = Inputs::default();
        inputs.equity_investment = 100_000.0;
        inputs.debt_financing = 0.0;
        inputs.gap_financing = 0.0;
        inputs.equity_premium_percent = 20.0;
        inputs.net_profit_split_percent = 50.0;
        inputs.cam_fee_percent = 1.0;
        inputs.distribution_fee_domestic_percent = 25.0;
        inputs.distribution_fee_foreign_percent = 25.0;

        let body = serde_json::to_value(ModelRequest::from_inputs(&inputs)).unwrap();
        assert_eq!(body["waterfall_terms"]["Equity_Premium_Percent"], 0.2);
        assert_eq!(body["financing"]["Equity_Investment"], 100_000.0);
    }
}
