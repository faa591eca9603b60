//! Editable model parameters for a film project.
//!
//! This module holds the flat record of numeric inputs the form edits,
//! plus the field/group metadata the input panel renders from. Percentage
//! fields are stored as whole numbers (20 means 20%) and are rescaled only
//! when the backend request is built.

/// Flat record of every editable parameter.
///
/// All fields are plain `f64`. Seed values describe the bundled demo
/// project, so a fresh form can be run without touching anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    // Budget
    pub total_gross_budget: f64,

    // Base case revenue
    pub base_case_domestic_revenue: f64,
    pub base_case_foreign_revenue: f64,

    // Scenario multipliers
    pub best_case_multiplier: f64,
    pub worst_case_multiplier: f64,

    // Financing
    pub equity_investment: f64,
    pub debt_financing: f64,
    pub gap_financing: f64,

    // Investor terms
    pub equity_premium_percent: f64,
    pub net_profit_split_percent: f64,

    // Distribution & CAM fees
    pub cam_fee_percent: f64,
    pub distribution_fee_domestic_percent: f64,
    pub distribution_fee_foreign_percent: f64,
    pub cam_setup_fee: f64,
    pub gap_financing_premium_percent: f64,

    // Sales agent commissions
    pub sa_commission_domestic_percent: f64,
    pub sa_commission_foreign_percent: f64,
    pub sa_commission_foreign_deferral_percent: f64,

    // Deferrals
    pub talent_deferrals: f64,
    pub other_deferrals: f64,

    // Timeline
    pub projection_years: f64,
    pub tax_credit_inflow_year: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            total_gross_budget: 8_892_544.0,
            base_case_domestic_revenue: 4_500_000.0,
            base_case_foreign_revenue: 6_875_600.0,
            best_case_multiplier: 1.3,
            worst_case_multiplier: 0.7,
            equity_investment: 3_974_745.0,
            debt_financing: 738_200.0,
            gap_financing: 1_481_276.0,
            equity_premium_percent: 20.0,
            net_profit_split_percent: 50.0,
            cam_fee_percent: 0.75,
            distribution_fee_domestic_percent: 25.0,
            distribution_fee_foreign_percent: 25.0,
            cam_setup_fee: 3_000.0,
            gap_financing_premium_percent: 10.0,
            sa_commission_domestic_percent: 7.5,
            sa_commission_foreign_percent: 12.0,
            sa_commission_foreign_deferral_percent: 30.0,
            talent_deferrals: 500_000.0,
            other_deferrals: 55_250.0,
            projection_years: 4.0,
            tax_credit_inflow_year: 1.0,
        }
    }
}

impl Inputs {
    /// Applies a raw edit coming from the form.
    ///
    /// The panel forwards the field identity and the raw string; coercion
    /// happens here. Non-numeric input collapses to `NaN` and is stored
    /// as-is. No range checks are performed.
    pub fn apply(&mut self, field: Field, raw: &str) {
        let value: f64 = raw.trim().parse().unwrap_or(f64::NAN);
        *self.get_mut(field) = value;
    }

    /// Current value of a field, for seeding edit buffers.
    pub fn get(&self, field: Field) -> f64 {
        use Field::*;
        match field {
            TotalGrossBudget => self.total_gross_budget,
            BaseCaseDomesticRevenue => self.base_case_domestic_revenue,
            BaseCaseForeignRevenue => self.base_case_foreign_revenue,
            BestCaseMultiplier => self.best_case_multiplier,
            WorstCaseMultiplier => self.worst_case_multiplier,
            EquityInvestment => self.equity_investment,
            DebtFinancing => self.debt_financing,
            GapFinancing => self.gap_financing,
            EquityPremiumPercent => self.equity_premium_percent,
            NetProfitSplitPercent => self.net_profit_split_percent,
            CamFeePercent => self.cam_fee_percent,
            DistributionFeeDomesticPercent => self.distribution_fee_domestic_percent,
            DistributionFeeForeignPercent => self.distribution_fee_foreign_percent,
            CamSetupFee => self.cam_setup_fee,
            GapFinancingPremiumPercent => self.gap_financing_premium_percent,
            SaCommissionDomesticPercent => self.sa_commission_domestic_percent,
            SaCommissionForeignPercent => self.sa_commission_foreign_percent,
            SaCommissionForeignDeferralPercent => self.sa_commission_foreign_deferral_percent,
            TalentDeferrals => self.talent_deferrals,
            OtherDeferrals => self.other_deferrals,
            ProjectionYears => self.projection_years,
            TaxCreditInflowYear => self.tax_credit_inflow_year,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut f64 {
        use Field::*;
        match field {
            TotalGrossBudget => &mut self.total_gross_budget,
            BaseCaseDomesticRevenue => &mut self.base_case_domestic_revenue,
            BaseCaseForeignRevenue => &mut self.base_case_foreign_revenue,
            BestCaseMultiplier => &mut self.best_case_multiplier,
            WorstCaseMultiplier => &mut self.worst_case_multiplier,
            EquityInvestment => &mut self.equity_investment,
            DebtFinancing => &mut self.debt_financing,
            GapFinancing => &mut self.gap_financing,
            EquityPremiumPercent => &mut self.equity_premium_percent,
            NetProfitSplitPercent => &mut self.net_profit_split_percent,
            CamFeePercent => &mut self.cam_fee_percent,
            DistributionFeeDomesticPercent => &mut self.distribution_fee_domestic_percent,
            DistributionFeeForeignPercent => &mut self.distribution_fee_foreign_percent,
            CamSetupFee => &mut self.cam_setup_fee,
            GapFinancingPremiumPercent => &mut self.gap_financing_premium_percent,
            SaCommissionDomesticPercent => &mut self.sa_commission_domestic_percent,
            SaCommissionForeignPercent => &mut self.sa_commission_foreign_percent,
            SaCommissionForeignDeferralPercent => {
                &mut self.sa_commission_foreign_deferral_percent
            }
            TalentDeferrals => &mut self.talent_deferrals,
            OtherDeferrals => &mut self.other_deferrals,
            ProjectionYears => &mut self.projection_years,
            TaxCreditInflowYear => &mut self.tax_credit_inflow_year,
        }
    }
}

/// Identity of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    TotalGrossBudget,
    BaseCaseDomesticRevenue,
    BaseCaseForeignRevenue,
    BestCaseMultiplier,
    WorstCaseMultiplier,
    EquityInvestment,
    DebtFinancing,
    GapFinancing,
    EquityPremiumPercent,
    NetProfitSplitPercent,
    CamFeePercent,
    DistributionFeeDomesticPercent,
    DistributionFeeForeignPercent,
    CamSetupFee,
    GapFinancingPremiumPercent,
    SaCommissionDomesticPercent,
    SaCommissionForeignPercent,
    SaCommissionForeignDeferralPercent,
    TalentDeferrals,
    OtherDeferrals,
    ProjectionYears,
    TaxCreditInflowYear,
}

impl Field {
    /// Label shown next to the input box.
    pub fn label(self) -> &'static str {
        use Field::*;
        match self {
            TotalGrossBudget => "Total Gross Budget ($)",
            BaseCaseDomesticRevenue => "Domestic ($)",
            BaseCaseForeignRevenue => "Foreign ($)",
            BestCaseMultiplier => "Best Case (x)",
            WorstCaseMultiplier => "Worst Case (x)",
            EquityInvestment => "Equity Investment ($)",
            DebtFinancing => "Debt Financing ($)",
            GapFinancing => "Gap Financing ($)",
            EquityPremiumPercent => "Equity Premium (%)",
            NetProfitSplitPercent => "Net Profit Investor Split (%)",
            CamFeePercent => "CAM Fee (%)",
            DistributionFeeDomesticPercent => "Domestic Distrib Fee (%)",
            DistributionFeeForeignPercent => "Foreign Distrib Fee (%)",
            CamSetupFee => "CAM Setup Fee ($)",
            GapFinancingPremiumPercent => "Gap Financing Premium (%)",
            SaCommissionDomesticPercent => "SA Commission Domestic (%)",
            SaCommissionForeignPercent => "SA Commission Foreign (%)",
            SaCommissionForeignDeferralPercent => "SA Foreign Deferral (%)",
            TalentDeferrals => "Talent Deferrals ($)",
            OtherDeferrals => "Other Deferrals ($)",
            ProjectionYears => "Projection Years",
            TaxCreditInflowYear => "Tax Credit Inflow Year",
        }
    }
}

/// Collapsible section of the input panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    BaseCaseRevenue,
    ScenarioMultipliers,
    FinancingStructure,
    InvestorTerms,
    DistributionAndCamFees,
    SalesAgentCommissions,
    Deferrals,
    Timeline,
}

impl Group {
    /// Render order of the sections.
    pub fn all() -> &'static [Group] {
        &[
            Group::BaseCaseRevenue,
            Group::ScenarioMultipliers,
            Group::FinancingStructure,
            Group::InvestorTerms,
            Group::DistributionAndCamFees,
            Group::SalesAgentCommissions,
            Group::Deferrals,
            Group::Timeline,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Group::BaseCaseRevenue => "Base Case Revenue ($)",
            Group::ScenarioMultipliers => "Scenario Multipliers",
            Group::FinancingStructure => "Financing Structure",
            Group::InvestorTerms => "Investor Terms",
            Group::DistributionAndCamFees => "Distribution & CAM Fees",
            Group::SalesAgentCommissions => "Sales Agent Commissions",
            Group::Deferrals => "Deferrals",
            Group::Timeline => "Timeline",
        }
    }

    /// Fields rendered in this section, in order.
    pub fn fields(self) -> &'static [Field] {
        use Field::*;
        match self {
            Group::BaseCaseRevenue => &[
                TotalGrossBudget,
                BaseCaseDomesticRevenue,
                BaseCaseForeignRevenue,
            ],
            Group::ScenarioMultipliers => &[BestCaseMultiplier, WorstCaseMultiplier],
            Group::FinancingStructure => &[EquityInvestment, DebtFinancing, GapFinancing],
            Group::InvestorTerms => &[EquityPremiumPercent, NetProfitSplitPercent],
            Group::DistributionAndCamFees => &[
                CamFeePercent,
                DistributionFeeDomesticPercent,
                DistributionFeeForeignPercent,
                CamSetupFee,
                GapFinancingPremiumPercent,
            ],
            Group::SalesAgentCommissions => &[
                SaCommissionDomesticPercent,
                SaCommissionForeignPercent,
                SaCommissionForeignDeferralPercent,
            ],
            Group::Deferrals => &[TalentDeferrals, OtherDeferrals],
            Group::Timeline => &[ProjectionYears, TaxCreditInflowYear],
        }
    }
}
