use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    /// Fixed annual return assumed for the tier, in percent.
    pub fn annual_return(self) -> f64 {
        match self {
            RiskTolerance::Conservative => 4.0,
            RiskTolerance::Moderate => 7.0,
            RiskTolerance::Aggressive => 10.0,
        }
    }

    pub fn allocation(self) -> Allocation {
        match self {
            RiskTolerance::Conservative => Allocation {
                stocks: 30,
                bonds: 60,
                cash: 10,
            },
            RiskTolerance::Moderate => Allocation {
                stocks: 60,
                bonds: 30,
                cash: 10,
            },
            RiskTolerance::Aggressive => Allocation {
                stocks: 80,
                bonds: 15,
                cash: 5,
            },
        }
    }
}

/// Target asset mix in whole percentages.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub stocks: u32,
    pub bonds: u32,
    pub cash: u32,
}

impl Allocation {
    pub fn total(self) -> u32 {
        self.stocks + self.bonds + self.cash
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Annual percent, e.g. `7.0` for 7%.
    pub expected_return: f64,
    pub current_income: f64,
    /// Percent of current income the retirement pot should replace.
    pub replace_income: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementResult {
    pub years_to_retirement: u32,
    pub future_current_savings: f64,
    pub future_contributions: f64,
    pub total_at_retirement: f64,
    pub needed_capital: f64,
    pub surplus: f64,
    pub monthly_income_at_retirement: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    pub target_amount: f64,
    pub current_amount: f64,
    pub monthly_contribution: f64,
    /// Months.
    pub time_horizon: u32,
    pub risk_tolerance: RiskTolerance,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResult {
    pub months_to_goal: u64,
    pub total_contributions: f64,
    pub future_value: f64,
    pub expected_returns: f64,
    pub on_track: bool,
    pub required_monthly_contribution: f64,
    pub recommended_allocation: Allocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInput {
    pub principal: f64,
    pub monthly_contribution: f64,
    /// Annual percent.
    pub annual_return: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundYear {
    pub year: u32,
    pub contributions: f64,
    pub value: f64,
    pub earnings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundResult {
    pub total_value: f64,
    pub total_contributions: f64,
    pub total_earnings: f64,
    pub return_multiple: f64,
    pub schedule: Vec<CompoundYear>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub shares: f64,
    pub avg_price: f64,
    pub current_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub symbol: String,
    pub value: f64,
    pub cost: f64,
    pub gain_loss: f64,
    pub gain_loss_percent: f64,
    /// Share of total portfolio value, in percent.
    pub allocation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_value: f64,
    pub total_cost: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percent: f64,
    pub risk_score: f64,
    pub diversification_score: f64,
    pub holdings: Vec<HoldingView>,
}
