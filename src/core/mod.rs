mod engine;
mod error;
mod portfolio;
mod types;

pub use engine::{
    CAPITAL_MULTIPLIER, MAX_HORIZON_MONTHS, MAX_HORIZON_YEARS, SAFE_WITHDRAWAL_RATE,
    annuity_future_value, compound_growth, project_compound, project_goal, project_retirement,
};
pub use error::{ProjectionError, ProjectionResult};
pub use portfolio::{
    FULL_DIVERSIFICATION_HOLDINGS, diversification_score, risk_score, summarize_portfolio,
};
pub use types::{
    Allocation, CompoundInput, CompoundResult, CompoundYear, GoalInput, GoalResult, Holding,
    HoldingView, PortfolioMetrics, RetirementInput, RetirementResult, RiskTolerance,
};
