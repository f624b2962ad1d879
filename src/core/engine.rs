use super::error::{
    ProjectionError, ProjectionResult, ensure_finite_output, ensure_non_negative,
    ensure_positive, ensure_rate,
};
use super::types::{
    CompoundInput, CompoundResult, CompoundYear, GoalInput, GoalResult, RetirementInput,
    RetirementResult,
};

/// Multiplier turning an annual income need into required capital (4% rule).
pub const CAPITAL_MULTIPLIER: f64 = 25.0;
/// Sustainable annual withdrawal rate used for retirement income.
pub const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

/// Longest projection horizon accepted, in years.
pub const MAX_HORIZON_YEARS: u32 = 150;
/// Longest goal horizon accepted, in months.
pub const MAX_HORIZON_MONTHS: u32 = MAX_HORIZON_YEARS * 12;

const ZERO_RATE_EPS: f64 = 1e-12;

pub fn compound_growth(amount: f64, rate: f64, periods: f64) -> f64 {
    amount * (1.0 + rate).powf(periods)
}

/// Future value of `periods` end-of-period payments at a constant periodic
/// rate. A zero rate falls back to the arithmetic sum of the payments.
pub fn annuity_future_value(payment: f64, rate: f64, periods: u32) -> f64 {
    let n = periods as f64;
    if rate.abs() < ZERO_RATE_EPS {
        return payment * n;
    }
    payment * ((1.0 + rate).powf(n) - 1.0) / rate
}

pub fn project_retirement(input: &RetirementInput) -> ProjectionResult<RetirementResult> {
    validate_retirement(input)?;

    let years = input.retirement_age - input.current_age;
    let annual_rate = input.expected_return / 100.0;
    let monthly_rate = annual_rate / 12.0;
    let months = years * 12;

    let future_current_savings = compound_growth(input.current_savings, annual_rate, years as f64);
    let future_contributions =
        annuity_future_value(input.monthly_contribution, monthly_rate, months);
    let total_at_retirement = future_current_savings + future_contributions;

    let needed_capital = input.current_income * input.replace_income / 100.0 * CAPITAL_MULTIPLIER;
    let surplus = total_at_retirement - needed_capital;
    let monthly_income_at_retirement = total_at_retirement * SAFE_WITHDRAWAL_RATE / 12.0;

    ensure_finite_output("totalAtRetirement", total_at_retirement)?;
    ensure_finite_output("neededCapital", needed_capital)?;
    ensure_finite_output("surplus", surplus)?;

    tracing::debug!(
        years,
        total_at_retirement,
        needed_capital,
        surplus,
        "retirement projection"
    );

    Ok(RetirementResult {
        years_to_retirement: years,
        future_current_savings,
        future_contributions,
        total_at_retirement,
        needed_capital,
        surplus,
        monthly_income_at_retirement,
    })
}

pub fn project_goal(input: &GoalInput) -> ProjectionResult<GoalResult> {
    validate_goal(input)?;

    let remaining = (input.target_amount - input.current_amount).max(0.0);
    let months_to_goal = (remaining / input.monthly_contribution).ceil() as u64;

    let annual_rate = input.risk_tolerance.annual_return() / 100.0;
    let monthly_rate = annual_rate / 12.0;
    let horizon_years = input.time_horizon as f64 / 12.0;

    let grown_current = compound_growth(input.current_amount, annual_rate, horizon_years);
    let future_value = grown_current
        + annuity_future_value(input.monthly_contribution, monthly_rate, input.time_horizon);
    let total_contributions = input.monthly_contribution * input.time_horizon as f64;
    let expected_returns = future_value - input.current_amount - total_contributions;

    let shortfall = (input.target_amount - grown_current).max(0.0);
    let unit_annuity = annuity_future_value(1.0, monthly_rate, input.time_horizon);
    let required_monthly_contribution = shortfall / unit_annuity;

    ensure_finite_output("futureValue", future_value)?;
    ensure_finite_output("expectedReturns", expected_returns)?;
    ensure_finite_output("requiredMonthlyContribution", required_monthly_contribution)?;

    tracing::debug!(
        months_to_goal,
        future_value,
        required_monthly_contribution,
        "goal projection"
    );

    Ok(GoalResult {
        months_to_goal,
        total_contributions,
        future_value,
        expected_returns,
        on_track: future_value >= input.target_amount,
        required_monthly_contribution,
        recommended_allocation: input.risk_tolerance.allocation(),
    })
}

pub fn project_compound(input: &CompoundInput) -> ProjectionResult<CompoundResult> {
    validate_compound(input)?;

    let schedule: Vec<CompoundYear> = (1..=input.years)
        .map(|year| compound_year(input, year))
        .collect();
    let last = schedule
        .last()
        .copied()
        .ok_or_else(|| ProjectionError::invalid("years", "must be > 0"))?;
    let return_multiple = last.value / last.contributions;
    ensure_finite_output("totalValue", last.value)?;
    ensure_finite_output("totalEarnings", last.earnings)?;
    ensure_finite_output("returnMultiple", return_multiple)?;

    tracing::debug!(
        years = input.years,
        total_value = last.value,
        "compound projection"
    );

    Ok(CompoundResult {
        total_value: last.value,
        total_contributions: last.contributions,
        total_earnings: last.earnings,
        return_multiple,
        schedule,
    })
}

fn compound_year(input: &CompoundInput, year: u32) -> CompoundYear {
    let annual_rate = input.annual_return / 100.0;
    let months = year * 12;
    let value = compound_growth(input.principal, annual_rate, year as f64)
        + annuity_future_value(input.monthly_contribution, annual_rate / 12.0, months);
    let contributions = input.principal + input.monthly_contribution * months as f64;
    CompoundYear {
        year,
        contributions,
        value,
        earnings: value - contributions,
    }
}

fn validate_retirement(input: &RetirementInput) -> ProjectionResult<()> {
    if input.retirement_age <= input.current_age {
        return Err(ProjectionError::invalid(
            "retirementAge",
            "must be greater than currentAge",
        ));
    }
    if input.retirement_age - input.current_age > MAX_HORIZON_YEARS {
        return Err(ProjectionError::invalid(
            "retirementAge",
            format!("must be at most {MAX_HORIZON_YEARS} years after currentAge"),
        ));
    }
    ensure_non_negative("currentSavings", input.current_savings)?;
    ensure_non_negative("monthlyContribution", input.monthly_contribution)?;
    ensure_rate("expectedReturn", input.expected_return)?;
    ensure_non_negative("currentIncome", input.current_income)?;
    ensure_non_negative("replaceIncome", input.replace_income)?;
    Ok(())
}

fn validate_goal(input: &GoalInput) -> ProjectionResult<()> {
    ensure_positive("targetAmount", input.target_amount)?;
    ensure_non_negative("currentAmount", input.current_amount)?;
    ensure_positive("monthlyContribution", input.monthly_contribution)?;
    if input.time_horizon == 0 {
        return Err(ProjectionError::invalid("timeHorizon", "must be > 0"));
    }
    if input.time_horizon > MAX_HORIZON_MONTHS {
        return Err(ProjectionError::invalid(
            "timeHorizon",
            format!("must be at most {MAX_HORIZON_MONTHS} months"),
        ));
    }
    Ok(())
}

fn validate_compound(input: &CompoundInput) -> ProjectionResult<()> {
    ensure_non_negative("principal", input.principal)?;
    ensure_non_negative("monthlyContribution", input.monthly_contribution)?;
    ensure_rate("annualReturn", input.annual_return)?;
    if input.years == 0 {
        return Err(ProjectionError::invalid("years", "must be > 0"));
    }
    if input.years > MAX_HORIZON_YEARS {
        return Err(ProjectionError::invalid(
            "years",
            format!("must be at most {MAX_HORIZON_YEARS}"),
        ));
    }
    if input.principal <= 0.0 && input.monthly_contribution <= 0.0 {
        return Err(ProjectionError::invalid(
            "monthlyContribution",
            "principal and monthly contribution cannot both be zero",
        ));
    }
    Ok(())
}
