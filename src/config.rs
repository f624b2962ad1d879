//! Projection defaults and the optional overrides accepted from the command
//! line and from HTTP payloads. Every field a caller leaves out falls back to
//! the defaults below.

use std::net::{IpAddr, SocketAddr};

use clap::{Args, ValueEnum};
use serde::Deserialize;

use crate::core::{CompoundInput, GoalInput, RetirementInput, RiskTolerance};

#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    #[arg(long, env = "ADVISOR_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,
    #[arg(long, env = "ADVISOR_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServeConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CliRiskTolerance {
    #[serde(alias = "low")]
    #[value(alias = "low")]
    Conservative,
    #[serde(alias = "medium", alias = "balanced")]
    #[value(aliases = ["medium", "balanced"])]
    Moderate,
    #[serde(alias = "high")]
    #[value(alias = "high")]
    Aggressive,
}

impl From<CliRiskTolerance> for RiskTolerance {
    fn from(value: CliRiskTolerance) -> Self {
        match value {
            CliRiskTolerance::Conservative => RiskTolerance::Conservative,
            CliRiskTolerance::Moderate => RiskTolerance::Moderate,
            CliRiskTolerance::Aggressive => RiskTolerance::Aggressive,
        }
    }
}

pub fn default_retirement_input() -> RetirementInput {
    RetirementInput {
        current_age: 30,
        retirement_age: 65,
        current_savings: 50_000.0,
        monthly_contribution: 1_000.0,
        expected_return: 7.0,
        current_income: 75_000.0,
        replace_income: 80.0,
    }
}

pub fn default_goal_input() -> GoalInput {
    GoalInput {
        target_amount: 50_000.0,
        current_amount: 10_000.0,
        monthly_contribution: 500.0,
        time_horizon: 60,
        risk_tolerance: RiskTolerance::Moderate,
    }
}

pub fn default_compound_input() -> CompoundInput {
    CompoundInput {
        principal: 10_000.0,
        monthly_contribution: 500.0,
        annual_return: 8.0,
        years: 20,
    }
}

#[derive(Args, Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetirementParams {
    #[arg(long, help = "Current age in years [default: 30]")]
    pub current_age: Option<u32>,
    #[arg(long, help = "Planned retirement age [default: 65]")]
    pub retirement_age: Option<u32>,
    #[arg(long, help = "Savings already invested [default: 50000]")]
    pub current_savings: Option<f64>,
    #[arg(long, help = "Monthly contribution until retirement [default: 1000]")]
    pub monthly_contribution: Option<f64>,
    #[arg(long, help = "Expected annual return in percent, e.g. 7 [default: 7]")]
    pub expected_return: Option<f64>,
    #[arg(long, help = "Current annual income [default: 75000]")]
    pub current_income: Option<f64>,
    #[arg(
        long,
        help = "Percent of current income to replace in retirement [default: 80]"
    )]
    pub replace_income: Option<f64>,
}

impl RetirementParams {
    pub fn into_input(self) -> RetirementInput {
        let mut input = default_retirement_input();
        if let Some(v) = self.current_age {
            input.current_age = v;
        }
        if let Some(v) = self.retirement_age {
            input.retirement_age = v;
        }
        if let Some(v) = self.current_savings {
            input.current_savings = v;
        }
        if let Some(v) = self.monthly_contribution {
            input.monthly_contribution = v;
        }
        if let Some(v) = self.expected_return {
            input.expected_return = v;
        }
        if let Some(v) = self.current_income {
            input.current_income = v;
        }
        if let Some(v) = self.replace_income {
            input.replace_income = v;
        }
        input
    }
}

#[derive(Args, Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoalParams {
    #[arg(long, help = "Amount to save [default: 50000]")]
    pub target_amount: Option<f64>,
    #[arg(long, help = "Amount already saved [default: 10000]")]
    pub current_amount: Option<f64>,
    #[arg(long, help = "Monthly contribution [default: 500]")]
    pub monthly_contribution: Option<f64>,
    #[arg(long, help = "Time horizon in months [default: 60]")]
    pub time_horizon: Option<u32>,
    #[arg(long, value_enum, help = "Risk tolerance tier [default: moderate]")]
    pub risk_tolerance: Option<CliRiskTolerance>,
}

impl GoalParams {
    pub fn into_input(self) -> GoalInput {
        let mut input = default_goal_input();
        if let Some(v) = self.target_amount {
            input.target_amount = v;
        }
        if let Some(v) = self.current_amount {
            input.current_amount = v;
        }
        if let Some(v) = self.monthly_contribution {
            input.monthly_contribution = v;
        }
        if let Some(v) = self.time_horizon {
            input.time_horizon = v;
        }
        if let Some(v) = self.risk_tolerance {
            input.risk_tolerance = v.into();
        }
        input
    }
}

#[derive(Args, Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompoundParams {
    #[arg(long, help = "Starting balance [default: 10000]")]
    pub principal: Option<f64>,
    #[arg(long, help = "Monthly contribution [default: 500]")]
    pub monthly_contribution: Option<f64>,
    #[arg(long, help = "Annual return in percent [default: 8]")]
    pub annual_return: Option<f64>,
    #[arg(long, help = "Number of years [default: 20]")]
    pub years: Option<u32>,
}

impl CompoundParams {
    pub fn into_input(self) -> CompoundInput {
        let mut input = default_compound_input();
        if let Some(v) = self.principal {
            input.principal = v;
        }
        if let Some(v) = self.monthly_contribution {
            input.monthly_contribution = v;
        }
        if let Some(v) = self.annual_return {
            input.annual_return = v;
        }
        if let Some(v) = self.years {
            input.years = v;
        }
        input
    }
}
