use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::config::{CompoundParams, GoalParams, RetirementParams, ServeConfig};
use crate::core::{
    Holding, ProjectionError, project_compound, project_goal, project_retirement,
    summarize_portfolio,
};

#[derive(Parser, Debug)]
#[command(
    name = "advisor",
    version,
    about = "Retirement, savings goal, compound growth and portfolio projections"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Default log filter when RUST_LOG is unset"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the projection API over HTTP
    Serve(ServeConfig),
    /// Project savings at retirement against the capital needed
    Retirement(RetirementParams),
    /// Project progress towards a savings goal
    Goal(GoalParams),
    /// Project compound growth of a principal plus monthly contributions
    Compound(CompoundParams),
    /// Summarize value, gain/loss and heuristic scores for a set of holdings
    Portfolio(PortfolioArgs),
}

#[derive(Args, Debug)]
pub struct PortfolioArgs {
    #[arg(
        long = "holding",
        required = true,
        value_parser = parse_holding,
        help = "Holding as SYMBOL:SHARES:AVG_PRICE:CURRENT_PRICE, repeatable"
    )]
    pub holdings: Vec<Holding>,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Runs a projection subcommand and returns its pretty-printed JSON result.
/// `serve` is handled by the binary since it needs the async runtime.
pub fn run_projection(command: Command) -> Result<Option<String>, CliError> {
    let output = match command {
        Command::Serve(_) => return Ok(None),
        Command::Retirement(params) => to_json(&project_retirement(&params.into_input())?)?,
        Command::Goal(params) => to_json(&project_goal(&params.into_input())?)?,
        Command::Compound(params) => to_json(&project_compound(&params.into_input())?)?,
        Command::Portfolio(args) => to_json(&summarize_portfolio(&args.holdings)?)?,
    };
    Ok(Some(output))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

fn parse_holding(raw: &str) -> Result<Holding, String> {
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    let [symbol, shares, avg_price, current_price] = parts.as_slice() else {
        return Err(format!(
            "expected SYMBOL:SHARES:AVG_PRICE:CURRENT_PRICE, got '{raw}'"
        ));
    };
    Ok(Holding {
        symbol: symbol.to_uppercase(),
        shares: parse_number("shares", shares)?,
        avg_price: parse_number("average price", avg_price)?,
        current_price: parse_number("current price", current_price)?,
    })
}

fn parse_number(name: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|e| format!("invalid {name} '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliRiskTolerance;

    #[test]
    fn parse_holding_reads_four_fields() {
        let holding = parse_holding("aapl:50:150:192.53").expect("valid holding");
        assert_eq!(holding.symbol, "AAPL");
        assert_eq!(holding.shares, 50.0);
        assert_eq!(holding.avg_price, 150.0);
        assert_eq!(holding.current_price, 192.53);
    }

    #[test]
    fn parse_holding_rejects_wrong_arity_and_bad_numbers() {
        assert!(parse_holding("AAPL:50:150").is_err());
        let err = parse_holding("AAPL:fifty:150:192").expect_err("must reject");
        assert!(err.contains("shares"));
    }

    #[test]
    fn cli_parses_goal_subcommand() {
        let cli = Cli::try_parse_from([
            "advisor",
            "goal",
            "--target-amount",
            "20000",
            "--risk-tolerance",
            "aggressive",
        ])
        .expect("valid arguments");
        let Command::Goal(params) = cli.command else {
            panic!("expected goal subcommand");
        };
        assert_eq!(params.target_amount, Some(20_000.0));
        assert!(params.monthly_contribution.is_none());
    }

    #[test]
    fn cli_accepts_risk_tolerance_alias() {
        let cli = Cli::try_parse_from(["advisor", "goal", "--risk-tolerance", "high"])
            .expect("alias should parse");
        let Command::Goal(params) = cli.command else {
            panic!("expected goal subcommand");
        };
        assert_eq!(params.risk_tolerance, Some(CliRiskTolerance::Aggressive));
    }

    #[test]
    fn cli_parses_repeated_holdings() {
        let cli = Cli::try_parse_from([
            "advisor",
            "portfolio",
            "--holding",
            "AAPL:50:150:192.53",
            "--holding",
            "MSFT:25:300:418.24",
        ])
        .expect("valid arguments");
        let Command::Portfolio(args) = cli.command else {
            panic!("expected portfolio subcommand");
        };
        assert_eq!(args.holdings.len(), 2);
    }

    #[test]
    fn run_projection_prints_compound_json() {
        let output = run_projection(Command::Compound(CompoundParams::default()))
            .expect("defaults are valid")
            .expect("projection output");
        assert!(output.contains("\"totalValue\""));
        assert!(output.contains("\"returnMultiple\""));
    }

    #[test]
    fn run_projection_surfaces_invalid_input() {
        let params = RetirementParams {
            current_age: Some(70),
            retirement_age: Some(60),
            ..RetirementParams::default()
        };
        let err = run_projection(Command::Retirement(params)).expect_err("must reject");
        assert!(err.to_string().contains("retirementAge"));
    }
}
