//! Valuation and heuristic scoring for a list of holdings.
//!
//! `risk_score` and `diversification_score` are linear placeholders kept for
//! compatibility with existing front ends. Neither is a statistical measure:
//! the risk score only looks at aggregate gain/loss, and the diversification
//! score only counts holdings.

use super::error::{ProjectionError, ProjectionResult, ensure_finite_output, ensure_positive};
use super::types::{Holding, HoldingView, PortfolioMetrics};

/// Holdings needed for a full diversification score.
pub const FULL_DIVERSIFICATION_HOLDINGS: usize = 5;

pub fn summarize_portfolio(holdings: &[Holding]) -> ProjectionResult<PortfolioMetrics> {
    if holdings.is_empty() {
        return Err(ProjectionError::invalid(
            "holdings",
            "portfolio must contain at least one holding",
        ));
    }
    for holding in holdings {
        validate_holding(holding)?;
    }

    let total_value: f64 = holdings.iter().map(holding_value).sum();
    let total_cost: f64 = holdings.iter().map(holding_cost).sum();
    let total_gain_loss = total_value - total_cost;
    let total_gain_loss_percent = total_gain_loss / total_cost * 100.0;
    ensure_finite_output("totalValue", total_value)?;
    ensure_finite_output("totalCost", total_cost)?;
    ensure_finite_output("totalGainLossPercent", total_gain_loss_percent)?;

    let views = holdings
        .iter()
        .map(|holding| {
            let value = holding_value(holding);
            let cost = holding_cost(holding);
            let gain_loss = value - cost;
            HoldingView {
                symbol: holding.symbol.clone(),
                value,
                cost,
                gain_loss,
                gain_loss_percent: gain_loss / cost * 100.0,
                allocation: value / total_value * 100.0,
            }
        })
        .collect();

    let metrics = PortfolioMetrics {
        total_value,
        total_cost,
        total_gain_loss,
        total_gain_loss_percent,
        risk_score: risk_score(total_gain_loss_percent),
        diversification_score: diversification_score(holdings.len()),
        holdings: views,
    };
    tracing::debug!(
        holdings = holdings.len(),
        total_value = metrics.total_value,
        risk_score = metrics.risk_score,
        "portfolio summary"
    );
    Ok(metrics)
}

pub fn risk_score(total_gain_loss_percent: f64) -> f64 {
    (50.0 + total_gain_loss_percent * 2.0).clamp(0.0, 100.0)
}

pub fn diversification_score(holding_count: usize) -> f64 {
    let per_holding = 100.0 / FULL_DIVERSIFICATION_HOLDINGS as f64;
    (holding_count as f64 * per_holding).clamp(0.0, 100.0)
}

fn holding_value(holding: &Holding) -> f64 {
    holding.shares * holding.current_price
}

fn holding_cost(holding: &Holding) -> f64 {
    holding.shares * holding.avg_price
}

fn validate_holding(holding: &Holding) -> ProjectionResult<()> {
    if holding.symbol.trim().is_empty() {
        return Err(ProjectionError::invalid("symbol", "must not be empty"));
    }
    ensure_positive("shares", holding.shares)?;
    ensure_positive("avgPrice", holding.avg_price)?;
    ensure_positive("currentPrice", holding.current_price)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn holding(symbol: &str, shares: f64, avg_price: f64, current_price: f64) -> Holding {
        Holding {
            symbol: symbol.to_string(),
            shares,
            avg_price,
            current_price,
        }
    }

    fn sample_holdings() -> Vec<Holding> {
        vec![
            holding("AAPL", 50.0, 150.0, 192.53),
            holding("MSFT", 25.0, 300.0, 418.24),
            holding("GOOGL", 15.0, 100.0, 138.21),
        ]
    }

    #[test]
    fn sample_portfolio_totals() {
        let metrics = summarize_portfolio(&sample_holdings()).expect("valid holdings");
        assert_approx_tol(metrics.total_value, 22_155.65, 1e-6);
        assert_approx_tol(metrics.total_cost, 16_500.0, 1e-9);
        assert_approx_tol(metrics.total_gain_loss, 5_655.65, 1e-6);
        assert_approx_tol(metrics.total_gain_loss_percent, 34.28, 0.005);
        // 50 + 34.28 * 2 saturates.
        assert_eq!(metrics.risk_score, 100.0);
        assert_approx_tol(metrics.diversification_score, 60.0, 1e-9);
    }

    #[test]
    fn per_holding_view_preserves_order_and_allocates_to_100() {
        let metrics = summarize_portfolio(&sample_holdings()).expect("valid holdings");
        let symbols: Vec<&str> = metrics.holdings.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "GOOGL"]);

        assert_approx_tol(metrics.holdings[0].value, 9_626.5, 1e-6);
        assert_approx_tol(metrics.holdings[1].value, 10_456.0, 1e-6);
        assert_approx_tol(metrics.holdings[2].value, 2_073.15, 1e-6);

        let allocation: f64 = metrics.holdings.iter().map(|h| h.allocation).sum();
        assert_approx_tol(allocation, 100.0, 1e-9);
    }

    #[test]
    fn losing_portfolio_lowers_risk_score() {
        let metrics =
            summarize_portfolio(&[holding("XYZ", 10.0, 100.0, 90.0)]).expect("valid holdings");
        assert_approx_tol(metrics.total_gain_loss_percent, -10.0, 1e-9);
        assert_approx_tol(metrics.risk_score, 30.0, 1e-9);
        assert_approx_tol(metrics.diversification_score, 20.0, 1e-9);
    }

    #[test]
    fn risk_score_clamps_at_zero() {
        assert_eq!(risk_score(-80.0), 0.0);
        assert_eq!(risk_score(0.0), 50.0);
    }

    #[test]
    fn diversification_saturates_at_five_holdings() {
        assert_eq!(diversification_score(0), 0.0);
        assert_eq!(diversification_score(5), 100.0);
        assert_eq!(diversification_score(12), 100.0);
    }

    #[test]
    fn empty_portfolio_is_rejected() {
        let err = summarize_portfolio(&[]).expect_err("must reject");
        assert_eq!(err.field(), "holdings");
    }

    #[test]
    fn invalid_holdings_are_rejected() {
        let err = summarize_portfolio(&[holding(" ", 1.0, 1.0, 1.0)]).expect_err("blank symbol");
        assert_eq!(err.field(), "symbol");
        let err = summarize_portfolio(&[holding("A", 0.0, 1.0, 1.0)]).expect_err("zero shares");
        assert_eq!(err.field(), "shares");
        let err = summarize_portfolio(&[holding("A", 1.0, 1.0, f64::NAN)]).expect_err("nan price");
        assert_eq!(err.field(), "currentPrice");
    }

    #[test]
    fn overflowing_totals_are_rejected() {
        let err = summarize_portfolio(&[holding("BIG", 1e300, 1.0, 1e300)])
            .expect_err("must reject");
        assert_eq!(err.field(), "totalValue");
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_scores_stay_in_range(
            rows in proptest::collection::vec(
                (1u32..10_000, 1u32..100_000, 1u32..100_000),
                1..12,
            )
        ) {
            let holdings: Vec<Holding> = rows
                .iter()
                .enumerate()
                .map(|(i, (shares, avg, current))| {
                    holding(
                        &format!("H{i}"),
                        *shares as f64,
                        *avg as f64 / 100.0,
                        *current as f64 / 100.0,
                    )
                })
                .collect();
            let metrics = summarize_portfolio(&holdings).expect("valid holdings");
            prop_assert!((0.0..=100.0).contains(&metrics.risk_score));
            prop_assert!((0.0..=100.0).contains(&metrics.diversification_score));
            let allocation: f64 = metrics.holdings.iter().map(|h| h.allocation).sum();
            prop_assert!((allocation - 100.0).abs() < 1e-6);
        }
    }
}
