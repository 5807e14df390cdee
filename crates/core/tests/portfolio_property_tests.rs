//! Property-based integration tests for the portfolio engine.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use foliotrack_core::limits::{validate, PortfolioConstraints};
use foliotrack_core::portfolio::batch::{apply_batch, PriceQuantityUpdate};
use foliotrack_core::portfolio::holdings::Holding;
use foliotrack_core::portfolio::portfolio_model::{Portfolio, PortfolioType};
use foliotrack_core::portfolio::rebalance::plan;
use foliotrack_core::portfolio::valuation::aggregate;

// =============================================================================
// Generators
// =============================================================================

fn fixed_instant() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Generates a holding with a two-decimal quantity and price. The id is
/// assigned later from the holding's position in the portfolio.
fn arb_holding() -> impl Strategy<Value = Holding> {
    (0i64..100_000, 0i64..100_000).prop_map(|(quantity_cents, price_cents)| Holding {
        id: String::new(),
        ticker: String::new(),
        name: String::new(),
        quantity: Decimal::new(quantity_cents, 2),
        current_price: Decimal::new(price_cents, 2),
        average_cost: None,
        target_weight: None,
        weight: Decimal::ZERO,
        total_value: Decimal::ZERO,
        price_history: Vec::new(),
        dividends: Vec::new(),
        is_cash: false,
        insights: None,
    })
}

/// Generates a portfolio of up to eight holdings with derived fields
/// recomputed.
fn arb_portfolio() -> impl Strategy<Value = Portfolio> {
    (
        proptest::collection::vec(arb_holding(), 0..=8),
        1i64..10_000_000,
    )
        .prop_map(|(mut holdings, budget_cents)| {
            for (index, holding) in holdings.iter_mut().enumerate() {
                holding.id = format!("h{}", index);
                holding.ticker = format!("TCK{}", index);
                holding.name = format!("Holding {}", index);
            }
            let mut portfolio = Portfolio {
                id: "p1".to_string(),
                owner_id: "owner1".to_string(),
                name: "Property Portfolio".to_string(),
                description: None,
                portfolio_type: PortfolioType::Equity,
                budget: Decimal::new(budget_cents, 2),
                max_holdings: 50,
                max_allocation_percent: dec!(100),
                holdings,
                total_value: Decimal::ZERO,
                total_return: Decimal::ZERO,
                total_return_percent: Decimal::ZERO,
                available_cash: Decimal::ZERO,
                cash_allocation_percent: Decimal::ZERO,
                created_at: fixed_instant(),
                updated_at: fixed_instant(),
            };
            portfolio
                .recompute_derived()
                .expect("generated holdings are non-negative");
            portfolio
        })
}

/// Generates price/quantity updates, some of which deliberately reference
/// holdings that do not exist.
fn arb_updates() -> impl Strategy<Value = Vec<PriceQuantityUpdate>> {
    proptest::collection::vec(
        (0usize..12, 0i64..100_000, proptest::bool::ANY, proptest::bool::ANY).prop_map(
            |(slot, cents, is_price, known)| {
                let holding_id = if known {
                    format!("h{}", slot % 8)
                } else {
                    format!("ghost{}", slot)
                };
                let value = Decimal::new(cents, 2);
                PriceQuantityUpdate {
                    holding_id,
                    price: is_price.then_some(value),
                    quantity: (!is_price).then_some(value),
                }
            },
        ),
        0..=10,
    )
}

/// Generates a per-holding allocation cap within the valid (0, 100] range.
fn arb_allocation_cap() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000).prop_map(|basis_points| Decimal::new(basis_points, 2))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Aggregation has no hidden state: two calls on the same snapshot
    /// produce identical totals.
    #[test]
    fn prop_aggregate_is_idempotent(portfolio in arb_portfolio()) {
        let first = aggregate(&portfolio).unwrap();
        let second = aggregate(&portfolio).unwrap();
        prop_assert_eq!(first, second);
    }

    /// After a batch update the portfolio total equals the exact sum of the
    /// holdings' recomputed values.
    #[test]
    fn prop_batch_conserves_total_value(
        portfolio in arb_portfolio(),
        updates in arb_updates(),
    ) {
        let outcome = apply_batch(&portfolio, &updates, None, fixed_instant()).unwrap();

        let holdings_sum: Decimal = outcome
            .portfolio
            .holdings
            .iter()
            .map(|holding| holding.quantity * holding.current_price)
            .sum();

        prop_assert_eq!(outcome.portfolio.total_value, holdings_sum);
    }

    /// Every derived weight stays within [0, 100], and the weights sum to
    /// roughly 100 whenever the portfolio has value (roughly: each stored
    /// weight is rounded to two decimals).
    #[test]
    fn prop_weights_are_bounded(portfolio in arb_portfolio()) {
        for holding in &portfolio.holdings {
            prop_assert!(holding.weight >= Decimal::ZERO);
            prop_assert!(holding.weight <= dec!(100));
        }

        if portfolio.total_value > Decimal::ZERO {
            let weight_sum: Decimal =
                portfolio.holdings.iter().map(|holding| holding.weight).sum();
            prop_assert!((weight_sum - dec!(100)).abs() <= dec!(0.1));
        }
    }

    /// A portfolio whose holdings all sit exactly at their target weights
    /// produces an empty rebalance plan.
    #[test]
    fn prop_plan_is_empty_when_weights_match_targets(portfolio in arb_portfolio()) {
        let mut aligned = portfolio;
        let total_value = aggregate(&aligned).unwrap().total_value;

        for holding in &mut aligned.holdings {
            let current_weight = if total_value.is_zero() {
                Decimal::ZERO
            } else {
                holding.quantity * holding.current_price / total_value * dec!(100)
            };
            holding.target_weight = Some(current_weight);
        }

        prop_assert!(plan(&aligned, dec!(2)).unwrap().is_empty());
    }

    /// Loosening the per-holding allocation cap while keeping the holding
    /// limit fixed can only remove violations, never add new ones.
    #[test]
    fn prop_constraint_validation_is_monotone_in_allocation_cap(
        budget_cents in -1_000i64..10_000_000,
        max_holdings in 0u32..50,
        cap_a in arb_allocation_cap(),
        cap_b in arb_allocation_cap(),
    ) {
        let budget = Decimal::new(budget_cents, 2);
        let tight = cap_a.min(cap_b);
        let loose = cap_a.max(cap_b);

        let tight_errors = validate(&PortfolioConstraints {
            budget,
            max_holdings,
            max_allocation_percent: tight,
        })
        .errors;
        let loose_errors = validate(&PortfolioConstraints {
            budget,
            max_holdings,
            max_allocation_percent: loose,
        })
        .errors;

        prop_assert!(loose_errors.len() <= tight_errors.len());
    }
}
