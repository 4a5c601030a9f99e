//! Live availability resolution for option combinations.
//!
//! The oracle is queried once per combination, all queries in flight at
//! once. The join is all-or-nothing: the first failing query fails the
//! whole resolution and drops the still-pending siblings. There is no
//! partial-success mode, no retry, and no caching - every call re-queries
//! the oracle for every combination.

use futures::future::try_join_all;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::catalog::cross_product;
use crate::error::{PreconditionError, Result};
use crate::platform::AvailabilityOracle;
use crate::types::{AvailableCombination, OptionCombination, Product};

/// Resolve which of `combinations` are purchasable right now.
///
/// Returns the purchasable subsequence in input order, each entry tagged
/// with a freshly generated identifier. An empty input resolves to an
/// empty output without touching the oracle.
///
/// # Errors
///
/// - [`PreconditionError::MissingProduct`] when the product reference is
///   absent (empty platform ID), before any oracle call.
/// - The first oracle failure, propagated unchanged; no partial result is
///   returned.
#[instrument(skip(oracle, product, combinations), fields(product = %product.id, combinations = combinations.len()))]
pub async fn resolve_availability<O>(
    oracle: &O,
    product: &Product,
    combinations: &[OptionCombination],
) -> Result<Vec<AvailableCombination>>
where
    O: AvailabilityOracle + ?Sized,
{
    if product.id.is_empty() {
        return Err(PreconditionError::MissingProduct.into());
    }

    let queries = combinations
        .iter()
        .map(|combination| oracle.check_availability(&product.id, combination));
    let reports = try_join_all(queries).await?;

    let available: Vec<AvailableCombination> = combinations
        .iter()
        .zip(reports)
        .filter(|(_, report)| report.available_for_purchase)
        .map(|(combination, _)| AvailableCombination {
            id: Uuid::new_v4(),
            options: combination.clone(),
        })
        .collect();

    debug!(purchasable = available.len(), "Resolved availability");

    Ok(available)
}

/// Cross the product's options and resolve them in one step.
///
/// # Errors
///
/// Same as [`resolve_availability`].
pub async fn in_stock_combinations<O>(
    oracle: &O,
    product: &Product,
) -> Result<Vec<AvailableCombination>>
where
    O: AvailabilityOracle + ?Sized,
{
    let combinations = cross_product(&product.options);
    resolve_availability(oracle, product, &combinations).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use driftwood_core::ProductId;

    use super::*;
    use crate::error::StorefrontError;
    use crate::platform::{OptionsAvailability, PlatformError};
    use crate::types::{OptionChoice, ProductOption};

    /// Oracle scripted per combination: listed combinations are
    /// purchasable, `failing` ones error out, everything else is reported
    /// not purchasable.
    #[derive(Default)]
    struct ScriptedOracle {
        purchasable: Vec<OptionCombination>,
        failing: Vec<OptionCombination>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AvailabilityOracle for ScriptedOracle {
        async fn check_availability(
            &self,
            _product_id: &ProductId,
            combination: &OptionCombination,
        ) -> std::result::Result<OptionsAvailability, PlatformError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.contains(combination) {
                return Err(PlatformError::Oracle(
                    "inventory backend unreachable".to_string(),
                ));
            }
            Ok(OptionsAvailability {
                available_for_purchase: self.purchasable.contains(combination),
            })
        }
    }

    fn combo(color: &str, size: &str) -> OptionCombination {
        OptionCombination::new()
            .with("Color", color)
            .with("Size", size)
    }

    fn product() -> Product {
        let choice = |description: &str, value: &str, in_stock: bool| OptionChoice {
            description: description.to_string(),
            value: value.to_string(),
            in_stock,
            id: None,
        };
        Product {
            id: ProductId::new("prod-1"),
            name: "Linen Shirt".to_string(),
            options: vec![
                ProductOption {
                    name: "Color".to_string(),
                    choices: vec![choice("Red", "red", true), choice("Blue", "blue", false)],
                },
                ProductOption {
                    name: "Size".to_string(),
                    choices: vec![choice("S", "s", true), choice("M", "m", true)],
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_returns_purchasable_subsequence_in_input_order() {
        let oracle = ScriptedOracle {
            purchasable: vec![combo("Red", "M"), combo("Red", "S")],
            ..ScriptedOracle::default()
        };
        let combinations = vec![
            combo("Red", "S"),
            combo("Blue", "S"),
            combo("Red", "M"),
            combo("Blue", "M"),
        ];

        let available = resolve_availability(&oracle, &product(), &combinations)
            .await
            .expect("resolution");

        let pairs: Vec<(&str, &str)> = available
            .iter()
            .map(|entry| {
                (
                    entry.options.get("Color").expect("color"),
                    entry.options.get("Size").expect("size"),
                )
            })
            .collect();
        assert_eq!(pairs, [("Red", "S"), ("Red", "M")]);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_identifiers_are_distinct_and_fresh() {
        let oracle = ScriptedOracle {
            purchasable: vec![combo("Red", "S"), combo("Red", "M")],
            ..ScriptedOracle::default()
        };
        let combinations = vec![combo("Red", "S"), combo("Red", "M")];

        let first = resolve_availability(&oracle, &product(), &combinations)
            .await
            .expect("resolution");
        let second = resolve_availability(&oracle, &product(), &combinations)
            .await
            .expect("resolution");

        assert_ne!(
            first.first().expect("entry").id,
            first.get(1).expect("entry").id
        );
        // Recomputed on demand: same combination, new identity.
        assert!(first.iter().all(|entry| {
            second.iter().all(|other| entry.id != other.id)
        }));
    }

    #[tokio::test]
    async fn test_single_failure_fails_whole_resolution() {
        let oracle = ScriptedOracle {
            purchasable: vec![combo("Red", "S"), combo("Red", "M")],
            failing: vec![combo("Blue", "S")],
            ..ScriptedOracle::default()
        };
        let combinations = vec![combo("Red", "S"), combo("Blue", "S"), combo("Red", "M")];

        let err = resolve_availability(&oracle, &product(), &combinations)
            .await
            .expect_err("resolution must fail as a whole");

        assert!(matches!(
            err,
            StorefrontError::Platform(PlatformError::Oracle(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_product_reference_fails_before_any_call() {
        let oracle = ScriptedOracle::default();
        let absent = Product {
            id: ProductId::new(""),
            name: String::new(),
            options: Vec::new(),
        };

        let err = resolve_availability(&oracle, &absent, &[combo("Red", "S")])
            .await
            .expect_err("missing product");

        assert!(matches!(
            err,
            StorefrontError::Precondition(PreconditionError::MissingProduct)
        ));
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_input_resolves_empty_without_queries() {
        let oracle = ScriptedOracle::default();
        let available = resolve_availability(&oracle, &product(), &[])
            .await
            .expect("resolution");
        assert!(available.is_empty());
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_worked_example_red_blue_by_s_m() {
        // Product: Color [Red in stock, Blue out], Size [S, M in stock].
        // Oracle says only (Red, S) and (Red, M) are purchasable.
        let oracle = ScriptedOracle {
            purchasable: vec![combo("Red", "S"), combo("Red", "M")],
            ..ScriptedOracle::default()
        };

        let available = in_stock_combinations(&oracle, &product())
            .await
            .expect("resolution");

        assert_eq!(oracle.calls.load(Ordering::SeqCst), 4);
        let pairs: Vec<(&str, &str)> = available
            .iter()
            .map(|entry| {
                (
                    entry.options.get("Color").expect("color"),
                    entry.options.get("Size").expect("size"),
                )
            })
            .collect();
        assert_eq!(pairs, [("Red", "S"), ("Red", "M")]);
        assert_ne!(
            available.first().expect("entry").id,
            available.get(1).expect("entry").id
        );
    }
}
