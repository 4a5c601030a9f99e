//! In-memory platform fakes shared by the integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use driftwood_core::{CartId, LineItemId, ProductId};
use driftwood_storefront::platform::{
    AvailabilityOracle, CartStore, CurrentCart, OptionsAvailability, PlatformError, RawLineItem,
};
use driftwood_storefront::types::{CartLineItem, OptionCombination};

/// Oracle scripted with the combinations it considers purchasable.
///
/// Optionally fails on specific combinations, to exercise the
/// all-or-nothing join.
#[derive(Default)]
pub struct ScriptedOracle {
    purchasable: Vec<OptionCombination>,
    failing: Vec<OptionCombination>,
}

impl ScriptedOracle {
    /// An oracle that reports exactly `purchasable` as purchasable.
    #[must_use]
    pub fn purchasable(purchasable: Vec<OptionCombination>) -> Self {
        Self {
            purchasable,
            failing: Vec::new(),
        }
    }

    /// Make the oracle fail whenever `combination` is queried.
    #[must_use]
    pub fn failing_on(mut self, combination: OptionCombination) -> Self {
        self.failing.push(combination);
        self
    }
}

#[async_trait]
impl AvailabilityOracle for ScriptedOracle {
    async fn check_availability(
        &self,
        _product_id: &ProductId,
        combination: &OptionCombination,
    ) -> Result<OptionsAvailability, PlatformError> {
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

/// Cart store that behaves like the hosted platform's.
///
/// Accumulates submitted lines, assigns its own sequential line IDs, and
/// serves them back as the current cart. Clones share state.
#[derive(Clone)]
pub struct InMemoryCartStore {
    lines: Arc<Mutex<Vec<RawLineItem>>>,
    next_line: Arc<AtomicU32>,
    product_name: String,
}

impl InMemoryCartStore {
    /// An empty cart store labeling lines with `product_name`.
    #[must_use]
    pub fn new(product_name: &str) -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            next_line: Arc::new(AtomicU32::new(1)),
            product_name: product_name.to_string(),
        }
    }

    /// The store's own view of its lines, store IDs included.
    #[must_use]
    pub fn lines(&self) -> Vec<RawLineItem> {
        self.lines.lock().expect("lock").clone()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn add_line_items(&self, items: Vec<CartLineItem>) -> Result<(), PlatformError> {
        let mut lines = self.lines.lock().expect("lock");
        for item in items {
            let line_number = self.next_line.fetch_add(1, Ordering::SeqCst);
            lines.push(RawLineItem {
                id: LineItemId::new(format!("store-line-{line_number}")),
                product_id: item.product_id,
                name: self.product_name.clone(),
                quantity: item.quantity,
                price: None,
                options: item.options,
            });
        }
        Ok(())
    }

    async fn current_cart(&self) -> Result<CurrentCart, PlatformError> {
        Ok(CurrentCart {
            id: CartId::new("cart-1"),
            checkout_url: Some("https://shop.example/checkout/cart-1".to_string()),
            note: None,
            line_items: self.lines.lock().expect("lock").clone(),
        })
    }
}
