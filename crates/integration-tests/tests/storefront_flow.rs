//! Full product-to-cart flow over the in-memory platform fakes.
//!
//! Walks the one-way data flow end to end: raw product -> catalog ->
//! availability -> selection -> cart orchestrator -> cart store.

use driftwood_core::ProductId;
use driftwood_integration_tests::support::{InMemoryCartStore, ScriptedOracle};
use driftwood_storefront::types::{OptionChoice, OptionCombination, Product, ProductOption};
use driftwood_storefront::{
    CartOrchestrator, OptionRole, SelectionState, cross_product, dimension_view,
    in_stock_combinations,
};

fn choice(description: &str, value: &str, in_stock: bool) -> OptionChoice {
    OptionChoice {
        description: description.to_string(),
        value: value.to_string(),
        in_stock,
        id: None,
    }
}

/// The worked example: Color [Red in stock, Blue out], Size [S, M in stock].
fn linen_shirt() -> Product {
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

fn combo(color: &str, size: &str) -> OptionCombination {
    OptionCombination::new()
        .with("Color", color)
        .with("Size", size)
}

#[tokio::test]
async fn test_full_flow_from_product_to_cart() {
    let product = linen_shirt();
    let oracle = ScriptedOracle::purchasable(vec![combo("Red", "S"), combo("Red", "M")]);
    let store = InMemoryCartStore::new("Linen Shirt");

    // Catalog: only Red survives the stock filter on Color.
    let colors = dimension_view(&product.options, &["Color"]);
    let names: Vec<&str> = colors.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["Red"]);

    // Cross product: 2 x 2 combinations.
    assert_eq!(cross_product(&product.options).len(), 4);

    // Availability: exactly the two Red combinations survive.
    let available = in_stock_combinations(&oracle, &product)
        .await
        .expect("resolution");
    assert_eq!(available.len(), 2);

    // Selection: pick Red, see both sizes, pick M.
    let mut state = SelectionState::new(&product);
    state.assign_role(OptionRole::Color, &["Colour", "Color"]);
    state.assign_role(OptionRole::Size, &["Size"]);
    state.set_in_stock_combinations(available);

    state.select_color("Red");
    let sizes: Vec<&str> = state
        .size_candidates()
        .iter()
        .map(|row| row.value.as_str())
        .collect();
    assert_eq!(sizes, ["S", "M"]);
    state.select_size("M");

    // Cart: one line, the selection verbatim.
    let orchestrator = CartOrchestrator::new(store.clone());
    orchestrator
        .add_to_cart(&mut state, 2)
        .await
        .expect("add to cart");

    let lines = store.lines();
    assert_eq!(lines.len(), 1);
    let line = lines.first().expect("line");
    assert_eq!(line.product_id, ProductId::new("prod-1"));
    assert_eq!(line.quantity, 2);
    assert_eq!(line.options, combo("Red", "M"));
}

#[tokio::test]
async fn test_snapshot_discards_store_line_ids() {
    let product = linen_shirt();
    let store = InMemoryCartStore::new("Linen Shirt");
    let orchestrator = CartOrchestrator::new(store.clone());

    let mut state = SelectionState::new(&product);
    state.assign_role(OptionRole::Color, &["Color"]);
    state.select_color("Red");
    orchestrator
        .add_to_cart(&mut state, 1)
        .await
        .expect("first add");
    state.select_color("Blue");
    orchestrator
        .add_to_cart(&mut state, 3)
        .await
        .expect("second add");

    let snapshot = orchestrator
        .cart_snapshot()
        .await
        .expect("snapshot")
        .expect("cart present");

    assert_eq!(snapshot.metadata.cart_id.as_str(), "cart-1");
    assert_eq!(snapshot.line_items.len(), 2);

    // Fresh display IDs, none of them the store's own.
    let store_ids: Vec<String> = store
        .lines()
        .iter()
        .map(|line| line.id.as_str().to_string())
        .collect();
    for line in &snapshot.line_items {
        assert!(!store_ids.contains(&line.id.to_string()));
    }
    let first = snapshot.line_items.first().expect("line");
    let second = snapshot.line_items.get(1).expect("line");
    assert_ne!(first.id, second.id);

    // Lines otherwise unchanged, in store order.
    assert_eq!(first.quantity, 1);
    assert_eq!(first.options.get("Color"), Some("Red"));
    assert_eq!(second.quantity, 3);
    assert_eq!(second.options.get("Color"), Some("Blue"));
}

#[tokio::test]
async fn test_empty_store_reports_no_cart_and_zero_quantity() {
    let store = InMemoryCartStore::new("Linen Shirt");
    let orchestrator = CartOrchestrator::new(store);

    assert!(orchestrator
        .cart_snapshot()
        .await
        .expect("snapshot")
        .is_none());
    assert_eq!(orchestrator.cart_quantity().await.expect("quantity"), 0);
}

#[tokio::test]
async fn test_cart_quantity_accumulates_across_adds() {
    let product = linen_shirt();
    let store = InMemoryCartStore::new("Linen Shirt");
    let orchestrator = CartOrchestrator::new(store);

    let mut state = SelectionState::new(&product);
    state.assign_role(OptionRole::Color, &["Color"]);
    state.select_color("Red");

    orchestrator
        .add_to_cart(&mut state, 2)
        .await
        .expect("first add");
    orchestrator
        .add_to_cart(&mut state, 3)
        .await
        .expect("second add");

    assert_eq!(orchestrator.cart_quantity().await.expect("quantity"), 5);
}
