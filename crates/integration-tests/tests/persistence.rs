//! Persistence round trips, legacy-data interop, and corruption recovery.

use rust_decimal::Decimal;

use sleep_outside_cart::{CartLedger, JsonFileStore, LocalStore, MemoryStore, order_totals};
use sleep_outside_core::{ItemRecord, ProductId};
use sleep_outside_integration_tests::line_item;

#[test]
fn save_then_load_returns_the_same_records() {
    let mut store = MemoryStore::new();
    let records: Vec<ItemRecord> = vec![
        (&line_item("A", 2000, 1)).into(),
        (&line_item("B", 3000, 2)).into(),
    ];

    store.save("so-cart", &records).unwrap();
    assert_eq!(store.load::<ItemRecord>("so-cart").unwrap(), records);
}

#[test]
fn legacy_payload_with_qtd_and_list_price_loads_and_prices_correctly() {
    // Data persisted by an older storefront build: Qtd spelling, no
    // FinalPrice, pre-PascalCase field casing throughout.
    let mut store = MemoryStore::new();
    store.insert_raw(
        "so-cart",
        r#"[
            {"Id":"985RF","Name":"Talus Tent","ListPrice":199.99,"Qtd":2,
             "Images":{"PrimaryMedium":"images/tents/985RF.jpg"},
             "Colors":[{"ColorName":"Sea Green"}]},
            {"Id":"344YJ","Name":"Rimrock Pack","FinalPrice":129.99}
        ]"#,
    );

    let cart = CartLedger::load(&store, "so-cart");
    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.subtotal(), Decimal::new(52997, 2));

    let totals = order_totals(&cart);
    assert_eq!(totals.shipping, Decimal::new(12, 0));

    // Saving normalizes: both price fields written, Quantity spelling.
    let mut cart = cart;
    cart.update_quantity(&mut store, &ProductId::new("344YJ"), 1)
        .unwrap();
    let raw = store.raw("so-cart").unwrap();
    assert!(raw.contains("\"Quantity\":"));
    assert!(raw.contains("\"FinalPrice\":199.99"));
    assert!(!raw.contains("Qtd"));
}

#[test]
fn corrupt_file_recovers_as_empty_cart() {
    let dir = std::env::temp_dir().join(format!("so-int-test-{}", std::process::id()));
    let mut store = JsonFileStore::open(&dir).unwrap();

    std::fs::write(store.path("so-cart").unwrap(), "{broken").unwrap();
    let cart = CartLedger::load(&store, "so-cart");
    assert!(cart.is_empty());

    // The engine keeps working over the corrupt key.
    let mut cart = cart;
    cart.add_or_merge(&mut store, line_item("A", 2000, 1))
        .unwrap();
    assert_eq!(CartLedger::load(&store, "so-cart").line_count(), 1);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn file_store_round_trips_a_full_cart() {
    let dir = std::env::temp_dir().join(format!("so-int-rt-{}", std::process::id()));
    let mut store = JsonFileStore::open(&dir).unwrap();

    let mut cart = CartLedger::empty("so-cart");
    cart.add_or_merge(&mut store, line_item("A", 2000, 1))
        .unwrap();
    cart.add_or_merge(
        &mut store,
        line_item("B", 3000, 2).with_color("Slate Blue"),
    )
    .unwrap();

    let reloaded = CartLedger::load(&JsonFileStore::open(&dir).unwrap(), "so-cart");
    assert_eq!(reloaded.items(), cart.items());

    std::fs::remove_dir_all(&dir).unwrap();
}
