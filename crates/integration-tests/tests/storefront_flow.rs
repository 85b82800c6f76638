//! Cart mutation, write-through persistence, and checkout flows, driven
//! through the application shell the way page-level views drive it.

use lumina_core::{Cart, ProductId};
use lumina_integration_tests::TestProfile;
use lumina_storefront::store::{self, keys};

/// Re-read the persisted cart the way a rehydration would.
fn persisted_cart(profile: &TestProfile) -> Cart {
    store::read_json(&profile.store(), keys::CART)
        .expect("store read failed")
        .unwrap_or_default()
}

#[test]
fn test_cart_scenario_end_to_end() {
    let profile = TestProfile::new();
    let mut app = profile.boot();

    let p1 = app.catalog().list()[0].clone();
    let id = p1.id.clone();

    // start empty
    assert!(app.cart().is_empty());

    app.add_to_cart(&p1).expect("add failed");
    assert_eq!(app.cart().items().len(), 1);
    assert_eq!(app.cart().items()[0].quantity, 1);

    app.add_to_cart(&p1).expect("add failed");
    assert_eq!(app.cart().items().len(), 1);
    assert_eq!(app.cart().items()[0].quantity, 2);

    app.update_quantity(&id, 5).expect("update failed");
    assert_eq!(app.cart().items()[0].quantity, 5);

    app.remove_from_cart(&id).expect("remove failed");
    assert!(app.cart().is_empty());
}

#[test]
fn test_every_mutation_is_written_through() {
    let profile = TestProfile::new();
    let mut app = profile.boot();

    let p1 = app.catalog().list()[0].clone();
    let p2 = app.catalog().list()[1].clone();

    app.add_to_cart(&p1).expect("add failed");
    assert_eq!(persisted_cart(&profile), *app.cart());

    app.add_to_cart(&p2).expect("add failed");
    assert_eq!(persisted_cart(&profile), *app.cart());

    app.update_quantity(&p1.id, 3).expect("update failed");
    assert_eq!(persisted_cart(&profile), *app.cart());

    app.remove_from_cart(&p2.id).expect("remove failed");
    assert_eq!(persisted_cart(&profile), *app.cart());

    app.clear_cart().expect("clear failed");
    assert_eq!(persisted_cart(&profile), *app.cart());
}

#[test]
fn test_guest_cart_survives_reload() {
    let profile = TestProfile::new();

    {
        let mut app = profile.boot();
        let product = app.catalog().list()[0].clone();
        app.add_to_cart(&product).expect("add failed");
        app.add_to_cart(&product).expect("add failed");
    }

    // a fresh boot over the same profile rehydrates the same cart
    let app = profile.boot();
    assert_eq!(app.cart_count(), 2);
    assert_eq!(app.cart().items()[0].quantity, 2);
}

#[test]
fn test_corrupted_cart_rehydrates_empty() {
    let profile = TestProfile::new();

    {
        let mut app = profile.boot();
        let product = app.catalog().list()[0].clone();
        app.add_to_cart(&product).expect("add failed");
    }

    // stomp the stored cart with junk bytes
    use lumina_storefront::store::StoreAdapter;
    profile
        .store()
        .write(keys::CART, "][ not a cart ][")
        .expect("write failed");

    let app = profile.boot();
    assert!(app.cart().is_empty());
    assert_eq!(app.cart_count(), 0);
}

#[test]
fn test_checkout_places_order_and_clears_cart() {
    let profile = TestProfile::new();
    let mut app = profile.boot();

    app.register("Ada", "ada@example.com", "correct-horse")
        .expect("register failed");

    let p1 = app.catalog().list()[0].clone();
    let p2 = app.catalog().list()[1].clone();
    app.add_to_cart(&p1).expect("add failed");
    app.add_to_cart(&p2).expect("add failed");
    app.update_quantity(&p1.id, 2).expect("update failed");

    let subtotal = app.cart().subtotal();
    let order = app.checkout().expect("checkout failed");

    assert_eq!(order.total, subtotal);
    assert_eq!(order.items.len(), 2);
    assert!(app.cart().is_empty());
    assert!(persisted_cart(&profile).is_empty());

    // the order shows up in history, also after a reload
    let history = app.order_history().expect("history failed");
    assert_eq!(history, vec![order.clone()]);

    let reloaded = profile.boot();
    assert_eq!(reloaded.order_history().expect("history failed"), vec![order]);
}

#[test]
fn test_removing_unknown_product_is_benign() {
    let profile = TestProfile::new();
    let mut app = profile.boot();

    let product = app.catalog().list()[0].clone();
    app.add_to_cart(&product).expect("add failed");

    app.remove_from_cart(&ProductId::new("no-such-product"))
        .expect("remove failed");
    app.update_quantity(&ProductId::new("no-such-product"), 9)
        .expect("update failed");

    assert_eq!(app.cart_count(), 1);
}
