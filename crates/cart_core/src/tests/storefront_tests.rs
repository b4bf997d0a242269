use super::*;

const HEADPHONES: ProductId = ProductId(1);
const BACKPACK: ProductId = ProductId(2);
const TRACKER: ProductId = ProductId(3);
const BOTTLE: ProductId = ProductId(4);

fn card(storefront: &Storefront, id: ProductId) -> ProductCardView {
    storefront
        .card_views()
        .into_iter()
        .find(|view| view.id == id)
        .expect("card view")
}

#[test]
fn all_cards_start_enabled_at_quantity_one() {
    let storefront = Storefront::new();
    let views = storefront.card_views();

    assert_eq!(views.len(), 4);
    for view in views {
        assert!(view.controls_enabled, "{} should be enabled", view.title);
        assert_eq!(view.quantity, Quantity::ONE);
    }
    assert!(storefront.cart_panel().is_none());
}

#[test]
fn card_controls_disable_while_in_cart() {
    let mut storefront = Storefront::new();
    storefront.add_to_cart(TRACKER).expect("add tracker");

    assert!(!card(&storefront, TRACKER).controls_enabled);
    assert!(card(&storefront, HEADPHONES).controls_enabled);

    storefront.remove_from_cart(TRACKER).expect("removed");
    assert!(card(&storefront, TRACKER).controls_enabled);
}

#[test]
fn quantity_edits_are_ignored_while_locked() {
    let mut storefront = Storefront::new();
    storefront.increment(BACKPACK).expect("increment");
    storefront.add_to_cart(BACKPACK).expect("add");

    assert_eq!(storefront.increment(BACKPACK).expect("increment").get(), 2);
    assert_eq!(storefront.decrement(BACKPACK).expect("decrement").get(), 2);
    assert_eq!(storefront.cart().items()[0].quantity.get(), 2);
}

#[test]
fn duplicate_add_is_rejected() {
    let mut storefront = Storefront::new();
    storefront.add_to_cart(HEADPHONES).expect("first add");

    let err = storefront.add_to_cart(HEADPHONES).expect_err("second add");
    assert_eq!(err, CartError::AlreadyInCart(HEADPHONES));
    assert_eq!(storefront.cart().len(), 1);
}

#[test]
fn unknown_products_are_reported() {
    let mut storefront = Storefront::new();
    let missing = ProductId(42);

    assert_eq!(
        storefront.add_to_cart(missing),
        Err(CartError::UnknownProduct(missing))
    );
    assert_eq!(
        storefront.increment(missing),
        Err(CartError::UnknownProduct(missing))
    );
    assert!(storefront.remove_from_cart(missing).is_none());
}

#[test]
fn headphones_scenario_shows_and_hides_cart_panel() {
    let mut storefront = Storefront::new();
    storefront.increment(HEADPHONES).expect("2");
    storefront.increment(HEADPHONES).expect("3");
    storefront.add_to_cart(HEADPHONES).expect("add");

    let panel = storefront.cart_panel().expect("panel visible");
    assert_eq!(panel.lines.len(), 1);
    assert_eq!(panel.lines[0].label, "Wireless Headphones x 3");
    assert_eq!(panel.lines[0].subtotal_label, "$299.97");
    assert_eq!(panel.total_label, "$299.97");

    storefront.remove_from_cart(HEADPHONES).expect("removed");
    assert!(storefront.cart_panel().is_none());
}

#[test]
fn backpack_and_bottles_total() {
    let mut storefront = Storefront::new();
    storefront.add_to_cart(BACKPACK).expect("backpack");
    storefront
        .set_quantity(BOTTLE, Quantity::new(2).expect("qty"))
        .expect("set bottles");
    storefront.add_to_cart(BOTTLE).expect("bottles");

    let panel = storefront.cart_panel().expect("panel");
    let subtotals: Vec<_> = panel.lines.iter().map(|l| l.subtotal_label.as_str()).collect();
    assert_eq!(subtotals, ["$129.99", "$99.98"]);
    assert_eq!(panel.total_label, "$229.97");
}

#[test]
fn card_quantity_survives_remove() {
    let mut storefront = Storefront::new();
    storefront.increment(TRACKER).expect("increment");
    storefront.add_to_cart(TRACKER).expect("add");
    storefront.remove_from_cart(TRACKER).expect("remove");

    assert_eq!(storefront.quantity(TRACKER).map(Quantity::get), Some(2));
}
