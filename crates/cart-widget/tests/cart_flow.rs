//! End-to-end tests: a page fixture, a shared store, and clicks.

use std::rc::Rc;

use cart_cache::{KeyValueStore, MemoryStore};
use cart_core::{CartError, ItemId};
use cart_observability::{LogLevel, MemorySink};
use cart_widget::{AddOutcome, ClickOutcome, Document, NodeId, ShoppingCart, WidgetConfig};

/// A catalog page with two surfaces, two scraped cards and one structured button.
struct Page {
    doc: Document,
    mobile: NodeId,
    desktop: NodeId,
    kingdom_hearts: NodeId,
    scarface: NodeId,
    structured: NodeId,
    broken: NodeId,
}

fn card(doc: &mut Document, category: &str, name: &str, price: &str) -> NodeId {
    let root = doc.root();
    let article = doc.append_element(root, "article", &["item", category]);
    let title = doc.append_element(article, "h2", &["item-name"]);
    doc.set_text(title, name);
    let cost = doc.append_element(article, "p", &["item-price"]);
    doc.set_text(cost, price);
    doc.append_element(article, "button", &["button-cart"])
}

fn page() -> Page {
    let mut doc = Document::new();
    let root = doc.root();

    let mobile = doc.append_element(root, "div", &["cart"]);
    let desktop = doc.append_element(root, "div", &["cart-desktop"]);
    let caption = doc.append_element(desktop, "p", &[]);
    doc.set_inner_html(caption, "<i class=\"icon\"></i> My Basket");

    let kingdom_hearts = card(&mut doc, "item-game", "Kingdom Hearts", "10,00 EUR");
    let scarface = card(&mut doc, "item-vhs", "Scarface", "5,50 EUR");

    let structured = doc.append_element(root, "button", &["cart-button"]);
    doc.set_data(structured, "id", "yeezus-lp");
    doc.set_data(structured, "name", "Yeezus");
    doc.set_data(structured, "price", "7.00");
    doc.set_data(structured, "image", "/assets/yeezus.jpg");

    let broken = doc.append_element(root, "button", &["cart-button"]);

    Page {
        doc,
        mobile,
        desktop,
        kingdom_hearts,
        scarface,
        structured,
        broken,
    }
}

fn mount(doc: Document, store: Rc<MemoryStore>) -> (ShoppingCart<Rc<MemoryStore>>, MemorySink) {
    let sink = MemorySink::new();
    let cart = ShoppingCart::mount_with_sink(
        doc,
        store,
        WidgetConfig::default(),
        Rc::new(sink.clone()),
    );
    (cart, sink)
}

fn ids(cart: &ShoppingCart<Rc<MemoryStore>>) -> Vec<String> {
    cart.store()
        .items()
        .iter()
        .map(|i| i.id.as_str().to_string())
        .collect()
}

#[test]
fn empty_page_renders_empty_state_on_every_surface() {
    let p = page();
    let (cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));
    let doc = cart.document();

    assert!(cart.store().total().is_zero());
    for surface in [p.mobile, p.desktop] {
        let html = doc.inner_html(surface);
        assert!(html.contains("Your cart is empty"));
        assert!(!html.contains("cart-items"));
        assert!(!html.contains("cart-total"));
    }
}

#[test]
fn adding_scraped_products_updates_all_surfaces() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));

    cart.click(p.kingdom_hearts);
    cart.click(p.scarface);
    cart.click(p.scarface);

    assert_eq!(ids(&cart), vec!["kingdom-hearts", "scarface"]);
    assert_eq!(cart.store().total().display(), "21.00 EUR");

    let doc = cart.document();
    let mobile = doc.inner_html(p.mobile);
    assert!(mobile.contains("Scarface (2)"));
    assert!(mobile.contains("11.00 EUR"));
    assert!(mobile.contains(r#"<span class="cart-total-value">21.00 EUR</span>"#));
    assert!(mobile.contains(r#"src="/assets/kingdomHearts.jpg""#));

    // Same content below the caption on both surfaces.
    let body = |html: &str| html.split_once("</p>").map(|(_, rest)| rest.to_string());
    assert_eq!(body(&mobile), body(&doc.inner_html(p.desktop)));
}

#[test]
fn captions_survive_refreshes() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));
    cart.click(p.structured);
    cart.refresh_display();

    let doc = cart.document();
    assert!(doc
        .inner_html(p.desktop)
        .starts_with(r#"<p><i class="icon"></i> My Basket</p>"#));
    assert!(doc
        .inner_html(p.mobile)
        .starts_with(r#"<p><i class="fa-solid fa-basket-shopping"></i> Shopping Cart</p>"#));
}

#[test]
fn refresh_is_byte_identical() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));
    cart.click(p.kingdom_hearts);
    cart.click(p.structured);

    cart.refresh_display();
    let first = cart.document().outer_html(cart.document().root());
    cart.refresh_display();
    let second = cart.document().outer_html(cart.document().root());

    assert_eq!(first, second);
}

#[test]
fn structured_button_uses_its_own_id_and_image() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));

    let outcome = cart.click(p.structured);

    assert_eq!(
        outcome,
        Some(ClickOutcome::Add(AddOutcome::Added(ItemId::new("yeezus-lp"))))
    );
    let item = cart.store().get(&ItemId::new("yeezus-lp")).unwrap();
    assert_eq!(item.image, "/assets/yeezus.jpg");
    assert_eq!(item.price, 7.0);
}

#[test]
fn repeated_adds_increment_a_single_line() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));

    for _ in 0..5 {
        cart.click(p.kingdom_hearts);
    }

    assert_eq!(ids(&cart), vec!["kingdom-hearts"]);
    assert_eq!(cart.store().items()[0].quantity, 5);
    assert_eq!(cart.store().item_count(), 5);
}

#[test]
fn remove_control_undoes_add() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));
    cart.click(p.scarface);
    let before = ids(&cart);

    cart.click(p.kingdom_hearts);
    let control = cart.remove_control(&ItemId::new("kingdom-hearts")).unwrap();
    let outcome = cart.click(control);

    assert_eq!(
        outcome,
        Some(ClickOutcome::Remove {
            id: ItemId::new("kingdom-hearts"),
            removed: true
        })
    );
    assert_eq!(ids(&cart), before);
}

#[test]
fn each_rendered_line_has_exactly_one_remove_control() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));
    cart.click(p.kingdom_hearts);
    cart.click(p.scarface);
    for _ in 0..3 {
        cart.refresh_display();
    }

    let doc = cart.document();
    for surface in cart.surfaces() {
        let controls: Vec<_> = doc
            .descendants(surface)
            .into_iter()
            .filter(|n| doc.has_class(*n, "cart-item-remove"))
            .collect();
        assert_eq!(controls.len(), 2);
    }
}

#[test]
fn stale_remove_control_does_nothing() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));
    cart.click(p.kingdom_hearts);
    let stale = cart.remove_control(&ItemId::new("kingdom-hearts")).unwrap();

    cart.refresh_display();

    assert_eq!(cart.click(stale), None);
    assert_eq!(cart.store().len(), 1);
}

#[test]
fn cart_survives_a_new_page_load() {
    let store = Rc::new(MemoryStore::new());
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::clone(&store));
    cart.click(p.kingdom_hearts);
    cart.click(p.structured);
    cart.click(p.structured);
    let saved = cart.store().items().to_vec();
    drop(cart);

    let reloaded = page();
    let (cart, _) = mount(reloaded.doc, store);

    assert_eq!(cart.store().items(), saved.as_slice());
    assert!(cart
        .document()
        .inner_html(reloaded.mobile)
        .contains("Yeezus (2)"));
}

#[test]
fn persisted_layout_is_a_plain_array() {
    let store = Rc::new(MemoryStore::new());
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::clone(&store));
    cart.click(p.scarface);

    let raw = store.get_item("shoppingCart").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": "scarface",
            "name": "Scarface",
            "price": 5.5,
            "image": "/assets/scarface.jpg",
            "quantity": 1
        }])
    );
}

#[test]
fn foreign_fields_in_storage_are_tolerated() {
    let store = Rc::new(MemoryStore::new());
    store
        .set_item(
            "shoppingCart",
            r#"[{"id":"a","name":"A","price":1.5,"quantity":2,"addedAt":123}]"#,
        )
        .unwrap();

    let (cart, _) = mount(page().doc, store);

    assert_eq!(cart.store().total().display(), "3.00 EUR");
}

#[test]
fn corrupt_storage_starts_empty() {
    let store = Rc::new(MemoryStore::new());
    store.set_item("shoppingCart", "not json").unwrap();

    let (cart, sink) = mount(page().doc, store);

    assert!(cart.store().is_empty());
    assert_eq!(sink.at_level(LogLevel::Warn).len(), 1);
}

#[test]
fn unresolvable_trigger_leaves_cart_and_storage_alone() {
    let store = Rc::new(MemoryStore::new());
    let p = page();
    let (mut cart, sink) = mount(p.doc, Rc::clone(&store));
    cart.click(p.scarface);
    let stored = store.get_item("shoppingCart").unwrap();
    let html = cart.document().outer_html(p.mobile);

    let outcome = cart.click(p.broken);

    assert_eq!(
        outcome,
        Some(ClickOutcome::Add(AddOutcome::Rejected(CartError::MissingName)))
    );
    assert_eq!(ids(&cart), vec!["scarface"]);
    assert_eq!(store.get_item("shoppingCart").unwrap(), stored);
    assert_eq!(cart.document().outer_html(p.mobile), html);
    assert_eq!(
        sink.last().map(|e| e.message),
        Some("Could not extract product data".to_string())
    );
}

#[test]
fn full_storage_keeps_the_in_memory_cart() {
    let store = Rc::new(MemoryStore::with_quota(10));
    let p = page();
    let (mut cart, sink) = mount(p.doc, Rc::clone(&store));

    cart.click(p.kingdom_hearts);

    assert_eq!(cart.store().len(), 1);
    assert!(cart.document().inner_html(p.mobile).contains("Kingdom Hearts"));
    assert!(store.is_empty());
    assert_eq!(sink.at_level(LogLevel::Error).len(), 1);
}

#[test]
fn clicks_on_unbound_nodes_are_ignored() {
    let p = page();
    let (mut cart, _) = mount(p.doc, Rc::new(MemoryStore::new()));
    let root = cart.document().root();

    assert_eq!(cart.click(root), None);
    assert_eq!(cart.click(p.mobile), None);
}

#[test]
fn custom_configuration_is_honoured() {
    let mut doc = Document::new();
    let root = doc.root();
    let surface = doc.append_element(root, "section", &["basket"]);
    let button = doc.append_element(root, "a", &["buy"]);
    doc.set_data(button, "name", "Gift Card");
    doc.set_data(button, "price", "$25.00");

    let config = WidgetConfig::from_toml_str(
        r#"
        storage_key = "basket-v2"
        currency = "USD"
        trigger_classes = ["buy"]
        surface_classes = ["basket"]
        empty_message = "Nothing here yet"
        "#,
    )
    .unwrap();
    let store = Rc::new(MemoryStore::new());
    let mut cart = ShoppingCart::mount_with_sink(
        doc,
        Rc::clone(&store),
        config,
        Rc::new(MemorySink::new()),
    );
    assert!(cart
        .document()
        .inner_html(surface)
        .contains("Nothing here yet"));

    cart.click(button);

    assert!(store.get_item("basket-v2").unwrap().is_some());
    assert!(store.get_item("shoppingCart").unwrap().is_none());
    assert!(cart
        .document()
        .inner_html(surface)
        .contains(r#"<span class="cart-total-value">25.00 USD</span>"#));
}

#[test]
fn sub_cent_prices_are_rounded_only_for_display() {
    let store = Rc::new(MemoryStore::new());
    store
        .set_item(
            "shoppingCart",
            r#"[{"id":"penny","name":"Penny Sweets","price":0.333,"image":"","quantity":3}]"#,
        )
        .unwrap();
    let p = page();
    let (cart, _) = mount(p.doc, store);

    assert_eq!(cart.store().total().display(), "1.00 EUR");
    let html = cart.document().inner_html(p.mobile);
    assert!(html.contains(r#"<div class="cart-item-price">1.00 EUR</div>"#));
    assert!(html.contains(r#"<span class="cart-total-value">1.00 EUR</span>"#));
}

#[test]
fn tracing_log_target_from_configuration() {
    let config =
        WidgetConfig::from_toml_str("log_target = \"tracing\"\nlog_level = \"debug\"").unwrap();
    let p = page();
    let mut cart = ShoppingCart::mount(p.doc, MemoryStore::new(), config);

    assert_eq!(
        cart.click(p.broken),
        Some(ClickOutcome::Add(AddOutcome::Rejected(CartError::MissingName)))
    );
    assert!(cart.store().is_empty());
}
