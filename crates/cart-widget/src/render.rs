//! Cart display surface renderer.
//!
//! Every refresh tears a surface's subtree down and builds it again from the
//! cart. Remove controls are created fresh each time, so each carries exactly
//! one listener.

use cart_core::cart::{Cart, LineItem};

use crate::config::WidgetConfig;
use crate::dom::{Document, Listener, NodeId};

/// Inline style of the empty-state message.
const EMPTY_MESSAGE_STYLE: &str = "padding: 20px; text-align: center; color: #666;";

/// Label of each line's remove control.
const REMOVE_LABEL: &str = "\u{274c}";

/// Render every display surface on the page. Returns how many were rendered.
pub fn render_all(doc: &mut Document, cart: &Cart, config: &WidgetConfig) -> usize {
    let surfaces = doc.query_all(config.surface_classes.as_slice());
    let mut rendered = 0;
    for surface in surfaces {
        // An earlier surface may have contained this one and freed it.
        if doc.contains(surface) {
            render_surface(doc, surface, cart, config);
            rendered += 1;
        }
    }
    rendered
}

/// Rebuild one display surface.
pub fn render_surface(doc: &mut Document, surface: NodeId, cart: &Cart, config: &WidgetConfig) {
    let caption = doc
        .find_by_tag(surface, "p")
        .map(|p| doc.inner_html(p))
        .unwrap_or_else(|| config.default_caption.clone());

    doc.clear_children(surface);

    let header = doc.append_element(surface, "p", &[]);
    doc.set_inner_html(header, &caption);

    if cart.is_empty() {
        render_empty(doc, surface, config);
        return;
    }

    let list = doc.append_element(surface, "div", &["cart-items"]);
    for item in cart.items() {
        render_line_item(doc, list, item, cart);
    }
    render_total(doc, surface, cart);
}

fn render_empty(doc: &mut Document, surface: NodeId, config: &WidgetConfig) {
    let message = doc.append_element(surface, "p", &[]);
    doc.set_attribute(message, "style", EMPTY_MESSAGE_STYLE);
    doc.set_text(message, &config.empty_message);
}

fn render_line_item(doc: &mut Document, list: NodeId, item: &LineItem, cart: &Cart) {
    let row = doc.append_element(list, "div", &["cart-item"]);
    doc.set_data(row, "product-id", item.id.as_str());

    let content = doc.append_element(row, "div", &["cart-item-content"]);

    let img = doc.create_element("img");
    doc.set_attribute(img, "src", &item.image);
    doc.set_attribute(img, "alt", &item.name);
    doc.add_class(img, "cart-item-image");
    doc.append_child(content, img);

    let info = doc.append_element(content, "div", &["cart-item-info"]);
    let name = doc.append_element(info, "div", &["cart-item-name"]);
    doc.set_text(name, &item.display_name());
    let price = doc.append_element(info, "div", &["cart-item-price"]);
    doc.set_text(price, &item.line_total(cart.currency()).display());

    let remove = doc.append_element(row, "button", &["cart-item-remove"]);
    doc.set_attribute(remove, "aria-label", "Remove item");
    doc.set_text(remove, REMOVE_LABEL);
    doc.set_listener(remove, Listener::RemoveItem(item.id.clone()));
}

fn render_total(doc: &mut Document, surface: NodeId, cart: &Cart) {
    let total = doc.append_element(surface, "div", &["cart-total"]);
    let label = doc.append_element(total, "span", &["cart-total-label"]);
    doc.set_text(label, "Total: ");
    let value = doc.append_element(total, "span", &["cart-total-value"]);
    doc.set_text(value, &cart.total().display());
}
