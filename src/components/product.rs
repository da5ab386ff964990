//! The product card: one interactive unit per catalog record.

use dioxus::document;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::catalog::{Product, SizeOption};
use crate::order::OrderDraft;
use crate::pricing::{image_source, surcharge_for, total_price, IMAGE_ROOT};
use crate::selection::Selection;

use super::button::Button;

/// Renders a product's image, title, derived price and option pickers, and
/// emits an [`OrderDraft`] when the add form is submitted.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut selection = use_signal({
        let product = product.clone();
        move || Selection::new(&product)
    });

    let price = use_memo({
        let sizes = product.sizes.clone();
        let base_price = product.base_price;
        move || total_price(base_price, surcharge_for(&sizes, &selection.read().size))
    });

    let img_src = use_memo({
        let name = product.name.clone();
        move || {
            let selection = selection.read();
            image_source(IMAGE_ROOT, &name, &selection.color, selection.image_extension())
        }
    });

    let onsubmit = {
        let product = product.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let draft = OrderDraft::new(&product, &selection.read());
            match serde_json::to_string(&draft) {
                Ok(payload) => info!(%payload, "add-to-cart submitted"),
                Err(err) => warn!(%err, "order draft did not serialize"),
            }
            _ = document::eval(&format!("alert({:?})", draft.to_string()));
        }
    };

    let onerror = {
        let name = product.name.clone();
        move |_| {
            if selection.write().note_image_error() {
                warn!(product = %name, "product shot failed to load, retrying with fallback extension");
            }
        }
    };

    rsx! {
        article { class: "product",
            div { class: "product__image",
                img { alt: "{product.title}", src: "{img_src}", onerror }
            }
            div { class: "product__body",
                header {
                    h2 { class: "product__title", "{product.title}" }
                    span { class: "product__price", "Price: {price}$" }
                }
                SizePicker {
                    sizes: product.sizes.clone(),
                    selected: selection.read().size.clone(),
                    onpick: move |name: String| selection.write().select_size(&name),
                }
                ColorPicker {
                    colors: product.colors.clone(),
                    selected: selection.read().color.clone(),
                    onpick: move |color: String| selection.write().select_color(&color),
                }
                form { onsubmit,
                    Button { class: "product__add", aria_label: "Add to cart",
                        span { class: "product__cart-icon", "🛒" }
                    }
                }
            }
        }
    }
}

/// Size choices for one card. Exactly one entry renders as pressed.
#[component]
pub fn SizePicker(sizes: Vec<SizeOption>, selected: String, onpick: EventHandler<String>) -> Element {
    rsx! {
        div { class: "product__options",
            h3 { class: "product__option-label", "Sizes" }
            ul { class: "product__choices",
                {sizes.iter().map(|size| {
                    let is_active = size.name == selected;
                    let pressed = if is_active { "true" } else { "false" };
                    let class = if is_active {
                        "product__choice is-active"
                    } else {
                        "product__choice"
                    };
                    let pick = size.name.clone();
                    rsx! {
                        li { key: "{size.name}",
                            button {
                                r#type: "button",
                                class: "{class}",
                                aria_pressed: "{pressed}",
                                title: "Size {size.name}",
                                onclick: move |_| onpick.call(pick.clone()),
                                "{size.name}"
                            }
                        }
                    }
                })}
            }
        }
    }
}

/// Color swatches for one card. Exactly one entry renders as pressed.
#[component]
pub fn ColorPicker(colors: Vec<String>, selected: String, onpick: EventHandler<String>) -> Element {
    rsx! {
        div { class: "product__options",
            h3 { class: "product__option-label", "Colors" }
            ul { class: "product__choices",
                {colors.iter().map(|color| {
                    let is_active = *color == selected;
                    let pressed = if is_active { "true" } else { "false" };
                    let class = swatch_class(color, is_active);
                    let pick = color.clone();
                    rsx! {
                        li { key: "{color}",
                            button {
                                r#type: "button",
                                class: "{class}",
                                aria_pressed: "{pressed}",
                                title: "{color}",
                                onclick: move |_| onpick.call(pick.clone()),
                            }
                        }
                    }
                })}
            }
        }
    }
}

/// Swatch class list; colors outside the stylesheet's palette get no
/// swatch modifier and render as a plain chip.
fn swatch_class(color: &str, is_active: bool) -> String {
    let mut class = String::from("product__choice product__swatch");
    if let Some(palette) = palette_class(color) {
        class.push(' ');
        class.push_str(palette);
    }
    if is_active {
        class.push_str(" is-active");
    }
    class
}

fn palette_class(color: &str) -> Option<&'static str> {
    match color {
        "black" => Some("color-black"),
        "red" => Some("color-red"),
        "white" => Some("color-white"),
        "blue" => Some("color-blue"),
        "green" => Some("color-green"),
        _ => None,
    }
}
