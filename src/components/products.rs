use dioxus::prelude::*;

use crate::catalog;

use super::product::ProductCard;

/// The storefront grid: one keyed card per catalog record.
#[component]
pub fn Products() -> Element {
    let products = use_signal(|| {
        catalog::load_embedded().expect("Failed to load the embedded product catalog")
    });

    rsx! {
        section { class: "products",
            for product in products() {
                ProductCard { key: "{product.id}", product }
            }
        }
    }
}
