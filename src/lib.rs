//! A small storefront page built with Dioxus: a static shirt catalog
//! rendered as interactive product cards with size and color selection.

use dioxus::prelude::*;

pub mod catalog;
pub mod components;
pub mod order;
pub mod pricing;
pub mod selection;

use components::products::Products;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root of the storefront app.
pub fn app() -> Element {
    rsx! {
        Stylesheet { href: MAIN_CSS }
        header { class: "page-header",
            h1 { "Shirt Store" }
        }
        main {
            Products {}
        }
    }
}
