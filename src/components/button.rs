use dioxus::prelude::*;

/// Shared button shell for the storefront controls.
#[component]
pub fn Button(class: Option<String>, aria_label: Option<String>, children: Element) -> Element {
    rsx! {
        button { class, aria_label, {children} }
    }
}
