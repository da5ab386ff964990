//! The payload a card emits when the user adds their selection.

use std::fmt;

use serde::Serialize;

use crate::catalog::Product;
use crate::pricing::{surcharge_for, total_price};
use crate::selection::Selection;

/// What a card hands off on submission. No cart subsystem lives here; the
/// draft is only packaged and emitted for an external consumer.
#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct OrderDraft {
    pub id: u32,
    pub title: String,
    pub size: String,
    pub color: String,
    pub price: f64,
}

impl OrderDraft {
    /// Snapshots the current selection with its derived price.
    pub fn new(product: &Product, selection: &Selection) -> Self {
        let surcharge = surcharge_for(&product.sizes, &selection.size);
        Self {
            id: product.id,
            title: product.title.clone(),
            size: selection.size.clone(),
            color: selection.color.clone(),
            price: total_price(product.base_price, surcharge),
        }
    }
}

impl fmt::Display for OrderDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added: {} | size: {}, color: {} | price: {}$",
            self.title, self.size, self.color, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeOption;
    use pretty_assertions::assert_eq;

    fn tee() -> Product {
        Product {
            id: 1,
            name: "shirt-tee".to_string(),
            title: "Tee".to_string(),
            base_price: 20.0,
            colors: vec!["red".to_string(), "blue".to_string()],
            sizes: vec![
                SizeOption {
                    name: "S".to_string(),
                    additional_price: 0.0,
                },
                SizeOption {
                    name: "M".to_string(),
                    additional_price: 2.0,
                },
                SizeOption {
                    name: "L".to_string(),
                    additional_price: 4.0,
                },
            ],
        }
    }

    #[test]
    fn snapshots_the_selection_with_its_derived_price() {
        let product = tee();
        let mut selection = Selection::new(&product);
        selection.select_size("L");
        selection.select_color("blue");

        let draft = OrderDraft::new(&product, &selection);
        assert_eq!(
            draft,
            OrderDraft {
                id: 1,
                title: "Tee".to_string(),
                size: "L".to_string(),
                color: "blue".to_string(),
                price: 24.0,
            }
        );
    }

    #[test]
    fn summary_line_reads_like_a_receipt() {
        let product = tee();
        let selection = Selection::new(&product);
        let draft = OrderDraft::new(&product, &selection);
        assert_eq!(
            draft.to_string(),
            "Added: Tee | size: S, color: red | price: 20$"
        );
    }
}
