//! Per-card selection state: the chosen size and color, plus the one-shot
//! image fallback that fires when a product shot fails to load.

use crate::catalog::Product;
use crate::pricing::{FALLBACK_IMAGE_EXT, PRIMARY_IMAGE_EXT};

/// The options one card currently has picked.
///
/// `size` is always a member of the product's size names and `color` a
/// member of its colors: both are seeded from the catalog record and only
/// overwritten with values drawn from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub size: String,
    pub color: String,
    image_fallback: bool,
}

impl Selection {
    /// Starts from the product's first size and color.
    pub fn new(product: &Product) -> Self {
        Self {
            size: product.sizes[0].name.clone(),
            color: product.colors[0].clone(),
            image_fallback: false,
        }
    }

    /// Picks a size. Re-picking the current size changes nothing.
    pub fn select_size(&mut self, name: &str) {
        if self.size != name {
            self.size = name.to_string();
        }
    }

    /// Picks a color. A new color re-arms the image fallback for it;
    /// re-picking the current color changes nothing.
    pub fn select_color(&mut self, color: &str) {
        if self.color != color {
            self.color = color.to_string();
            self.image_fallback = false;
        }
    }

    /// Records a failed image load and reports whether a fallback attempt
    /// should be issued. At most one attempt per selected color.
    pub fn note_image_error(&mut self) -> bool {
        if self.image_fallback {
            return false;
        }
        self.image_fallback = true;
        true
    }

    /// Extension the card should currently request for its product shot.
    pub fn image_extension(&self) -> &'static str {
        if self.image_fallback {
            FALLBACK_IMAGE_EXT
        } else {
            PRIMARY_IMAGE_EXT
        }
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
    fn starts_from_the_first_size_and_color() {
        let selection = Selection::new(&tee());
        assert_eq!(selection.size, "S");
        assert_eq!(selection.color, "red");
        assert_eq!(selection.image_extension(), "jpg");
    }

    #[test]
    fn selecting_overwrites_the_matching_field_only() {
        let mut selection = Selection::new(&tee());
        selection.select_size("L");
        assert_eq!(selection.size, "L");
        assert_eq!(selection.color, "red");

        selection.select_color("blue");
        assert_eq!(selection.size, "L");
        assert_eq!(selection.color, "blue");
    }

    #[test]
    fn reselecting_the_current_value_is_a_no_op() {
        let mut selection = Selection::new(&tee());
        selection.note_image_error();
        let before = selection.clone();

        selection.select_size("S");
        selection.select_color("red");
        assert_eq!(selection, before);
        // the fallback stays armed for the unchanged color
        assert_eq!(selection.image_extension(), "png");
    }

    #[test]
    fn image_fallback_fires_exactly_once() {
        let mut selection = Selection::new(&tee());
        assert!(selection.note_image_error());
        assert_eq!(selection.image_extension(), "png");
        // a second failure must not trigger another attempt
        assert!(!selection.note_image_error());
        assert_eq!(selection.image_extension(), "png");
    }

    #[test]
    fn a_new_color_rearms_the_image_fallback() {
        let mut selection = Selection::new(&tee());
        selection.note_image_error();
        assert_eq!(selection.image_extension(), "png");

        selection.select_color("blue");
        assert_eq!(selection.image_extension(), "jpg");
        assert!(selection.note_image_error());
    }
}
