//! Pure price and image-reference derivations backing the product card.

use crate::catalog::SizeOption;

/// Where product shots are served from.
pub const IMAGE_ROOT: &str = "/assets/products";

/// Extension requested first for a product shot.
pub const PRIMARY_IMAGE_EXT: &str = "jpg";

/// Extension requested once if the primary shot fails to load.
pub const FALLBACK_IMAGE_EXT: &str = "png";

/// Surcharge of the first size matching `size_name`.
///
/// Falls back to 0 when nothing matches; selections are always drawn from
/// the product's own size list, so the fallback is never expected to fire.
pub fn surcharge_for(sizes: &[SizeOption], size_name: &str) -> f64 {
    sizes
        .iter()
        .find(|size| size.name == size_name)
        .map(|size| size.additional_price)
        .unwrap_or(0.0)
}

/// Price displayed on the card: base price plus the selected surcharge.
pub fn total_price(base_price: f64, surcharge: f64) -> f64 {
    base_price + surcharge
}

/// Builds `<root>/<product-name>--<color>.<ext>`.
pub fn image_source(root: &str, product_name: &str, color: &str, ext: &str) -> String {
    format!("{root}/{product_name}--{color}.{ext}")
}
