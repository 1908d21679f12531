/// Image shown when a product has neither a front photo nor gallery images
pub const PLACEHOLDER_PRODUCT_IMAGE: &str = "/images/placeholder.png";

/// Display name used when a product has no brand and no product type
pub const FALLBACK_PRODUCT_NAME: &str = "Product";

/// `size` value meaning "look at `size_other` instead"
pub const OTHER_SIZE: &str = "Other";
