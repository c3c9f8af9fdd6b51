//! Inventory product payload.

use serde::Serialize;

/// A product to add to inventory.
///
/// `name`, `sku`, and `qty` are required; the rest are optional descriptive
/// fields. Quantities and monetary amounts are JSON numbers on the wire, so
/// they are `f64` here; validation rejects negative and non-finite values.
///
/// # Example
///
/// ```
/// use lunartools_sdk::payload::Product;
///
/// let product = Product::new("Air Max 97", "SKU-4411", 5.0)
///     .with_size("10.5")
///     .with_value(180.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product display name (required, non-empty).
    pub name: String,
    /// Stock keeping unit (required, non-empty).
    pub sku: String,
    /// Quantity on hand (required, finite, non-negative; zero is valid).
    pub qty: f64,
    /// Size label, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Store the product belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    /// Current market value (non-negative if present).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Amount spent acquiring the product (non-negative if present).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<f64>,
}

impl Product {
    /// Creates a product with the required fields; optional fields unset.
    #[must_use]
    pub fn new(name: impl Into<String>, sku: impl Into<String>, qty: f64) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            qty,
            size: None,
            store: None,
            value: None,
            spent: None,
        }
    }

    /// Sets the size label.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the store name.
    #[must_use]
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }

    /// Sets the market value.
    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the amount spent.
    #[must_use]
    pub const fn with_spent(mut self, spent: f64) -> Self {
        self.spent = Some(spent);
        self
    }
}
