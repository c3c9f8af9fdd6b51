//! Order record payload.

use serde::Serialize;

/// An order record to submit to the backend.
///
/// `name`, `status`, and `order_number` are required; everything else is
/// free-form descriptive text the backend stores as-is (no client-side
/// validation beyond the required trio).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order display name (required, non-empty).
    pub name: String,
    /// Order status, e.g. "shipped" (required, non-empty).
    pub status: String,
    /// Retailer order number (required, non-empty).
    pub order_number: String,
    /// Product image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Tracking number or link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<String>,
    /// Order date, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Quantity ordered, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<String>,
    /// Unit price, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Order total, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_total: Option<String>,
    /// Account the order was placed with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Retailer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl Order {
    /// Creates an order with the required fields; optional fields unset.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        order_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            order_number: order_number.into(),
            image: None,
            tracking: None,
            date: None,
            qty: None,
            price: None,
            order_total: None,
            account: None,
            retailer: None,
            tags: None,
        }
    }

    /// Sets the product image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the tracking number or link.
    #[must_use]
    pub fn with_tracking(mut self, tracking: impl Into<String>) -> Self {
        self.tracking = Some(tracking.into());
        self
    }

    /// Sets the order date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the quantity ordered.
    #[must_use]
    pub fn with_qty(mut self, qty: impl Into<String>) -> Self {
        self.qty = Some(qty.into());
        self
    }

    /// Sets the unit price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Sets the order total.
    #[must_use]
    pub fn with_order_total(mut self, order_total: impl Into<String>) -> Self {
        self.order_total = Some(order_total.into());
        self
    }

    /// Sets the account name.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets the retailer name.
    #[must_use]
    pub fn with_retailer(mut self, retailer: impl Into<String>) -> Self {
        self.retailer = Some(retailer.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }
}
