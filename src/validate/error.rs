//! Error type for payload validation.

use thiserror::Error;

use super::{MAX_EMBEDS, MAX_FIELDS_PER_EMBED};

/// A payload validation failure.
///
/// One variant per rule, carrying the offending index for nested collection
/// violations (0-based, declaration order). Raised before any network I/O;
/// always recoverable by the caller correcting the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Product `name` is missing or blank.
    #[error("Product name is required")]
    ProductNameRequired,

    /// Product `sku` is missing or blank.
    #[error("Product SKU is required")]
    ProductSkuRequired,

    /// Product `qty` is negative or not a finite number.
    #[error("Product quantity must be a non-negative number")]
    ProductQtyInvalid,

    /// Product `value` is present but negative or not a finite number.
    #[error("Product value must be a non-negative number")]
    ProductValueInvalid,

    /// Product `spent` is present but negative or not a finite number.
    #[error("Product spent must be a non-negative number")]
    ProductSpentInvalid,

    /// Order `name` is missing or blank.
    #[error("Order name is required")]
    OrderNameRequired,

    /// Order `status` is missing or blank.
    #[error("Order status is required")]
    OrderStatusRequired,

    /// Order `order_number` is missing or blank.
    #[error("Order number is required")]
    OrderNumberRequired,

    /// Webhook message has neither content nor embeds.
    #[error("Webhook payload must contain either content or at least one embed")]
    EmptyWebhook,

    /// Webhook message carries more embeds than the service accepts.
    #[error("Webhooks support a maximum of {MAX_EMBEDS} embeds, got {count}")]
    TooManyEmbeds {
        /// Number of embeds in the rejected message.
        count: usize,
    },

    /// An embed carries more fields than the service accepts.
    #[error("Embed {embed} exceeds the maximum of {MAX_FIELDS_PER_EMBED} fields, got {count}")]
    TooManyFields {
        /// Index of the offending embed.
        embed: usize,
        /// Number of fields in the rejected embed.
        count: usize,
    },

    /// A field inside an embed has a missing or blank name.
    #[error("Embed {embed}, field {field}: name is required")]
    FieldNameRequired {
        /// Index of the embed containing the field.
        embed: usize,
        /// Index of the field within the embed.
        field: usize,
    },

    /// A field inside an embed has a missing or blank value.
    #[error("Embed {embed}, field {field}: value is required")]
    FieldValueRequired {
        /// Index of the embed containing the field.
        embed: usize,
        /// Index of the field within the embed.
        field: usize,
    },
}
