//! Client-side payload validation, run before any network I/O.
//!
//! Each function is pure and synchronous: an ordered sequence of independent
//! checks where the first failing rule wins. A failure means no request is
//! issued for that call; success means the payload is safe to transmit as-is.
//! Collection caps match the limits the webhook service itself enforces.

mod error;


pub use error::ValidationError;

use crate::payload::{Order, Product, Webhook};

/// Maximum number of embeds per webhook message.
pub const MAX_EMBEDS: usize = 10;

/// Maximum number of fields per embed.
pub const MAX_FIELDS_PER_EMBED: usize = 25;

/// True if the string is empty after trimming surrounding whitespace.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// True for a finite, non-negative amount. NaN and infinities are rejected
/// along with negatives; zero is valid.
fn is_valid_amount(n: f64) -> bool {
    n.is_finite() && n >= 0.0
}

/// Validates a product payload.
///
/// Checks, in order: `name` non-blank, `sku` non-blank, `qty` a finite
/// non-negative number, then `value` and `spent` (if present) finite and
/// non-negative.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule that fails.
pub fn validate_product(product: &Product) -> Result<(), ValidationError> {
    if is_blank(&product.name) {
        return Err(ValidationError::ProductNameRequired);
    }

    if is_blank(&product.sku) {
        return Err(ValidationError::ProductSkuRequired);
    }

    if !is_valid_amount(product.qty) {
        return Err(ValidationError::ProductQtyInvalid);
    }

    if product.value.is_some_and(|v| !is_valid_amount(v)) {
        return Err(ValidationError::ProductValueInvalid);
    }

    if product.spent.is_some_and(|s| !is_valid_amount(s)) {
        return Err(ValidationError::ProductSpentInvalid);
    }

    Ok(())
}

/// Validates an order payload.
///
/// Checks, in order: `name`, `status`, and `order_number` non-blank. The
/// optional descriptive fields are free-form and not validated.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule that fails.
pub fn validate_order(order: &Order) -> Result<(), ValidationError> {
    if is_blank(&order.name) {
        return Err(ValidationError::OrderNameRequired);
    }

    if is_blank(&order.status) {
        return Err(ValidationError::OrderStatusRequired);
    }

    if is_blank(&order.order_number) {
        return Err(ValidationError::OrderNumberRequired);
    }

    Ok(())
}

/// Validates a webhook message payload.
///
/// Checks, in order: the message carries non-blank content or at least one
/// embed; at most [`MAX_EMBEDS`] embeds; per embed, at most
/// [`MAX_FIELDS_PER_EMBED`] fields; per field, non-blank name and value.
/// Index-carrying errors use 0-based positions in declaration order.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule that fails.
pub fn validate_webhook(message: &Webhook) -> Result<(), ValidationError> {
    let has_content = message.content.as_deref().is_some_and(|c| !is_blank(c));
    if !has_content && message.embeds.is_empty() {
        return Err(ValidationError::EmptyWebhook);
    }

    if message.embeds.len() > MAX_EMBEDS {
        return Err(ValidationError::TooManyEmbeds {
            count: message.embeds.len(),
        });
    }

    for (embed_index, embed) in message.embeds.iter().enumerate() {
        if embed.fields.len() > MAX_FIELDS_PER_EMBED {
            return Err(ValidationError::TooManyFields {
                embed: embed_index,
                count: embed.fields.len(),
            });
        }

        for (field_index, field) in embed.fields.iter().enumerate() {
            if is_blank(&field.name) {
                return Err(ValidationError::FieldNameRequired {
                    embed: embed_index,
                    field: field_index,
                });
            }

            if is_blank(&field.value) {
                return Err(ValidationError::FieldValueRequired {
                    embed: embed_index,
                    field: field_index,
                });
            }
        }
    }

    Ok(())
}
