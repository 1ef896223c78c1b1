//! Validation applied before any store call.
//!
//! The store persists whatever it is given, so value rules live here.

use thiserror::Error;

use crate::domain::orders::{ItemsPatch, NewOrder};

/// Longest accepted `items` value, in characters.
pub const MAX_ITEMS_LEN: usize = 255;

/// A request rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `items` was present but empty or whitespace.
    #[error("items must not be blank")]
    BlankItems,

    /// `items` exceeded [`MAX_ITEMS_LEN`].
    #[error("items must be at most {max} characters, got {len}")]
    ItemsTooLong {
        /// Submitted length in characters.
        len: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// `quantity` was negative.
    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(i32),

    /// An update body did not carry `items`.
    #[error("items is required")]
    MissingItems,
}

impl ValidationError {
    /// Name of the offending wire field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::BlankItems | Self::ItemsTooLong { .. } | Self::MissingItems => "items",
            Self::NegativeQuantity(_) => "quantity",
        }
    }
}

/// Check the fields of an order about to be created.
///
/// # Errors
///
/// Returns the first rule the input breaks.
pub fn validate_new_order(order: &NewOrder) -> Result<(), ValidationError> {
    if let Some(items) = order.items.as_deref() {
        check_items(items)?;
    }

    match order.quantity {
        Some(quantity) if quantity < 0 => Err(ValidationError::NegativeQuantity(quantity)),
        _ => Ok(()),
    }
}

/// Build the patch for an update from the submitted `items`.
///
/// # Errors
///
/// Returns `MissingItems` when `items` is absent, otherwise the item rules.
pub fn validate_items_patch(items: Option<String>) -> Result<ItemsPatch, ValidationError> {
    let items = items.ok_or(ValidationError::MissingItems)?;
    check_items(&items)?;
    Ok(ItemsPatch::new(items))
}

fn check_items(items: &str) -> Result<(), ValidationError> {
    if items.trim().is_empty() {
        return Err(ValidationError::BlankItems);
    }

    let len = items.chars().count();
    if len > MAX_ITEMS_LEN {
        return Err(ValidationError::ItemsTooLong {
            len,
            max: MAX_ITEMS_LEN,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn empty_order_is_valid() {
        assert_eq!(validate_new_order(&NewOrder::default()), Ok(()));
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "spaces")]
    #[test_case("\t\n" ; "control whitespace")]
    fn blank_items_rejected(items: &str) {
        let err = validate_new_order(&NewOrder::with_items(items)).unwrap_err();
        assert_eq!(err, ValidationError::BlankItems);
        assert_eq!(err.field(), "items");
    }

    #[test]
    fn items_at_limit_accepted() {
        let items = "x".repeat(MAX_ITEMS_LEN);
        assert!(validate_new_order(&NewOrder::with_items(items)).is_ok());
    }

    #[test]
    fn items_length_counts_characters() {
        // 255 two-byte characters is within the limit.
        let items = "é".repeat(MAX_ITEMS_LEN);
        assert!(validate_new_order(&NewOrder::with_items(items)).is_ok());
    }

    #[test]
    fn items_over_limit_rejected() {
        let items = "x".repeat(MAX_ITEMS_LEN + 1);
        let err = validate_new_order(&NewOrder::with_items(items)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ItemsTooLong {
                len: MAX_ITEMS_LEN + 1,
                max: MAX_ITEMS_LEN
            }
        );
    }

    #[test_case(0, true ; "zero")]
    #[test_case(5, true ; "positive")]
    #[test_case(-1, false ; "negative")]
    fn quantity_rules(quantity: i32, ok: bool) {
        let order = NewOrder {
            quantity: Some(quantity),
            ..NewOrder::default()
        };
        assert_eq!(validate_new_order(&order).is_ok(), ok);
    }

    #[test]
    fn negative_quantity_names_field() {
        let order = NewOrder {
            quantity: Some(-3),
            ..NewOrder::default()
        };
        let err = validate_new_order(&order).unwrap_err();
        assert_eq!(err.field(), "quantity");
        assert_eq!(err.to_string(), "quantity must not be negative, got -3");
    }

    #[test]
    fn patch_requires_items() {
        assert_eq!(
            validate_items_patch(None),
            Err(ValidationError::MissingItems)
        );
    }

    #[test]
    fn patch_rejects_blank_items() {
        assert_eq!(
            validate_items_patch(Some(" ".to_string())),
            Err(ValidationError::BlankItems)
        );
    }

    #[test]
    fn patch_keeps_items_verbatim() {
        let patch = validate_items_patch(Some(" Gadget ".to_string())).unwrap();
        assert_eq!(patch.items, " Gadget ");
    }
}
