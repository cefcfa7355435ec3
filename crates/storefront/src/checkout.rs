//! Simulated checkout.
//!
//! Orders are not stored anywhere: a successful checkout validates the
//! shipping form, empties the cart, and hands back a confirmation with a
//! freshly generated order identifier (random, derived from nothing).

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cratify_core::{OrderId, Price};

use crate::stores::CartStore;

/// Length of a generated order identifier.
const ORDER_ID_LEN: usize = 8;

/// Shipping details collected by the checkout form.
///
/// Every field is required; validation blocks submission rather than
/// surfacing errors afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl CheckoutForm {
    fn required_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
        ]
    }

    /// Check that every required field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingFields`] naming each blank field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let missing: Vec<String> = self
            .required_fields()
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| (*name).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::MissingFields { fields: missing })
        }
    }
}

/// Checkout validation failure.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("required fields missing: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("cart is empty")]
    EmptyCart,
}

/// Result of a successful (simulated) checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Generated display identifier; orders are not persisted, so this
    /// is not a key into anything.
    pub order_id: OrderId,
    /// Where the (simulated) confirmation email goes.
    pub email: String,
    /// Cart total at the moment of checkout, unrounded.
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

/// Place an order for the current cart contents.
///
/// Validates the form, snapshots the total, clears the cart, and
/// returns the confirmation.
///
/// # Errors
///
/// Returns an error if a required field is blank or the cart is empty;
/// the cart is left untouched in both cases.
pub fn place_order(
    cart: &mut CartStore,
    form: &CheckoutForm,
) -> Result<OrderConfirmation, CheckoutError> {
    form.validate()?;
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let total = cart.total_price();
    let order_id = generate_order_id(&mut rand::rng());
    cart.clear_cart();

    tracing::info!(order_id = %order_id, total = %total, "Order placed");

    Ok(OrderConfirmation {
        order_id,
        email: form.email.clone(),
        total,
        placed_at: Utc::now(),
    })
}

/// Generate a display order id: 8 uppercase base-36 characters.
fn generate_order_id<R: Rng>(rng: &mut R) -> OrderId {
    let id: String = (0..ORDER_ID_LEN)
        .map(|_| {
            let digit = rng.random_range(0..36u32);
            char::from_digit(digit, 36)
                .unwrap_or('0')
                .to_ascii_uppercase()
        })
        .collect();
    OrderId::new(id)
}
