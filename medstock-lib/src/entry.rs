//! The stock-movement entry and its validation.

use chrono::Utc;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A date is required")]
    MissingDate,
    #[error("A branch is required")]
    MissingBranch,
    #[error("A product is required")]
    MissingProduct,
    #[error("Quantity must be a number greater than zero")]
    InvalidQuantity,
}

/// Identifier of a single entry, used as the join key between the local table
/// and the remote store.
///
/// Generated client-side from the current instant in milliseconds. Two
/// entries minted within the same millisecond collide; acceptable for a
/// display/delete key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Utc::now().timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One stock movement, as it is stored remotely and rendered locally.
///
/// Entries are never mutated in place; they are created, listed, and deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub date: String,
    pub branch: String,
    pub product: String,
    pub quantity: f64,
}

impl Entry {
    /// Quantity without a trailing `.0` for whole amounts.
    pub fn quantity_label(&self) -> String {
        if self.quantity.fract() == 0.0 {
            format!("{:.0}", self.quantity)
        } else {
            self.quantity.to_string()
        }
    }
}

/// Raw form capture, before anything is allowed near the remote store.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub date: String,
    pub branch: String,
    pub product: String,
    pub quantity: String,
}

impl EntryDraft {
    /// Check presence of the text fields and positivity of the quantity, then
    /// mint an identifier. No remote call happens unless this succeeds.
    pub fn validate(self) -> Result<Entry, ValidationError> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingDate);
        }

        let branch = self.branch.trim();
        if branch.is_empty() {
            return Err(ValidationError::MissingBranch);
        }

        let product = self.product.trim();
        if product.is_empty() {
            return Err(ValidationError::MissingProduct);
        }

        let quantity: f64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidQuantity)?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ValidationError::InvalidQuantity);
        }

        Ok(Entry {
            id: EntryId::generate(),
            date: date.to_owned(),
            branch: branch.to_owned(),
            product: product.to_owned(),
            quantity,
        })
    }
}
