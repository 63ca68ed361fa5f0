//! Shipping address.

use serde::{Deserialize, Serialize};

/// Error returned when an address has a blank required field.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("address field cannot be empty: {field}")]
pub struct AddressError {
    /// Name of the offending field.
    pub field: &'static str,
}

/// A shipping address. Every field is required; there is no partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
}

impl Address {
    /// Check that no field is blank.
    ///
    /// Run before checkout so an incomplete address never reaches the
    /// network.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] naming the first blank field.
    pub fn validate(&self) -> Result<(), AddressError> {
        let fields = [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AddressError { field: name });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "12 Rue des Ateliers".to_owned(),
            city: "Lyon".to_owned(),
            state: "Rhone".to_owned(),
            postal_code: "69001".to_owned(),
        }
    }

    #[test]
    fn test_complete_address_is_valid() {
        assert!(address().validate().is_ok());
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut addr = address();
        addr.city = "   ".to_owned();
        let err = addr.validate().unwrap_err();
        assert_eq!(err.field, "city");
    }
}
