use serde::{Deserialize, Serialize};

use super::value_objects::{CustomerId, Email};

// ============================================================================
// Customer Entity
// ============================================================================

/// A persisted customer. Every field is always set; a customer without an
/// id has not been stored yet and is represented by `CustomerPayload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, email: Email) -> Self {
        Self {
            id,
            name: name.into(),
            email,
        }
    }

    /// Replace name and email with the payload's, keeping this customer's id
    pub fn overwrite_with(mut self, payload: CustomerPayload) -> Self {
        self.name = payload.name;
        self.email = payload.email;
        self
    }

    pub fn into_payload(self) -> CustomerPayload {
        CustomerPayload {
            id: Some(self.id),
            name: self.name,
            email: self.email,
        }
    }
}

/// Customer as accepted from callers: `id` is absent on create and ignored
/// on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub name: String,
    pub email: Email,
}

impl CustomerPayload {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: Email::new(email),
        }
    }

    #[cfg(test)]
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Attach a store-assigned id
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
