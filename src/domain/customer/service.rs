use std::sync::Arc;

use super::entity::{Customer, CustomerPayload};
use super::errors::StoreResult;
use super::lookup::Lookup;
use super::store::CustomerStore;
use super::value_objects::{CustomerId, Email};

// ============================================================================
// Customer Service
// ============================================================================
//
// Orchestrates: HTTP handler → Service → CustomerStore
//
// Stateless: every call is a single request/response against the store.
// Store failures are never caught or retried here.
//
// ============================================================================

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn find_all_customers(&self) -> StoreResult<Vec<Customer>> {
        self.store.find_all().await
    }

    pub async fn find_customer_by_id(&self, id: CustomerId) -> StoreResult<Lookup<Customer>> {
        Ok(self.store.find_by_id(id).await?.into())
    }

    pub async fn find_customer_by_email(&self, email: &Email) -> StoreResult<Lookup<Customer>> {
        Ok(self.store.find_by_email(email).await?.into())
    }

    /// Upsert passthrough. Callers creating a customer leave `id` unset.
    pub async fn save_customer(&self, customer: CustomerPayload) -> StoreResult<Customer> {
        let saved = self.store.save(customer).await?;

        tracing::info!(
            customer_id = %saved.id,
            "Saved customer"
        );

        Ok(saved)
    }

    /// Replace name and email of an existing customer.
    ///
    /// The payload's `id` is ignored; identity always comes from `id`.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        customer: CustomerPayload,
    ) -> StoreResult<Lookup<Customer>> {
        let existing = match self.store.find_by_id(id).await? {
            Some(existing) => existing,
            None => {
                tracing::debug!(customer_id = %id, "Update skipped, customer not found");
                return Ok(Lookup::NotFound);
            }
        };

        let updated = existing.overwrite_with(customer);
        let saved = self.store.save(updated.into_payload()).await?;

        tracing::info!(customer_id = %saved.id, "Updated customer");

        Ok(Lookup::Found(saved))
    }

    /// Delete an existing customer. `Found(true)` means a row was removed.
    pub async fn delete_customer_by_id(&self, id: CustomerId) -> StoreResult<Lookup<bool>> {
        if self.store.find_by_id(id).await?.is_none() {
            tracing::debug!(customer_id = %id, "Delete skipped, customer not found");
            return Ok(Lookup::NotFound);
        }

        self.store.delete_by_id(id).await?;

        tracing::info!(customer_id = %id, "Deleted customer");

        Ok(Lookup::Found(true))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
