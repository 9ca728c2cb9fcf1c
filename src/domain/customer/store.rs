use async_trait::async_trait;

use super::entity::{Customer, CustomerPayload};
use super::errors::StoreResult;
use super::value_objects::{CustomerId, Email};

// ============================================================================
// Customer Store - Persistence contract
// ============================================================================
//
// Implementations:
// - persistence::PgCustomerStore       (PostgreSQL via sqlx)
// - persistence::InMemoryCustomerStore (tests, `backend = "memory"`)
//
// ============================================================================

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All customers. Callers must not rely on the order.
    async fn find_all(&self) -> StoreResult<Vec<Customer>>;

    async fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>>;

    /// Exact, case-sensitive match on the email column
    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<Customer>>;

    /// Upsert by primary key.
    ///
    /// Without an id a new row is inserted and a fresh id assigned. With an
    /// id the row holding it is replaced (or created if missing).
    async fn save(&self, customer: CustomerPayload) -> StoreResult<Customer>;

    /// Remove the row if it exists. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: CustomerId) -> StoreResult<()>;
}
