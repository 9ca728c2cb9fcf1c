use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use crate::domain::customer::{
    Customer, CustomerId, CustomerPayload, CustomerStore, Email, StoreError, StoreResult,
};

// ============================================================================
// In-Memory Customer Store
// ============================================================================
//
// Rows keyed by id in a BTreeMap, ids handed out from a counter that starts
// at 1 and only moves forward, like a database sequence. Saving with an
// explicit id past the counter advances it so generated ids never collide.
// Once i64::MAX is handed out or saved, generating further ids fails.
//
// ============================================================================

pub struct InMemoryCustomerStore {
    state: Mutex<MemoryState>,
}

struct MemoryState {
    rows: BTreeMap<CustomerId, Customer>,
    /// None once the id space is used up
    next_id: Option<i64>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find_all(&self) -> StoreResult<Vec<Customer>> {
        let state = self.state.lock().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        let state = self.state.lock().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<Customer>> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .values()
            .find(|customer| &customer.email == email)
            .cloned())
    }

    async fn save(&self, customer: CustomerPayload) -> StoreResult<Customer> {
        let mut state = self.state.lock().await;

        let id = match customer.id {
            Some(id) => {
                if let Some(next) = state.next_id {
                    if id.value() >= next {
                        state.next_id = id.value().checked_add(1);
                    }
                }
                id
            }
            None => {
                let id = state.next_id.ok_or(StoreError::IdsExhausted)?;
                state.next_id = id.checked_add(1);
                CustomerId::new(id)
            }
        };

        let saved = customer.into_customer(id);
        state.rows.insert(id, saved.clone());

        tracing::debug!(customer_id = %id, "Stored customer in memory");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: CustomerId) -> StoreResult<()> {
        let mut state = self.state.lock().await;
        state.rows.remove(&id);
        Ok(())
    }
}
