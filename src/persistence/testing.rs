use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::InMemoryCustomerStore;
use crate::domain::customer::{
    Customer, CustomerId, CustomerPayload, CustomerStore, Email, StoreError, StoreResult,
};

// ============================================================================
// Test Doubles and Fixtures
// ============================================================================

/// The five customers every HTTP and service test starts from (ids 1-5)
pub(crate) fn seed_customers() -> Vec<CustomerPayload> {
    vec![
        CustomerPayload::new("Karol Casanova", "karito.casanova@gmail.com"),
        CustomerPayload::new("Milagros Diaz", "milagros.diaz@gmail.com"),
        CustomerPayload::new("Alicia Flores", "alicia.flores@gmail.com"),
        CustomerPayload::new("Tinkler Gonzales", "tinkler.gonzales@gmail.com"),
        CustomerPayload::new("Martin Rodriguez", "martin.rodriguez@gmail.com"),
    ]
}

pub(crate) async fn seeded_store() -> Arc<InMemoryCustomerStore> {
    let store = InMemoryCustomerStore::new();
    for customer in seed_customers() {
        store
            .save(customer)
            .await
            .expect("in-memory save cannot fail");
    }
    Arc::new(store)
}

/// Every call fails as if the database were unreachable
pub(crate) struct FailingStore {
    reason: String,
}

impl FailingStore {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> StoreResult<T> {
        Err(StoreError::unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl CustomerStore for FailingStore {
    async fn find_all(&self) -> StoreResult<Vec<Customer>> {
        self.fail()
    }

    async fn find_by_id(&self, _id: CustomerId) -> StoreResult<Option<Customer>> {
        self.fail()
    }

    async fn find_by_email(&self, _email: &Email) -> StoreResult<Option<Customer>> {
        self.fail()
    }

    async fn save(&self, _customer: CustomerPayload) -> StoreResult<Customer> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: CustomerId) -> StoreResult<()> {
        self.fail()
    }
}

/// Wraps a store and counts write calls
pub(crate) struct RecordingStore<S> {
    inner: S,
    saves: AtomicUsize,
    deletes: AtomicUsize,
}

impl<S: CustomerStore> RecordingStore<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self {
            inner,
            saves: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub(crate) fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: CustomerStore> CustomerStore for RecordingStore<S> {
    async fn find_all(&self) -> StoreResult<Vec<Customer>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<Customer>> {
        self.inner.find_by_email(email).await
    }

    async fn save(&self, customer: CustomerPayload) -> StoreResult<Customer> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(customer).await
    }

    async fn delete_by_id(&self, id: CustomerId) -> StoreResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id).await
    }
}
