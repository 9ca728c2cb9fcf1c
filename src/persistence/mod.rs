// ============================================================================
// Persistence - Concrete CustomerStore implementations
// ============================================================================

mod memory;
mod pool;
mod postgres;
mod schema;

#[cfg(test)]
pub(crate) mod testing;

pub use memory::InMemoryCustomerStore;
pub use pool::connect;
pub use postgres::{PgCustomerStore, DEFAULT_TABLE};
pub use schema::ensure_schema;
