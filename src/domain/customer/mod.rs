// ============================================================================
// Customer Domain - Record management for customers
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (CustomerId, Email)
// - Entity (Customer) and input payload (CustomerPayload)
// - Lookup (found / not-found result wrapper)
// - Errors (StoreError)
// - Store contract (CustomerStore)
// - Service (CustomerService)
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod lookup;
pub mod errors;
pub mod store;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
pub use lookup::*;
pub use errors::*;
pub use store::*;
pub use service::*;
