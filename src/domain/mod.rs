// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each entity has its own subdirectory with:
// - Value objects
// - Entity and request payload types
// - The store contract it is persisted through
// - Errors
// - Service implementing the use cases
//
// Concrete stores live in crate::persistence, HTTP wiring in crate::http.
//
// ============================================================================

pub mod customer;
