// ============================================================================
// Lookup - Outcome of an operation targeting one specific record
// ============================================================================
//
// Three outcomes are possible for get/update/delete by key:
// - Ok(Lookup::NotFound)  - the target does not exist (HTTP 404)
// - Ok(Lookup::Found(v))  - the target existed, v is the result (HTTP 2xx)
// - Err(StoreError)       - the store itself failed (HTTP 5xx)
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Lookup<T> {
    NotFound,
    Found(T),
}

impl<T> Lookup<T> {
    #[cfg(test)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }

    pub fn map<U, F>(self, f: F) -> Lookup<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}
