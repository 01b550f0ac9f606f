use thiserror::Error;

/// The store's only failure mode: no record matches the given id.
///
/// Carries the entity name so callers can surface "User not found" /
/// "Product not found" without knowing which store they talked to.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
}
