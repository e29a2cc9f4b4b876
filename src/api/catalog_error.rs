//! Failures of the catalog operations
//!
//! Every failure ends up as an API [`Error`](super::Error), only missing parameters and invalid
//! values are the fault of the client

use core::fmt;

use crate::storage;

use super::Error;

/// Everything that can go wrong while handling a catalog operation
#[derive(Debug)]
pub enum CatalogError {
    /// The storage could not be reached or failed
    StoreUnavailable {
        /// What was being done, shown to the client
        action: &'static str,

        /// The error from the storage
        source: storage::Error,
    },

    /// The identifier is not a valid destination ID
    MalformedIdentifier(String),

    /// A required parameter is absent
    MissingParameter(&'static str),

    /// A value in the payload is missing or invalid
    ValidationFailure(String),
}

impl CatalogError {
    /// Create a closure mapping a storage error for the given action
    pub fn store_unavailable(action: &'static str) -> impl FnOnce(storage::Error) -> Self {
        move |source| Self::StoreUnavailable { action, source }
    }
}

impl std::error::Error for CatalogError {}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::StoreUnavailable { action, source } => write!(f, "{action}: {source}"),
            Self::MalformedIdentifier(id) => write!(f, "Invalid destination ID: {id}"),
            Self::MissingParameter(message) => write!(f, "{message}"),
            Self::ValidationFailure(message) => write!(f, "{message}"),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::StoreUnavailable { action, source } => {
                tracing::error!("{action}: {source}");

                Error::internal_server_error(action).with_description(source)
            }
            CatalogError::MalformedIdentifier(id) => {
                Error::internal_server_error("Invalid destination ID")
                    .with_description(format!("`{id}` is not a valid identifier"))
            }
            CatalogError::MissingParameter(message) => Error::bad_request(message),
            CatalogError::ValidationFailure(message) => {
                Error::bad_request("Validation failed").with_description(message)
            }
        }
    }
}
