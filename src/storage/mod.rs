//! All things related to the storage of destinations

use core::fmt;
use std::future::Future;

use uuid::Uuid;

use crate::destinations::Destination;
use crate::utils::non_empty_env_var;

pub use memory::Memory;
pub use postgres::Postgres;

mod memory;
mod postgres;

/// Storage errors
#[derive(Debug)]
pub enum Error {
    /// A connection error with the storage
    Connection(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Connection(error) => write!(f, "Connection error: {error}"),
        }
    }
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Storage configuration
pub enum Config {
    /// Detect configuration from environment
    ///
    /// Postgres when `DATABASE_URL` is set, in-memory otherwise
    DetectConfig,

    /// Keep everything in memory
    InMemory,

    /// Connect to Postgres with the given connection string
    Postgres(String),
}

impl Config {
    /// Resolve the `DetectConfig` variant based on the environment
    pub fn resolve(self) -> Self {
        match self {
            Self::DetectConfig => {
                non_empty_env_var("DATABASE_URL").map_or(Self::InMemory, Self::Postgres)
            }
            config => config,
        }
    }
}

/// Values to create a Destination
///
/// All values are validated and normalized
pub struct CreateDestinationValues<'a> {
    pub name: &'a str,
    pub country: &'a str,
    pub continent: &'a str,
    pub description: &'a str,
    /// Absolute http(s) URL
    pub image: &'a str,
    pub activities: &'a [String],
    pub rating: f64,
}

/// Values to update a Destination
///
/// Only provided values are changed, `updated_at` is always refreshed
#[derive(Default)]
pub struct UpdateDestinationValues<'a> {
    pub name: Option<&'a str>,
    pub country: Option<&'a str>,
    pub continent: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub activities: Option<&'a [String]>,
    pub rating: Option<f64>,
}

/// Storage with all supported operations
///
/// The handle is created once at startup, cloned into every request and closed on shutdown
pub trait Storage: Clone + Send + Sync + 'static {
    /// Find all destinations, in storage order
    fn find_all_destinations(&self) -> impl Future<Output = Result<Vec<Destination>>> + Send;

    /// Find a single destination by ID
    fn find_single_destination_by_id(
        &self,
        id: &Uuid,
    ) -> impl Future<Output = Result<Option<Destination>>> + Send;

    /// Create a destination
    ///
    /// Assigns a fresh ID and sets both timestamps to the same moment
    fn create_destination(
        &self,
        values: &CreateDestinationValues<'_>,
    ) -> impl Future<Output = Result<Destination>> + Send;

    /// Update a single destination
    ///
    /// Returns `None` when no destination has the given ID
    fn update_destination(
        &self,
        id: &Uuid,
        values: &UpdateDestinationValues<'_>,
    ) -> impl Future<Output = Result<Option<Destination>>> + Send;

    /// Delete a single destination
    ///
    /// Returns the number of deleted destinations
    fn delete_destination(&self, id: &Uuid) -> impl Future<Output = Result<u64>> + Send;

    /// Release the underlying resources
    fn close(&self) -> impl Future<Output = ()> + Send;
}
