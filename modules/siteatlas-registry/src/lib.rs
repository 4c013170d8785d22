pub mod migrate;
pub mod model;
pub mod postgres;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

#[cfg(feature = "test-utils")]
pub mod testutil;

pub use model::{LocationNode, LocationType, NewLocation, Status};
pub use postgres::PgRegistry;
pub use store::LocationStore;

#[cfg(any(test, feature = "test-support"))]
pub use memory::{MemoryRegistry, UpsertEntry};
