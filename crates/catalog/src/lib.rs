//! Persistence gateway and maintenance commands for the `services` table.
//! - `repository` maps entity operations onto SeaORM statements.
//! - `maintenance` creates, seeds and drops the schema out of band.

pub mod errors;
pub mod repository;
pub mod maintenance;
#[cfg(test)]
pub mod test_support;

pub use errors::CatalogError;
pub use repository::{SeaOrmServiceRepository, ServiceRepository};
