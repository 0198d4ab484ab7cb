//! Database access for the administrative connection.
//!
//! Layout:
//! - `catalog.rs`: connector/session traits the provisioner is generic over
//! - `postgres.rs`: sqlx-backed implementation against a live server

pub mod catalog;
pub mod postgres;

pub use catalog::{AdminConnector, CatalogSession};
pub use postgres::{PgAdminConnector, PgCatalogSession, quote_identifier};
