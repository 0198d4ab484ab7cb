use crate::dsn::Dsn;
use sqlx::Error as SqlxError;

/// Opens the administrative connection.
#[allow(async_fn_in_trait)]
pub trait AdminConnector {
    type Session: CatalogSession;

    async fn connect(&self, admin_dsn: &Dsn) -> Result<Self::Session, SqlxError>;
}

/// Catalog-level statements issued over one administrative connection.
///
/// Implementations run every statement outside a transaction block.
#[allow(async_fn_in_trait)]
pub trait CatalogSession {
    /// Exact, case-sensitive lookup of `name` in the server catalog.
    async fn database_exists(&mut self, name: &str) -> Result<bool, SqlxError>;

    async fn create_database(&mut self, name: &str) -> Result<(), SqlxError>;

    /// Release the connection gracefully.
    async fn close(self) -> Result<(), SqlxError>;
}
