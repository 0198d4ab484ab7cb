use crate::db::catalog::{AdminConnector, CatalogSession};
use crate::dsn::Dsn;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Error as SqlxError};
use std::str::FromStr;

const APPLICATION_NAME: &str = "pg-bootstrap";

/// Connects to PostgreSQL with a single, unpooled `PgConnection`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgAdminConnector;

impl AdminConnector for PgAdminConnector {
    type Session = PgCatalogSession;

    async fn connect(&self, admin_dsn: &Dsn) -> Result<PgCatalogSession, SqlxError> {
        let opts = PgConnectOptions::from_str(admin_dsn.as_str())?.application_name(APPLICATION_NAME);
        let conn = PgConnection::connect_with(&opts).await?;
        Ok(PgCatalogSession { conn })
    }
}

/// Admin connection to a PostgreSQL server.
///
/// sqlx never opens an implicit transaction, so each statement autocommits.
/// `CREATE DATABASE` additionally goes over the simple-query protocol via
/// `raw_sql`.
pub struct PgCatalogSession {
    conn: PgConnection,
}

impl CatalogSession for PgCatalogSession {
    async fn database_exists(&mut self, name: &str) -> Result<bool, SqlxError> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM pg_database WHERE datname = $1")
                .bind(name)
                .fetch_optional(&mut self.conn)
                .await?;
        Ok(found.is_some())
    }

    async fn create_database(&mut self, name: &str) -> Result<(), SqlxError> {
        let stmt = format!("CREATE DATABASE {}", quote_identifier(name));
        sqlx::raw_sql(&stmt).execute(&mut self.conn).await?;
        Ok(())
    }

    async fn close(self) -> Result<(), SqlxError> {
        self.conn.close().await
    }
}

/// Quote `name` as a PostgreSQL identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
