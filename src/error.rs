use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Every way a provisioning run can fail.
///
/// None of the messages carry an unredacted DSN: configuration failures only
/// name the missing or malformed field, and connection failures carry the
/// redacted admin DSN.
#[derive(Debug, ThisError)]
pub enum ProvisionError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("configuration error: invalid connection string: {0}")]
    InvalidDsn(#[from] url::ParseError),

    #[error(
        "failed to connect to admin database using DSN {admin_dsn}; \
         set ADMIN_DATABASE_URL or POSTGRES_ADMIN_DB and verify credentials; \
         original error: {source}"
    )]
    Connection {
        admin_dsn: String,
        #[source]
        source: SqlxError,
    },

    #[error("catalog operation for database '{database}' failed: {source}")]
    Catalog {
        database: String,
        #[source]
        source: SqlxError,
    },
}

impl ProvisionError {
    pub fn missing_database_name() -> Self {
        ProvisionError::Configuration("missing database name".to_string())
    }

    /// Configuration problems are fatal before any connection is attempted.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ProvisionError::Configuration(_) | ProvisionError::InvalidDsn(_)
        )
    }
}
