use crate::config::Config;
use crate::db::catalog::{AdminConnector, CatalogSession};
use crate::error::ProvisionError;
use crate::service::admin_resolver::{AdminIdentity, resolve};
use std::fmt;
use tracing::{debug, info, warn};

/// Result of a successful provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    AlreadyExists {
        database: String,
    },
    Created {
        database: String,
        admin_database: String,
    },
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionOutcome::AlreadyExists { database } => {
                write!(f, "Database '{database}' already exists")
            }
            ProvisionOutcome::Created {
                database,
                admin_database,
            } => write!(
                f,
                "Database '{database}' created successfully using admin DB '{admin_database}'"
            ),
        }
    }
}

/// Ensures the application database exists, creating it over an
/// administrative connection when it does not.
///
/// Each call opens at most one connection and never retries. The existence
/// check and the `CREATE DATABASE` are not atomic together: two concurrent
/// runs can both see the database missing, and the loser then fails with a
/// catalog error. Runs are expected to come from a single deployment step.
pub struct Provisioner<C> {
    connector: C,
}

impl<C: AdminConnector> Provisioner<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub async fn ensure_database(
        &self,
        config: &Config,
    ) -> Result<ProvisionOutcome, ProvisionError> {
        let app_dsn = config.application_dsn()?;
        let identity = resolve(&app_dsn, config)?;
        debug!(
            admin_dsn = %identity.admin_dsn,
            database = %identity.app_database,
            admin_database = %identity.admin_database,
            "resolved admin connection"
        );

        let mut session = self
            .connector
            .connect(&identity.admin_dsn)
            .await
            .map_err(|source| ProvisionError::Connection {
                admin_dsn: identity.admin_dsn.redacted(),
                source,
            })?;

        let outcome = provision(&mut session, &identity).await;

        if let Err(e) = session.close().await {
            warn!(error = %e, "admin connection did not close cleanly");
        }
        outcome
    }
}

async fn provision<S: CatalogSession>(
    session: &mut S,
    identity: &AdminIdentity,
) -> Result<ProvisionOutcome, ProvisionError> {
    let database = &identity.app_database;
    let catalog_err = |source| ProvisionError::Catalog {
        database: database.clone(),
        source,
    };

    if session.database_exists(database).await.map_err(catalog_err)? {
        info!(database = %database, "database already exists");
        return Ok(ProvisionOutcome::AlreadyExists {
            database: database.clone(),
        });
    }

    session.create_database(database).await.map_err(catalog_err)?;
    info!(
        database = %database,
        admin_database = %identity.admin_database,
        host = identity.admin_dsn.host().unwrap_or("<none>"),
        port = identity.admin_dsn.port(),
        "database created"
    );
    Ok(ProvisionOutcome::Created {
        database: database.clone(),
        admin_database: identity.admin_database.clone(),
    })
}
