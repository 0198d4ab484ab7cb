//! Provisioning configuration, sourced from the environment.
//!
//! Layers, lowest priority first:
//! 1. [`Config::default`]
//! 2. libpq-style `PGHOST` / `PGPORT` / `PGDATABASE`
//! 3. `DATABASE_URL`, `ADMIN_DATABASE_URL`, `POSTGRES_ADMIN_DB`, `PG_*`, `LOGLEVEL`
//!
//! `.env` files are applied to the process environment by the binary before
//! [`Config::load`] runs.

use crate::dsn::{CANONICAL_SCHEME, PASSWORD_PLACEHOLDER, normalize, redact};
use crate::error::ProvisionError;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{env, fmt};
use url::Url;

pub const DEFAULT_ADMIN_DB: &str = "postgres";

/// String-valued keys, read verbatim so values like `007` or `1.5` survive.
const STRING_KEYS: &[(&str, &str)] = &[
    ("DATABASE_URL", "database_url"),
    ("ADMIN_DATABASE_URL", "admin_database_url"),
    ("POSTGRES_ADMIN_DB", "postgres_admin_db"),
    ("PG_USER", "pg_user"),
    ("PG_PASSWORD", "pg_password"),
    ("PG_HOST", "pg_host"),
    ("PG_DATABASE", "pg_database"),
    ("LOGLEVEL", "loglevel"),
];

const LIBPQ_STRING_KEYS: &[(&str, &str)] = &[("PGHOST", "pg_host"), ("PGDATABASE", "pg_database")];

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application DSN. When unset, one is synthesized from the `pg_*` parts.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Full override for the administrative connection.
    #[serde(default)]
    pub admin_database_url: Option<String>,
    pub postgres_admin_db: String,
    pub pg_user: String,
    pub pg_password: String,
    pub pg_host: String,
    pub pg_port: u16,
    pub pg_database: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            admin_database_url: None,
            postgres_admin_db: DEFAULT_ADMIN_DB.to_string(),
            pg_user: "postgres".to_string(),
            pg_password: "postgres".to_string(),
            pg_host: "localhost".to_string(),
            pg_port: 5432,
            pg_database: "inventory_db".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn load() -> Result<Self, ProvisionError> {
        Self::from_figment(Self::figment())
    }

    /// The layered provider stack used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["PGPORT"]).map(|_| "pg_port".into()))
            .merge(Serialized::defaults(env_strings(LIBPQ_STRING_KEYS)))
            .merge(Env::raw().only(&["PG_PORT"]))
            .merge(Serialized::defaults(env_strings(STRING_KEYS)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ProvisionError> {
        figment
            .extract()
            .map_err(|e| ProvisionError::Configuration(e.to_string()))
    }

    /// Normalized application DSN.
    ///
    /// This is the connection string the CRUD service connects with, so the
    /// database created here and the one it uses are the same target.
    pub fn application_dsn(&self) -> Result<String, ProvisionError> {
        match self.database_url.as_deref() {
            Some(url) => Ok(normalize(url)),
            None => self.synthesized_dsn(),
        }
    }

    /// `ADMIN_DATABASE_URL`, ignoring an empty value.
    pub fn admin_override(&self) -> Option<&str> {
        self.admin_database_url.as_deref().filter(|s| !s.is_empty())
    }

    /// Admin database name; an empty setting falls back to `postgres`.
    pub fn admin_database(&self) -> &str {
        if self.postgres_admin_db.is_empty() {
            DEFAULT_ADMIN_DB
        } else {
            &self.postgres_admin_db
        }
    }

    fn synthesized_dsn(&self) -> Result<String, ProvisionError> {
        let invalid = |field: &str| ProvisionError::Configuration(format!("invalid {field}"));

        let mut url = Url::parse(&format!("{CANONICAL_SCHEME}://localhost"))?;
        url.set_host(Some(&self.pg_host))?;
        url.set_port(Some(self.pg_port))
            .map_err(|()| invalid("PG_PORT"))?;
        url.set_username(&self.pg_user)
            .map_err(|()| invalid("PG_USER"))?;
        url.set_password(Some(&self.pg_password))
            .map_err(|()| invalid("PG_PASSWORD"))?;
        url.set_path(&format!("/{}", self.pg_database));
        Ok(url.into())
    }
}

/// Collect the set variables among `keys` as `field -> value` strings.
fn env_strings(keys: &[(&str, &'static str)]) -> BTreeMap<&'static str, String> {
    keys.iter()
        .filter_map(|&(var, field)| env::var(var).ok().map(|value| (field, value)))
        .collect()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url.as_deref().map(redact))
            .field(
                "admin_database_url",
                &self.admin_database_url.as_deref().map(redact),
            )
            .field("postgres_admin_db", &self.postgres_admin_db)
            .field("pg_user", &self.pg_user)
            .field("pg_password", &PASSWORD_PLACEHOLDER)
            .field("pg_host", &self.pg_host)
            .field("pg_port", &self.pg_port)
            .field("pg_database", &self.pg_database)
            .field("loglevel", &self.loglevel)
            .finish()
    }
}
