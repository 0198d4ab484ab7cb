use crate::config::Config;
use crate::dsn::Dsn;
use crate::error::ProvisionError;

/// Where to issue `CREATE DATABASE` from, and for which database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub admin_dsn: Dsn,
    pub app_database: String,
    pub admin_database: String,
}

/// Derive the administrative connection for `app_dsn`.
///
/// Without an override the admin DSN is the application DSN pointed at
/// `config.admin_database()`: same server, same credentials. With
/// `ADMIN_DATABASE_URL` set, that DSN is used as given, with its path filled
/// in from `config.admin_database()` when it names no database.
pub fn resolve(app_dsn: &str, config: &Config) -> Result<AdminIdentity, ProvisionError> {
    let app = Dsn::parse(app_dsn)?;
    let app_database = app.database().to_string();
    if app_database.is_empty() {
        return Err(ProvisionError::missing_database_name());
    }

    if let Some(admin_override) = config.admin_override() {
        let admin = Dsn::parse(admin_override)?;
        let (admin_dsn, admin_database) = if admin.database().is_empty() {
            let name = config.admin_database().to_string();
            (admin.with_database(&name), name)
        } else {
            let name = admin.database().to_string();
            (admin, name)
        };
        return Ok(AdminIdentity {
            admin_dsn,
            app_database,
            admin_database,
        });
    }

    let admin_database = config.admin_database().to_string();
    Ok(AdminIdentity {
        admin_dsn: app.with_database(&admin_database),
        app_database,
        admin_database,
    })
}
