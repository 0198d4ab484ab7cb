/// Scheme the admin driver understands.
pub const CANONICAL_SCHEME: &str = "postgresql";

/// Short spelling accepted everywhere `postgresql` is.
pub const ALIAS_SCHEME: &str = "postgres";

/// ORM driver tags that may ride on the scheme, e.g. `postgresql+psycopg2://`.
pub const DRIVER_SUFFIXES: &[&str] = &["psycopg2", "psycopg", "asyncpg", "pg8000"];

/// Rewrite the scheme of `raw` to `postgresql://`.
///
/// Lexical only: the alias and any recognized driver suffix are replaced,
/// everything after `://` is returned untouched. Unknown schemes and the
/// empty string pass through as-is.
pub fn normalize(raw: &str) -> String {
    let Some((scheme, rest)) = raw.split_once("://") else {
        return raw.to_string();
    };

    if is_postgres_scheme(scheme) {
        format!("{CANONICAL_SCHEME}://{rest}")
    } else {
        raw.to_string()
    }
}

fn is_postgres_scheme(scheme: &str) -> bool {
    let (engine, driver) = match scheme.split_once('+') {
        Some((engine, driver)) => (engine, Some(driver)),
        None => (scheme, None),
    };

    let engine_ok = engine == CANONICAL_SCHEME || engine == ALIAS_SCHEME;
    match driver {
        None => engine_ok,
        Some(driver) => engine_ok && DRIVER_SUFFIXES.contains(&driver),
    }
}
