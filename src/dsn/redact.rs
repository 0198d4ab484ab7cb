use url::Url;

/// Fixed stand-in for a password in anything printed or logged.
pub const PASSWORD_PLACEHOLDER: &str = "****";

/// Render `dsn` with its password replaced by [`PASSWORD_PLACEHOLDER`].
///
/// Best effort and infallible: DSNs without a password come back unchanged,
/// and so does anything `url` cannot parse. A `password=` query parameter is
/// masked as well.
pub fn redact(dsn: &str) -> String {
    let Ok(mut url) = Url::parse(dsn) else {
        return dsn.to_string();
    };

    let has_query_password = url.query_pairs().any(|(key, _)| key == "password");
    if url.password().is_none() && !has_query_password {
        return dsn.to_string();
    }

    if url.password().is_some() && url.set_password(Some(PASSWORD_PLACEHOLDER)).is_err() {
        return dsn.to_string();
    }

    if has_query_password {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| {
                let value = if key == "password" {
                    PASSWORD_PLACEHOLDER.to_string()
                } else {
                    value.into_owned()
                };
                (key.into_owned(), value)
            })
            .collect();
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    url.to_string()
}
