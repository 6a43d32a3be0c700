//! Named-route URL resolution.
//!
//! Maps a logical view name (plus optional path parameters) to a
//! request-time URL. This is route matching run in reverse: `:param`
//! segments in the registered pattern are filled from caller-supplied
//! values.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// Reverse-resolver over named route patterns.
#[derive(Debug, Default)]
pub struct UrlResolver {
    /// Route table: name -> path pattern (e.g. "/domains/:id/edit").
    routes: HashMap<String, String>,
}

impl UrlResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver preloaded with every admin view the template tags
    /// link to.
    pub fn with_admin_routes() -> Self {
        let mut resolver = Self::new();
        for (name, pattern) in [
            ("domains", "/domains"),
            ("identities", "/identities"),
            ("parameters", "/settings/parameters"),
            ("extensions", "/settings/extensions"),
            ("newdomain", "/domains/new"),
            ("import_domains", "/domains/import"),
            ("deldomain", "/domains/delete"),
            ("newaccount", "/identities/accounts/new"),
            ("delaccount", "/identities/accounts/delete"),
            ("newalias", "/identities/aliases/new"),
            ("delalias", "/identities/aliases/delete"),
            ("newforward", "/identities/forwards/new"),
            ("delforward", "/identities/forwards/delete"),
            ("newdlist", "/identities/dlists/new"),
            ("deldlist", "/identities/dlists/delete"),
            ("import_identities", "/identities/import"),
            ("remove_permission", "/permissions/remove"),
        ] {
            resolver.register(name, pattern);
        }
        resolver
    }

    /// Register a named route.
    pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.routes.insert(name.into(), pattern.into());
    }

    /// Resolve a route with no path parameters.
    pub fn reverse(&self, name: &str) -> AppResult<String> {
        self.reverse_params(name, &[])
    }

    /// Resolve a route, filling `:param` segments from the given values.
    pub fn reverse_params(&self, name: &str, params: &[(&str, &str)]) -> AppResult<String> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| AppError::BadRequest(format!("unknown route: {name}")))?;

        let mut url = String::new();
        for segment in pattern.split('/') {
            if segment.is_empty() {
                continue;
            }
            url.push('/');
            if let Some(param) = segment.strip_prefix(':') {
                let value = params
                    .iter()
                    .find(|(key, _)| *key == param)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("missing parameter {param} for route {name}"))
                    })?;
                url.push_str(&urlencoding::encode(value));
            } else {
                url.push_str(segment);
            }
        }

        if url.is_empty() {
            url.push('/');
        }
        Ok(url)
    }

    /// Resolve a route and append an url-encoded query string.
    pub fn reverse_query(&self, name: &str, query: &[(&str, &str)]) -> AppResult<String> {
        let mut url = self.reverse(name)?;
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        Ok(url)
    }
}
