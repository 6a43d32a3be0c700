//! Application state shared across all template tags.

use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::events::EventRegistry;
use crate::locale::{Gender, LocaleService};
use crate::models::{AliasStore, InMemoryAliasStore, MenuEntry, User};
use crate::permissions::PermissionService;
use crate::theme::ThemeEngine;
use crate::urls::UrlResolver;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Built once at startup;
/// everything except the DashMap-backed services is read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Environment-driven configuration.
    config: Config,

    /// Theme engine for template rendering.
    theme: ThemeEngine,

    /// Extension-point event registry.
    events: EventRegistry,

    /// Named-route reverse resolver.
    urls: UrlResolver,

    /// Translation catalog and gender pairs.
    locale: LocaleService,

    /// Permission grant table.
    permissions: PermissionService,

    /// Alias lookup collaborator.
    aliases: Arc<dyn AliasStore>,
}

impl AppState {
    /// Start building application state from the environment.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new(Config::from_env())
    }

    /// Start building with explicit configuration.
    pub fn builder_with_config(config: Config) -> AppStateBuilder {
        AppStateBuilder::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the theme engine.
    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    /// Get the event registry.
    pub fn events(&self) -> &EventRegistry {
        &self.inner.events
    }

    /// Get the URL resolver.
    pub fn urls(&self) -> &UrlResolver {
        &self.inner.urls
    }

    /// Get the locale service.
    pub fn locale(&self) -> &LocaleService {
        &self.inner.locale
    }

    /// Get the permission service.
    pub fn permissions(&self) -> &PermissionService {
        &self.inner.permissions
    }

    /// Get the alias store.
    pub fn aliases(&self) -> &dyn AliasStore {
        self.inner.aliases.as_ref()
    }

    /// Translate a source string for the acting user.
    ///
    /// The user's preferred language wins; the configured default applies
    /// otherwise.
    pub fn translate(&self, source: &str, user: &User) -> String {
        let language = user
            .language
            .as_deref()
            .unwrap_or(&self.inner.config.default_language);
        self.inner.locale.translate(source, language)
    }

    /// Gender-aware status label translation (template filter).
    pub fn gender(&self, value: &str, gender: Gender, user: &User) -> String {
        let language = user
            .language
            .as_deref()
            .unwrap_or(&self.inner.config.default_language);
        self.inner.locale.gender(value, gender, language)
    }

    /// Build the URL for a static asset.
    pub fn static_asset(&self, path: &str) -> String {
        self.inner.config.static_asset(path)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("theme", &self.inner.theme)
            .field("events", &self.inner.events)
            .finish()
    }
}

/// Builder for [`AppState`].
///
/// Event handlers must be registered here: the registry freezes when the
/// state is built. Permission grants and translations can still be added
/// afterwards through the state accessors.
pub struct AppStateBuilder {
    config: Config,
    theme: Option<ThemeEngine>,
    events: EventRegistry,
    urls: UrlResolver,
    locale: LocaleService,
    permissions: PermissionService,
    aliases: Option<Arc<dyn AliasStore>>,
}

impl AppStateBuilder {
    fn new(config: Config) -> Self {
        Self {
            config,
            theme: None,
            events: EventRegistry::new(),
            urls: UrlResolver::with_admin_routes(),
            locale: LocaleService::new(),
            permissions: PermissionService::new(),
            aliases: None,
        }
    }

    /// Use a specific theme engine instead of the built-in templates.
    pub fn theme(mut self, theme: ThemeEngine) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Replace the route table.
    pub fn urls(mut self, urls: UrlResolver) -> Self {
        self.urls = urls;
        self
    }

    /// Use a specific alias store.
    pub fn aliases(mut self, aliases: Arc<dyn AliasStore>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Register an extension menu provider.
    pub fn menu_handler<F>(mut self, event: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&User, &str) -> Vec<MenuEntry> + Send + Sync + 'static,
    {
        self.events.register_menu_handler(event, handler);
        self
    }

    /// Register an extension content provider.
    pub fn content_handler<F>(mut self, event: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&User, &str, &str) -> String + Send + Sync + 'static,
    {
        self.events.register_content_handler(event, handler);
        self
    }

    /// Finalize the state.
    ///
    /// Falls back to the built-in templates and an empty in-memory alias
    /// store when none were supplied.
    pub fn build(self) -> Result<AppState> {
        let theme = match self.theme {
            Some(theme) => theme,
            None => ThemeEngine::builtin()?,
        };
        let aliases = self
            .aliases
            .unwrap_or_else(|| Arc::new(InMemoryAliasStore::new()));

        Ok(AppState {
            inner: Arc::new(AppStateInner {
                config: self.config,
                theme,
                events: self.events,
                urls: self.urls,
                locale: self.locale,
                permissions: self.permissions,
                aliases,
            }),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn build_with_defaults() {
        let state = AppState::builder_with_config(Config::default()).build().unwrap();
        assert_eq!(state.urls().reverse("domains").unwrap(), "/domains");
        assert!(state.aliases().alias(1).is_err());
    }

    #[test]
    fn translate_prefers_user_language() {
        let state = AppState::builder_with_config(Config::default()).build().unwrap();
        state.locale().add_translation("fr", "Domains", "Domaines");

        let english = User::new(1, "bob", "bob@example.com");
        let french = User::new(2, "ana", "ana@example.com").language("fr");

        assert_eq!(state.translate("Domains", &english), "Domains");
        assert_eq!(state.translate("Domains", &french), "Domaines");
    }
}
