//! Extension-point event registry.
//!
//! Handlers are registered explicitly at startup and queried via a pure
//! fan-out: each registered handler runs in registration order and the
//! results are concatenated. There is no ambient or implicit registration.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{MenuEntry, User};

/// Event raised to collect extra navigation entries for a named slot.
pub const ADMIN_MENU_DISPLAY: &str = "admin_menu_display";

/// Event raised to collect extra markup for an admin page slot.
pub const EXTRA_ADMIN_CONTENT: &str = "extra_admin_content";

/// Handler returning menu entries for a named slot.
pub type MenuHandler = Box<dyn Fn(&User, &str) -> Vec<MenuEntry> + Send + Sync>;

/// Handler returning markup for a target slot on a given page.
pub type ContentHandler = Box<dyn Fn(&User, &str, &str) -> String + Send + Sync>;

/// Registry mapping event names to ordered handler lists.
#[derive(Default)]
pub struct EventRegistry {
    menu_handlers: HashMap<String, Vec<MenuHandler>>,
    content_handlers: HashMap<String, Vec<ContentHandler>>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a menu provider for an event.
    pub fn register_menu_handler<F>(&mut self, event: impl Into<String>, handler: F)
    where
        F: Fn(&User, &str) -> Vec<MenuEntry> + Send + Sync + 'static,
    {
        self.menu_handlers
            .entry(event.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Register a content provider for an event.
    pub fn register_content_handler<F>(&mut self, event: impl Into<String>, handler: F)
    where
        F: Fn(&User, &str, &str) -> String + Send + Sync + 'static,
    {
        self.content_handlers
            .entry(event.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Fan out a menu query.
    ///
    /// Entries are concatenated in registration order. Zero registered
    /// handlers yield an empty list.
    pub fn raise_menu_query(&self, event: &str, slot: &str, user: &User) -> Vec<MenuEntry> {
        let handlers = self
            .menu_handlers
            .get(event)
            .map(|h| h.as_slice())
            .unwrap_or(&[]);

        let mut entries = Vec::new();
        for handler in handlers {
            entries.extend(handler(user, slot));
        }

        debug!(
            event = %event,
            slot = %slot,
            handlers = handlers.len(),
            entries = entries.len(),
            "menu query fan-out"
        );
        entries
    }

    /// Fan out a content query, joining string results with no separator.
    pub fn raise_content_query(
        &self,
        event: &str,
        user: &User,
        target: &str,
        currentpage: &str,
    ) -> String {
        let handlers = self
            .content_handlers
            .get(event)
            .map(|h| h.as_slice())
            .unwrap_or(&[]);

        let mut result = String::new();
        for handler in handlers {
            result.push_str(&handler(user, target, currentpage));
        }
        result
    }

    /// Number of handlers registered for an event, across both families.
    pub fn handler_count(&self, event: &str) -> usize {
        self.menu_handlers.get(event).map(|v| v.len()).unwrap_or(0)
            + self.content_handlers.get(event).map(|v| v.len()).unwrap_or(0)
    }

    /// Check if any handler is registered for an event.
    pub fn has_event(&self, event: &str) -> bool {
        self.handler_count(event) > 0
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("menu_events", &self.menu_handlers.len())
            .field("content_events", &self.content_handlers.len())
            .finish()
    }
}
