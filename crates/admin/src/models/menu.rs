//! Menu entry and action-link records.
//!
//! Display-only: created fresh per request, handed straight to the theme
//! engine, and discarded after render.

use serde::{Deserialize, Serialize};

/// A navigation menu entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Stable name, matched against the current selection.
    pub name: String,
    /// Resolved URL.
    pub url: String,
    /// Translated label.
    pub label: String,
    /// Icon class (`icon-plus`) or static asset URL.
    #[serde(default)]
    pub img: Option<String>,
    /// Whether the link opens in a modal dialog.
    #[serde(default)]
    pub modal: bool,
    /// JavaScript callback invoked when the modal opens.
    #[serde(default)]
    pub modal_cb: Option<String>,
}

impl MenuEntry {
    /// Create a plain entry.
    pub fn new(name: impl Into<String>, url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            label: label.into(),
            img: None,
            modal: false,
            modal_cb: None,
        }
    }

    /// Set the icon.
    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    /// Open in a modal dialog with the given callback.
    pub fn modal(mut self, callback: impl Into<String>) -> Self {
        self.modal = true;
        self.modal_cb = Some(callback.into());
        self
    }
}

/// A per-row action link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub url: String,
    /// Icon class.
    pub img: String,
    /// Tooltip, when the icon alone is ambiguous.
    #[serde(default)]
    pub title: Option<String>,
}

impl Action {
    /// Create an action link.
    pub fn new(name: impl Into<String>, url: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            img: img.into(),
            title: None,
        }
    }

    /// Set the tooltip.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn entry_builder() {
        let entry = MenuEntry::new("newdomain", "/domains/new", "Add domain")
            .img("icon-plus")
            .modal("domainform_cb");

        assert_eq!(entry.img.as_deref(), Some("icon-plus"));
        assert!(entry.modal);
        assert_eq!(entry.modal_cb.as_deref(), Some("domainform_cb"));
    }

    #[test]
    fn entry_deserializes_from_provider_json() {
        let entry: MenuEntry = serde_json::from_str(
            r#"{"name": "quotas", "url": "/quotas", "label": "Quotas"}"#,
        )
        .unwrap();

        assert_eq!(entry.name, "quotas");
        assert!(!entry.modal);
        assert!(entry.img.is_none());
    }

    #[test]
    fn action_builder() {
        let action = Action::new("deldomain", "/domains/delete?selection=1", "icon-trash")
            .title("Delete this domain");
        assert_eq!(action.title.as_deref(), Some("Delete this domain"));
    }
}
