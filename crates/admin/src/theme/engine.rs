//! Theme engine with Tera templates for menus and action grids.

use std::path::Path;

use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};
use tracing::debug;

use crate::models::{Action, MenuEntry, User};

/// Template for lists of labeled links.
const MENULIST_TEMPLATE: &str = "common/menulist.html";
/// Template for link lists with icons and modal-trigger metadata.
const MENU_TEMPLATE: &str = "common/menu.html";
/// Template for per-row action grids.
const ACTIONS_TEMPLATE: &str = "common/actions.html";

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine loading templates from the given directory.
    pub fn new(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;
        debug!(count = tera.get_template_names().count(), "loaded templates");

        Ok(Self { tera })
    }

    /// Create a theme engine from the templates bundled with the crate.
    pub fn builtin() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                MENULIST_TEMPLATE,
                include_str!("../../templates/common/menulist.html"),
            ),
            (
                MENU_TEMPLATE,
                include_str!("../../templates/common/menu.html"),
            ),
            (
                ACTIONS_TEMPLATE,
                include_str!("../../templates/common/actions.html"),
            ),
        ])
        .context("failed to load built-in templates")?;

        Ok(Self { tera })
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Get a mutable reference to Tera (for adding templates at runtime).
    pub fn tera_mut(&mut self) -> &mut Tera {
        &mut self.tera
    }

    /// Render a list of labeled links.
    pub fn render_menu_list(
        &self,
        entries: &[MenuEntry],
        selection: &str,
        user: &User,
    ) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("entries", entries);
        context.insert("selection", selection);
        context.insert("user", user);

        self.tera
            .render(MENULIST_TEMPLATE, &context)
            .context("failed to render menu list")
    }

    /// Render a link list with icons and modal metadata.
    pub fn render_menu(
        &self,
        entries: &[MenuEntry],
        css: &str,
        selection: Option<&str>,
        user: &User,
    ) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("entries", entries);
        context.insert("css", css);
        context.insert("selection", &selection.unwrap_or_default());
        context.insert("user", user);

        self.tera
            .render(MENU_TEMPLATE, &context)
            .context("failed to render menu")
    }

    /// Render a per-row action grid.
    pub fn render_actions(&self, actions: &[Action]) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("actions", actions);

        self.tera
            .render(ACTIONS_TEMPLATE, &context)
            .context("failed to render actions")
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(1, "admin", "admin@example.com")
    }

    #[test]
    fn builtin_engine_loads_all_templates() {
        let engine = ThemeEngine::builtin().unwrap();
        assert!(engine.tera().get_template(MENULIST_TEMPLATE).is_ok());
        assert!(engine.tera().get_template(MENU_TEMPLATE).is_ok());
        assert!(engine.tera().get_template(ACTIONS_TEMPLATE).is_ok());
    }

    #[test]
    fn menu_list_marks_selection_active() {
        let engine = ThemeEngine::builtin().unwrap();
        let entries = vec![
            MenuEntry::new("domains", "/domains", "Domains"),
            MenuEntry::new("identities", "/identities", "Identities"),
        ];

        let html = engine.render_menu_list(&entries, "domains", &user()).unwrap();
        assert!(html.contains(r#"href="/domains""#));
        assert!(html.contains("class=\"active\""));
        assert!(html.contains("Identities"));
    }

    #[test]
    fn menu_renders_icon_class_and_modal_metadata() {
        let engine = ThemeEngine::builtin().unwrap();
        let entries = vec![
            MenuEntry::new("newdomain", "/domains/new", "Add domain")
                .img("icon-plus")
                .modal("domainform_cb"),
        ];

        let html = engine
            .render_menu(&entries, "nav nav-list", None, &user())
            .unwrap();
        assert!(html.contains(r#"<ul class="nav nav-list">"#));
        assert!(html.contains(r#"<i class="icon-plus"></i>"#));
        assert!(html.contains(r#"data-toggle="modal""#));
        assert!(html.contains(r#"data-modalcb="domainform_cb""#));
    }

    #[test]
    fn menu_renders_static_asset_as_img_tag() {
        let engine = ThemeEngine::builtin().unwrap();
        let entries = vec![
            MenuEntry::new("extensions", "/settings/extensions", "Extensions")
                .img("/static/pics/extensions.png"),
        ];

        let html = engine
            .render_menu(&entries, "nav nav-list", Some("extensions"), &user())
            .unwrap();
        assert!(html.contains(r#"<img src="/static/pics/extensions.png""#));
    }

    #[test]
    fn actions_render_title_when_present() {
        let engine = ThemeEngine::builtin().unwrap();
        let actions = vec![
            Action::new("deldomain", "/domains/delete?selection=1", "icon-trash"),
            Action::new("delalias", "/identities/aliases/delete?selection=2", "icon-trash")
                .title("Delete this alias"),
        ];

        let html = engine.render_actions(&actions).unwrap();
        assert!(html.contains(r#"name="deldomain""#));
        assert!(html.contains(r#"title="Delete this alias""#));
        assert!(html.contains(r#"<i class="icon-trash"></i>"#));
    }
}
