//! Permission-gated navigation menu builders and the extension content
//! aggregator.

use crate::error::AppResult;
use crate::events::{ADMIN_MENU_DISPLAY, EXTRA_ADMIN_CONTENT};
use crate::models::{MenuEntry, User};
use crate::state::AppState;

/// Build the top-level admin menu.
///
/// Groups appear in a fixed order: domains, extension-provided entries,
/// identities, settings. Returns `""` when no group is visible, without
/// touching the renderer.
pub fn admin_menu(state: &AppState, selection: &str, user: &User) -> AppResult<String> {
    let mut entries = Vec::new();

    if state.permissions().has_permission(user, "admin.view_domains") {
        entries.push(MenuEntry::new(
            "domains",
            state.urls().reverse("domains")?,
            state.translate("Domains", user),
        ));
    }

    entries.extend(state.events().raise_menu_query(ADMIN_MENU_DISPLAY, "top_menu", user));

    if state.permissions().has_permission(user, "auth.add_user")
        || state.permissions().has_permission(user, "admin.add_alias")
    {
        entries.push(MenuEntry::new(
            "identities",
            state.urls().reverse("identities")?,
            state.translate("Identities", user),
        ));
    }

    if user.is_superuser {
        entries.push(MenuEntry::new(
            "settings",
            state.urls().reverse("parameters")?,
            state.translate("Mailstead", user),
        ));
    }

    if entries.is_empty() {
        return Ok(String::new());
    }
    Ok(state.theme().render_menu_list(&entries, selection, user)?)
}

/// Build the settings submenu.
pub fn settings_menu(state: &AppState, selection: &str, user: &User) -> AppResult<String> {
    let entries = vec![
        MenuEntry::new(
            "extensions",
            state.urls().reverse("extensions")?,
            state.translate("Extensions", user),
        )
        .img(state.static_asset("pics/extensions.png")),
        MenuEntry::new(
            "parameters",
            state.urls().reverse("parameters")?,
            state.translate("Parameters", user),
        )
        .img(state.static_asset("pics/domains.png")),
    ];

    Ok(state.theme().render_menu(&entries, "nav nav-list", Some(selection), user)?)
}

/// Build the domains submenu.
///
/// Returns `""` unless the user may add domains.
pub fn domains_menu(state: &AppState, selection: &str, user: &User) -> AppResult<String> {
    if !state.permissions().has_permission(user, "admin.add_domain") {
        return Ok(String::new());
    }

    let entries = vec![
        MenuEntry::new(
            "newdomain",
            state.urls().reverse("newdomain")?,
            state.translate("Add domain", user),
        )
        .img("icon-plus")
        .modal("domainform_cb"),
        MenuEntry::new(
            "import",
            state.urls().reverse("import_domains")?,
            state.translate("Import", user),
        )
        .img("icon-folder-open")
        .modal("importform_cb"),
    ];

    Ok(state.theme().render_menu(&entries, "nav nav-list", Some(selection), user)?)
}

/// Build the identities submenu.
pub fn identities_menu(state: &AppState, user: &User) -> AppResult<String> {
    let entries = vec![
        MenuEntry::new(
            "newaccount",
            state.urls().reverse("newaccount")?,
            state.translate("Add account", user),
        )
        .img("icon-plus")
        .modal("newaccount_cb"),
        MenuEntry::new(
            "newalias",
            state.urls().reverse("newalias")?,
            state.translate("Add alias", user),
        )
        .img("icon-plus")
        .modal("aliasform_cb"),
        MenuEntry::new(
            "newforward",
            state.urls().reverse("newforward")?,
            state.translate("Add forward", user),
        )
        .img("icon-plus")
        .modal("aliasform_cb"),
        MenuEntry::new(
            "newdlist",
            state.urls().reverse("newdlist")?,
            state.translate("Add distribution list", user),
        )
        .img("icon-plus")
        .modal("aliasform_cb"),
        MenuEntry::new(
            "import",
            state.urls().reverse("import_identities")?,
            state.translate("Import", user),
        )
        .img("icon-folder-open")
        .modal("importform_cb"),
    ];

    Ok(state.theme().render_menu(&entries, "nav nav-list", None, user)?)
}

/// Build the menu box provided entirely by extensions.
///
/// Returns `""` when no extension contributes an entry.
pub fn admin_extension_menu(state: &AppState, user: &User) -> AppResult<String> {
    let entries = state
        .events()
        .raise_menu_query(ADMIN_MENU_DISPLAY, "admin_menu_box", user);

    if entries.is_empty() {
        return Ok(String::new());
    }
    Ok(state.theme().render_menu_list(&entries, "", user)?)
}

/// Concatenate extension-provided markup for a target slot on the current
/// page.
pub fn extra_admin_content(
    state: &AppState,
    user: &User,
    target: &str,
    currentpage: &str,
) -> String {
    state
        .events()
        .raise_content_query(EXTRA_ADMIN_CONTENT, user, target, currentpage)
}
