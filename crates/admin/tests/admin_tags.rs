#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end template tag tests over a fully wired application state.

use std::sync::Arc;

use mailstead_admin::config::Config;
use mailstead_admin::events::{ADMIN_MENU_DISPLAY, EXTRA_ADMIN_CONTENT};
use mailstead_admin::locale::Gender;
use mailstead_admin::models::{Alias, IdentityRef, InMemoryAliasStore, MenuEntry, User};
use mailstead_admin::tags;
use mailstead_admin::AppState;

fn wired_state() -> AppState {
    let store = InMemoryAliasStore::new();

    let mut dlist = Alias::new(10, "everyone@example.com");
    dlist.recipients = vec![
        "a@example.com".to_string(),
        "b@example.com".to_string(),
        "c@example.com".to_string(),
    ];
    store.insert(dlist);

    let mut forward = Alias::new(11, "out@example.com");
    forward.external_mailboxes = "me@elsewhere.example".to_string();
    store.insert(forward);

    store.insert(Alias::new(12, "contact@example.com"));

    AppState::builder_with_config(Config::default())
        .aliases(Arc::new(store))
        .menu_handler(ADMIN_MENU_DISPLAY, |_, slot| {
            if slot == "top_menu" {
                vec![MenuEntry::new("quotas", "/quotas", "Quotas")]
            } else {
                vec![MenuEntry::new("stats", "/stats", "Statistics")]
            }
        })
        .content_handler(EXTRA_ADMIN_CONTENT, |_, target, page| {
            format!("<div data-slot=\"{target}\" data-page=\"{page}\"></div>")
        })
        .content_handler(EXTRA_ADMIN_CONTENT, |user, _, _| {
            format!("<!-- rendered for {} -->", user.name)
        })
        .build()
        .unwrap()
}

#[test]
fn superuser_admin_menu_contains_every_group() {
    let state = wired_state();
    let root = User::new(0, "root", "root@example.com").superuser();

    let html = tags::admin_menu(&state, "settings", &root).unwrap();

    let domains = html.find("/domains").unwrap();
    let quotas = html.find("/quotas").unwrap();
    let identities = html.find("/identities").unwrap();
    let settings = html.find("/settings/parameters").unwrap();
    assert!(domains < quotas, "extension entries come after the domains group");
    assert!(quotas < identities && identities < settings);
}

#[test]
fn plain_user_admin_menu_has_only_extension_entries() {
    let state = wired_state();
    let user = User::new(5, "helpdesk", "helpdesk@example.com");

    let html = tags::admin_menu(&state, "", &user).unwrap();
    assert!(html.contains("/quotas"));
    assert!(!html.contains(r#"href="/domains""#));
    assert!(!html.contains("/settings/parameters"));
}

#[test]
fn identity_reference_drives_the_rendered_action() {
    let state = wired_state();
    let user = User::new(5, "helpdesk", "helpdesk@example.com");

    let account: IdentityRef = "User:42".parse().unwrap();
    let html = tags::identity_actions(&state, &user, &account).unwrap();
    assert!(html.contains("/identities/accounts/delete?selection=42"));

    let dlist: IdentityRef = "Alias:10".parse().unwrap();
    let html = tags::identity_actions(&state, &user, &dlist).unwrap();
    assert!(html.contains("Delete this distribution list"));

    let forward: IdentityRef = "Alias:11".parse().unwrap();
    let html = tags::identity_actions(&state, &user, &forward).unwrap();
    assert!(html.contains("Delete this forward"));

    let alias: IdentityRef = "Alias:12".parse().unwrap();
    let html = tags::identity_actions(&state, &user, &alias).unwrap();
    assert!(html.contains("Delete this alias"));
}

#[test]
fn extra_admin_content_passes_slot_page_and_user_through() {
    let state = wired_state();
    let user = User::new(5, "helpdesk", "helpdesk@example.com");

    let html = tags::extra_admin_content(&state, &user, "leftcol", "domains");
    assert_eq!(
        html,
        "<div data-slot=\"leftcol\" data-page=\"domains\"></div><!-- rendered for helpdesk -->"
    );
}

#[test]
fn gender_filter_uses_the_acting_language() {
    let state = wired_state();
    state.locale().import_json(
        "fr",
        r#"{"enabled_m": "activé", "enabled_f": "activée"}"#,
    )
    .unwrap();

    let french = User::new(6, "ana", "ana@example.com").language("fr");
    assert_eq!(state.gender("Enabled", Gender::Feminine, &french), "activée");
    assert_eq!(state.gender("Enabled", Gender::from_code("m"), &french), "activé");

    // English catalog is empty: the key sentinel forces the fallback.
    let english = User::new(7, "bob", "bob@example.com");
    assert_eq!(state.gender("Enabled", Gender::Feminine, &english), "Enabled");
}

#[test]
fn settings_page_renders_menu_and_params_together() {
    let state = wired_state();
    let root = User::new(0, "root", "root@example.com").superuser();

    let menu = tags::settings_menu(&state, "parameters", &root).unwrap();
    assert!(menu.contains("/settings/parameters"));

    let param = tags::Param::new(
        "greylisting",
        tags::ParamKind::ListYesno,
        "yes",
    )
    .help("Delay unknown senders");
    let html = tags::render_param(&state, "filters", &param, &root);
    assert!(html.contains("name=\"filters.greylisting\""));
    assert!(html.contains("Delay unknown senders"));
}
