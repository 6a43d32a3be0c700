//! Per-row action link builders.

use crate::error::AppResult;
use crate::models::{Action, AliasKind, IdentityRef, User};
use crate::state::AppState;

/// Placeholder shown when the user may not act on the row.
const NO_ACTIONS: &str = "---";

/// Build the action links for a domain row.
///
/// Users without the delete permission get the `"---"` placeholder, never a
/// partial action list.
pub fn domain_actions(state: &AppState, user: &User, domain_id: i64) -> AppResult<String> {
    if !state.permissions().has_permission(user, "admin.delete_domain") {
        return Ok(NO_ACTIONS.to_string());
    }

    let action = Action::new(
        "deldomain",
        state
            .urls()
            .reverse_query("deldomain", &[("selection", &domain_id.to_string())])?,
        "icon-trash",
    );
    Ok(state.theme().render_actions(&[action])?)
}

/// Build the action links for an identity row.
///
/// Accounts get a delete-account action without any alias lookup.
/// Alias-like identities are fetched and classified; the recipient-count
/// check takes precedence over the external-mailbox check. A missing alias
/// propagates as a not-found error.
pub fn identity_actions(state: &AppState, user: &User, ident: &IdentityRef) -> AppResult<String> {
    let action = match *ident {
        IdentityRef::Account(id) => Action::new(
            "delaccount",
            state
                .urls()
                .reverse_query("delaccount", &[("selection", &id.to_string())])?,
            "icon-trash",
        )
        .title(state.translate("Delete this account", user)),

        IdentityRef::AliasLike(id) => {
            let alias = state.aliases().alias(id)?;
            let selection = id.to_string();

            match alias.kind() {
                AliasKind::DistributionList => Action::new(
                    "deldlist",
                    state
                        .urls()
                        .reverse_query("deldlist", &[("selection", &selection)])?,
                    "icon-trash",
                )
                .title(state.translate("Delete this distribution list", user)),

                AliasKind::Forward => Action::new(
                    "delforward",
                    state
                        .urls()
                        .reverse_query("delforward", &[("selection", &selection)])?,
                    "icon-trash",
                )
                .title(state.translate("Delete this forward", user)),

                AliasKind::Alias => Action::new(
                    "delalias",
                    state
                        .urls()
                        .reverse_query("delalias", &[("selection", &selection)])?,
                    "icon-trash",
                )
                .title(state.translate("Delete this alias", user)),
            }
        }
    };

    Ok(state.theme().render_actions(&[action])?)
}

/// Build the remove-permission action for a domain administrator row.
pub fn domadmin_actions(
    state: &AppState,
    user: &User,
    domain_id: i64,
    domadmin_id: i64,
) -> AppResult<String> {
    let action = Action::new(
        "removeperm",
        state.urls().reverse_query(
            "remove_permission",
            &[
                ("domid", &domain_id.to_string()),
                ("daid", &domadmin_id.to_string()),
            ],
        )?,
        "icon-trash",
    )
    .title(state.translate("Remove this permission", user));

    Ok(state.theme().render_actions(&[action])?)
}
