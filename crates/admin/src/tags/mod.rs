//! Template tags: the presentation helpers invoked from admin templates.

pub mod actions;
pub mod menus;
pub mod params;

pub use actions::{domadmin_actions, domain_actions, identity_actions};
pub use menus::{
    admin_extension_menu, admin_menu, domains_menu, extra_admin_content, identities_menu,
    settings_menu,
};
pub use params::{Param, ParamKind, render_param};
