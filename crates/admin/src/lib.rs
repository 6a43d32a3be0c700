//! Mailstead admin presentation layer.
//!
//! Template tags for the Mailstead email-hosting administration panel:
//! permission-gated navigation menus, per-row action links, and dynamic
//! settings-form fields, rendered through Tera templates. Everything here
//! is a stateless per-request mapping from (user, selection, object id) to
//! markup; storage, routing, and authentication belong to the surrounding
//! framework.

pub mod config;
pub mod error;
pub mod events;
pub mod helpers;
pub mod locale;
pub mod models;
pub mod permissions;
pub mod state;
pub mod tags;
pub mod theme;
pub mod urls;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::{AppState, AppStateBuilder};
