//! Domain records handed to the template tags.

pub mod alias;
pub mod identity;
pub mod menu;
pub mod user;

pub use alias::{Alias, AliasKind, AliasStore, InMemoryAliasStore};
pub use identity::IdentityRef;
pub use menu::{Action, MenuEntry};
pub use user::User;
