//! Typed identity references.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A reference to an identity row.
///
/// The wire form is `"<Kind>:<id>"`. `User` names an account; any other kind
/// is an alias-like entity, classified on lookup. Parsing happens once at
/// the boundary so downstream code never splits strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRef {
    /// A user account.
    Account(i64),
    /// An alias-like entity (alias, forward, or distribution list).
    AliasLike(i64),
}

impl IdentityRef {
    /// The referenced row id.
    pub fn id(&self) -> i64 {
        match *self {
            IdentityRef::Account(id) | IdentityRef::AliasLike(id) => id,
        }
    }
}

impl FromStr for IdentityRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((kind, id)) = s.split_once(':') else {
            return Err(AppError::BadRequest(format!(
                "malformed identity reference: {s}"
            )));
        };

        let id: i64 = id
            .parse()
            .map_err(|_| AppError::BadRequest(format!("non-numeric identity id: {s}")))?;

        Ok(match kind {
            "User" => IdentityRef::Account(id),
            _ => IdentityRef::AliasLike(id),
        })
    }
}

impl fmt::Display for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityRef::Account(id) => write!(f, "User:{id}"),
            IdentityRef::AliasLike(id) => write!(f, "Alias:{id}"),
        }
    }
}
