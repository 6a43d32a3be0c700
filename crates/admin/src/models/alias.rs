//! Alias entity and lookup.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// An address alias, as stored by the hosting backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alias {
    pub id: i64,
    pub address: String,
    /// Local recipients of this alias.
    #[serde(default)]
    pub recipients: Vec<String>,
    /// External mailbox addresses, empty when none.
    #[serde(default)]
    pub external_mailboxes: String,
}

/// Derived classification of an alias, computed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    DistributionList,
    Forward,
    Alias,
}

impl Alias {
    /// Create an alias with no recipients and no external mailboxes.
    pub fn new(id: i64, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
            recipients: Vec::new(),
            external_mailboxes: String::new(),
        }
    }

    /// Classify this alias for display purposes.
    ///
    /// The recipient-count check takes precedence over the external-mailbox
    /// check: an alias with two or more recipients is a distribution list
    /// even when it also forwards externally.
    pub fn kind(&self) -> AliasKind {
        if self.recipients.len() >= 2 {
            AliasKind::DistributionList
        } else if !self.external_mailboxes.is_empty() {
            AliasKind::Forward
        } else {
            AliasKind::Alias
        }
    }
}

/// Lookup collaborator for alias entities.
pub trait AliasStore: Send + Sync {
    /// Fetch an alias by id.
    fn alias(&self, id: i64) -> AppResult<Alias>;
}

/// In-memory alias store, used by tests and small deployments.
#[derive(Debug, Default)]
pub struct InMemoryAliasStore {
    aliases: DashMap<i64, Alias>,
}

impl InMemoryAliasStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an alias.
    pub fn insert(&self, alias: Alias) {
        self.aliases.insert(alias.id, alias);
    }
}

impl AliasStore for InMemoryAliasStore {
    fn alias(&self, id: i64) -> AppResult<Alias> {
        self.aliases
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(AppError::NotFound)
    }
}
