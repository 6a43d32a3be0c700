//! Permission checking service with DashMap-based grant storage.

use std::collections::HashSet;

use dashmap::DashMap;

use crate::models::User;

/// Permission service with fast DashMap-based lookups.
///
/// Grants are registered by the host application at startup; checks are
/// read-only afterwards. Permission names follow the
/// `"<resource>.<action>"` convention (e.g. `"admin.view_domains"`).
#[derive(Debug, Default)]
pub struct PermissionService {
    /// Grant table: user_id -> permission names.
    grants: DashMap<i64, HashSet<String>>,
}

impl PermissionService {
    /// Create an empty permission service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a permission to a user.
    pub fn grant(&self, user_id: i64, permission: impl Into<String>) {
        self.grants.entry(user_id).or_default().insert(permission.into());
    }

    /// Revoke a permission from a user.
    pub fn revoke(&self, user_id: i64, permission: &str) {
        if let Some(mut granted) = self.grants.get_mut(&user_id) {
            granted.remove(permission);
        }
    }

    /// Check if a user has a specific permission.
    ///
    /// Super-administrators always pass.
    pub fn has_permission(&self, user: &User, permission: &str) -> bool {
        if user.is_superuser {
            return true;
        }

        self.grants
            .get(&user.id)
            .is_some_and(|granted| granted.contains(permission))
    }
}
