//! Typed tenant identifier.
//!
//! Using a typed ID prevents accidentally passing an arbitrary integer where a
//! tenant scope is expected.

use serde::{Deserialize, Serialize};

/// Identifier of a tenant (an isolated operator/organization scope).
///
/// Tenant IDs are positive integers; `is_valid` is the single place that rule
/// is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub i32);

impl TenantId {
    /// Creates a tenant ID from a raw integer.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }

    /// Returns true if the ID is in the valid range (strictly positive).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_id_validity() {
        assert!(TenantId::new(1).is_valid());
        assert!(TenantId::new(42).is_valid());
        assert!(!TenantId::new(0).is_valid());
        assert!(!TenantId::new(-1).is_valid());
    }

    #[test]
    fn test_tenant_id_display() {
        assert_eq!(TenantId::new(7).to_string(), "7");
    }
}
