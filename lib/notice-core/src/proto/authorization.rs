/// Capability check against the role asserted by the upstream gateway
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait AuthorizationPolicy: Send + Sync {
    fn is_admin(&self, role: &str) -> bool;
}

/// Exact, case-sensitive match against a single configured role marker
pub struct RoleAuthorizationPolicy {
    admin_role: String,
}

impl RoleAuthorizationPolicy {
    pub fn new(admin_role: impl Into<String>) -> Self {
        Self {
            admin_role: admin_role.into(),
        }
    }
}

impl AuthorizationPolicy for RoleAuthorizationPolicy {
    fn is_admin(&self, role: &str) -> bool {
        role == self.admin_role
    }
}
