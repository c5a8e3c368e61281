use axum::http::HeaderMap;

use crate::errors::AppError;

/// Resolves the acting user for a request.
///
/// Every core operation takes the resolved user id as an explicit parameter,
/// so swapping this for a session- or token-based resolver later leaves the
/// reconciliation and toggle paths untouched.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> Result<String, AppError>;
}

/// Placeholder resolver used while the product has no authentication: every
/// request maps to one configured demo user.
pub struct FixedIdentity {
    user_id: String,
}

impl FixedIdentity {
    pub fn new(user_id: String) -> Self {
        Self { user_id }
    }
}

impl IdentityResolver for FixedIdentity {
    fn resolve(&self, _headers: &HeaderMap) -> Result<String, AppError> {
        Ok(self.user_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_identity_ignores_headers() {
        let resolver = FixedIdentity::new("demo-user".to_string());
        let user = resolver.resolve(&HeaderMap::new()).unwrap();
        assert_eq!(user, "demo-user");
    }
}
