use async_trait::async_trait;
use url::Url;

use crate::error::ProviderError;
use crate::platform::{IdentityService, RequestContext, User};

// Set by the platform front end on authenticated requests.
pub const HEADER_USER_EMAIL: &str = "x-appengine-user-email";
pub const HEADER_USER_IS_ADMIN: &str = "x-appengine-user-is-admin";

/// Identity read from front-end headers, with a configurable login page.
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    login_page: String,
}

impl HeaderIdentity {
    pub fn new(login_page: impl Into<String>) -> Self {
        Self { login_page: login_page.into() }
    }
}

#[async_trait]
impl IdentityService for HeaderIdentity {
    fn current_user(&self, request: &RequestContext) -> Option<User> {
        let email = request.header(HEADER_USER_EMAIL);
        if email.is_empty() {
            return None;
        }
        let admin = request.header(HEADER_USER_IS_ADMIN) == "1";
        Some(User { email, admin })
    }

    async fn login_url(&self, dest: &str) -> Result<String, ProviderError> {
        let url = Url::parse_with_params(&self.login_page, &[("continue", dest)]).map_err(|e| {
            ProviderError::Internal(format!("invalid login page '{}': {}", self.login_page, e))
        })?;
        Ok(url.into())
    }
}
