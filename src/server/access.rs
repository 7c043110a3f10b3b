use tracing::debug;

use crate::error::ProviderError;
use crate::platform::{RequestContext, User};
use crate::InfoEngine;

/// Outcome of the admin gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Go ahead. Carries the caller when one is signed in.
    Proceed(Option<User>),
    /// Not signed in; send the client to this login URL.
    Redirect(String),
    /// Signed in but not an administrator.
    Forbidden,
}

/// Decides whether `request` may see the report. Development servers skip all checks.
pub async fn check(engine: &InfoEngine, request: &RequestContext) -> Result<Access, ProviderError> {
    let user = engine.identity.current_user(request);

    if engine.env.is_dev_app_server() {
        debug!("Development server, skipping access checks");
        return Ok(Access::Proceed(user));
    }

    match user {
        None => {
            let dest = request.return_path();
            let login = engine.identity.login_url(&dest).await?;
            debug!(%dest, "Anonymous caller, redirecting to login");
            Ok(Access::Redirect(login))
        }
        Some(user) if !user.admin => {
            debug!(email = %user.email, "Caller is not an admin");
            Ok(Access::Forbidden)
        }
        Some(user) => Ok(Access::Proceed(Some(user))),
    }
}
