// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::{error, info};

use crate::traits::{AuthenticationHandler, LoginRequest};

/// Path under which the login entry point is mounted.
pub const LOGIN_PATH: &str = "/system/sso/login";

/// Diagnostic sent with the 403 when the handler cannot issue a challenge.
pub const CANNOT_LOGIN: &str = "Cannot login";

/// The single outgoing action for one login request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoginAction {
    /// Redirect an already-authenticated client to its target.
    Redirect(String),

    /// The handler accepted the delegation and issues its own challenge.
    CredentialsRequested,

    /// The handler could not issue a challenge.
    Forbidden(&'static str),
}

impl LoginAction {
    /// HTTP status carried by the action, when it maps onto one directly.
    /// `CredentialsRequested` leaves the response to the handler.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoginAction::Redirect(_) => Some(302),
            LoginAction::CredentialsRequested => None,
            LoginAction::Forbidden(_) => Some(403),
        }
    }
}

/// Decide the outgoing action for one login request.
///
/// An authenticated request is redirected to the handler's return target.
/// A target that is absent or textually identical to the request's own URI
/// would re-enter this entry point, so the application root under the
/// current context is used instead. An unauthenticated request is delegated
/// to the handler's credentials request.
pub fn handle_login<Q, H>(request: &Q, handler: &mut H) -> LoginAction
where
    Q: LoginRequest,
    H: AuthenticationHandler<Q>,
{
    // Check for a possible loop after authentication.
    if request.auth_type().is_some() {
        let target = match handler.return_path(request) {
            Some(target) if target != request.request_uri() => target,
            _ => format!("{}/", request.context_path()),
        };
        info!("request already authenticated, redirecting to {}", target);
        return LoginAction::Redirect(target);
    }

    // Pass control to the handler.
    if handler.request_credentials(request) {
        LoginAction::CredentialsRequested
    } else {
        error!("unable to request credentials from handler");
        LoginAction::Forbidden(CANNOT_LOGIN)
    }
}
