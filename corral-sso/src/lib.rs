// SPDX-License-Identifier: MIT OR Apache-2.0

//! Redirect-loop guard for the SSO login entry point.
//!
//! The login entry point normally hands control to the authentication
//! handler, which redirects to the external identity provider. Once the
//! provider sends the client back, the request arrives here already
//! authenticated; redirecting it into the handler again would loop forever.
//! [`handle_login`] breaks that loop: authenticated requests are redirected
//! to the handler's return target (or the application root when that target
//! is missing or points back at this entry point), unauthenticated requests
//! are delegated to the handler, and a handler that cannot issue a
//! challenge is answered with a 403.

mod login;
pub mod traits;

pub use login::{CANNOT_LOGIN, LOGIN_PATH, LoginAction, handle_login};
