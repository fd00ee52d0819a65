// SPDX-License-Identifier: MIT OR Apache-2.0

/// Request-side view of one inbound login request.
pub trait LoginRequest {
    /// Authentication marker set by the framework, `None` while the request
    /// is unauthenticated.
    fn auth_type(&self) -> Option<&str>;

    /// URI the request was addressed to.
    fn request_uri(&self) -> &str;

    /// Context prefix under which the application is mounted.
    fn context_path(&self) -> &str;
}

/// Boundary to the SSO authentication handler.
pub trait AuthenticationHandler<Q: LoginRequest> {
    /// Where the user originally intended to go, when the handler knows.
    fn return_path(&self, request: &Q) -> Option<String>;

    /// Ask the handler to challenge the client, typically by redirecting to
    /// the external identity provider. Returns `false` when no challenge
    /// could be issued.
    fn request_credentials(&mut self, request: &Q) -> bool;
}
