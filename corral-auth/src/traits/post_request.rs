// SPDX-License-Identifier: MIT OR Apache-2.0

/// Request-side view of one inbound mutation request.
pub trait PostRequest {
    type Resource;

    /// All values submitted under a parameter name, `None` when the
    /// parameter is absent.
    fn parameter_values(&self, name: &str) -> Option<&[String]>;

    /// The resource the request was addressed to. Relative member tokens
    /// resolve against it.
    fn base_resource(&self) -> &Self::Resource;
}
