//! Upstream reply value object.

use serde_json::Value;

/// What an upstream device answered: status code and JSON body, both passed
/// through to the client verbatim.
///
/// Any status counts — a reachable upstream that answers 500 is still a
/// reply, not a gateway error. Only transport-level failures become
/// [`crate::error::GatewayError`] variants.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    /// HTTP status code reported by the device.
    pub status: u16,
    /// JSON body reported by the device.
    pub body: Value,
}

impl UpstreamReply {
    /// Shorthand for a 200 reply, mainly for tests and stubs.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_build_ok_reply() {
        let reply = UpstreamReply::ok(json!({"brightness": 700}));
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, json!({"brightness": 700}));
    }
}
