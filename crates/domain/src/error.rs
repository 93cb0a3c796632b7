//! Gateway error taxonomy.
//!
//! Every failure the gateway can produce on its own is a [`GatewayError`]
//! variant. The HTTP adapter maps each variant to a status code and the
//! uniform JSON error envelope; this crate only defines the messages.
//! Upstream replies with non-success status codes are *not* errors — they
//! are passed through verbatim (see [`crate::upstream::UpstreamReply`]).

/// Errors produced while dispatching a gateway request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The thermometer name is not in the registry.
    #[error("Unrecognized thermometer name: {0}")]
    UnknownThermometer(String),
    /// The light name is in neither the dimmable nor the non-dimmable registry.
    #[error("Unrecognized light name: {0}")]
    UnknownLight(String),
    /// The switch name is not in the registry.
    #[error("Unrecognized switch name: {0}")]
    UnknownSwitch(String),
    /// The `units` query parameter is not one of `C`, `F`, `K`.
    #[error("Unrecognized temperature units: {0}")]
    UnknownUnits(String),
    /// The request body is not syntactically valid JSON.
    #[error("Invalid JSON request data.")]
    InvalidJson,
    /// The request body lacks the key the target type requires.
    #[error("Missing required key: {0}")]
    MissingKey(&'static str),
    /// The request body carries a key the target type does not accept.
    #[error("Unexpected key in request data: {0}")]
    UnexpectedKey(String),
    /// `brightness` is not an integer in the dimmable range.
    #[error("brightness must be an integer between 0 and 1023")]
    BrightnessOutOfRange,
    /// `state` is not a string.
    #[error("state must be a string")]
    StateNotString,
    /// The operation is reserved but has no committed behaviour yet.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
    /// The upstream device could not be reached at the transport level.
    #[error("Endpoint device could not be reached: {0}")]
    Unreachable(String),
    /// The upstream call failed at the transport level for another reason.
    #[error("Error with endpoint device: {0}")]
    Device(String),
    /// The local sensor read failed.
    #[error("Sensor read failed: {0}")]
    Sensor(String),
}
