//! Inter-component channel errors.

use thiserror::Error;

/// Failure of the request/response channel itself, as opposed to an error
/// response travelling over it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The receiving component is not running. The user-facing remediation
    /// mirrors the situation on the page side: reload and retry.
    #[error(
        "Could not connect to the page agent. Reload the project page and try again"
    )]
    Disconnected,

    /// The request was accepted but the handler dropped its responder
    /// without ever answering.
    #[error("The request was accepted but no response was ever sent")]
    NoResponse,
}
