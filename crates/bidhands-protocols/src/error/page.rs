//! Page mutation errors.

use thiserror::Error;

/// Error at the page seam: a synthetic interaction the page refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("interaction rejected by the page: {0}")]
    InteractionRejected(String),

    #[error("node is no longer attached to the page")]
    Detached,
}

/// Form fill failure. Only the bid text is mandatory; amount and delivery
/// writes are best-effort and never fail the fill on their own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    #[error("Bid description text is required for filling the form")]
    MissingBidText,

    #[error("Bid description text area not found on the page")]
    TextAreaNotFound,

    #[error("Failed to write the bid description: {0}")]
    WriteRejected(String),
}

/// Submission trigger failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivateError {
    #[error("Could not find the bid button on the page. Please place your bid manually")]
    ButtonNotFound,

    #[error("The bid button is disabled. Please check if all required fields are filled")]
    ButtonDisabled,

    #[error("Could not click the bid button. Please try placing your bid manually")]
    AllTechniquesFailed,
}
