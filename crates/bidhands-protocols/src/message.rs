//! Wire message types.
//!
//! Requests are discriminated by an `action` tag and responses by a
//! `status` tag, with camelCase field names, so the serialized form is the
//! protocol an external observer sees.

use serde::{Deserialize, Serialize};

/// Request accepted by the page agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum PageCommand {
    /// Extract the job details and relay a generation request.
    #[serde(rename = "getJobDescription")]
    GetJobDescription,
    /// Write the bid text and form fields into the page.
    #[serde(rename = "fillBidForm", rename_all = "camelCase")]
    FillBidForm { bid_data: BidData },
    /// Locate and activate the submit control.
    #[serde(rename = "placeBid")]
    PlaceBid,
}

/// Request accepted by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum OrchestratorCommand {
    #[serde(rename = "callGemini")]
    CallGemini(BidRequest),
}

/// Generation request relayed from the page agent to the orchestrator.
///
/// Never constructed with an empty description; the page agent rejects the
/// caller first, and the orchestrator rejects it again defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_bid_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_delivery_time: Option<u32>,
}

/// Response sent back over a request's one-shot channel.
///
/// A single shape serves both the generation reply (`bid` present) and the
/// fill/place acknowledgements (all optionals absent). The extracted bid
/// amount and delivery time are echoed on both arms so the caller never has
/// to re-extract after a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    #[serde(rename_all = "camelCase")]
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bid: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bid_amount: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delivery_time: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    Error {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bid_amount: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delivery_time: Option<u32>,
    },
}

impl Response {
    /// Plain success acknowledgement.
    pub fn success() -> Self {
        Response::Success {
            bid: None,
            bid_amount: None,
            delivery_time: None,
        }
    }

    /// Successful generation result with the extracted values passed through.
    pub fn bid(bid: impl Into<String>, bid_amount: Option<f64>, delivery_time: Option<u32>) -> Self {
        Response::Success {
            bid: Some(bid.into()),
            bid_amount,
            delivery_time,
        }
    }

    /// Error without extracted context.
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
            bid_amount: None,
            delivery_time: None,
        }
    }

    /// Error that still carries the best-effort extracted values.
    pub fn error_with_context(
        message: impl Into<String>,
        bid_amount: Option<f64>,
        delivery_time: Option<u32>,
    ) -> Self {
        Response::Error {
            message: message.into(),
            bid_amount,
            delivery_time,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    /// The error message, if this is an error response.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Response::Error { message, .. } => Some(message),
            Response::Success { .. } => None,
        }
    }
}

/// Payload for form insertion, assembled by the control surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidData {
    pub bid_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<u32>,
    /// When absent entirely, existing checkbox state on the page is left
    /// untouched (absence is not "false").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrades: Option<Upgrades>,
}

impl BidData {
    pub fn text_only(bid_text: impl Into<String>) -> Self {
        Self {
            bid_text: bid_text.into(),
            bid_amount: None,
            delivery_time: None,
            upgrades: None,
        }
    }
}

/// Upgrade checkbox selections. Only keys that are present are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrades {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sealed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
