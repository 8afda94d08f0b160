//! The control surface: the user-facing driver of the workflow.
//!
//! Holds the generated draft between steps and reports progress through a
//! [`StatusSink`]. It deliberately carries no in-flight guard beyond what a
//! caller imposes; overlapping invocations are possible and each reports
//! its own outcome.

use std::sync::{Arc, Mutex};

use bidhands_orchestrator::{CredentialStore, GEMINI_API_KEY};
use bidhands_protocols::error::ChannelError;
use bidhands_protocols::message::{BidData, PageCommand, Response};
use bidhands_protocols::routing::PageAgentHandle;
use tracing::{error, info, warn};

/// Substring an address must contain to count as a project page.
pub const PROJECT_URL_PATTERN: &str = "freelancer.com/projects/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Loading,
    Success,
    Warning,
    Error,
}

/// One progress update for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Where progress updates go.
pub trait StatusSink: Send + Sync {
    fn report(&self, status: Status);
}

/// Sink that forwards updates to the log.
pub struct LogSink;

impl StatusSink for LogSink {
    fn report(&self, status: Status) {
        match status.level {
            StatusLevel::Error => error!("{}", status.message),
            StatusLevel::Warning => warn!("{}", status.message),
            _ => info!("{}", status.message),
        }
    }
}

/// A generated draft plus the numeric defaults read off the page, held for
/// the user to review and edit before insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub bid_text: String,
    pub bid_amount: Option<f64>,
    pub delivery_time: Option<u32>,
}

/// Drives the generate / insert / place workflow against one page agent.
pub struct ControlSurface {
    agent: PageAgentHandle,
    page_url: String,
    sink: Arc<dyn StatusSink>,
    draft: Mutex<Option<Draft>>,
}

impl ControlSurface {
    pub fn new(agent: PageAgentHandle, page_url: impl Into<String>, sink: Arc<dyn StatusSink>) -> Self {
        Self {
            agent,
            page_url: page_url.into(),
            sink,
            draft: Mutex::new(None),
        }
    }

    /// The draft from the last successful generation, if any.
    pub fn draft(&self) -> Option<Draft> {
        self.draft.lock().expect("draft poisoned").clone()
    }

    fn report(&self, level: StatusLevel, message: impl Into<String>) {
        self.sink.report(Status::new(level, message));
    }

    fn store_draft(&self, draft: Draft) {
        *self.draft.lock().expect("draft poisoned") = Some(draft);
    }

    /// Report whether the API key is configured. Reporting only; a missing
    /// key does not block the workflow here, generation fails with its own
    /// remediation later.
    pub async fn check_credential(&self, store: &dyn CredentialStore) -> bool {
        match store.get(GEMINI_API_KEY).await {
            Some(_) => {
                self.report(StatusLevel::Info, "Ready to generate bids");
                true
            }
            None => {
                self.report(
                    StatusLevel::Warning,
                    "API Key not set. Run `bidhands configure` and add gemini_api_key to the credentials file",
                );
                false
            }
        }
    }

    /// Request extraction and generation, and hold the resulting draft.
    ///
    /// Refuses to start unless the page address looks like a project page.
    pub async fn generate(&self) -> Option<Draft> {
        if !self.page_url.contains(PROJECT_URL_PATTERN) {
            self.report(
                StatusLevel::Warning,
                format!(
                    "Please navigate to a Freelancer project page (URL should contain '{PROJECT_URL_PATTERN}')"
                ),
            );
            return None;
        }

        self.report(StatusLevel::Loading, "Requesting job details and generating bid...");

        match self.agent.send(PageCommand::GetJobDescription).await {
            Ok(Response::Success {
                bid,
                bid_amount,
                delivery_time,
            }) => {
                let bid_text = bid.unwrap_or_default().trim().to_string();
                let draft = Draft {
                    bid_text,
                    bid_amount,
                    delivery_time,
                };
                if draft.bid_text.is_empty() {
                    self.report(
                        StatusLevel::Warning,
                        "Generation returned no bid text. Enter one manually, then insert",
                    );
                } else {
                    self.report(
                        StatusLevel::Success,
                        "Bid generated. Review and edit details below",
                    );
                }
                self.store_draft(draft.clone());
                Some(draft)
            }
            Ok(response) => {
                let message = response
                    .error_message()
                    .unwrap_or("Unknown response from the page agent")
                    .to_string();
                self.report(StatusLevel::Error, message);
                None
            }
            Err(err) => {
                self.report_channel_error(err);
                None
            }
        }
    }

    /// Send the bid data to the page agent for form insertion.
    pub async fn insert(&self, bid_data: BidData) -> bool {
        if bid_data.bid_text.trim().is_empty() {
            self.report(
                StatusLevel::Warning,
                "Bid description text is required to fill the form. Please generate or enter one",
            );
            return false;
        }

        self.report(StatusLevel::Loading, "Sending bid details to page for insertion...");

        match self.agent.send(PageCommand::FillBidForm { bid_data }).await {
            Ok(response) if response.is_success() => {
                self.report(
                    StatusLevel::Success,
                    "Bid form filled successfully! Review and place your bid on the page",
                );
                true
            }
            Ok(response) => {
                let message = response
                    .error_message()
                    .unwrap_or("Unknown response from the page agent")
                    .to_string();
                self.report(StatusLevel::Error, message);
                false
            }
            Err(err) => {
                self.report_channel_error(err);
                false
            }
        }
    }

    /// Ask the page agent to activate the submit control.
    pub async fn place_bid(&self) -> bool {
        self.report(StatusLevel::Loading, "Attempting to click the place bid button...");

        match self.agent.send(PageCommand::PlaceBid).await {
            Ok(response) if response.is_success() => {
                self.report(
                    StatusLevel::Success,
                    "Place bid button clicked. Check the page to confirm submission",
                );
                true
            }
            Ok(response) => {
                let message = response
                    .error_message()
                    .unwrap_or("Unknown response from the page agent")
                    .to_string();
                self.report(StatusLevel::Error, message);
                false
            }
            Err(err) => {
                self.report_channel_error(err);
                false
            }
        }
    }

    fn report_channel_error(&self, err: ChannelError) {
        self.report(StatusLevel::Error, err.to_string());
    }
}

#[cfg(test)]
#[path = "control_tests.rs"]
mod tests;
