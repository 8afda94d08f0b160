//! The page agent actor.
//!
//! One inbound mailbox, commands discriminated by action. Every command is
//! answered exactly once: extraction and submission involve settle delays,
//! so their handlers move the responder into a spawned task and report
//! [`Disposition::Deferred`] at dispatch time.

use std::sync::Arc;

use bidhands_protocols::message::{BidRequest, PageCommand, Response};
use bidhands_protocols::routing::{Disposition, Envelope, OrchestratorHandle, PageAgentHandle};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::extract::extract_job_details;
use crate::fill::fill_form;
use crate::page::Page;
use crate::selectors::{SelectorConfig, Timing};
use crate::submit::activate_bid_button;

const MAILBOX_CAPACITY: usize = 16;

const NO_DESCRIPTION: &str =
    "Failed to extract job description from page. Please ensure you are on a valid project page";

/// Actor with direct access to one job page.
///
/// On `getJobDescription` it extracts the job details and relays them to
/// the orchestrator for generation, answering with the generation result.
pub struct PageAgent {
    page: Arc<dyn Page>,
    selectors: Arc<SelectorConfig>,
    timing: Timing,
    orchestrator: OrchestratorHandle,
}

impl PageAgent {
    /// Start the agent and return the handle callers send commands through.
    ///
    /// The receiving half is owned by the actor task alone, so a second
    /// registration for the same mailbox cannot exist.
    pub fn spawn(
        page: Arc<dyn Page>,
        selectors: SelectorConfig,
        timing: Timing,
        orchestrator: OrchestratorHandle,
    ) -> PageAgentHandle {
        let (tx, mut rx) = mpsc::channel(MAILBOX_CAPACITY);
        let agent = Self {
            page,
            selectors: Arc::new(selectors),
            timing,
            orchestrator,
        };
        tokio::spawn(async move {
            info!(url = %agent.page.url(), "page agent started");
            while let Some(envelope) = rx.recv().await {
                let disposition = agent.dispatch(envelope);
                debug!(?disposition, "page command dispatched");
            }
            debug!("page agent mailbox closed");
        });
        PageAgentHandle::new(tx)
    }

    fn dispatch(&self, envelope: Envelope<PageCommand, Response>) -> Disposition {
        let Envelope { request, responder } = envelope;
        let page = Arc::clone(&self.page);
        let selectors = Arc::clone(&self.selectors);
        let timing = self.timing;
        match request {
            PageCommand::GetJobDescription => {
                let orchestrator = self.orchestrator.clone();
                tokio::spawn(async move {
                    let details = extract_job_details(page.as_ref(), &selectors, &timing).await;
                    let response = match details.description {
                        Some(description) => {
                            let request = BidRequest {
                                description,
                                extracted_bid_amount: details.extracted_bid_amount,
                                extracted_delivery_time: details.extracted_delivery_time,
                            };
                            match orchestrator.call_gemini(request).await {
                                Ok(response) => response,
                                Err(err) => Response::error(err.to_string()),
                            }
                        }
                        None => Response::error_with_context(
                            NO_DESCRIPTION,
                            details.extracted_bid_amount,
                            details.extracted_delivery_time,
                        ),
                    };
                    responder.respond(response);
                });
                Disposition::Deferred
            }
            PageCommand::FillBidForm { bid_data } => {
                tokio::spawn(async move {
                    let response = match fill_form(&page, &selectors, &timing, &bid_data).await {
                        Ok(()) => Response::success(),
                        Err(err) => Response::error(err.to_string()),
                    };
                    responder.respond(response);
                });
                Disposition::Deferred
            }
            PageCommand::PlaceBid => {
                tokio::spawn(async move {
                    let response =
                        match activate_bid_button(page.as_ref(), &selectors, &timing).await {
                            Ok(()) => Response::success(),
                            Err(err) => Response::error(err.to_string()),
                        };
                    responder.respond(response);
                });
                Disposition::Deferred
            }
        }
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
