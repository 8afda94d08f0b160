//! The orchestrator actor.
//!
//! A request with an empty description is rejected synchronously at
//! dispatch time; everything else defers to a spawned generation task. The
//! extracted bid amount and delivery time ride along untouched on whichever
//! arm the response takes.

use std::sync::Arc;

use bidhands_protocols::message::{OrchestratorCommand, Response};
use bidhands_protocols::routing::{Disposition, Envelope, OrchestratorHandle};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::credentials::CredentialStore;
use crate::generate::{generate_bid, GenerationSettings};

const MAILBOX_CAPACITY: usize = 16;

const MISSING_DESCRIPTION: &str = "Job description was missing in the request";

/// Actor owning credential access and network egress.
pub struct Orchestrator {
    store: Arc<dyn CredentialStore>,
    settings: Arc<GenerationSettings>,
}

impl Orchestrator {
    /// Start the orchestrator and return the handle requests go through.
    pub fn spawn(
        store: Arc<dyn CredentialStore>,
        settings: GenerationSettings,
    ) -> OrchestratorHandle {
        let (tx, mut rx) = mpsc::channel(MAILBOX_CAPACITY);
        let orchestrator = Self {
            store,
            settings: Arc::new(settings),
        };
        tokio::spawn(async move {
            info!(model = %orchestrator.settings.model, "orchestrator started");
            while let Some(envelope) = rx.recv().await {
                let disposition = orchestrator.dispatch(envelope);
                debug!(?disposition, "generation request dispatched");
            }
            debug!("orchestrator mailbox closed");
        });
        OrchestratorHandle::new(tx)
    }

    fn dispatch(&self, envelope: Envelope<OrchestratorCommand, Response>) -> Disposition {
        let Envelope { request, responder } = envelope;
        let OrchestratorCommand::CallGemini(request) = request;

        if request.description.trim().is_empty() {
            warn!("generation request without a description");
            responder.respond(Response::error_with_context(
                MISSING_DESCRIPTION,
                request.extracted_bid_amount,
                request.extracted_delivery_time,
            ));
            return Disposition::Completed;
        }

        let store = Arc::clone(&self.store);
        let settings = Arc::clone(&self.settings);
        tokio::spawn(async move {
            let response =
                match generate_bid(store.as_ref(), &settings, &request.description).await {
                    Ok(bid) => Response::bid(
                        bid,
                        request.extracted_bid_amount,
                        request.extracted_delivery_time,
                    ),
                    Err(err) => {
                        warn!(%err, "generation failed");
                        Response::error_with_context(
                            err.to_string(),
                            request.extracted_bid_amount,
                            request.extracted_delivery_time,
                        )
                    }
                };
            responder.respond(response);
        });
        Disposition::Deferred
    }
}

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
