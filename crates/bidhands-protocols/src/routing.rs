//! Request/response routing contract.
//!
//! Each component exposes one inbound mailbox. A request travels in an
//! [`Envelope`] with a one-shot [`Responder`]; delivery back to the caller
//! is via that responder, never a broadcast, so a response always
//! corresponds to its own request. No ordering is guaranteed between
//! independent requests issued in overlapping succession.
//!
//! A handler must either answer before its dispatch returns
//! ([`Disposition::Completed`]) or move the responder into a spawned task
//! and return [`Disposition::Deferred`]. A deferred task that drops the
//! responder without answering is observable at the caller as
//! [`ChannelError::NoResponse`] rather than a silent hang.

use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use crate::error::ChannelError;
use crate::message::{BidRequest, OrchestratorCommand, PageCommand, Response};

/// One-shot reply channel for a single request.
///
/// Consuming `respond` makes more than one emission per request impossible.
#[derive(Debug)]
pub struct Responder<T> {
    tx: oneshot::Sender<T>,
}

impl<T> Responder<T> {
    /// Create a responder together with the receiving half the caller
    /// awaits on.
    pub fn new() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Emit the response. If the caller has already gone away the value is
    /// dropped; that is the caller's loss, not an error in the handler.
    pub fn respond(self, value: T) {
        if self.tx.send(value).is_err() {
            warn!("response dropped: requester went away before the answer arrived");
        }
    }
}

/// What a handler reported about a request at dispatch time.
///
/// `Deferred` is the explicit "I will respond asynchronously" signal; a
/// handler that spawns work without moving the responder out of the
/// envelope would close the channel and fail the caller immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The response was emitted before dispatch returned.
    Completed,
    /// The responder was moved into a task that will answer later.
    Deferred,
}

/// A request paired with its reply channel.
#[derive(Debug)]
pub struct Envelope<Req, Resp> {
    pub request: Req,
    pub responder: Responder<Resp>,
}

/// Send a request into a mailbox and await the single response.
pub async fn request<Req, Resp>(
    tx: &mpsc::Sender<Envelope<Req, Resp>>,
    request: Req,
) -> Result<Resp, ChannelError> {
    let (responder, rx) = Responder::new();
    tx.send(Envelope { request, responder })
        .await
        .map_err(|_| ChannelError::Disconnected)?;
    rx.await.map_err(|_| ChannelError::NoResponse)
}

/// Caller-side handle to the page agent's mailbox.
#[derive(Debug, Clone)]
pub struct PageAgentHandle {
    tx: mpsc::Sender<Envelope<PageCommand, Response>>,
}

impl PageAgentHandle {
    pub fn new(tx: mpsc::Sender<Envelope<PageCommand, Response>>) -> Self {
        Self { tx }
    }

    /// Issue a command and await its response.
    pub async fn send(&self, command: PageCommand) -> Result<Response, ChannelError> {
        request(&self.tx, command).await
    }
}

/// Caller-side handle to the orchestrator's mailbox.
#[derive(Debug, Clone)]
pub struct OrchestratorHandle {
    tx: mpsc::Sender<Envelope<OrchestratorCommand, Response>>,
}

impl OrchestratorHandle {
    pub fn new(tx: mpsc::Sender<Envelope<OrchestratorCommand, Response>>) -> Self {
        Self { tx }
    }

    /// Relay a generation request and await the bid response.
    pub async fn call_gemini(&self, req: BidRequest) -> Result<Response, ChannelError> {
        request(&self.tx, OrchestratorCommand::CallGemini(req)).await
    }
}

#[cfg(test)]
#[path = "routing_tests.rs"]
mod tests;
