//! # bidhands Protocols
//!
//! Shared message types and the request/response contract for the three
//! bidhands components (page agent, orchestrator, control surface).
//!
//! The components run as memory-isolated actors and communicate only by
//! message passing. Every request travels in an [`Envelope`] carrying a
//! one-shot [`Responder`]; a handler either answers before returning
//! ([`Disposition::Completed`]) or moves the responder into a spawned task
//! and signals [`Disposition::Deferred`] at dispatch time.

pub mod error;
pub mod message;
pub mod routing;

pub use error::{ActivateError, ChannelError, FillError, GenerateError, PageError};
pub use message::{BidData, BidRequest, OrchestratorCommand, PageCommand, Response, Upgrades};
pub use routing::{Disposition, Envelope, OrchestratorHandle, PageAgentHandle, Responder};
