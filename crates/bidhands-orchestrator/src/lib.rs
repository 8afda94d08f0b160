//! # bidhands Orchestrator
//!
//! The component that owns network egress and credential access. It accepts
//! `callGemini` requests, reads the API key from the credential store,
//! builds the fixed bid prompt and relays the generated draft back to the
//! requester, echoing the extracted bid amount and delivery time on both
//! the success and the error arm.

pub mod actor;
pub mod credentials;
pub mod generate;
pub mod prompt;

pub use actor::Orchestrator;
pub use credentials::{CredentialStore, FileCredentialStore, StaticCredentialStore, GEMINI_API_KEY};
pub use generate::{generate_bid, GenerationSettings};
pub use prompt::build_prompt;
