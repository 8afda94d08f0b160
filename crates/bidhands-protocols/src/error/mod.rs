//! Error types for the bidhands protocol layer.
//!
//! Failures never cross a context boundary as panics; they are converted to
//! typed response messages at their origin. These enums are the taxonomy
//! behind those messages.

mod channel;
mod page;
mod provider;

pub use channel::*;
pub use page::*;
pub use provider::*;
