//! # bidhands Page Agent
//!
//! The component with direct access to the job page. It extracts structured
//! job details from the DOM, writes bid form fields with synthetic change
//! notifications, and locates and activates the submit control, all behind
//! one inbound message handler.
//!
//! DOM access goes through the [`Page`] trait; [`DomPage`] implements it
//! over a parsed HTML snapshot with a mutable form-state overlay. All
//! selectors live in [`SelectorConfig`] as data, so site-layout changes are
//! configuration edits, not code edits.

pub mod agent;
pub mod dom;
pub mod extract;
pub mod fill;
pub mod page;
pub mod selectors;
pub mod submit;

pub use agent::PageAgent;
pub use dom::{DomPage, Interaction};
pub use extract::{extract_job_details, JobDetails};
pub use fill::{fill_form, set_field, set_toggle};
pub use page::{Key, NodeHandle, Page, SyntheticEvent};
pub use selectors::{SelectorConfig, Timing};
pub use submit::{activate_bid_button, locate_bid_button};
