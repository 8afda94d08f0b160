//! Submission trigger.
//!
//! The host page attaches its click handling to different DOM layers
//! depending on rendering state, so activation walks an ordered chain of
//! interaction techniques and stops at the first one the page accepts.

use bidhands_protocols::error::{ActivateError, PageError};
use tracing::{debug, warn};

use crate::page::{Key, NodeHandle, Page, SyntheticEvent};
use crate::selectors::{SelectorConfig, Timing};

/// Find the submit control.
///
/// Phase 1 tries the structurally scoped candidates and keeps the first
/// whose visible label matches exactly (trimmed, case-insensitive). Phase 2
/// falls back to scanning every button on the page for the same label.
pub fn locate_bid_button(page: &dyn Page, selectors: &SelectorConfig) -> Option<NodeHandle> {
    let label = selectors.place_button_label.trim();

    for selector in &selectors.place_button {
        for node in page.find_all(selector) {
            if label_matches(page, node, label) {
                debug!(selector = selector.as_str(), "located bid button via scoped selector");
                return Some(node);
            }
        }
    }

    for node in page.find_all("button") {
        if label_matches(page, node, label) {
            debug!("located bid button via full button scan");
            return Some(node);
        }
    }
    None
}

fn label_matches(page: &dyn Page, node: NodeHandle, label: &str) -> bool {
    page.text(node).trim().eq_ignore_ascii_case(label)
}

/// Locate the submit control and trigger it.
///
/// A disabled button is terminal; nothing is retried. Otherwise, after the
/// settle delay, techniques run in order until one succeeds.
pub async fn activate_bid_button(
    page: &dyn Page,
    selectors: &SelectorConfig,
    timing: &Timing,
) -> Result<(), ActivateError> {
    let button = locate_bid_button(page, selectors).ok_or(ActivateError::ButtonNotFound)?;

    if page.is_disabled(button) {
        return Err(ActivateError::ButtonDisabled);
    }

    tokio::time::sleep(timing.click_settle()).await;

    let techniques: [(&str, &dyn Fn() -> Result<(), PageError>); 5] = [
        ("programmatic activation", &|| page.activate(button)),
        ("mouse sequence", &|| {
            dispatch_all(
                page,
                button,
                &[
                    SyntheticEvent::MouseDown,
                    SyntheticEvent::MouseUp,
                    SyntheticEvent::Click,
                ],
            )
        }),
        ("wrapper activation", &|| {
            let wrapper = page
                .closest(button, &selectors.place_button_wrapper)
                .ok_or_else(|| PageError::InteractionRejected("no wrapper".to_string()))?;
            page.activate(wrapper)
        }),
        ("touch sequence", &|| {
            dispatch_all(
                page,
                button,
                &[SyntheticEvent::TouchStart, SyntheticEvent::TouchEnd],
            )
        }),
        ("focus and enter", &|| {
            page.focus(button)?;
            dispatch_all(
                page,
                button,
                &[
                    SyntheticEvent::KeyDown(Key::Enter),
                    SyntheticEvent::KeyUp(Key::Enter),
                ],
            )
        }),
    ];

    for (name, technique) in techniques {
        match technique() {
            Ok(()) => {
                debug!(technique = name, "bid button activated");
                return Ok(());
            }
            Err(err) => warn!(technique = name, %err, "activation technique failed"),
        }
    }
    Err(ActivateError::AllTechniquesFailed)
}

fn dispatch_all(
    page: &dyn Page,
    node: NodeHandle,
    events: &[SyntheticEvent],
) -> Result<(), PageError> {
    for event in events {
        page.dispatch(node, *event)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
