//! Bid form mutation.
//!
//! Writing the bid text is the one mandatory step; amount, delivery time
//! and upgrade toggles are best-effort extras whose outcome never changes
//! the overall result. The numeric writes are staggered on independent
//! delays so they do not race the host page's own field initialization.

use std::sync::Arc;

use bidhands_protocols::error::FillError;
use bidhands_protocols::message::BidData;
use tracing::{debug, warn};

use crate::extract::find_first;
use crate::page::{Page, SyntheticEvent};
use crate::selectors::{SelectorConfig, Timing};

/// Write a value into the first element a selector chain resolves, then
/// notify the page's observers. `None` and blank values coerce to the
/// empty string. Returns false when no selector matches.
pub fn set_field(page: &dyn Page, chain: &[String], value: Option<&str>) -> bool {
    let Some(node) = find_first(page, chain) else {
        return false;
    };
    let coerced = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "",
    };
    if let Err(err) = page.set_value(node, coerced) {
        warn!(%err, "field write rejected");
        return false;
    }
    notify_field_changed(page, node);
    true
}

/// Flip a checkbox-like element to the desired state. Already-desired state
/// is left untouched with no events. Returns false when the element is
/// absent.
pub fn set_toggle(page: &dyn Page, selector: &str, desired: bool) -> bool {
    let Some(node) = page.find(selector) else {
        return false;
    };
    if page.is_checked(node) == desired {
        return true;
    }
    if let Err(err) = page.set_checked(node, desired) {
        warn!(%err, selector, "toggle write rejected");
        return false;
    }
    for event in [SyntheticEvent::Click, SyntheticEvent::Change] {
        if let Err(err) = page.dispatch(node, event) {
            warn!(%err, event = event.name(), "toggle notification rejected");
        }
    }
    true
}

/// Fill the bid form.
///
/// Fails before touching the page when the bid text is empty. The text
/// area write decides the result; the amount and delivery writes are
/// dispatched as delayed background tasks whose failures are only logged,
/// and upgrade toggles apply immediately for the keys present.
pub async fn fill_form(
    page: &Arc<dyn Page>,
    selectors: &SelectorConfig,
    timing: &Timing,
    data: &BidData,
) -> Result<(), FillError> {
    if data.bid_text.trim().is_empty() {
        return Err(FillError::MissingBidText);
    }

    let outcome = match page.find(&selectors.bid_text_area) {
        Some(area) => match page.set_value(area, &data.bid_text) {
            Ok(()) => {
                notify_field_changed(page.as_ref(), area);
                Ok(())
            }
            Err(err) => Err(FillError::WriteRejected(err.to_string())),
        },
        None => Err(FillError::TextAreaNotFound),
    };

    if let Some(amount) = data.bid_amount {
        spawn_delayed_write(
            page,
            selectors.bid_amount.clone(),
            timing.amount_write(),
            format_amount(amount),
            "bid amount",
        );
    }
    if let Some(days) = data.delivery_time {
        spawn_delayed_write(
            page,
            selectors.delivery_time.clone(),
            timing.delivery_write(),
            days.to_string(),
            "delivery time",
        );
    }

    if let Some(upgrades) = &data.upgrades {
        for (selector, desired) in [
            (&selectors.upgrade_sponsored, upgrades.sponsored),
            (&selectors.upgrade_sealed, upgrades.sealed),
            (&selectors.upgrade_highlight, upgrades.highlight),
        ] {
            if let Some(desired) = desired {
                if !set_toggle(page.as_ref(), selector, desired) {
                    warn!(selector = selector.as_str(), "upgrade toggle not found");
                }
            }
        }
    }

    outcome
}

fn spawn_delayed_write(
    page: &Arc<dyn Page>,
    chain: Vec<String>,
    delay: std::time::Duration,
    value: String,
    what: &'static str,
) {
    let page = Arc::clone(page);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if set_field(page.as_ref(), &chain, Some(&value)) {
            debug!(what, value = value.as_str(), "wrote field");
        } else {
            warn!(what, "no input found for field");
        }
    });
}

fn notify_field_changed(page: &dyn Page, node: crate::page::NodeHandle) {
    for event in [
        SyntheticEvent::Input,
        SyntheticEvent::Change,
        SyntheticEvent::Blur,
    ] {
        if let Err(err) = page.dispatch(node, event) {
            warn!(%err, event = event.name(), "change notification rejected");
        }
    }
}

/// Render a numeric amount the way a user would type it: integral values
/// without a decimal point.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
#[path = "fill_tests.rs"]
mod tests;
