use bidhands_protocols::error::ActivateError;

use super::*;
use crate::dom::{DomPage, Interaction};
use crate::page::{Key, Page, SyntheticEvent};
use crate::selectors::{SelectorConfig, Timing};

const URL: &str = "https://www.freelancer.com/projects/rust/parser";

fn page_with_button() -> DomPage {
    DomPage::from_html(
        r#"
        <form>
          <fl-button fltrackinglabel="PlaceBidButton" class="BidFormBtn">
            <button class="ButtonElement"> Place Bid </button>
          </fl-button>
        </form>
        "#,
        URL,
    )
}

fn cfg() -> SelectorConfig {
    SelectorConfig::default()
}

#[test]
fn test_locate_scoped_selector_with_label_match() {
    let page = page_with_button();
    let button = locate_bid_button(&page, &cfg()).unwrap();
    assert_eq!(page.text(button).trim(), "Place Bid");
}

#[test]
fn test_locate_skips_wrong_label_in_scoped_matches() {
    let page = DomPage::from_html(
        r#"
        <fl-button fltrackinglabel="PlaceBidButton"><button>Save Draft</button></fl-button>
        <fl-button class="BidFormBtn"><button>place bid</button></fl-button>
        "#,
        URL,
    );
    let button = locate_bid_button(&page, &cfg()).unwrap();
    assert_eq!(page.text(button), "place bid");
}

#[test]
fn test_locate_full_scan_fallback() {
    let page = DomPage::from_html(
        r#"<div class="SomethingElse"><button>PLACE BID</button></div>"#,
        URL,
    );
    assert!(locate_bid_button(&page, &cfg()).is_some());
}

#[test]
fn test_locate_none_without_label_match() {
    let page = DomPage::from_html(r#"<button>Submit</button>"#, URL);
    assert!(locate_bid_button(&page, &cfg()).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_activation_prefers_programmatic_click() {
    let page = page_with_button();
    activate_bid_button(&page, &cfg(), &Timing::default())
        .await
        .unwrap();
    assert_eq!(page.activations().len(), 1);
    assert!(page.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_missing_button_is_not_found() {
    let page = DomPage::from_html("<form></form>", URL);
    let err = activate_bid_button(&page, &cfg(), &Timing::default())
        .await
        .unwrap_err();
    assert_eq!(err, ActivateError::ButtonNotFound);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_button_short_circuits() {
    let page = DomPage::from_html(
        r#"<fl-button fltrackinglabel="PlaceBidButton"><button disabled>Place Bid</button></fl-button>"#,
        URL,
    );
    // Rejecting everything proves no activation was even attempted.
    page.reject(Interaction::Activate);
    let err = activate_bid_button(&page, &cfg(), &Timing::default())
        .await
        .unwrap_err();
    assert_eq!(err, ActivateError::ButtonDisabled);
    assert!(page.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_fallback_to_mouse_sequence() {
    let page = page_with_button();
    page.reject(Interaction::Activate);
    activate_bid_button(&page, &cfg(), &Timing::default())
        .await
        .unwrap();
    let button = locate_bid_button(&page, &cfg()).unwrap();
    assert_eq!(
        page.events_for(button),
        vec![
            SyntheticEvent::MouseDown,
            SyntheticEvent::MouseUp,
            SyntheticEvent::Click
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_fallback_to_touch_then_keyboard() {
    let page = page_with_button();
    page.reject(Interaction::Activate); // also blocks the wrapper technique
    page.reject(Interaction::Mouse);
    page.reject(Interaction::Touch);
    activate_bid_button(&page, &cfg(), &Timing::default())
        .await
        .unwrap();
    let button = locate_bid_button(&page, &cfg()).unwrap();
    assert_eq!(page.focused(), vec![button]);
    assert_eq!(
        page.events_for(button),
        vec![
            SyntheticEvent::KeyDown(Key::Enter),
            SyntheticEvent::KeyUp(Key::Enter)
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_every_technique_rejected() {
    let page = page_with_button();
    for interaction in [
        Interaction::Activate,
        Interaction::Mouse,
        Interaction::Touch,
        Interaction::Keyboard,
        Interaction::Focus,
    ] {
        page.reject(interaction);
    }
    let err = activate_bid_button(&page, &cfg(), &Timing::default())
        .await
        .unwrap_err();
    assert_eq!(err, ActivateError::AllTechniquesFailed);
}
