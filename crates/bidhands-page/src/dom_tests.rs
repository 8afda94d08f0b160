use bidhands_protocols::error::PageError;

use super::*;
use crate::page::{Key, NodeHandle, Page, SyntheticEvent};

const SNIPPET: &str = r#"
<html><body>
  <div class="ProjectDescription"><span class="NativeElement">Build a parser.</span></div>
  <form>
    <textarea id="descriptionTextArea">seeded</textarea>
    <input id="bidAmountInput" type="number" value="250">
    <input id="periodInput" value="7">
    <fl-button fltrackinglabel="PlaceBidButton"><button class="ButtonElement">Place Bid</button></fl-button>
    <fl-list-item fltrackinglabel="BidFormUpgrades.Sealed"><input type="checkbox" checked></fl-list-item>
  </form>
</body></html>
"#;

fn page() -> DomPage {
    DomPage::from_html(SNIPPET, "https://www.freelancer.com/projects/rust/parser")
}

#[test]
fn test_find_and_text() {
    let page = page();
    let body = page.find("div.ProjectDescription span.NativeElement").unwrap();
    assert_eq!(page.text(body), "Build a parser.");
    assert!(page.find("div.DoesNotExist").is_none());
}

#[test]
fn test_invalid_selector_is_a_miss_not_a_panic() {
    let page = page();
    assert!(page.find("div[[[").is_none());
    assert!(page.find_all("div[[[").is_empty());
}

#[test]
fn test_value_reads_markup_until_overwritten() {
    let page = page();
    let amount = page.find("input#bidAmountInput").unwrap();
    assert_eq!(page.value(amount), "250");
    page.set_value(amount, "300").unwrap();
    assert_eq!(page.value(amount), "300");
}

#[test]
fn test_textarea_value_is_its_text() {
    let page = page();
    let area = page.find("textarea#descriptionTextArea").unwrap();
    assert_eq!(page.value(area), "seeded");
}

#[test]
fn test_checked_overlay() {
    let page = page();
    let sealed = page
        .find(r#"fl-list-item[fltrackinglabel="BidFormUpgrades.Sealed"] input[type="checkbox"]"#)
        .unwrap();
    assert!(page.is_checked(sealed));
    page.set_checked(sealed, false).unwrap();
    assert!(!page.is_checked(sealed));
}

#[test]
fn test_closest_finds_wrapper_not_self() {
    let page = page();
    let button = page.find(r#"fl-button[fltrackinglabel="PlaceBidButton"] button"#).unwrap();
    let wrapper = page.closest(button, "fl-button").unwrap();
    assert_ne!(wrapper, button);
    assert_eq!(page.find("fl-button"), Some(wrapper));
    assert!(page.closest(button, "article").is_none());
}

#[test]
fn test_dispatch_journals_in_order() {
    let page = page();
    let area = page.find("textarea#descriptionTextArea").unwrap();
    page.dispatch(area, SyntheticEvent::Input).unwrap();
    page.dispatch(area, SyntheticEvent::Change).unwrap();
    page.dispatch(area, SyntheticEvent::KeyDown(Key::Enter)).unwrap();
    assert_eq!(
        page.events_for(area),
        vec![
            SyntheticEvent::Input,
            SyntheticEvent::Change,
            SyntheticEvent::KeyDown(Key::Enter)
        ]
    );
}

#[test]
fn test_rejected_interactions_fail_until_allowed() {
    let page = page();
    let button = page.find("button.ButtonElement").unwrap();
    page.reject(Interaction::Activate);
    assert!(page.activate(button).is_err());
    assert!(page.activations().is_empty());
    page.allow(Interaction::Activate);
    page.activate(button).unwrap();
    assert_eq!(page.activations(), vec![button]);
}

#[test]
fn test_rejection_classes_are_independent() {
    let page = page();
    let button = page.find("button.ButtonElement").unwrap();
    page.reject(Interaction::Mouse);
    assert!(page.dispatch(button, SyntheticEvent::MouseDown).is_err());
    // Touch and keyboard still go through.
    page.dispatch(button, SyntheticEvent::TouchStart).unwrap();
    page.dispatch(button, SyntheticEvent::KeyDown(Key::Enter)).unwrap();
}

#[test]
fn test_stale_handle_is_detached() {
    let page = page();
    let bogus = NodeHandle(usize::MAX);
    assert_eq!(page.value(bogus), "");
    assert!(matches!(page.set_value(bogus, "x"), Err(PageError::Detached)));
}
