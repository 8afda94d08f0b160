use std::sync::Arc;
use std::time::Duration;

use bidhands_protocols::error::FillError;
use bidhands_protocols::message::{BidData, Upgrades};

use super::*;
use crate::dom::{DomPage, Interaction};
use crate::page::{Page, SyntheticEvent};
use crate::selectors::{SelectorConfig, Timing};

const URL: &str = "https://www.freelancer.com/projects/rust/parser";

const FORM: &str = r#"
<form>
  <textarea id="descriptionTextArea"></textarea>
  <input id="bidAmountInput" type="number">
  <input id="periodInput">
  <fl-list-item fltrackinglabel="BidFormUpgrades.Sponsored"><input type="checkbox"></fl-list-item>
  <fl-list-item fltrackinglabel="BidFormUpgrades.Sealed"><input type="checkbox" checked></fl-list-item>
  <fl-list-item fltrackinglabel="BidFormUpgrades.Highlight"><input type="checkbox"></fl-list-item>
</form>
"#;

fn form_page() -> Arc<DomPage> {
    Arc::new(DomPage::from_html(FORM, URL))
}

fn as_page(page: &Arc<DomPage>) -> Arc<dyn Page> {
    Arc::clone(page) as Arc<dyn Page>
}

async fn settle() {
    // Paused-clock tests: jump past every staggered write delay.
    tokio::time::sleep(Duration::from_millis(1_000)).await;
}

#[tokio::test(start_paused = true)]
async fn test_fill_writes_text_and_notifies() {
    let dom = form_page();
    let page = as_page(&dom);
    fill_form(
        &page,
        &SelectorConfig::default(),
        &Timing::default(),
        &BidData::text_only("I can build this."),
    )
    .await
    .unwrap();

    assert_eq!(
        dom.value_of("textarea#descriptionTextArea").as_deref(),
        Some("I can build this.")
    );
    let area = dom.find("textarea#descriptionTextArea").unwrap();
    assert_eq!(
        dom.events_for(area),
        vec![
            SyntheticEvent::Input,
            SyntheticEvent::Change,
            SyntheticEvent::Blur
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_empty_text_fails_before_any_write() {
    let dom = form_page();
    let page = as_page(&dom);
    let data = BidData {
        bid_text: "   ".to_string(),
        bid_amount: Some(500.0),
        delivery_time: None,
        upgrades: None,
    };
    let err = fill_form(&page, &SelectorConfig::default(), &Timing::default(), &data)
        .await
        .unwrap_err();
    assert_eq!(err, FillError::MissingBidText);

    settle().await;
    // The amount write was skipped, not just delayed.
    assert_eq!(dom.value_of("input#bidAmountInput").as_deref(), Some(""));
    assert!(dom.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_missing_text_area_fails_but_extras_still_run() {
    let dom = Arc::new(DomPage::from_html(
        r#"<form><input id="bidAmountInput" type="number"></form>"#,
        URL,
    ));
    let page = as_page(&dom);
    let data = BidData {
        bid_text: "text".to_string(),
        bid_amount: Some(250.0),
        delivery_time: None,
        upgrades: None,
    };
    let err = fill_form(&page, &SelectorConfig::default(), &Timing::default(), &data)
        .await
        .unwrap_err();
    assert_eq!(err, FillError::TextAreaNotFound);

    settle().await;
    assert_eq!(dom.value_of("input#bidAmountInput").as_deref(), Some("250"));
}

#[tokio::test(start_paused = true)]
async fn test_staggered_writes_land_in_delay_order() {
    let dom = form_page();
    let page = as_page(&dom);
    let data = BidData {
        bid_text: "text".to_string(),
        bid_amount: Some(199.5),
        delivery_time: Some(14),
        upgrades: None,
    };
    fill_form(&page, &SelectorConfig::default(), &Timing::default(), &data)
        .await
        .unwrap();

    // Neither numeric write has happened yet when fill_form returns.
    assert_eq!(dom.value_of("input#bidAmountInput").as_deref(), Some(""));

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(dom.value_of("input#bidAmountInput").as_deref(), Some("199.5"));
    assert_eq!(dom.value_of("input#periodInput").as_deref(), Some(""));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(dom.value_of("input#periodInput").as_deref(), Some("14"));
}

#[tokio::test(start_paused = true)]
async fn test_upgrades_apply_only_present_keys() {
    let dom = form_page();
    let page = as_page(&dom);
    let data = BidData {
        bid_text: "text".to_string(),
        bid_amount: None,
        delivery_time: None,
        upgrades: Some(Upgrades {
            sponsored: Some(true),
            sealed: None,
            highlight: None,
        }),
    };
    fill_form(&page, &SelectorConfig::default(), &Timing::default(), &data)
        .await
        .unwrap();

    let cfg = SelectorConfig::default();
    let sponsored = dom.find(&cfg.upgrade_sponsored).unwrap();
    let sealed = dom.find(&cfg.upgrade_sealed).unwrap();
    assert!(dom.is_checked(sponsored));
    // Absent key: the pre-checked sealed upgrade is left alone.
    assert!(dom.is_checked(sealed));
    assert!(dom.events_for(sealed).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_rejected_text_write_reports_rejection() {
    let dom = form_page();
    dom.reject(Interaction::FieldWrite);
    let page = as_page(&dom);
    let err = fill_form(
        &page,
        &SelectorConfig::default(),
        &Timing::default(),
        &BidData::text_only("text"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, FillError::WriteRejected(_)));
}

#[test]
fn test_set_toggle_is_idempotent() {
    let dom = DomPage::from_html(FORM, URL);
    let cfg = SelectorConfig::default();
    assert!(set_toggle(&dom, &cfg.upgrade_sealed, true));
    let sealed = dom.find(&cfg.upgrade_sealed).unwrap();
    assert!(dom.events_for(sealed).is_empty());

    assert!(set_toggle(&dom, &cfg.upgrade_sealed, false));
    assert_eq!(
        dom.events_for(sealed),
        vec![SyntheticEvent::Click, SyntheticEvent::Change]
    );
}

#[test]
fn test_set_field_coerces_blank_to_empty() {
    let dom = DomPage::from_html(FORM, URL);
    let chain = vec!["input#bidAmountInput".to_string()];
    assert!(set_field(&dom, &chain, Some("  ")));
    assert_eq!(dom.value_of("input#bidAmountInput").as_deref(), Some(""));
    assert!(set_field(&dom, &chain, None));
    assert!(!set_field(&dom, &["input#missing".to_string()], Some("5")));
}

#[test]
fn test_format_amount_drops_trailing_zero_fraction() {
    assert_eq!(format_amount(250.0), "250");
    assert_eq!(format_amount(199.5), "199.5");
}
