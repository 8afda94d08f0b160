//! Selector and timing configuration.
//!
//! The defaults target the Freelancer project page layout. They are data,
//! not code: a layout change on the site is an edit to the config file, and
//! every lookup that can move between renders carries an ordered fallback
//! chain tried first-match-wins.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// All selectors the page agent uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Primary (mobile) project title.
    pub title: String,
    /// Desktop title, tried when the primary misses.
    pub title_fallback: String,
    /// Generic heading text that must be discarded when the desktop title
    /// matches it (compared case-insensitively).
    pub title_placeholder: String,
    pub body: String,
    pub skills_container: String,
    /// Individual skill tags, resolved within the container.
    pub skill_tag: String,
    /// Label prefixed to the joined skills line.
    pub skills_label: String,
    pub bid_text_area: String,
    /// Bid amount input fallback chain.
    pub bid_amount: Vec<String>,
    /// Delivery time input fallback chain.
    pub delivery_time: Vec<String>,
    pub upgrade_sponsored: String,
    pub upgrade_sealed: String,
    pub upgrade_highlight: String,
    /// Structurally scoped submit button candidates (phase 1); phase 2
    /// scans every button on the page.
    pub place_button: Vec<String>,
    /// Exact visible label of the submit control (case-insensitive,
    /// trimmed).
    pub place_button_label: String,
    /// Structural wrapper whose activation is tried when clicking the
    /// button itself does nothing.
    pub place_button_wrapper: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: r#"div.ProjectViewDetails-title[data-show-mobile="true"]"#.to_string(),
            title_fallback: "h2.ng-star-inserted div.ProjectViewDetails-title".to_string(),
            title_placeholder: "project details".to_string(),
            body: "div.ProjectDescription span.NativeElement".to_string(),
            skills_container: "div.ProjectViewDetailsSkills".to_string(),
            skill_tag: "fl-tag div.Content".to_string(),
            skills_label: "Skills: ".to_string(),
            bid_text_area: "textarea#descriptionTextArea".to_string(),
            bid_amount: vec![
                "input#bidAmountInput".to_string(),
                r#"input[name="bidAmount"]"#.to_string(),
                r#"input[placeholder*="bid" i]"#.to_string(),
                r#"input[placeholder*="amount" i]"#.to_string(),
                r#"input[type="number"]"#.to_string(),
            ],
            delivery_time: vec![
                "input#periodInput".to_string(),
                r#"input[name="deliveryTime"]"#.to_string(),
                r#"input[name="period"]"#.to_string(),
                r#"input[placeholder*="day" i]"#.to_string(),
                r#"input[placeholder*="time" i]"#.to_string(),
            ],
            upgrade_sponsored:
                r#"fl-list-item[fltrackinglabel="BidFormUpgrades.Sponsored"] input[type="checkbox"]"#
                    .to_string(),
            upgrade_sealed:
                r#"fl-list-item[fltrackinglabel="BidFormUpgrades.Sealed"] input[type="checkbox"]"#
                    .to_string(),
            upgrade_highlight:
                r#"fl-list-item[fltrackinglabel="BidFormUpgrades.Highlight"] input[type="checkbox"]"#
                    .to_string(),
            place_button: vec![
                r#"fl-button[fltrackinglabel="PlaceBidButton"] button"#.to_string(),
                "fl-button.BidFormBtn button".to_string(),
                "div.BidFormBtn button".to_string(),
                "button.ButtonElement".to_string(),
            ],
            place_button_label: "place bid".to_string(),
            place_button_wrapper: "fl-button".to_string(),
        }
    }
}

/// Fixed settle delays, in milliseconds.
///
/// These waits let the host page's own scripts finish populating defaults
/// before we read or write; they always run to completion and are not
/// cancellable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Before reading numeric input defaults during extraction.
    pub input_read_ms: u64,
    /// Before the bid amount write during a form fill.
    pub amount_write_ms: u64,
    /// Before the delivery time write during a form fill (staggered after
    /// the amount write).
    pub delivery_write_ms: u64,
    /// Before attempting to activate the submit control.
    pub click_settle_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            input_read_ms: 200,
            amount_write_ms: 100,
            delivery_write_ms: 150,
            click_settle_ms: 500,
        }
    }
}

impl Timing {
    pub fn input_read(&self) -> Duration {
        Duration::from_millis(self.input_read_ms)
    }

    pub fn amount_write(&self) -> Duration {
        Duration::from_millis(self.amount_write_ms)
    }

    pub fn delivery_write(&self) -> Duration {
        Duration::from_millis(self.delivery_write_ms)
    }

    pub fn click_settle(&self) -> Duration {
        Duration::from_millis(self.click_settle_ms)
    }

    /// Zero delays, for tests that do not exercise timing.
    pub fn immediate() -> Self {
        Self {
            input_read_ms: 0,
            amount_write_ms: 0,
            delivery_write_ms: 0,
            click_settle_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback_chains_are_ordered() {
        let cfg = SelectorConfig::default();
        assert_eq!(cfg.bid_amount.len(), 5);
        assert_eq!(cfg.bid_amount[0], "input#bidAmountInput");
        assert_eq!(cfg.delivery_time.len(), 5);
        assert_eq!(cfg.delivery_time[0], "input#periodInput");
        assert_eq!(cfg.place_button.len(), 4);
    }

    #[test]
    fn test_default_timing() {
        let t = Timing::default();
        assert_eq!(t.input_read(), Duration::from_millis(200));
        assert_eq!(t.click_settle(), Duration::from_millis(500));
        assert!(t.amount_write() < t.delivery_write());
    }

    #[test]
    fn test_selector_config_deserializes_partial_override() {
        let cfg: SelectorConfig =
            serde_json::from_str(r#"{"bid_text_area": "textarea#proposal"}"#).unwrap();
        assert_eq!(cfg.bid_text_area, "textarea#proposal");
        // Everything else keeps its default.
        assert_eq!(cfg.place_button_label, "place bid");
    }
}
