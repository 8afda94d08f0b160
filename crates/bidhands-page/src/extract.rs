//! Job detail extraction.
//!
//! Pulls the title, description body and skill list out of the project page
//! and pre-reads any bid amount / delivery time defaults the page has
//! already populated. Extraction never fails: each section is optional,
//! and the numeric defaults are read even when no description was found.

use serde::Serialize;
use tracing::debug;

use crate::page::Page;
use crate::selectors::{SelectorConfig, Timing};

/// What the page agent scraped off the project page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    /// Title, body and skills joined with blank lines. `None` when neither
    /// a title nor a body was found, or everything found was empty.
    pub description: Option<String>,
    pub extracted_bid_amount: Option<f64>,
    pub extracted_delivery_time: Option<u32>,
}

/// Scrape job details from the page.
///
/// Waits out the input-settle delay before reading the numeric defaults,
/// since the host page populates those asynchronously after render.
pub async fn extract_job_details(
    page: &dyn Page,
    selectors: &SelectorConfig,
    timing: &Timing,
) -> JobDetails {
    let mut found_any = false;
    let mut parts: Vec<String> = Vec::new();

    // Title: mobile render first, then the desktop heading. The desktop
    // heading sometimes holds a generic placeholder instead of the real
    // title; that match is discarded entirely.
    if let Some(node) = page.find(&selectors.title) {
        found_any = true;
        push_nonempty(&mut parts, page.text(node).trim());
    } else if let Some(node) = page.find(&selectors.title_fallback) {
        let text = page.text(node);
        let text = text.trim();
        if !text.eq_ignore_ascii_case(&selectors.title_placeholder) {
            found_any = true;
            push_nonempty(&mut parts, text);
        } else {
            debug!("fallback title matched the placeholder heading, discarding");
        }
    }

    if let Some(node) = page.find(&selectors.body) {
        found_any = true;
        push_nonempty(&mut parts, page.text(node).trim());
    }

    // Skills alone do not make an extraction; only title or body count
    // toward the found gate.
    if let Some(container) = page.find(&selectors.skills_container) {
        let skills: Vec<String> = page
            .find_all_within(container, &selectors.skill_tag)
            .into_iter()
            .map(|tag| page.text(tag).trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !skills.is_empty() {
            parts.push(format!("{}{}", selectors.skills_label, skills.join(", ")));
        }
    }

    let description = if found_any {
        let joined = parts.join("\n\n");
        if joined.is_empty() { None } else { Some(joined) }
    } else {
        None
    };

    // Let the page's own scripts finish seeding the numeric inputs.
    tokio::time::sleep(timing.input_read()).await;

    let extracted_bid_amount = find_first(page, &selectors.bid_amount)
        .and_then(|node| leading_float(&page.value(node)));
    let extracted_delivery_time = find_first(page, &selectors.delivery_time)
        .and_then(|node| leading_int(&page.value(node)))
        .and_then(|n| u32::try_from(n).ok());

    debug!(
        found = description.is_some(),
        amount = ?extracted_bid_amount,
        delivery = ?extracted_delivery_time,
        "extraction finished"
    );

    JobDetails {
        description,
        extracted_bid_amount,
        extracted_delivery_time,
    }
}

fn push_nonempty(parts: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        parts.push(text.to_string());
    }
}

/// First element matched by an ordered selector chain.
pub(crate) fn find_first(page: &dyn Page, chain: &[String]) -> Option<crate::page::NodeHandle> {
    chain.iter().find_map(|selector| page.find(selector))
}

/// Longest leading numeric prefix, read as a float. `"250 USD"` is 250.0,
/// `"USD 250"` is nothing.
pub(crate) fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = s
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    while end > 0 {
        if let Ok(v) = s[..end].parse::<f64>() {
            if v.is_finite() {
                return Some(v);
            }
        }
        end -= 1;
    }
    None
}

/// Longest leading integer prefix, base 10.
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i + 1)?;
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
