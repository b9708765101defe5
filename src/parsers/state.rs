use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize_key;
use crate::models::Availability;

static DISCOUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*%")
        .expect("Invalid discount regex")
});

const NEGATIVE_MARKERS: &[&str] = &["no", "нет", "ожидается"];
const POSITIVE_MARKERS: &[&str] = &["yes", "да", "есть"];
const SALE_MARKERS: &[&str] = &["sale", "скидка", "акция"];

/// Extract the first `<digits>%` from text, clamped to 0..=100. No match yields 0.
pub fn extract_discount_percent(text: &str) -> u8 {
    let Some(captures) = DISCOUNT_REGEX.captures(text) else {
        return 0;
    };

    // Digits only, so a parse failure means the number overflowed
    match captures[1].parse::<u64>() {
        Ok(value) => value.min(100) as u8,
        Err(_) => 100,
    }
}

fn has_marker(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

/// Classify the availability column.
///
/// Priority: a positive percentage means on sale, then a sale word without
/// any percentage, then an explicit "no", then an explicit "yes". Markers
/// match anywhere in the text, so "none" and "not available" read as "no".
/// Anything else counts as in stock so that a row with odd text still shows
/// up on the board.
pub fn classify_availability(text: &str) -> Availability {
    let normalized = normalize_key(text);

    let discount = extract_discount_percent(&normalized);
    if discount > 0 {
        return Availability::on_sale(discount);
    }

    if has_marker(&normalized, SALE_MARKERS) && !DISCOUNT_REGEX.is_match(&normalized) {
        Availability::on_sale(0)
    } else if has_marker(&normalized, NEGATIVE_MARKERS) {
        Availability::PENDING
    } else if has_marker(&normalized, POSITIVE_MARKERS) {
        Availability::IN_STOCK
    } else {
        Availability::IN_STOCK
    }
}
