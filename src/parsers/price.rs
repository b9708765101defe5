use crate::models::{Availability, LifecycleState};

/// Parse a loosely formatted number from a sheet cell.
///
/// Commas become dots, then everything but digits and dots is dropped
/// (currency glyphs, spaces, units). Returns `None` unless the rest parses to
/// a finite number. Zero is a real value, not an absent one.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Raw price-related cells of one record, as resolved from the sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceInputs<'a> {
    pub base: &'a str,
    pub final_price: &'a str,
    pub coefficient: &'a str,
}

/// Compute the displayed amount, rounded to whole currency units.
///
/// While on sale a discounted figure from the sheet is trusted first, then
/// base × coefficient, then base reduced by the percentage. Otherwise the base
/// price is shown, falling back to the final-price column.
pub fn resolve_price(inputs: PriceInputs<'_>, availability: Availability) -> Option<i64> {
    let base = parse_number(inputs.base);
    let final_price = parse_number(inputs.final_price);
    let coefficient = parse_number(inputs.coefficient);
    let on_sale = availability.state == LifecycleState::OnSale;

    let amount = match (on_sale, base, final_price, coefficient) {
        (true, _, Some(final_price), _) => final_price,
        (true, Some(base), None, Some(coefficient)) => base * coefficient,
        (true, Some(base), None, None) if availability.discount_percent > 0 => {
            base * (1.0 - f64::from(availability.discount_percent) / 100.0)
        }
        (_, Some(base), _, _) => base,
        (_, None, Some(final_price), _) => final_price,
        _ => return None,
    };

    Some(amount.round() as i64)
}

/// Format an amount with the currency glyph; unresolved prices render as `""`
pub fn format_price_display(amount: Option<i64>, currency_glyph: &str) -> String {
    match amount {
        Some(amount) => format!("{}{}", amount, currency_glyph),
        None => String::new(),
    }
}
