use tracing::debug;

use crate::config::BoardConfig;
use crate::models::{DisplayItem, ItemId, LifecycleState, Record};
use crate::parsers::{
    classify_availability, clean_text, format_price_display, parse_number, resolve_price,
    BadgeResolver, FieldResolver, LogicalField, PriceInputs,
};

/// Shapes one sheet record into a [`DisplayItem`].
///
/// Assembly never fails: a missing or unreadable field becomes empty (or
/// `None`) and the rest of the card is still produced.
pub struct CardAssembler<'a> {
    fields: &'a FieldResolver,
    badges: &'a BadgeResolver,
    board: &'a BoardConfig,
}

/// Ids are read as a whole number, never scraped for digits, so `12a` is no id
fn parse_id(text: &str) -> Option<ItemId> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .and_then(ItemId::new)
}

impl<'a> CardAssembler<'a> {
    pub fn new(fields: &'a FieldResolver, badges: &'a BadgeResolver, board: &'a BoardConfig) -> Self {
        Self {
            fields,
            badges,
            board,
        }
    }

    pub fn assemble(&self, record: &Record) -> DisplayItem {
        let field = |logical| self.fields.resolve(record, logical);

        let id = parse_id(field(LogicalField::Id));
        let availability = classify_availability(field(LogicalField::Availability));

        let price = match availability.state {
            LifecycleState::Pending => self.board.pending_placeholder.clone(),
            _ => {
                let inputs = PriceInputs {
                    base: field(LogicalField::Price),
                    final_price: field(LogicalField::FinalPrice),
                    coefficient: field(LogicalField::DiscountCoefficient),
                };
                let amount = resolve_price(inputs, availability);
                if amount.is_none() {
                    debug!("No price resolved for item {:?}", field(LogicalField::Id));
                }
                format_price_display(amount, &self.board.currency_glyph)
            }
        };

        DisplayItem {
            id,
            title: clean_text(field(LogicalField::Title)),
            country: clean_text(field(LogicalField::Country)),
            specs: self.specs(record),
            price,
            state: availability.state,
            discount_percent: availability.discount_percent,
            badge: self.badges.type_badge(field(LogicalField::BeerType)),
            accent: self.badges.accent_badge(field(LogicalField::Accent)),
        }
    }

    /// Combined specs column as-is, otherwise "<strength> / <gravity>"
    fn specs(&self, record: &Record) -> String {
        let combined = self.fields.resolve(record, LogicalField::Specs);
        if !combined.is_empty() {
            return clean_text(combined);
        }

        [LogicalField::Strength, LogicalField::Gravity]
            .into_iter()
            .map(|logical| clean_text(self.fields.resolve(record, logical)))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
