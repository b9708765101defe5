//! Logical field resolution across the sheet's column-name history.
//!
//! The sheet has been renamed several times (`Наименование` → `название`,
//! `Цена₽` → `цена`/`Цена`, ...). Each logical field declares the column names
//! it may appear under, tried in order. Supporting a new rename only means
//! adding a name here or in the `fields` config section.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    Id,
    Title,
    Country,
    /// Combined strength/gravity text, shown as-is.
    Specs,
    Strength,
    Gravity,
    Price,
    /// Discounted price already computed in the sheet.
    FinalPrice,
    /// Multiplier applied to the base price while on sale (e.g. `0.85`).
    DiscountCoefficient,
    Availability,
    BeerType,
    Accent,
}

impl LogicalField {
    pub const ALL: [LogicalField; 12] = [
        LogicalField::Id,
        LogicalField::Title,
        LogicalField::Country,
        LogicalField::Specs,
        LogicalField::Strength,
        LogicalField::Gravity,
        LogicalField::Price,
        LogicalField::FinalPrice,
        LogicalField::DiscountCoefficient,
        LogicalField::Availability,
        LogicalField::BeerType,
        LogicalField::Accent,
    ];

    /// Historical column names, most specific first
    pub fn default_candidates(&self) -> &'static [&'static str] {
        match self {
            LogicalField::Id => &["id", "ID", "№"],
            LogicalField::Title => &["Наименование", "название", "Название", "title", "name"],
            LogicalField::Country => &["Страна", "страна", "country"],
            LogicalField::Specs => &["Плотность°P", "Плотность °P", "specs"],
            LogicalField::Strength => &["Крепость", "крепость", "ABV", "abv"],
            LogicalField::Gravity => &["Плотность", "плотность", "OG", "og"],
            LogicalField::Price => &["Цена₽", "цена", "Цена", "price"],
            LogicalField::FinalPrice => &[
                "Цена со скидкой",
                "цена со скидкой",
                "Итого₽",
                "итого",
                "final_price",
            ],
            LogicalField::DiscountCoefficient => &["коэффициент", "Коэффициент", "коэф", "coef"],
            LogicalField::Availability => &["instock", "Наличие", "наличие"],
            LogicalField::BeerType => &["beertype", "Тип", "тип", "type"],
            LogicalField::Accent => &["акцент", "Акцент", "accent"],
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            LogicalField::Id => "id",
            LogicalField::Title => "title",
            LogicalField::Country => "country",
            LogicalField::Specs => "specs",
            LogicalField::Strength => "strength",
            LogicalField::Gravity => "gravity",
            LogicalField::Price => "price",
            LogicalField::FinalPrice => "final_price",
            LogicalField::DiscountCoefficient => "discount_coefficient",
            LogicalField::Availability => "availability",
            LogicalField::BeerType => "beer_type",
            LogicalField::Accent => "accent",
        }
    }
}

/// Return the first candidate column whose value is non-empty, or `""`.
pub fn resolve_field<'r, S: AsRef<str>>(record: &'r Record, candidates: &[S]) -> &'r str {
    resolve_with_column(record, candidates)
        .map(|(_, value)| value)
        .unwrap_or("")
}

/// Like [`resolve_field`], but also reports which column matched
pub fn resolve_with_column<'r, 'c, S: AsRef<str>>(
    record: &'r Record,
    candidates: &'c [S],
) -> Option<(&'c str, &'r str)> {
    candidates.iter().find_map(|candidate| {
        let column = candidate.as_ref();
        record
            .get(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| (column, value))
    })
}

/// Synonym table for every logical field.
///
/// Configured lists replace the built-in list for that field only; fields
/// without an override keep their historical defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldResolver {
    overrides: HashMap<LogicalField, Vec<String>>,
}

impl FieldResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates<I, S>(mut self, field: LogicalField, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides
            .insert(field, candidates.into_iter().map(Into::into).collect());
        self
    }

    pub fn candidates(&self, field: LogicalField) -> Vec<&str> {
        match self.overrides.get(&field) {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => field.default_candidates().to_vec(),
        }
    }

    pub fn resolve<'r>(&self, record: &'r Record, field: LogicalField) -> &'r str {
        resolve_field(record, &self.candidates(field))
    }

    /// Column that supplied `field` for this record, if any
    pub fn matched_column(&self, record: &Record, field: LogicalField) -> Option<String> {
        let candidates = self.candidates(field);
        resolve_with_column(record, &candidates).map(|(column, _)| column.to_string())
    }
}
