//! Type and accent badge lookup.
//!
//! Both lookups are total: anything not in the tables simply has no badge.
//! The tables come from configuration ([`BadgeTables`]) and are normalized
//! once when the [`BadgeResolver`] is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::normalize_key;
use crate::models::{Accent, Badge, BeerCategory};

/// Accent values that explicitly mean "no accent"
const NO_ACCENT: &[&str] = &["", "-"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeTables {
    /// Beer type text → category
    pub type_categories: HashMap<String, BeerCategory>,
    /// Category → asset identifier under `img/`
    pub category_assets: HashMap<BeerCategory, String>,
    /// Accent text → asset identifier under `img/`
    pub accent_assets: HashMap<String, String>,
}

impl Default for BadgeTables {
    fn default() -> Self {
        let mut type_categories: HashMap<String, BeerCategory> = [
            ("темное", BeerCategory::Dark),
            ("тёмное", BeerCategory::Dark),
            ("темное нефильтрованное", BeerCategory::DarkUnfiltered),
            ("тёмное нефильтрованное", BeerCategory::DarkUnfiltered),
            ("светлое", BeerCategory::Light),
            ("светлое нефильтрованное", BeerCategory::LightUnfiltered),
            ("другое", BeerCategory::Other),
            ("сидр", BeerCategory::Other),
            ("безалкогольное", BeerCategory::NonAlcoholic),
        ]
        .into_iter()
        .map(|(name, category)| (name.to_string(), category))
        .collect();

        // Codes used by the older `beertype` column
        for category in BeerCategory::ALL {
            type_categories.insert(format!("beertype={}", category.code()), category);
        }

        let category_assets = BeerCategory::ALL
            .into_iter()
            .map(|category| {
                let asset = match category {
                    BeerCategory::NonAlcoholic => "nonalc.png".to_string(),
                    other => format!("beertype={}.png", other.code()),
                };
                (category, asset)
            })
            .collect();

        let accent_assets = [
            ("новинка", "new.png"),
            ("new", "new.png"),
            ("медаль", "medal.png"),
            ("medal", "medal.png"),
        ]
        .into_iter()
        .map(|(label, asset)| (label.to_string(), asset.to_string()))
        .collect();

        Self {
            type_categories,
            category_assets,
            accent_assets,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BadgeResolver {
    type_categories: HashMap<String, BeerCategory>,
    category_assets: HashMap<BeerCategory, String>,
    accent_assets: HashMap<String, String>,
}

impl BadgeResolver {
    pub fn new(tables: &BadgeTables) -> Self {
        Self {
            type_categories: tables
                .type_categories
                .iter()
                .map(|(name, category)| (normalize_key(name), *category))
                .collect(),
            category_assets: tables.category_assets.clone(),
            accent_assets: tables
                .accent_assets
                .iter()
                .map(|(label, asset)| (normalize_key(label), asset.clone()))
                .collect(),
        }
    }

    pub fn category(&self, type_text: &str) -> Option<BeerCategory> {
        self.type_categories.get(&normalize_key(type_text)).copied()
    }

    pub fn type_badge(&self, type_text: &str) -> Option<Badge> {
        let category = self.category(type_text)?;
        let asset = self.category_assets.get(&category)?;

        Some(Badge {
            category,
            asset: asset.clone(),
        })
    }

    pub fn accent_badge(&self, accent_text: &str) -> Option<Accent> {
        let label = normalize_key(accent_text);
        if NO_ACCENT.contains(&label.as_str()) {
            return None;
        }

        self.accent_assets.get(&label).map(|asset| Accent {
            label,
            asset: asset.clone(),
        })
    }
}

impl Default for BadgeResolver {
    fn default() -> Self {
        Self::new(&BadgeTables::default())
    }
}
