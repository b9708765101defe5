use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// One data row of the sheet, keyed by the header text exactly as it appears
/// in the source (Cyrillic names and symbols included).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(HashMap<String, String>);

impl Record {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// NewType pattern for type safety
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub f64);

impl ItemId {
    /// Only finite values are valid ids.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// Ascending by value; items without an id go after every numbered item.
    pub fn sort_key_cmp(a: Option<ItemId>, b: Option<ItemId>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => a.0.total_cmp(&b.0),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    #[serde(rename = "inStock")]
    InStock,
    #[serde(rename = "onSale")]
    OnSale,
    #[serde(rename = "pending")]
    Pending,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::InStock => "inStock",
            LifecycleState::OnSale => "onSale",
            LifecycleState::Pending => "pending",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying the availability column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub state: LifecycleState,
    /// 0 unless `state` is `OnSale`.
    pub discount_percent: u8,
}

impl Availability {
    pub const IN_STOCK: Availability = Availability {
        state: LifecycleState::InStock,
        discount_percent: 0,
    };

    pub const PENDING: Availability = Availability {
        state: LifecycleState::Pending,
        discount_percent: 0,
    };

    pub fn on_sale(discount_percent: u8) -> Self {
        Self {
            state: LifecycleState::OnSale,
            discount_percent,
        }
    }
}

/// Beer style categories the badge artwork exists for.
///
/// The serialized names are the category codes used by the historical
/// `beertype` column (`beertype=dark`, `beertype=lightNF`, ...). Lowercase
/// aliases are accepted because configuration keys arrive lowercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeerCategory {
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "darkNF", alias = "darknf")]
    DarkUnfiltered,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "lightNF", alias = "lightnf")]
    LightUnfiltered,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "n/a")]
    NonAlcoholic,
}

impl BeerCategory {
    pub const ALL: [BeerCategory; 6] = [
        BeerCategory::Dark,
        BeerCategory::DarkUnfiltered,
        BeerCategory::Light,
        BeerCategory::LightUnfiltered,
        BeerCategory::Other,
        BeerCategory::NonAlcoholic,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            BeerCategory::Dark => "dark",
            BeerCategory::DarkUnfiltered => "darkNF",
            BeerCategory::Light => "light",
            BeerCategory::LightUnfiltered => "lightNF",
            BeerCategory::Other => "other",
            BeerCategory::NonAlcoholic => "n/a",
        }
    }
}

impl fmt::Display for BeerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Style badge: the category plus the asset identifier the page resolves under `img/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub category: BeerCategory,
    pub asset: String,
}

/// Promotional highlight ("новинка", "медаль", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accent {
    pub label: String,
    pub asset: String,
}

/// Display-ready card data for one menu item. Rebuilt from scratch on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: Option<ItemId>,
    pub title: String,
    pub country: String,
    pub specs: String,
    pub price: String,
    pub state: LifecycleState,
    pub discount_percent: u8,
    pub badge: Option<Badge>,
    pub accent: Option<Accent>,
}
