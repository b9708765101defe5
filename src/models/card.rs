use serde::{Deserialize, Serialize};

use super::DisplayItem;

/// One slot on a screen: either a menu item or the fixed filler/ad card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Item(DisplayItem),
    Filler,
}

impl Card {
    pub fn as_item(&self) -> Option<&DisplayItem> {
        match self {
            Card::Item(item) => Some(item),
            Card::Filler => None,
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, Card::Filler)
    }
}

/// A contiguous view into the ordered card sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Page<'a> {
    /// 1-based screen number.
    pub number: usize,
    pub cards: &'a [Card],
}

impl<'a> Page<'a> {
    pub fn empty(number: usize) -> Self {
        Self { number, cards: &[] }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn items(&self) -> impl Iterator<Item = &'a DisplayItem> {
        self.cards.iter().filter_map(Card::as_item)
    }
}
