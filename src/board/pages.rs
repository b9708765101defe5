use crate::models::{Card, DisplayItem, ItemId, Page};

/// The full ordered card sequence for one refresh, sliced into screens on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    cards: Vec<Card>,
    page_size: usize,
}

impl Board {
    /// Sort items by id, insert the filler at its 1-based position (or at the
    /// end when the position is past the last item), and keep the result.
    pub fn new(mut items: Vec<DisplayItem>, page_size: usize, filler_position: Option<usize>) -> Self {
        // Stable: equal and missing ids keep sheet order
        items.sort_by(|a, b| ItemId::sort_key_cmp(a.id, b.id));

        let mut cards: Vec<Card> = items.into_iter().map(Card::Item).collect();

        if let Some(position) = filler_position {
            let index = position.saturating_sub(1).min(cards.len());
            cards.insert(index, Card::Filler);
        }

        Self { cards, page_size }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn item_count(&self) -> usize {
        self.cards.iter().filter(|card| !card.is_filler()).count()
    }

    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.cards.len().div_ceil(self.page_size)
    }

    /// Cards for the 1-based page `number`; out-of-range pages are empty
    pub fn page(&self, number: usize) -> Page<'_> {
        if number == 0 || self.page_size == 0 {
            return Page::empty(number);
        }

        let start = (number - 1).saturating_mul(self.page_size);
        if start >= self.cards.len() {
            return Page::empty(number);
        }

        let end = start.saturating_add(self.page_size).min(self.cards.len());
        Page {
            number,
            cards: &self.cards[start..end],
        }
    }

    pub fn pages(&self) -> impl Iterator<Item = Page<'_>> {
        (1..=self.page_count()).map(|number| self.page(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LifecycleState;

    fn item(id: Option<f64>, title: &str) -> DisplayItem {
        DisplayItem {
            id: id.and_then(ItemId::new),
            title: title.to_string(),
            country: String::new(),
            specs: String::new(),
            price: String::new(),
            state: LifecycleState::InStock,
            discount_percent: 0,
            badge: None,
            accent: None,
        }
    }

    fn titles(page: Page<'_>) -> Vec<String> {
        page.cards
            .iter()
            .map(|card| match card {
                Card::Item(item) => item.title.clone(),
                Card::Filler => "*".to_string(),
            })
            .collect()
    }

    #[test]
    fn sorts_numerically_not_lexically() {
        let board = Board::new(
            vec![item(Some(10.0), "ten"), item(Some(2.0), "two"), item(Some(1.0), "one")],
            15,
            None,
        );
        assert_eq!(titles(board.page(1)), vec!["one", "two", "ten"]);
    }

    #[test]
    fn missing_ids_go_last_in_sheet_order() {
        let board = Board::new(
            vec![
                item(None, "a"),
                item(Some(5.0), "five"),
                item(None, "b"),
                item(Some(1.0), "one"),
            ],
            15,
            None,
        );
        assert_eq!(titles(board.page(1)), vec!["one", "five", "a", "b"]);
    }

    #[test]
    fn filler_position_is_one_based() {
        let items = (1..=4).map(|i| item(Some(i as f64), &i.to_string())).collect();
        let board = Board::new(items, 15, Some(2));
        assert_eq!(titles(board.page(1)), vec!["1", "*", "2", "3", "4"]);
    }

    #[test]
    fn filler_past_the_end_is_appended() {
        let items = (1..=3).map(|i| item(Some(i as f64), &i.to_string())).collect();
        let board = Board::new(items, 2, Some(40));
        assert_eq!(board.page_count(), 2);
        assert_eq!(titles(board.page(2)), vec!["3", "*"]);
    }

    #[test]
    fn filler_on_empty_board_is_alone() {
        let board = Board::new(Vec::new(), 15, Some(40));
        assert_eq!(board.item_count(), 0);
        assert_eq!(titles(board.page(1)), vec!["*"]);
    }

    #[test]
    fn last_page_may_be_short_and_out_of_range_is_empty() {
        let items = (1..=7).map(|i| item(Some(i as f64), &i.to_string())).collect();
        let board = Board::new(items, 3, None);
        assert_eq!(board.page_count(), 3);
        assert_eq!(titles(board.page(3)), vec!["7"]);
        assert!(board.page(4).is_empty());
        assert!(board.page(0).is_empty());
        assert!(board.page(usize::MAX).is_empty());
        assert_eq!(board.pages().count(), 3);
    }
}
