//! From sheet text to a paginated board.

pub mod card;
pub mod pages;

pub use card::CardAssembler;
pub use pages::Board;

use tracing::info;

use crate::config::{BoardConfig, Config};
use crate::models::DisplayItem;
use crate::parsers::{parse_table, BadgeResolver, FieldResolver};

/// One configured ingestion pipeline. Holds only immutable lookup data, so a
/// single instance serves every refresh.
#[derive(Debug, Clone)]
pub struct MenuPipeline {
    fields: FieldResolver,
    badges: BadgeResolver,
    board: BoardConfig,
}

impl MenuPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            fields: config.fields.clone(),
            badges: BadgeResolver::new(&config.badges),
            board: config.board.clone(),
        }
    }

    pub fn board_config(&self) -> &BoardConfig {
        &self.board
    }

    pub fn fields(&self) -> &FieldResolver {
        &self.fields
    }

    /// Parse the sheet and assemble one item per data row, in sheet order
    pub fn ingest(&self, text: &str) -> Vec<DisplayItem> {
        let records = parse_table(text);
        let assembler = CardAssembler::new(&self.fields, &self.badges, &self.board);

        let items: Vec<DisplayItem> = records.iter().map(|record| assembler.assemble(record)).collect();
        info!("Assembled {} menu items from {} rows", items.len(), records.len());
        items
    }

    pub fn build_board(&self, text: &str) -> Board {
        self.paginate(self.ingest(text))
    }

    pub fn paginate(&self, items: Vec<DisplayItem>) -> Board {
        Board::new(items, self.board.items_per_page, self.board.filler_position)
    }
}

impl Default for MenuPipeline {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
