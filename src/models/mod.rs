pub mod card;
pub mod item;

pub use card::*;
pub use item::*;

// Display defaults matching the printed menu
pub const CURRENCY_GLYPH: &str = "₽";
pub const PENDING_PLACEHOLDER: &str = "Ожидается";
pub const FILLER_ASSET: &str = "filler.png";
pub const IMAGE_DIR: &str = "img";
