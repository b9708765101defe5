pub mod badge;
pub mod fields;
pub mod price;
pub mod state;
pub mod table;

pub use badge::*;
pub use fields::*;
pub use price::*;
pub use state::*;
pub use table::*;

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercased, whitespace-collapsed form used for every lookup key
pub fn normalize_key(text: &str) -> String {
    clean_text(&text.to_lowercase())
}
