//! Menu board for a taproom: reads the published beverage sheet, derives the
//! card fields (availability state, price, badges), paginates the cards onto
//! screens and drives a headless browser to capture each screen.

pub mod board;
pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod render;
pub mod snapshot;
pub mod utils;

pub use board::{Board, CardAssembler, MenuPipeline};
pub use config::Config;
pub use error::{BoardError, SnapshotError};
pub use models::{Card, DisplayItem, LifecycleState, Page};
