//! Emoji Kitchen combination lookup
//!
//! Answers two queries over a pre-generated Emoji Kitchen dataset:
//! every combination of one emoji, and the combination of a specific pair.
//!
//! ```no_run
//! use emoji_kitchen::{normalize, EmojiKitchen};
//!
//! let kitchen = EmojiKitchen::from_path("emojikitchen.json")?;
//! for combo in kitchen.list_combinations(&normalize("😀")) {
//!     println!("{}", combo);
//! }
//! if let Some(combo) = kitchen.get_combo(&normalize("u1f600"), &normalize("1f601")) {
//!     println!("{}", combo.image);
//! }
//! # Ok::<(), emoji_kitchen::KitchenError>(())
//! ```

pub mod cli;
pub mod codepoint;
pub mod dataset;
pub mod error;
pub mod kitchen;

#[cfg(feature = "wasm-bindgen")]
pub mod wasm;

#[cfg(test)]
mod tests;

pub use codepoint::{codepoint_to_glyph, glyph_to_codepoint, normalize, unescape_token};
pub use dataset::{CombinationRecord, Combinations, Dataset, EmojiEntry};
pub use error::{KitchenError, Result};
pub use kitchen::{CombinationView, EmojiKitchen};
