//! Typed, read-only model of the Emoji Kitchen dataset document.
//!
//! The document looks like:
//!
//! ```json
//! { "data": { "1f601": { "combinations": { "1f600": [ { "leftEmoji": "😀", ... } ] } } } }
//! ```
//!
//! Top-level entries are keyed by the right-hand emoji of a combination and
//! each entry's `combinations` are keyed by the left-hand partner.

use crate::error::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// One pre-rendered combination of two emoji, as stored in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationRecord {
    pub left_emoji: String,
    pub left_emoji_codepoint: String,
    pub right_emoji: String,
    pub right_emoji_codepoint: String,
    /// Human-readable description of the combined image
    pub alt: String,
    /// URL of the rendered image on gstatic
    pub g_static_url: String,
}

/// Partner key to its records, in document order.
///
/// A partner may carry several records when the same pair was rendered more
/// than once; the first one is the primary variant.
pub type Combinations = IndexMap<String, Vec<CombinationRecord>>;

/// Dataset record for a single codepoint key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmojiEntry {
    #[serde(default)]
    combinations: Combinations,
}

impl EmojiEntry {
    pub fn combinations(&self) -> &Combinations {
        &self.combinations
    }

    /// Records for a partner key (case-insensitive)
    pub fn partner(&self, key: &str) -> Option<&[CombinationRecord]> {
        self.combinations
            .get(&key.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    // Partners that collide after lowercasing keep their first position and
    // append records in document order.
    fn merge(&mut self, other: EmojiEntry) {
        for (partner, records) in other.combinations {
            self.combinations
                .entry(partner.to_ascii_lowercase())
                .or_default()
                .extend(records);
        }
    }
}

#[derive(Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    data: IndexMap<String, EmojiEntry>,
}

impl DatasetDocument {
    fn into_dataset(self) -> Dataset {
        let mut entries: IndexMap<String, EmojiEntry> =
            IndexMap::with_capacity(self.data.len());
        for (key, entry) in self.data {
            entries
                .entry(key.to_ascii_lowercase())
                .or_default()
                .merge(entry);
        }
        Dataset { entries }
    }
}

/// The whole dataset, loaded once and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: IndexMap<String, EmojiEntry>,
}

impl Dataset {
    /// Load the dataset from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading emoji kitchen dataset");
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            entries = dataset.len(),
            "loaded emoji kitchen dataset"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: DatasetDocument = serde_json::from_reader(reader)?;
        Ok(document.into_dataset())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: DatasetDocument = serde_json::from_str(json)?;
        Ok(document.into_dataset())
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let document: DatasetDocument = serde_json::from_value(value)?;
        Ok(document.into_dataset())
    }

    /// Entry for a codepoint key (case-insensitive)
    pub fn entry(&self, key: &str) -> Option<&EmojiEntry> {
        self.entries.get(&key.to_ascii_lowercase())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
