use crate::dataset::{CombinationRecord, Dataset};
use crate::error::{KitchenError, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Output projection of a combination record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationView {
    pub left_emoji: String,
    pub left_codepoint: String,
    pub right_emoji: String,
    pub right_codepoint: String,
    pub alt: String,
    pub image: String,
}

impl From<&CombinationRecord> for CombinationView {
    fn from(record: &CombinationRecord) -> Self {
        Self {
            left_emoji: record.left_emoji.clone(),
            left_codepoint: record.left_emoji_codepoint.clone(),
            right_emoji: record.right_emoji.clone(),
            right_codepoint: record.right_emoji_codepoint.clone(),
            alt: record.alt.clone(),
            image: record.g_static_url.clone(),
        }
    }
}

impl std::fmt::Display for CombinationView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} ({}) + {} ({})",
            self.left_emoji, self.left_codepoint, self.right_emoji, self.right_codepoint
        )?;
        writeln!(f, "  Alt: {}", self.alt)?;
        write!(f, "  URL: {}", self.image)
    }
}

/// Combination lookup over a loaded dataset - main interface of the crate
///
/// The dataset is owned and never mutated, so a shared reference can be
/// queried from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct EmojiKitchen {
    dataset: Dataset,
}

impl EmojiKitchen {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Load the dataset file and wrap it
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Dataset::from_path(path)?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of emoji with an entry in the dataset
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn contains(&self, codepoint: &str) -> bool {
        self.dataset.contains(codepoint)
    }

    /// Partner keys of an entry in stored order, or `None` if the entry is absent
    pub fn partners(&self, codepoint: &str) -> Option<Vec<String>> {
        self.dataset
            .entry(codepoint)
            .map(|entry| entry.combinations().keys().cloned().collect())
    }

    /// All combinations stored under an emoji's entry.
    ///
    /// Results follow partner order, then variant order within each partner.
    /// An unknown emoji yields an empty list and a not-found warning.
    pub fn list_combinations(&self, codepoint: &str) -> Vec<CombinationView> {
        let Some(entry) = self.dataset.entry(codepoint) else {
            warn!("{}", KitchenError::EmojiNotFound(codepoint.to_string()));
            return Vec::new();
        };

        let views: Vec<CombinationView> = entry
            .combinations()
            .values()
            .flat_map(|records| records.iter().map(CombinationView::from))
            .collect();
        debug!(codepoint, count = views.len(), "listed combinations");
        views
    }

    /// The primary record for a pair, as a structured result.
    ///
    /// `right` is the top-level key and `left` the partner key, so the lookup
    /// is not symmetric.
    pub fn find_combo(&self, left: &str, right: &str) -> Result<&CombinationRecord> {
        let entry = self
            .dataset
            .entry(right)
            .ok_or_else(|| KitchenError::EmojiNotFound(right.to_string()))?;

        entry
            .partner(left)
            .and_then(|records| records.first())
            .ok_or_else(|| KitchenError::ComboNotFound {
                left: left.to_string(),
                right: right.to_string(),
            })
    }

    /// The primary combination of `left` + `right`, or `None` with a not-found warning.
    ///
    /// Later variants of the same pair are ignored.
    pub fn get_combo(&self, left: &str, right: &str) -> Option<CombinationView> {
        match self.find_combo(left, right) {
            Ok(record) => Some(CombinationView::from(record)),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }
}
