use thiserror::Error;

/// Result type for emoji kitchen operations
pub type Result<T> = std::result::Result<T, KitchenError>;

/// Error types for dataset loading and combination lookup
#[derive(Error, Debug)]
pub enum KitchenError {
    /// Input that can never name an emoji (e.g. empty glyph text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Codepoint key is not a top-level dataset entry
    #[error("Emoji {0} not found")]
    EmojiNotFound(String),

    /// The right-hand entry exists but has no combination with the left-hand partner
    #[error("No combination found for {left} + {right}")]
    ComboNotFound { left: String, right: String },

    /// Dataset file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset document is not valid JSON or does not match the schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KitchenError {
    /// Whether this is one of the non-fatal lookup misses
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            KitchenError::EmojiNotFound(_) | KitchenError::ComboNotFound { .. }
        )
    }
}
