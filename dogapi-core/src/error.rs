//! Error types for dogapi.
//!
//! Every fallible operation in the workspace returns [`DogApiError`].
//! The cache never originates a lookup error of its own: whatever a
//! fetcher returns is handed back to the caller untouched.

use thiserror::Error;

/// Result type alias using `DogApiError`.
pub type Result<T> = std::result::Result<T, DogApiError>;

/// Main error type for all dogapi operations.
#[derive(Debug, Error)]
pub enum DogApiError {
    // ═══════════════════════════════════════════════════════════════════════════
    // LOOKUP ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The breed is unknown to the underlying source.
    #[error("Breed not found: {0}")]
    BreedNotFound(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A required argument was missing or unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // PAYLOAD ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A source received a payload it could not interpret.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DogApiError {
    /// Returns true if the breed was unknown to the source.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DogApiError::BreedNotFound(_))
    }

    /// Returns true if this error is recoverable (can retry).
    ///
    /// None of the current kinds are transient. A caller that retries a
    /// `BreedNotFound` lookup will simply reach the source again.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Returns the breed name carried by a `BreedNotFound` error.
    pub fn breed(&self) -> Option<&str> {
        match self {
            DogApiError::BreedNotFound(breed) => Some(breed),
            _ => None,
        }
    }
}
