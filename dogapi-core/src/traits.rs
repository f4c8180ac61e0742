//! Common traits for dogapi.
//!
//! [`BreedFetcher`] is the one capability every breed source implements.
//! Caching layers implement it too, so they can be dropped in wherever a
//! plain source is expected.

use std::sync::Arc;

use crate::error::Result;
use crate::types::SubBreeds;

// ═══════════════════════════════════════════════════════════════════════════════
// BREED FETCHER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for looking up the sub-breeds of a breed.
///
/// Implementations might use:
/// - In-memory tables (for testing/development)
/// - The dog.ceo HTTP API
/// - Another fetcher wrapped in a cache
///
/// Calls are synchronous. Implementations that block on I/O do so inside
/// this call.
pub trait BreedFetcher: Send + Sync {
    /// Returns the sub-breeds of `breed`.
    ///
    /// # Errors
    /// [`DogApiError::BreedNotFound`](crate::DogApiError::BreedNotFound) when
    /// the breed is unknown to this source.
    fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds>;
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for &T {
    fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        (**self).get_sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Box<T> {
    fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        (**self).get_sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Arc<T> {
    fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        (**self).get_sub_breeds(breed)
    }
}

/// Returns how many sub-breeds `breed` has according to `fetcher`.
pub fn count_sub_breeds(fetcher: &dyn BreedFetcher, breed: &str) -> Result<usize> {
    fetcher.get_sub_breeds(breed).map(|sub_breeds| sub_breeds.len())
}
