//! In-memory caching decorator for breed fetchers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use dogapi_core::constants::{DEFAULT_CACHE_CAPACITY, EMPTY_BREED_KEY};
use dogapi_core::error::{DogApiError, Result};
use dogapi_core::traits::BreedFetcher;
use dogapi_core::types::{BreedKey, SubBreeds};

/// Cache configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of entries to reserve up front (not a bound)
    pub initial_capacity: usize,
    /// Whether cache hits are logged at debug level
    pub log_hits: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CACHE_CAPACITY,
            log_hits: true,
        }
    }
}

/// Breed fetcher that remembers successful lookups.
///
/// Lookups are keyed by the lowercased breed name, so `"Hound"` and
/// `"hound"` share one entry. Only successful results are stored: an error
/// from the wrapped fetcher is returned as is and the next lookup for that
/// breed goes back to the fetcher. Entries are never evicted.
///
/// # Thread Safety
///
/// A whole lookup, including the call into the wrapped fetcher, runs under
/// one lock. Concurrent lookups on the same instance are serialized, so a
/// breed is fetched at most once even under contention.
pub struct CachingBreedFetcher<F> {
    delegate: F,
    entries: Mutex<HashMap<BreedKey, SubBreeds>>,
    /// Calls that reached the delegate, successful or not
    calls_made: AtomicU64,
    /// Lookups answered from `entries`
    hits: AtomicU64,
    config: CacheConfig,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wraps `delegate` with the default configuration.
    pub fn new(delegate: F) -> Self {
        Self::with_config(delegate, CacheConfig::default())
    }

    /// Wraps `delegate` with a custom configuration.
    pub fn with_config(delegate: F, config: CacheConfig) -> Self {
        Self {
            delegate,
            entries: Mutex::new(HashMap::with_capacity(config.initial_capacity)),
            calls_made: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            config,
        }
    }

    /// Starts a builder. `build` fails if no delegate is supplied.
    pub fn builder() -> CacheBuilder<F> {
        CacheBuilder::new()
    }

    /// Returns the sub-breeds of `breed`, fetching them on first use.
    ///
    /// This is the nullable entry point; the [`BreedFetcher`] impl forwards
    /// here with `Some(name)`.
    ///
    /// An absent name is treated as the empty string. On a miss the wrapped
    /// fetcher sees the name exactly as passed here, not the lowercased key.
    ///
    /// # Errors
    /// Whatever the wrapped fetcher returns, typically
    /// [`DogApiError::BreedNotFound`]. Errors are not cached.
    #[instrument(skip(self))]
    pub fn lookup(&self, breed: Option<&str>) -> Result<SubBreeds> {
        let key = BreedKey::normalize(breed);
        let mut entries = self.entries.lock();

        if let Some(cached) = entries.get(key.as_str()) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            if self.config.log_hits {
                debug!(%key, "Cache hit");
            }
            return Ok(cached.clone());
        }

        // Counted before the call so failed fetches are included.
        let calls = self.calls_made.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(%key, calls, "Cache miss, fetching");

        let fetched = match self.delegate.get_sub_breeds(breed.unwrap_or(EMPTY_BREED_KEY)) {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(%key, error = %err, "Fetch failed, not caching");
                return Err(err);
            }
        };

        // Own copy, detached from whatever the delegate keeps.
        let sub_breeds = SubBreeds::from(fetched.as_slice());
        entries.insert(key.clone(), sub_breeds.clone());
        debug!(%key, count = sub_breeds.len(), "Cached sub-breeds");

        Ok(sub_breeds)
    }

    /// Returns how many times the wrapped fetcher has been called.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Returns true if `breed` is cached. Never calls the wrapped fetcher.
    pub fn contains(&self, breed: Option<&str>) -> bool {
        self.entries.lock().contains_key(BreedKey::normalize(breed).as_str())
    }

    /// Returns the number of cached breeds.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.len();
        let calls_made = self.calls_made();

        CacheStats {
            entries,
            calls_made,
            hits: self.hits.load(Ordering::Relaxed),
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the wrapped fetcher.
    pub fn delegate(&self) -> &F {
        &self.delegate
    }

    /// Drops the cache and returns the wrapped fetcher.
    pub fn into_inner(self) -> F {
        self.delegate
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        self.lookup(Some(breed))
    }
}

/// Builder for [`CachingBreedFetcher`].
///
/// Exists for callers whose fetcher may be missing at construction time.
/// `build` rejects a builder without one.
pub struct CacheBuilder<F> {
    delegate: Option<F>,
    config: CacheConfig,
}

impl<F: BreedFetcher> CacheBuilder<F> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            delegate: None,
            config: CacheConfig::default(),
        }
    }

    /// Sets the fetcher to wrap.
    pub fn delegate(mut self, delegate: F) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Sets the fetcher to wrap, if any.
    pub fn maybe_delegate(mut self, delegate: Option<F>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Sets the configuration.
    pub fn config(mut self, config: CacheConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the number of entries to reserve up front.
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.config.initial_capacity = initial_capacity;
        self
    }

    /// Builds the cache.
    ///
    /// # Errors
    /// [`DogApiError::InvalidArgument`] if no fetcher was supplied.
    pub fn build(self) -> Result<CachingBreedFetcher<F>> {
        let delegate = self
            .delegate
            .ok_or_else(|| DogApiError::InvalidArgument("fetcher must be provided".into()))?;

        Ok(CachingBreedFetcher::with_config(delegate, self.config))
    }
}

impl<F: BreedFetcher> Default for CacheBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Breeds currently cached
    pub entries: usize,
    /// Calls that reached the wrapped fetcher
    pub calls_made: u64,
    /// Lookups answered from the cache
    pub hits: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache, 0.0 when there were none.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.calls_made;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
