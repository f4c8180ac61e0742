//! In-memory breed fetcher.
//!
//! Thread-safe breed table suitable for development, testing, and
//! offline use.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use dogapi_core::constants::RESPONSE_STATUS_SUCCESS;
use dogapi_core::error::{DogApiError, Result};
use dogapi_core::traits::BreedFetcher;
use dogapi_core::types::SubBreeds;

/// Body of a dog.ceo `breeds/list/all` response.
///
/// ```json
/// {"message": {"hound": ["afghan", "basset"], "pug": []}, "status": "success"}
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BreedListResponse {
    /// Breed name → sub-breed names
    pub message: BTreeMap<String, Vec<String>>,
    /// `"success"` on success
    pub status: String,
}

/// In-memory breed fetcher.
///
/// Breed names are matched after trimming and lowercasing, the same
/// leniency the dog.ceo API shows. Unknown breeds fail with
/// [`DogApiError::BreedNotFound`] carrying the name as given.
///
/// # Thread Safety
///
/// All operations are thread-safe and can be called concurrently, including
/// edits to the table while lookups are in flight.
#[derive(Debug, Default)]
pub struct MemoryBreedFetcher {
    /// Normalized breed → sub-breeds
    breeds: DashMap<String, SubBreeds>,
    /// Lookups served, successful or not
    lookups: AtomicU64,
}

impl MemoryBreedFetcher {
    /// Creates an empty fetcher. Every lookup fails until breeds are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fetcher with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            breeds: DashMap::with_capacity(capacity),
            lookups: AtomicU64::new(0),
        }
    }

    /// Creates a fetcher holding the given breeds.
    pub fn with_breeds<I, B, S>(breeds: I) -> Self
    where
        I: IntoIterator<Item = (B, S)>,
        B: AsRef<str>,
        S: Into<SubBreeds>,
    {
        let fetcher = Self::new();
        for (breed, sub_breeds) in breeds {
            fetcher.insert(breed.as_ref(), sub_breeds);
        }
        fetcher
    }

    /// Builds a fetcher from a dog.ceo `breeds/list/all` JSON body.
    ///
    /// # Errors
    /// [`DogApiError::Json`] if the body does not parse, and
    /// [`DogApiError::InvalidResponse`] if its status is not `"success"`.
    pub fn from_json(body: &str) -> Result<Self> {
        let response: BreedListResponse = serde_json::from_str(body)?;
        Self::from_response(response)
    }

    /// Builds a fetcher from an already decoded response.
    pub fn from_response(response: BreedListResponse) -> Result<Self> {
        if response.status != RESPONSE_STATUS_SUCCESS {
            return Err(DogApiError::InvalidResponse(format!(
                "unexpected status '{}'",
                response.status
            )));
        }

        let fetcher = Self::with_capacity(response.message.len());
        for (breed, sub_breeds) in response.message {
            fetcher.insert(&breed, sub_breeds);
        }

        debug!(breeds = fetcher.len(), "Loaded breed list");
        Ok(fetcher)
    }

    /// Normalizes a breed name for table lookups (trimmed, lowercase).
    fn normalize_breed(breed: &str) -> String {
        breed.trim().to_lowercase()
    }

    /// Adds or replaces a breed. Returns the previous sub-breeds, if any.
    pub fn insert(&self, breed: &str, sub_breeds: impl Into<SubBreeds>) -> Option<SubBreeds> {
        self.breeds
            .insert(Self::normalize_breed(breed), sub_breeds.into())
    }

    /// Removes a breed. Returns its sub-breeds, if it was present.
    pub fn remove(&self, breed: &str) -> Option<SubBreeds> {
        self.breeds
            .remove(&Self::normalize_breed(breed))
            .map(|(_, sub_breeds)| sub_breeds)
    }

    /// Removes every breed. The lookup counter is kept.
    pub fn clear(&self) {
        self.breeds.clear();
    }

    /// Returns the number of known breeds.
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Returns true if no breeds are known.
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Returns the known breed names, sorted.
    pub fn breeds(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .breeds
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Returns how many lookups this fetcher has served.
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl BreedFetcher for MemoryBreedFetcher {
    #[instrument(skip(self))]
    fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        match self.breeds.get(&Self::normalize_breed(breed)) {
            Some(entry) => {
                debug!(count = entry.len(), "Found breed");
                Ok(entry.value().clone())
            }
            None => Err(DogApiError::BreedNotFound(breed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const BREEDS_JSON: &str = r#"{
        "message": {
            "bulldog": ["boston", "english", "french"],
            "hound": ["afghan", "basset", "blood"],
            "pug": []
        },
        "status": "success"
    }"#;

    #[test]
    fn test_lookup_known_breed() {
        let fetcher = MemoryBreedFetcher::with_breeds([("hound", vec!["afghan", "basset"])]);

        let sub_breeds = fetcher.get_sub_breeds("hound").unwrap();
        assert_eq!(sub_breeds, ["afghan", "basset"]);
        assert_eq!(fetcher.lookups(), 1);
    }

    #[test]
    fn test_lookup_unknown_breed() {
        let fetcher = MemoryBreedFetcher::new();

        let err = fetcher.get_sub_breeds("Wolf").unwrap_err();
        assert!(matches!(err, DogApiError::BreedNotFound(ref name) if name == "Wolf"));
        assert_eq!(fetcher.lookups(), 1);
    }

    #[test_case("hound" ; "lower")]
    #[test_case("HOUND" ; "upper")]
    #[test_case("  Hound  " ; "padded")]
    fn test_lookup_normalizes_name(name: &str) {
        let fetcher = MemoryBreedFetcher::with_breeds([("hound", vec!["afghan"])]);
        assert!(fetcher.get_sub_breeds(name).is_ok());
    }

    #[test]
    fn test_breed_without_sub_breeds() {
        let fetcher = MemoryBreedFetcher::from_json(BREEDS_JSON).unwrap();
        assert!(fetcher.get_sub_breeds("pug").unwrap().is_empty());
    }

    #[test]
    fn test_from_json() {
        let fetcher = MemoryBreedFetcher::from_json(BREEDS_JSON).unwrap();

        assert_eq!(fetcher.len(), 3);
        assert_eq!(fetcher.breeds(), vec!["bulldog", "hound", "pug"]);
        assert_eq!(
            fetcher.get_sub_breeds("bulldog").unwrap(),
            ["boston", "english", "french"]
        );
    }

    #[test]
    fn test_from_json_rejects_error_status() {
        let body = r#"{"message": "Breed not found (master breed does not exist)", "status": "error"}"#;
        assert!(matches!(
            MemoryBreedFetcher::from_json(body),
            Err(DogApiError::Json(_))
        ));

        let body = r#"{"message": {}, "status": "error"}"#;
        assert!(matches!(
            MemoryBreedFetcher::from_json(body),
            Err(DogApiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_insert_replace_remove() {
        let fetcher = MemoryBreedFetcher::new();

        assert!(fetcher.insert("Terrier", vec!["border"]).is_none());
        let previous = fetcher.insert("terrier", vec!["cairn", "irish"]).unwrap();
        assert_eq!(previous, ["border"]);
        assert_eq!(fetcher.get_sub_breeds("terrier").unwrap().len(), 2);

        assert!(fetcher.remove("TERRIER").is_some());
        assert!(fetcher.is_empty());
        assert!(fetcher.get_sub_breeds("terrier").unwrap_err().is_not_found());
    }

    #[test]
    fn test_clear_keeps_lookup_count() {
        let fetcher = MemoryBreedFetcher::from_json(BREEDS_JSON).unwrap();
        fetcher.get_sub_breeds("pug").unwrap();

        fetcher.clear();

        assert!(fetcher.is_empty());
        assert_eq!(fetcher.lookups(), 1);
    }
}
