use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{AnnotatedListing, Listing};
use crate::services::persistence::{KeyValueStore, PersistenceError};
use crate::services::store::ListingStore;

/// Storage key the favorite set is persisted under
const FAVORITES_KEY: &str = "favorite_listings";

/// The set of listings the user has marked as favorites
///
/// Lives independently of the catalog: ids may refer to listings that no
/// longer exist and are simply dropped when joined against the store.
/// Every mutation is flushed to storage before it returns, under the same
/// lock that guards the in-memory set, so a toggle is atomic with respect
/// to its own write.
pub struct FavoriteService {
    storage: Arc<dyn KeyValueStore>,
    ids: Mutex<HashSet<u32>>,
}

impl FavoriteService {
    /// Rehydrate the favorite set from storage
    ///
    /// An absent or unreadable payload yields an empty set; corruption is
    /// logged and recovered from locally, never surfaced to the caller.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let ids = match storage.read(FAVORITES_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<u32>>(&payload) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    tracing::warn!("Stored favorites are unreadable, resetting to empty: {}", e);
                    HashSet::new()
                }
            },
            Ok(None) => HashSet::new(),
            Err(e) => {
                tracing::warn!("Failed to read stored favorites, starting empty: {}", e);
                HashSet::new()
            }
        };

        tracing::debug!("Rehydrated {} favorite listings", ids.len());

        Self {
            storage,
            ids: Mutex::new(ids),
        }
    }

    fn set(&self) -> MutexGuard<'_, HashSet<u32>> {
        self.ids.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Flip membership for a listing id
    ///
    /// Returns the new state (true = now a favorite). The set is persisted
    /// before returning; if the write fails the flip is rolled back so the
    /// in-memory set and storage never diverge.
    pub fn toggle(&self, id: u32) -> Result<bool, PersistenceError> {
        let mut ids = self.set();

        let now_favorite = if ids.contains(&id) {
            ids.remove(&id);
            false
        } else {
            ids.insert(id);
            true
        };

        if let Err(e) = self.persist(&ids) {
            if now_favorite {
                ids.remove(&id);
            } else {
                ids.insert(id);
            }
            return Err(e);
        }

        Ok(now_favorite)
    }

    fn persist(&self, ids: &HashSet<u32>) -> Result<(), PersistenceError> {
        let mut list: Vec<u32> = ids.iter().copied().collect();
        list.sort_unstable();
        let payload = serde_json::to_string(&list)?;
        self.storage.write(FAVORITES_KEY, &payload)
    }

    /// Membership test for a single id
    pub fn is_favorite(&self, id: u32) -> bool {
        self.set().contains(&id)
    }

    /// Snapshot of the current favorite ids
    pub fn ids(&self) -> HashSet<u32> {
        self.set().clone()
    }

    /// Join one listing with its current favorite status
    pub fn annotate(&self, listing: &Listing) -> AnnotatedListing {
        AnnotatedListing {
            is_favorite: self.is_favorite(listing.id),
            listing: listing.clone(),
        }
    }

    /// Join a batch of listings with their favorite status
    ///
    /// Takes the membership snapshot once for the whole batch.
    pub fn annotate_all(&self, listings: Vec<Listing>) -> Vec<AnnotatedListing> {
        let ids = self.set();
        listings
            .into_iter()
            .map(|listing| AnnotatedListing {
                is_favorite: ids.contains(&listing.id),
                listing,
            })
            .collect()
    }

    /// All favorited listings, in catalog order
    ///
    /// Ids with no matching record are silently dropped.
    pub fn list_favorites(&self, store: &ListingStore) -> Vec<AnnotatedListing> {
        let ids = self.set();
        store
            .all()
            .iter()
            .filter(|listing| ids.contains(&listing.id))
            .map(|listing| AnnotatedListing {
                listing: listing.clone(),
                is_favorite: true,
            })
            .collect()
    }
}
