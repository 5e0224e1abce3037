//! Shared access to the current catalog.
//!
//! Readers take a [`snapshot`](Library::snapshot) and query it for as long as
//! they like. [`reload`](Library::reload) builds a complete new catalog first
//! and then swaps it in, so a rebuild never becomes visible halfway and never
//! changes a catalog someone is still reading.

use crate::catalog::Catalog;
use crate::track::TrackRecord;
use log::info;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
pub struct Library {
    current: RwLock<Arc<Catalog>>,
}

impl Library {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Builds the first catalog from `records`.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TrackRecord>,
    {
        Self::new(Catalog::build(records))
    }

    /// The catalog as of now. Later reloads do not affect it.
    pub fn snapshot(&self) -> Arc<Catalog> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replaces the catalog with one built from `records`.
    ///
    /// The normalizer carries over, so keys already derived stay memoized.
    pub fn reload<I>(&self, records: I)
    where
        I: IntoIterator<Item = TrackRecord>,
    {
        let normalizer = Arc::clone(self.snapshot().normalizer());
        let catalog = Arc::new(Catalog::build_with(records, normalizer));
        info!("Reloaded the catalog with {} tracks", catalog.len());

        match self.current.write() {
            Ok(mut guard) => *guard = catalog,
            Err(poisoned) => *poisoned.into_inner() = catalog,
        }
    }
}
