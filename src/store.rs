// src/store.rs
//
// Process-wide handle to the loaded results. Readers take an `Arc`
// snapshot; a reload builds the whole new set first and then swaps the
// reference, so nobody ever sees a half-loaded dataset.

use std::sync::{Arc, RwLock};

use crate::{
    config::options::SourceKind,
    error::LoadError,
    model::ResultSet,
    progress::Progress,
    source::{open_source, DataSource},
};

#[derive(Debug, Default)]
pub struct ResultStore {
    current: RwLock<Arc<ResultSet>>,
}

impl ResultStore {
    pub fn new(results: ResultSet) -> Self {
        Self { current: RwLock::new(results.into_shared()) }
    }

    /// Load once; fails with no store if the source fails.
    pub fn open(source: &dyn DataSource, progress: Option<&mut dyn Progress>) -> Result<Self, LoadError> {
        let results = source.load(progress)?;
        logf!("Store: loaded {} result(s) from {}", results.len(), source.describe());
        Ok(Self::new(results))
    }

    /// `open` from a path or URL, picking the loader with [`open_source`].
    pub fn open_location(
        location: &str,
        kind: SourceKind,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Self, LoadError> {
        let source = open_source(location, kind);
        Self::open(source.as_ref(), progress).inspect_err(|e| {
            loge!("Store: load from {} failed: {}", source.describe(), e);
        })
    }

    /// Cheap read-only handle to the current set.
    pub fn snapshot(&self) -> Arc<ResultSet> {
        // A poisoned lock still holds a complete Arc; keep serving it.
        match self.current.read() {
            Ok(g) => Arc::clone(&g),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Swap in a new set, returning the previous one.
    pub fn replace(&self, results: ResultSet) -> Arc<ResultSet> {
        self.swap(results.into_shared())
    }

    fn swap(&self, next: Arc<ResultSet>) -> Arc<ResultSet> {
        let mut g = match self.current.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *g, next)
    }

    /// Load from `source` and swap on success, returning the set that was
    /// swapped in. On failure the current set stays in place and the error
    /// is returned.
    pub fn reload(
        &self,
        source: &dyn DataSource,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Arc<ResultSet>, LoadError> {
        match source.load(progress) {
            Ok(results) => {
                logf!("Store: reloaded {} result(s) from {}", results.len(), source.describe());
                let next = results.into_shared();
                self.swap(Arc::clone(&next));
                Ok(next)
            }
            Err(e) => {
                loge!("Store: reload from {} failed: {}", source.describe(), e);
                Err(e)
            }
        }
    }
}
