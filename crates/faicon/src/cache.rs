//! Remembering which symbols were already defined.

use std::path::{Path, PathBuf};

use ecow::EcoString;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Maps resolved icon paths to the ids of the `<symbol>`s defining them.
///
/// Entries are only ever added. An icon that is present has had its
/// definition emitted, so later uses only need a reference to it.
#[derive(Debug, Default)]
pub struct SymbolCache {
    entries: Mutex<FxHashMap<PathBuf, EcoString>>,
}

/// The outcome of [`SymbolCache::get_or_try_insert_with`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Entry<T> {
    /// The path was already present, with this id.
    Cached(EcoString),
    /// The path was inserted with this id. Holds the value produced while
    /// inserting.
    Inserted(EcoString, T),
}

impl<T> Entry<T> {
    /// The symbol id, regardless of whether it was just inserted.
    pub fn id(&self) -> &EcoString {
        match self {
            Self::Cached(id) | Self::Inserted(id, _) => id,
        }
    }
}

impl SymbolCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol id registered for the path, if any.
    pub fn get(&self, path: &Path) -> Option<EcoString> {
        self.entries.lock().get(path).cloned()
    }

    /// The number of registered symbols.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether no symbol was registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Looks up the path. If it is absent, calls `f` to produce the symbol id
    /// and an accompanying value, and registers the id if `f` succeeds.
    ///
    /// The cache stays locked while `f` runs, so concurrent callers asking for
    /// the same path observe exactly one insertion. `f` must not access the
    /// cache itself.
    pub fn get_or_try_insert_with<T, E>(
        &self,
        path: &Path,
        f: impl FnOnce() -> Result<(EcoString, T), E>,
    ) -> Result<Entry<T>, E> {
        let mut entries = self.entries.lock();
        if let Some(id) = entries.get(path) {
            return Ok(Entry::Cached(id.clone()));
        }

        let (id, value) = f()?;
        entries.insert(path.to_path_buf(), id.clone());
        Ok(Entry::Inserted(id, value))
    }
}
