use std::fs;
use std::path::{Path, PathBuf};

use super::hilbert::{self, GridPath};
use crate::foundation::error::{SonogridError, SonogridResult};

/// On-disk store for computed Hilbert paths, keyed by grid size.
///
/// Each entry is a JSON array of `[x, y]` pairs at `<root>/path<N>.json`.
#[derive(Clone, Debug)]
pub struct PathCache {
    root: PathBuf,
}

impl PathCache {
    /// Cache rooted at `root`. The directory is created lazily on first store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default cache location in the working directory.
    pub fn default_root() -> PathBuf {
        PathBuf::from("sonogrid-cache")
    }

    fn entry_path(&self, size: u32) -> PathBuf {
        self.root.join(format!("path{size}.json"))
    }

    /// Load a previously stored path for `size`.
    ///
    /// Any read problem is treated as a miss: an absent entry, an unreadable
    /// file, malformed JSON, or a point set that fails path validation. Misses
    /// other than "absent" are logged so a corrupt cache is visible.
    pub fn load(&self, size: u32) -> Option<GridPath> {
        let entry = self.entry_path(size);
        let bytes = match fs::read(&entry) {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        entry = %entry.display(),
                        %err,
                        "unreadable path cache entry, regenerating"
                    );
                }
                return None;
            }
        };
        let points: Vec<(u32, u32)> = match serde_json::from_slice(&bytes) {
            Ok(points) => points,
            Err(err) => {
                tracing::warn!(
                    entry = %entry.display(),
                    %err,
                    "corrupt path cache entry, regenerating"
                );
                return None;
            }
        };
        match GridPath::from_points(size, points) {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!(
                    entry = %entry.display(),
                    %err,
                    "invalid path cache entry, regenerating"
                );
                None
            }
        }
    }

    /// Persist `path` under its grid size key.
    ///
    /// Creates the cache directory if needed; a plain file occupying the root
    /// location is removed first. The entry is written to a temp file and
    /// renamed into place so a concurrent reader never observes a partial
    /// write. Failures come back as [`SonogridError::CacheWrite`].
    pub fn store(&self, path: &GridPath) -> SonogridResult<()> {
        if self.root.exists() && !self.root.is_dir() {
            fs::remove_file(&self.root).map_err(|e| {
                SonogridError::cache_write(format!(
                    "cannot clear non-directory cache root '{}': {e}",
                    self.root.display()
                ))
            })?;
        }
        fs::create_dir_all(&self.root).map_err(|e| {
            SonogridError::cache_write(format!(
                "cannot create cache directory '{}': {e}",
                self.root.display()
            ))
        })?;

        let entry = self.entry_path(path.size());
        let tmp = entry.with_extension("json.tmp");
        let json = serde_json::to_vec(path.points()).map_err(|e| {
            SonogridError::cache_write(format!("cannot serialize path for cache: {e}"))
        })?;
        fs::write(&tmp, json).map_err(|e| {
            SonogridError::cache_write(format!("cannot write '{}': {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &entry).map_err(|e| {
            SonogridError::cache_write(format!("cannot publish '{}': {e}", entry.display()))
        })
    }

    /// Root directory this cache writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Hands out the traversal for a grid size.
///
/// Owned by the top-level driver and passed by reference into the pipeline,
/// so tests can inject a synthetic cache location and no global path state
/// exists. A failed store is reported and the freshly computed path is still
/// returned: a cache problem never blocks the run.
#[derive(Clone, Debug)]
pub struct PathProvider {
    cache: PathCache,
}

impl PathProvider {
    /// Provider backed by `cache`.
    pub fn new(cache: PathCache) -> Self {
        Self { cache }
    }

    /// Provider backed by the default cache location.
    pub fn with_default_cache() -> Self {
        Self::new(PathCache::new(PathCache::default_root()))
    }

    /// Load the path for `size`, generating and persisting it on a miss.
    #[tracing::instrument(skip(self))]
    pub fn obtain(&self, size: u32) -> SonogridResult<GridPath> {
        if let Some(path) = self.cache.load(size) {
            tracing::info!(size, "loaded hilbert path from cache");
            return Ok(path);
        }

        tracing::info!(size, "computing hilbert path (one-time cost per grid size)");
        let path = hilbert::hilbert_path(size)?;
        if let Err(err) = self.cache.store(&path) {
            tracing::warn!(%err, "failed to persist hilbert path; next run will recompute it");
        }
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/cache.rs"]
mod tests;
