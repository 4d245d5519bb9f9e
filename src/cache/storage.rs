use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::CACHE_TTL_HOURS;
use crate::core::{MarketError, MarketResult};
use crate::listings::types::{ContentType, Listing};
use crate::logger::{self, LogTag};

/// Serialized cache envelope: the payload plus its write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Vec<Listing>,
    pub timestamp: DateTime<Utc>,
}

/// Namespaced key-value cache for listing snapshots, one entry per
/// vertical, stored as JSON under an injected directory.
///
/// Read and write failures are logged and treated as cache misses; this
/// layer never panics or returns an error to callers.
pub struct ListingCache {
    dir: PathBuf,
    ttl: Duration,
}

impl ListingCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_ttl(dir, Duration::hours(CACHE_TTL_HOURS))
    }

    pub fn with_ttl(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// Cached listings for the vertical, or `None` on absence, expiry, or
    /// any read failure.
    pub fn get(&self, content_type: ContentType) -> Option<Vec<Listing>> {
        match self.read_entry(content_type) {
            Ok(Some(entry)) if !self.is_expired(&entry) => Some(entry.data),
            Ok(Some(_)) => {
                logger::debug(
                    LogTag::Cache,
                    &format!("entry for {} expired", content_type),
                );
                None
            }
            Ok(None) => None,
            Err(err) => {
                logger::warning(
                    LogTag::Cache,
                    &format!("read for {} failed, treating as miss: {}", content_type, err),
                );
                None
            }
        }
    }

    /// Best-effort write; failures are logged and swallowed.
    pub fn put(&self, content_type: ContentType, listings: &[Listing]) {
        if let Err(err) = self.write_entry(content_type, listings) {
            logger::warning(
                LogTag::Cache,
                &format!("write for {} failed: {}", content_type, err),
            );
        }
    }

    /// Drop the vertical's entry; a missing entry is not an error.
    pub fn clear(&self, content_type: ContentType) {
        let path = self.path_for(content_type);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                logger::warning(
                    LogTag::Cache,
                    &format!("clear for {} failed: {}", content_type, err),
                );
            }
        }
    }

    fn path_for(&self, content_type: ContentType) -> PathBuf {
        self.dir
            .join(format!("listings-{}.json", content_type.as_str()))
    }

    fn read_entry(&self, content_type: ContentType) -> MarketResult<Option<CacheEntry>> {
        let path = self.path_for(content_type);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|err| io_error(&path, err))?;
        let entry: CacheEntry = serde_json::from_str(&raw)?;
        Ok(Some(entry))
    }

    fn write_entry(&self, content_type: ContentType, listings: &[Listing]) -> MarketResult<()> {
        fs::create_dir_all(&self.dir).map_err(|err| io_error(&self.dir, err))?;
        let entry = CacheEntry {
            data: listings.to_vec(),
            timestamp: Utc::now(),
        };
        let raw = serde_json::to_string(&entry)?;
        let path = self.path_for(content_type);
        fs::write(&path, raw).map_err(|err| io_error(&path, err))?;
        Ok(())
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        Utc::now().signed_duration_since(entry.timestamp) > self.ttl
    }
}

fn io_error(path: &Path, err: std::io::Error) -> MarketError {
    MarketError::Cache(format!("{}: {}", path.display(), err))
}
