use anyhow::{Context, Result};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stored value plus the fingerprint of the data it was computed from
#[derive(Debug, Serialize, Deserialize)]
struct Entry<F, T> {
    fingerprint: F,
    data: T,
}

/// File-based cache of computed reports.
///
/// Entries carry a fingerprint; a lookup with a different fingerprint misses,
/// so changed input data always gets recomputed.
pub struct Cache {
    cache_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;
        Ok(Self { cache_dir })
    }

    /// Save data under `key`, tagged with `fingerprint`
    pub fn save<T: Serialize>(&self, key: &str, fingerprint: &str, data: &T) -> Result<()> {
        let file_path = self.build_path(key);
        let entry = Entry {
            fingerprint,
            data,
        };

        let json = serde_json::to_string(&entry).context("Failed to serialize data")?;
        // Write then rename so readers never see a partial file; one temp file per writer
        let temp_path = file_path.with_extension(format!(
            "json.{}.{}.tmp",
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&temp_path, json).context("Failed to write cache file")?;
        if let Err(e) = fs::rename(&temp_path, &file_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e).context("Failed to replace cache file");
        }

        info!("Saved data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load data for `key` if it was stored with the same fingerprint
    pub fn load<T: DeserializeOwned>(&self, key: &str, fingerprint: &str) -> Result<Option<T>> {
        let file_path = self.build_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).context("Failed to read cache file")?;
        let entry: Entry<String, T> = match serde_json::from_str(&json) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Ignoring unreadable cache file {}: {}", file_path.display(), e);
                return Ok(None);
            }
        };

        if entry.fingerprint != fingerprint {
            debug!("Cache entry {} is stale", key);
            return Ok(None);
        }

        debug!("Loaded data from cache: {}", file_path.display());
        Ok(Some(entry.data))
    }

    fn build_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Keys contain source paths; map them to one safe file name.
///
/// Alphanumerics and `-` pass through, every other byte becomes `_xx` hex,
/// so distinct keys never share a file.
fn sanitize_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            name.push(byte as char);
        } else {
            name.push_str(&format!("_{:02x}", byte));
        }
    }
    name
}
