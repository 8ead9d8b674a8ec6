// crates/route-core/src/loader/snapshot.rs

//! Binary gazetteer snapshots.
//!
//! A snapshot is the bincode encoding of the record list, gzip-compressed
//! when the file name ends in `.gz`. Loading a snapshot re-runs record
//! validation, so a stale or hand-edited file cannot smuggle bad
//! coordinates past the loader.

use super::common_io;
use crate::error::Result;
use crate::gazetteer::{CityRecord, Gazetteer};
use bincode::Options;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(not(feature = "compact"))]
pub const SNAPSHOT_SUFFIX: &str = "gaz.bin";
#[cfg(feature = "compact")]
pub const SNAPSHOT_SUFFIX: &str = "gaz.bin.gz";

/// Upper bound on a snapshot we are willing to decode.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Gazetteer {
    /// Writes a snapshot of this gazetteer to `path`.
    ///
    /// The write goes to a sibling temp file first and is renamed into
    /// place, so readers never see a half-written snapshot.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let tmp = common_io::get_cache_path(path, "tmp");
        let staged = write_snapshot(&tmp, self.cities())
            .and_then(|()| fs::rename(&tmp, path).map_err(Into::into));
        if let Err(e) = staged {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        debug!("wrote snapshot {} ({} cities)", path.display(), self.len());
        Ok(())
    }

    /// Reads a snapshot written by [`save_as`](Self::save_as).
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = common_io::open_stream(path.as_ref())?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        let records: Vec<CityRecord> = snapshot_options().deserialize(&data)?;
        Self::from_records(records)
    }

    /// Loads `source`, preferring a fresh snapshot next to it.
    ///
    /// When the snapshot is missing, older than the source, or unreadable,
    /// the source is parsed and a new snapshot written. Failing to write
    /// the snapshot is logged and otherwise ignored.
    pub fn load_cached(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache_path = common_io::get_cache_path(source, SNAPSHOT_SUFFIX);

        if is_cache_fresh(source, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(gaz) => {
                    debug!("using snapshot {}", cache_path.display());
                    return Ok(gaz);
                }
                Err(e) => warn!("ignoring snapshot {}: {e}", cache_path.display()),
            }
        }

        let gaz = Self::load_from_path(source)?;
        if let Err(e) = gaz.save_as(&cache_path) {
            warn!("could not write snapshot {}: {e}", cache_path.display());
        }
        Ok(gaz)
    }
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // the source is gone; the snapshot is all we have
        Err(_) => true,
    }
}

fn write_snapshot(path: &Path, records: &[CityRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    if common_io::is_gzip(path) || is_staged_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::{write::GzEncoder, Compression};
            let mut encoder = GzEncoder::new(writer, Compression::default());
            snapshot_options().serialize_into(&mut encoder, records)?;
            // finish() writes the gzip trailer
            writer = encoder.finish()?;
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(crate::error::RouteError::Unsupported(
                "gzip snapshot requested but 'compact' is disabled".into(),
            ));
        }
    } else {
        snapshot_options().serialize_into(&mut writer, records)?;
    }

    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// `foo.gz.tmp` is the staging name of `foo.gz`.
fn is_staged_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "tmp")
        && path.file_stem().is_some_and(|s| Path::new(s).extension().is_some_and(|e| e == "gz"))
}
