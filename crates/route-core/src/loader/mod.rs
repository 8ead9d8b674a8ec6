// crates/route-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip) and delegates to the row
//! readers in [`tabular`] and the snapshot codec in [`snapshot`]. Every
//! path ends in [`Gazetteer::from_rows`] or [`ModeTable::from_rows`], so
//! validation is the same whatever the source format.

use crate::error::{Result, RouteError};
use crate::gazetteer::Gazetteer;
use crate::transport::ModeTable;
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod snapshot;
pub mod tabular;

pub use snapshot::SNAPSHOT_SUFFIX;

static GAZETTEER_CACHE: OnceCell<Gazetteer> = OnceCell::new();
static MODE_CACHE: OnceCell<ModeTable> = OnceCell::new();

/// Directory holding the bundled `cities.csv` and `modes.csv`.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

impl Gazetteer {
    pub fn default_dataset_filename() -> &'static str {
        "cities.csv"
    }

    /// The bundled gazetteer, parsed once per process.
    pub fn load() -> Result<&'static Gazetteer> {
        GAZETTEER_CACHE.get_or_try_init(|| {
            Self::load_from_path(default_data_dir().join(Self::default_dataset_filename()))
        })
    }

    /// Loads a gazetteer, picking the reader from the file extension
    /// (`.csv`, `.json`, `.bin`, any of them optionally `.gz`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let gaz = match common_io::source_extension(path).as_deref() {
            Some("csv") => Self::load_csv(path),
            Some("json") => Self::load_json(path),
            Some("bin") => Self::load_binary_file(path),
            other => Err(RouteError::Unsupported(format!(
                "{}: unknown gazetteer format {:?}",
                path.display(),
                other.unwrap_or("")
            ))),
        }?;
        info!("loaded {} cities from {}", gaz.len(), path.display());
        Ok(gaz)
    }

    /// CSV with header `country,city,latitude,longitude`.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        #[cfg(feature = "csv")]
        {
            let reader = common_io::open_stream(path.as_ref())?;
            Self::from_rows(tabular::read_csv_rows(reader)?)
        }
        #[cfg(not(feature = "csv"))]
        {
            Err(RouteError::Unsupported(format!(
                "{}: CSV support needs the 'csv' feature",
                path.as_ref().display()
            )))
        }
    }

    /// JSON array of `{country, name, latitude, longitude}` objects.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        #[cfg(feature = "json")]
        {
            let reader = common_io::open_stream(path.as_ref())?;
            Self::from_rows(tabular::read_json_rows(reader)?)
        }
        #[cfg(not(feature = "json"))]
        {
            Err(RouteError::Unsupported(format!(
                "{}: JSON support needs the 'json' feature",
                path.as_ref().display()
            )))
        }
    }
}

impl ModeTable {
    pub fn default_modes_filename() -> &'static str {
        "modes.csv"
    }

    /// The bundled mode table, parsed once per process.
    pub fn load() -> Result<&'static ModeTable> {
        MODE_CACHE.get_or_try_init(|| {
            Self::load_csv(default_data_dir().join(Self::default_modes_filename()))
        })
    }

    /// CSV with header `mode,speed`, exactly five rows in table order.
    ///
    /// Any problem with the file's rows is a configuration error.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        #[cfg(feature = "csv")]
        {
            let reader = common_io::open_stream(path.as_ref())?;
            let rows = tabular::read_csv_rows(reader).map_err(|e| match e {
                RouteError::MalformedRecord { row, reason } => {
                    RouteError::Configuration(format!("mode table row {row}: {reason}"))
                }
                other => other,
            })?;
            Self::from_rows(rows)
        }
        #[cfg(not(feature = "csv"))]
        {
            Err(RouteError::Unsupported(format!(
                "{}: CSV support needs the 'csv' feature",
                path.as_ref().display()
            )))
        }
    }
}
