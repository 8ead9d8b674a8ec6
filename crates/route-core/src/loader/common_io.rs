// crates/route-core/src/loader/common_io.rs
use crate::error::{Result, RouteError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Whether the file name ends in `.gz`.
pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        RouteError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot open {}: {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(RouteError::Unsupported(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Extension of the source once a trailing `.gz` is ignored, lowercased.
pub fn source_extension(path: &Path) -> Option<String> {
    let inner: &Path = if is_gzip(path) {
        path.file_stem().map(Path::new)?
    } else {
        path
    };
    inner
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

/// Snapshot path next to a source file: `cities.csv` -> `cities.csv.<suffix>`.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "gazetteer".to_string());
    source.with_file_name(format!("{filename}.{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_ignores_gz() {
        assert_eq!(source_extension(Path::new("a/cities.csv")).as_deref(), Some("csv"));
        assert_eq!(source_extension(Path::new("a/cities.JSON.gz")).as_deref(), Some("json"));
        assert_eq!(source_extension(Path::new("a/cities.gaz.bin.gz")).as_deref(), Some("bin"));
        assert_eq!(source_extension(Path::new("cities")), None);
    }

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/data/cities.csv"), "gaz.bin");
        assert_eq!(p, PathBuf::from("/data/cities.csv.gaz.bin"));
    }
}
