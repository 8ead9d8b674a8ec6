// crates/route-cli/src/export.rs

//! # CSV Export
//!
//! Writes `RE_Calculations.csv`: one row per city pair with the recommended
//! mode and every mode's estimate.

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use route_core::{plan_by_name, Gazetteer, ModeTable, RouteReport};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const EXPORT_FILENAME: &str = "RE_Calculations.csv";

/// The batch exported when no pairs file is given.
pub const PRESET_PAIRS: [(&str, &str); 10] = [
    ("Tokyo", "Damascus"),
    ("Beijing", "Moscow"),
    ("Cairo", "Bangkok"),
    ("Mexico City", "New York"),
    ("Seoul", "Istanbul"),
    ("Paris", "Berlin"),
    ("London", "Guangzhou"),
    ("Hong Kong", "Chicago"),
    ("Sydney", "Melbourne"),
    ("Athens", "Darwin"),
];

#[derive(Debug, Deserialize)]
struct PairRow {
    origin: String,
    destination: String,
}

/// Reads `origin,destination` rows (with header).
pub fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening pairs file {}", path.display()))?;

    reader
        .deserialize::<PairRow>()
        .enumerate()
        .map(|(idx, row)| {
            let row = row.with_context(|| format!("{} row {}", path.display(), idx + 1))?;
            Ok((row.origin, row.destination))
        })
        .collect()
}

/// Plans every pair by exact name. A name without an exact match fails the
/// whole export; suggestions are never applied in batch.
pub fn plan_pairs<S: AsRef<str>>(
    pairs: &[(S, S)],
    gazetteer: &Gazetteer,
    modes: &ModeTable,
) -> Result<Vec<RouteReport>> {
    pairs
        .iter()
        .map(|(o, d)| {
            let (o, d) = (o.as_ref(), d.as_ref());
            plan_by_name(gazetteer, o, d, modes).with_context(|| format!("planning {o} to {d}"))
        })
        .collect()
}

/// Writes the reports to `<dir>/RE_Calculations.csv` and returns that path.
///
/// Fails when `dir` is not an existing directory, or when the file exists
/// and `force` is off.
pub fn write_reports(
    dir: &Path,
    force: bool,
    reports: &[RouteReport],
    modes: &ModeTable,
) -> Result<PathBuf> {
    if !dir.is_dir() {
        bail!("invalid directory: {}", dir.display());
    }
    let path = dir.join(EXPORT_FILENAME);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let mut writer = WriterBuilder::new()
        .from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec![
        "Origin to Destination".to_string(),
        "Recommended travel".to_string(),
    ];
    header.extend(modes.labels().map(|l| format!("Via {l}")));
    writer.write_record(&header)?;

    for report in reports {
        let mut row = vec![report.title(), report.recommended(modes).label.clone()];
        row.extend(report.estimates.iter().map(ToString::to_string));
        writer.write_record(&row)?;
    }
    writer.flush()?;

    info!("wrote {} rows to {}", reports.len(), path.display());
    Ok(path)
}

/// Convenience wrapper used by the `export` subcommand.
pub fn export(
    dir: &Path,
    force: bool,
    pairs_file: Option<&Path>,
    gazetteer: &Gazetteer,
    modes: &ModeTable,
) -> Result<PathBuf> {
    // check the target before doing any planning
    if !dir.is_dir() {
        bail!("invalid directory: {}", dir.display());
    }
    let reports = match pairs_file {
        Some(p) => plan_pairs(&read_pairs(p)?, gazetteer, modes)?,
        None => plan_pairs(&PRESET_PAIRS, gazetteer, modes)?,
    };
    write_reports(dir, force, &reports, modes)
}
