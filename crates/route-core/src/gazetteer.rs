// crates/route-core/src/gazetteer.rs

//! # Gazetteer
//!
//! The immutable, ordered table of cities every lookup runs against.
//! Records are validated once on the way in; after that the table is only
//! ever read. Load order is preserved because it decides which record wins
//! when a name exists in several countries.

use crate::common::GazetteerStats;
use crate::error::{Result, RouteError};
use crate::raw::RawCity;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single named place with its country and coordinates (degrees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    /// Builds a record, checking that the coordinates are finite and in range.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RouteError::InvalidRecord("city name is empty".into()));
        }
        check_coordinate("latitude", latitude, 90.0)?;
        check_coordinate("longitude", longitude, 180.0)?;
        Ok(Self {
            name,
            country: country.into(),
            latitude,
            longitude,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// `(latitude, longitude)` in degrees.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Whether both records lie in the same country (exact, case-sensitive).
    pub fn same_country(&self, other: &CityRecord) -> bool {
        self.country == other.country
    }
}

impl std::fmt::Display for CityRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

fn check_coordinate(label: &str, value: f64, limit: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RouteError::InvalidRecord(format!("{label} is not a finite number")));
    }
    if !(-limit..=limit).contains(&value) {
        return Err(RouteError::InvalidRecord(format!(
            "{label} {value} is outside [-{limit}, {limit}]"
        )));
    }
    Ok(())
}

/// Attaches the 1-based row to a record validation failure.
fn at_row(row: usize) -> impl Fn(RouteError) -> RouteError {
    move |err| match err {
        RouteError::InvalidRecord(reason) => RouteError::MalformedRecord { row, reason },
        other => other,
    }
}

fn parse_coordinate(label: &str, text: &str) -> std::result::Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| format!("{label} '{text}' is not a number"))
}

/// Ordered, read-only city table.
///
/// Only built through [`from_rows`](Self::from_rows) or
/// [`from_records`](Self::from_records), both of which validate every record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Gazetteer {
    cities: Vec<CityRecord>,
}

impl Gazetteer {
    /// Builds a gazetteer from raw rows, in order.
    ///
    /// Fails on the first malformed row; nothing is returned for a partial
    /// load. `row` in the error is 1-based.
    ///
    /// # Examples
    /// ```rust
    /// use route_core::{Gazetteer, RawCity};
    ///
    /// let gaz = Gazetteer::from_rows(vec![
    ///     RawCity::new("France", "Paris", "48.8566", "2.3522"),
    ///     RawCity::new("Germany", "Berlin", "52.52", "13.405"),
    /// ])
    /// .unwrap();
    /// assert_eq!(gaz.len(), 2);
    ///
    /// let bad = Gazetteer::from_rows(vec![RawCity::new("X", "Y", "north", "0")]);
    /// assert!(bad.is_err());
    /// ```
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawCity>,
    {
        let mut cities = Vec::new();
        for (idx, raw) in rows.into_iter().enumerate() {
            let row = idx + 1;
            let malformed = |reason: String| RouteError::MalformedRecord { row, reason };

            let latitude = parse_coordinate("latitude", &raw.latitude).map_err(malformed)?;
            let longitude = parse_coordinate("longitude", &raw.longitude).map_err(malformed)?;
            let record = CityRecord::new(raw.name.trim(), raw.country.trim(), latitude, longitude)
                .map_err(at_row(row))?;
            cities.push(record);
        }
        Ok(Self { cities })
    }

    /// Builds a gazetteer from already-typed records, re-checking each one.
    pub fn from_records(records: Vec<CityRecord>) -> Result<Self> {
        for (idx, r) in records.iter().enumerate() {
            CityRecord::new(r.name.as_str(), r.country.as_str(), r.latitude, r.longitude)
                .map_err(at_row(idx + 1))?;
        }
        Ok(Self { cities: records })
    }

    /// All records, in load order.
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CityRecord> {
        self.cities.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CityRecord> {
        self.cities.get(index)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Looks a record up by its identifying `(name, country)` pair.
    pub fn find(&self, name: &str, country: &str) -> Option<&CityRecord> {
        self.cities
            .iter()
            .find(|c| c.name == name && c.country == country)
    }

    pub fn stats(&self) -> GazetteerStats {
        let countries: HashSet<&str> = self.cities.iter().map(|c| c.country.as_str()).collect();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        for c in &self.cities {
            *by_name.entry(c.name.to_lowercase()).or_default() += 1;
        }
        GazetteerStats {
            cities: self.cities.len(),
            countries: countries.len(),
            ambiguous_names: by_name.values().filter(|&&n| n > 1).count(),
        }
    }
}

impl<'a> IntoIterator for &'a Gazetteer {
    type Item = &'a CityRecord;
    type IntoIter = std::slice::Iter<'a, CityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}
