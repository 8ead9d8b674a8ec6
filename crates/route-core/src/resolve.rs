// crates/route-core/src/resolve.rs

//! # Fuzzy Resolver
//!
//! Two pure lookups over a [`Gazetteer`]:
//!
//! - [`resolve_exact`]: trimmed, case-insensitive name equality; first
//!   record in load order wins.
//! - [`suggest`]: the record whose name has the smallest Levenshtein
//!   distance to the trimmed query (case-sensitive), ties to the earliest.
//!
//! Neither function loops, prompts or caches. Confirming a suggestion and
//! re-resolving it is the caller's business.
//!
//! `suggest` is a linear scan costing `O(|query| x total name length)`.
//! That is fine for a few thousand cities; a much larger gazetteer would
//! want an index (BK-tree or similar) instead.

use crate::error::{Result, RouteError};
use crate::gazetteer::{CityRecord, Gazetteer};
use crate::text::{equals_ignore_case, levenshtein, normalize_query};
use log::debug;
use serde::Serialize;

/// Best fuzzy candidate for a query that had no exact match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Suggestion<'a> {
    pub city: &'a CityRecord,
    /// Levenshtein distance between the trimmed query and `city.name`.
    pub distance: usize,
}

/// Outcome of one resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// An exact (case-insensitive) match.
    Resolved(&'a CityRecord),
    /// No exact match; this candidate awaits confirmation by the caller.
    Suggested(Suggestion<'a>),
    /// No exact match and nothing to suggest (empty gazetteer).
    Unknown,
}

/// Exact lookup: first record whose name equals the trimmed query, ignoring case.
///
/// # Examples
/// ```rust
/// use route_core::{resolve_exact, Gazetteer, RawCity};
///
/// let gaz = Gazetteer::from_rows(vec![RawCity::new("France", "Paris", "48.8566", "2.3522")]).unwrap();
/// assert_eq!(resolve_exact("  PARIS ", &gaz).unwrap().country(), "France");
/// assert!(resolve_exact("Pari", &gaz).is_err());
/// ```
pub fn resolve_exact<'a>(query: &str, gazetteer: &'a Gazetteer) -> Result<&'a CityRecord> {
    let q = normalize_query(query);
    gazetteer
        .iter()
        .find(|c| equals_ignore_case(c.name(), q))
        .ok_or_else(|| RouteError::NotFound(q.to_string()))
}

/// Closest name by edit distance. `None` only for an empty gazetteer.
///
/// The comparison is case-sensitive: `"paris"` is one edit away from
/// `"Paris"`, whereas [`resolve_exact`] treats them as equal.
pub fn suggest<'a>(query: &str, gazetteer: &'a Gazetteer) -> Option<Suggestion<'a>> {
    let q = normalize_query(query);
    let mut best: Option<Suggestion<'a>> = None;

    for city in gazetteer {
        let distance = levenshtein(q, city.name());
        // strict `<` keeps the first record on ties
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(Suggestion { city, distance });
            if distance == 0 {
                break;
            }
        }
    }

    if let Some(s) = best {
        debug!("suggest '{q}' -> '{}' (distance {})", s.city, s.distance);
    }
    best
}

/// One step of the resolution protocol: exact match, else a suggestion.
///
/// ```rust
/// use route_core::{resolve, Gazetteer, RawCity, Resolution};
///
/// let gaz = Gazetteer::from_rows(vec![RawCity::new("United Kingdom", "London", "51.5074", "-0.1278")]).unwrap();
/// match resolve("Lodnon", &gaz) {
///     Resolution::Suggested(s) => assert_eq!((s.city.name(), s.distance), ("London", 2)),
///     other => panic!("{other:?}"),
/// }
/// ```
pub fn resolve<'a>(query: &str, gazetteer: &'a Gazetteer) -> Resolution<'a> {
    match resolve_exact(query, gazetteer) {
        Ok(city) => Resolution::Resolved(city),
        Err(_) => match suggest(query, gazetteer) {
            Some(s) => Resolution::Suggested(s),
            None => Resolution::Unknown,
        },
    }
}

impl Gazetteer {
    /// See [`resolve_exact`].
    pub fn resolve_exact(&self, query: &str) -> Result<&CityRecord> {
        resolve_exact(query, self)
    }

    /// See [`suggest`].
    pub fn suggest(&self, query: &str) -> Option<Suggestion<'_>> {
        suggest(query, self)
    }

    /// See [`resolve`].
    pub fn resolve(&self, query: &str) -> Resolution<'_> {
        resolve(query, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawCity;

    fn gazetteer() -> Gazetteer {
        Gazetteer::from_rows(vec![
            RawCity::new("United Kingdom", "London", "51.5074", "-0.1278"),
            RawCity::new("France", "Paris", "48.8566", "2.3522"),
            RawCity::new("United States", "Paris", "33.6609", "-95.5555"),
            RawCity::new("Canada", "London", "42.9849", "-81.2453"),
            RawCity::new("Germany", "Berlin", "52.52", "13.405"),
            RawCity::new("Japan", "Tokyo", "35.6762", "139.6503"),
        ])
        .unwrap()
    }

    #[test]
    fn exact_is_case_insensitive_and_trimmed() {
        let gaz = gazetteer();
        let upper = resolve_exact("PARIS", &gaz).unwrap();
        let lower = resolve_exact("  paris\n", &gaz).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.country(), "France");
    }

    #[test]
    fn exact_first_match_wins_for_duplicates() {
        let gaz = gazetteer();
        assert_eq!(resolve_exact("london", &gaz).unwrap().country(), "United Kingdom");
    }

    #[test]
    fn exact_miss_reports_trimmed_query() {
        let gaz = gazetteer();
        match resolve_exact("  Atlantis ", &gaz) {
            Err(RouteError::NotFound(q)) => assert_eq!(q, "Atlantis"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn suggest_finds_near_miss() {
        let gaz = gazetteer();
        let s = suggest("Lodnon", &gaz).unwrap();
        assert_eq!(s.city.name(), "London");
        assert_eq!(s.city.country(), "United Kingdom");
        assert_eq!(s.distance, 2);
    }

    #[test]
    fn suggest_is_case_sensitive() {
        let gaz = gazetteer();
        let s = suggest("tokyo", &gaz).unwrap();
        assert_eq!(s.city.name(), "Tokyo");
        assert_eq!(s.distance, 1);
    }

    #[test]
    fn suggest_ties_go_to_first_record() {
        let gaz = Gazetteer::from_rows(vec![
            RawCity::new("A", "Bath", "51.38", "-2.36"),
            RawCity::new("B", "Bach", "0", "0"),
        ])
        .unwrap();
        // "Bawh" is one edit from both
        let s = suggest("Bawh", &gaz).unwrap();
        assert_eq!(s.city.country(), "A");
        assert_eq!(s.distance, 1);
    }

    #[test]
    fn suggest_on_empty_gazetteer() {
        assert!(suggest("London", &Gazetteer::default()).is_none());
        assert_eq!(resolve("London", &Gazetteer::default()), Resolution::Unknown);
    }

    #[test]
    fn resolve_prefers_exact() {
        let gaz = gazetteer();
        assert!(matches!(resolve("berlin", &gaz), Resolution::Resolved(c) if c.name() == "Berlin"));
        assert!(matches!(resolve("Berlim", &gaz), Resolution::Suggested(s) if s.distance == 1));
    }

    #[test]
    fn confirmed_suggestion_resolves_exactly() {
        let gaz = gazetteer();
        let s = suggest("Berln", &gaz).unwrap();
        let city = resolve_exact(s.city.name(), &gaz).unwrap();
        assert_eq!(city, s.city);
    }
}
