// crates/route-core/src/planner.rs

//! # Route Planner
//!
//! Composes the core for one origin/destination pair. The resulting
//! [`RouteReport`] is everything the output side (console, CSV, charts)
//! ever sees.

use crate::error::Result;
use crate::gazetteer::{CityRecord, Gazetteer};
use crate::geo::distance_between;
use crate::resolve::resolve_exact;
use crate::transport::{ModeTable, TransportMode};
use crate::travel::{estimate_times, fastest, rank_ascending, TravelEstimate};
use log::info;
use serde::Serialize;

/// Resolved pair, distance and per-mode estimates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub origin: CityRecord,
    pub destination: CityRecord,
    pub distance_km: f64,
    /// One entry per mode, in table order.
    pub estimates: Vec<TravelEstimate>,
    /// Same entries sorted by duration, quickest first.
    pub ranked: Vec<TravelEstimate>,
    /// Mode index of the quickest estimate.
    pub fastest: usize,
}

impl RouteReport {
    /// The quickest mode.
    pub fn recommended<'a>(&self, modes: &'a ModeTable) -> &'a TransportMode {
        &modes[self.fastest]
    }

    /// `"Origin to Destination"`, the row label used by exports.
    pub fn title(&self) -> String {
        format!("{} to {}", self.origin.name, self.destination.name)
    }
}

/// Builds a report for two already-resolved cities.
///
/// # Examples
/// ```rust
/// use route_core::{plan, CityRecord, ModeTable};
///
/// let tokyo = CityRecord::new("Tokyo", "Japan", 35.6762, 139.6503).unwrap();
/// let osaka = CityRecord::new("Osaka", "Japan", 34.6937, 135.5023).unwrap();
/// let modes = ModeTable::default();
/// let report = plan(&tokyo, &osaka, &modes).unwrap();
///
/// assert_eq!(report.estimates.len(), 5);
/// assert_eq!(report.recommended(&modes).label, "Hyperloop");
/// ```
pub fn plan(origin: &CityRecord, destination: &CityRecord, modes: &ModeTable) -> Result<RouteReport> {
    let distance_km = distance_between(origin, destination);
    let estimates = estimate_times(distance_km, origin, destination, modes)?;
    let ranked = rank_ascending(&estimates);
    // estimate_times yields exactly one entry per mode
    let fastest = fastest(&estimates).unwrap_or_default();

    info!(
        "{origin} -> {destination}: {distance_km} km, quickest by {}",
        modes[fastest].label
    );

    Ok(RouteReport {
        origin: origin.clone(),
        destination: destination.clone(),
        distance_km,
        estimates,
        ranked,
        fastest,
    })
}

/// Resolves both names exactly and plans the route.
///
/// Any miss surfaces as [`RouteError::NotFound`](crate::RouteError::NotFound);
/// suggestions are left to the caller.
pub fn plan_by_name(
    gazetteer: &Gazetteer,
    origin: &str,
    destination: &str,
    modes: &ModeTable,
) -> Result<RouteReport> {
    let o = resolve_exact(origin, gazetteer)?;
    let d = resolve_exact(destination, gazetteer)?;
    plan(o, d, modes)
}
