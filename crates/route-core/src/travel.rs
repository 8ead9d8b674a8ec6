// crates/route-core/src/travel.rs

//! # Travel-Time Model
//!
//! Turns a great-circle distance into one [`TravelEstimate`] per mode.
//! Base time is `distance / speed`; each mode's [`AdjustmentKind`] then
//! reshapes it:
//!
//! - Hyperloop: `t * (5.84 / (1.26 t - 1.02) + 1.2017)`
//! - Air: `t + 120` domestic, `t + 180` international
//! - RailClass: `t * (30 / (0.9888 t - 1.402) + 1.2987)`
//! - Ground: `t * 1.35`
//!
//! The two curves have a pole at small `t`. Distances that put any mode on
//! or below its pole fail with [`RouteError::DegenerateDistance`] instead of
//! producing negative or non-finite times.

use crate::error::{Result, RouteError};
use crate::gazetteer::CityRecord;
use crate::transport::{
    AdjustmentKind, ModeTable, OverheadCurve, TransportMode, AIR_DOMESTIC_OVERHEAD_MIN,
    AIR_INTERNATIONAL_OVERHEAD_MIN, GROUND_FACTOR,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Travel time for one mode, split into whole hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelEstimate {
    /// Position of the mode in the [`ModeTable`].
    pub mode_index: usize,
    pub hours: u32,
    /// Always in `0..=59`.
    pub minutes: u32,
}

impl TravelEstimate {
    /// Splits adjusted minutes into `hours = floor(t / 60)` and
    /// `minutes = round(t mod 60)`, carrying a rounded 60 into the hours.
    pub fn from_minutes(mode_index: usize, total: f64) -> Self {
        let mut hours = (total / 60.0).floor() as u32;
        let mut minutes = (total % 60.0).round() as u32;
        if minutes == 60 {
            hours += 1;
            minutes = 0;
        }
        Self {
            mode_index,
            hours,
            minutes,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Duration in fractional hours, as charts plot it.
    pub fn decimal_hours(&self) -> f64 {
        f64::from(self.total_minutes()) / 60.0
    }
}

impl fmt::Display for TravelEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h.{}m.", self.hours, self.minutes)
    }
}

/// Adjusted travel time in minutes for a single mode.
pub fn adjusted_minutes(
    mode: &TransportMode,
    distance_km: f64,
    origin: &CityRecord,
    destination: &CityRecord,
) -> Result<f64> {
    let base = mode.base_minutes(distance_km);
    let degenerate = || RouteError::DegenerateDistance {
        mode: mode.label.clone(),
        distance_km,
    };

    let adjusted = match mode.adjustment {
        AdjustmentKind::Hyperloop => OverheadCurve::HYPERLOOP.apply(base).ok_or_else(degenerate)?,
        AdjustmentKind::RailClass => OverheadCurve::RAIL.apply(base).ok_or_else(degenerate)?,
        AdjustmentKind::Air => {
            if origin.same_country(destination) {
                base + AIR_DOMESTIC_OVERHEAD_MIN
            } else {
                base + AIR_INTERNATIONAL_OVERHEAD_MIN
            }
        }
        AdjustmentKind::Ground => base * GROUND_FACTOR,
    };

    if !adjusted.is_finite() || adjusted < 0.0 {
        return Err(degenerate());
    }
    Ok(adjusted)
}

/// One estimate per mode, in table order.
///
/// # Errors
/// [`RouteError::DegenerateDistance`] when the distance is negative, not
/// finite, or too short for one of the curves (see
/// [`ModeTable::min_distance_km`]).
///
/// # Examples
/// ```rust
/// use route_core::{estimate_times, CityRecord, ModeTable};
///
/// let london = CityRecord::new("London", "UK", 51.5074, -0.1278).unwrap();
/// let paris = CityRecord::new("Paris", "France", 48.8566, 2.3522).unwrap();
/// let times = estimate_times(343.56, &london, &paris, &ModeTable::default()).unwrap();
///
/// assert_eq!(times.len(), 5);
/// assert_eq!(times[1].to_string(), "3h.23m."); // 22.9 min flight + 180
/// ```
pub fn estimate_times(
    distance_km: f64,
    origin: &CityRecord,
    destination: &CityRecord,
    modes: &ModeTable,
) -> Result<Vec<TravelEstimate>> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(RouteError::DegenerateDistance {
            mode: "any".into(),
            distance_km,
        });
    }

    modes
        .modes()
        .iter()
        .enumerate()
        .map(|(idx, mode)| {
            let minutes = adjusted_minutes(mode, distance_km, origin, destination)?;
            debug!("{}: {:.2} min over {distance_km} km", mode.label, minutes);
            Ok(TravelEstimate::from_minutes(idx, minutes))
        })
        .collect()
}

/// Mode index of the quickest estimate; ties go to the earlier mode.
///
/// `None` for an empty slice.
pub fn fastest(estimates: &[TravelEstimate]) -> Option<usize> {
    estimates
        .iter()
        .fold(None, |best: Option<&TravelEstimate>, e| match best {
            Some(b) if b.total_minutes() <= e.total_minutes() => Some(b),
            _ => Some(e),
        })
        .map(|e| e.mode_index)
}

/// Estimates sorted by total minutes, ascending. The sort is stable and each
/// entry keeps its `mode_index`, so labels and icons can be looked up again.
pub fn rank_ascending(estimates: &[TravelEstimate]) -> Vec<TravelEstimate> {
    let mut ranked = estimates.to_vec();
    ranked.sort_by_key(TravelEstimate::total_minutes);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, country: &str, lat: f64, lng: f64) -> CityRecord {
        CityRecord::new(name, country, lat, lng).unwrap()
    }

    fn london() -> CityRecord {
        city("London", "UK", 51.5074, -0.1278)
    }

    fn paris() -> CityRecord {
        city("Paris", "France", 48.8566, 2.3522)
    }

    fn manchester() -> CityRecord {
        city("Manchester", "UK", 53.4808, -2.2426)
    }

    fn est(mode_index: usize, hours: u32, minutes: u32) -> TravelEstimate {
        TravelEstimate {
            mode_index,
            hours,
            minutes,
        }
    }

    #[test]
    fn london_paris_all_modes() {
        let times = estimate_times(343.56, &london(), &paris(), &ModeTable::default()).unwrap();
        // hyperloop 27.78, air 202.90, hsr 120.22, rail 253.68, car 278.28
        assert_eq!(
            times,
            vec![est(0, 0, 28), est(1, 3, 23), est(2, 2, 0), est(3, 4, 14), est(4, 4, 38)]
        );
    }

    #[test]
    fn air_overhead_depends_on_country() {
        let modes = ModeTable::default();
        let d = 343.56;
        let base = modes[1].base_minutes(d);

        let international = adjusted_minutes(&modes[1], d, &london(), &paris()).unwrap();
        let domestic = adjusted_minutes(&modes[1], d, &london(), &manchester()).unwrap();

        assert_eq!(international - base, 180.0);
        assert_eq!(domestic - base, 120.0);
    }

    #[test]
    fn curve_modes_use_their_own_curve() {
        let modes = ModeTable::default();
        let d = 343.56;
        let expect = [
            (0, OverheadCurve::HYPERLOOP),
            (2, OverheadCurve::RAIL),
            (3, OverheadCurve::RAIL),
        ];
        for (idx, curve) in expect {
            let base = modes[idx].base_minutes(d);
            let got = adjusted_minutes(&modes[idx], d, &london(), &paris()).unwrap();
            assert_eq!(Some(got), curve.apply(base));
        }
        // ground is a flat factor
        let car = adjusted_minutes(&modes[4], d, &london(), &paris()).unwrap();
        assert_eq!(car, modes[4].base_minutes(d) * GROUND_FACTOR);
    }

    #[test]
    fn country_match_is_case_sensitive() {
        let modes = ModeTable::default();
        let other = city("Leeds", "uk", 53.8, -1.55);
        let minutes = adjusted_minutes(&modes[1], 100.0, &london(), &other).unwrap();
        assert_eq!(minutes - modes[1].base_minutes(100.0), 180.0);
    }

    #[test]
    fn minute_rollover() {
        // 119.6 min rounds to 2h 0m, never 1h 60m
        assert_eq!(TravelEstimate::from_minutes(0, 119.6), est(0, 2, 0));
        assert_eq!(TravelEstimate::from_minutes(0, 59.5), est(0, 1, 0));
        assert_eq!(TravelEstimate::from_minutes(0, 59.4), est(0, 0, 59));
        assert_eq!(TravelEstimate::from_minutes(0, 0.0), est(0, 0, 0));
    }

    #[test]
    fn zero_distance_is_degenerate() {
        let err = estimate_times(0.0, &london(), &london(), &ModeTable::default()).unwrap_err();
        match err {
            RouteError::DegenerateDistance { mode, .. } => assert_eq!(mode, "Hyperloop"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn below_rail_pole_is_degenerate() {
        let modes = ModeTable::default();
        // 2 km is under the conventional-rail floor of ~2.84 km
        let err = adjusted_minutes(&modes[3], 2.0, &london(), &paris()).unwrap_err();
        assert!(matches!(err, RouteError::DegenerateDistance { .. }));
        assert!(adjusted_minutes(&modes[3], 3.0, &london(), &paris()).is_ok());
    }

    #[test]
    fn negative_or_nan_distance_rejected() {
        let modes = ModeTable::default();
        assert!(estimate_times(-5.0, &london(), &paris(), &modes).is_err());
        assert!(estimate_times(f64::NAN, &london(), &paris(), &modes).is_err());
    }

    #[test]
    fn just_above_floor_succeeds() {
        let modes = ModeTable::default();
        let floor = modes.min_distance_km();
        let times = estimate_times(floor + 1.0, &london(), &paris(), &modes).unwrap();
        assert!(times.iter().all(|t| t.minutes < 60));
    }

    #[test]
    fn fastest_picks_minimum_with_first_tie() {
        let times = vec![est(0, 1, 0), est(1, 0, 45), est(2, 0, 45), est(3, 2, 0)];
        assert_eq!(fastest(&times), Some(1));
        assert_eq!(fastest(&[]), None);
    }

    #[test]
    fn fastest_is_never_beaten() {
        let times = estimate_times(9000.0, &london(), &paris(), &ModeTable::default()).unwrap();
        let idx = fastest(&times).unwrap();
        let best = times[idx].total_minutes();
        assert!(times.iter().all(|t| best <= t.total_minutes()));
        assert_eq!(idx, 0);
    }

    #[test]
    fn rank_is_stable_and_keeps_indices() {
        let times = vec![est(0, 3, 0), est(1, 1, 0), est(2, 3, 0), est(3, 0, 30), est(4, 1, 0)];
        let ranked = rank_ascending(&times);
        let order: Vec<_> = ranked.iter().map(|e| e.mode_index).collect();
        assert_eq!(order, vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn display_format() {
        assert_eq!(est(0, 4, 7).to_string(), "4h.7m.");
        assert_eq!(est(0, 0, 30).decimal_hours(), 0.5);
    }
}
