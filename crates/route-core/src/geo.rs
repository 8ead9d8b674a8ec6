// crates/route-core/src/geo.rs

use crate::gazetteer::CityRecord;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in degrees,
/// rounded to two decimals.
///
/// The latitude difference is taken as `lat1 - lat2` and the longitude
/// difference as `lon1 - lon2`; both enter the formula squared through
/// `sin`, so swapping the points yields the identical value.
///
/// # Examples
/// ```rust
/// use route_core::geo::haversine_km;
///
/// assert_eq!(haversine_km(51.5074, -0.1278, 48.8566, 2.3522), 343.56);
/// assert_eq!(haversine_km(10.0, 20.0, 10.0, 20.0), 0.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = phi1 - phi2;
    let d_lambda = (lon1 - lon2).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // rounding error can push `a` a hair past 1 for antipodes
    let distance = 2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin();
    round2(distance)
}

/// Distance between two gazetteer records.
pub fn distance_between(a: &CityRecord, b: &CityRecord) -> f64 {
    haversine_km(a.latitude, a.longitude, b.latitude, b.longitude)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
