// crates/route-core/src/transport.rs

//! # Transport Modes
//!
//! The five modes and their time-adjustment curves. The curve family is
//! bound to a mode by its position in the table, never by data:
//!
//! | # | kind        | default label   | km/h |
//! |---|-------------|-----------------|------|
//! | 0 | Hyperloop   | Hyperloop       | 1080 |
//! | 1 | Air         | Airplane        |  900 |
//! | 2 | RailClass   | High-speed Rail |  300 |
//! | 3 | RailClass   | Rail            |  120 |
//! | 4 | Ground      | Car             |  100 |

use crate::error::{Result, RouteError};
use crate::raw::RawMode;
use serde::{Deserialize, Serialize};

/// Number of modes every table must have.
pub const MODE_COUNT: usize = 5;

/// Adjustment kinds in table order.
pub const ADJUSTMENT_ORDER: [AdjustmentKind; MODE_COUNT] = [
    AdjustmentKind::Hyperloop,
    AdjustmentKind::Air,
    AdjustmentKind::RailClass,
    AdjustmentKind::RailClass,
    AdjustmentKind::Ground,
];

/// Flat overhead added to a domestic flight, in minutes.
pub const AIR_DOMESTIC_OVERHEAD_MIN: f64 = 120.0;
/// Flat overhead added to an international flight, in minutes.
pub const AIR_INTERNATIONAL_OVERHEAD_MIN: f64 = 180.0;
/// Multiplier applied to car journeys.
pub const GROUND_FACTOR: f64 = 1.35;

/// Coefficients of a curve `t * (k / (a*t - b) + c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverheadCurve {
    pub k: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl OverheadCurve {
    pub const HYPERLOOP: OverheadCurve = OverheadCurve {
        k: 5.84,
        a: 1.26,
        b: 1.02,
        c: 1.2017,
    };

    pub const RAIL: OverheadCurve = OverheadCurve {
        k: 30.0,
        a: 0.9888,
        b: 1.402,
        c: 1.2987,
    };

    /// Base time (minutes) at which the curve has its pole.
    pub fn pole_minutes(&self) -> f64 {
        self.b / self.a
    }

    /// Adjusted time, or `None` at or below the pole and for results that
    /// are not finite and positive.
    pub fn apply(&self, minutes: f64) -> Option<f64> {
        let denom = self.a * minutes - self.b;
        if !(denom > 0.0) {
            return None;
        }
        let adjusted = minutes * (self.k / denom + self.c);
        (adjusted.is_finite() && adjusted > 0.0).then_some(adjusted)
    }
}

/// The time-correction formula family applied to a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustmentKind {
    /// Boarding/deceleration overhead that shrinks relative to trip length.
    Hyperloop,
    /// Flat airport overhead, domestic or international.
    Air,
    /// Station overhead curve, shared by high-speed and conventional rail.
    RailClass,
    /// Flat multiplier.
    Ground,
}

impl AdjustmentKind {
    /// The curve for kinds that have one.
    pub fn curve(&self) -> Option<OverheadCurve> {
        match self {
            Self::Hyperloop => Some(OverheadCurve::HYPERLOOP),
            Self::RailClass => Some(OverheadCurve::RAIL),
            Self::Air | Self::Ground => None,
        }
    }
}

/// A labelled mode with its cruising speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportMode {
    pub label: String,
    pub base_speed_kmh: f64,
    pub adjustment: AdjustmentKind,
}

impl TransportMode {
    /// Unadjusted travel time in minutes.
    pub fn base_minutes(&self, distance_km: f64) -> f64 {
        distance_km / (self.base_speed_kmh / 60.0)
    }

    /// Shortest distance (km) for which this mode yields a usable estimate.
    ///
    /// Zero for modes without a curve.
    pub fn min_distance_km(&self) -> f64 {
        match self.adjustment.curve() {
            Some(curve) => curve.pole_minutes() * self.base_speed_kmh / 60.0,
            None => 0.0,
        }
    }
}

/// The ordered table of exactly [`MODE_COUNT`] modes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeTable {
    modes: Vec<TransportMode>,
}

impl ModeTable {
    /// Pairs `(label, speed)` rows positionally with [`ADJUSTMENT_ORDER`].
    ///
    /// # Errors
    /// [`RouteError::Configuration`] unless there are exactly five rows and
    /// every speed is finite and positive.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let pairs: Vec<(String, f64)> = pairs.into_iter().map(|(l, s)| (l.into(), s)).collect();
        if pairs.len() != MODE_COUNT {
            return Err(RouteError::Configuration(format!(
                "expected {MODE_COUNT} transport modes, got {}",
                pairs.len()
            )));
        }

        let modes = pairs
            .into_iter()
            .zip(ADJUSTMENT_ORDER)
            .map(|((label, speed), adjustment)| {
                if !speed.is_finite() || speed <= 0.0 {
                    return Err(RouteError::Configuration(format!(
                        "speed for '{label}' must be a positive number, got {speed}"
                    )));
                }
                Ok(TransportMode {
                    label,
                    base_speed_kmh: speed,
                    adjustment,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { modes })
    }

    /// Like [`from_pairs`](Self::from_pairs) for rows read from a table,
    /// where the speed is still text.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawMode>,
    {
        let pairs = rows
            .into_iter()
            .map(|r| {
                let speed = r.speed.trim().parse::<f64>().map_err(|_| {
                    RouteError::Configuration(format!(
                        "speed '{}' for '{}' is not a number",
                        r.speed, r.mode
                    ))
                })?;
                Ok((r.mode.trim().to_string(), speed))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_pairs(pairs)
    }

    pub fn modes(&self) -> &[TransportMode] {
        &self.modes
    }

    pub fn get(&self, index: usize) -> Option<&TransportMode> {
        self.modes.get(index)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(|m| m.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Largest [`TransportMode::min_distance_km`] across the table.
    pub fn min_distance_km(&self) -> f64 {
        self.modes
            .iter()
            .map(TransportMode::min_distance_km)
            .fold(0.0, f64::max)
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        let modes = [
            ("Hyperloop", 1080.0),
            ("Airplane", 900.0),
            ("High-speed Rail", 300.0),
            ("Rail", 120.0),
            ("Car", 100.0),
        ]
        .into_iter()
        .zip(ADJUSTMENT_ORDER)
        .map(|((label, speed), adjustment)| TransportMode {
            label: label.to_string(),
            base_speed_kmh: speed,
            adjustment,
        })
        .collect();
        Self { modes }
    }
}

impl std::ops::Index<usize> for ModeTable {
    type Output = TransportMode;

    fn index(&self, index: usize) -> &Self::Output {
        &self.modes[index]
    }
}
