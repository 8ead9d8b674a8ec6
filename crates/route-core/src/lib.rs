// crates/route-core/src/lib.rs

//! # route-core
//!
//! Resolve free-text city names against a gazetteer and estimate
//! point-to-point travel times for five transport modes from the
//! great-circle distance.
//!
//! ```rust
//! use route_core::{plan, Gazetteer, ModeTable};
//!
//! let gaz = Gazetteer::load().unwrap();
//! let modes = ModeTable::load().unwrap();
//!
//! let origin = gaz.resolve_exact("tokyo").unwrap();
//! let destination = match gaz.resolve_exact("Damascos") {
//!     Ok(city) => city,
//!     // the caller decides whether to accept the suggestion
//!     Err(_) => gaz.suggest("Damascos").unwrap().city,
//! };
//!
//! let report = plan(origin, destination, modes).unwrap();
//! for e in &report.ranked {
//!     println!("{:<16} {}", modes[e.mode_index].label, e);
//! }
//! ```

pub mod common;
pub mod error;
pub mod gazetteer;
pub mod geo;
pub mod loader;
pub mod planner;
#[doc(hidden)]
pub mod raw;
pub mod resolve;
pub mod text;
pub mod transport;
pub mod travel;

// Re-exports
pub use crate::common::GazetteerStats;
pub use crate::error::{Result, RouteError};
pub use crate::gazetteer::{CityRecord, Gazetteer};
pub use crate::geo::{distance_between, haversine_km};
pub use crate::planner::{plan, plan_by_name, RouteReport};
pub use crate::raw::{RawCity, RawMode};
pub use crate::resolve::{resolve, resolve_exact, suggest, Resolution, Suggestion};
pub use crate::transport::{AdjustmentKind, ModeTable, TransportMode, MODE_COUNT};
pub use crate::travel::{estimate_times, fastest, rank_ascending, TravelEstimate};
