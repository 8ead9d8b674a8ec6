// crates/route-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a gazetteer.
///
/// Returned by [`Gazetteer::stats`](crate::Gazetteer::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub cities: usize,
    pub countries: usize,
    /// Names that occur more than once (across different countries).
    pub ambiguous_names: usize,
}
