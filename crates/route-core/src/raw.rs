// crates/route-core/src/raw.rs

use serde::{Deserialize, Deserializer};

/// Raw gazetteer row as it comes from a tabular store.
///
/// Coordinates are kept as text here; turning them into floats (and
/// rejecting rows that do not parse) is the job of
/// [`Gazetteer::from_rows`](crate::Gazetteer::from_rows).
#[derive(Debug, Clone, Deserialize)]
pub struct RawCity {
    pub country: String,
    #[serde(alias = "city")]
    pub name: String,
    #[serde(alias = "lat", deserialize_with = "text_or_number")]
    pub latitude: String,
    #[serde(alias = "lng", alias = "lon", deserialize_with = "text_or_number")]
    pub longitude: String,
}

impl RawCity {
    pub fn new(
        country: impl Into<String>,
        name: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// Raw mode-table row: `mode,speed`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMode {
    #[serde(alias = "label")]
    pub mode: String,
    #[serde(alias = "speed_kmh", deserialize_with = "text_or_number")]
    pub speed: String,
}

/// Accepts `"51.5"` as well as `51.5`. JSON sources carry both forms.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(i) => i.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}
