// crates/markets-core/src/model.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opening hours keyed by weekday label ("lundi", "Saturday", ...).
///
/// Insertion-ordered so the authored weekday order survives a rebuild.
pub type Hours = IndexMap<String, String>;

/// A `(latitude, longitude)` pair.
///
/// Serialized as a bare two-element array, `[lat, lng]`, which is the form used
/// both in the source files and in the compact artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    #[inline]
    pub fn lat(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.1
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        LatLng(lat, lng)
    }
}

/// An axis-aligned rectangle in latitude/longitude space.
///
/// No check is made that `min` is below `max`; an inverted box simply
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: LatLng,
    pub max: LatLng,
}

impl Bounds {
    pub fn new(min: impl Into<LatLng>, max: impl Into<LatLng>) -> Self {
        Bounds {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Strict containment on both axes: a point on an edge is outside.
    #[inline]
    pub fn contains(&self, p: &LatLng) -> bool {
        self.min.lat() < p.lat()
            && p.lat() < self.max.lat()
            && self.min.lng() < p.lng()
            && p.lng() < self.max.lng()
    }
}

/// A market record that passed validation, as authored in a region file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMarket {
    pub title: String,
    pub coordinates: LatLng,
    pub address: String,
    pub postal_code: i64,
    pub city: String,
    pub hours: Hours,
}

/// One entry of the consolidated artifact.
///
/// Field keys are deliberately short; the artifact ships to the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactMarket {
    #[serde(rename = "_")]
    pub id: String,
    #[serde(rename = "t")]
    pub title: String,
    #[serde(rename = "c")]
    pub coordinates: LatLng,
    #[serde(rename = "a")]
    pub address: String,
    #[serde(rename = "p")]
    pub postal_code: i64,
    #[serde(rename = "ci")]
    pub city: String,
    #[serde(rename = "h")]
    pub hours: Hours,
}

impl CompactMarket {
    pub fn from_source(id: impl Into<String>, src: SourceMarket) -> Self {
        CompactMarket {
            id: id.into(),
            title: src.title,
            coordinates: src.coordinates,
            address: src.address,
            postal_code: src.postal_code,
            city: src.city,
            hours: src.hours,
        }
    }

    /// Re-projects into the public shape handed to callers.
    pub fn to_market(&self) -> Market {
        Market {
            id: self.id.clone(),
            title: self.title.clone(),
            coordinates: self.coordinates,
            address: self.address.clone(),
            postal_code: self.postal_code,
            city: self.city.clone(),
            hours: self.hours.clone(),
        }
    }
}

/// The public-facing market shape returned by queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: String,
    pub title: String,
    pub coordinates: LatLng,
    pub address: String,
    pub postal_code: i64,
    pub city: String,
    pub hours: Hours,
}

/// Simple aggregate statistics for a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub markets: usize,
    /// Distinct city names after accent/case folding.
    pub cities: usize,
}
