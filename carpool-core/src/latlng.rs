//! Serde adapters encoding `Coord` values as `{"lat": .., "lng": ..}`.
//!
//! `geo`'s own serde support writes `{"x": .., "y": ..}`; this format names
//! the axes explicitly.

use geo::Coord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<Coord<f64>> for LatLng {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

pub(crate) fn serialize<S>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    LatLng::from(*coord).serialize(serializer)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Coord<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    LatLng::deserialize(deserializer).map(Coord::from)
}

/// Sequence form for `Vec<Coord<f64>>` fields.
pub(crate) mod seq {
    use super::{Coord, Deserialize, Deserializer, LatLng, Serializer};

    pub(crate) fn serialize<S>(coords: &[Coord<f64>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(coords.iter().copied().map(LatLng::from))
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Coord<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let points = Vec::<LatLng>::deserialize(deserializer)?;
        Ok(points.into_iter().map(Coord::from).collect())
    }
}
