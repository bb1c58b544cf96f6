use geo_types::Coord;
use serde::{Deserialize, Serialize};

/// A coordinate as the consuming map library wants it: latitude first.
/// Serializes as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for LatLon {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<LatLon> for [f64; 2] {
    fn from(LatLon { lat, lon }: LatLon) -> Self {
        [lat, lon]
    }
}

/// Reads a `[lon, lat]` pair from the source into a coordinate with
/// `x = longitude` and `y = latitude`.
pub fn lon_lat(pair: [f64; 2]) -> Coord<f64> {
    let [x, y] = pair;
    Coord { x, y }
}

/// Swaps source axis order (`x` = lon, `y` = lat) into `[lat, lon]`.
pub fn to_lat_lon_order(coord: Coord<f64>) -> LatLon {
    LatLon {
        lat: coord.y,
        lon: coord.x,
    }
}
