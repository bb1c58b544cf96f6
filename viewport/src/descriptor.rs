use derive_more::{Display, Into};
use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::{
    anchor::Field,
    axis::{lon_lat, to_lat_lon_order, LatLon},
    error::ValidationError,
};

#[derive(Debug, Display, Into, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zoom(pub(crate) u8);

impl Zoom {
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Zoom levels the consuming renderer supports, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRange {
    pub min: u8,
    pub max: u8,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self { min: 0, max: 23 }
    }
}

impl ZoomRange {
    pub fn validate(&self, value: i64) -> Result<Zoom, ValidationError> {
        let err = || ValidationError::Zoom {
            value,
            min: self.min,
            max: self.max,
        };
        let zoom = u8::try_from(value).map_err(|_| err())?;
        if (self.min..=self.max).contains(&zoom) {
            Ok(Zoom(zoom))
        } else {
            Err(err())
        }
    }
}

/// Two corners, serialized flat as `[lat1, lon1, lat2, lon2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Bounds {
    pub first: LatLon,
    pub second: LatLon,
}

impl From<[f64; 4]> for Bounds {
    fn from([lat1, lon1, lat2, lon2]: [f64; 4]) -> Self {
        Self {
            first: LatLon::new(lat1, lon1),
            second: LatLon::new(lat2, lon2),
        }
    }
}

impl From<Bounds> for [f64; 4] {
    fn from(Bounds { first, second }: Bounds) -> Self {
        [first.lat, first.lon, second.lat, second.lon]
    }
}

/// How the four source extent values `[lon1, lat1, lon2, lat2]` become
/// output bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsReduction {
    /// `[lat1, lon1, lat1, lon2]`: the first corner's latitude is used for
    /// both corners. Matches what existing consumers have always received.
    #[default]
    SourceCompatible,
    /// `[lat1, lon1, lat2, lon2]`.
    TwoCorner,
}

impl BoundsReduction {
    pub fn reduce(self, extent: [f64; 4]) -> Bounds {
        let [lon1, lat1, lon2, lat2] = extent;
        let first = to_lat_lon_order(lon_lat([lon1, lat1]));
        let second = to_lat_lon_order(lon_lat([lon2, lat2]));
        match self {
            BoundsReduction::SourceCompatible => Bounds {
                first,
                second: LatLon::new(first.lat, second.lon),
            },
            BoundsReduction::TwoCorner => Bounds { first, second },
        }
    }
}

/// Checks a source-order coordinate against WGS84 ranges.
pub fn validate_coord(field: Field, coord: Coord<f64>) -> Result<LatLon, ValidationError> {
    let LatLon { lat, lon } = to_lat_lon_order(coord);
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ValidationError::Latitude { field, value: lat });
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ValidationError::Longitude { field, value: lon });
    }
    Ok(LatLon { lat, lon })
}

/// Snapshot of what a map should show after reading a MapTiler page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportDescriptor {
    pub bounds: Bounds,
    pub center: LatLon,
    pub zoom: Zoom,
}
