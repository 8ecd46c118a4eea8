use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, geometry::point::GeoPoint};

/// デコード結果として返される、検証されていない緯度・経度の組（度）。
///
/// Quadkey のデコードは `lon == -180.0` のような [`GeoPoint`] の範囲外の値を
/// 返し得るため、デコーダはこの型を返す。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// 範囲検証を行って [`GeoPoint`] に変換する。
    ///
    /// ```
    /// # use geo_logic::LatLon;
    /// assert!(LatLon::new(35.0, 139.0).to_point().is_ok());
    /// assert!(LatLon::new(85.0, -180.0).to_point().is_err());
    /// ```
    pub fn to_point(&self) -> Result<GeoPoint, Error> {
        GeoPoint::new(self.lat, self.lon)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl From<GeoPoint> for LatLon {
    fn from(point: GeoPoint) -> Self {
        LatLon::new(point.lat(), point.lon())
    }
}

impl From<LatLon> for (f64, f64) {
    fn from(value: LatLon) -> Self {
        (value.lat, value.lon)
    }
}
