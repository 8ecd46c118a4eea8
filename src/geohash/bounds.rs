#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::lat_lon::LatLon;

/// Geohash が表す矩形セル（度）。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// 地球全体を表すセル
    pub const WORLD: Bounds = Bounds {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lon: -180.0,
        max_lon: 180.0,
    };

    /// セルの中心座標
    pub fn center(&self) -> LatLon {
        LatLon::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// 中心から南北端までの距離（度）
    pub fn lat_error(&self) -> f64 {
        (self.max_lat - self.min_lat) / 2.0
    }

    /// 中心から東西端までの距離（度）
    pub fn lon_error(&self) -> f64 {
        (self.max_lon - self.min_lon) / 2.0
    }

    /// 座標がセル内（境界を含む）にあるか
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::WORLD
    }
}
