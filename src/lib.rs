/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 緯度・経度、楕円体の定数など、地理座標の基本的な型。
pub mod geometry;

/// Geohash のエンコード・デコード。
pub mod geohash;

/// Quadkey（Bing Maps タイル方式）のエンコード・デコード。
pub mod quadkey;

/// 距離・到達点・測地系補正の計算。
pub mod geodesy;

pub use error::{Error, ErrorKind};
pub use geometry::{
    constants::{WGS84_A, WGS84_B, WGS84_E2, deg_to_rad, rad_to_deg},
    lat_lon::LatLon,
    point::{GeoPoint, Trig, is_valid_lat_lon, is_valid_lat_lon_inclusive},
};

pub use geohash::{GeoHash, bounds::Bounds};
pub use quadkey::{
    QuadKey,
    projection::{Pixel, Tile},
};

pub use geodesy::{
    datum::{to_tokyo_datum, to_tokyo_datum_with_trig},
    distance::distance,
    ray::GeodesicRay,
};
