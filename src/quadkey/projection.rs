//! Web メルカトル図法におけるピクセル座標・タイル座標と緯度経度の変換。

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::MAX_LEVEL;
use crate::geometry::{constants::deg_to_rad, lat_lon::LatLon};

/// Web メルカトル図法で扱える緯度の最小値
pub const MIN_LATITUDE: f64 = -85.051_128_78;

/// Web メルカトル図法で扱える緯度の最大値
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// 経度の最小値
pub const MIN_LONGITUDE: f64 = -180.0;

/// 経度の最大値
pub const MAX_LONGITUDE: f64 = 180.0;

/// 1タイルあたりのピクセル数（一辺）
pub const TILE_SIZE: u32 = 256;

/// ピクセル座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}

/// タイル座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    pub x: u32,
    pub y: u32,
}

impl Pixel {
    pub fn new(x: u32, y: u32) -> Self {
        Pixel { x, y }
    }

    /// このピクセルを含むタイルを返す。
    pub fn to_tile(self) -> Tile {
        Tile {
            x: self.x / TILE_SIZE,
            y: self.y / TILE_SIZE,
        }
    }
}

impl Tile {
    pub fn new(x: u32, y: u32) -> Self {
        Tile { x, y }
    }

    /// このタイルの左上のピクセルを返す。
    ///
    /// レベル23までのタイルを想定しており、それを超える座標は `u32::MAX` に飽和する。
    pub fn to_pixel(self) -> Pixel {
        Pixel {
            x: self.x.saturating_mul(TILE_SIZE),
            y: self.y.saturating_mul(TILE_SIZE),
        }
    }
}

/// `n` を `[min, max]` に収める。`n` が NaN の場合は `min` を返す。
pub fn clip(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// ズームレベル `level`（0–23）における地図全体の一辺のピクセル数。
///
/// 23 を超えるレベルは 23 として扱う。[`lat_lon_to_pixel`] と
/// [`pixel_to_lat_lon`] もこの値を使うため同様に丸められる。
///
/// ```
/// # use geo_logic::quadkey::projection::map_size;
/// assert_eq!(map_size(0), 256);
/// assert_eq!(map_size(23), 2_147_483_648);
/// assert_eq!(map_size(40), map_size(23));
/// ```
pub fn map_size(level: u8) -> u32 {
    TILE_SIZE << level.min(MAX_LEVEL)
}

/// 緯度・経度を、ズームレベル `level` におけるピクセル座標に変換する。
///
/// 緯度は `[-85.05112878, 85.05112878]`、経度は `[-180, 180]` に丸めてから変換するため失敗しない。
pub fn lat_lon_to_pixel(lat: f64, lon: f64, level: u8) -> Pixel {
    let lat = clip(lat, MIN_LATITUDE, MAX_LATITUDE);
    let lon = clip(lon, MIN_LONGITUDE, MAX_LONGITUDE);

    let x = (lon + 180.0) / 360.0;
    let sin_lat = deg_to_rad(lat).sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);

    let size = map_size(level) as f64;
    Pixel {
        x: clip(x * size + 0.5, 0.0, size - 1.0) as u32,
        y: clip(y * size + 0.5, 0.0, size - 1.0) as u32,
    }
}

/// ズームレベル `level` におけるピクセル座標を緯度・経度に変換する。
pub fn pixel_to_lat_lon(pixel: Pixel, level: u8) -> LatLon {
    let size = map_size(level) as f64;
    let x = (clip(pixel.x as f64, 0.0, size - 1.0) / size) - 0.5;
    let y = 0.5 - (clip(pixel.y as f64, 0.0, size - 1.0) / size);

    LatLon {
        lat: 90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI,
        lon: 360.0 * x,
    }
}
