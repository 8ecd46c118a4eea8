//! Quadkey のエンコード・デコード。
//!
//! 緯度経度 → ピクセル → タイル → Quadkey の順に変換し、デコードはその逆をたどる。

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, geometry::lat_lon::LatLon};

pub mod projection;

use projection::{Tile, lat_lon_to_pixel, pixel_to_lat_lon};


/// Quadkey の最大のズームレベル（文字数）
pub const MAX_LEVEL: u8 = 23;

/// レベルを指定しない場合のズームレベル
pub const DEFAULT_LEVEL: u8 = MAX_LEVEL;

const INVALID: u8 = u8::MAX;

/// バイト値から Quadkey の桁の値を引く表
static DIGIT_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    table[b'0' as usize] = 0;
    table[b'1' as usize] = 1;
    table[b'2' as usize] = 2;
    table[b'3' as usize] = 3;
    table
};

/// タイル座標をズームレベル `level` の Quadkey に変換する。
///
/// 上位の桁から順に、X のビットが立っていれば 1、Y のビットが立っていれば 2 を加える。
///
/// ```
/// # use geo_logic::quadkey::{tile_to_quadkey, projection::Tile};
/// assert_eq!(tile_to_quadkey(Tile::new(3, 5), 3), "213");
/// ```
pub fn tile_to_quadkey(tile: Tile, level: u8) -> String {
    (1..=level)
        .rev()
        .map(|i| {
            let mask = 1u32.checked_shl(u32::from(i - 1)).unwrap_or(0);
            let mut digit = b'0';
            if tile.x & mask != 0 {
                digit += 1;
            }
            if tile.y & mask != 0 {
                digit += 2;
            }
            digit as char
        })
        .collect()
}

/// Quadkey をタイル座標に変換する。
///
/// # バリデーション
/// - 23 文字を超えるなら [`Error::InvalidLength`]
/// - `'0'..='3'` 以外の文字を含むなら [`Error::IllegalSequence`]
///
/// 空文字列はレベル0のタイル `(0, 0)` になる。
pub fn quadkey_to_tile(quadkey: &str) -> Result<Tile, Error> {
    let level = quadkey.len();
    if level > MAX_LEVEL as usize {
        return Err(Error::InvalidLength {
            length: level,
            min: 1,
            max: MAX_LEVEL as usize,
        });
    }

    let mut tile = Tile::default();

    for (index, symbol) in quadkey.char_indices() {
        let digit = if symbol.is_ascii() {
            DIGIT_TABLE[symbol as usize]
        } else {
            INVALID
        };
        if digit == INVALID {
            tracing::debug!(%symbol, index, "rejected quadkey digit");
            return Err(Error::IllegalSequence { symbol, index });
        }

        let mask = 1u32 << (level - 1 - index);
        if digit & 1 != 0 {
            tile.x |= mask;
        }
        if digit & 2 != 0 {
            tile.y |= mask;
        }
    }

    Ok(tile)
}

/// 緯度・経度をズームレベル `level` の Quadkey に変換する。
///
/// 緯度・経度は検証されず、Web メルカトル図法の範囲に丸められる。
///
/// # バリデーション
/// - `level` が `1..=23` の外なら [`Error::LevelOutOfRange`]
///
/// ```
/// # use geo_logic::quadkey;
/// assert_eq!(quadkey::encode(0.0, 0.0, 1).unwrap(), "3");
/// assert_eq!(quadkey::encode(47.61, -122.33, 10).unwrap(), "0212300302");
/// ```
pub fn encode(lat: f64, lon: f64, level: u8) -> Result<String, Error> {
    if !(1..=MAX_LEVEL).contains(&level) {
        return Err(Error::LevelOutOfRange { level });
    }

    let tile = lat_lon_to_pixel(lat, lon, level).to_tile();
    Ok(tile_to_quadkey(tile, level))
}

/// Quadkey をタイル左上の緯度・経度に変換する。
///
/// # バリデーション
/// - 長さが `1..=23` の外なら [`Error::InvalidLength`]
/// - `'0'..='3'` 以外の文字を含むなら [`Error::IllegalSequence`]
///
/// ```
/// # use geo_logic::quadkey;
/// let p = quadkey::decode("3000").unwrap();
/// assert_eq!((p.lat, p.lon), (0.0, 0.0));
/// ```
pub fn decode(quadkey: &str) -> Result<LatLon, Error> {
    let length = quadkey.len();
    if !(1..=MAX_LEVEL as usize).contains(&length) {
        tracing::debug!(length, "rejected quadkey with invalid length");
        return Err(Error::InvalidLength {
            length,
            min: 1,
            max: MAX_LEVEL as usize,
        });
    }

    let tile = quadkey_to_tile(quadkey)?;
    Ok(pixel_to_lat_lon(tile.to_pixel(), length as u8))
}

/// 検証済みの Quadkey 文字列。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct QuadKey(String);

impl QuadKey {
    /// 緯度・経度から [`DEFAULT_LEVEL`] の [`QuadKey`] を生成する。
    ///
    /// ```
    /// # use geo_logic::QuadKey;
    /// let key = QuadKey::from_lat_lon(35.6812, 139.7671);
    /// assert_eq!(key.level(), 23);
    /// ```
    pub fn from_lat_lon(lat: f64, lon: f64) -> QuadKey {
        let tile = lat_lon_to_pixel(lat, lon, DEFAULT_LEVEL).to_tile();
        QuadKey(tile_to_quadkey(tile, DEFAULT_LEVEL))
    }

    /// 緯度・経度から指定したズームレベルの [`QuadKey`] を生成する。検証は [`encode`] と同じ。
    pub fn from_lat_lon_at(lat: f64, lon: f64, level: u8) -> Result<QuadKey, Error> {
        encode(lat, lon, level).map(QuadKey)
    }

    /// 文字列を検証して [`QuadKey`] を生成する。
    pub fn new(quadkey: &str) -> Result<QuadKey, Error> {
        decode(quadkey)?;
        Ok(QuadKey(quadkey.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ズームレベル（文字数）
    pub fn level(&self) -> u8 {
        self.0.len() as u8
    }

    /// このキーが表すタイル座標
    pub fn tile(&self) -> Tile {
        // 生成時に検証済みのため失敗しない
        quadkey_to_tile(&self.0).unwrap_or_default()
    }

    /// タイル左上の緯度・経度
    pub fn top_left(&self) -> LatLon {
        pixel_to_lat_lon(self.tile().to_pixel(), self.level())
    }

    /// 1つ上のレベルの [`QuadKey`]。レベル1なら `None`。
    ///
    /// ```
    /// # use geo_logic::QuadKey;
    /// let key = QuadKey::new("0213").unwrap();
    /// assert_eq!(key.parent().unwrap().as_str(), "021");
    /// assert!(QuadKey::new("2").unwrap().parent().is_none());
    /// ```
    pub fn parent(&self) -> Option<QuadKey> {
        match self.0.len() {
            0 | 1 => None,
            n => Some(QuadKey(self.0[..n - 1].to_string())),
        }
    }
}

impl fmt::Display for QuadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuadKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuadKey::new(s)
    }
}

impl TryFrom<String> for QuadKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        QuadKey::new(&value)
    }
}

impl From<QuadKey> for String {
    fn from(value: QuadKey) -> Self {
        value.0
    }
}

impl AsRef<str> for QuadKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
