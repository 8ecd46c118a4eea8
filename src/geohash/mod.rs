//! Geohash のエンコード・デコード。
//!
//! 経度から始めて1ビットごとに経度・緯度を交互に二分し、5ビットずつ
//! Base32 の1文字にまとめる。

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    geometry::{lat_lon::LatLon, point::check_lat_lon},
};

pub mod bounds;

use bounds::Bounds;

#[cfg(test)]
mod tests;

/// Geohash で使用する Base32 のアルファベット
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Geohash の最大の長さ（精度）
pub const MAX_PRECISION: u8 = 16;

/// 1文字あたりのビット数
const BITS_PER_CHAR: usize = 5;

const INVALID: u8 = u8::MAX;

/// バイト値から Base32 の値を引く表。大文字・小文字の両方を登録してある。
static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < BASE32.len() {
        let c = BASE32[i];
        table[c as usize] = i as u8;
        table[c.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
};

/// 二分中の緯度・経度の範囲。`axis[1]` が経度。
struct Bisection {
    axis: [[f64; 2]; 2],
    is_lon: usize,
}

impl Bisection {
    fn new() -> Self {
        Bisection {
            axis: [[-90.0, 90.0], [-180.0, 180.0]],
            is_lon: 1,
        }
    }

    fn mid(&self) -> f64 {
        let [min, max] = self.axis[self.is_lon];
        (min + max) / 2.0
    }

    /// 現在の軸を上半分（`upper == true`）または下半分に絞り込み、軸を切り替える。
    fn narrow(&mut self, upper: bool) {
        let mid = self.mid();
        self.axis[self.is_lon][!upper as usize] = mid;
        self.is_lon ^= 1;
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            min_lat: self.axis[0][0],
            max_lat: self.axis[0][1],
            min_lon: self.axis[1][0],
            max_lon: self.axis[1][1],
        }
    }
}

/// 緯度・経度を長さ `precision` の Geohash に変換する。
///
/// # バリデーション
/// - `precision` が `1..=16` の外なら [`Error::PrecisionOutOfRange`]
/// - 緯度が閉区間 `[-90, 90]`、経度が閉区間 `[-180, 180]` の外なら
///   [`Error::LatitudeOutOfRange`] / [`Error::LongitudeOutOfRange`]
///
/// [`GeoPoint`](crate::GeoPoint) と異なり、境界値そのものは受け付ける。
///
/// ```
/// # use geo_logic::geohash;
/// assert_eq!(geohash::encode(45.0, -122.0, 5).unwrap(), "c210p");
/// assert_eq!(geohash::encode(90.0, 180.0, 4).unwrap(), "zzzz");
/// ```
pub fn encode(lat: f64, lon: f64, precision: u8) -> Result<String, Error> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(Error::PrecisionOutOfRange { precision });
    }
    check_lat_lon(lat, lon, true)?;

    let target = [lat, lon];
    let mut bisection = Bisection::new();
    let mut hash = String::with_capacity(precision as usize);

    for _ in 0..precision {
        let mut idx = 0usize;
        for _ in 0..BITS_PER_CHAR {
            let upper = target[bisection.is_lon] >= bisection.mid();
            idx = (idx << 1) | upper as usize;
            bisection.narrow(upper);
        }
        hash.push(BASE32[idx] as char);
    }

    Ok(hash)
}

/// Geohash が表すセルの矩形を返す。
///
/// # バリデーション
/// - 長さが `1..=16` の外なら [`Error::InvalidLength`]
/// - アルファベット以外の文字を含むなら [`Error::InvalidSymbol`]（大文字・小文字は区別しない）
///
/// ```
/// # use geo_logic::geohash;
/// let b = geohash::decode_bounds("ezs42").unwrap();
/// assert_eq!(b.min_lon, -5.625);
/// assert_eq!(b.max_lat, 42.626953125);
/// ```
pub fn decode_bounds(hash: &str) -> Result<Bounds, Error> {
    let length = hash.len();
    if !(1..=MAX_PRECISION as usize).contains(&length) {
        tracing::debug!(length, "rejected geohash with invalid length");
        return Err(Error::InvalidLength {
            length,
            min: 1,
            max: MAX_PRECISION as usize,
        });
    }

    let mut bisection = Bisection::new();
    for (index, symbol) in hash.char_indices() {
        let value = lookup(symbol).ok_or_else(|| {
            tracing::debug!(%symbol, index, "rejected geohash symbol");
            Error::InvalidSymbol { symbol, index }
        })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            bisection.narrow((value >> shift) & 1 == 1);
        }
    }

    Ok(bisection.bounds())
}

/// Geohash をセルの中心座標に変換する。
///
/// 返るのは元の座標ではなくセルの中心であることに注意。
///
/// ```
/// # use geo_logic::geohash;
/// let c = geohash::decode("c210p").unwrap();
/// assert_eq!((c.lat, c.lon), (45.02197265625, -122.01416015625));
/// assert_eq!(geohash::decode("C210P").unwrap(), c);
/// ```
pub fn decode(hash: &str) -> Result<LatLon, Error> {
    Ok(decode_bounds(hash)?.center())
}

fn lookup(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    match DECODE_TABLE[symbol as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// 検証済みの Geohash 文字列。常に小文字で保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct GeoHash(String);

impl GeoHash {
    /// 緯度・経度から [`GeoHash`] を生成する。検証は [`encode`] と同じ。
    pub fn from_lat_lon(lat: f64, lon: f64, precision: u8) -> Result<GeoHash, Error> {
        encode(lat, lon, precision).map(GeoHash)
    }

    /// 文字列を検証して [`GeoHash`] を生成する。
    ///
    /// ```
    /// # use geo_logic::GeoHash;
    /// let hash = GeoHash::new("U4PRUYD").unwrap();
    /// assert_eq!(hash.as_str(), "u4pruyd");
    /// assert_eq!(hash.precision(), 7);
    /// ```
    pub fn new(hash: &str) -> Result<GeoHash, Error> {
        decode_bounds(hash)?;
        Ok(GeoHash(hash.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 文字数（精度）
    pub fn precision(&self) -> u8 {
        self.0.len() as u8
    }

    /// セルの矩形
    pub fn bounds(&self) -> Bounds {
        // 生成時に検証済みのため失敗しない
        decode_bounds(&self.0).unwrap_or_default()
    }

    /// セルの中心座標
    pub fn center(&self) -> LatLon {
        self.bounds().center()
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GeoHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoHash::new(s)
    }
}

impl TryFrom<String> for GeoHash {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GeoHash::new(&value)
    }
}

impl From<GeoHash> for String {
    fn from(value: GeoHash) -> Self {
        value.0
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
