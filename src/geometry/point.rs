use std::fmt;

#[cfg(any(test))]
use proptest::prelude::*;
#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    geodesy::{datum, distance},
    geometry::{constants::deg_to_rad, lat_lon::LatLon},
};

/// 緯度の有効範囲（開区間）の境界
pub const LAT_LIMIT: f64 = 90.0;

/// 経度の有効範囲（開区間）の境界
pub const LON_LIMIT: f64 = 180.0;

/// 緯度・経度が開区間 `(-90, 90)` / `(-180, 180)` に収まるかを判定する。
///
/// [`GeoPoint`] の生成はこの厳密な判定を使う。NaN は常に範囲外。
pub fn is_valid_lat_lon(lat: f64, lon: f64) -> bool {
    check_lat_lon(lat, lon, false).is_ok()
}

/// 緯度・経度が閉区間 `[-90, 90]` / `[-180, 180]` に収まるかを判定する。
///
/// Geohash のエンコードはこちらの緩い判定を使う。
pub fn is_valid_lat_lon_inclusive(lat: f64, lon: f64) -> bool {
    check_lat_lon(lat, lon, true).is_ok()
}

pub(crate) fn check_lat_lon(lat: f64, lon: f64, inclusive: bool) -> Result<(), Error> {
    let (lat_ok, lon_ok) = if inclusive {
        (
            (-LAT_LIMIT..=LAT_LIMIT).contains(&lat),
            (-LON_LIMIT..=LON_LIMIT).contains(&lon),
        )
    } else {
        (
            lat > -LAT_LIMIT && lat < LAT_LIMIT,
            lon > -LON_LIMIT && lon < LON_LIMIT,
        )
    };

    if !lat_ok {
        return Err(Error::LatitudeOutOfRange { latitude: lat });
    }
    if !lon_ok {
        return Err(Error::LongitudeOutOfRange { longitude: lon });
    }
    Ok(())
}

/// 緯度・経度それぞれの正弦と余弦。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trig {
    pub lat_sin: f64,
    pub lat_cos: f64,
    pub lon_sin: f64,
    pub lon_cos: f64,
}

impl Trig {
    fn from_radians(lat_rad: f64, lon_rad: f64) -> Self {
        let (lat_sin, lat_cos) = lat_rad.sin_cos();
        let (lon_sin, lon_cos) = lon_rad.sin_cos();
        Trig {
            lat_sin,
            lat_cos,
            lon_sin,
            lon_cos,
        }
    }
}

/// 検証済みの地理座標を表す型。
///
/// 内部的には下記のような構造体で構成されている。生成後は変更できない。
///
/// ```ignore
/// pub struct GeoPoint {
///     lat: f64,
///     lon: f64,
///     lat_rad: f64,
///     lon_rad: f64,
///     trig: Option<Trig>,
/// }
/// ```
///
/// シリアライズは `{ "lat", "lon" }` のみを対象とし、デシリアライズ時は
/// [`GeoPoint::new`] と同じ検証を行う。三角関数のキャッシュは保存されない。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LatLon", into = "LatLon"))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
    lat_rad: f64,
    lon_rad: f64,
    trig: Option<Trig>,
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl TryFrom<LatLon> for GeoPoint {
    type Error = Error;

    fn try_from(value: LatLon) -> Result<Self, Self::Error> {
        GeoPoint::new(value.lat, value.lon)
    }
}

impl GeoPoint {
    /// 緯度・経度（度）から [`GeoPoint`] を構築する。
    ///
    /// # バリデーション
    /// - `lat` が開区間 `(-90, 90)` の外なら [`Error::LatitudeOutOfRange`]
    /// - `lon` が開区間 `(-180, 180)` の外なら [`Error::LongitudeOutOfRange`]
    ///
    /// ```
    /// # use geo_logic::GeoPoint;
    /// let p = GeoPoint::new(35.681236, 139.767125).unwrap();
    /// assert_eq!(p.lat(), 35.681236);
    /// assert_eq!(p.lon(), 139.767125);
    /// ```
    ///
    /// 境界値は含まれない:
    /// ```
    /// # use geo_logic::{Error, GeoPoint};
    /// assert_eq!(
    ///     GeoPoint::new(90.0, 0.0),
    ///     Err(Error::LatitudeOutOfRange { latitude: 90.0 })
    /// );
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<GeoPoint, Error> {
        check_lat_lon(lat, lon, false)?;
        Ok(GeoPoint {
            lat,
            lon,
            lat_rad: deg_to_rad(lat),
            lon_rad: deg_to_rad(lon),
            trig: None,
        })
    }

    /// [`GeoPoint::new`] と同じ検証を行い、三角関数の値も前計算しておく。
    ///
    /// 距離計算や [`GeodesicRay`](crate::GeodesicRay) の基点として繰り返し使う場合に向く。
    pub fn new_with_trig(lat: f64, lon: f64) -> Result<GeoPoint, Error> {
        Ok(GeoPoint::new(lat, lon)?.with_trig())
    }

    /// 三角関数の値を前計算した [`GeoPoint`] を返す。
    pub fn with_trig(mut self) -> GeoPoint {
        if self.trig.is_none() {
            self.trig = Some(Trig::from_radians(self.lat_rad, self.lon_rad));
        }
        self
    }

    /// 緯度（度）
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// 経度（度）
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// 緯度（ラジアン）
    pub fn lat_rad(&self) -> f64 {
        self.lat_rad
    }

    /// 経度（ラジアン）
    pub fn lon_rad(&self) -> f64 {
        self.lon_rad
    }

    /// 前計算済みなら三角関数の値をそのまま、そうでなければ計算して返す。
    ///
    /// ```
    /// # use geo_logic::GeoPoint;
    /// let lazy = GeoPoint::new(30.0, 60.0).unwrap();
    /// let eager = GeoPoint::new_with_trig(30.0, 60.0).unwrap();
    /// assert!(!lazy.has_trig());
    /// assert!(eager.has_trig());
    /// assert_eq!(lazy.trig(), eager.trig());
    /// ```
    pub fn trig(&self) -> Trig {
        self.trig
            .unwrap_or_else(|| Trig::from_radians(self.lat_rad, self.lon_rad))
    }

    /// 三角関数の値が前計算されているか。
    pub fn has_trig(&self) -> bool {
        self.trig.is_some()
    }

    /// 他の [`GeoPoint`] までの距離をメートル単位で返す。
    ///
    /// 計算式は [`distance`](crate::distance) を参照。
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance::distance(self, other)
    }

    /// 座標を「日本測地系」へ補正した [`GeoPoint`] を構築する。
    ///
    /// 計算式は [`to_tokyo_datum`](crate::to_tokyo_datum) を参照。
    pub fn from_tokyo(lat: f64, lon: f64) -> Result<GeoPoint, Error> {
        datum::to_tokyo_datum(lat, lon)
    }

    /// ランダムな [`GeoPoint`] を生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな [`GeoPoint`] を生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        Self::random_within_using(rng, 89.999_999, 179.999_999)
    }

    /// 緯度 `(-lat_max, lat_max)`、経度 `(-lon_max, lon_max)` の範囲でランダムな [`GeoPoint`] を生成する。
    ///
    /// `lat_max` / `lon_max` は有効範囲を超えないように切り詰められる。
    /// NaN や無限大を渡した場合は有効範囲全体が使われる。
    #[cfg(any(test, feature = "random"))]
    pub fn random_within_using<R: Rng>(rng: &mut R, lat_max: f64, lon_max: f64) -> Self {
        let lat_max = lat_max.abs().min(89.999_999);
        let lon_max = lon_max.abs().min(179.999_999);
        let lat = rng.random_range(-lat_max..=lat_max);
        let lon = rng.random_range(-lon_max..=lon_max);
        GeoPoint::new(lat, lon).expect("Invalid random GeoPoint")
    }

    #[cfg(any(test))]
    pub fn arb() -> impl Strategy<Value = Self> {
        (-89.999_999f64..89.999_999, -179.999_999f64..179.999_999)
            .prop_map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap())
    }
}
