use std::f64::consts::{PI, TAU};

use crate::{
    error::Error,
    geometry::{
        constants::{WGS84_A, deg_to_rad, rad_to_deg},
        lat_lon::LatLon,
        point::GeoPoint,
    },
};

/// 基点からの距離。長半径で正規化した角距離とその正弦・余弦を保持する。
#[derive(Debug, Clone, Copy, PartialEq)]
struct Distance {
    meters: f64,
    angular: f64,
    sin: f64,
    cos: f64,
}

impl Distance {
    fn new(meters: f64) -> Self {
        let angular = meters / WGS84_A;
        let (sin, cos) = angular.sin_cos();
        Distance {
            meters,
            angular,
            sin,
            cos,
        }
    }
}

/// 北から時計回りの方位。
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bearing {
    degrees: f64,
    radians: f64,
    sin: f64,
    cos: f64,
}

impl Bearing {
    fn new(degrees: f64) -> Self {
        let radians = deg_to_rad(degrees);
        let (sin, cos) = radians.sin_cos();
        Bearing {
            degrees,
            radians,
            sin,
            cos,
        }
    }
}

/// 基点 `pivot` から方位 `bearing` に距離 `distance` 進んだ到達点を表す型。
///
/// 基点は借用するため、`GeodesicRay` が基点より長く生きることはない。
/// 距離・方位を変更すると、そのたびに到達点が再計算される。
///
/// ```
/// # use geo_logic::{GeoPoint, GeodesicRay};
/// let pivot = GeoPoint::new_with_trig(0.0, 0.0).unwrap();
/// let mut ray = GeodesicRay::new(&pivot, 100_000.0, 90.0);
/// assert!(ray.lat().abs() < 1e-12);
/// assert!((ray.lon() - 0.898_315_284_119_5).abs() < 1e-9);
///
/// ray.set_bearing(0.0);
/// assert!((ray.lat() - 0.898_315_284_119_5).abs() < 1e-9);
/// assert!(ray.lon().abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicRay<'a> {
    pivot: &'a GeoPoint,
    distance: Distance,
    bearing: Bearing,
    lat: f64,
    lon: f64,
    lat_rad: f64,
    lon_rad: f64,
}

impl<'a> GeodesicRay<'a> {
    /// 基点、距離（メートル）、方位（度）から到達点を計算する。
    pub fn new(pivot: &'a GeoPoint, distance: f64, bearing: f64) -> GeodesicRay<'a> {
        let mut ray = GeodesicRay {
            pivot,
            distance: Distance::new(distance),
            bearing: Bearing::new(bearing),
            lat: 0.0,
            lon: 0.0,
            lat_rad: 0.0,
            lon_rad: 0.0,
        };
        ray.update();
        ray
    }

    /// 距離（メートル）を変更し、到達点を再計算する。
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = Distance::new(distance);
        self.update();
    }

    /// 方位（度）を変更し、到達点を再計算する。
    pub fn set_bearing(&mut self, bearing: f64) {
        self.bearing = Bearing::new(bearing);
        self.update();
    }

    fn update(&mut self) {
        let trig = self.pivot.trig();
        let lat_cos_dist_sin = trig.lat_cos * self.distance.sin;

        self.lat_rad =
            (trig.lat_sin * self.distance.cos + lat_cos_dist_sin * self.bearing.cos).asin();
        // 経度は [-π, π] に収める
        self.lon_rad = (self.pivot.lon_rad()
            + (lat_cos_dist_sin * self.bearing.sin)
                .atan2(self.distance.cos - trig.lat_sin.powi(2))
            + PI)
            .rem_euclid(TAU)
            - PI;

        self.lat = rad_to_deg(self.lat_rad);
        self.lon = rad_to_deg(self.lon_rad);
    }

    /// 基点
    pub fn pivot(&self) -> &'a GeoPoint {
        self.pivot
    }

    /// 距離（メートル）
    pub fn distance(&self) -> f64 {
        self.distance.meters
    }

    /// 長半径で正規化した角距離（ラジアン）
    pub fn angular_distance(&self) -> f64 {
        self.distance.angular
    }

    /// 方位（度）
    pub fn bearing(&self) -> f64 {
        self.bearing.degrees
    }

    /// 方位（ラジアン）
    pub fn bearing_rad(&self) -> f64 {
        self.bearing.radians
    }

    /// 到達点の緯度（度）
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// 到達点の経度（度）
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// 到達点の緯度（ラジアン）
    pub fn lat_rad(&self) -> f64 {
        self.lat_rad
    }

    /// 到達点の経度（ラジアン）
    pub fn lon_rad(&self) -> f64 {
        self.lon_rad
    }

    /// 到達点の緯度・経度
    pub fn destination(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }

    /// 到達点を [`GeoPoint`] に変換する。到達点が極や経度 ±180° に一致する場合は失敗する。
    pub fn to_point(&self) -> Result<GeoPoint, Error> {
        GeoPoint::new(self.lat, self.lon)
    }
}
