use crate::geometry::{
    constants::{MERIDIAN_NUMERATOR, WGS84_A, WGS84_E2},
    point::GeoPoint,
};

/// 2点間の距離をメートル単位で返す。
///
/// 2点の平均緯度における子午線曲率半径と卯酉線曲率半径を使った近似式で、
/// 長距離では誤差が大きくなる。
///
/// ```
/// # use geo_logic::{GeoPoint, distance};
/// let a = GeoPoint::new(0.0, 0.0).unwrap();
/// let b = GeoPoint::new(0.0, 1.0).unwrap();
/// assert!((distance(&a, &b) - 111_319.490_793).abs() < 1e-3);
/// ```
pub fn distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat_avg = (from.lat_rad() + to.lat_rad()) / 2.0;
    let w = (1.0 - WGS84_E2 * lat_avg.sin().powi(2)).sqrt();

    // 子午線曲率半径
    let meridian = MERIDIAN_NUMERATOR / w.powi(3);
    // 卯酉線曲率半径
    let prime_vertical = WGS84_A / w;

    let d_lat = (from.lat_rad() - to.lat_rad()) * meridian;
    let d_lon = (from.lon_rad() - to.lon_rad()) * prime_vertical * lat_avg.cos();

    (d_lat * d_lat + d_lon * d_lon).sqrt()
}
