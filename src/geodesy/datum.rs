use crate::{error::Error, geometry::point::GeoPoint};

fn tokyo_lat_lon(lat: f64, lon: f64) -> (f64, f64) {
    (
        lon - lat * 0.000_046_038 - lon * 0.000_083_043 + 0.010_040,
        lat - lat * 0.000_106_95 + lon * 0.000_017_464 + 0.004_601_7,
    )
}

/// 座標を一次式で「日本測地系」へ補正した [`GeoPoint`] を返す。
///
/// ```text
/// new_lat = lon - lat * 0.000046038 - lon * 0.000083043 + 0.010040
/// new_lon = lat - lat * 0.00010695  + lon * 0.000017464 + 0.0046017
/// ```
///
/// 経験的な近似式であり、厳密な測地系変換ではない。補正後の座標は
/// [`GeoPoint::new`] と同じ検証を受けるため、範囲外なら失敗する。
///
/// ```
/// # use geo_logic::to_tokyo_datum;
/// let p = to_tokyo_datum(35.0, 45.0).unwrap();
/// assert!((p.lat() - 45.004_691_735).abs() < 1e-9);
/// assert!((p.lon() - 35.001_644_33).abs() < 1e-9);
/// ```
pub fn to_tokyo_datum(lat: f64, lon: f64) -> Result<GeoPoint, Error> {
    let (new_lat, new_lon) = tokyo_lat_lon(lat, lon);
    GeoPoint::new(new_lat, new_lon).inspect_err(|e| {
        tracing::debug!(lat, lon, new_lat, new_lon, error = %e, "tokyo datum correction out of range");
    })
}

/// [`to_tokyo_datum`] と同じ補正を行い、三角関数の値も前計算しておく。
pub fn to_tokyo_datum_with_trig(lat: f64, lon: f64) -> Result<GeoPoint, Error> {
    to_tokyo_datum(lat, lon).map(GeoPoint::with_trig)
}
