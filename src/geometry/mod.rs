//! 地理座標を扱うための型や定数。
//!
//! 本モジュールでは、角度は特に明記しない限り度（°）単位、距離はメートル（m）単位で扱います。

/// WGS84 楕円体の定数と度・ラジアンの変換。
pub mod constants;

/// デコード結果を表す、検証されていない `LatLon` 型。
pub mod lat_lon;

/// 緯度・経度で定義される検証済みの `GeoPoint` 型。
pub mod point;
