use std::f64::consts::PI;

/// WGS84 楕円体の長半径（メートル）
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 楕円体の短半径（メートル）
pub const WGS84_B: f64 = 6_356_752.314_245;

/// 離心率の二乗 `(a² - b²) / a²`
pub const WGS84_E2: f64 = 0.006_694_379_990_197;

/// 子午線曲率半径の分子 `a * (1 - e²)`
#[allow(clippy::excessive_precision)]
pub const MERIDIAN_NUMERATOR: f64 = 6_335_439.327_292_464_877_011;

/// 度からラジアンへの変換係数
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// ラジアンから度への変換係数
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// 度をラジアンに変換する。
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

/// ラジアンを度に変換する。
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meridian_numerator_matches_axis_and_eccentricity() {
        assert!((WGS84_A * (1.0 - WGS84_E2) - MERIDIAN_NUMERATOR).abs() < 1e-6);
    }

    #[test]
    fn eccentricity_matches_axes() {
        let e2 = (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_A * WGS84_A);
        assert!((e2 - WGS84_E2).abs() < 1e-12);
    }

    #[test]
    fn degree_radian_round_trip() {
        for deg in [-180.0, -90.0, -45.5, 0.0, 12.345, 90.0, 179.999] {
            let back = rad_to_deg(deg_to_rad(deg));
            assert!((back - deg).abs() < 1e-12, "{deg} -> {back}");
        }
        assert_eq!(deg_to_rad(180.0), PI);
    }
}
