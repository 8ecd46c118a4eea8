use proptest::prelude::*;

use super::*;
use crate::error::ErrorKind;

#[test]
fn encode_golden_values() {
    assert_eq!(encode(45.0, -122.0, 5).unwrap(), "c210p");
    assert_eq!(encode(57.64911, 10.40744, 11).unwrap(), "u4pruydqqvj");
    assert_eq!(encode(-33.8688, 151.2093, 8).unwrap(), "r3gx2f77");
    assert_eq!(encode(0.0, 0.0, 1).unwrap(), "s");
}

#[test]
fn encode_prefix_is_coarser_hash() {
    //精度を下げたハッシュは、精度の高いハッシュの接頭辞になるはず
    let long = encode(45.0, -122.0, 12).unwrap();
    for precision in 1..=12u8 {
        let short = encode(45.0, -122.0, precision).unwrap();
        assert!(long.starts_with(&short), "{short} / {long}");
    }
}

#[test]
fn encode_accepts_inclusive_bounds() {
    assert_eq!(encode(90.0, 180.0, 4).unwrap(), "zzzz");
    assert_eq!(encode(-90.0, -180.0, 3).unwrap(), "000");
}

#[test]
fn encode_rejects_precision_out_of_range() {
    let e = encode(10.0, 10.0, 0).unwrap_err();
    assert_eq!(e, Error::PrecisionOutOfRange { precision: 0 });
    assert_eq!(e.kind(), ErrorKind::OutOfRange);

    let e = encode(10.0, 10.0, 17).unwrap_err();
    assert_eq!(e, Error::PrecisionOutOfRange { precision: 17 });
    assert_eq!(e.kind(), ErrorKind::OutOfRange);

    assert_eq!(encode(10.0, 10.0, 16).unwrap().len(), 16);
}

#[test]
fn encode_rejects_coordinates_out_of_range() {
    assert_eq!(
        encode(90.5, 0.0, 5),
        Err(Error::LatitudeOutOfRange { latitude: 90.5 })
    );
    assert_eq!(
        encode(0.0, -180.5, 5),
        Err(Error::LongitudeOutOfRange { longitude: -180.5 })
    );
    assert!(encode(f64::NAN, 0.0, 5).is_err());
}

#[test]
fn decode_returns_cell_center() {
    let c = decode("ezs42").unwrap();
    assert_eq!(c.lat, 42.60498046875);
    assert_eq!(c.lon, -5.60302734375);

    let c = decode("s").unwrap();
    assert_eq!((c.lat, c.lon), (22.5, 22.5));
}

#[test]
fn decode_is_case_insensitive() {
    assert_eq!(decode("u4pruydqqvj"), decode("U4PRUYDQQVJ"));
    assert_eq!(decode("u4PrUyD"), decode("u4pruyd"));
}

#[test]
fn decode_rejects_invalid_symbols() {
    let e = decode("!").unwrap_err();
    assert_eq!(e, Error::InvalidSymbol { symbol: '!', index: 0 });
    assert_eq!(e.kind(), ErrorKind::InvalidSymbol);

    // a, i, l, o はアルファベットに含まれない
    for bad in ["a", "ezsi2", "l", "0o"] {
        assert_eq!(decode(bad).unwrap_err().kind(), ErrorKind::InvalidSymbol, "{bad}");
    }

    assert_eq!(
        decode("ez\u{e9}").unwrap_err(),
        Error::InvalidSymbol {
            symbol: '\u{e9}',
            index: 2
        }
    );
}

#[test]
fn decode_rejects_invalid_length() {
    let e = decode("").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidLength);

    let e = decode("0123456789bcdefgh").unwrap_err();
    assert_eq!(
        e,
        Error::InvalidLength {
            length: 17,
            min: 1,
            max: 16
        }
    );
    assert!(decode("0123456789bcdefg").is_ok());
}

#[test]
fn geohash_type_normalizes_case() {
    let hash: GeoHash = "C210P".parse().unwrap();
    assert_eq!(hash.to_string(), "c210p");
    assert_eq!(hash.precision(), 5);
    assert_eq!(hash, GeoHash::from_lat_lon(45.0, -122.0, 5).unwrap());
    assert_eq!(hash.center(), decode("c210p").unwrap());
    assert!(hash.bounds().contains(45.0, -122.0));

    assert!("c21!".parse::<GeoHash>().is_err());
}

proptest! {
    #[test]
    fn encode_length_and_alphabet(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
        precision in 1u8..=MAX_PRECISION,
    ) {
        let hash = encode(lat, lon, precision).unwrap();
        prop_assert_eq!(hash.len(), precision as usize);
        prop_assert!(hash.bytes().all(|b| BASE32.contains(&b)));
    }

    #[test]
    fn decode_lands_within_half_cell(
        lat in -89.999_999f64..89.999_999,
        lon in -179.999_999f64..179.999_999,
        precision in 1u8..=MAX_PRECISION,
    ) {
        let hash = encode(lat, lon, precision).unwrap();
        let bounds = decode_bounds(&hash).unwrap();
        let center = bounds.center();

        prop_assert!(bounds.contains(lat, lon));
        prop_assert!((center.lat - lat).abs() <= bounds.lat_error());
        prop_assert!((center.lon - lon).abs() <= bounds.lon_error());
    }

    #[test]
    fn error_shrinks_with_precision(
        lat in -89.0f64..89.0,
        lon in -179.0f64..179.0,
        precision in 1u8..MAX_PRECISION,
    ) {
        let coarse = decode_bounds(&encode(lat, lon, precision).unwrap()).unwrap();
        let fine = decode_bounds(&encode(lat, lon, precision + 1).unwrap()).unwrap();

        prop_assert!(fine.lat_error() <= coarse.lat_error());
        prop_assert!(fine.lon_error() <= coarse.lon_error());
        prop_assert!(fine.lat_error() * fine.lon_error() < coarse.lat_error() * coarse.lon_error());
    }

    #[test]
    fn decode_matches_uppercase(p in crate::GeoPoint::arb(), precision in 1u8..=MAX_PRECISION) {
        let hash = encode(p.lat(), p.lon(), precision).unwrap();
        prop_assert_eq!(decode(&hash), decode(&hash.to_ascii_uppercase()));
    }
}
