//! Unit tests for zn-core primitives.

#[cfg(test)]
mod code {
    use crate::{CoreError, ZipCode};

    #[test]
    fn parse_roundtrip() {
        let code = ZipCode::parse("10001").unwrap();
        assert_eq!(code.to_string(), "10001");
    }

    #[test]
    fn leading_zeros_survive() {
        // Holtsville, NY — the lowest zip in the USPS dataset.
        let code = ZipCode::parse("00501").unwrap();
        assert_eq!(code.to_string(), "00501");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ZipCode::parse("1234").is_err());
        assert!(ZipCode::parse("123456").is_err());
        assert!(ZipCode::parse("").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        for s in ["1000a", "10 01", "-1000", "1Ŵ001", "10.01"] {
            match ZipCode::parse(s) {
                Err(CoreError::InvalidCode(got)) => assert_eq!(got, s),
                other => panic!("expected InvalidCode for {s:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn ordering_and_equality() {
        let a = ZipCode::parse("10001").unwrap();
        let b = ZipCode::parse("10002").unwrap();
        assert!(a < b);
        assert_eq!(a, ZipCode::parse("10001").unwrap());
    }

    #[test]
    fn from_str_via_parse() {
        let code: ZipCode = "90210".parse().unwrap();
        assert_eq!(String::from(code), "90210");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(40.7508, -73.9961);
        assert!(p.distance_miles(p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude_is_about_69_miles() {
        let a = GeoPoint::new(40.0, -74.0);
        let b = GeoPoint::new(41.0, -74.0);
        let d = a.distance_miles(b);
        assert!((d - 69.1).abs() < 0.3, "got {d}");
    }

    #[test]
    fn manhattan_pair() {
        // 10001 → 10002 is roughly 2.2 miles.
        let a = GeoPoint::new(40.7508, -73.9961);
        let b = GeoPoint::new(40.7168, -73.9861);
        let d = a.distance_miles(b);
        assert!((d - 2.2).abs() < 0.3, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(40.7508, -73.9961);
        let b = GeoPoint::new(34.0901, -118.4065);
        assert!((a.distance_miles(b) - b.distance_miles(a)).abs() < 1e-9);
    }

    #[test]
    fn try_new_accepts_range_edges() {
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(GeoPoint::try_new(90.01, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, -180.5).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, f64::INFINITY).is_err());
    }
}

#[cfg(test)]
mod ids {
    use crate::FeatureId;

    #[test]
    fn index_cast() {
        assert_eq!(FeatureId(42).index(), 42);
    }

    #[test]
    fn display() {
        assert_eq!(FeatureId(7).to_string(), "FeatureId(7)");
    }
}
