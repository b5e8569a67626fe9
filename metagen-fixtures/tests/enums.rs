use metagen_fixtures::{DetectorType, ParseEnumError};

#[test]
fn test_parse_and_display() {
    for value in DetectorType::ALL {
        assert_eq!(value.to_string().parse::<DetectorType>(), Ok(value));
    }
    assert_eq!("Photodiode".parse(), Ok(DetectorType::Photodiode));
    assert_eq!(DetectorType::CCD.as_str(), "CCD");
}

#[test]
fn test_unknown_value() {
    let err = "ccd".parse::<DetectorType>().unwrap_err();
    assert_eq!(
        err,
        ParseEnumError {
            enumeration: "DetectorType",
            value: "ccd".into()
        }
    );
    assert_eq!(err.to_string(), "invalid DetectorType value: ccd");
}
