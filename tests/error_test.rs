use std::io;

use wikicoord::{error::Error, Coordinate};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    assert_eq!(Error::NoCoordData.to_string(), "No coord data found.");

    let err = Error::InvalidLatitude {
        coordinate: Coordinate::new(-97.98777777, -86.94444444),
    };
    assert_eq!(err.to_string(), "Invalid latitude: -97.98777");

    let err = Error::InvalidLongitude {
        coordinate: Coordinate::new(-27.98777777, -186.94444444),
    };
    assert_eq!(err.to_string(), "Invalid longitude: -186.9444");

    let err = Error::InputsFailed { failed: 1, total: 3 };
    assert_eq!(err.to_string(), "1 of 3 input(s) yielded no coordinate.");
}

#[test]
fn test_error_coordinate() {
    assert_eq!(Error::NoCoordData.coordinate(), Coordinate::default());
    assert_eq!(
        Error::MalformedTemplate("x".to_string()).coordinate(),
        Coordinate::default()
    );
    let coordinate = Coordinate::new(100.0, 0.0);
    let err = Error::InvalidLatitude { coordinate };
    assert_eq!(err.coordinate(), coordinate);
    assert!(err.is_validation());
    assert!(!Error::NoCoordData.is_validation());
}
