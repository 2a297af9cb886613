use findpro_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Professional not found".to_string());
    let validation = BookingError::Validation("Invalid input".to_string());
    let config = BookingError::Config("Missing fixture".to_string());
    let internal = BookingError::Internal(eyre::eyre!("Disk failure"));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Professional not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(config.to_string(), "Configuration error: Missing fixture");
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_from_report_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let booking_error: BookingError = eyre::Report::new(io_error).into();

    assert!(matches!(booking_error, BookingError::Internal(_)));
    assert!(booking_error.to_string().contains("IO error"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_errors_convert_into_reports() {
    let report = eyre::Report::new(BookingError::Validation("bad window".to_string()));

    assert!(report.to_string().contains("bad window"));
    assert!(report.downcast_ref::<BookingError>().is_some());
    assert!(report.source().is_none());
}
