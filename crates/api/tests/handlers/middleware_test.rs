use axum::http::StatusCode;
use rstest::rstest;
use whenmeet_api::middleware::error_handling::{AppError, map_error};
use whenmeet_core::errors::MeetError;

#[rstest]
#[case(MeetError::NotFound("Event not found".to_string()), StatusCode::NOT_FOUND)]
#[case(MeetError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(MeetError::NotConfigured, StatusCode::SERVICE_UNAVAILABLE)]
#[case(MeetError::Store(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    MeetError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: MeetError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_becomes_store_error() {
    let error = AppError::from(eyre::eyre!("connection refused"));

    assert!(matches!(error.0, MeetError::Store(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
