use standup_summariser::errors::SummaryError;
use std::error::Error;

#[test]
fn test_summary_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummaryError::ConfigError("SLACK_CHANNEL_ID".to_string());
    assert_error(&error);
}

#[test]
fn test_summary_error_display() {
    let error = SummaryError::SlackApiError("channel_not_found".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access Slack API: channel_not_found"
    );

    let error = SummaryError::CredentialError("secret payload parse".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to resolve bot credentials: secret payload parse"
    );

    let error = SummaryError::InvalidModelResponse("empty reply list".to_string());
    assert_eq!(format!("{error}"), "Invalid model response: empty reply list");

    let error = SummaryError::HttpError("connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: connection refused"
    );
}

#[test]
fn test_summary_error_from_conversions() {
    // Conversion from anyhow::Error
    let err = anyhow::anyhow!("test error");
    let summary_err: SummaryError = err.into();

    match summary_err {
        SummaryError::SlackApiError(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }

    // We can't easily construct a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> conversion compiles
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummaryError {
        SummaryError::from(err)
    }
}
