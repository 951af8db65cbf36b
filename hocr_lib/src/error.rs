//! Error types for the library layer.

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding the result-pipeline and statistics failures.
#[derive(thiserror::Error, Debug)]
pub enum HocrError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] regattacentral_api::Error),
    /// A result record lacked a required field.
    #[error("Malformed result record #{index}: missing {field}")]
    MalformedResult { index: usize, field: &'static str },
    /// No link for the event on the year's results-listing page.
    #[error("Event not found on results page: {event}")]
    EventNotFound { event: String },
    /// The results payload carried no race results.
    #[error("No results available for {event} in {year}")]
    ResultsUnavailable { year: i32, event: String },
    /// A statistic was requested over an empty field.
    #[error("No results to compute statistics over")]
    EmptyResults,
    /// A cutoff fraction outside [0, 1].
    #[error("Invalid fraction {0}: must be between 0 and 1")]
    InvalidFraction(f64),
    /// The year has no regatta instance configured.
    #[error("Unsupported year: {0}")]
    UnsupportedYear(i32),
    /// Configuration failed to load or validate.
    #[error("Config error: {0}")]
    Config(String),
    /// The results-listing HTML could not be processed.
    #[error("HTML error: {0}")]
    Html(String),
}
