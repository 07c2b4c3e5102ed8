//! [`Error`] type.

/// An error from argument validation, the API or the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A required argument was missing or blank.
	#[error("argument `{0}` must not be empty")]
	InvalidArgument(&'static str),
	/// A date argument is outside the range the API serves.
	#[error("argument `{argument}` is out of range: {message}")]
	OutOfRange {
		/// The offending argument.
		argument: &'static str,
		/// The violated bound.
		message: String,
	},
	/// HTTP error.
	#[error("http error: {0}")]
	HttpError(#[from] reqwest::Error),
	/// A [`Network`](crate::Network) implementation failed to produce a response.
	#[error("transport error: {0}")]
	Transport(String),
	/// Failed to parse the response.
	#[error("failed to parse the response: {0}")]
	ResponseParseError(#[from] serde_json::Error),
}
