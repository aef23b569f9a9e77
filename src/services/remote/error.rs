//! Remote datasource error types.
//!
//! This module defines the error types that can occur while fetching and
//! parsing the remote selector document.

use log::error;

/// Represents possible errors when consulting the remote datasource
#[derive(Debug)]
pub enum RemoteError {
	/// The HTTP fetch failed: connection error, timeout or non-success status
	FetchError(String),

	/// The response body was not a well-formed selector document
	ParseError(String),
}

impl RemoteError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::FetchError(msg) => format!("Fetch error: {}", msg),
			Self::ParseError(msg) => format!("Parse error: {}", msg),
		}
	}

	/// Creates a new fetch error with logging
	pub fn fetch_error(msg: impl Into<String>) -> Self {
		let error = Self::FetchError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new parse error with logging
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for RemoteError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for RemoteError {}

impl From<reqwest::Error> for RemoteError {
	fn from(err: reqwest::Error) -> Self {
		Self::fetch_error(err.to_string())
	}
}
