//! Registry error types and handling.
//!
//! This module defines the error taxonomy of the resolver's public query
//! surface. Lookup misses, unknown families and malformed identifiers are
//! ordinary error values; data-integrity violations are reserved for defects
//! that would make every subsequent answer wrong.

use log::error;

use crate::services::remote::RemoteError;

/// Represents possible errors returned by registry queries
#[derive(Debug)]
pub enum RegistryError {
	/// The queried selector or chain identifier exists in no consulted source
	///
	/// Carries the attempted key and family for diagnostics
	NotFound(String),

	/// A family name was supplied that the registry does not recognize
	UnsupportedFamily(String),

	/// A chain identifier could not be parsed into the family's native type
	MalformedIdentifier(String),

	/// The remote datasource could not be fetched; local data is unaffected
	SourceUnavailable(String),

	/// The selector uniqueness invariant is broken
	///
	/// Continuing would silently return wrong answers; callers are expected
	/// to treat this as fatal.
	DataIntegrityViolation(String),
}

impl RegistryError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::NotFound(msg) => format!("Not found: {}", msg),
			Self::UnsupportedFamily(msg) => format!("Unsupported family: {}", msg),
			Self::MalformedIdentifier(msg) => format!("Malformed identifier: {}", msg),
			Self::SourceUnavailable(msg) => format!("Source unavailable: {}", msg),
			Self::DataIntegrityViolation(msg) => format!("Data integrity violation: {}", msg),
		}
	}

	/// Creates a new not-found error with logging
	pub fn not_found(msg: impl Into<String>) -> Self {
		let error = Self::NotFound(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new unsupported-family error with logging
	pub fn unsupported_family(msg: impl Into<String>) -> Self {
		let error = Self::UnsupportedFamily(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new malformed-identifier error with logging
	pub fn malformed_identifier(msg: impl Into<String>) -> Self {
		let error = Self::MalformedIdentifier(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new source-unavailable error with logging
	pub fn source_unavailable(msg: impl Into<String>) -> Self {
		let error = Self::SourceUnavailable(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new data-integrity-violation error with logging
	pub fn data_integrity_violation(msg: impl Into<String>) -> Self {
		let error = Self::DataIntegrityViolation(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for RegistryError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for RegistryError {}

/// Conversion from remote errors: any remote failure reaching a caller means
/// the datasource was unavailable for that query
impl From<RemoteError> for RegistryError {
	fn from(err: RemoteError) -> Self {
		Self::source_unavailable(err.to_string())
	}
}
