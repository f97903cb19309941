//! Error type shared by the settings router and its adapters

use std::fmt;

pub type DeckResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// Settings key lacks the separator (or parts) its scope needs
	MalformedKey(String),
	/// Caller is not an administrator
	PermissionDenied,
	/// Value failed validation
	InvalidValue(String),

	/// Builder or options misuse
	ConfigError(String),
	/// Storage backend failure (cause is logged by the adapter)
	DbError,
	Internal(String),
}

impl Error {
	/// Errors a caller caused and should see as-is. None of them are retryable.
	pub fn is_user_facing(&self) -> bool {
		matches!(self, Error::MalformedKey(_) | Error::PermissionDenied | Error::InvalidValue(_))
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::MalformedKey(key) => write!(f, "Malformed settings key: {}", key),
			Error::PermissionDenied => write!(f, "Permission denied"),
			Error::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
			Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
			Error::DbError => write!(f, "Database error"),
			Error::Internal(msg) => write!(f, "Internal error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::InvalidValue(err.to_string())
	}
}


// vim: ts=4
