//! Session trait and errors

use serde_json::Value;
use thiserror::Error;

/// Session errors
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
	#[error("Session backend error: {0}")]
	Backend(String),
	#[error("Serialization error: {0}")]
	Serialization(String),
}

/// Key-value storage scoped to one user session.
///
/// Values are JSON so that callers can persist any serde-serializable data
/// under a key of their choosing. Implementations use interior mutability:
/// every method takes `&self` so a session can be shared by all code handling
/// the same request.
///
/// ## Example
///
/// ```rust
/// use simple_flash_sessions::{InMemorySession, Session};
/// use serde_json::json;
///
/// let session = InMemorySession::new();
/// session.set("user_id", json!(42)).unwrap();
/// assert_eq!(session.get("user_id").unwrap(), Some(json!(42)));
///
/// session.remove("user_id").unwrap();
/// assert_eq!(session.get("user_id").unwrap(), None);
/// ```
pub trait Session: Send + Sync {
	/// Load the value stored under `key`
	fn get(&self, key: &str) -> Result<Option<Value>, SessionError>;

	/// Store `value` under `key`, replacing any previous value
	fn set(&self, key: &str, value: Value) -> Result<(), SessionError>;

	/// Delete the value stored under `key`
	fn remove(&self, key: &str) -> Result<(), SessionError>;

	/// Check if a value is stored under `key`
	fn contains(&self, key: &str) -> Result<bool, SessionError> {
		Ok(self.get(key)?.is_some())
	}
}
