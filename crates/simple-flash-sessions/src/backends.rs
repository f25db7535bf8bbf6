//! In-memory session backend
//!
//! Sessions are lost when the application restarts.
//!
//! ## Example
//!
//! ```rust
//! use simple_flash_sessions::{InMemorySessionBackend, SessionBackend};
//! use serde_json::json;
//!
//! let backend = InMemorySessionBackend::new();
//! backend.open("session_xyz").unwrap().set("theme", json!("dark")).unwrap();
//!
//! assert!(backend.exists("session_xyz").unwrap());
//! backend.delete("session_xyz").unwrap();
//! assert!(!backend.exists("session_xyz").unwrap());
//! ```

use crate::session::{Session, SessionError};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Session backend trait
///
/// Resolves a session id to the [`Session`] holding that session's data.
pub trait SessionBackend: Send + Sync {
	/// Open the session with the given id, creating it on first access
	fn open(&self, session_id: &str) -> Result<Arc<dyn Session>, SessionError>;

	/// Delete a session and all of its data
	fn delete(&self, session_id: &str) -> Result<(), SessionError>;

	/// Check if a session exists
	fn exists(&self, session_id: &str) -> Result<bool, SessionError>;
}

/// A single in-memory session
///
/// Cloning produces another handle onto the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
	data: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemorySession {
	/// Create a new, empty session
	pub fn new() -> Self {
		Self::default()
	}

	/// Keys currently stored in the session
	pub fn keys(&self) -> Vec<String> {
		self.data.read().keys().cloned().collect()
	}

	/// Returns `true` if the session holds no data
	pub fn is_empty(&self) -> bool {
		self.data.read().is_empty()
	}
}

impl Session for InMemorySession {
	fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
		Ok(self.data.read().get(key).cloned())
	}

	fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
		self.data.write().insert(key.to_string(), value);
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), SessionError> {
		self.data.write().remove(key);
		Ok(())
	}
}

/// In-memory session backend
///
/// Keeps one [`InMemorySession`] per session id.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionBackend {
	sessions: Arc<RwLock<HashMap<String, InMemorySession>>>,
}

impl InMemorySessionBackend {
	/// Create a new in-memory session backend
	pub fn new() -> Self {
		Self::default()
	}

	/// Get the concrete session for `session_id`, creating it if needed
	pub fn session(&self, session_id: &str) -> InMemorySession {
		if let Some(session) = self.sessions.read().get(session_id) {
			return session.clone();
		}

		let mut sessions = self.sessions.write();
		sessions
			.entry(session_id.to_string())
			.or_insert_with(|| {
				tracing::debug!(session_id, "Creating in-memory session");
				InMemorySession::new()
			})
			.clone()
	}

	/// Number of sessions held by the backend
	pub fn len(&self) -> usize {
		self.sessions.read().len()
	}

	/// Returns `true` if the backend holds no sessions
	pub fn is_empty(&self) -> bool {
		self.sessions.read().is_empty()
	}
}

impl SessionBackend for InMemorySessionBackend {
	fn open(&self, session_id: &str) -> Result<Arc<dyn Session>, SessionError> {
		Ok(Arc::new(self.session(session_id)))
	}

	fn delete(&self, session_id: &str) -> Result<(), SessionError> {
		self.sessions.write().remove(session_id);
		Ok(())
	}

	fn exists(&self, session_id: &str) -> Result<bool, SessionError> {
		Ok(self.sessions.read().contains_key(session_id))
	}
}
