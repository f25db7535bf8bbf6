//! # simple-flash sessions
//!
//! The session collaborator used by the flash message store.
//!
//! A [`Session`] is a small key-value store holding JSON values for a single
//! logical user session. A [`SessionBackend`] hands out isolated sessions keyed
//! by session id, so data written during one request is visible to the next
//! request carrying the same session id and invisible to every other session.
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_flash_sessions::{InMemorySessionBackend, SessionBackend};
//! use serde_json::json;
//!
//! let backend = InMemorySessionBackend::new();
//!
//! let session = backend.open("session_key_123").unwrap();
//! session.set("cart", json!(["item1", "item2"])).unwrap();
//!
//! // A later request for the same session sees the stored value
//! let again = backend.open("session_key_123").unwrap();
//! assert_eq!(again.get("cart").unwrap(), Some(json!(["item1", "item2"])));
//!
//! // Other sessions are isolated
//! let other = backend.open("another_session").unwrap();
//! assert_eq!(other.get("cart").unwrap(), None);
//! ```

pub mod backends;
pub mod cookie;
pub mod session;

pub use backends::{InMemorySession, InMemorySessionBackend, SessionBackend};
pub use cookie::{DEFAULT_SESSION_COOKIE, session_id_from_cookie_header};
pub use session::{Session, SessionError};
