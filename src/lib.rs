//! # simple-flash
//!
//! Session-backed one-time flash messages for server-rendered web pages.
//!
//! A request handler queues short notifications ("Invalid email!",
//! "Profile saved") in the visitor's session. The next page view renders
//! them into HTML through a [`Template`] and removes them from the session,
//! so each message is shown exactly once.
//!
//! ## Feature Flags
//!
//! - `test`: assertion helpers and rstest fixtures under [`test`]
//! - `full`: everything above
//!
//! ## Quick Example
//!
//! ```rust
//! use simple_flash::prelude::*;
//! use simple_flash::sessions::{InMemorySessionBackend, session_id_from_cookie_header};
//!
//! let registry = FlashRegistry::new(InMemorySessionBackend::new());
//!
//! // POST /signup
//! let session_id = session_id_from_cookie_header("sessionid=abc123", "sessionid").unwrap();
//! registry
//!     .store(&session_id)
//!     .unwrap()
//!     .error(vec!["Invalid email!", "Invalid username!"])
//!     .info("Please try again.");
//!
//! // GET /signup
//! let flash = registry.store(&session_id).unwrap();
//! flash.set_template(TemplateFactory::create(Preset::Bootstrap5));
//!
//! let errors = flash.display_of("error").unwrap();
//! assert!(errors.contains("alert-danger"));
//! assert!(flash.has_messages_of("info"));
//!
//! let rest = flash.display().unwrap();
//! assert!(rest.contains("Please try again."));
//! assert!(!flash.has_messages());
//! ```

pub use simple_flash_sessions as sessions;

#[cfg(feature = "test")]
pub use simple_flash_test as test;

pub use simple_flash_messages::{
	FlashError, FlashRegistry, FlashSettings, FlashStore, FlashText, Message, MessageType, Preset,
	Result, Template, TemplateFactory,
};
pub use simple_flash_sessions::{Session, SessionBackend, SessionError};

/// Re-export commonly used types
pub mod prelude {
	pub use simple_flash_messages::prelude::*;
	pub use simple_flash_sessions::{Session, SessionBackend};
}
