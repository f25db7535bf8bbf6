//! Flash messages for simple-flash
//!
//! Transient, one-time notifications ("Invalid email!") are queued in the
//! user's session and rendered into HTML on the next page view, after which
//! they are removed.
//!
//! ## Features
//!
//! - **Session-backed store**: [`FlashStore`] keeps pending messages in any
//!   [`Session`](simple_flash_sessions::Session) under one reserved key
//! - **Typed messages**: four [`MessageType`]s (info, success, warning, error)
//! - **Partial retrieval**: display one type and keep the rest for later
//! - **Swappable templates**: [`Template`] and [`TemplateFactory`] presets for
//!   Bootstrap, Foundation, Bulma, UIkit and other CSS frameworks
//! - **Per-session sharing**: [`FlashRegistry`] hands out one store per session
//!
//! ## Example
//!
//! ```rust
//! use simple_flash_messages::{FlashRegistry, Preset, TemplateFactory};
//! use simple_flash_sessions::InMemorySessionBackend;
//!
//! let registry = FlashRegistry::new(InMemorySessionBackend::new());
//! let flash = registry.store("session-1").unwrap();
//!
//! flash
//!     .error(vec!["Invalid email!", "Invalid username!"])
//!     .warning("Warning message.")
//!     .info("Info message.")
//!     .success("Success message!");
//!
//! flash.set_template(TemplateFactory::create(Preset::Uikit3));
//!
//! let html = flash.display().unwrap();
//! assert!(html.contains("uk-alert-danger"));
//! assert!(!flash.has_messages());
//! ```

pub mod error;
pub mod levels;
pub mod message;
pub mod registry;
pub mod settings;
pub mod store;
pub mod template;

pub use error::{FlashError, Result};
pub use levels::MessageType;
pub use message::{FlashText, Message};
pub use registry::FlashRegistry;
pub use settings::FlashSettings;
pub use store::FlashStore;
pub use template::{Preset, Template, TemplateFactory};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::error::FlashError;
	pub use crate::levels::*;
	pub use crate::message::*;
	pub use crate::registry::*;
	pub use crate::settings::*;
	pub use crate::store::*;
	pub use crate::template::*;
}
