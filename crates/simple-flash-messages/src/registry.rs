//! Per-session access to the shared flash store
//!
//! A [`FlashRegistry`] is created once by the hosting application and handed
//! to request handlers. For a given session id it returns the same
//! [`FlashStore`] instance to every caller until the session is released, so
//! code that adds messages, code that picks a template and code that renders
//! agree on both without passing the store around. Pending messages live in
//! the session; the registry only keeps the store (and its template) alive.
//!
//! ## Example
//!
//! ```rust
//! use simple_flash_messages::FlashRegistry;
//! use simple_flash_sessions::InMemorySessionBackend;
//!
//! let registry = FlashRegistry::new(InMemorySessionBackend::new());
//!
//! // A form handler queues messages...
//! registry
//!     .flash("session-1", "Invalid email!", "error", None)
//!     .unwrap()
//!     .warning("Please review your settings");
//!
//! // ...and the page renderer picks them up.
//! let html = registry.store("session-1").unwrap().display().unwrap();
//! assert!(html.contains("Invalid email!"));
//! assert!(html.contains("Please review your settings"));
//! ```

use crate::error::Result;
use crate::message::FlashText;
use crate::settings::FlashSettings;
use crate::store::FlashStore;
use crate::template::Template;
use parking_lot::Mutex;
use simple_flash_sessions::SessionBackend;
use std::collections::HashMap;
use std::sync::Arc;

/// Hands out one shared [`FlashStore`] per session
pub struct FlashRegistry<B: SessionBackend> {
	backend: B,
	settings: FlashSettings,
	stores: Mutex<HashMap<String, Arc<FlashStore>>>,
}

impl<B: SessionBackend> FlashRegistry<B> {
	/// Create a registry with default settings
	pub fn new(backend: B) -> Self {
		Self::with_settings(backend, FlashSettings::default())
	}

	pub fn with_settings(backend: B, settings: FlashSettings) -> Self {
		Self {
			backend,
			settings,
			stores: Mutex::new(HashMap::new()),
		}
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	pub fn settings(&self) -> &FlashSettings {
		&self.settings
	}

	/// The shared store of `session_id`
	///
	/// Opens the session and creates the store on first access; later calls
	/// return the same instance until [`release`](Self::release).
	pub fn store(&self, session_id: &str) -> Result<Arc<FlashStore>> {
		let mut stores = self.stores.lock();
		if let Some(store) = stores.get(session_id) {
			return Ok(Arc::clone(store));
		}

		let session = self.backend.open(session_id)?;
		let store = Arc::new(FlashStore::with_settings(session, &self.settings));
		stores.insert(session_id.to_string(), Arc::clone(&store));
		tracing::debug!(session_id, "Opened flash store");
		Ok(store)
	}

	/// Queue `text` as a `kind` message on the store of `session_id`
	///
	/// When `template` is given it becomes the store's template. Empty texts
	/// and unknown types queue nothing, so this doubles as a plain accessor.
	pub fn flash(
		&self,
		session_id: &str,
		text: impl Into<FlashText>,
		kind: impl AsRef<str>,
		template: Option<Template>,
	) -> Result<Arc<FlashStore>> {
		let store = self.store(session_id)?;
		if let Some(template) = template {
			store.set_template(template);
		}
		store.add(text, kind);
		Ok(store)
	}

	/// Forget the store of `session_id`, e.g. when the session ends
	///
	/// Pending messages stay in the session; only the store and its template
	/// are dropped. Returns `true` if a store was held.
	pub fn release(&self, session_id: &str) -> bool {
		let released = self.stores.lock().remove(session_id).is_some();
		if released {
			tracing::debug!(session_id, "Released flash store");
		}
		released
	}

	/// Number of sessions with a store
	pub fn len(&self) -> usize {
		self.stores.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.stores.lock().is_empty()
	}
}
