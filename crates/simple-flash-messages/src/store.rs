//! Session-backed flash message store
//!
//! [`FlashStore`] is a thin view over the list of pending messages kept in a
//! [`Session`]. Every operation reads the full list from the session before
//! acting and writes it back after mutating, so the session stays the single
//! authoritative copy.
//!
//! ## Example
//!
//! ```rust
//! use simple_flash_messages::FlashStore;
//! use simple_flash_sessions::InMemorySession;
//! use std::sync::Arc;
//!
//! let store = FlashStore::new(Arc::new(InMemorySession::new()));
//!
//! store
//!     .error(vec!["Invalid email!", "Invalid username!"])
//!     .success("Profile saved");
//!
//! // Render only the errors; the success message stays pending
//! let errors = store.display_of("error").unwrap();
//! assert!(errors.contains("Invalid email!"));
//! assert!(store.has_messages_of("success"));
//!
//! // Render and drain whatever remains
//! let rest = store.display().unwrap();
//! assert!(rest.contains("Profile saved"));
//! assert!(!store.has_messages());
//! ```

use crate::error::{FlashError, Result};
use crate::levels::MessageType;
use crate::message::{FlashText, Message};
use crate::settings::FlashSettings;
use crate::template::{Preset, Template, TemplateFactory};
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use serde::{Serialize, Serializer};
use simple_flash_sessions::{Session, SessionError};
use std::fmt;
use std::sync::Arc;

/// The pending flash messages of one session
///
/// A store is not `Clone`: share it through an `Arc` (see
/// [`FlashRegistry`](crate::FlashRegistry)) so every caller in a request
/// works on the same instance. Serializing a store always fails with
/// [`FlashError::NotSerializable`].
pub struct FlashStore {
	session: Arc<dyn Session>,
	session_key: String,
	default_preset: Preset,
	template: Mutex<Option<Template>>,
}

impl FlashStore {
	/// Create a store over `session` with default settings
	pub fn new(session: Arc<dyn Session>) -> Self {
		Self::with_settings(session, &FlashSettings::default())
	}

	/// Create a store using the session key and default preset from `settings`
	pub fn with_settings(session: Arc<dyn Session>, settings: &FlashSettings) -> Self {
		Self {
			session,
			session_key: settings.session_key.clone(),
			default_preset: settings.default_preset,
			template: Mutex::new(None),
		}
	}

	/// Create a store that renders with `template`
	pub fn with_template(session: Arc<dyn Session>, template: Template) -> Self {
		let store = Self::new(session);
		*store.template.lock() = Some(template);
		store
	}

	/// Session key holding the pending messages
	pub fn session_key(&self) -> &str {
		&self.session_key
	}

	/// Queue one or more messages of type `kind`
	///
	/// Unknown types and empty (or whitespace-only) texts are ignored. When
	/// a list is given, each non-empty text becomes its own message, in order.
	pub fn add(&self, text: impl Into<FlashText>, kind: impl AsRef<str>) -> &Self {
		let kind_name = kind.as_ref();
		let Some(kind) = MessageType::parse(kind_name) else {
			tracing::debug!(kind = kind_name, "Ignoring flash message with unknown type");
			return self;
		};

		let new_messages: Vec<Message> = text
			.into()
			.into_texts()
			.into_iter()
			.filter(|text| !text.trim().is_empty())
			.map(|text| Message::new(kind, text))
			.collect();

		if new_messages.is_empty() {
			tracing::debug!(%kind, "Ignoring empty flash message");
			return self;
		}

		let count = new_messages.len();
		let result = self.load().and_then(|mut messages| {
			messages.extend(new_messages);
			self.save(&messages)
		});
		match result {
			Ok(()) => tracing::debug!(%kind, count, "Queued flash messages"),
			Err(e) => tracing::warn!(%kind, error = %e, "Failed to queue flash messages"),
		}

		self
	}

	/// Queue an info message
	pub fn message(&self, text: impl Into<FlashText>) -> &Self {
		self.add(text, MessageType::Info)
	}

	pub fn info(&self, text: impl Into<FlashText>) -> &Self {
		self.add(text, MessageType::Info)
	}

	pub fn success(&self, text: impl Into<FlashText>) -> &Self {
		self.add(text, MessageType::Success)
	}

	pub fn warning(&self, text: impl Into<FlashText>) -> &Self {
		self.add(text, MessageType::Warning)
	}

	pub fn error(&self, text: impl Into<FlashText>) -> &Self {
		self.add(text, MessageType::Error)
	}

	/// Returns `true` if any message is pending
	pub fn has_messages(&self) -> bool {
		self.any_pending(None)
	}

	/// Returns `true` if a message of type `kind` is pending
	///
	/// Always `false` for unknown type names.
	pub fn has_messages_of(&self, kind: impl AsRef<str>) -> bool {
		match MessageType::parse(kind.as_ref()) {
			Some(kind) => self.any_pending(Some(kind)),
			None => false,
		}
	}

	/// Pending messages, in insertion order, without removing them
	pub fn peek(&self) -> Result<Vec<Message>> {
		self.load()
	}

	/// Render every pending message, in insertion order, then clear the store
	pub fn display(&self) -> Result<String> {
		self.take(None)
	}

	/// Render and remove only the messages of type `kind`
	///
	/// Messages of other types stay pending. An unknown type name renders
	/// nothing and leaves the store untouched.
	pub fn display_of(&self, kind: impl AsRef<str>) -> Result<String> {
		let kind_name = kind.as_ref();
		match MessageType::parse(kind_name) {
			Some(kind) => self.take(Some(kind)),
			None => {
				tracing::debug!(kind = kind_name, "Nothing to display for unknown type");
				Ok(String::new())
			}
		}
	}

	/// Remove every pending message
	pub fn clear(&self) -> Result<()> {
		self.save(&[])?;
		tracing::debug!(session_key = %self.session_key, "Cleared flash messages");
		Ok(())
	}

	/// Replace the template used for rendering
	pub fn set_template(&self, template: Template) -> &Self {
		*self.template.lock() = Some(template);
		self
	}

	/// A copy of the active template
	///
	/// Installs the default preset's template first if none is set.
	pub fn template(&self) -> Template {
		self.template_mut().clone()
	}

	/// Mutable access to the active template
	///
	/// Installs the default preset's template first if none is set. The
	/// store's template is locked while the guard is held: calling
	/// [`display`](Self::display), [`template`](Self::template) or `Debug` on
	/// the same store before dropping the guard deadlocks. Prefer
	/// [`update_template`](Self::update_template) unless you need the guard.
	///
	/// ```rust
	/// use simple_flash_messages::FlashStore;
	/// use simple_flash_sessions::InMemorySession;
	/// use std::sync::Arc;
	///
	/// let store = FlashStore::new(Arc::new(InMemorySession::new()));
	/// store.template_mut().set_prefix("<li>").set_postfix("</li>");
	///
	/// let html = store.info("Hi").display().unwrap();
	/// assert!(html.starts_with("<li>"));
	/// ```
	pub fn template_mut(&self) -> MappedMutexGuard<'_, Template> {
		let preset = self.default_preset;
		MutexGuard::map(self.template.lock(), |slot| {
			slot.get_or_insert_with(|| TemplateFactory::create(preset))
		})
	}

	/// Modify the active template in place
	///
	/// Installs the default preset's template first if none is set. The lock
	/// is released before this returns.
	///
	/// ```rust
	/// use simple_flash_messages::FlashStore;
	/// use simple_flash_sessions::InMemorySession;
	/// use std::sync::Arc;
	///
	/// let store = FlashStore::new(Arc::new(InMemorySession::new()));
	/// store
	///     .update_template(|template| {
	///         template.set_prefix("<li>").set_postfix("</li>");
	///     })
	///     .info("Hi");
	///
	/// assert!(store.display().unwrap().starts_with("<li>"));
	/// ```
	pub fn update_template(&self, f: impl FnOnce(&mut Template)) -> &Self {
		f(&mut *self.template_mut());
		self
	}

	fn any_pending(&self, kind: Option<MessageType>) -> bool {
		match self.load() {
			Ok(messages) => messages
				.iter()
				.any(|message| kind.is_none_or(|kind| message.kind == kind)),
			Err(e) => {
				tracing::warn!(error = %e, "Failed to read flash messages");
				false
			}
		}
	}

	/// Render the messages matching `kind` (all when `None`) and remove them
	fn take(&self, kind: Option<MessageType>) -> Result<String> {
		let (selected, remaining): (Vec<Message>, Vec<Message>) = self
			.load()?
			.into_iter()
			.partition(|message| kind.is_none_or(|kind| message.kind == kind));

		if selected.is_empty() {
			return Ok(String::new());
		}

		let html = {
			let template = self.template_mut();
			selected.iter().try_fold(String::new(), |mut html, message| {
				html.push_str(&template.render(message.kind, &message.text)?);
				Ok::<_, FlashError>(html)
			})?
		};

		self.save(&remaining)?;
		tracing::debug!(
			displayed = selected.len(),
			remaining = remaining.len(),
			"Displayed flash messages"
		);
		Ok(html)
	}

	fn load(&self) -> Result<Vec<Message>> {
		let Some(value) = self.session.get(&self.session_key)? else {
			return Ok(Vec::new());
		};

		match serde_json::from_value(value) {
			Ok(messages) => Ok(messages),
			Err(e) => {
				tracing::warn!(
					session_key = %self.session_key,
					error = %e,
					"Discarding undecodable flash messages"
				);
				Ok(Vec::new())
			}
		}
	}

	fn save(&self, messages: &[Message]) -> Result<()> {
		let value = serde_json::to_value(messages)
			.map_err(|e| SessionError::Serialization(e.to_string()))?;
		self.session.set(&self.session_key, value)?;
		Ok(())
	}
}

impl fmt::Debug for FlashStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FlashStore")
			.field("session_key", &self.session_key)
			.field("default_preset", &self.default_preset)
			.field("template", &*self.template.lock())
			.finish_non_exhaustive()
	}
}

/// Renders and clears every pending message, like [`FlashStore::display`].
///
/// A misconfigured template is logged and reported as [`fmt::Error`], which
/// makes `to_string()` panic; call [`FlashStore::display`] to handle the
/// error instead.
impl fmt::Display for FlashStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.display() {
			Ok(html) => f.write_str(&html),
			Err(e) => {
				tracing::error!(error = %e, "Failed to render flash messages");
				Err(fmt::Error)
			}
		}
	}
}

impl Serialize for FlashStore {
	fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
		Err(serde::ser::Error::custom(FlashError::NotSerializable))
	}
}
