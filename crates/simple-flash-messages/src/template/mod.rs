//! HTML templates for rendering flash messages
//!
//! A [`Template`] turns one message into an HTML fragment:
//!
//! ```text
//! prefix + wrapper(render_class, text) + postfix
//! ```
//!
//! The wrapper is a format string with two `%s` slots, filled with the CSS
//! class for the message type and then the message text. [`TemplateFactory`]
//! builds templates matching the markup of common CSS frameworks.
//!
//! ## Example
//!
//! ```rust
//! use simple_flash_messages::{MessageType, Template};
//!
//! let template = Template::new()
//!     .with_prefix("<li>")
//!     .with_postfix("</li>")
//!     .with_wrapper(r#"<span class="%s">%s</span>"#);
//!
//! let html = template.render(MessageType::Error, "Invalid email!").unwrap();
//! assert_eq!(html, r#"<li><span class="danger">Invalid email!</span></li>"#);
//! ```

mod factory;
mod format;
mod presets;

pub use factory::TemplateFactory;
pub use format::fill_slots;
pub use presets::Preset;

use crate::error::{FlashError, Result};
use crate::levels::MessageType;
use std::collections::HashMap;

/// Formatting rules used to render flash messages as HTML
///
/// A freshly constructed template has no prefix, postfix or wrapper and
/// cannot render until all three are set. The class map starts out with
/// the default mapping (`error` renders as `danger`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	prefix: Option<String>,
	postfix: Option<String>,
	wrapper: Option<String>,
	classes: HashMap<MessageType, String>,
}

impl Template {
	/// Create an unconfigured template
	pub fn new() -> Self {
		Self {
			prefix: None,
			postfix: None,
			wrapper: None,
			classes: default_classes(),
		}
	}

	pub fn prefix(&self) -> Option<&str> {
		self.prefix.as_deref()
	}

	pub fn postfix(&self) -> Option<&str> {
		self.postfix.as_deref()
	}

	pub fn wrapper(&self) -> Option<&str> {
		self.wrapper.as_deref()
	}

	pub fn classes(&self) -> &HashMap<MessageType, String> {
		&self.classes
	}

	/// The render class for `kind`, falling back to the type name when unmapped
	pub fn class_for(&self, kind: MessageType) -> &str {
		self.classes
			.get(&kind)
			.map(String::as_str)
			.unwrap_or(kind.as_str())
	}

	pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
		self.prefix = Some(prefix.into());
		self
	}

	pub fn set_postfix(&mut self, postfix: impl Into<String>) -> &mut Self {
		self.postfix = Some(postfix.into());
		self
	}

	/// Set the wrapper format; its two `%s` slots receive the class and the text
	pub fn set_wrapper(&mut self, wrapper: impl Into<String>) -> &mut Self {
		self.wrapper = Some(wrapper.into());
		self
	}

	/// Replace the whole class map
	///
	/// Types missing from `classes` render with their own name as class.
	pub fn set_classes(&mut self, classes: HashMap<MessageType, String>) -> &mut Self {
		self.classes = classes;
		self
	}

	/// Override the render class of a single type
	pub fn set_class(&mut self, kind: MessageType, class: impl Into<String>) -> &mut Self {
		self.classes.insert(kind, class.into());
		self
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.set_prefix(prefix);
		self
	}

	pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
		self.set_postfix(postfix);
		self
	}

	pub fn with_wrapper(mut self, wrapper: impl Into<String>) -> Self {
		self.set_wrapper(wrapper);
		self
	}

	pub fn with_classes(mut self, classes: HashMap<MessageType, String>) -> Self {
		self.set_classes(classes);
		self
	}

	pub fn with_class(mut self, kind: MessageType, class: impl Into<String>) -> Self {
		self.set_class(kind, class);
		self
	}

	/// Check that prefix, postfix and wrapper are all set and non-empty
	///
	/// # Examples
	///
	/// ```
	/// use simple_flash_messages::{FlashError, Template};
	///
	/// let err = Template::new().with_prefix("<p>").validate().unwrap_err();
	/// match err {
	///     FlashError::TemplateConfiguration { missing } => {
	///         assert_eq!(missing, vec!["postfix", "wrapper"]);
	///     }
	///     _ => unreachable!(),
	/// }
	/// ```
	pub fn validate(&self) -> Result<()> {
		let missing: Vec<&'static str> = [
			("prefix", &self.prefix),
			("postfix", &self.postfix),
			("wrapper", &self.wrapper),
		]
		.into_iter()
		.filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
		.map(|(name, _)| name)
		.collect();

		if missing.is_empty() {
			Ok(())
		} else {
			Err(FlashError::TemplateConfiguration { missing })
		}
	}

	/// Render one message as an HTML fragment
	///
	/// Fails with [`FlashError::TemplateConfiguration`] if the template is
	/// incomplete.
	pub fn render(&self, kind: MessageType, text: &str) -> Result<String> {
		self.validate()?;

		let prefix = self.prefix.as_deref().unwrap_or_default();
		let postfix = self.postfix.as_deref().unwrap_or_default();
		let wrapper = self.wrapper.as_deref().unwrap_or_default();

		let body = fill_slots(wrapper, &[self.class_for(kind), text]);

		let mut html = String::with_capacity(prefix.len() + body.len() + postfix.len());
		html.push_str(prefix);
		html.push_str(&body);
		html.push_str(postfix);
		Ok(html)
	}
}

impl Default for Template {
	fn default() -> Self {
		Self::new()
	}
}

pub(crate) fn default_classes() -> HashMap<MessageType, String> {
	MessageType::ALL
		.into_iter()
		.map(|kind| (kind, kind.default_class().to_string()))
		.collect()
}
