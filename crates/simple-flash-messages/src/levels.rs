//! Message type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
	#[default]
	Info,
	Success,
	Warning,
	Error,
}

impl MessageType {
	/// Every message type, in declaration order
	pub const ALL: [MessageType; 4] = [
		MessageType::Info,
		MessageType::Success,
		MessageType::Warning,
		MessageType::Error,
	];

	/// Returns the string representation of the type
	///
	/// # Examples
	///
	/// ```
	/// use simple_flash_messages::MessageType;
	///
	/// assert_eq!(MessageType::Info.as_str(), "info");
	/// assert_eq!(MessageType::Error.as_str(), "error");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			MessageType::Info => "info",
			MessageType::Success => "success",
			MessageType::Warning => "warning",
			MessageType::Error => "error",
		}
	}

	/// Parses a message type from its name (case-insensitive)
	///
	/// Returns `None` for anything but the four known names.
	///
	/// # Examples
	///
	/// ```
	/// use simple_flash_messages::MessageType;
	///
	/// assert_eq!(MessageType::parse("success"), Some(MessageType::Success));
	/// assert_eq!(MessageType::parse("WARNING"), Some(MessageType::Warning));
	/// assert_eq!(MessageType::parse("bogus"), None);
	/// ```
	pub fn parse(s: &str) -> Option<Self> {
		match s.trim().to_lowercase().as_str() {
			"info" => Some(MessageType::Info),
			"success" => Some(MessageType::Success),
			"warning" => Some(MessageType::Warning),
			"error" => Some(MessageType::Error),
			_ => None,
		}
	}

	/// The CSS class used for this type when a template does not override it
	///
	/// Presentation frameworks conventionally style error severity as "danger".
	///
	/// # Examples
	///
	/// ```
	/// use simple_flash_messages::MessageType;
	///
	/// assert_eq!(MessageType::Success.default_class(), "success");
	/// assert_eq!(MessageType::Error.default_class(), "danger");
	/// ```
	pub fn default_class(&self) -> &'static str {
		match self {
			MessageType::Error => "danger",
			other => other.as_str(),
		}
	}
}

impl fmt::Display for MessageType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl AsRef<str> for MessageType {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
