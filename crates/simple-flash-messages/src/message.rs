//! Flash message type

use crate::levels::MessageType;
use serde::{Deserialize, Serialize};

/// A single pending flash message
///
/// The text is stored verbatim; no escaping is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
	#[serde(rename = "type")]
	pub kind: MessageType,
	pub text: String,
}

impl Message {
	/// Create a new message
	///
	/// # Examples
	///
	/// ```
	/// use simple_flash_messages::{Message, MessageType};
	///
	/// let msg = Message::new(MessageType::Success, "Saved!");
	/// assert_eq!(msg.kind, MessageType::Success);
	/// assert_eq!(msg.text, "Saved!");
	/// ```
	pub fn new(kind: MessageType, text: impl Into<String>) -> Self {
		Self {
			kind,
			text: text.into(),
		}
	}

	/// Create an info message
	pub fn info(text: impl Into<String>) -> Self {
		Self::new(MessageType::Info, text)
	}

	/// Create a success message
	pub fn success(text: impl Into<String>) -> Self {
		Self::new(MessageType::Success, text)
	}

	/// Create a warning message
	pub fn warning(text: impl Into<String>) -> Self {
		Self::new(MessageType::Warning, text)
	}

	/// Create an error message
	pub fn error(text: impl Into<String>) -> Self {
		Self::new(MessageType::Error, text)
	}
}

/// One text or an ordered list of texts passed to
/// [`FlashStore::add`](crate::FlashStore::add)
///
/// # Examples
///
/// ```
/// use simple_flash_messages::FlashText;
///
/// let single: FlashText = "Invalid email".into();
/// assert_eq!(single.into_texts(), vec!["Invalid email".to_string()]);
///
/// let many: FlashText = vec!["Invalid name", "Invalid email"].into();
/// assert_eq!(many.into_texts().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashText {
	One(String),
	Many(Vec<String>),
}

impl FlashText {
	/// Flatten into the list of texts, preserving order
	pub fn into_texts(self) -> Vec<String> {
		match self {
			FlashText::One(text) => vec![text],
			FlashText::Many(texts) => texts,
		}
	}
}

impl From<&str> for FlashText {
	fn from(text: &str) -> Self {
		FlashText::One(text.to_string())
	}
}

impl From<String> for FlashText {
	fn from(text: String) -> Self {
		FlashText::One(text)
	}
}

impl From<&String> for FlashText {
	fn from(text: &String) -> Self {
		FlashText::One(text.clone())
	}
}

impl From<Vec<String>> for FlashText {
	fn from(texts: Vec<String>) -> Self {
		FlashText::Many(texts)
	}
}

impl From<Vec<&str>> for FlashText {
	fn from(texts: Vec<&str>) -> Self {
		FlashText::Many(texts.into_iter().map(str::to_string).collect())
	}
}

impl From<&[&str]> for FlashText {
	fn from(texts: &[&str]) -> Self {
		FlashText::Many(texts.iter().map(|t| t.to_string()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for FlashText {
	fn from(texts: [&str; N]) -> Self {
		FlashText::Many(texts.iter().map(|t| t.to_string()).collect())
	}
}
