//! Error types for the flash message framework

use simple_flash_sessions::SessionError;
use thiserror::Error;

/// Flash message errors
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FlashError {
	/// The template is missing one or more of prefix, postfix or wrapper
	#[error(
		"Template is missing {}: please make sure you have prefix, postfix and wrapper defined",
		.missing.join(", ")
	)]
	TemplateConfiguration { missing: Vec<&'static str> },

	/// No preset with the requested name exists
	#[error("Unknown template preset: {0}")]
	InvalidPreset(String),

	/// A flash store was handed to a serializer
	#[error("Serialization of FlashStore is not allowed")]
	NotSerializable,

	#[error("Session error: {0}")]
	Session(#[from] SessionError),

	#[error("Settings error: {0}")]
	Settings(String),
}

/// Result type for flash operations
pub type Result<T> = std::result::Result<T, FlashError>;
