//! Flash message settings
//!
//! Settings can be built in code, read from the environment or loaded from a
//! `.toml` / `.json` file:
//!
//! ```toml
//! session_key = "_flash"
//! default_preset = "bootstrap5"
//! ```

use crate::error::{FlashError, Result};
use crate::template::Preset;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Session key used when none is configured
pub const DEFAULT_SESSION_KEY: &str = "flash_messages";

/// Environment variable overriding [`FlashSettings::session_key`]
pub const ENV_SESSION_KEY: &str = "SIMPLE_FLASH_SESSION_KEY";

/// Environment variable overriding [`FlashSettings::default_preset`]
pub const ENV_PRESET: &str = "SIMPLE_FLASH_PRESET";

/// Flash message settings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashSettings {
	/// Session key under which pending messages are stored
	pub session_key: String,
	/// Preset used when a store has no template set
	pub default_preset: Preset,
}

impl Default for FlashSettings {
	fn default() -> Self {
		Self {
			session_key: DEFAULT_SESSION_KEY.to_string(),
			default_preset: Preset::default(),
		}
	}
}

impl FlashSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
		self.session_key = key.into();
		self
	}

	pub fn with_default_preset(mut self, preset: Preset) -> Self {
		self.default_preset = preset;
		self
	}

	/// Validate settings
	pub fn validate(&self) -> Result<()> {
		if self.session_key.trim().is_empty() {
			return Err(FlashError::Settings(
				"session_key must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Load settings from environment variables
	///
	/// Unset variables keep their default values.
	pub fn from_env() -> Result<Self> {
		let mut settings = Self::default();

		if let Ok(key) = std::env::var(ENV_SESSION_KEY) {
			settings.session_key = key;
		}

		if let Ok(preset) = std::env::var(ENV_PRESET) {
			settings.default_preset = preset.parse()?;
		}

		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a `.toml` or `.json` file
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			FlashError::Settings(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let settings: FlashSettings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => toml::from_str(&contents)
				.map_err(|e| FlashError::Settings(format!("TOML parse error: {}", e)))?,
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| FlashError::Settings(format!("JSON parse error: {}", e)))?,
			_ => {
				return Err(FlashError::Settings(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		settings.validate()?;
		tracing::debug!(
			path = %path.display(),
			session_key = %settings.session_key,
			preset = %settings.default_preset,
			"Loaded flash settings"
		);
		Ok(settings)
	}
}
