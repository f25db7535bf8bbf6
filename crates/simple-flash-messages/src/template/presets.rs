//! Named template presets for common CSS frameworks

use crate::error::FlashError;
use crate::levels::MessageType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, pre-filled template matching a CSS framework's alert markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
	/// Framework-agnostic markup
	#[default]
	Base,
	Bootstrap3,
	Bootstrap4,
	Bootstrap5,
	Foundation5,
	Foundation6,
	Bulma,
	Materialize,
	Tailwind,
	Uikit2,
	Uikit3,
	Semantic2,
	Spectre,
}

/// The markup pieces a preset fills a template with
pub(crate) struct PresetMarkup {
	pub prefix: &'static str,
	pub postfix: &'static str,
	pub wrapper: &'static str,
	/// Render classes for info, success, warning and error, in that order
	pub classes: [&'static str; 4],
}

impl Preset {
	pub const ALL: [Preset; 13] = [
		Preset::Base,
		Preset::Bootstrap3,
		Preset::Bootstrap4,
		Preset::Bootstrap5,
		Preset::Foundation5,
		Preset::Foundation6,
		Preset::Bulma,
		Preset::Materialize,
		Preset::Tailwind,
		Preset::Uikit2,
		Preset::Uikit3,
		Preset::Semantic2,
		Preset::Spectre,
	];

	/// Returns the identifier of the preset
	///
	/// # Examples
	///
	/// ```
	/// use simple_flash_messages::Preset;
	///
	/// assert_eq!(Preset::Bootstrap5.as_str(), "bootstrap5");
	/// assert_eq!(Preset::Uikit3.as_str(), "uikit3");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Preset::Base => "base",
			Preset::Bootstrap3 => "bootstrap3",
			Preset::Bootstrap4 => "bootstrap4",
			Preset::Bootstrap5 => "bootstrap5",
			Preset::Foundation5 => "foundation5",
			Preset::Foundation6 => "foundation6",
			Preset::Bulma => "bulma",
			Preset::Materialize => "materialize",
			Preset::Tailwind => "tailwind",
			Preset::Uikit2 => "uikit2",
			Preset::Uikit3 => "uikit3",
			Preset::Semantic2 => "semantic2",
			Preset::Spectre => "spectre",
		}
	}

	pub(crate) fn markup(&self) -> PresetMarkup {
		match self {
			Preset::Base => PresetMarkup {
				prefix: "<p>",
				postfix: "</p>",
				wrapper: r#"<span class="flash flash-%s" role="alert">%s</span>"#,
				classes: ["info", "success", "warning", "danger"],
			},
			Preset::Bootstrap3 => PresetMarkup {
				prefix: r#"<div class="flash-message">"#,
				postfix: "</div>",
				wrapper: r#"<div class="alert alert-%s alert-dismissible" role="alert"><button type="button" class="close" data-dismiss="alert" aria-label="Close"><span aria-hidden="true">&times;</span></button>%s</div>"#,
				classes: ["info", "success", "warning", "danger"],
			},
			Preset::Bootstrap4 => PresetMarkup {
				prefix: r#"<div class="flash-message">"#,
				postfix: "</div>",
				wrapper: r#"<div class="alert alert-%s alert-dismissible fade show" role="alert">%s<button type="button" class="close" data-dismiss="alert" aria-label="Close"><span aria-hidden="true">&times;</span></button></div>"#,
				classes: ["info", "success", "warning", "danger"],
			},
			Preset::Bootstrap5 => PresetMarkup {
				prefix: r#"<div class="flash-message">"#,
				postfix: "</div>",
				wrapper: r#"<div class="alert alert-%s alert-dismissible fade show" role="alert">%s<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button></div>"#,
				classes: ["info", "success", "warning", "danger"],
			},
			Preset::Foundation5 => PresetMarkup {
				prefix: r#"<div class="flash-message">"#,
				postfix: "</div>",
				wrapper: r##"<div data-alert class="alert-box %s radius">%s<a href="#" class="close">&times;</a></div>"##,
				classes: ["info", "success", "warning", "alert"],
			},
			Preset::Foundation6 => PresetMarkup {
				prefix: r#"<div class="flash-message">"#,
				postfix: "</div>",
				wrapper: r#"<div class="callout %s" data-closable>%s<button class="close-button" aria-label="Dismiss alert" type="button" data-close><span aria-hidden="true">&times;</span></button></div>"#,
				classes: ["primary", "success", "warning", "alert"],
			},
			Preset::Bulma => PresetMarkup {
				prefix: r#"<div class="block">"#,
				postfix: "</div>",
				wrapper: r#"<div class="notification is-%s"><button class="delete"></button>%s</div>"#,
				classes: ["info", "success", "warning", "danger"],
			},
			Preset::Materialize => PresetMarkup {
				prefix: r#"<div class="row"><div class="col s12">"#,
				postfix: "</div></div>",
				wrapper: r#"<div class="card-panel %s">%s</div>"#,
				classes: [
					"blue lighten-4",
					"green lighten-4",
					"amber lighten-4",
					"red lighten-4",
				],
			},
			Preset::Tailwind => PresetMarkup {
				prefix: r#"<div class="mb-4">"#,
				postfix: "</div>",
				wrapper: r#"<div class="border px-4 py-3 rounded relative %s" role="alert">%s</div>"#,
				classes: [
					"bg-blue-100 border-blue-400 text-blue-700",
					"bg-green-100 border-green-400 text-green-700",
					"bg-yellow-100 border-yellow-400 text-yellow-700",
					"bg-red-100 border-red-400 text-red-700",
				],
			},
			Preset::Uikit2 => PresetMarkup {
				prefix: r#"<div class="uk-margin">"#,
				postfix: "</div>",
				wrapper: r#"<div class="uk-alert uk-alert-%s" data-uk-alert><a href="" class="uk-alert-close uk-close"></a>%s</div>"#,
				classes: ["info", "success", "warning", "danger"],
			},
			Preset::Uikit3 => PresetMarkup {
				prefix: r#"<div class="uk-margin">"#,
				postfix: "</div>",
				wrapper: r#"<div class="uk-alert-%s" uk-alert><a class="uk-alert-close" uk-close></a><p>%s</p></div>"#,
				classes: ["primary", "success", "warning", "danger"],
			},
			Preset::Semantic2 => PresetMarkup {
				prefix: r#"<div class="ui basic segment">"#,
				postfix: "</div>",
				wrapper: r#"<div class="ui %s message"><i class="close icon"></i>%s</div>"#,
				classes: ["info", "positive", "warning", "negative"],
			},
			Preset::Spectre => PresetMarkup {
				prefix: r#"<div class="flash-message">"#,
				postfix: "</div>",
				wrapper: r#"<div class="toast toast-%s"><button class="btn btn-clear float-right"></button>%s</div>"#,
				classes: ["primary", "success", "warning", "error"],
			},
		}
	}

	/// Render classes of the preset, keyed by message type
	pub(crate) fn classes(&self) -> impl Iterator<Item = (MessageType, &'static str)> {
		MessageType::ALL.into_iter().zip(self.markup().classes)
	}
}

impl fmt::Display for Preset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Preset {
	type Err = FlashError;

	/// Parse a preset identifier
	///
	/// Matching is case-insensitive and ignores `-`, `_` and spaces, so
	/// `"Bootstrap-5"`, `"bootstrap_5"` and `"bootstrap5"` are equivalent.
	/// `"default"` is accepted as an alias of [`Preset::Base`].
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized: String = s
			.chars()
			.filter(|c| !matches!(c, '-' | '_' | ' '))
			.flat_map(char::to_lowercase)
			.collect();

		if normalized == "default" {
			return Ok(Preset::Base);
		}

		Preset::ALL
			.into_iter()
			.find(|preset| preset.as_str() == normalized)
			.ok_or_else(|| FlashError::InvalidPreset(s.to_string()))
	}
}
