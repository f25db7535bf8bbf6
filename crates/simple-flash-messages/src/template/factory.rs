//! Template factory

use super::Template;
use super::presets::Preset;
use crate::error::Result;

/// Builds [`Template`]s from named presets
///
/// # Examples
///
/// ```
/// use simple_flash_messages::{MessageType, Preset, TemplateFactory};
///
/// let template = TemplateFactory::create(Preset::Foundation5);
/// let html = template.render(MessageType::Info, "Hi").unwrap();
/// assert!(html.contains("data-alert"));
///
/// assert!(TemplateFactory::create_named("no-such-framework").is_err());
/// ```
pub struct TemplateFactory;

impl TemplateFactory {
	/// Create a template pre-populated for `preset`
	pub fn create(preset: Preset) -> Template {
		let markup = preset.markup();
		let mut template = Template::new()
			.with_prefix(markup.prefix)
			.with_postfix(markup.postfix)
			.with_wrapper(markup.wrapper);
		for (kind, class) in preset.classes() {
			template.set_class(kind, class);
		}
		template
	}

	/// Create the default ([`Preset::Base`]) template
	pub fn create_default() -> Template {
		Self::create(Preset::default())
	}

	/// Create a template from a preset identifier such as `"bootstrap5"`
	///
	/// Fails with [`FlashError::InvalidPreset`](crate::FlashError::InvalidPreset)
	/// for unknown names.
	pub fn create_named(name: &str) -> Result<Template> {
		let preset: Preset = name.parse()?;
		Ok(Self::create(preset))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FlashError;
	use crate::levels::MessageType;
	use rstest::rstest;

	#[rstest]
	fn test_default_template() {
		let template = TemplateFactory::create_default();

		assert_eq!(template.prefix(), Some("<p>"));
		assert_eq!(template.postfix(), Some("</p>"));
		assert_eq!(
			template.render(MessageType::Error, "Invalid email!").unwrap(),
			r#"<p><span class="flash flash-danger" role="alert">Invalid email!</span></p>"#
		);
	}

	#[rstest]
	fn test_every_preset_renders() {
		for preset in Preset::ALL {
			let template = TemplateFactory::create(preset);
			for kind in MessageType::ALL {
				let html = template.render(kind, "Message text").unwrap();
				assert!(html.contains("Message text"), "{preset} dropped the text");
				assert!(
					html.contains(template.class_for(kind)),
					"{preset} dropped the class for {kind}"
				);
			}
		}
	}

	#[rstest]
	#[case(Preset::Bootstrap5, MessageType::Error, "alert-danger")]
	#[case(Preset::Foundation5, MessageType::Error, "alert-box alert")]
	#[case(Preset::Foundation6, MessageType::Info, "callout primary")]
	#[case(Preset::Bulma, MessageType::Warning, "is-warning")]
	#[case(Preset::Uikit3, MessageType::Info, "uk-alert-primary")]
	#[case(Preset::Semantic2, MessageType::Success, "ui positive message")]
	#[case(Preset::Spectre, MessageType::Error, "toast-error")]
	fn test_preset_classes(#[case] preset: Preset, #[case] kind: MessageType, #[case] needle: &str) {
		let html = TemplateFactory::create(preset).render(kind, "x").unwrap();
		assert!(html.contains(needle), "{html} does not contain {needle}");
	}

	#[rstest]
	fn test_create_named() {
		let template = TemplateFactory::create_named("foundation5").unwrap();
		assert_eq!(template, TemplateFactory::create(Preset::Foundation5));
	}

	#[rstest]
	fn test_create_named_unknown_preset() {
		let err = TemplateFactory::create_named("bogus").unwrap_err();
		assert!(matches!(err, FlashError::InvalidPreset(ref name) if name == "bogus"));
	}

	#[rstest]
	fn test_created_templates_are_independent() {
		let mut first = TemplateFactory::create_default();
		first.set_prefix("changed");

		let second = TemplateFactory::create_default();
		assert_eq!(second.prefix(), Some("<p>"));
	}
}
