//! Rendering flash messages through presets and custom templates

use rstest::*;
use simple_flash::sessions::{InMemorySession, InMemorySessionBackend};
use simple_flash::test::{flash_registry, flash_store};
use simple_flash::{
	FlashError, FlashRegistry, FlashSettings, FlashStore, MessageType, Preset, Template,
	TemplateFactory,
};
use std::sync::Arc;

#[rstest]
fn test_default_template(flash_store: FlashStore) {
	flash_store.error("Testing templates");

	let content = flash_store.display().unwrap();

	assert_eq!(
		content,
		r#"<p><span class="flash flash-danger" role="alert">Testing templates</span></p>"#
	);
}

#[rstest]
fn test_template_given_at_construction() {
	let store = FlashStore::with_template(
		Arc::new(InMemorySession::new()),
		TemplateFactory::create(Preset::Foundation5),
	);
	store.info("Testing templates");

	let content = store.display().unwrap();
	assert!(content.contains("data-alert"));
	assert!(content.contains("alert-box info radius"));
}

#[rstest]
fn test_template_set_through_registry(flash_registry: FlashRegistry<InMemorySessionBackend>) {
	let template = TemplateFactory::create_named("foundation-5").unwrap();

	flash_registry
		.flash("abc", "Testing templates", "info", Some(template))
		.unwrap();

	let store = flash_registry.store("abc").unwrap();
	assert!(store.template().wrapper().unwrap().contains("data-alert"));
	assert!(store.display().unwrap().contains("data-alert"));
}

#[rstest]
fn test_template_accessor_and_setter(flash_store: FlashStore) {
	let mut template = flash_store.template();
	assert_eq!(template.prefix(), Some("<p>"));

	template.set_prefix("<section>").set_postfix("</section>");
	assert_eq!(flash_store.template().prefix(), Some("<p>"));

	flash_store.set_template(template).warning("Careful");

	assert_eq!(
		flash_store.display().unwrap(),
		r#"<section><span class="flash flash-warning" role="alert">Careful</span></section>"#
	);
}

#[rstest]
fn test_template_mut_changes_active_template(flash_store: FlashStore) {
	flash_store
		.template_mut()
		.set_wrapper(r#"<b class="%s">%s</b>"#)
		.set_class(MessageType::Success, "ok");

	let content = flash_store.success("Saved").display().unwrap();

	assert_eq!(content, r#"<p><b class="ok">Saved</b></p>"#);
}

#[rstest]
fn test_bad_template_keeps_messages(flash_store: FlashStore) {
	flash_store
		.set_template(Template::new().with_prefix("<li>"))
		.error("Not lost");

	let err = flash_store.display().unwrap_err();

	assert!(
		err.to_string()
			.contains("please make sure you have prefix, postfix and wrapper defined")
	);
	match err {
		FlashError::TemplateConfiguration { missing } => {
			assert_eq!(missing, vec!["postfix", "wrapper"]);
		}
		other => panic!("unexpected error: {other}"),
	}
	assert!(flash_store.has_messages_of("error"));
}

#[rstest]
#[case(Preset::Bootstrap5, "alert-danger")]
#[case(Preset::Bulma, "is-danger")]
#[case(Preset::Uikit3, "uk-alert-danger")]
#[case(Preset::Semantic2, "ui negative message")]
#[case(Preset::Foundation6, "callout alert")]
fn test_preset_error_markup(flash_store: FlashStore, #[case] preset: Preset, #[case] marker: &str) {
	flash_store
		.set_template(TemplateFactory::create(preset))
		.error("Invalid email!");

	let content = flash_store.display().unwrap();

	assert!(content.contains(marker), "{preset}: {content}");
	assert!(content.contains("Invalid email!"));
}

#[rstest]
fn test_default_preset_from_settings() {
	let settings = FlashSettings::new().with_default_preset(Preset::Bootstrap3);
	let store = FlashStore::with_settings(Arc::new(InMemorySession::new()), &settings);

	let content = store.info("Hello").display().unwrap();

	assert!(content.contains("alert alert-info alert-dismissible"));
}

#[rstest]
fn test_unknown_preset_name() {
	assert!(matches!(
		TemplateFactory::create_named("bootstrap9"),
		Err(FlashError::InvalidPreset(name)) if name == "bootstrap9"
	));
}
