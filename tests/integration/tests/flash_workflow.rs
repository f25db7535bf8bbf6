//! End-to-end flash message workflows across requests sharing a session

use rstest::*;
use simple_flash::test::{assert_no_pending, assert_pending, flash_registry, flash_store};
use simple_flash::{FlashRegistry, FlashSettings, FlashStore, MessageType};
use simple_flash::sessions::InMemorySessionBackend;
use simple_flash_integration_tests::{MockApp, MockRequest};

#[fixture]
fn app() -> MockApp {
	MockApp::new()
}

#[rstest]
fn test_post_redirect_get(app: MockApp) {
	let request = MockRequest::new("/signup").with_session("abc123");

	let response = app.reject_form(&request, &["Invalid email!", "Invalid username!"]);
	assert_eq!(response.status, 302);

	let page = app.render_page(&MockRequest::new("/signup").with_session("abc123"), "<form>");
	assert_eq!(page.status, 200);
	assert!(page.body.contains("Invalid email!"));
	assert!(page.body.contains("Invalid username!"));
	assert!(page.body.ends_with("<form>"));

	let reload = app.render_page(&request, "<form>");
	assert_eq!(reload.body, "<form>");
}

#[rstest]
fn test_messages_do_not_leak_between_sessions(app: MockApp) {
	let alice = MockRequest::new("/").with_session("alice");
	let bob = MockRequest::new("/").with_session("bob");

	app.reject_form(&alice, &["Only for Alice"]);

	assert!(!app.render_page(&bob, "").body.contains("Only for Alice"));
	assert!(app.render_page(&alice, "").body.contains("Only for Alice"));
}

#[rstest]
fn test_request_without_session_renders_nothing(app: MockApp) {
	let request = MockRequest::new("/");

	app.reject_form(&request, &["Lost"]);

	assert_eq!(app.render_page(&request, "page").body, "page");
	assert!(app.registry().backend().is_empty());
}

#[rstest]
fn test_shared_store_within_a_request(app: MockApp) {
	let request = MockRequest::new("/").with_session("abc");

	let in_handler = app.flash(&request).unwrap();
	let in_view = app.flash(&request).unwrap();
	in_handler.info("Checking shared");

	assert!(in_view.has_messages());
	assert!(in_view.display().unwrap().contains("Checking shared"));
	assert!(!in_handler.has_messages());
}

#[rstest]
fn test_chaining_flushes_changes(flash_registry: FlashRegistry<InMemorySessionBackend>) {
	flash_registry
		.flash("abc", "First one", "success", None)
		.unwrap()
		.info("Other one")
		.display()
		.unwrap();

	let store = flash_registry.flash("abc", "Third one", "error", None).unwrap();
	assert_pending(&store, &[(MessageType::Error, "Third one")]).unwrap();

	store.display().unwrap();
	assert_no_pending(&store).unwrap();
}

#[rstest]
fn test_partial_display_keeps_other_types(flash_store: FlashStore) {
	flash_store
		.error(["Invalid email!", "Invalid username!"])
		.warning("Warning message.")
		.info("Info message.")
		.success("Success message!");

	let errors = flash_store.display_of("error").unwrap();
	assert!(errors.contains("Invalid email!"));
	assert!(errors.contains("Invalid username!"));
	assert!(!errors.contains("Warning message."));

	assert_pending(
		&flash_store,
		&[
			(MessageType::Warning, "Warning message."),
			(MessageType::Info, "Info message."),
			(MessageType::Success, "Success message!"),
		],
	)
	.unwrap();

	assert_eq!(flash_store.display_of("not-a-type").unwrap(), "");
	assert!(flash_store.has_messages_of("warning"));
	assert!(!flash_store.has_messages_of("error"));

	let rest = flash_store.to_string();
	let warning = rest.find("Warning message.").unwrap();
	let info = rest.find("Info message.").unwrap();
	let success = rest.find("Success message!").unwrap();
	assert!(warning < info && info < success);
	assert!(!flash_store.has_messages());
}

#[rstest]
#[case("", "info")]
#[case("   ", "warning")]
#[case("Hello", "wrong")]
#[case("Hello", "")]
fn test_ignored_messages(flash_store: FlashStore, #[case] text: &str, #[case] kind: &str) {
	flash_store.add(text, kind);

	assert!(!flash_store.has_messages());
	assert_eq!(flash_store.display().unwrap(), "");
}

#[rstest]
fn test_clear_discards_everything(flash_store: FlashStore) {
	flash_store.error("Oops").success("Yay");

	flash_store.clear().unwrap();

	assert_no_pending(&flash_store).unwrap();
	assert_eq!(flash_store.to_string(), "");
}

#[rstest]
fn test_custom_session_key() {
	let app = MockApp::with_settings(FlashSettings::new().with_session_key("_messages"));
	let request = MockRequest::new("/").with_session("abc");

	app.reject_form(&request, &["Stored elsewhere"]);

	let session = app.registry().backend().session("abc");
	assert_eq!(session.keys(), vec!["_messages".to_string()]);
	let stored: serde_json::Value = simple_flash::Session::get(&session, "_messages")
		.unwrap()
		.unwrap();
	assert_eq!(
		stored,
		serde_json::json!([{ "type": "error", "text": "Stored elsewhere" }])
	);
}

#[rstest]
fn test_store_is_not_serializable(flash_store: FlashStore) {
	flash_store.info("Secret");

	let result = serde_json::to_string(&flash_store);

	assert!(result.is_err());
	assert!(flash_store.has_messages());
}
