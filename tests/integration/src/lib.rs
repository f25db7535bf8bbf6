//! Test helpers and mocks for flash message integration tests
//!
//! A [`MockRequest`] carries a raw `Cookie` header the way a browser sends it.
//! [`MockApp`] resolves the session id from that header and hands out the
//! shared flash store of the session, like a request handler would.

use simple_flash::sessions::{
	DEFAULT_SESSION_COOKIE, InMemorySessionBackend, session_id_from_cookie_header,
};
use simple_flash::{FlashRegistry, FlashSettings, FlashStore};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Mock HTTP request for testing
#[derive(Debug, Clone, Default)]
pub struct MockRequest {
	pub path: String,
	pub cookies: BTreeMap<String, String>,
}

impl MockRequest {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			cookies: BTreeMap::new(),
		}
	}

	pub fn with_session(self, session_id: impl Into<String>) -> Self {
		self.with_cookie(DEFAULT_SESSION_COOKIE, session_id)
	}

	pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.cookies.insert(name.into(), value.into());
		self
	}

	/// The `Cookie` header value for this request
	pub fn cookie_header(&self) -> String {
		self.cookies
			.iter()
			.map(|(name, value)| format!("{}={}", name, value))
			.collect::<Vec<_>>()
			.join("; ")
	}
}

/// Mock HTTP response for testing
#[derive(Debug, Clone)]
pub struct MockResponse {
	pub status: u16,
	pub body: String,
}

impl MockResponse {
	pub fn ok(body: impl Into<String>) -> Self {
		Self {
			status: 200,
			body: body.into(),
		}
	}

	pub fn redirect() -> Self {
		Self {
			status: 302,
			body: String::new(),
		}
	}
}

/// A minimal application holding the flash registry
pub struct MockApp {
	registry: FlashRegistry<InMemorySessionBackend>,
}

impl MockApp {
	pub fn new() -> Self {
		Self::with_settings(FlashSettings::default())
	}

	pub fn with_settings(settings: FlashSettings) -> Self {
		Self {
			registry: FlashRegistry::with_settings(InMemorySessionBackend::new(), settings),
		}
	}

	pub fn registry(&self) -> &FlashRegistry<InMemorySessionBackend> {
		&self.registry
	}

	/// The flash store of the session carried by `request`
	///
	/// Returns `None` when the request has no session cookie.
	pub fn flash(&self, request: &MockRequest) -> Option<Arc<FlashStore>> {
		let session_id =
			session_id_from_cookie_header(&request.cookie_header(), DEFAULT_SESSION_COOKIE)?;
		self.registry.store(&session_id).ok()
	}

	/// A form handler that rejects the submission and redirects back
	pub fn reject_form(&self, request: &MockRequest, errors: &[&str]) -> MockResponse {
		if let Some(flash) = self.flash(request) {
			flash.error(errors);
		}
		MockResponse::redirect()
	}

	/// A page handler rendering all pending messages above `content`
	pub fn render_page(&self, request: &MockRequest, content: &str) -> MockResponse {
		let messages = self
			.flash(request)
			.and_then(|flash| flash.display().ok())
			.unwrap_or_default();
		MockResponse::ok(format!("{}{}", messages, content))
	}
}

impl Default for MockApp {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_cookie_header() {
		let request = MockRequest::new("/")
			.with_cookie("theme", "dark")
			.with_session("abc123");

		assert_eq!(request.cookie_header(), "sessionid=abc123; theme=dark");
	}

	#[test]
	fn test_flash_requires_session_cookie() {
		let app = MockApp::new();

		assert!(app.flash(&MockRequest::new("/")).is_none());
		assert!(app.flash(&MockRequest::new("/").with_session("abc")).is_some());
	}
}
