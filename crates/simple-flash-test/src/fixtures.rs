//! rstest fixtures
//!
//! ```rust,ignore
//! use simple_flash_test::fixtures::*;
//! use rstest::rstest;
//!
//! #[rstest]
//! fn test_flash(flash_store: FlashStore) {
//!     flash_store.info("Hello");
//!     assert!(flash_store.has_messages());
//! }
//! ```

use rstest::fixture;
use simple_flash_messages::{FlashRegistry, FlashStore};
use simple_flash_sessions::{InMemorySession, InMemorySessionBackend};
use std::sync::Arc;

/// Fixture providing an empty in-memory session
#[fixture]
pub fn session() -> InMemorySession {
	InMemorySession::new()
}

/// Fixture providing a flash store over a fresh session
#[fixture]
pub fn flash_store(session: InMemorySession) -> FlashStore {
	FlashStore::new(Arc::new(session))
}

/// Fixture providing a registry over a fresh in-memory backend
#[fixture]
pub fn flash_registry() -> FlashRegistry<InMemorySessionBackend> {
	FlashRegistry::new(InMemorySessionBackend::new())
}
