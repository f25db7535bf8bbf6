//! # simple-flash test
//!
//! Testing utilities for simple-flash.
//!
//! - [`messages`]: assertions over message lists and pending store contents
//! - [`fixtures`]: rstest fixtures for sessions, stores and registries

pub mod fixtures;
pub mod messages;

pub use fixtures::{flash_registry, flash_store, session};
pub use messages::{
	MessageAssertionError, MessageAssertionResult, assert_message_count, assert_message_exists,
	assert_message_type, assert_messages, assert_no_pending, assert_pending,
};
