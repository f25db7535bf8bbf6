//! Message assertion utilities for testing
//!
//! Assertions return a [`MessageAssertionResult`] instead of panicking, so
//! they can be combined with `?` or unwrapped in tests.

use simple_flash_messages::{FlashStore, Message, MessageType};

/// Error type for message assertion failures
#[derive(Debug, thiserror::Error)]
pub enum MessageAssertionError {
	#[error("Message count mismatch: expected {expected}, got {actual}")]
	CountMismatch { expected: usize, actual: usize },

	#[error("Message not found: {message}")]
	MessageNotFound { message: String },

	#[error("Message type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		expected: MessageType,
		actual: MessageType,
	},

	#[error("Order mismatch: expected {expected:?}, got {actual:?}")]
	OrderMismatch {
		expected: Vec<String>,
		actual: Vec<String>,
	},

	#[error("Could not read pending messages: {0}")]
	Store(#[from] simple_flash_messages::FlashError),
}

/// Result type for message assertions
pub type MessageAssertionResult<T> = Result<T, MessageAssertionError>;

/// Assert that the number of messages matches the expected count
///
/// # Examples
///
/// ```rust
/// use simple_flash_test::messages::assert_message_count;
/// use simple_flash_messages::Message;
///
/// let messages = vec![Message::info("Test message")];
/// assert_message_count(&messages, 1).unwrap();
/// ```
pub fn assert_message_count(
	messages: &[Message],
	expected_count: usize,
) -> MessageAssertionResult<()> {
	let actual_count = messages.len();
	if actual_count != expected_count {
		return Err(MessageAssertionError::CountMismatch {
			expected: expected_count,
			actual: actual_count,
		});
	}
	Ok(())
}

/// Assert that a message with the given type and text exists
///
/// # Examples
///
/// ```rust
/// use simple_flash_test::messages::assert_message_exists;
/// use simple_flash_messages::{Message, MessageType};
///
/// let messages = vec![Message::error("Invalid email!")];
/// assert_message_exists(&messages, MessageType::Error, "Invalid email!").unwrap();
/// ```
pub fn assert_message_exists(
	messages: &[Message],
	kind: MessageType,
	text: &str,
) -> MessageAssertionResult<()> {
	let found = messages
		.iter()
		.any(|msg| msg.kind == kind && msg.text == text);

	if !found {
		return Err(MessageAssertionError::MessageNotFound {
			message: format!("Message with type {} and text '{}' not found", kind, text),
		});
	}
	Ok(())
}

/// Assert that a message has the expected type
pub fn assert_message_type(message: &Message, expected: MessageType) -> MessageAssertionResult<()> {
	if message.kind != expected {
		return Err(MessageAssertionError::TypeMismatch {
			expected,
			actual: message.kind,
		});
	}
	Ok(())
}

/// Assert that messages match the expected list
///
/// With `ordered` set, messages must appear in exactly the expected order.
///
/// # Examples
///
/// ```rust
/// use simple_flash_test::messages::assert_messages;
/// use simple_flash_messages::{Message, MessageType};
///
/// let messages = vec![Message::info("First"), Message::warning("Second")];
/// let expected = [(MessageType::Info, "First"), (MessageType::Warning, "Second")];
/// assert_messages(&messages, &expected, true).unwrap();
/// ```
pub fn assert_messages(
	messages: &[Message],
	expected: &[(MessageType, &str)],
	ordered: bool,
) -> MessageAssertionResult<()> {
	assert_message_count(messages, expected.len())?;

	if ordered {
		let matches = messages
			.iter()
			.zip(expected)
			.all(|(actual, (kind, text))| actual.kind == *kind && actual.text == *text);
		if !matches {
			return Err(MessageAssertionError::OrderMismatch {
				expected: expected.iter().map(|(_, text)| text.to_string()).collect(),
				actual: messages.iter().map(|msg| msg.text.clone()).collect(),
			});
		}
	} else {
		for (kind, text) in expected {
			assert_message_exists(messages, *kind, text)?;
		}
	}

	Ok(())
}

/// Assert on the messages still pending in a store, without consuming them
///
/// # Examples
///
/// ```rust
/// use simple_flash_test::messages::assert_pending;
/// use simple_flash_messages::{FlashStore, MessageType};
/// use simple_flash_sessions::InMemorySession;
/// use std::sync::Arc;
///
/// let store = FlashStore::new(Arc::new(InMemorySession::new()));
/// store.success("Saved").info("Welcome back");
///
/// assert_pending(&store, &[(MessageType::Success, "Saved"), (MessageType::Info, "Welcome back")]).unwrap();
/// assert!(store.has_messages());
/// ```
pub fn assert_pending(
	store: &FlashStore,
	expected: &[(MessageType, &str)],
) -> MessageAssertionResult<()> {
	let pending = store.peek()?;
	assert_messages(&pending, expected, true)
}

/// Assert that a store has nothing pending
pub fn assert_no_pending(store: &FlashStore) -> MessageAssertionResult<()> {
	let pending = store.peek()?;
	assert_message_count(&pending, 0)
}
