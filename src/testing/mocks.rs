//! Test doubles for the history collaborators.

use std::cell::RefCell;

use crate::error::{Result, TrackerError};
use crate::history::{Confirmation, KeyValueStore};

/// Confirmation with a scripted answer that records every prompt.
///
/// # Example
///
/// ```rust,ignore
/// let confirm = MockConfirmation::new().with_answer(false);
/// assert!(!store.clear(&confirm)?);
/// assert_eq!(confirm.prompts().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockConfirmation {
    answer: bool,
    prompts: RefCell<Vec<String>>,
}

impl MockConfirmation {
    /// Create a mock that declines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer to give.
    #[must_use]
    pub fn with_answer(mut self, answer: bool) -> Self {
        self.answer = answer;
        self
    }

    /// Prompts seen so far, in order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirmation for MockConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer
    }
}

/// Key-value store that reads nothing and rejects every write.
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    message: Option<String>,
}

impl FailingStore {
    /// Create a store failing with a generic message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the write error message.
    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(TrackerError::storage(
            key,
            self.message.as_deref().unwrap_or("write rejected"),
        ))
    }
}
