//! Mock logger for testing.
//!
//! `MockLogger` implements the [`Logger`] trait and captures every warning
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use formwork::logging::{Logger, MockLogger};
//!
//! let logger = MockLogger::new();
//! logger.warn("Attempting to overwrite input");
//!
//! assert_eq!(logger.warning_count(), 1);
//! assert!(logger.warnings()[0].contains("overwrite"));
//! ```

use std::sync::{Arc, Mutex};

use super::Logger;

/// Mock logger that records warnings.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// facade owns another.
#[derive(Debug, Clone, Default)]
pub struct MockLogger {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl MockLogger {
    /// Create an empty mock logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured warnings, oldest first.
    pub fn warnings(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of captured warnings.
    pub fn warning_count(&self) -> usize {
        self.lock().len()
    }

    /// Discard captured warnings.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Logger for MockLogger {
    fn warn(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
