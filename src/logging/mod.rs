//! Warning output for registry operations.
//!
//! Overwrite conflicts are reported through a [`Logger`] injected into the
//! facade at construction. The default [`TracingLogger`] forwards to
//! `tracing`; [`MockLogger`] captures messages for assertions.

pub mod mock;

pub use mock::MockLogger;

/// Sink for non-fatal registry warnings.
pub trait Logger: Send + Sync {
    /// Emit a warning.
    fn warn(&self, message: &str);
}

/// Logger that emits warnings as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// A logger paired with the facade's suppression flag.
///
/// Registries receive one of these per mutating call, so the flag is read
/// at the moment a warning would be emitted.
#[derive(Clone, Copy)]
pub struct Warnings<'a> {
    logger: &'a dyn Logger,
    disabled: bool,
}

impl<'a> Warnings<'a> {
    /// Create a warning gate over `logger`.
    pub fn new(logger: &'a dyn Logger, disabled: bool) -> Self {
        Self { logger, disabled }
    }

    /// Forward `message` to the logger unless warnings are disabled.
    pub fn warn(&self, message: &str) {
        if !self.disabled {
            self.logger.warn(message);
        }
    }

    /// Whether warnings are suppressed.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_gate_forwards_message() {
        let logger = MockLogger::new();
        Warnings::new(&logger, false).warn("overwriting input");
        assert_eq!(logger.warnings(), vec!["overwriting input".to_string()]);
    }

    #[test]
    fn disabled_gate_drops_message() {
        let logger = MockLogger::new();
        let warnings = Warnings::new(&logger, true);
        warnings.warn("overwriting input");
        assert!(warnings.is_disabled());
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn tracing_logger_does_not_panic_without_subscriber() {
        TracingLogger.warn("no subscriber installed");
    }
}
