/// Sink for the informational milestones of tokenizing and parsing.
pub trait Logger {
    fn info(&self, message: &str);
}

/// Discards every message. Used when no logger is supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}
}

/// Forwards messages to the `log` facade under a fixed target.
#[derive(Debug, Clone)]
pub struct LogLogger {
    target: String,
}

impl LogLogger {
    pub fn new(target: &str) -> Self {
        LogLogger {
            target: target.to_string(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogLogger {
    fn default() -> Self {
        LogLogger::new("expr_parser")
    }
}

impl Logger for LogLogger {
    fn info(&self, message: &str) {
        log::info!(target: self.target.as_str(), "{}", message);
    }
}

impl<F: Fn(&str)> Logger for F {
    fn info(&self, message: &str) {
        self(message)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{LogLogger, Logger, NoopLogger};

    #[test]
    fn test_closure_logger() {
        let messages = RefCell::new(vec![]);
        let logger = |message: &str| messages.borrow_mut().push(message.to_string());

        logger.info("first");
        logger.info("second");

        assert_eq!(*messages.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_noop_and_facade_loggers_accept_messages() {
        NoopLogger.info("ignored");

        let logger = LogLogger::default();
        assert_eq!(logger.target(), "expr_parser");
        logger.info("no subscriber installed");
    }
}
