//! Drop guards pairing a setup action with its guaranteed teardown.

use std::sync::Arc;

use crate::logger::Logger;
use crate::observer::LogObserver;

/// Registers an observer for the guard's lifetime.
///
/// The observer is added on construction and removed when the scope is
/// dropped, on every exit path including unwinding.
///
/// ```
/// use std::sync::Arc;
/// use logbook::{Logger, ObserverScope};
///
/// let logger = Logger::new("scoped");
/// logger.disable_console();
/// let observer = Arc::new(logbook::FacadeObserver::new());
/// {
///     let _scope = ObserverScope::new(&logger, observer);
///     logger.info("visible to the observer", &[]);
/// }
/// // observer removed here
/// ```
pub struct ObserverScope<'a> {
    logger: &'a Logger,
    observer: Arc<dyn LogObserver>,
}

impl<'a> ObserverScope<'a> {
    pub fn new(logger: &'a Logger, observer: Arc<dyn LogObserver>) -> Self {
        logger.add_observer(Arc::clone(&observer));
        Self { logger, observer }
    }
}

impl Drop for ObserverScope<'_> {
    fn drop(&mut self) {
        self.logger.remove_observer(&self.observer);
    }
}

/// Flushes the logger when dropped.
pub struct FlushScope<'a> {
    logger: &'a Logger,
}

impl<'a> FlushScope<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }
}

impl Drop for FlushScope<'_> {
    fn drop(&mut self) {
        self.logger.flush();
    }
}
