//! Process-wide registry of named loggers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::lazy_static;

use crate::logger::Logger;

/// Name → logger map handing out shared [`Logger`] handles.
///
/// Loggers are created lazily on first lookup and live for the process
/// lifetime; there is no teardown path. The empty name addresses the
/// global logger. A registry can also be constructed standalone for test
/// isolation instead of going through [`global`].
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the logger registered under `name`, creating a
    /// default-configured one on first lookup.
    ///
    /// The whole lookup-or-insert runs under the registry lock, so
    /// concurrent first lookups of the same name observe one instance.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        self.get_logger_with(name, |n: &str| Logger::new(n))
    }

    /// Like [`get_logger`](Self::get_logger), but constructs the logger
    /// with `factory` if absent. The factory only applies on first
    /// creation; later lookups return the existing instance unchanged.
    pub fn get_logger_with<F>(&self, name: &str, factory: F) -> Arc<Logger>
    where
        F: FnOnce(&str) -> Logger,
    {
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = loggers.get(name) {
            return Arc::clone(existing);
        }
        let logger = Arc::new(factory(name));
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    /// Number of loggers currently registered.
    pub fn len(&self) -> usize {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

lazy_static! {
    static ref GLOBAL_REGISTRY: LoggerRegistry = LoggerRegistry::new();
}

/// The process-wide registry behind [`get_logger`].
pub fn global() -> &'static LoggerRegistry {
    &GLOBAL_REGISTRY
}

/// Returns the named logger from the process-wide registry.
pub fn get_logger(name: &str) -> Arc<Logger> {
    global().get_logger(name)
}

/// Returns the unnamed global logger.
pub fn get_global_logger() -> Arc<Logger> {
    global().get_logger("")
}

/// Returns the named logger, constructing it with `factory` on first
/// lookup (e.g. to pre-enable a buffer).
pub fn get_logger_with<F>(name: &str, factory: F) -> Arc<Logger>
where
    F: FnOnce(&str) -> Logger,
{
    global().get_logger_with(name, factory)
}
