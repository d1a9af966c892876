//! Structured error handling for the fallible configuration surface.
//!
//! Logging calls themselves never fail; the error type below covers
//! configuration loading and lock acquisition on paths that return
//! `Result`. Sink internals instead recover a poisoned guard so a log
//! call is safe from any context, including drop handlers.

use thiserror::Error;

/// Errors surfaced by configuration and registry plumbing.
#[derive(Error, Debug)]
pub enum LogbookError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("Mutex lock failed: {resource}")]
    MutexPoisoned { resource: String },
}

/// Shorthand result alias used throughout the crate.
pub type LogbookResult<T> = Result<T, LogbookError>;

impl LogbookError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid-state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for LogbookError {
    fn from(err: figment::Error) -> Self {
        LogbookError::config(err.to_string())
    }
}

/// Helper trait mapping lock poisoning to a structured error on paths
/// where the caller wants a `Result` instead of silent recovery.
pub trait SafeLock<T: ?Sized> {
    fn safe_lock(&self) -> LogbookResult<std::sync::MutexGuard<'_, T>>;
}

impl<T: ?Sized> SafeLock<T> for std::sync::Mutex<T> {
    fn safe_lock(&self) -> LogbookResult<std::sync::MutexGuard<'_, T>> {
        self.lock().map_err(|_| LogbookError::MutexPoisoned {
            resource: "mutex".to_string(),
        })
    }
}

/// Companion to [`SafeLock`] for `RwLock` read access.
pub trait SafeReadLock<T: ?Sized> {
    fn safe_read(&self) -> LogbookResult<std::sync::RwLockReadGuard<'_, T>>;
}

impl<T: ?Sized> SafeReadLock<T> for std::sync::RwLock<T> {
    fn safe_read(&self) -> LogbookResult<std::sync::RwLockReadGuard<'_, T>> {
        self.read().map_err(|_| LogbookError::MutexPoisoned {
            resource: "rwlock_read".to_string(),
        })
    }
}

/// Companion to [`SafeLock`] for `RwLock` write access.
pub trait SafeWriteLock<T: ?Sized> {
    fn safe_write(&self) -> LogbookResult<std::sync::RwLockWriteGuard<'_, T>>;
}

impl<T: ?Sized> SafeWriteLock<T> for std::sync::RwLock<T> {
    fn safe_write(&self) -> LogbookResult<std::sync::RwLockWriteGuard<'_, T>> {
        self.write().map_err(|_| LogbookError::MutexPoisoned {
            resource: "rwlock_write".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn error_messages_name_their_category() {
        let err = LogbookError::config("missing level");
        assert!(err.to_string().contains("Configuration error"));

        let err = LogbookError::invalid_state("buffer not enabled");
        assert!(err.to_string().contains("Invalid state"));
    }

    #[test]
    fn safe_lock_succeeds_on_healthy_mutex() {
        let mutex = Mutex::new(7);
        assert_eq!(*mutex.safe_lock().unwrap(), 7);
    }
}
