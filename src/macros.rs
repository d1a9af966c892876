//! Convenience macros over the slice-based logging methods.

/// Builds the type-erased argument slice the level methods expect.
///
/// ```
/// use logbook::Logger;
///
/// let logger = Logger::new("demo");
/// logger.disable_console();
/// logger.info("{?} + {?} = {0}", logbook::log_args![1, 2]);
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        &[] as &[&dyn $crate::ToLogString]
    };
    ($($arg:expr),+ $(,)?) => {
        &[$(&$arg as &dyn $crate::ToLogString),+]
    };
}

/// Logs at `Trace` severity: `trace!(logger, "template", args...)`.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.trace($template, $crate::log_args!($($arg),*))
    };
}

/// Logs at `Debug` severity: `debug!(logger, "template", args...)`.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($template, $crate::log_args!($($arg),*))
    };
}

/// Logs at `Info` severity: `info!(logger, "template", args...)`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($template, $crate::log_args!($($arg),*))
    };
}

/// Logs at `Warn` severity: `warn!(logger, "template", args...)`.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn($template, $crate::log_args!($($arg),*))
    };
}

/// Logs at `Error` severity: `error!(logger, "template", args...)`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($template, $crate::log_args!($($arg),*))
    };
}

/// Logs at `Fatal` severity: `fatal!(logger, "template", args...)`.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($template, $crate::log_args!($($arg),*))
    };
}
