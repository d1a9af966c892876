//! The logger core: level gate, message formatting and sink fan-out.

use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::Utc;

use crate::buffer::LogBuffer;
use crate::convert::ToLogString;
use crate::entry::LogEntry;
use crate::formatter::format_message;
use crate::level::Level;
use crate::observer::LogObserver;
use crate::sanitize::clean_message;

/// A named logger owning three independently togglable sinks: console
/// output, an optional in-memory [`LogBuffer`], and registered
/// [`LogObserver`] handles.
///
/// Every call runs synchronously on the caller's thread. All methods take
/// `&self`; each sink is guarded by its own lock, so a `Logger` shared via
/// `Arc` is safe to use concurrently without external synchronization.
///
/// A freshly constructed logger has console output on, no buffer, message
/// cleaning on and an `Info` threshold.
pub struct Logger {
    name: String,
    level: AtomicU8,
    console_enabled: AtomicBool,
    clean_enabled: AtomicBool,
    /// Serializes console writes so concurrent loggers cannot interleave
    /// characters within a line.
    console_lock: Mutex<()>,
    buffer: RwLock<Option<Arc<LogBuffer>>>,
    observers: Mutex<Vec<Arc<dyn LogObserver>>>,
}

impl Logger {
    /// Creates a default-configured logger. An empty name denotes the
    /// global logger and is omitted from rendered lines.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(Level::Info as u8),
            console_enabled: AtomicBool::new(true),
            clean_enabled: AtomicBool::new(true),
            console_lock: Mutex::new(()),
            buffer: RwLock::new(None),
            observers: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // --- level gate -----------------------------------------------------

    pub fn set_log_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn get_log_level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// Whether a message at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.get_log_level())
    }

    // --- per-level logging ----------------------------------------------

    pub fn trace(&self, template: &str, args: &[&dyn ToLogString]) {
        self.log(Level::Trace, template, args);
    }

    pub fn debug(&self, template: &str, args: &[&dyn ToLogString]) {
        self.log(Level::Debug, template, args);
    }

    pub fn info(&self, template: &str, args: &[&dyn ToLogString]) {
        self.log(Level::Info, template, args);
    }

    pub fn warn(&self, template: &str, args: &[&dyn ToLogString]) {
        self.log(Level::Warn, template, args);
    }

    pub fn error(&self, template: &str, args: &[&dyn ToLogString]) {
        self.log(Level::Error, template, args);
    }

    pub fn fatal(&self, template: &str, args: &[&dyn ToLogString]) {
        self.log(Level::Fatal, template, args);
    }

    // --- supplier variants ----------------------------------------------
    //
    // The supplier runs if and only if the gate passes, so an expensive
    // message computation costs nothing while its level is filtered out.

    pub fn trace_supplier<F: FnOnce() -> String>(&self, supplier: F) {
        self.log_supplier(Level::Trace, supplier);
    }

    pub fn debug_supplier<F: FnOnce() -> String>(&self, supplier: F) {
        self.log_supplier(Level::Debug, supplier);
    }

    pub fn info_supplier<F: FnOnce() -> String>(&self, supplier: F) {
        self.log_supplier(Level::Info, supplier);
    }

    pub fn warn_supplier<F: FnOnce() -> String>(&self, supplier: F) {
        self.log_supplier(Level::Warn, supplier);
    }

    pub fn error_supplier<F: FnOnce() -> String>(&self, supplier: F) {
        self.log_supplier(Level::Error, supplier);
    }

    pub fn fatal_supplier<F: FnOnce() -> String>(&self, supplier: F) {
        self.log_supplier(Level::Fatal, supplier);
    }

    // --- sink toggles ---------------------------------------------------

    pub fn enable_console(&self) {
        self.console_enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable_console(&self) {
        self.console_enabled.store(false, Ordering::Relaxed);
    }

    /// Enables buffering with the given capacity (0 = unbounded). Any
    /// previously buffered entries are discarded.
    pub fn enable_buffer(&self, capacity: usize) {
        let mut buffer = self.buffer.write().unwrap_or_else(PoisonError::into_inner);
        *buffer = Some(Arc::new(LogBuffer::new(capacity)));
    }

    /// Disables buffering and discards the buffer contents.
    pub fn disable_buffer(&self) {
        let mut buffer = self.buffer.write().unwrap_or_else(PoisonError::into_inner);
        *buffer = None;
    }

    pub fn clear_buffer(&self) {
        if let Some(buffer) = self.buffer() {
            buffer.clear();
        }
    }

    /// Shared handle to the buffer, or `None` while buffering is disabled.
    pub fn buffer(&self) -> Option<Arc<LogBuffer>> {
        self.buffer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn enable_clean_message(&self) {
        self.clean_enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable_clean_message(&self) {
        self.clean_enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_clean_message_enabled(&self) -> bool {
        self.clean_enabled.load(Ordering::Relaxed)
    }

    // --- observers ------------------------------------------------------

    /// Registers an observer and invokes its registered callback.
    ///
    /// Adding the same handle twice is permitted; it will then receive
    /// every notification twice until removed as many times.
    pub fn add_observer(&self, observer: Arc<dyn LogObserver>) {
        {
            let mut observers = self
                .observers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            observers.push(Arc::clone(&observer));
        }
        observer.handle_registered(&self.name);
    }

    /// Removes the first registration matching `observer` by identity and
    /// invokes its unregistered callback. Unknown handles are ignored.
    pub fn remove_observer(&self, observer: &Arc<dyn LogObserver>) {
        let target = Arc::as_ptr(observer) as *const ();
        let removed = {
            let mut observers = self
                .observers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            observers
                .iter()
                .position(|candidate| Arc::as_ptr(candidate) as *const () == target)
                .map(|index| observers.remove(index))
        };
        if let Some(removed) = removed {
            removed.handle_unregistered(&self.name);
        }
    }

    /// Writes a line terminator to the console (when enabled) and invokes
    /// every observer's flush callback. The buffer is unaffected.
    pub fn flush(&self) {
        if self.console_enabled.load(Ordering::Relaxed) {
            let _guard = self
                .console_lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let _ = writeln!(handle);
            let _ = handle.flush();
        }
        for observer in self.observers_snapshot() {
            let _ = catch_unwind(AssertUnwindSafe(|| observer.handle_flush(&self.name)));
        }
    }

    // --- internals ------------------------------------------------------

    fn log(&self, level: Level, template: &str, args: &[&dyn ToLogString]) {
        // Gate first: a filtered message must cost no formatting work.
        if !self.enabled(level) {
            return;
        }
        self.emit(level, format_message(template, args));
    }

    fn log_supplier<F: FnOnce() -> String>(&self, level: Level, supplier: F) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, supplier());
    }

    fn emit(&self, level: Level, message: String) {
        let message = if self.is_clean_message_enabled() {
            clean_message(&message)
        } else {
            message
        };
        let entry = LogEntry::new(Utc::now(), level, self.name.clone(), message);

        if self.console_enabled.load(Ordering::Relaxed) {
            self.write_console_line(&entry.formatted_message());
        }

        if let Some(buffer) = self.buffer() {
            buffer.add(entry.clone());
        }

        // Each callback is isolated so one panicking observer cannot
        // prevent the rest from being notified.
        for observer in self.observers_snapshot() {
            let _ = catch_unwind(AssertUnwindSafe(|| observer.handle_new_message(&entry)));
        }
    }

    fn write_console_line(&self, line: &str) {
        let _guard = self
            .console_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{line}");
    }

    // Notification runs against a snapshot taken under the list lock, so
    // one call delivers to exactly the observers registered at its start.
    fn observers_snapshot(&self) -> Vec<Arc<dyn LogObserver>> {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.get_log_level())
            .field("console_enabled", &self.console_enabled.load(Ordering::Relaxed))
            .field("clean_message_enabled", &self.is_clean_message_enabled())
            .field("buffer_enabled", &self.buffer().is_some())
            .finish()
    }
}
