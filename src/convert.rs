//! Argument stringification for the message formatter.
//!
//! Every template argument is rendered through [`ToLogString`] before
//! substitution. The blanket impl covers anything implementing
//! [`std::fmt::Display`], so numbers and strings use their native
//! rendering. Types without a `Display` impl gain logging support by
//! implementing `Display` (or wrapping themselves in a newtype that does);
//! containers and maps are deliberately not supported out of the box.

use std::fmt::Display;

/// Conversion seam between typed arguments and the formatter.
pub trait ToLogString {
    fn to_log_string(&self) -> String;
}

impl<T: Display + ?Sized> ToLogString for T {
    fn to_log_string(&self) -> String {
        self.to_string()
    }
}
