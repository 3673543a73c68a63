//! The greeting handed back to every caller.

use std::ffi::CStr;

/// Greeting text returned across every bridge.
pub const GREETING: &str = "Hello from native code";

/// [`GREETING`] with a trailing NUL, for C callers.
pub const GREETING_C: &CStr = c"Hello from native code";

/// Get the greeting.
#[inline]
pub fn greeting() -> &'static str {
    GREETING
}
