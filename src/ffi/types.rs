//! C-compatible type definitions for FFI.

/// ABI version reported to C callers.
pub const API_VERSION: u32 = 1;

/// Result status codes for C ABI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChocolateStatus {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer was passed.
    NullPointer = 1,
    /// Invalid argument.
    InvalidArgument = 2,
}
