//! C ABI functions for non-JVM hosts.

use super::types::{ChocolateStatus, API_VERSION};
use crate::greeting::{GREETING, GREETING_C};
use std::ffi::c_char;

/// ABI version to coordinate with C callers.
#[no_mangle]
pub extern "C" fn chocolateshop_api_version() -> u32 {
    API_VERSION
}

/// Get the greeting as a static C string.
///
/// The pointer lives for the whole process and must not be freed.
#[no_mangle]
pub extern "C" fn chocolateshop_greeting() -> *const c_char {
    tracing::trace!("chocolateshop_greeting");
    GREETING_C.as_ptr()
}

/// Copy the greeting into a caller-owned buffer.
///
/// At most `buffer_len - 1` bytes are copied and the result is always
/// NUL-terminated. `out_len` receives the full greeting length, so a value
/// `>= buffer_len` means the copy was truncated.
///
/// # Safety
/// `buffer` must be writable for `buffer_len` bytes and `out_len` must be valid.
#[no_mangle]
pub unsafe extern "C" fn chocolateshop_greeting_buf(
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> ChocolateStatus {
    if buffer.is_null() || out_len.is_null() {
        return ChocolateStatus::NullPointer;
    }

    *out_len = GREETING.len();
    if buffer_len == 0 {
        tracing::warn!("chocolateshop_greeting_buf called with an empty buffer");
        return ChocolateStatus::InvalidArgument;
    }

    let bytes = GREETING.as_bytes();
    let copy_len = bytes.len().min(buffer_len - 1);

    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer as *mut u8, copy_len);
    *buffer.add(copy_len) = 0;

    ChocolateStatus::Ok
}
