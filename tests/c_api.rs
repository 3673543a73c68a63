//! Calls the exported C ABI the way a C host would.

use chocolateshop::{
    chocolateshop_api_version, chocolateshop_greeting, chocolateshop_greeting_buf,
    ChocolateStatus, GREETING,
};
use std::ffi::{c_char, CStr};

#[test]
fn greeting_pointer_is_nul_terminated() {
    let ptr = chocolateshop_greeting();
    assert!(!ptr.is_null());
    assert_eq!(unsafe { libc::strlen(ptr) }, GREETING.len());
}

#[test]
fn repeated_calls_return_identical_text() {
    let first = unsafe { CStr::from_ptr(chocolateshop_greeting()) }.to_owned();
    let second = unsafe { CStr::from_ptr(chocolateshop_greeting()) }.to_owned();
    assert_eq!(first, second);
    assert_eq!(first.to_str().unwrap(), GREETING);
}

#[test]
fn buffer_copy_matches_static_greeting() {
    let mut buf = vec![0 as c_char; GREETING.len() + 1];
    let mut len = 0usize;

    let status = unsafe { chocolateshop_greeting_buf(buf.as_mut_ptr(), buf.len(), &mut len) };
    assert_eq!(status, ChocolateStatus::Ok);
    assert_eq!(len, GREETING.len());

    let copied = unsafe { CStr::from_ptr(buf.as_ptr()) };
    let static_text = unsafe { CStr::from_ptr(chocolateshop_greeting()) };
    assert_eq!(copied, static_text);
}

#[test]
fn one_byte_buffer_yields_empty_string() {
    let mut buf = [0x41 as c_char; 1];
    let mut len = 0usize;

    let status = unsafe { chocolateshop_greeting_buf(buf.as_mut_ptr(), buf.len(), &mut len) };
    assert_eq!(status, ChocolateStatus::Ok);
    assert_eq!(len, GREETING.len());
    assert_eq!(unsafe { libc::strlen(buf.as_ptr()) }, 0);
}

#[test]
fn api_version_is_one() {
    assert_eq!(chocolateshop_api_version(), 1);
}
