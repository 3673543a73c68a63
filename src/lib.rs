//! ChocolateShop native library.
//!
//! Hands a fixed greeting to the ChocolateShop Android app through JNI, and
//! to any other host through a small C ABI.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐  ┌──────────────────────────┐
//! │  JNI (ffi::jvm)          │  │  C ABI (chocolateshop.h) │
//! │  stringFromJNI           │  │  chocolateshop_*         │
//! └────────────┬─────────────┘  └────────────┬─────────────┘
//!              └──────────────┬──────────────┘
//!                             ▼
//!              ┌──────────────────────────────┐
//!              │  greeting (constant text)    │
//!              └──────────────────────────────┘
//! ```
//!
//! # JNI Usage
//!
//! ```java
//! package com.google.chocolateshop;
//!
//! public class ChocolateShop {
//!     static { System.loadLibrary("chocolateshop"); }
//!     public native String stringFromJNI();
//! }
//! ```
//!
//! # C Usage
//!
//! ```c
//! const char *text = chocolateshop_greeting();
//!
//! char buf[32];
//! size_t len;
//! chocolateshop_greeting_buf(buf, sizeof buf, &len);
//! ```

pub mod config;
pub mod error;
pub mod ffi;
pub mod greeting;
pub mod telemetry;

pub use config::NativeConfig;
pub use error::{BridgeError, BridgeResult};
pub use greeting::{greeting, GREETING, GREETING_C};

// Re-export FFI types for cbindgen
pub use ffi::c_api::*;
pub use ffi::types::*;
