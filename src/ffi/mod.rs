//! FFI (Foreign Function Interface) layer.
//!
//! Two surfaces are exported from the same library: the JNI entry points the
//! Android app binds to, and a plain C ABI described by `chocolateshop.h`.

pub mod c_api;
pub mod jvm;
pub mod types;

pub use c_api::*;
pub use jvm::*;
pub use types::*;
