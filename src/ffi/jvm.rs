//! JNI entry points called by the ChocolateShop app.
//!
//! Symbols follow the JNI `Java_<package>_<class>_<method>` naming scheme and
//! the `system` calling convention. Nothing here throws on its own: if the JVM
//! fails to build a value it leaves its exception pending and we return null.

use crate::config::NativeConfig;
use crate::error::BridgeResult;
use crate::greeting::greeting;
use crate::telemetry;
use jni::objects::{JObject, JString};
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::JNIEnv;
use std::ffi::c_void;

/// JNI version this library requires.
pub const REQUIRED_JNI_VERSION: jint = JNI_VERSION_1_6;

/// Called by the JVM once, when `System.loadLibrary` loads this library.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    telemetry::init(&NativeConfig::from_env());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "chocolateshop native library loaded");
    REQUIRED_JNI_VERSION
}

/// `com.google.chocolateshop.ChocolateShop#stringFromJNI()`.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_google_chocolateshop_ChocolateShop_stringFromJNI<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    tracing::trace!("stringFromJNI");
    match new_greeting(&mut env) {
        Ok(s) => s.into_raw(),
        Err(err) => {
            tracing::error!(%err, "failed to build greeting string");
            JObject::null().into_raw()
        }
    }
}

/// Build a fresh `java.lang.String` holding the greeting.
pub fn new_greeting<'local>(env: &mut JNIEnv<'local>) -> BridgeResult<JString<'local>> {
    Ok(env.new_string(greeting())?)
}
