//! Errors raised at the bridge seams.

use thiserror::Error;

/// Failures the native side can run into while serving a host call.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The JVM refused to build a value (an exception is usually pending).
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),

    /// A log filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global tracing subscriber is already installed.
    #[error("logging already initialised: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
}

/// Result alias used at the bridge seams.
pub type BridgeResult<T> = Result<T, BridgeError>;
