//! High-level environment wrappers for JVMPI and JNI.
//!
//! This module provides ergonomic Rust wrappers around the raw interface
//! pointers. [`Jvmpi`] owns the acquired profiler interface and exposes the
//! GC operations; [`JniEnv`] covers the small JNI surface the bridge needs.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use jvmpi_gc::prelude::*;
//!
//! // Inside a JNI native, with the env the VM passed in:
//! match Jvmpi::from_env(env) {
//!     Ok(profiler) => {
//!         profiler.disable_gc();
//!         // ... allocation-sensitive section ...
//!         profiler.enable_gc();
//!     }
//!     Err(e) => eprintln!("profiler unavailable: {e}"),
//! }
//! ```
//!
//! Acquisition failures are reported as [`AcquireError`], one variant per
//! failure kind: the VM lookup failed, or the VM has no JVMPI to offer.

// Re-export the JVMPI wrapper
mod jvmpi_impl {
    pub use crate::jvmpi_wrapper::{AcquireError, Jvmpi};
}

// Re-export the JNI wrapper
mod jni_impl {
    pub use crate::jni_wrapper::JniEnv;
}

pub use jni_impl::JniEnv;
pub use jvmpi_impl::{AcquireError, Jvmpi};
