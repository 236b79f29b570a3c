//! Common imports for building a GC-control bridge.
//!
//! This prelude is intentionally small. It covers the types and helpers most
//! bridges use while avoiding over-broad re-exports.

pub use crate::env::{AcquireError, JniEnv, Jvmpi};
pub use crate::export_gc_natives;
pub use crate::sys::{jni, jvmpi};
pub use crate::{disable_gc, enable_gc, global_profiler, initialize_from_env};
#[cfg(feature = "embed")]
pub use crate::embed::{JavaVm, JavaVmBuilder};
