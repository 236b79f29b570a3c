//! # jvmpi-gc
//!
//! Pause and resume JVM garbage collection from Java, through a native
//! bridge written in pure Rust with **zero dependencies**.
//!
//! The crate binds the classic JVMPI profiler interface and exposes its GC
//! control operations (`DisableGC` / `EnableGC`) as JNI natives that a Java
//! class can declare and call around allocation-sensitive sections. JVMPI
//! shipped with the classic VMs and HotSpot through JDK 1.5; on a VM without
//! it, initialization reports failure and the control operations stay inert.
//!
//! ## Quick Start
//!
//! **1. Create a new library crate:**
//! ```bash
//! cargo new --lib gc_bridge
//! ```
//!
//! **2. Configure Cargo.toml:**
//! ```toml
//! [lib]
//! crate-type = ["cdylib"]
//!
//! [dependencies]
//! jvmpi-gc = "0.1"
//! ```
//!
//! **3. Export the natives for your Java class (src/lib.rs):**
//! ```rust,ignore
//! jvmpi_gc::export_gc_natives!("jvmpigc_GcControl");
//! ```
//!
//! **4. Declare the Java side:**
//! ```java
//! package jvmpigc;
//!
//! public class GcControl {
//!     public static native boolean init();
//!     public static native void enableGC();
//!     public static native void disableGC();
//!
//!     static {
//!         System.loadLibrary("gc_bridge");
//!     }
//! }
//! ```
//!
//! `GcControl.init()` must be called first; it returns whether the profiler
//! interface was acquired. After that, `disableGC()`/`enableGC()` bracket
//! the sections that must not be interrupted by a collection.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Your Bridge cdylib                      │
//! │           export_gc_natives!("pkg_Class")                │
//! ├─────────────────────────────────────────────────────────┤
//! │           Entry Points + Process-Wide Handle             │
//! │   initialize_from_env, enable_gc, disable_gc, OnceLock   │
//! ├─────────────────────────────────────────────────────────┤
//! │              High-Level Wrappers (env module)            │
//! │   env::Jvmpi - acquisition with Result, GC operations    │
//! │   env::JniEnv - the small JNI surface the bridge needs   │
//! ├─────────────────────────────────────────────────────────┤
//! │              Raw FFI Bindings (sys module)               │
//! │   sys::jni - JNI types, vtable (bridge-scoped)           │
//! │   sys::jvmpi - JVMPI types, full interface table         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Initialization contract
//!
//! Acquisition happens once per process. The handle is stored in a
//! [`OnceLock`], so concurrent initializers cannot race the slot, and a
//! repeated `init` call is a cheap success that keeps the handle already
//! acquired. Calling `enableGC`/`disableGC` before a successful `init` is
//! reported on stderr and otherwise ignored; the uninitialized state is
//! never dereferenced.
//!
//! For a caller-owned handle instead of the process-wide slot, use
//! [`env::Jvmpi`] directly; the GC operations are only reachable from a
//! successfully acquired value.

pub mod sys;
pub mod env;

// Implementation modules (use `env` module for the public API)
#[doc(hidden)]
pub mod jvmpi_wrapper;
#[doc(hidden)]
pub mod jni_wrapper;

pub mod prelude;

#[cfg(feature = "embed")]
pub mod embed;

use std::sync::OnceLock;

use crate::env::Jvmpi;
pub use crate::sys::jni as jni;
use crate::sys::jni::{jboolean, JNIEnv, JNI_FALSE, JNI_TRUE};

/// The one process-wide profiler handle, set by the first successful
/// initialization and held for the life of the process. JVMPI has no
/// release call; the VM tears the interface down at exit.
pub static GLOBAL_PROFILER: OnceLock<Jvmpi> = OnceLock::new();

/// Helper to store the acquired handle (called by [`initialize_from_env`]).
pub fn set_global_profiler(profiler: Jvmpi) -> Result<(), ()> {
    GLOBAL_PROFILER.set(profiler).map_err(|_| ())
}

/// The process-wide handle, if initialization has succeeded.
pub fn global_profiler() -> Option<&'static Jvmpi> {
    GLOBAL_PROFILER.get()
}

/// Acquires the profiler interface from the VM behind `env` and stores it
/// in the process-wide slot.
///
/// Returns `JNI_TRUE` on success. On failure, emits one diagnostic line to
/// stderr, leaves the slot unset, and returns `JNI_FALSE`. Calling again
/// after a success is a no-op success: the handle a VM hands out for a
/// given version tag never changes, so there is nothing to re-acquire.
pub fn initialize_from_env(env: *mut JNIEnv) -> jboolean {
    if GLOBAL_PROFILER.get().is_some() {
        return JNI_TRUE;
    }

    match Jvmpi::from_env(env) {
        Ok(profiler) => {
            // A concurrent initializer may have won the slot; its handle is
            // the same interface pointer, so either outcome is a success.
            let _ = set_global_profiler(profiler);
            JNI_TRUE
        }
        Err(e) => {
            eprintln!("[jvmpi-gc] {e}");
            JNI_FALSE
        }
    }
}

/// Re-enables garbage collection through the process-wide handle.
///
/// Without a prior successful [`initialize_from_env`] this reports the
/// misuse on stderr and does nothing.
pub fn enable_gc() {
    match GLOBAL_PROFILER.get() {
        Some(profiler) => {
            eprintln!("[jvmpi-gc] Re-enabling GC.");
            profiler.enable_gc();
        }
        None => eprintln!("[jvmpi-gc] enableGC called before init; ignoring."),
    }
}

/// Suspends garbage collection through the process-wide handle.
///
/// Without a prior successful [`initialize_from_env`] this reports the
/// misuse on stderr and does nothing.
pub fn disable_gc() {
    match GLOBAL_PROFILER.get() {
        Some(profiler) => {
            eprintln!("[jvmpi-gc] Disabling GC.");
            profiler.disable_gc();
        }
        None => eprintln!("[jvmpi-gc] disableGC called before init; ignoring."),
    }
}

/// Exports the three GC-control natives for a Java class.
///
/// The argument is the JNI-mangled binary name of the class declaring the
/// natives: package dots become underscores, so `jvmpigc.GcControl` is
/// written `"jvmpigc_GcControl"`. The macro generates
///
/// - **`Java_<class>_init`**: acquires the profiler interface, returns a
///   `jboolean` success flag. Must be called before the other two.
/// - **`Java_<class>_enableGC`**: re-enables garbage collection.
/// - **`Java_<class>_disableGC`**: suspends garbage collection.
///
/// # Example
///
/// ```rust,ignore
/// jvmpi_gc::export_gc_natives!("jvmpigc_GcControl");
/// ```
///
/// # Building
///
/// Your crate must be built as a C dynamic library. Add to `Cargo.toml`:
///
/// ```toml
/// [lib]
/// crate-type = ["cdylib"]
/// ```
///
/// The Java class then loads it with `System.loadLibrary` before touching
/// the natives.
///
/// # Thread Safety Notes
///
/// The acquired handle lives in a `OnceLock`, so concurrent `init` calls
/// are safe and exactly one acquisition is stored. The enable/disable
/// natives may be called from any attached thread once `init` has
/// succeeded; the VM does not serialize nested disable calls for you.
#[macro_export]
macro_rules! export_gc_natives {
    ($class:literal) => {
        #[export_name = concat!("Java_", $class, "_init")]
        pub unsafe extern "system" fn __jvmpi_gc_init(
            env: *mut $crate::sys::jni::JNIEnv,
            _class: $crate::sys::jni::jclass,
        ) -> $crate::sys::jni::jboolean {
            $crate::initialize_from_env(env)
        }

        #[export_name = concat!("Java_", $class, "_enableGC")]
        pub unsafe extern "system" fn __jvmpi_gc_enable_gc(
            _env: *mut $crate::sys::jni::JNIEnv,
            _class: $crate::sys::jni::jclass,
        ) {
            $crate::enable_gc()
        }

        #[export_name = concat!("Java_", $class, "_disableGC")]
        pub unsafe extern "system" fn __jvmpi_gc_disable_gc(
            _env: *mut $crate::sys::jni::JNIEnv,
            _class: $crate::sys::jni::jclass,
        ) {
            $crate::disable_gc()
        }
    };
}
