// jvmpi-gc/src/jvmpi_wrapper.rs

use crate::sys::jni;
use crate::sys::jvmpi;
use std::ptr;

/// Why the profiler interface could not be acquired.
///
/// Each variant carries the raw JNI return code that produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AcquireError {
    /// The JavaVM could not be obtained from the calling thread's JNIEnv.
    NoJavaVm(jni::jint),
    /// The VM refused to hand out a JVMPI interface at the requested
    /// version. Expected on JDK 6+ where JVMPI no longer exists.
    ProfilerUnavailable(jni::jint),
}

impl std::fmt::Display for AcquireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcquireError::NoJavaVm(code) => {
                write!(f, "failed to get JavaVM from JNIEnv (JNI error {code})")
            }
            AcquireError::ProfilerUnavailable(code) => {
                write!(f, "failed to get JVMPI from JavaVM (JNI error {code})")
            }
        }
    }
}

impl std::error::Error for AcquireError {}

/// A safe wrapper around the raw JVMPI interface pointer.
///
/// A `Jvmpi` can only be obtained through a successful acquisition, so
/// holding one is proof that the profiler interface is available; the GC
/// operations are not reachable from an uninitialized state.
#[derive(Debug)]
pub struct Jvmpi {
    // Kept private so the user can't mess with the raw pointer directly.
    ifc: *mut jvmpi::JVMPI_Interface,
}

// The interface pointer is process-wide, the table is immutable once handed
// out, and the GC control slots are callable from any attached thread.
unsafe impl Send for Jvmpi {}
unsafe impl Sync for Jvmpi {}

impl Jvmpi {
    /// Connects to the JVM behind `env` and retrieves the JVMPI interface.
    ///
    /// This is the two-step acquisition a JNI native performs: look up the
    /// JavaVM from the caller's environment, then request the profiler
    /// interface from the VM at `JVMPI_VERSION_1`.
    pub fn from_env(env: *mut jni::JNIEnv) -> Result<Self, AcquireError> {
        let mut vm: *mut jni::JavaVM = ptr::null_mut();

        unsafe {
            let res = crate::jni_call!(env, GetJavaVM, &mut vm);
            if res != jni::JNI_OK || vm.is_null() {
                return Err(AcquireError::NoJavaVm(res));
            }
        }

        Self::from_java_vm(vm)
    }

    /// Retrieves the JVMPI interface from a JavaVM the caller already holds.
    pub fn from_java_vm(vm: *mut jni::JavaVM) -> Result<Self, AcquireError> {
        let mut ifc_ptr: *mut std::ffi::c_void = ptr::null_mut();

        unsafe {
            let res = crate::jvm_call!(vm, GetEnv, &mut ifc_ptr, jvmpi::JVMPI_VERSION_1);
            if res != jni::JNI_OK || ifc_ptr.is_null() {
                return Err(AcquireError::ProfilerUnavailable(res));
            }
        }

        Ok(Jvmpi {
            ifc: ifc_ptr as *mut jvmpi::JVMPI_Interface,
        })
    }

    /// Create a Jvmpi wrapper from a raw interface pointer.
    ///
    /// # Safety
    /// The caller must ensure the pointer is valid for the life of the
    /// process, which is what a pointer handed out by GetEnv guarantees.
    pub unsafe fn from_raw(ifc: *mut jvmpi::JVMPI_Interface) -> Self {
        Jvmpi { ifc }
    }

    /// Get the raw JVMPI_Interface pointer
    pub fn raw(&self) -> *mut jvmpi::JVMPI_Interface {
        self.ifc
    }

    /// The version tag the VM stamped into the interface.
    pub fn version(&self) -> jni::jint {
        unsafe { (*self.ifc).version }
    }

    /// Re-enables garbage collection.
    ///
    /// The VM reports no outcome for this call; a failure inside the
    /// collector is not observable from here.
    pub fn enable_gc(&self) {
        unsafe {
            // If this panics, the VM handed out a table with a hole in it,
            // which a live VM never does.
            let enable_fn = (*self.ifc).EnableGC.unwrap();
            enable_fn();
        }
    }

    /// Suspends garbage collection until `enable_gc` is called.
    pub fn disable_gc(&self) {
        unsafe {
            let disable_fn = (*self.ifc).DisableGC.unwrap();
            disable_fn();
        }
    }

    /// Requests a full collection.
    pub fn run_gc(&self) {
        unsafe {
            let run_fn = (*self.ifc).RunGC.unwrap();
            run_fn();
        }
    }
}
