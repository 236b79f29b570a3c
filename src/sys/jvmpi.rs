// jvmpi-gc/src/sys/jvmpi.rs
//
// JVMPI (Java Virtual Machine Profiler Interface) bindings for Rust.
// No external dependencies.
//
// Verified against the JDK 1.2 jvmpi.h header. JVMPI shipped with the
// classic VMs and HotSpot through JDK 1.5 and was removed in JDK 6; a VM
// that no longer carries it simply refuses the GetEnv version request.
//
// Unlike JNI, the interface pointer returned by GetEnv points directly at
// this struct (there is no extra level of indirection), and the functions
// take no environment argument.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::{c_char, c_void};

use crate::sys::jni::{jboolean, jint, jlong, jmethodID, jobject, JNIEnv};

// --- Constants ---
pub const JVMPI_VERSION_1: jint = 0x10000001;
pub const JVMPI_VERSION_1_1: jint = 0x10000002;
pub const JVMPI_VERSION_1_2: jint = 0x10000003;

pub const JVMPI_SUCCESS: jint = 0;
pub const JVMPI_FAIL: jint = -1;

// --- Opaque handle types ---

/// Profiler-side object handle. Never dereferenced by agents.
#[repr(C)]
pub struct _jobjectID {
    _private: [u8; 0],
}
pub type jobjectID = *mut _jobjectID;

/// Raw monitor created through RawMonitorCreate.
#[repr(C)]
pub struct _JVMPI_RawMonitor {
    _private: [u8; 0],
}
pub type JVMPI_RawMonitor = *mut _JVMPI_RawMonitor;

/// Event record passed to NotifyEvent. This bridge never receives events,
/// so the payload union is left opaque.
#[repr(C)]
pub struct JVMPI_Event {
    _private: [u8; 0],
}

// --- Call traces ---

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct JVMPI_CallFrame {
    pub lineno: jint,
    pub method_id: jmethodID,
}

#[repr(C)]
pub struct JVMPI_CallTrace {
    pub env_id: *mut JNIEnv,
    pub num_frames: jint,
    pub frames: *mut JVMPI_CallFrame,
}

// =============================================================================
// JVMPI_Interface - The profiler function table
// =============================================================================
//
// Handed out by JavaVM::GetEnv at a JVMPI_VERSION_* tag. Slot order must
// exactly match the jvmpi.h header. Slots are Option so a partially
// populated table is representable; a live VM fills every one.

#[repr(C)]
pub struct JVMPI_Interface {
    pub version: jint,

    pub NotifyEvent: Option<unsafe extern "system" fn(event: *mut JVMPI_Event)>,

    pub EnableEvent:
        Option<unsafe extern "system" fn(event_type: jint, arg: *mut c_void) -> jint>,
    pub DisableEvent:
        Option<unsafe extern "system" fn(event_type: jint, arg: *mut c_void) -> jint>,
    pub RequestEvent:
        Option<unsafe extern "system" fn(event_type: jint, arg: *mut c_void) -> jint>,
    pub GetCallTrace:
        Option<unsafe extern "system" fn(trace: *mut JVMPI_CallTrace, depth: jint)>,
    pub ProfilerExit: Option<unsafe extern "system" fn(err_code: jint)>,

    pub RawMonitorCreate:
        Option<unsafe extern "system" fn(lock_name: *mut c_char) -> JVMPI_RawMonitor>,
    pub RawMonitorEnter: Option<unsafe extern "system" fn(lock_id: JVMPI_RawMonitor)>,
    pub RawMonitorExit: Option<unsafe extern "system" fn(lock_id: JVMPI_RawMonitor)>,
    pub RawMonitorWait: Option<unsafe extern "system" fn(lock_id: JVMPI_RawMonitor, ms: jlong)>,
    pub RawMonitorNotifyAll: Option<unsafe extern "system" fn(lock_id: JVMPI_RawMonitor)>,
    pub RawMonitorDestroy: Option<unsafe extern "system" fn(lock_id: JVMPI_RawMonitor)>,

    pub GetCurrentThreadCpuTime: Option<unsafe extern "system" fn() -> jlong>,
    pub SuspendThread: Option<unsafe extern "system" fn(env: *mut JNIEnv)>,
    pub ResumeThread: Option<unsafe extern "system" fn(env: *mut JNIEnv)>,
    pub GetThreadStatus: Option<unsafe extern "system" fn(env: *mut JNIEnv) -> jint>,
    pub ThreadHasRun: Option<unsafe extern "system" fn(env: *mut JNIEnv) -> jboolean>,
    pub CreateSystemThread: Option<
        unsafe extern "system" fn(
            name: *mut c_char,
            priority: jint,
            f: unsafe extern "system" fn(arg: *mut c_void),
        ) -> jint,
    >,

    pub SetThreadLocalStorage:
        Option<unsafe extern "system" fn(env_id: *mut JNIEnv, ptr: *mut c_void)>,
    pub GetThreadLocalStorage:
        Option<unsafe extern "system" fn(env_id: *mut JNIEnv) -> *mut c_void>,

    // GC control
    pub DisableGC: Option<unsafe extern "system" fn()>,
    pub EnableGC: Option<unsafe extern "system" fn()>,
    pub RunGC: Option<unsafe extern "system" fn()>,

    pub GetThreadObject: Option<unsafe extern "system" fn(env: *mut JNIEnv) -> jobjectID>,
    pub GetMethodClass: Option<unsafe extern "system" fn(mid: jmethodID) -> jobjectID>,

    // JDK 1.2 additions
    pub jobjectID2jobject: Option<unsafe extern "system" fn(jid: jobjectID) -> jobject>,
    pub jobject2jobjectID: Option<unsafe extern "system" fn(jobj: jobject) -> jobjectID>,

    // JDK 1.2.2 additions
    pub SuspendThreadList: Option<
        unsafe extern "system" fn(req_count: jint, req_list: *mut *mut JNIEnv, results: *mut jint),
    >,
    pub ResumeThreadList: Option<
        unsafe extern "system" fn(req_count: jint, req_list: *mut *mut JNIEnv, results: *mut jint),
    >,
}

impl Default for JVMPI_Interface {
    fn default() -> Self {
        JVMPI_Interface {
            version: 0,
            NotifyEvent: None,
            EnableEvent: None,
            DisableEvent: None,
            RequestEvent: None,
            GetCallTrace: None,
            ProfilerExit: None,
            RawMonitorCreate: None,
            RawMonitorEnter: None,
            RawMonitorExit: None,
            RawMonitorWait: None,
            RawMonitorNotifyAll: None,
            RawMonitorDestroy: None,
            GetCurrentThreadCpuTime: None,
            SuspendThread: None,
            ResumeThread: None,
            GetThreadStatus: None,
            ThreadHasRun: None,
            CreateSystemThread: None,
            SetThreadLocalStorage: None,
            GetThreadLocalStorage: None,
            DisableGC: None,
            EnableGC: None,
            RunGC: None,
            GetThreadObject: None,
            GetMethodClass: None,
            jobjectID2jobject: None,
            jobject2jobjectID: None,
            SuspendThreadList: None,
            ResumeThreadList: None,
        }
    }
}
