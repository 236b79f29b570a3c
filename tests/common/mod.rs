//! A fake host VM assembled from real C-layout tables.
//!
//! Builds a `JNIEnv`/`JavaVM` pair whose vtables route back into test stubs,
//! plus whatever `JVMPI_Interface` the test supplies. Context travels through
//! the tables' reserved slots, so the fixture needs no global registry: the
//! env's `reserved0` holds the VM cell, and the VM table's `reserved0` holds
//! the profiler interface.

#![allow(dead_code)]

use std::ffi::c_void;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

use jvmpi_gc::sys::{jni, jvmpi};

/// Successful GetEnv dispatches observed by the fixture (per test binary).
pub static GET_ENV_CALLS: AtomicUsize = AtomicUsize::new(0);

unsafe extern "system" fn get_version(_env: *mut jni::JNIEnv) -> jni::jint {
    jni::JNI_VERSION_1_2
}

unsafe extern "system" fn get_java_vm(
    env: *mut jni::JNIEnv,
    vm: *mut *mut jni::JavaVM,
) -> jni::jint {
    *vm = (**env).reserved0 as *mut jni::JavaVM;
    jni::JNI_OK
}

unsafe extern "system" fn get_java_vm_refused(
    _env: *mut jni::JNIEnv,
    vm: *mut *mut jni::JavaVM,
) -> jni::jint {
    *vm = ptr::null_mut();
    jni::JNI_ERR
}

unsafe extern "system" fn get_env(
    vm: *mut jni::JavaVM,
    penv: *mut *mut c_void,
    version: jni::jint,
) -> jni::jint {
    if version != jvmpi::JVMPI_VERSION_1 {
        return jni::JNI_EVERSION;
    }
    GET_ENV_CALLS.fetch_add(1, Ordering::SeqCst);
    *penv = (**vm).reserved0;
    jni::JNI_OK
}

unsafe extern "system" fn get_env_refused(
    _vm: *mut jni::JavaVM,
    penv: *mut *mut c_void,
    _version: jni::jint,
) -> jni::jint {
    *penv = ptr::null_mut();
    jni::JNI_EVERSION
}

unsafe extern "system" fn destroy_java_vm(_vm: *mut jni::JavaVM) -> jni::jint {
    jni::JNI_OK
}

unsafe extern "system" fn attach_current_thread(
    _vm: *mut jni::JavaVM,
    penv: *mut *mut c_void,
    _args: *mut c_void,
) -> jni::jint {
    *penv = ptr::null_mut();
    jni::JNI_OK
}

unsafe extern "system" fn detach_current_thread(_vm: *mut jni::JavaVM) -> jni::jint {
    jni::JNI_OK
}

/// The assembled fake host. Field order matters only for the wiring below;
/// the boxes keep every table at a stable address while the fixture lives.
pub struct FakeVm {
    jvmpi: Box<jvmpi::JVMPI_Interface>,
    invoke: Box<jni::JNIInvokeInterface_>,
    vm: Box<jni::JavaVM>,
    native: Box<jni::JNINativeInterface_>,
    env: Box<jni::JNIEnv>,
}

impl FakeVm {
    /// A host that supports the profiler interface described by `table`.
    pub fn new(table: jvmpi::JVMPI_Interface) -> FakeVm {
        Self::build(table, get_java_vm, get_env)
    }

    /// A host whose env refuses to hand out its JavaVM.
    pub fn without_java_vm() -> FakeVm {
        Self::build(jvmpi::JVMPI_Interface::default(), get_java_vm_refused, get_env)
    }

    /// A host whose VM has no profiler interface to offer.
    pub fn without_profiler() -> FakeVm {
        Self::build(jvmpi::JVMPI_Interface::default(), get_java_vm, get_env_refused)
    }

    fn build(
        table: jvmpi::JVMPI_Interface,
        get_java_vm_fn: unsafe extern "system" fn(*mut jni::JNIEnv, *mut *mut jni::JavaVM) -> jni::jint,
        get_env_fn: unsafe extern "system" fn(*mut jni::JavaVM, *mut *mut c_void, jni::jint) -> jni::jint,
    ) -> FakeVm {
        let jvmpi = Box::new(table);

        let invoke = Box::new(jni::JNIInvokeInterface_ {
            reserved0: &*jvmpi as *const jvmpi::JVMPI_Interface as *mut c_void,
            reserved1: ptr::null_mut(),
            reserved2: ptr::null_mut(),
            DestroyJavaVM: destroy_java_vm,
            AttachCurrentThread: attach_current_thread,
            DetachCurrentThread: detach_current_thread,
            GetEnv: get_env_fn,
            AttachCurrentThreadAsDaemon: attach_current_thread,
        });

        let vm: Box<jni::JavaVM> = Box::new(&*invoke as *const jni::JNIInvokeInterface_);

        let native = Box::new(jni::JNINativeInterface_ {
            reserved0: &*vm as *const jni::JavaVM as *mut c_void,
            reserved1: ptr::null_mut(),
            reserved2: ptr::null_mut(),
            reserved3: ptr::null_mut(),
            GetVersion: get_version,
            unbound_5_218: [ptr::null_mut(); 214],
            GetJavaVM: get_java_vm_fn,
        });

        let env: Box<jni::JNIEnv> = Box::new(&*native as *const jni::JNINativeInterface_);

        FakeVm {
            jvmpi,
            invoke,
            vm,
            native,
            env,
        }
    }

    /// The `JNIEnv*` a native entry point would receive.
    pub fn env_ptr(&mut self) -> *mut jni::JNIEnv {
        &mut *self.env
    }

    /// The `JavaVM*` the env hands back through GetJavaVM.
    pub fn vm_ptr(&mut self) -> *mut jni::JavaVM {
        &mut *self.vm
    }

    /// The profiler table the VM hands out through GetEnv.
    pub fn jvmpi_ptr(&self) -> *const jvmpi::JVMPI_Interface {
        &*self.jvmpi
    }
}
