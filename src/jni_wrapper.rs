//! Safe wrapper around the JNI environment.
//!
//! Scoped to the two JNI operations this bridge performs: reporting the
//! environment version and looking up the owning JavaVM.

use crate::sys::jni;
use std::ptr;

/// Safe wrapper around a JNI environment pointer.
///
/// # Thread Safety
///
/// A `JniEnv` is tied to a specific thread and cannot be sent across threads.
/// Each JVM thread has its own JNI environment.
pub struct JniEnv {
    env: *mut jni::JNIEnv,
}

impl JniEnv {
    /// Creates a JniEnv wrapper from a raw pointer.
    ///
    /// # Safety
    ///
    /// The caller must ensure the pointer is valid and comes from the current thread.
    pub unsafe fn from_raw(env: *mut jni::JNIEnv) -> Self {
        JniEnv { env }
    }

    /// Returns the raw JNI environment pointer.
    pub fn raw(&self) -> *mut jni::JNIEnv {
        self.env
    }

    /// Returns the JNI version.
    pub fn get_version(&self) -> jni::jint {
        unsafe { crate::jni_call!(self.env, GetVersion) }
    }

    /// Looks up the JavaVM this environment belongs to.
    pub fn get_java_vm(&self) -> Result<*mut jni::JavaVM, jni::jint> {
        let mut vm: *mut jni::JavaVM = ptr::null_mut();
        let res = unsafe { crate::jni_call!(self.env, GetJavaVM, &mut vm) };
        if res != jni::JNI_OK || vm.is_null() {
            return Err(res);
        }
        Ok(vm)
    }
}
