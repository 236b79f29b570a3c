//! Behavior of the exported natives while the process-wide slot is unset.
//!
//! Every test here leaves the slot unset, so they can share one process.

mod common;

use std::ptr;

use common::FakeVm;
use jvmpi_gc::sys::jni;

jvmpi_gc::export_gc_natives!("jvmpigc_GcControl");

#[test]
fn gc_calls_before_init_are_guarded_no_ops() {
    unsafe {
        __jvmpi_gc_enable_gc(ptr::null_mut(), ptr::null_mut());
        __jvmpi_gc_disable_gc(ptr::null_mut(), ptr::null_mut());
    }
    assert!(jvmpi_gc::global_profiler().is_none());
}

#[test]
fn init_without_profiler_reports_failure_and_leaves_slot_unset() {
    let mut vm = FakeVm::without_profiler();
    assert_eq!(
        unsafe { __jvmpi_gc_init(vm.env_ptr(), ptr::null_mut()) },
        jni::JNI_FALSE
    );
    assert!(jvmpi_gc::global_profiler().is_none());
}

#[test]
fn init_without_java_vm_reports_failure_and_leaves_slot_unset() {
    let mut vm = FakeVm::without_java_vm();
    assert_eq!(
        unsafe { __jvmpi_gc_init(vm.env_ptr(), ptr::null_mut()) },
        jni::JNI_FALSE
    );
    assert!(jvmpi_gc::global_profiler().is_none());
}
