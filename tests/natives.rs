//! End-to-end lifecycle of the exported natives against a fake host.
//!
//! The process-wide slot is set once per process, so the whole sequence
//! lives in a single test. The pre-init paths get their own binary
//! (tests/natives_unset.rs) where the slot is never populated.

mod common;

use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::FakeVm;
use jvmpi_gc::sys::{jni, jvmpi};

jvmpi_gc::export_gc_natives!("jvmpigc_GcControl");

static ENABLE_HITS: AtomicUsize = AtomicUsize::new(0);
static DISABLE_HITS: AtomicUsize = AtomicUsize::new(0);

unsafe extern "system" fn count_enable() {
    ENABLE_HITS.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "system" fn count_disable() {
    DISABLE_HITS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn init_then_toggle_then_reinit() {
    let mut vm = FakeVm::new(jvmpi::JVMPI_Interface {
        version: jvmpi::JVMPI_VERSION_1,
        EnableGC: Some(count_enable),
        DisableGC: Some(count_disable),
        ..Default::default()
    });
    let env = vm.env_ptr();

    // init acquires the interface and fills the process-wide slot.
    assert_eq!(unsafe { __jvmpi_gc_init(env, ptr::null_mut()) }, jni::JNI_TRUE);
    assert!(jvmpi_gc::global_profiler().is_some());
    assert_eq!(common::GET_ENV_CALLS.load(Ordering::SeqCst), 1);

    // disableGC/enableGC each perform exactly one interface call.
    unsafe { __jvmpi_gc_disable_gc(env, ptr::null_mut()) };
    assert_eq!(DISABLE_HITS.load(Ordering::SeqCst), 1);
    assert_eq!(ENABLE_HITS.load(Ordering::SeqCst), 0);

    unsafe { __jvmpi_gc_enable_gc(env, ptr::null_mut()) };
    assert_eq!(ENABLE_HITS.load(Ordering::SeqCst), 1);
    assert_eq!(DISABLE_HITS.load(Ordering::SeqCst), 1);

    // A second init succeeds without going back to the VM.
    assert_eq!(unsafe { __jvmpi_gc_init(env, ptr::null_mut()) }, jni::JNI_TRUE);
    assert_eq!(common::GET_ENV_CALLS.load(Ordering::SeqCst), 1);
}
