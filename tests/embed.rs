//! Acquisition against a live JVM, when one can be found.
//!
//! Run with `cargo test --features embed`. Without a usable `JAVA_HOME` or
//! `JVM_LIB_PATH` the test reports the situation and passes; the fake-host
//! tests cover the logic either way.

#![cfg(feature = "embed")]

use jvmpi_gc::embed::{find_libjvm, JavaVmBuilder};
use jvmpi_gc::env::{AcquireError, Jvmpi};
use jvmpi_gc::sys::jni;

#[test]
fn live_vm_acquisition_resolves_one_way_or_the_other() {
    if let Err(e) = find_libjvm() {
        eprintln!("skipping live-VM check: {e}");
        return;
    }

    let vm = JavaVmBuilder::new(jni::JNI_VERSION_1_2)
        .option("-Xmx64m")
        .expect("option")
        .create()
        .expect("JVM creation");

    match Jvmpi::from_java_vm(vm.java_vm_ptr()) {
        Ok(profiler) => {
            // A classic VM: toggle and restore.
            profiler.disable_gc();
            profiler.enable_gc();
        }
        Err(e) => {
            // JDK 6+ dropped JVMPI; the refusal is the expected outcome.
            assert!(matches!(e, AcquireError::ProfilerUnavailable(_)));
        }
    }
}
