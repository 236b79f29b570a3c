//! Probe a live JVM for JVMPI support.
//!
//! Creates a JVM in-process (from `JAVA_HOME` or `JVM_LIB_PATH`) and runs
//! the same acquisition the `init` native performs. On a classic VM this
//! prints the interface version; on JDK 6+ it prints the acquisition error,
//! which is exactly what Java callers see as `init() == false`.
//!
//! ```bash
//! cargo run --example embed_check --features embed
//! ```

use jvmpi_gc::prelude::*;

fn main() {
    let vm = match JavaVmBuilder::new(jni::JNI_VERSION_1_2)
        .option("-Xmx64m")
        .expect("option")
        .create()
    {
        Ok(vm) => vm,
        Err(e) => {
            eprintln!("could not create a JVM: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "JVM up, JNI version 0x{:x}",
        unsafe { vm.creator_env() }.get_version()
    );

    match Jvmpi::from_java_vm(vm.java_vm_ptr()) {
        Ok(profiler) => {
            println!("JVMPI acquired, version 0x{:x}", profiler.version());
            profiler.disable_gc();
            profiler.enable_gc();
            println!("GC toggled and restored.");
        }
        Err(e) => println!("JVMPI not available here: {e}"),
    }

    if let Err(code) = vm.destroy() {
        eprintln!("DestroyJavaVM failed: {code}");
    }
}
