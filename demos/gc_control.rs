//! The GC-control bridge, built as a loadable native library.
//!
//! # Building
//!
//! ```bash
//! cargo build --release --example gc_control
//! ```
//!
//! # Using
//!
//! Put the resulting library on `java.library.path` and declare the natives
//! in `jvmpigc.GcControl` (see templates/bridge-starter/GcControl.java):
//!
//! ```java
//! if (GcControl.init()) {
//!     GcControl.disableGC();
//!     // ... allocation-sensitive section ...
//!     GcControl.enableGC();
//! }
//! ```

jvmpi_gc::export_gc_natives!("jvmpigc_GcControl");
