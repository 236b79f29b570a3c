// Exports Java_jvmpigc_GcControl_{init,enableGC,disableGC}.
// Rename the literal to match your own class: for com.example.Unsafe
// the argument is "com_example_Unsafe".

jvmpi_gc::export_gc_natives!("jvmpigc_GcControl");
