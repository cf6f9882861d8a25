fn main() {
    println!("cargo:rerun-if-changed=bindings.h");

    // Host builds (tests, docs) never touch the ESP-IDF toolchain.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
