pub mod app;
pub mod shared;

/// Initializes logging (via the `log` crate) and panic reporting on the
/// browser console. The host application calls this once before mounting
/// anything that uses the stores.
pub fn init_instrumentation() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
