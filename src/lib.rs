pub mod api;
pub mod core;

pub fn init_logging() {
    // Safe to call more than once; later calls are no-ops.
    let _ = env_logger::Builder::from_default_env().try_init();
}
