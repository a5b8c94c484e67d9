//! Tracing subscriber setup

/// Install a formatting subscriber for the `tracing` events this crate emits.
///
/// Safe to call more than once; later calls leave the existing subscriber in
/// place and return `false`.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt().with_target(true).try_init().is_ok()
}
