use core::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

static SIGINT: AtomicBool = AtomicBool::new(false);

pub fn received_ctrl_c() -> bool {
    SIGINT.load(Ordering::SeqCst)
}

/// Installs a handler that only records the interrupt, so long BFS sweeps can
/// stop and report what they have.
pub fn initialize() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        SIGINT.store(true, Ordering::SeqCst);
    })
}
