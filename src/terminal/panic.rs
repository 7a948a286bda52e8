//! Panic hook that gives the terminal back before reporting.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, logs the panic and then
/// runs the previously installed hook.
///
/// Call it after `color_eyre::install()` so the report handler runs last.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Restore the default hook for other tests.
        let _ = panic::take_hook();
    }
}
