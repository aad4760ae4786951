//! Diagnostic logging for native hosts

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Installs a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Controller;
    use crate::core::Operator;
    use crate::surface::Recorder;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();

        let mut c = Controller::new(Recorder::new());
        c.press_digit('2');
        c.press_operator(Operator::Add);
        c.press_digit('2');
        assert!(c.evaluate().is_displayed());
    }
}
