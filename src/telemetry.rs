//! Opt-in `tracing` setup for hosts that do not install their own subscriber.
//!
//! What `tick-scale` reports:
//! - `debug`: the step picked by the nice-number search, and every build or re-range
//! - `trace`: each cursor move
//! - `warn`: rejected configurations, and steps too small to move the cursor
//!   (the same events counted by `TickScale::clamp_count`)
//!
//! `RUST_LOG` takes precedence over the directive passed here.

/// Directive used by [`init_default_tracing`] when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "tick_scale=info";

/// Installs a compact global subscriber filtered by `RUST_LOG` or
/// [`DEFAULT_TRACING_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_TRACING_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"tick_scale=warn"` to only surface clamps and rejected configs.
#[must_use]
pub fn init_tracing_with_directive(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_setup_is_a_no_op_without_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_directive("tick_scale=trace"));
    }

    #[test]
    fn default_directive_targets_this_crate() {
        assert!(DEFAULT_TRACING_DIRECTIVE.starts_with("tick_scale="));
    }
}
