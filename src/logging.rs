//! Stderr tracing subscriber for the binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the CLI log filter.
pub const LOG_ENV: &str = "FPDIFF_LOG";

/// CLI filter when `FPDIFF_LOG` is unset. Stderr carries only the refusal
/// diagnostic unless logging is asked for.
pub const CLI_DEFAULT_FILTER: &str = "off";

/// Install a stderr `fmt` subscriber filtered by `env_var`, falling back to
/// `default` when unset or invalid. A second call is a no-op.
pub fn init(env_var: &str, default: &str) {
    let filter = EnvFilter::try_from_env(env_var).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
