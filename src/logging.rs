//! Diagnostic logging on stderr.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, registry};

/// Filter directive override, e.g. `PERSOPASS_LOG=persopass=debug`.
pub const ENV_VAR: &str = "PERSOPASS_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "persopass=warn",
        1 => "persopass=info",
        2 => "persopass=debug",
        _ => "persopass=trace",
    }
}

pub fn init(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_env(ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    registry().with(filter).with(layer).try_init()
}
