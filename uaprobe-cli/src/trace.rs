use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uaprobe::error::{BoxError, ErrorContext as _};

/// Install the global tracing subscriber, logging to stderr.
///
/// The default directive can be overwritten using the `RUST_LOG` env variable.
pub fn init_tracing(default_directive: impl Into<Directive>, json: bool) -> Result<(), BoxError> {
    if json {
        init_structured(default_directive)
    } else {
        init_default(default_directive)
    }
}

fn init_default(default_directive: impl Into<Directive>) -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(default_directive.into())
                .from_env_lossy(),
        )
        .try_init()
        .context("try init (default) tracing subscriber")?;

    Ok(())
}

fn init_structured(default_directive: impl Into<Directive>) -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .json()
                .flatten_event(true),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(default_directive.into())
                .from_env_lossy(),
        )
        .try_init()
        .context("try init (structured) tracing subscriber")?;

    Ok(())
}
