use std::io::{self, IsTerminal};

use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

// --- Formatter ---

/// Local timestamp, padded level, and target, followed by the event fields.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let colour = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{colour}{:>5}\x1b[0m ", meta.level())?;
            write!(writer, "\x1b[36m{}\x1b[0m: ", meta.target())?;
        } else {
            write!(writer, "{:>5} {}: ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Builds the global filter.
///
/// An explicit level wins; otherwise `RUST_LOG` is honoured, falling back to
/// `info`.
pub fn make_filter(level: Option<LogLevel>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Initializes logging. Call once at startup.
///
/// Log records go to stderr so the report on stdout stays clean; they are
/// coloured only when stderr is a terminal.
pub fn init_logging(level: Option<LogLevel>) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(make_filter(level))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))
}
