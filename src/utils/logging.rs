//! Logging setup: tracing events rendered with a one-symbol level prefix on stderr

use console::{style, StyledObject};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use super::spinner_style;

pub struct KebabifyFormatter;

impl<S, N> FormatEvent<S, N> for KebabifyFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let symbol: StyledObject<&str> = match *event.metadata().level() {
            Level::TRACE => style("[ ]").dim(),
            Level::DEBUG => style("[?]").blue(),
            Level::INFO => style("[+]").green().bold(),
            Level::WARN => style("[*]").yellow().bold(),
            Level::ERROR => style("[-]").red().bold(),
        };

        write!(writer, "    {} ", symbol.for_stderr())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Map `-v` occurrences to a default filter directive
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Log lines go through the indicatif layer's stderr writer so they are
/// printed above any running spinner. The level filter only applies to the
/// log layer; spinner spans are always shown.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));

    let indicatif_layer = IndicatifLayer::new().with_progress_style(spinner_style());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(indicatif_layer.get_stderr_writer())
        .event_format(KebabifyFormatter)
        .with_filter(filter);

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(indicatif_layer)
        .try_init();
}
