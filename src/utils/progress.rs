//! Progress spinner helpers using indicatif and tracing-indicatif

use indicatif::ProgressStyle;
use tracing::{info_span, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Spinner style shared by every progress span
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
}

/// Create a span that shows a spinner while entered.
///
/// The spinner is drawn by the `IndicatifLayer` installed in
/// [`init_logging`](super::init_logging) and disappears when the span closes.
/// Without that layer the span is a plain tracing span.
pub fn spinner_span(message: &str) -> Span {
    let span = info_span!("progress", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(message);
    span
}
