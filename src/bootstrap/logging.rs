//! Installs a `tracing` subscriber for applications that embed the decoder.
//!
//! The level comes from `logging.threshold` (`off`, `error`, `warn`, `info`,
//! `debug` or `trace`). With `off` nothing is installed. Rejected datagrams
//! show up at `debug` and decoded requests at `trace`.
//!
//! If the host application already installed a subscriber, it is kept.
use std::sync::Once;

use torrust_udp_decoder_configuration::{Configuration, Threshold};
use tracing::info;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// Logs to stdout at the configured threshold. Later calls do nothing.
pub fn setup(cfg: &Configuration, style: &TraceStyle) {
    let tracing_level = map_to_tracing_level_filter(cfg.logging.threshold);

    if tracing_level == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stdout_init(tracing_level, style);
    });
}

#[must_use]
pub fn map_to_tracing_level_filter(threshold: Threshold) -> LevelFilter {
    match threshold {
        Threshold::Off => LevelFilter::OFF,
        Threshold::Error => LevelFilter::ERROR,
        Threshold::Warn => LevelFilter::WARN,
        Threshold::Info => LevelFilter::INFO,
        Threshold::Debug => LevelFilter::DEBUG,
        Threshold::Trace => LevelFilter::TRACE,
    }
}

fn tracing_stdout_init(filter: LevelFilter, style: &TraceStyle) {
    let builder = tracing_subscriber::fmt().with_max_level(filter).with_ansi(true);

    // Another subscriber may already be installed by the host application.
    let result = match style {
        TraceStyle::Default => builder.try_init(),
        TraceStyle::Pretty(display_filename) => builder.pretty().with_file(*display_filename).try_init(),
        TraceStyle::Compact => builder.compact().try_init(),
        TraceStyle::Json => builder.json().try_init(),
    };

    if result.is_ok() {
        info!("Logging initialized");
    }
}

/// Output format of the stdout subscriber.
#[derive(Debug, Default)]
pub enum TraceStyle {
    #[default]
    Default,
    Pretty(bool),
    Compact,
    Json,
}

impl std::fmt::Display for TraceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = match self {
            TraceStyle::Default => "default",
            TraceStyle::Pretty(true) => "pretty, with source files",
            TraceStyle::Pretty(false) => "pretty",
            TraceStyle::Compact => "compact",
            TraceStyle::Json => "json",
        };

        f.write_str(style)
    }
}
