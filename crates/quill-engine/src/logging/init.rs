use std::sync::Once;

use log::LevelFilter;

/// Logger settings.
///
/// `filter` uses `env_logger` directive syntax, e.g.
/// `"quill_engine=trace,wgpu=warn"`. When unset, `RUST_LOG` is consulted, and
/// failing that everything logs at `level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Timestamp each record (millisecond precision).
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Debug output for this crate, warnings for everything else.
    pub fn verbose() -> Self {
        Self {
            filter: Some("warn,quill_engine=debug,quill_studio=debug".to_owned()),
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.level);
            }
        }

        builder.write_style(config.write_style);
        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            log::debug!("global logger already set; keeping it");
            return;
        }
        log::debug!("logging initialized");
    });
}
