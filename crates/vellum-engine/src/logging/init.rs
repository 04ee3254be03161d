use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (`"warn"`,
/// `"vellum::interp=debug,wgpu=warn"`). Without it, `RUST_LOG` is read, then
/// `default_level` applies.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq)]
enum Filter {
    Spec(String),
    Level(log::LevelFilter),
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> Filter {
    config
        .env_filter
        .clone()
        .or(rust_log)
        .map_or(Filter::Level(config.default_level), Filter::Spec)
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        // GPU backends are chatty at info.
        for module in ["wgpu_core", "wgpu_hal", "naga"] {
            builder.filter_module(module, log::LevelFilter::Warn);
        }

        match resolve_filter(&config, std::env::var("RUST_LOG").ok()) {
            Filter::Spec(spec) => builder.parse_filters(&spec),
            Filter::Level(level) => builder.filter_level(level),
        };

        builder.write_style(config.write_style);
        builder.format_timestamp(None);
        builder.init();

        log::debug!("logging initialized");
    });
}
