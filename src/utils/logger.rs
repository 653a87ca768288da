use crate::config::toml_config::LoggingConfig;
use crate::utils::error::{CalcError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn already_initialized(e: impl std::fmt::Display) -> CalcError {
    CalcError::ConfigError {
        message: format!("Failed to initialize logger: {}", e),
    }
}

pub fn init_logger(verbose: bool) -> Result<()> {
    let filter = if verbose {
        build_filter("small_calc=debug,info")
    } else {
        build_filter("small_calc=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(already_initialized)
}

pub fn init_json_logger() -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter("small_calc=info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
        .map_err(already_initialized)
}

/// 依計算表中的 [logging] 設定初始化日誌
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    let level = config
        .level
        .as_deref()
        .unwrap_or("info")
        .to_ascii_lowercase();
    let directive = format!("small_calc={}", level);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(build_filter(&directive));

    let result = if config.json.unwrap_or(false) {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer.compact()).try_init()
    };

    result.map_err(already_initialized)
}
