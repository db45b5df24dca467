use crate::utils::error::{Result, SdkError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "small_sdk=info";
const VERBOSE_DIRECTIVE: &str = "small_sdk=debug,info";

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// 安裝精簡格式的 subscriber；`RUST_LOG` 優先於 `verbose`
pub fn init_logger(verbose: bool) -> Result<()> {
    let directive = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };

    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .map_err(already_installed)
}

/// JSON 格式輸出，適合集中式日誌收集
pub fn init_json_logger() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_DIRECTIVE))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .json()
                .with_current_span(false),
        )
        .try_init()
        .map_err(already_installed)
}

fn already_installed(e: impl std::fmt::Display) -> SdkError {
    SdkError::ConfigError {
        message: format!("failed to install tracing subscriber: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        // 同一個測試行程只能安裝一次全域 subscriber
        let _ = init_logger(true);
        let second = init_json_logger();
        assert!(matches!(second, Err(SdkError::ConfigError { .. })));
    }
}
