//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 默认日志级别
const DEFAULT_FILTER: &str = "quizgen=info";
const VERBOSE_FILTER: &str = "quizgen=debug";

/// 初始化全局日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择默认级别。重复调用不会报错。
pub fn init(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
