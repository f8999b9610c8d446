/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文档出题客户端");
    info!("🌐 服务地址: {}", config.api_base_url());
    info!("📝 生成模式: {}", config.mode);
    info!("{}", "=".repeat(60));
}

/// 记录文件加载信息
///
/// # 参数
/// - `total`: 文件总数
/// - `folder`: 文件所在目录
pub fn log_files_loaded(total: usize, folder: &str) {
    info!("✓ 在 {} 中找到 {} 个待上传的文件", folder, total);
}

/// 记录批量操作开始
///
/// # 参数
/// - `action`: 操作名称（上传 / 生成题目）
/// - `count`: 本批文件数量
pub fn log_batch_start(action: &str, count: usize) {
    info!("\n{}", "─".repeat(60));
    info!("📦 开始{}: 共 {} 个文件（全部并发）", action, count);
}

/// 记录批量操作完成
pub fn log_batch_complete(action: &str, count: usize) {
    info!("✓ {}完成: {} 个文件", action, count);
    info!("{}", "─".repeat(60));
}

/// 运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub files: usize,
    pub uploaded: usize,
    pub questions: usize,
    pub failed_actions: usize,
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📁 文件: {}", stats.files);
    info!("✅ 已上传: {}/{}", stats.uploaded, stats.files);
    info!("📝 题目: {}", stats.questions);
    info!("❌ 失败操作: {}", stats.failed_actions);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("填空题示例", 2), "填空...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
