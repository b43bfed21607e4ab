//! # 美化输出工具
//!
//! 提供统一的终端输出样式，以及耗时的格式化。
//!
//! ## 依赖关系
//! - 被 `batch/reporter.rs`, `commands/` 和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::time::Duration;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 格式化耗时为 `H:MM:SS.ffffff`
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let micros = duration.subsec_micros();

    format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, micros)
}
