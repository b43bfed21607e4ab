//! # 进度输出
//!
//! 批处理过程中的进度事件及其终端输出。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `utils/output.rs`

use crate::utils::output;

use std::time::Duration;

/// 批处理进度事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// 待处理图片总数
    Header { total: usize },
    /// 开始处理第 `index` 张（从 1 开始）
    Processing {
        file: String,
        index: usize,
        total: usize,
    },
    /// 单张处理完成
    Processed { elapsed: Duration },
    /// 全部完成
    Finished { processed: usize, elapsed: Duration },
}

impl Progress {
    /// 事件对应的输出文本
    pub fn message(&self) -> String {
        match self {
            Progress::Header { total } => format!("{} images to process", total),
            Progress::Processing { file, index, total } => {
                format!("Processing image {} ({}/{})", file, index, total)
            }
            Progress::Processed { elapsed } => {
                format!("Image processed in: {}", output::format_duration(*elapsed))
            }
            Progress::Finished { processed, elapsed } => format!(
                "Total test runtime: {} ({} images)",
                output::format_duration(*elapsed),
                processed
            ),
        }
    }
}

/// 进度事件的输出目标
pub trait Reporter {
    fn report(&mut self, event: &Progress);
}

/// 输出到终端
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: &Progress) {
        let msg = event.message();
        match event {
            Progress::Header { .. } | Progress::Processing { .. } => output::print_info(&msg),
            Progress::Processed { .. } => output::print_success(&msg),
            Progress::Finished { .. } => output::print_done(&msg),
        }
    }
}
