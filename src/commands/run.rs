//! # 批量测试命令实现
//!
//! 对输入目录中的全部 `.jpg` 调用外部处理程序。
//!
//! ## 功能
//! - 收集输入图片
//! - 检查输出目录（不存在时仅警告，不创建）
//! - 顺序调用外部程序并输出耗时
//!
//! ## 依赖关系
//! - 使用 `config.rs` 的 `RunConfig`
//! - 使用 `batch/` 模块，`utils/output.rs`

use crate::batch::{
    BatchReport, BatchRunner, ConsoleReporter, FileCollector, Invoker, ProcessInvoker,
};
use crate::config::RunConfig;
use crate::error::Result;
use crate::utils::output;

use std::ffi::OsString;

/// 使用真实子进程执行批量测试
pub fn execute(config: &RunConfig, glitcher_args: Vec<OsString>) -> Result<BatchReport> {
    let mut invoker = ProcessInvoker::new(config.launcher.clone());
    execute_with(config, glitcher_args, &mut invoker)
}

/// 使用指定调用器执行批量测试
pub fn execute_with<I: Invoker>(
    config: &RunConfig,
    glitcher_args: Vec<OsString>,
    invoker: &mut I,
) -> Result<BatchReport> {
    if !config.output_dir.is_dir() {
        output::print_warning(&format!(
            "Output directory '{}' does not exist",
            config.output_dir.display()
        ));
    }

    let files = FileCollector::new(config.input_dir.clone())
        .with_pattern(&config.pattern)?
        .collect()?;

    BatchRunner::new(config, glitcher_args).run(&files, invoker, &mut ConsoleReporter)
}
