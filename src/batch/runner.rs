//! # 批量执行器
//!
//! 逐个调用外部程序处理图片，并统计耗时。
//!
//! ## 功能
//! - 严格顺序执行，同一时刻只有一个子进程
//! - 任一文件失败立即终止整批（不重试、不跳过），不输出总耗时
//! - 单文件耗时与总耗时输出
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `batch/launcher.rs` 的 `Invoker` 执行调用
//! - 使用 `batch/reporter.rs` 输出进度

use super::launcher::{Invocation, Invoker};
use super::reporter::{Progress, Reporter};
use crate::config::RunConfig;
use crate::error::{GleitzschError, Result};

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 按处理顺序排列的单文件耗时
    pub timings: Vec<Duration>,
    /// 总耗时
    pub total: Duration,
}

impl BatchReport {
    /// 处理成功的文件数
    pub fn processed(&self) -> usize {
        self.timings.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    input_dir: PathBuf,
    output_dir: PathBuf,
    /// 透传给每次调用的额外参数
    extra_args: Vec<OsString>,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(config: &RunConfig, extra_args: Vec<OsString>) -> Self {
        Self {
            input_dir: config.input_dir.clone(),
            output_dir: config.output_dir.clone(),
            extra_args,
        }
    }

    /// 构建单个文件的调用参数
    pub fn invocation(&self, file_name: &OsStr) -> Invocation {
        Invocation::new(&self.input_dir, &self.output_dir, file_name, &self.extra_args)
    }

    /// 顺序处理文件列表，遇到第一个失败即返回错误
    pub fn run<I, R>(
        &self,
        files: &[OsString],
        invoker: &mut I,
        reporter: &mut R,
    ) -> Result<BatchReport>
    where
        I: Invoker,
        R: Reporter,
    {
        let total = files.len();
        reporter.report(&Progress::Header { total });
        let t0 = Instant::now();

        let mut report = BatchReport::default();
        for (idx, file_name) in files.iter().enumerate() {
            let invocation = self.invocation(file_name);
            reporter.report(&Progress::Processing {
                file: invocation.display_name(),
                index: idx + 1,
                total,
            });

            let start = Instant::now();
            let outcome = invoker.invoke(&invocation)?;
            if !outcome.success {
                return Err(GleitzschError::ExternalProcessError {
                    file: invocation.display_name(),
                    code: outcome.code,
                });
            }

            let elapsed = start.elapsed();
            reporter.report(&Progress::Processed { elapsed });
            report.timings.push(elapsed);
        }

        report.total = t0.elapsed();
        reporter.report(&Progress::Finished {
            processed: report.processed(),
            elapsed: report.total,
        });

        Ok(report)
    }
}
