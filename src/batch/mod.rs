//! # 批量处理模块
//!
//! 对输入目录中的每张图片顺序调用外部处理程序。
//!
//! ## 功能
//! - 收集匹配文件列表
//! - 构建并启动外部程序调用
//! - 顺序执行、失败即止，输出进度与耗时
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `walkdir`/`glob` 收集文件

pub mod collector;
pub mod launcher;
pub mod reporter;
pub mod runner;

pub use collector::FileCollector;
pub use launcher::{Invoker, Launcher, ProcessInvoker};
pub use reporter::ConsoleReporter;
pub use runner::{BatchReport, BatchRunner};
