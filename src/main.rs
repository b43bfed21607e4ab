//! # test_on_all_images - Gleitzsch 批量测试驱动
//!
//! 对输入目录中的每张 `.jpg` 顺序调用外部 glitcher，
//! 打印单张耗时与总耗时。任一张失败即终止，退出码非零。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义，全部透传)
//!   ├── config.rs   (目录与程序位置)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (文件收集、外部调用、顺序执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod utils;

use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse_args(std::env::args_os());

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(e.exit_code());
    }
}
