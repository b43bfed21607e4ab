//! # 命令执行模块
//!
//! 实现批量测试的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`, `batch/`
//! - 子模块: run

pub mod run;

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::from_env();
    run::execute(&config, cli.glitcher_args)?;
    Ok(())
}
