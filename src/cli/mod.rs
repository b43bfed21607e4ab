//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! 本程序不解析任何自身选项：所有参数（包括 `--help`、`-V`）
//! 按原样透传给外部处理程序的每次调用。
//! 目录与程序位置通过环境变量配置，见 `config.rs`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Parser;
use std::ffi::OsString;

/// Run the Gleitzsch glitcher over every .jpg in the input directory
#[derive(Parser, Debug)]
#[command(name = "test_on_all_images")]
#[command(about = "Run the Gleitzsch glitcher over every .jpg in the input directory", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Extra arguments forwarded to every glitcher invocation
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub glitcher_args: Vec<OsString>,
}

impl Cli {
    /// 解析命令行参数，失败时由 clap 打印错误并退出
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_args(args).unwrap_or_else(|e| e.exit())
    }

    /// 解析命令行参数
    ///
    /// clap 会把第一个 `--` 当作选项结束标记吞掉，这里补回，
    /// 保证所有参数原样透传。
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut cli = Self::try_parse_from(&raw)?;
        if raw.get(1).is_some_and(|first| first == "--") {
            cli.glitcher_args.insert(0, OsString::from("--"));
        }
        Ok(cli)
    }
}
