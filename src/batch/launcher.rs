//! # 外部程序调用
//!
//! 描述外部处理程序如何被启动：
//! `<program> [leading...] <input_dir>/<file> <output_dir>/<file> [extra...]`
//!
//! ## 功能
//! - `Launcher`: 程序路径及固定前置参数（如 `java -jar xxx.jar`）
//! - `Invocation`: 单个文件的一次调用参数
//! - `Invoker`: 执行调用的抽象，`ProcessInvoker` 为真实子进程实现
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `error.rs`

use crate::error::{GleitzschError, Result};

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 外部处理程序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    program: OsString,
    leading_args: Vec<OsString>,
}

impl Launcher {
    /// 直接运行可执行文件
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// 通过 `java -jar` 运行
    pub fn java_jar(java: impl Into<OsString>, jar: impl Into<OsString>) -> Self {
        Self::new(java).arg("-jar").arg(jar)
    }

    /// 追加固定前置参数
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.leading_args.push(arg.into());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// 完整参数列表（不含程序本身）
    pub fn args_for(&self, invocation: &Invocation) -> Vec<OsString> {
        let mut args = self.leading_args.clone();
        args.push(invocation.input.clone().into_os_string());
        args.push(invocation.output.clone().into_os_string());
        args.extend(invocation.extra_args.iter().cloned());
        args
    }

    /// 构建子进程命令，标准输出/错误直接继承
    pub fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args_for(invocation))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

/// 单个文件的调用参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// 文件名（不含目录），可能不是有效 UTF-8
    pub file_name: OsString,
    /// 输入路径
    pub input: PathBuf,
    /// 输出路径
    pub output: PathBuf,
    /// 透传参数
    pub extra_args: Vec<OsString>,
}

impl Invocation {
    pub fn new(
        input_dir: &Path,
        output_dir: &Path,
        file_name: impl AsRef<OsStr>,
        extra_args: &[OsString],
    ) -> Self {
        let file_name = file_name.as_ref();
        Self {
            file_name: file_name.to_os_string(),
            input: input_dir.join(file_name),
            output: output_dir.join(file_name),
            extra_args: extra_args.to_vec(),
        }
    }

    /// 用于输出和错误信息的文件名
    pub fn display_name(&self) -> String {
        self.file_name.to_string_lossy().to_string()
    }
}

/// 外部程序退出结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub success: bool,
    /// 被信号终止时为 None
    pub code: Option<i32>,
}

#[cfg(test)]
impl ExitOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failure(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// 执行一次调用并等待其结束
pub trait Invoker {
    fn invoke(&mut self, invocation: &Invocation) -> Result<ExitOutcome>;
}

/// 启动真实子进程的调用器
pub struct ProcessInvoker {
    launcher: Launcher,
}

impl ProcessInvoker {
    pub fn new(launcher: Launcher) -> Self {
        Self { launcher }
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&mut self, invocation: &Invocation) -> Result<ExitOutcome> {
        let status = self
            .launcher
            .command(invocation)
            .status()
            .map_err(|e| GleitzschError::LaunchError {
                program: self.launcher.program().to_string_lossy().to_string(),
                source: e,
            })?;

        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Launcher {
        pub fn leading_args(&self) -> &[OsString] {
            &self.leading_args
        }
    }

    fn os(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_invocation_paths() {
        let inv = Invocation::new(
            Path::new("input_images"),
            Path::new("output_images"),
            "a.jpg",
            &[],
        );
        assert_eq!(inv.input, Path::new("input_images").join("a.jpg"));
        assert_eq!(inv.output, Path::new("output_images").join("a.jpg"));
        assert!(inv.extra_args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_passed_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.jpg");
        let inv = Invocation::new(Path::new("in"), Path::new("out"), name, &[]);

        assert_eq!(inv.input, Path::new("in").join(name));
        assert_eq!(inv.output, Path::new("out").join(name));
        assert_eq!(inv.display_name(), "caf\u{fffd}.jpg");

        let args = Launcher::new("glitch").args_for(&inv);
        assert!(args[0].as_bytes().ends_with(b"caf\xe9.jpg"));
    }

    #[test]
    fn test_java_jar_argument_order() {
        let launcher = Launcher::java_jar("java", "glitch.jar");
        let inv = Invocation::new(
            Path::new("in"),
            Path::new("out"),
            "cat.jpg",
            &os(&["--gamma", "2.5", "-v"]),
        );

        let args = launcher.args_for(&inv);
        let expected: Vec<OsString> = vec![
            "-jar".into(),
            "glitch.jar".into(),
            Path::new("in").join("cat.jpg").into_os_string(),
            Path::new("out").join("cat.jpg").into_os_string(),
            "--gamma".into(),
            "2.5".into(),
            "-v".into(),
        ];
        assert_eq!(args, expected);
    }

    #[test]
    fn test_command_program_and_args() {
        let launcher = Launcher::new("./gleitzsch");
        let inv = Invocation::new(
            Path::new("in"),
            Path::new("out"),
            "x.jpg",
            &os(&["-s", "512"]),
        );

        let cmd = launcher.command(&inv);
        assert_eq!(cmd.get_program(), "./gleitzsch");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(args.len(), 4);
        assert_eq!(args[2], "-s");
        assert_eq!(args[3], "512");
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let mut invoker = ProcessInvoker::new(Launcher::new("/nonexistent/gleitzsch-binary"));
        let inv = Invocation::new(Path::new("in"), Path::new("out"), "a.jpg", &[]);

        match invoker.invoke(&inv) {
            Err(GleitzschError::LaunchError { program, .. }) => {
                assert_eq!(program, "/nonexistent/gleitzsch-binary");
            }
            other => panic!("expected LaunchError, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_reported() {
        let inv = Invocation::new(Path::new("in"), Path::new("out"), "a.jpg", &[]);

        let mut ok = ProcessInvoker::new(Launcher::new("true"));
        assert_eq!(ok.invoke(&inv).unwrap(), ExitOutcome::success());

        let mut failing = ProcessInvoker::new(Launcher::new("false"));
        assert_eq!(failing.invoke(&inv).unwrap(), ExitOutcome::failure(Some(1)));
    }
}
