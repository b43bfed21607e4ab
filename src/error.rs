//! # 统一错误处理模块
//!
//! 定义批处理驱动的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 批处理统一错误类型
#[derive(Error, Debug)]
pub enum GleitzschError {
    // ─────────────────────────────────────────────────────────────
    // 输入目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot read input directory: {path}\nReason: {source}")]
    DirectoryAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern: {pattern}\nReason: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch external program '{program}'\nReason: {source}")]
    LaunchError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External program failed on {file} ({})", describe_code(.code))]
    ExternalProcessError { file: String, code: Option<i32> },
}

impl GleitzschError {
    /// 进程退出码：外部程序的非零退出码原样传递，其余情况为 1
    pub fn exit_code(&self) -> i32 {
        match self {
            GleitzschError::ExternalProcessError {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GleitzschError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_propagates_child_status() {
        let err = GleitzschError::ExternalProcessError {
            file: "b.jpg".to_string(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.to_string(),
            "External program failed on b.jpg (exit status 3)"
        );
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let killed = GleitzschError::ExternalProcessError {
            file: "a.jpg".to_string(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);
        assert!(killed.to_string().contains("terminated by signal"));

        let launch = GleitzschError::LaunchError {
            program: "java".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(launch.exit_code(), 1);
    }
}
