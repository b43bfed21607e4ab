//! # 文件收集器
//!
//! 列出输入目录中待处理的图片文件。
//!
//! ## 功能
//! - 只扫描目录的第一层，子目录一律忽略
//! - glob 模式匹配文件名（默认 `*.jpg`），非 UTF-8 文件名同样参与匹配
//! - 按文件名排序，保证多次运行顺序一致
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{GleitzschError, Result};

use glob::Pattern;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 文件名匹配模式，未设置时匹配所有文件
    pattern: Option<Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            pattern: None,
        }
    }

    /// 设置匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern).map_err(|e| GleitzschError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.pattern = Some(compiled);
        Ok(self)
    }

    /// 收集所有匹配的文件名（不含目录部分）
    pub fn collect(&self) -> Result<Vec<OsString>> {
        let metadata = std::fs::metadata(&self.input).map_err(|e| self.access_error(e))?;
        if !metadata.is_dir() {
            return Err(self.access_error(io::Error::new(
                io::ErrorKind::Other,
                "not a directory",
            )));
        }

        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut names = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| self.access_error(e.into()))?;
            if !is_regular_file(&entry) {
                continue;
            }
            if let Some(name) = self.matching_name(entry.path()) {
                names.push(name);
            }
        }

        Ok(names)
    }

    fn matching_name(&self, path: &Path) -> Option<OsString> {
        let name = path.file_name()?;
        // 无效字节替换为 U+FFFD 后匹配，后缀判断不受影响
        match &self.pattern {
            Some(pattern) if !pattern.matches(&name.to_string_lossy()) => None,
            _ => Some(name.to_os_string()),
        }
    }

    fn access_error(&self, source: io::Error) -> GleitzschError {
        GleitzschError::DirectoryAccessError {
            path: self.input.display().to_string(),
            source,
        }
    }
}

/// 普通文件，或指向普通文件的符号链接
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
