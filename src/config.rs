//! # 运行配置
//!
//! 输入目录、输出目录和外部程序位置。默认值为约定的相对路径，
//! 可用环境变量覆盖；命令行参数全部透传给外部程序，不参与配置。
//!
//! ## 依赖关系
//! - 被 `commands/` 构建并传入 `batch/`
//! - 使用 `batch/launcher.rs` 的 `Launcher`

use crate::batch::Launcher;

use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "input_images";
pub const DEFAULT_OUTPUT_DIR: &str = "output_images";
pub const DEFAULT_JAVA: &str = "java";
pub const DEFAULT_JAR: &str = "out/artifacts/Gleitzsch_Kt_jar/Gleitzsch_Kt.jar";
pub const DEFAULT_PATTERN: &str = "*.jpg";

pub const ENV_INPUT_DIR: &str = "GLEITZSCH_INPUT_DIR";
pub const ENV_OUTPUT_DIR: &str = "GLEITZSCH_OUTPUT_DIR";
pub const ENV_JAVA: &str = "GLEITZSCH_JAVA";
pub const ENV_JAR: &str = "GLEITZSCH_JAR";
pub const ENV_EXECUTABLE: &str = "GLEITZSCH_EXECUTABLE";

/// 一次批处理的配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 输入图片目录
    pub input_dir: PathBuf,
    /// 输出图片目录（必须已存在）
    pub output_dir: PathBuf,
    /// 外部程序
    pub launcher: Launcher,
    /// 文件名匹配模式
    pub pattern: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            launcher: Launcher::java_jar(DEFAULT_JAVA, DEFAULT_JAR),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl RunConfig {
    /// 从进程环境变量读取配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// 通过任意查找函数读取配置，空值视为未设置
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let input_dir = get(ENV_INPUT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
        let output_dir = get(ENV_OUTPUT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        // 直接指定的可执行文件优先于 java -jar
        let launcher = match get(ENV_EXECUTABLE) {
            Some(program) => Launcher::new(program),
            None => {
                let java = get(ENV_JAVA).unwrap_or_else(|| DEFAULT_JAVA.into());
                let jar = get(ENV_JAR).unwrap_or_else(|| DEFAULT_JAR.into());
                Launcher::java_jar(java, jar)
            }
        };

        RunConfig {
            input_dir,
            output_dir,
            launcher,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}
