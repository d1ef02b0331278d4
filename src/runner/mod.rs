//! # 外部脚本执行
//!
//! 以参数向量（而非 shell 字符串）描述一次脚本调用，并通过 `ScriptRunner`
//! 执行。二进制使用 `ProcessRunner` 或 `DryRunner`，测试使用记录型 runner。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: process, dry_run

pub mod dry_run;
pub mod process;

pub use dry_run::DryRunner;
pub use process::ProcessRunner;

use crate::error::Result;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// 一次外部脚本调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// 步骤名，如 `inter_trans`
    pub step: &'static str,
    /// 解释器或可执行文件
    pub program: String,
    /// 位置参数，第一个通常是脚本路径
    pub args: Vec<OsString>,
    /// stdout/stderr 重定向目标
    pub log_file: Option<PathBuf>,
}

impl Invocation {
    pub fn new(step: &'static str, program: impl Into<String>) -> Self {
        Self {
            step,
            program: program.into(),
            args: Vec::new(),
            log_file: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn log_to(mut self, path: impl AsRef<Path>) -> Self {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// 可复制到终端执行的命令行，仅用于显示
    pub fn command_line(&self) -> String {
        std::iter::once(shell_quote(&self.program))
            .chain(self.args.iter().map(|a| shell_quote(&a.to_string_lossy())))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// POSIX shell 单引号转义
fn shell_quote(s: &str) -> String {
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:=+,@%".contains(c));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

/// 阻塞执行一次调用
pub trait ScriptRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use crate::error::ExocError;

    /// 只记录调用，不启动进程
    #[derive(Default)]
    pub struct RecordingRunner {
        pub calls: Vec<Invocation>,
        /// 该步骤返回失败
        pub fail_step: Option<&'static str>,
    }

    impl ScriptRunner for RecordingRunner {
        fn run(&mut self, invocation: &Invocation) -> Result<()> {
            self.calls.push(invocation.clone());
            if self.fail_step == Some(invocation.step) {
                return Err(ExocError::CommandFailed {
                    command: invocation.command_line(),
                    code: "exit code 1".to_string(),
                    stderr: String::new(),
                });
            }
            Ok(())
        }
    }
}
