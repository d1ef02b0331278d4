//! # 子进程执行器
//!
//! 以阻塞方式启动外部脚本并检查退出状态。
//!
//! ## 功能
//! - 参数向量调用，不经过 shell
//! - stdout/stderr 可重定向到日志文件，运行期间显示 spinner
//! - 非零退出码转换为 `CommandFailed`，附带日志末尾内容
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 创建
//! - 使用 `utils/progress.rs` 创建 spinner, `utils/output.rs` 打印命令行

use super::{Invocation, ScriptRunner};
use crate::error::{ExocError, Result};
use crate::utils::{output, progress};

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// 失败时从日志中截取的行数
const LOG_TAIL_LINES: usize = 20;

/// 真实子进程执行器
#[derive(Debug)]
pub struct ProcessRunner {
    /// 是否显示 spinner
    show_progress: bool,
}

impl ProcessRunner {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    fn spawn_and_wait(&self, invocation: &Invocation) -> Result<ExitStatus> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).stdin(Stdio::null());

        if let Some(log_path) = &invocation.log_file {
            let (stdout, stderr) = open_log(log_path)?;
            command.stdout(stdout).stderr(stderr);
        }

        let spinner = (self.show_progress && invocation.log_file.is_some())
            .then(|| progress::create_spinner(&format!("Running {}", invocation.step)));

        let status = command.status();

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        status.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExocError::CommandNotFound {
                command: invocation.program.clone(),
            },
            _ => ExocError::CommandFailed {
                command: invocation.command_line(),
                code: "failed to start".to_string(),
                stderr: e.to_string(),
            },
        })
    }
}

impl ScriptRunner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        output::print_command(&invocation.command_line());
        if let Some(log_path) = &invocation.log_file {
            output::print_info(&format!("Logging to {}", log_path.display()));
        }

        let status = self.spawn_and_wait(invocation)?;
        if status.success() {
            return Ok(());
        }

        let code = match status.code() {
            Some(c) => format!("exit code {}", c),
            None => "terminated by signal".to_string(),
        };
        let stderr = match &invocation.log_file {
            Some(path) => format!("Last lines of {}:\n{}", path.display(), log_tail(path)),
            None => "See script output above.".to_string(),
        };

        Err(ExocError::CommandFailed {
            command: invocation.command_line(),
            code,
            stderr,
        })
    }
}

/// 打开日志文件，stdout 和 stderr 共用一个文件
fn open_log(path: &Path) -> Result<(File, File)> {
    let write_err = |e: io::Error| ExocError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ExocError::DirectoryCreateError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let stdout = File::create(path).map_err(write_err)?;
    let stderr = stdout.try_clone().map_err(write_err)?;
    Ok((stdout, stderr))
}

/// 日志最后若干行
fn log_tail(path: &Path) -> String {
    let Ok(file) = File::open(path) else {
        return String::new();
    };

    let mut tail: VecDeque<String> = VecDeque::with_capacity(LOG_TAIL_LINES + 1);
    for line in BufReader::new(file).lines().map_while(|l| l.ok()) {
        if tail.len() == LOG_TAIL_LINES {
            tail.pop_front();
        }
        tail.push_back(line);
    }
    Vec::from(tail).join("\n")
}
