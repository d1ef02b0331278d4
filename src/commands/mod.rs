//! # 命令执行模块
//!
//! 将子命令分发到对应的处理函数。每个处理函数依次完成:
//! 参数校验 -> 脚本定位 -> 构造调用 -> 阻塞执行 -> 打印完成信息。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `scripts/`, `runner/`, `utils/`
//! - 子模块: stat, cnv, trans

pub mod cnv;
pub mod stat;
pub mod trans;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::error::Result;
use crate::models::RunParams;
use crate::runner::{DryRunner, Invocation, ProcessRunner, ScriptRunner};
use crate::utils::{output, record};

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let mut runner: Box<dyn ScriptRunner> = if cli.global.dry_run {
        Box::new(DryRunner)
    } else {
        Box::new(ProcessRunner::new(!cli.global.no_log))
    };

    dispatch(cli.command, &cli.global, runner.as_mut())
}

/// 按子命令分发
pub fn dispatch(cmd: Commands, global: &GlobalArgs, runner: &mut dyn ScriptRunner) -> Result<()> {
    match cmd {
        Commands::Stat(args) => stat::execute(&args, global, runner),
        Commands::Cnv(args) => cnv::execute(&args, global),
        Commands::Trans(args) => trans::execute(&args, global, runner),
    }
}

/// 打印参数表，非 dry-run 时写出参数记录
fn record_run(run: &dyn RunParams, global: &GlobalArgs) -> Result<()> {
    record::print_params(run);
    if !global.dry_run {
        let path = record::write_params(run)?;
        output::print_info(&format!("Parameters recorded in {}", path.display()));
    }
    Ok(())
}

/// 需要时把输出重定向到 `<outdir>/logs/`
fn with_log(invocation: Invocation, run: &dyn RunParams, global: &GlobalArgs) -> Invocation {
    if global.dry_run || global.no_log {
        return invocation;
    }
    let log = record::log_path(run.outdir(), run.name(), invocation.step);
    invocation.log_to(log)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cli::cnv::CnvArgs;
    use crate::cli::stat::StatArgs;
    use crate::models::StatOptions;
    use crate::runner::recording::RecordingRunner;
    use std::fs;
    use std::path::Path;

    pub(crate) fn global(home: &Path) -> GlobalArgs {
        GlobalArgs {
            home: Some(home.to_path_buf()),
            rscript: "Rscript".to_string(),
            shell: "bash".to_string(),
            dry_run: false,
            no_log: false,
        }
    }

    #[test]
    fn test_cnv_spawns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let case = dir.path().join("case.tsv");
        let control = dir.path().join("control.tsv");
        fs::write(&case, "").unwrap();
        fs::write(&control, "").unwrap();

        let cmd = Commands::Cnv(CnvArgs {
            case,
            control,
            outdir: dir.path().join("out"),
            binsize: 1_000_000,
            name: "K562".to_string(),
        });

        // cnv 不需要脚本，home 不存在也应成功
        let mut runner = RecordingRunner::default();
        dispatch(cmd, &global(&dir.path().join("no_home")), &mut runner).unwrap();
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn test_with_log_respects_flags() {
        let dir = tempfile::tempdir().unwrap();
        let sam = dir.path().join("r.sam");
        fs::write(&sam, "").unwrap();
        let args = StatArgs {
            sam,
            outdir: dir.path().join("out"),
            name: "s1".to_string(),
        };
        let opts = StatOptions::validate(&args, true).unwrap();

        let mut g = global(dir.path());
        let inv = with_log(Invocation::new("stat", "bash"), &opts, &g);
        assert!(inv.log_file.unwrap().ends_with("out/logs/s1.stat.log"));

        g.no_log = true;
        let inv = with_log(Invocation::new("stat", "bash"), &opts, &g);
        assert!(inv.log_file.is_none());

        g.no_log = false;
        g.dry_run = true;
        let inv = with_log(Invocation::new("stat", "bash"), &opts, &g);
        assert!(inv.log_file.is_none());
    }
}
