//! # trans 命令实现
//!
//! 依次调用 `inter_trans.R`（染色体间）和 `intra_trans.R`（染色体内）。
//!
//! ## 功能
//! - 两个脚本使用相同的位置参数，只有脚本路径不同
//! - 染色体间步骤失败时不再运行染色体内步骤
//!
//! ## 依赖关系
//! - 使用 `cli/trans.rs` 定义的参数
//! - 使用 `models/options.rs`, `scripts/`, `runner/`

use super::{record_run, with_log};
use crate::cli::trans::TransArgs;
use crate::cli::GlobalArgs;
use crate::error::Result;
use crate::models::{RunParams, TransOptions};
use crate::runner::{Invocation, ScriptRunner};
use crate::scripts::{Script, ScriptLocator};
use crate::utils::output;

use std::path::Path;

/// 按执行顺序排列的检测步骤
const STEPS: [Script; 2] = [Script::InterTrans, Script::IntraTrans];

/// 执行 trans 命令
pub fn execute(args: &TransArgs, global: &GlobalArgs, runner: &mut dyn ScriptRunner) -> Result<()> {
    output::print_header("ExoC trans: translocation detection");

    let opts = TransOptions::validate(args, !global.dry_run)?;
    let locator = ScriptLocator::resolve(global.home.as_deref())?;

    run_trans(&opts, &locator, global, runner)
}

/// 运行两个检测脚本:
/// `<rscript> <script> <home> <outdir> <case> <control> <binsize> <name> <thr_frame>`
pub fn run_trans(
    opts: &TransOptions,
    locator: &ScriptLocator,
    global: &GlobalArgs,
    runner: &mut dyn ScriptRunner,
) -> Result<()> {
    // 先确认两个脚本都存在
    let scripts = STEPS
        .iter()
        .map(|s| locator.locate(*s).map(|path| (*s, path)))
        .collect::<Result<Vec<_>>>()?;

    record_run(opts, global)?;

    for (script, path) in &scripts {
        output::print_info(&format!("Step: {}", script.step()));
        let invocation = with_log(
            trans_invocation(*script, opts, locator.home(), path, &global.rscript),
            opts,
            global,
        );
        runner.run(&invocation)?;
        output::print_success(&format!("{} finished", script.step()));
    }

    output::print_done(&format!(
        "Done! Find your translocation results from {}",
        opts.outdir().display()
    ));

    Ok(())
}

fn trans_invocation(
    script: Script,
    opts: &TransOptions,
    home: &Path,
    script_path: &Path,
    rscript: &str,
) -> Invocation {
    Invocation::new(script.step(), rscript)
        .arg(script_path)
        .arg(home)
        .arg(opts.outdir())
        .arg(opts.case())
        .arg(opts.control())
        .arg(opts.binsize().to_string())
        .arg(opts.name())
        .arg(format_threshold(opts.thr_frame()))
}

/// 阈值总是带小数点，`3` 写作 `3.0`
fn format_threshold(value: f64) -> String {
    format!("{:?}", value)
}
