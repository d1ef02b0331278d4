//! # 子命令参数集合
//!
//! 校验通过的参数集合，只能经由 `validate` 构造，构造后不可变。
//! 命令模块只接受这些类型，保证未经校验的参数不会到达外部脚本。
//!
//! ## 依赖关系
//! - 使用 `cli/` 定义的原始参数
//! - 使用 `utils/validate.rs`
//! - 被 `commands/` 使用

use crate::cli::cnv::CnvArgs;
use crate::cli::stat::StatArgs;
use crate::cli::trans::TransArgs;
use crate::error::Result;
use crate::models::params::{ParamRow, RunParams};
use crate::utils::validate;

use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────
// stat
// ─────────────────────────────────────────────────────────────

/// stat 参数
#[derive(Debug, Clone, PartialEq)]
pub struct StatOptions {
    sam: PathBuf,
    outdir: PathBuf,
    name: String,
}

impl StatOptions {
    /// 校验 stat 参数；`create_outdir` 为 false 时不创建输出目录
    pub fn validate(args: &StatArgs, create_outdir: bool) -> Result<Self> {
        validate::check_sample_name(&args.name)?;
        let sam = validate::require_file(&args.sam, "sam")?;
        let outdir = validate::prepare_outdir(&args.outdir, create_outdir)?;

        Ok(Self {
            sam,
            outdir,
            name: args.name.clone(),
        })
    }

    pub fn sam(&self) -> &Path {
        &self.sam
    }
}

impl RunParams for StatOptions {
    fn command(&self) -> &'static str {
        "stat"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn outdir(&self) -> &Path {
        &self.outdir
    }

    fn params(&self) -> Vec<ParamRow> {
        vec![
            ParamRow::new("sam", self.sam.display()),
            ParamRow::new("outdir", self.outdir.display()),
            ParamRow::new("name", &self.name),
        ]
    }
}

// ─────────────────────────────────────────────────────────────
// cnv
// ─────────────────────────────────────────────────────────────

/// cnv 参数
#[derive(Debug, Clone, PartialEq)]
pub struct CnvOptions {
    case: PathBuf,
    control: PathBuf,
    outdir: PathBuf,
    binsize: u64,
    name: String,
}

impl CnvOptions {
    pub fn validate(args: &CnvArgs, create_outdir: bool) -> Result<Self> {
        validate::check_sample_name(&args.name)?;
        validate::check_binsize(args.binsize)?;
        let case = validate::require_file(&args.case, "case")?;
        let control = validate::require_file(&args.control, "control")?;
        let outdir = validate::prepare_outdir(&args.outdir, create_outdir)?;

        Ok(Self {
            case,
            control,
            outdir,
            binsize: args.binsize,
            name: args.name.clone(),
        })
    }
}

impl RunParams for CnvOptions {
    fn command(&self) -> &'static str {
        "cnv"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn outdir(&self) -> &Path {
        &self.outdir
    }

    fn params(&self) -> Vec<ParamRow> {
        vec![
            ParamRow::new("case", self.case.display()),
            ParamRow::new("control", self.control.display()),
            ParamRow::new("outdir", self.outdir.display()),
            ParamRow::new("binsize", self.binsize),
            ParamRow::new("name", &self.name),
        ]
    }
}

// ─────────────────────────────────────────────────────────────
// trans
// ─────────────────────────────────────────────────────────────

/// trans 参数
#[derive(Debug, Clone, PartialEq)]
pub struct TransOptions {
    case: PathBuf,
    control: PathBuf,
    outdir: PathBuf,
    binsize: u64,
    name: String,
    thr_frame: f64,
}

impl TransOptions {
    pub fn validate(args: &TransArgs, create_outdir: bool) -> Result<Self> {
        validate::check_sample_name(&args.name)?;
        validate::check_binsize(args.binsize)?;
        validate::check_threshold(args.thr_frame, "thr_frame")?;
        let case = validate::require_file(&args.case, "case")?;
        let control = validate::require_file(&args.control, "control")?;
        let outdir = validate::prepare_outdir(&args.outdir, create_outdir)?;

        Ok(Self {
            case,
            control,
            outdir,
            binsize: args.binsize,
            name: args.name.clone(),
            thr_frame: args.thr_frame,
        })
    }

    pub fn case(&self) -> &Path {
        &self.case
    }

    pub fn control(&self) -> &Path {
        &self.control
    }

    pub fn binsize(&self) -> u64 {
        self.binsize
    }

    pub fn thr_frame(&self) -> f64 {
        self.thr_frame
    }
}

impl RunParams for TransOptions {
    fn command(&self) -> &'static str {
        "trans"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn outdir(&self) -> &Path {
        &self.outdir
    }

    fn params(&self) -> Vec<ParamRow> {
        vec![
            ParamRow::new("case", self.case.display()),
            ParamRow::new("control", self.control.display()),
            ParamRow::new("outdir", self.outdir.display()),
            ParamRow::new("binsize", self.binsize),
            ParamRow::new("name", &self.name),
            ParamRow::new("thr_frame", self.thr_frame),
        ]
    }
}
