//! # 参数校验工具
//!
//! 路径、样本名与数值参数的通用校验函数。
//!
//! ## 依赖关系
//! - 被 `models/options.rs` 使用
//! - 使用 `regex` 校验样本名

use crate::error::{ExocError, Result};

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// 校验输入文件存在且为普通文件，返回绝对路径
pub fn require_file(path: &Path, flag: &str) -> Result<PathBuf> {
    if !path.exists() {
        return Err(ExocError::FileNotFound {
            path: format!("{} (--{})", path.display(), flag),
        });
    }
    if !path.is_file() {
        return Err(ExocError::NotAFile {
            path: format!("{} (--{})", path.display(), flag),
        });
    }

    fs::canonicalize(path).map_err(|_| ExocError::FileNotFound {
        path: path.display().to_string(),
    })
}

/// 准备输出目录
///
/// `create` 为 false 时（dry-run）只计算绝对路径，不触碰文件系统。
pub fn prepare_outdir(path: &Path, create: bool) -> Result<PathBuf> {
    if path.exists() && !path.is_dir() {
        return Err(ExocError::InvalidArgument(format!(
            "--outdir '{}' exists and is not a directory",
            path.display()
        )));
    }

    if !create {
        return absolutize(path);
    }

    fs::create_dir_all(path).map_err(|e| ExocError::DirectoryCreateError {
        path: path.display().to_string(),
        source: e,
    })?;

    fs::canonicalize(path).map_err(|e| ExocError::DirectoryCreateError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 相对路径基于当前工作目录展开
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(|e| ExocError::InvalidArgument(format!(
        "cannot resolve '{}': {}",
        path.display(),
        e
    )))?;
    Ok(cwd.join(path))
}

/// 样本名会被脚本拼进输出文件名
pub fn check_sample_name(name: &str) -> Result<()> {
    let pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap();
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(ExocError::InvalidArgument(format!(
            "--name '{}' must start with a letter or digit and contain only letters, digits, '.', '_' or '-'",
            name
        )))
    }
}

/// bin 大小必须为正
pub fn check_binsize(binsize: u64) -> Result<()> {
    if binsize == 0 {
        return Err(ExocError::InvalidArgument(
            "--binsize must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// 阈值必须为有限正数
pub fn check_threshold(value: f64, flag: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ExocError::InvalidArgument(format!(
            "--{} must be a positive number, got {}",
            flag, value
        )));
    }
    Ok(())
}
