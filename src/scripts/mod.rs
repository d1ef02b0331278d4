//! # 脚本资源定位
//!
//! 定位随 ExoC 分发的外部脚本。目录布局:
//!
//! ```text
//! <home>/
//!   └── ExoC/           (源码仓库)
//!         └── ExoC/     (包目录)
//!               ├── inter_trans.R
//!               ├── intra_trans.R
//!               └── scripts/
//!                     └── sam_to_valid_pairs.sh
//! ```
//!
//! `<home>` 同时作为 project root 传给 R 脚本，脚本据此拼出 `<home>/ExoC/ExoC/...`。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 无外部 crate 依赖

use crate::error::{ExocError, Result};

use std::path::{Path, PathBuf};

/// 资源目录，相对于 home
const RESOURCE_DIR: [&str; 2] = ["ExoC", "ExoC"];

/// 包目录 `<home>/ExoC/ExoC`
fn resource_dir(home: &Path) -> PathBuf {
    RESOURCE_DIR.iter().fold(home.to_path_buf(), |dir, part| dir.join(part))
}

/// 分发的外部脚本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// SAM -> valid pairs 转换
    SamToValidPairs,
    /// 染色体间易位检测
    InterTrans,
    /// 染色体内易位检测
    IntraTrans,
}

impl Script {
    /// 相对于资源目录的路径
    pub fn relative_path(&self) -> &'static str {
        match self {
            Script::SamToValidPairs => "scripts/sam_to_valid_pairs.sh",
            Script::InterTrans => "inter_trans.R",
            Script::IntraTrans => "intra_trans.R",
        }
    }

    /// 日志文件名使用的步骤名
    pub fn step(&self) -> &'static str {
        match self {
            Script::SamToValidPairs => "stat",
            Script::InterTrans => "inter_trans",
            Script::IntraTrans => "intra_trans",
        }
    }
}

/// 已解析的 ExoC 安装目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLocator {
    home: PathBuf,
}

impl ScriptLocator {
    /// 使用指定目录（--home / EXOC_HOME），不做布局检查
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// 解析 home 目录
    ///
    /// 顺序: 显式指定 -> 可执行文件的祖先目录 -> 当前目录及其父目录。
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(home) = explicit {
            let home = std::fs::canonicalize(home).map_err(|_| ExocError::HomeNotFound {
                searched: home.display().to_string(),
            })?;
            return Ok(Self::new(home));
        }

        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            candidates.extend(exe.ancestors().skip(1).map(Path::to_path_buf));
        }
        if let Ok(cwd) = std::env::current_dir() {
            candidates.extend(cwd.ancestors().take(2).map(Path::to_path_buf));
        }

        Self::find_in(&candidates)
    }

    /// 在候选目录中寻找包含完整资源布局的第一个
    pub fn find_in(candidates: &[PathBuf]) -> Result<Self> {
        candidates
            .iter()
            .find(|dir| Self::has_layout(dir))
            .map(|dir| Self::new(dir.clone()))
            .ok_or_else(|| ExocError::HomeNotFound {
                searched: candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    fn has_layout(dir: &Path) -> bool {
        let resources = resource_dir(dir);
        [Script::SamToValidPairs, Script::InterTrans, Script::IntraTrans]
            .iter()
            .all(|s| resources.join(s.relative_path()).is_file())
    }

    /// project root
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// 脚本路径，脚本不存在时报错
    pub fn locate(&self, script: Script) -> Result<PathBuf> {
        let path = resource_dir(&self.home).join(script.relative_path());
        if path.is_file() {
            Ok(path)
        } else {
            Err(ExocError::ScriptNotFound {
                path: path.display().to_string(),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;

    /// 创建一个包含全部脚本的 home 目录
    pub(crate) fn fake_home(root: &Path) -> PathBuf {
        let res = resource_dir(root);
        fs::create_dir_all(res.join("scripts")).unwrap();
        fs::write(res.join("scripts/sam_to_valid_pairs.sh"), "#!/bin/bash\n").unwrap();
        fs::write(res.join("inter_trans.R"), "args <- commandArgs(TRUE)\n").unwrap();
        fs::write(res.join("intra_trans.R"), "args <- commandArgs(TRUE)\n").unwrap();
        fs::canonicalize(root).unwrap()
    }

    #[test]
    fn test_locate_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let home = fake_home(dir.path());
        let locator = ScriptLocator::new(&home);

        let sh = locator.locate(Script::SamToValidPairs).unwrap();
        assert_eq!(sh, home.join("ExoC/ExoC/scripts/sam_to_valid_pairs.sh"));
        let inter = locator.locate(Script::InterTrans).unwrap();
        assert_eq!(inter, home.join("ExoC/ExoC/inter_trans.R"));
        assert_eq!(locator.home(), home.as_path());
    }

    #[test]
    fn test_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let home = fake_home(dir.path());
        fs::remove_file(home.join("ExoC/ExoC/intra_trans.R")).unwrap();

        let locator = ScriptLocator::new(&home);
        assert!(locator.locate(Script::InterTrans).is_ok());
        assert!(matches!(
            locator.locate(Script::IntraTrans),
            Err(ExocError::ScriptNotFound { .. })
        ));
    }

    #[test]
    fn test_find_in_picks_first_with_layout() {
        let empty = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let home = fake_home(dir.path());

        let found =
            ScriptLocator::find_in(&[empty.path().to_path_buf(), home.clone()]).unwrap();
        assert_eq!(found.home(), home.as_path());

        let err = ScriptLocator::find_in(&[empty.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, ExocError::HomeNotFound { .. }));
    }

    #[test]
    fn test_find_in_skips_partial_layout() {
        let partial = tempfile::tempdir().unwrap();
        let res = resource_dir(partial.path());
        fs::create_dir_all(&res).unwrap();
        fs::write(res.join("inter_trans.R"), "").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let home = fake_home(dir.path());

        let found =
            ScriptLocator::find_in(&[partial.path().to_path_buf(), home.clone()]).unwrap();
        assert_eq!(found.home(), home.as_path());
    }

    #[test]
    fn test_home_is_two_levels_above_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let home = fake_home(dir.path());
        let locator = ScriptLocator::new(&home);

        for script in [Script::SamToValidPairs, Script::InterTrans, Script::IntraTrans] {
            let path = locator.locate(script).unwrap();
            let pkg = path
                .ancestors()
                .find(|p| p.join("inter_trans.R").is_file())
                .unwrap();
            assert_eq!(pkg.parent().and_then(Path::parent), Some(home.as_path()));
        }
    }

    #[test]
    fn test_resolve_explicit_home() {
        let dir = tempfile::tempdir().unwrap();
        let home = fake_home(dir.path());

        let locator = ScriptLocator::resolve(Some(dir.path())).unwrap();
        assert_eq!(locator.home(), home.as_path());

        let missing = dir.path().join("nowhere");
        assert!(ScriptLocator::resolve(Some(&missing)).is_err());
    }
}
