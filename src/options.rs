use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_SELECTOR: &str = "table.wikitable";

/// Which of the matched tables to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSelection {
    All,
    Index(usize),
}

impl TableSelection {
    /// Interprets the `-n` flag: any negative value selects every table.
    #[must_use]
    pub fn from_flag(value: i64) -> Self {
        usize::try_from(value).map_or(Self::All, Self::Index)
    }
}

/// Where CSV output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Files(PathBuf),
}

impl OutputTarget {
    /// Interprets the `-o` flag: an empty base path means standard output.
    #[must_use]
    pub fn from_flag(value: &str) -> Self {
        if value.is_empty() {
            Self::Stdout
        } else {
            Self::Files(PathBuf::from(value))
        }
    }
}

/// `<base>.csv`, used when exactly one table is written.
#[must_use]
pub fn single_file_path(base: &Path) -> PathBuf {
    with_suffix(base, ".csv")
}

/// `<base>_<index>.csv`, used when several tables are written.
#[must_use]
pub fn indexed_file_path(base: &Path, index: usize) -> PathBuf {
    with_suffix(base, &format!("_{index}.csv"))
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrabOptions {
    pub selector: String,
    pub table: TableSelection,
    pub output: OutputTarget,
}

impl Default for GrabOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            table: TableSelection::All,
            output: OutputTarget::Stdout,
        }
    }
}
