//! Source and sink locators.
//!
//! A source is classified once, by a literal prefix test: anything starting
//! with `http` is a URL, everything else is a filesystem path. Strings such as
//! `httpfoo.txt` therefore count as URLs; the test is kept that naive on purpose.

use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix that marks a source locator as remote.
const REMOTE_PREFIX: &str = "http";

/// Where the payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    LocalPath(PathBuf),
    RemoteUrl(String),
}

impl SourceLocator {
    /// Classifies a raw locator string.
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with(REMOTE_PREFIX) {
            SourceLocator::RemoteUrl(raw.to_string())
        } else {
            SourceLocator::LocalPath(PathBuf::from(raw))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SourceLocator::RemoteUrl(_))
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocator::LocalPath(p) => write!(f, "{}", p.display()),
            SourceLocator::RemoteUrl(u) => f.write_str(u),
        }
    }
}

/// Where the payload goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SinkLocator {
    #[default]
    Stdout,
    File(PathBuf),
}

impl SinkLocator {
    /// `None` means standard output.
    pub fn from_option<P: AsRef<Path>>(out: Option<P>) -> Self {
        match out {
            Some(p) => SinkLocator::File(p.as_ref().to_path_buf()),
            None => SinkLocator::Stdout,
        }
    }
}

impl fmt::Display for SinkLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkLocator::Stdout => f.write_str("stdout"),
            SinkLocator::File(p) => write!(f, "{}", p.display()),
        }
    }
}
