//! Literal block replacement for source files
//!
//! A patch is a pair of exact text blocks. Applying it rewrites every
//! occurrence of the old block with the new one; nothing is parsed and no
//! pattern syntax is involved.

pub mod dashboard;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub use dashboard::{DASHBOARD_PATCH, DEFAULT_TARGET};

/// Errors related to patching a file
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Block to replace not found in {path}")]
    NoMatch { path: PathBuf },
}

pub type PatchResult<T> = Result<T, PatchError>;

/// How to treat a file that does not contain the old block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatchMode {
    /// Leave the file alone and report zero replacements
    #[default]
    Lenient,
    /// Fail with [`PatchError::NoMatch`]
    Strict,
}

/// An exact-text substitution of one block for another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralPatch<'a> {
    pub old: &'a str,
    pub new: &'a str,
}

impl<'a> LiteralPatch<'a> {
    pub const fn new(old: &'a str, new: &'a str) -> Self {
        Self { old, new }
    }

    /// Returns the patched text and how many blocks were replaced.
    ///
    /// An empty old block never matches.
    pub fn apply(&self, content: &str) -> (String, usize) {
        if self.old.is_empty() {
            return (content.to_string(), 0);
        }

        let count = content.matches(self.old).count();
        if count == 0 {
            return (content.to_string(), 0);
        }

        (content.replace(self.old, self.new), count)
    }
}

/// Result of patching one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub replacements: usize,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Apply `patch` to the file at `path` in place.
///
/// The file is only rewritten when at least one block was replaced, so a
/// file that was already patched stays byte-for-byte identical.
pub fn patch_file(
    path: impl AsRef<Path>,
    patch: &LiteralPatch<'_>,
    mode: PatchMode,
) -> PatchResult<PatchOutcome> {
    let path = path.as_ref();
    let io_error = |source| PatchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(io_error)?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    let (patched, replacements) = patch.apply(&content);

    if replacements == 0 {
        if mode == PatchMode::Strict {
            return Err(PatchError::NoMatch {
                path: path.to_path_buf(),
            });
        }
        warn!("No matching block in {}, leaving it untouched", path.display());
        return Ok(PatchOutcome {
            path: path.to_path_buf(),
            replacements,
        });
    }

    fs::write(path, patched).map_err(io_error)?;
    info!("Replaced {} block(s) in {}", replacements, path.display());

    Ok(PatchOutcome {
        path: path.to_path_buf(),
        replacements,
    })
}
