//! Where classifier input comes from: an inline argument, a file, or stdin.
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::config::expand_path;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl ContentSource {
    /// Pick exactly one source, checked in priority order: inline text, file, stdin.
    /// An empty inline string counts as absent.
    pub fn select(inline: Option<String>, file: Option<&str>, stdin: bool) -> Option<Self> {
        if let Some(text) = inline.filter(|t| !t.is_empty()) {
            return Some(Self::Inline(text));
        }
        if let Some(path) = file.filter(|p| !p.is_empty()) {
            return Some(Self::File(expand_path(path)));
        }
        stdin.then_some(Self::Stdin)
    }

    /// Read the full text. Fails with [`Error::NoContent`] if it is blank.
    pub fn read(&self) -> Result<String> {
        let content = match self {
            Self::Inline(text) => text.clone(),
            Self::File(path) => read_file_content(path)?,
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        require_content(content)
    }
}

/// Read a file, falling back to a lossy decode for non-UTF-8 bytes.
pub fn read_file_content(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            Ok(String::from_utf8_lossy(&fs::read(path)?).to_string())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn require_content(content: String) -> Result<String> {
    if content.trim().is_empty() {
        Err(Error::NoContent)
    } else {
        Ok(content)
    }
}
