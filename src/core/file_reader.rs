//! Strict text reading
//!
//! A file is either valid UTF-8 in full or it is not read at all. There is
//! no lossy fallback: a file that fails here is skipped by the caller.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::core::model::SkipCode;

/// Why a file could not be read as text
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

impl ReadError {
    pub fn skip_code(&self) -> SkipCode {
        match self {
            ReadError::Io(_) => SkipCode::FileUnreadable,
            ReadError::InvalidUtf8 { .. } => SkipCode::FileSkippedEncoding,
        }
    }
}

/// Read a whole file and decode it as UTF-8
pub fn read_utf8(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| ReadError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
