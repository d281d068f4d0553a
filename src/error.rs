// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// Unrecoverable failures of the include stack.
///
/// None of these can be handled by the parser, the top-level driver
/// is expected to report them and terminate, see `SourceError::exit`.
#[derive(Debug, PartialEq)]
pub enum SourceError {
    /// The file could not be opened.
    /// `file_name` is the name as written in the source (not the resolved path),
    /// `reason` is the text of the OS error.
    OpenFailed { file_name: String, reason: String },

    /// The include nesting limit (`MAX_INCLUDE_DEPTH`) has been reached.
    IncludesNestedTooDeeply,

    /// The file handle reported an error on close.
    CloseFailed { file_name: String, reason: String },

    /// The content of the current file could not be read.
    ReadFailed { file_name: String, reason: String },
}

impl SourceError {
    pub fn open_failed(file_name: &str, error: &std::io::Error) -> Self {
        SourceError::OpenFailed {
            file_name: file_name.to_owned(),
            reason: error.to_string(),
        }
    }

    pub fn close_failed(file_name: &str, error: &std::io::Error) -> Self {
        SourceError::CloseFailed {
            file_name: file_name.to_owned(),
            reason: error.to_string(),
        }
    }

    pub fn read_failed(file_name: &str, error: &std::io::Error) -> Self {
        SourceError::ReadFailed {
            file_name: file_name.to_owned(),
            reason: error.to_string(),
        }
    }

    /// Prints the error to stderr and terminates the process with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("FATAL ERROR: {}", self);
        std::process::exit(1)
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SourceError::OpenFailed { file_name, reason } => {
                write!(f, "Couldn't open \"{}\": {}", file_name, reason)
            }
            SourceError::IncludesNestedTooDeeply => f.write_str("Includes nested too deeply"),
            SourceError::CloseFailed { file_name, reason } => {
                write!(f, "Error closing \"{}\": {}", file_name, reason)
            }
            SourceError::ReadFailed { file_name, reason } => {
                write!(f, "Error reading \"{}\": {}", file_name, reason)
            }
        }
    }
}

impl std::error::Error for SourceError {}
