// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{io::Read, path::Path};

/// Access to the files read by the include stack.
///
/// The include stack never touches the file system directly, every open
/// and close goes through a provider. This allows the stack to run against
/// the real file system (`NativeFileProvider`) or an in-memory one
/// (`MemoryFileProvider`, used in unit tests).
pub trait FileProvider {
    /// Opens the file at the given path for reading.
    /// Returns an `std::io::Error` if the file can not be opened.
    fn open_file(&self, file_path: &Path) -> Result<Box<dyn Read>, std::io::Error>;

    /// Opens the standard input stream.
    ///
    /// This is used for the file name `-`, no path resolution
    /// is performed for it.
    fn open_stdin(&self) -> Result<Box<dyn Read>, std::io::Error>;

    /// Closes a reader previously returned by `open_file` or `open_stdin`.
    ///
    /// The default implementation simply drops the reader.
    fn close_file(&self, file_name: &str, reader: Box<dyn Read>) -> Result<(), std::io::Error> {
        let _ = file_name;
        drop(reader);
        Ok(())
    }
}

/// Joins an include file name onto a directory using `/`.
///
/// No normalization of `.` and `..` is performed, the result is
/// the plain concatenation, e.g. `"/a/b"` + `"c/d.dtsi"` -> `"/a/b/c/d.dtsi"`.
pub fn join_path(directory: &str, file_name: &str) -> String {
    if directory.ends_with('/') {
        format!("{}{}", directory, file_name)
    } else {
        format!("{}/{}", directory, file_name)
    }
}

/// Returns everything before the last `/` of the given path,
/// or `None` if the path has no `/` at all.
///
/// e.g.
/// - `"/a/b/c.dts"` -> `Some("/a/b")`
/// - `"/c.dts"` -> `Some("/")`
/// - `"c.dts"` -> `None`
pub fn directory_name(path: &str) -> Option<&str> {
    match path.rfind('/') {
        Some(0) => Some("/"),
        Some(index) => Some(&path[..index]),
        None => None,
    }
}
