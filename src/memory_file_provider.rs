// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    io::{Cursor, ErrorKind, Read},
    path::{Path, PathBuf},
};

use crate::file_provider::FileProvider;

/// A simple in-memory file provider that implements the `FileProvider` trait.
/// This provider is intended for testing only and does not interact with the real file system.
///
/// Paths are matched literally (no normalization), the same way the include stack
/// builds them, e.g. a file added as `/a/b/../c.dtsi` is only found by that exact path.
pub struct MemoryFileProvider {
    /// Maps file paths to their contents.
    file_content_map: HashMap<PathBuf, String>,

    /// The content served by `open_stdin`.
    stdin_content: Option<String>,

    /// Files whose close reports an error, keyed by the resolved name.
    failing_close_files: HashSet<String>,

    /// Every path passed to `open_file`, in order.
    opened_paths: RefCell<Vec<PathBuf>>,
}

impl MemoryFileProvider {
    pub fn new() -> Self {
        Self {
            file_content_map: HashMap::new(),
            stdin_content: None,
            failing_close_files: HashSet::new(),
            opened_paths: RefCell::new(Vec::new()),
        }
    }

    /// Adds a text file to the in-memory file provider.
    pub fn add_file(&mut self, file_path: &Path, content: &str) {
        self.file_content_map
            .insert(file_path.to_path_buf(), content.to_owned());
    }

    /// Sets the content of the standard input stream.
    /// Until it is set, opening stdin fails.
    pub fn set_stdin(&mut self, content: &str) {
        self.stdin_content = Some(content.to_owned());
    }

    /// Makes `close_file` fail for the file with the given resolved name.
    pub fn fail_on_close(&mut self, file_name: &str) {
        self.failing_close_files.insert(file_name.to_owned());
    }

    /// Returns the paths passed to `open_file` so far, including the failed ones.
    pub fn opened_paths(&self) -> Vec<PathBuf> {
        self.opened_paths.borrow().clone()
    }
}

impl Default for MemoryFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for MemoryFileProvider {
    fn open_file(&self, file_path: &Path) -> Result<Box<dyn Read>, std::io::Error> {
        self.opened_paths.borrow_mut().push(file_path.to_path_buf());

        match self.file_content_map.get(file_path) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            None => Err(std::io::Error::new(
                ErrorKind::NotFound,
                "No such file or directory",
            )),
        }
    }

    fn open_stdin(&self) -> Result<Box<dyn Read>, std::io::Error> {
        match &self.stdin_content {
            Some(content) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            None => Err(std::io::Error::new(
                ErrorKind::BrokenPipe,
                "Standard input is not available",
            )),
        }
    }

    fn close_file(&self, file_name: &str, reader: Box<dyn Read>) -> Result<(), std::io::Error> {
        drop(reader);

        if self.failing_close_files.contains(file_name) {
            Err(std::io::Error::other("Input/output error"))
        } else {
            Ok(())
        }
    }
}
