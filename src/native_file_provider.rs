// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::file_provider::FileProvider;

/// A `FileProvider` backed by the real file system and the process stdin.
pub struct NativeFileProvider;

impl NativeFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for NativeFileProvider {
    fn open_file(&self, file_path: &Path) -> Result<Box<dyn Read>, std::io::Error> {
        let file = File::open(file_path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn open_stdin(&self) -> Result<Box<dyn Read>, std::io::Error> {
        Ok(Box::new(std::io::stdin()))
    }
}
