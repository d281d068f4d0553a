// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    io::Read,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{
    error::SourceError,
    file_provider::{FileProvider, join_path},
    source_file::{STDIN_FILE_NAME, SourceFile},
    source_position::SourcePosition,
};

/// The maximum include nesting.
/// It is the only protection against a file which (indirectly) includes itself.
pub const MAX_INCLUDE_DEPTH: usize = 100;

pub struct IncludeOptions {
    /// Directories to search for an include file when it is not found
    /// relative to the including file, tried in order.
    pub search_directories: Vec<PathBuf>,

    /// The maximum include nesting, `MAX_INCLUDE_DEPTH` by default.
    pub max_depth: usize,
}

impl IncludeOptions {
    pub fn new(search_directories: &[&Path]) -> Self {
        Self {
            search_directories: search_directories
                .iter()
                .map(|&p| PathBuf::from(p))
                .collect(),
            max_depth: MAX_INCLUDE_DEPTH,
        }
    }
}

impl Default for IncludeOptions {
    fn default() -> Self {
        Self::new(&[])
    }
}

/// A file opened by `IncludeStack::open_relative`.
pub struct OpenedFile {
    pub reader: Box<dyn Read>,

    /// The path the file was actually opened with, or `<stdin>`.
    pub resolved_name: String,
}

impl OpenedFile {
    pub fn new(reader: Box<dyn Read>, resolved_name: &str) -> Self {
        Self {
            reader,
            resolved_name: resolved_name.to_owned(),
        }
    }
}

/// An open file on the stack.
struct IncludeFrame {
    file: Rc<SourceFile>,
    reader: Box<dyn Read>,

    // the lexer cursor within this file, starting from 1:1
    line: usize,
    column: usize,
}

impl IncludeFrame {
    fn new(file: Rc<SourceFile>, reader: Box<dyn Read>) -> Self {
        Self {
            file,
            reader,
            line: 1,
            column: 1,
        }
    }
}

/// The stack of nested source files.
///
/// The lexer pushes a file when it starts reading it (the top-level file or
/// an include directive) and pops it at the end of the file. The top of the
/// stack is the current file, all reading and position stamping happens on it.
///
/// Popping a file closes its handle but the `SourceFile` record lives on
/// as long as any `SourcePosition` refers to it.
pub struct IncludeStack<'a, T>
where
    T: FileProvider,
{
    file_provider: &'a T,
    options: IncludeOptions,
    frames: Vec<IncludeFrame>,
}

impl<'a, T> IncludeStack<'a, T>
where
    T: FileProvider,
{
    pub fn new(file_provider: &'a T) -> Self {
        Self::with_options(file_provider, IncludeOptions::default())
    }

    pub fn with_options(file_provider: &'a T, options: IncludeOptions) -> Self {
        Self {
            file_provider,
            options,
            frames: Vec::new(),
        }
    }

    /// Opens a file relative to the directory of the current file.
    ///
    /// - `-` opens the standard input, its name is `<stdin>`.
    /// - An absolute name, or any name when there is no current file
    ///   (or the current file has no directory), is used unmodified.
    /// - Otherwise the name is joined onto the directory of the current file.
    ///
    /// If the file can not be opened there and the name is relative,
    /// the search directories are tried in order.
    ///
    /// The error names the file as given, not the resolved path.
    pub fn open_relative(&self, file_name: &str) -> Result<OpenedFile, SourceError> {
        if file_name == "-" {
            let reader = self
                .file_provider
                .open_stdin()
                .map_err(|error| SourceError::open_failed(file_name, &error))?;
            return Ok(OpenedFile::new(reader, STDIN_FILE_NAME));
        }

        let is_absolute = file_name.starts_with('/');

        let current_directory = self
            .current_file()
            .and_then(|file| file.directory.as_deref());

        let resolved_name = match current_directory {
            Some(directory) if !is_absolute => join_path(directory, file_name),
            _ => file_name.to_owned(),
        };

        let first_error = match self.file_provider.open_file(Path::new(&resolved_name)) {
            Ok(reader) => return Ok(OpenedFile::new(reader, &resolved_name)),
            Err(error) => error,
        };

        if !is_absolute {
            for directory in &self.options.search_directories {
                let candidate_name = join_path(&directory.to_string_lossy(), file_name);
                if let Ok(reader) = self.file_provider.open_file(Path::new(&candidate_name)) {
                    return Ok(OpenedFile::new(reader, &candidate_name));
                }
            }
        }

        Err(SourceError::open_failed(file_name, &first_error))
    }

    /// Opens a file and makes it the current file.
    ///
    /// Fails without opening anything if the nesting limit has been reached.
    pub fn push(&mut self, file_name: &str) -> Result<(), SourceError> {
        if self.frames.len() >= self.options.max_depth {
            return Err(SourceError::IncludesNestedTooDeeply);
        }

        let OpenedFile {
            reader,
            resolved_name,
        } = self.open_relative(file_name)?;

        let file = Rc::new(SourceFile::new(&resolved_name, self.current_file().cloned()));
        self.frames.push(IncludeFrame::new(file, reader));

        Ok(())
    }

    /// Closes the current file and restores the file that included it.
    ///
    /// Returns `true` if there is still a current file, i.e. the lexer should
    /// resume the including file, or `false` if the top-level file is done.
    ///
    /// # Panics
    ///
    /// Panics if there is no current file.
    pub fn pop(&mut self) -> Result<bool, SourceError> {
        let Some(frame) = self.frames.pop() else {
            panic!("pop without a current source file");
        };

        let IncludeFrame { file, reader, .. } = frame;

        self.file_provider
            .close_file(&file.name, reader)
            .map_err(|error| SourceError::close_failed(&file.name, &error))?;

        Ok(!self.frames.is_empty())
    }

    pub fn current_file(&self) -> Option<&Rc<SourceFile>> {
        self.frames.last().map(|frame| &frame.file)
    }

    /// The reader of the current file.
    pub fn current_reader(&mut self) -> Option<&mut dyn Read> {
        let frame = self.frames.last_mut()?;
        let reader: &mut dyn Read = frame.reader.as_mut();
        Some(reader)
    }

    /// Reads the remaining content of the current file.
    /// Returns an empty string if there is no current file.
    pub fn read_to_string(&mut self) -> Result<String, SourceError> {
        let mut content = String::new();

        if let Some(frame) = self.frames.last_mut() {
            frame
                .reader
                .read_to_string(&mut content)
                .map_err(|error| SourceError::read_failed(&frame.file.name, &error))?;
        }

        Ok(content)
    }

    /// Stamps a token which consists of `text` at the cursor of the current file,
    /// and moves the cursor past it.
    ///
    /// The returned position starts at the cursor and ends at the last
    /// character of `text`. Returns `SourcePosition::EMPTY` if there is no current file.
    pub fn position_for(&mut self, text: &str) -> SourcePosition {
        let Some(frame) = self.frames.last_mut() else {
            return SourcePosition::EMPTY;
        };

        let (first_line, first_column) = (frame.line, frame.column);
        let (mut last_line, mut last_column) = (frame.line, frame.column);

        for c in text.chars() {
            last_line = frame.line;
            last_column = frame.column;

            if c == '\n' {
                frame.line += 1;
                frame.column = 1;
            } else {
                frame.column += 1;
            }
        }

        SourcePosition::new(
            first_line,
            first_column,
            last_line,
            last_column,
            Some(Rc::clone(&frame.file)),
        )
    }

    /// The number of files on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
