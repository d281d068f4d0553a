// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    fmt::{Display, Write},
    rc::Rc,
};

use crate::source_file::SourceFile;

/// Name shown for positions without a file.
pub const NO_FILE_NAME: &str = "<no-file>";

/// Returned by `SourcePosition::render` if the text can not be assembled.
pub const FALLBACK_POSITION_TEXT: &str = "<unknown source position>";

/// A span in a source file.
///
/// Lines and columns start from 1, the value 0 is only used by `SourcePosition::EMPTY`.
/// The last line and column are inclusive, i.e. they point to the last
/// character of the span.
///
/// Cloning a position yields an independent copy which shares the file record.
#[derive(Debug, PartialEq, Clone)]
pub struct SourcePosition {
    pub first_line: usize,
    pub first_column: usize,
    pub last_line: usize,
    pub last_column: usize,
    pub file: Option<Rc<SourceFile>>,
}

impl SourcePosition {
    /// The position for "no known location".
    pub const EMPTY: SourcePosition = SourcePosition {
        first_line: 0,
        first_column: 0,
        last_line: 0,
        last_column: 0,
        file: None,
    };

    pub fn new(
        first_line: usize,
        first_column: usize,
        last_line: usize,
        last_column: usize,
        file: Option<Rc<SourceFile>>,
    ) -> Self {
        Self {
            first_line,
            first_column,
            last_line,
            last_column,
            file,
        }
    }

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Merges two positions into one which starts at `left` and ends at `right`.
    /// The file is taken from `left`.
    pub fn combine(left: &Self, right: &Self) -> Self {
        Self {
            first_line: left.first_line,
            first_column: left.first_column,
            last_line: right.last_line,
            last_column: right.last_column,
            file: left.file.clone(),
        }
    }

    /// Renders the position as `"<file> <line>:<column>..."`.
    ///
    /// - `foo.dts 3:1` for a single point,
    /// - `foo.dts 3:1-5` for a range on one line,
    /// - `foo.dts 3:1 - 5:4` for a range over multiple lines.
    pub fn render(&self) -> String {
        let mut text = String::new();
        match write!(text, "{}", self) {
            Ok(_) => text,
            Err(_) => FALLBACK_POSITION_TEXT.to_owned(),
        }
    }

    /// Dumps every field on its own line, for debugging.
    pub fn dump(&self) -> String {
        let file_name = match &self.file {
            Some(file) => format!("\"{}\"", file.name),
            None => "<no file>".to_owned(),
        };

        format!(
            "file        : {}\n\
            first_line  : {}\n\
            first_column: {}\n\
            last_line   : {}\n\
            last_column : {}\n",
            file_name, self.first_line, self.first_column, self.last_line, self.last_column
        )
    }

    fn file_name(&self) -> &str {
        match &self.file {
            Some(file) => file.display_name(),
            None => NO_FILE_NAME,
        }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file_name = self.file_name();

        if self.first_line == self.last_line {
            if self.first_column == self.last_column {
                write!(f, "{} {}:{}", file_name, self.first_line, self.first_column)
            } else {
                write!(
                    f,
                    "{} {}:{}-{}",
                    file_name, self.first_line, self.first_column, self.last_column
                )
            }
        } else {
            write!(
                f,
                "{} {}:{} - {}:{}",
                file_name, self.first_line, self.first_column, self.last_line, self.last_column
            )
        }
    }
}

/// Renders an optional position, an absent position renders as `<no-file>`.
pub fn render_optional(position: Option<&SourcePosition>) -> String {
    match position {
        Some(position) => position.render(),
        None => NO_FILE_NAME.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::{
        source_file::SourceFile,
        source_position::{SourcePosition, render_optional},
    };

    fn foo_dts() -> Option<Rc<SourceFile>> {
        Some(Rc::new(SourceFile::new("foo.dts", None)))
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(SourcePosition::empty().render(), "<no-file> 0:0");
        assert_eq!(SourcePosition::EMPTY.to_string(), "<no-file> 0:0");
        assert_eq!(SourcePosition::default(), SourcePosition::EMPTY);
        assert!(SourcePosition::empty().is_empty());
    }

    #[test]
    fn test_render_point() {
        let position = SourcePosition::new(3, 1, 3, 1, foo_dts());
        assert_eq!(position.render(), "foo.dts 3:1");
        assert!(!position.is_empty());
    }

    #[test]
    fn test_render_same_line() {
        let position = SourcePosition::new(3, 1, 3, 5, foo_dts());
        assert_eq!(position.render(), "foo.dts 3:1-5");
    }

    #[test]
    fn test_render_multiple_lines() {
        let position = SourcePosition::new(3, 1, 5, 4, foo_dts());
        assert_eq!(position.render(), "foo.dts 3:1 - 5:4");

        // the multi-line form is used even if the columns are equal
        let position = SourcePosition::new(3, 7, 4, 7, foo_dts());
        assert_eq!(position.render(), "foo.dts 3:7 - 4:7");
    }

    #[test]
    fn test_render_file_name() {
        let stdin = Some(Rc::new(SourceFile::new("-", None)));
        assert_eq!(
            SourcePosition::new(1, 1, 1, 1, stdin).render(),
            "stdin 1:1"
        );

        let stdin = Some(Rc::new(SourceFile::new("<stdin>", None)));
        assert_eq!(
            SourcePosition::new(2, 3, 2, 9, stdin).render(),
            "<stdin> 2:3-9"
        );

        // a position with lines but without a file
        assert_eq!(
            SourcePosition::new(2, 3, 2, 3, None).render(),
            "<no-file> 2:3"
        );
    }

    #[test]
    fn test_render_optional() {
        assert_eq!(render_optional(None), "<no-file>");
        assert_eq!(
            render_optional(Some(&SourcePosition::new(3, 1, 3, 5, foo_dts()))),
            "foo.dts 3:1-5"
        );
    }

    #[test]
    fn test_render_large_numbers() {
        let position = SourcePosition::new(usize::MAX, usize::MAX, usize::MAX - 1, 0, foo_dts());
        let text = position.render();
        let (_, line_column) = text.split_once(' ').unwrap();
        assert!(line_column.len() < 100);
    }

    #[test]
    fn test_duplicate() {
        let position = SourcePosition::new(3, 1, 5, 4, foo_dts());
        let mut copied = position.clone();
        assert_eq!(copied, position);
        assert!(Rc::ptr_eq(
            copied.file.as_ref().unwrap(),
            position.file.as_ref().unwrap()
        ));

        copied.first_line = 10;
        copied.last_column = 20;
        copied.file = None;

        assert_eq!(position.first_line, 3);
        assert_eq!(position.last_column, 4);
        assert_eq!(position.render(), "foo.dts 3:1 - 5:4");
        assert_eq!(copied.render(), "<no-file> 10:1 - 5:20");
    }

    #[test]
    fn test_combine() {
        let file = foo_dts();
        let left = SourcePosition::new(3, 1, 3, 5, file.clone());
        let right = SourcePosition::new(5, 2, 5, 4, None);

        let combined = SourcePosition::combine(&left, &right);
        assert_eq!(combined, SourcePosition::new(3, 1, 5, 4, file));
        assert_eq!(combined.render(), "foo.dts 3:1 - 5:4");
    }

    #[test]
    fn test_dump() {
        let position = SourcePosition::new(3, 1, 5, 4, foo_dts());
        assert_eq!(
            position.dump(),
            "\
file        : \"foo.dts\"
first_line  : 3
first_column: 1
last_line   : 5
last_column : 4
"
        );

        assert_eq!(
            SourcePosition::EMPTY.dump(),
            "\
file        : <no file>
first_line  : 0
first_column: 0
last_line   : 0
last_column : 0
"
        );
    }
}
