// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    fmt::{Arguments, Display},
    io::Write,
};

use crate::source_position::SourcePosition;

/// A message about the input, tagged with the position it refers to.
///
/// Unlike `SourceError`, a diagnostic never stops the parsing by itself,
/// whether to continue after an error is up to the caller.
#[derive(Debug, PartialEq, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub position: SourcePosition,
    pub message: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

impl Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticLevel::Error => f.write_str("Error"),
            DiagnosticLevel::Warning => f.write_str("Warning"),
        }
    }
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, position: &SourcePosition, message: &str) -> Self {
        Self {
            level,
            position: position.clone(),
            message: message.to_owned(),
        }
    }
}

// e.g. `Error: boards/evk.dts 3:1-5 Duplicate label 'uart0'`
impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.level,
            self.position.render(),
            self.message
        )
    }
}

/// Writes a single diagnostic line, terminated by `\n`, to the given writer.
///
/// The whole line is assembled first and written with one call,
/// so lines of different diagnostics never interleave.
pub fn write_diagnostic(
    writer: &mut dyn Write,
    level: DiagnosticLevel,
    position: &SourcePosition,
    args: Arguments,
) -> Result<(), std::io::Error> {
    let diagnostic = Diagnostic::new(level, position, &args.to_string());
    let line = format!("{}\n", diagnostic);
    writer.write_all(line.as_bytes())?;
    writer.flush()
}

/// Reports an error about the input to stderr.
pub fn report_error(position: &SourcePosition, args: Arguments) {
    report(DiagnosticLevel::Error, position, args)
}

/// Reports a warning about the input to stderr.
pub fn report_warning(position: &SourcePosition, args: Arguments) {
    report(DiagnosticLevel::Warning, position, args)
}

fn report(level: DiagnosticLevel, position: &SourcePosition, args: Arguments) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();

    // there is nowhere left to report a failure of stderr itself
    let _ = write_diagnostic(&mut handle, level, position, args);
}

/// Reports an error with a `format!`-style message, e.g.
///
/// ```
/// use srcpos::{source_error, source_position::SourcePosition};
///
/// let position = SourcePosition::empty();
/// source_error!(&position, "Duplicate label '{}'", "uart0");
/// ```
#[macro_export]
macro_rules! source_error {
    ($position:expr, $($arg:tt)+) => {
        $crate::diagnostic::report_error($position, format_args!($($arg)+))
    };
}

/// Reports a warning with a `format!`-style message, e.g.
///
/// ```
/// use srcpos::{source_position::SourcePosition, source_warning};
///
/// let position = SourcePosition::empty();
/// source_warning!(&position, "Property '{}' is deprecated", "linux,phandle");
/// ```
#[macro_export]
macro_rules! source_warning {
    ($position:expr, $($arg:tt)+) => {
        $crate::diagnostic::report_warning($position, format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::{
        diagnostic::{Diagnostic, DiagnosticLevel, write_diagnostic},
        source_file::SourceFile,
        source_position::SourcePosition,
    };

    fn evk_position() -> SourcePosition {
        SourcePosition::new(
            3,
            1,
            3,
            5,
            Some(Rc::new(SourceFile::new("boards/evk.dts", None))),
        )
    }

    #[test]
    fn test_write_error() {
        let mut output: Vec<u8> = Vec::new();
        write_diagnostic(
            &mut output,
            DiagnosticLevel::Error,
            &evk_position(),
            format_args!("Duplicate label '{}'", "uart0"),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Error: boards/evk.dts 3:1-5 Duplicate label 'uart0'\n"
        );
    }

    #[test]
    fn test_write_warning() {
        let mut output: Vec<u8> = Vec::new();
        write_diagnostic(
            &mut output,
            DiagnosticLevel::Warning,
            &SourcePosition::EMPTY,
            format_args!("{} cells expected, found {}", 2, 1),
        )
        .unwrap();

        write_diagnostic(
            &mut output,
            DiagnosticLevel::Warning,
            &evk_position(),
            format_args!("Unit name has no reg property"),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\
Warning: <no-file> 0:0 2 cells expected, found 1
Warning: boards/evk.dts 3:1-5 Unit name has no reg property
"
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(
            DiagnosticLevel::Error,
            &evk_position(),
            "Reference to non-existent node",
        );
        assert_eq!(
            diagnostic.to_string(),
            "Error: boards/evk.dts 3:1-5 Reference to non-existent node"
        );
    }

    #[test]
    fn test_report_does_not_panic() {
        let position = evk_position();
        crate::source_error!(&position, "Label '{}' is not unique", "uart0");
        crate::source_warning!(&position, "Value out of range");
    }
}
