// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::rc::Rc;

use crate::file_provider::directory_name;

/// Display name of the standard input stream.
pub const STDIN_FILE_NAME: &str = "<stdin>";

/// A file which is (or was) on the include stack.
///
/// Records are shared through `Rc`, every `SourcePosition` taken while the
/// file was current holds one, so the record outlives the pop of its file.
/// The open handle is not part of the record, it belongs to the include stack
/// frame and is closed when the frame is popped.
#[derive(Debug, PartialEq)]
pub struct SourceFile {
    /// The resolved path of the file, or `<stdin>`.
    pub name: String,

    /// The directory part of `name`, used to resolve relative includes.
    /// `None` if `name` has no directory part.
    pub directory: Option<String>,

    /// The file that was current when this one was pushed.
    pub previous: Option<Rc<SourceFile>>,
}

impl SourceFile {
    pub fn new(name: &str, previous: Option<Rc<SourceFile>>) -> Self {
        Self {
            name: name.to_owned(),
            directory: directory_name(name).map(|directory| directory.to_owned()),
            previous,
        }
    }

    /// The name used in rendered positions, `-` is shown as `stdin`.
    pub fn display_name(&self) -> &str {
        if self.name == "-" { "stdin" } else { &self.name }
    }

    /// Iterates over the files that include this one,
    /// starting from the direct includer.
    pub fn includers(&self) -> Includers<'_> {
        Includers {
            next: self.previous.as_deref(),
        }
    }
}

pub struct Includers<'a> {
    next: Option<&'a SourceFile>,
}

impl<'a> Iterator for Includers<'a> {
    type Item = &'a SourceFile;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.previous.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::source_file::SourceFile;

    #[test]
    fn test_new_source_file() {
        let file = SourceFile::new("/boards/arm/evk.dts", None);
        assert_eq!(file.name, "/boards/arm/evk.dts");
        assert_eq!(file.directory.as_deref(), Some("/boards/arm"));
        assert!(file.previous.is_none());

        let file = SourceFile::new("evk.dts", None);
        assert_eq!(file.directory, None);

        let file = SourceFile::new("<stdin>", None);
        assert_eq!(file.directory, None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(SourceFile::new("-", None).display_name(), "stdin");
        assert_eq!(SourceFile::new("<stdin>", None).display_name(), "<stdin>");
        assert_eq!(SourceFile::new("a/b.dts", None).display_name(), "a/b.dts");
    }

    #[test]
    fn test_includers() {
        let top = Rc::new(SourceFile::new("boards/evk.dts", None));
        let middle = Rc::new(SourceFile::new("boards/soc.dtsi", Some(Rc::clone(&top))));
        let bottom = SourceFile::new("boards/pins.dtsi", Some(Rc::clone(&middle)));

        let names = bottom
            .includers()
            .map(|file| file.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["boards/soc.dtsi", "boards/evk.dts"]);

        assert_eq!(top.includers().count(), 0);
    }
}
