// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

pub mod diagnostic;
pub mod error;
pub mod file_provider;
pub mod include_stack;
pub mod memory_file_provider;
pub mod native_file_provider;
pub mod source_file;
pub mod source_position;

pub use diagnostic::{report_error, report_warning};
pub use error::SourceError;
pub use include_stack::{IncludeOptions, IncludeStack, MAX_INCLUDE_DEPTH};
pub use source_file::SourceFile;
pub use source_position::SourcePosition;
