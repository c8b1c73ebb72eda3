use std::{fmt::Display, path::Path, sync::Arc};

use swc_core::common::{FileName, SourceFile};

use crate::{PathExt, StaticStr, CWD};

pub mod error_code;

#[derive(Debug)]
pub enum ErrorKind {
  // --- Module syntax
  /// An import or export shape that has no `define(...)` rewrite, such as
  /// `import * as ns from 'src'` or `export * from 'src'`.
  UnsupportedSpecifierShape {
    shape: StaticStr,
    source: Option<StaticStr>,
  },
  /// More than one statement tries to establish the default export.
  MultipleDefaultExports,

  // --- Surroundings
  ParseJsFailed {
    source_file: Arc<SourceFile>,
    source: swc_core::ecma::parser::error::Error,
  },

  /// Unrecoverable failures outside of the transform itself, e.g. the printer
  /// failing to write. Built from any `anyhow::Error`.
  Panic {
    source: anyhow::Error,
  },

  IoError(std::io::Error),
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::UnsupportedSpecifierShape { shape, source: Some(source) } => {
        write!(f, r#"Unsupported specifier shape in "{source}": {shape}."#)
      }
      ErrorKind::UnsupportedSpecifierShape { shape, source: None } => {
        write!(f, "Unsupported specifier shape: {shape}.")
      }
      ErrorKind::MultipleDefaultExports => write!(f, "A module cannot have multiple default exports."),
      ErrorKind::ParseJsFailed { source_file, source } => {
        let name = match &source_file.name {
          FileName::Real(path) => path.may_display_relative().into_owned(),
          other => other.to_string(),
        };
        write!(f, "Parse failed: {name}: {}", source.kind().msg())
      }
      ErrorKind::Panic { source } => source.fmt(f),
      ErrorKind::IoError(e) => e.fmt(f),
    }
  }
}

impl ErrorKind {
  /// Shorten the file paths in messages by make them relative to CWD.
  pub fn to_readable_string(&self, cwd: impl AsRef<Path>) -> String {
    let cwd = cwd.as_ref().to_path_buf();
    CWD.set(&cwd, || self.to_string())
  }

  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::UnsupportedSpecifierShape { .. } => error_code::UNSUPPORTED_SPECIFIER_SHAPE,
      ErrorKind::MultipleDefaultExports => error_code::MULTIPLE_DEFAULT_EXPORTS,
      ErrorKind::ParseJsFailed { .. } => error_code::PARSE_ERROR,
      ErrorKind::Panic { .. } => error_code::PANIC,
      ErrorKind::IoError(_) => error_code::IO_ERROR,
    }
  }

  pub fn is_unsupported_specifier_shape(&self) -> bool {
    matches!(self, ErrorKind::UnsupportedSpecifierShape { .. })
  }
}
