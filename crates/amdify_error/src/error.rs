use std::{fmt::Display, sync::Arc};

use swc_core::common::SourceFile;

use crate::{ErrorKind, StaticStr};

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  pub kind: ErrorKind,
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.kind.to_string().eq(&other.kind.to_string())
  }
}

impl Eq for Error {}

impl PartialOrd for Error {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Error {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.kind.to_string().cmp(&other.kind.to_string())
  }
}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      kind,
    }
  }

  pub fn context(mut self, context: String) -> Self {
    self.contexts.push(context);
    self
  }

  pub fn contexts(&self) -> &[String] {
    &self.contexts
  }

  // --- Unsupported module syntax

  pub fn unsupported_specifier_shape(
    shape: impl Into<StaticStr>,
    source: Option<impl Into<StaticStr>>,
  ) -> Self {
    Self::with_kind(ErrorKind::UnsupportedSpecifierShape {
      shape: shape.into(),
      source: source.map(Into::into),
    })
  }

  /// `import * as ns from 'src'`
  pub fn namespace_import(source: impl Into<StaticStr>) -> Self {
    Self::unsupported_specifier_shape("namespace imports are not supported", Some(source))
  }

  /// `import x, { a } from 'src'`
  pub fn mixed_default_and_named_import(source: impl Into<StaticStr>) -> Self {
    Self::unsupported_specifier_shape(
      "a default import cannot be combined with named imports in one statement",
      Some(source),
    )
  }

  /// `export { name as default } from 'src'`
  pub fn named_reexport_as_default(local: &str, source: impl Into<StaticStr>) -> Self {
    Self::unsupported_specifier_shape(
      format!("re-exporting the named member \"{local}\" as default is not supported"),
      Some(source),
    )
  }

  /// `export * from 'src'`
  pub fn export_all(source: impl Into<StaticStr>) -> Self {
    Self::unsupported_specifier_shape("`export *` is not supported", Some(source))
  }

  /// `export * as ns from 'src'`
  pub fn export_namespace(source: impl Into<StaticStr>) -> Self {
    Self::unsupported_specifier_shape("`export * as` is not supported", Some(source))
  }

  /// `export { "string name" as default }` without a source.
  pub fn string_local_as_default() -> Self {
    Self::unsupported_specifier_shape(
      "a string name cannot be exported as default without a source",
      None::<StaticStr>,
    )
  }

  /// `import x = require('src')`, `export = x` and `export as namespace x`.
  pub fn typescript_module_syntax(syntax: &'static str) -> Self {
    Self::unsupported_specifier_shape(format!("`{syntax}` is not supported"), None::<StaticStr>)
  }

  pub fn multiple_default_exports() -> Self {
    Self::with_kind(ErrorKind::MultipleDefaultExports)
  }

  // --- Surroundings

  pub fn parse_js_failed(
    fm: Arc<SourceFile>,
    source: swc_core::ecma::parser::error::Error,
  ) -> Self {
    Self::with_kind(ErrorKind::ParseJsFailed {
      source_file: fm,
      source,
    })
  }

  pub fn io_error(e: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::IoError(e))
  }

  pub fn panic(msg: String) -> Self {
    anyhow::format_err!(msg).into()
  }
}

impl std::convert::From<anyhow::Error> for Error {
  fn from(value: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::Panic { source: value })
  }
}

impl std::convert::From<std::io::Error> for Error {
  fn from(value: std::io::Error) -> Self {
    Self::io_error(value)
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::Panic { source, .. } => Some(source.as_ref()),
      ErrorKind::IoError(source) => Some(source),
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unsupported_shapes_share_one_code() {
    let errors = [
      Error::namespace_import("./a"),
      Error::mixed_default_and_named_import("./a"),
      Error::named_reexport_as_default("foo", "./a"),
      Error::export_all("./a"),
      Error::export_namespace("./a"),
      Error::string_local_as_default(),
      Error::typescript_module_syntax("export ="),
    ];
    for error in errors {
      assert!(error.kind.is_unsupported_specifier_shape());
      assert_eq!(error.kind.code(), "UNSUPPORTED_SPECIFIER_SHAPE");
    }
  }

  #[test]
  fn messages() {
    insta::assert_snapshot!(
      Error::named_reexport_as_default("foo", "./src").to_string(),
      @r###"Unsupported specifier shape in "./src": re-exporting the named member "foo" as default is not supported."###
    );
    insta::assert_snapshot!(
      Error::string_local_as_default().to_string(),
      @"Unsupported specifier shape: a string name cannot be exported as default without a source."
    );
    insta::assert_snapshot!(
      Error::multiple_default_exports().to_string(),
      @"A module cannot have multiple default exports."
    );
  }

  #[test]
  fn contexts_are_kept_in_order() {
    let error = Error::export_all("./a")
      .context("first".to_string())
      .context("second".to_string());
    assert_eq!(error.contexts(), ["first".to_string(), "second".to_string()]);
    assert_eq!(error.kind.code(), "UNSUPPORTED_SPECIFIER_SHAPE");
  }

  #[test]
  fn anyhow_errors_become_panics() {
    let error: Error = anyhow::format_err!("printer failed").into();
    assert_eq!(error.kind.code(), "PANIC");
    assert_eq!(error.kind.to_string(), "printer failed");
  }
}
