use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use amdify_compiler::Compiler;
use amdify_error::{Error, Result};
use amdify_swc_visitors::{is_modular, to_amd};
use swc_core::common::{
  comments::{Comments, SingleThreadedComments},
  SourceMap,
};
use tracing::instrument;

use crate::TransformOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
  pub code: String,
  /// `false` means the input had no `import`/`export` and `code` is the input
  /// as it was given.
  pub is_modular: bool,
}

/// Turns ES modules into AMD modules, one file at a time.
///
/// A `Transformer` can be shared between threads.
pub struct Transformer {
  options: TransformOptions,
  compiler: Compiler,
}

impl Transformer {
  pub fn new(options: TransformOptions) -> Self {
    Self::with_cm(options, Default::default())
  }

  pub fn with_cm(options: TransformOptions, cm: Arc<SourceMap>) -> Self {
    amdify_tracing::enable_tracing_on_demand();
    Self {
      options,
      compiler: Compiler::with_cm(cm),
    }
  }

  pub fn options(&self) -> &TransformOptions {
    &self.options
  }

  #[instrument(skip_all, fields(filename = %filename.as_ref().display()))]
  pub fn transform(&self, filename: impl AsRef<Path>, code: String) -> Result<TransformOutput> {
    let filename = filename.as_ref();
    let path = self.resolve(filename);
    let loader = self.options.loader_for(&path);
    let comments = self
      .options
      .preserve_comments
      .then(SingleThreadedComments::default);
    let comments = comments.as_ref().map(|c| c as &dyn Comments);

    let fm = self.compiler.create_source_file(path, code);
    let module = self.compiler.parse_with_comments(fm.clone(), loader, comments)?;

    if !is_modular(&module) {
      tracing::debug!("{} is not an ES module", filename.display());
      return Ok(TransformOutput {
        code: fm.src.to_string(),
        is_modular: false,
      });
    }

    let module =
      to_amd(module).map_err(|e| e.context(format!("Transforming {}", filename.display())))?;
    let code = self.compiler.print(&module, comments)?;
    Ok(TransformOutput {
      code,
      is_modular: true,
    })
  }

  pub fn transform_file(&self, path: impl AsRef<Path>) -> Result<TransformOutput> {
    let path = self.resolve(path.as_ref());
    let code = std::fs::read_to_string(&path)
      .map_err(|e| Error::io_error(e).context(format!("Reading {}", path.display())))?;
    self.transform(path, code)
  }

  fn resolve(&self, filename: &Path) -> PathBuf {
    self.options.cwd.join(filename)
  }
}
