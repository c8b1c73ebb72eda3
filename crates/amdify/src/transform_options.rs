use std::path::PathBuf;

use amdify_common::Loader;
use derivative::Derivative;
use serde::Deserialize;

fn cwd_by_default() -> PathBuf {
  std::env::current_dir().unwrap_or_default()
}

fn true_by_default() -> bool {
  true
}

#[derive(Derivative, Deserialize, Clone)]
#[derivative(Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransformOptions {
  /// Relative file names are resolved against it. Paths in error messages are
  /// shown relative to it.
  #[derivative(Default(value = "cwd_by_default()"))]
  #[serde(default = "cwd_by_default")]
  pub cwd: PathBuf,
  /// Picked from the file extension when not set.
  #[serde(default)]
  pub loader: Option<Loader>,
  #[derivative(Default(value = "true"))]
  #[serde(default = "true_by_default")]
  pub preserve_comments: bool,
}

impl TransformOptions {
  pub fn loader_for(&self, path: &std::path::Path) -> Loader {
    self.loader.unwrap_or_else(|| Loader::from_path(path))
  }
}
