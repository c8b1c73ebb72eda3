use std::path::Path;

use amdify::{Loader, TransformOptions};
use serde::Deserialize;

#[macro_export]
macro_rules! impl_serde_default {
  ($name:ident) => {
    impl Default for $name {
      fn default() -> Self {
        serde_json::from_str("{}").unwrap()
      }
    }
  };
}

/// `test.config.json` of a fixture folder. A missing file means the fixture
/// is expected to transform to its `output.js`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestConfig {
  #[serde(default)]
  pub expected_error: Option<ExpectedError>,
  #[serde(default)]
  pub options: FixtureOptions,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpectedError {
  pub code: String,
  pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FixtureOptions {
  #[serde(default)]
  pub loader: Option<Loader>,
  #[serde(default)]
  pub preserve_comments: bool,
}

impl_serde_default!(TestConfig);
impl_serde_default!(FixtureOptions);

impl TestConfig {
  pub fn from_config_path(filepath: &Path) -> Self {
    let test_config: TestConfig =
      serde_json::from_str(&std::fs::read_to_string(filepath).unwrap_or_else(|_| "{}".to_string()))
        .unwrap();
    test_config
  }

  pub fn transform_options(&self, cwd: &Path) -> TransformOptions {
    TransformOptions {
      cwd: cwd.to_path_buf(),
      loader: self.options.loader,
      preserve_comments: self.options.preserve_comments,
    }
  }
}
