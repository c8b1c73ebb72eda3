use std::{path::Path, str::FromStr};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
  Js,
  Jsx,
}

impl Loader {
  /// Unknown extensions are treated like JavaScript.
  pub fn from_path(p: &Path) -> Self {
    p.extension()
      .and_then(|ext| ext.to_str())
      .and_then(|ext| Loader::from_str(ext).ok())
      .unwrap_or(Loader::Js)
  }

  pub fn is_jsx(self) -> bool {
    self == Loader::Jsx
  }
}

impl FromStr for Loader {
  type Err = amdify_error::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "js" | "mjs" | "cjs" => Ok(Self::Js),
      "jsx" => Ok(Self::Jsx),
      _ => Err(amdify_error::Error::panic(format!(
        "Unknown loader value \"{}\"",
        s
      ))),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn loader_by_extension() {
    assert_eq!(Loader::from_path(&PathBuf::from("a/b.js")), Loader::Js);
    assert_eq!(Loader::from_path(&PathBuf::from("a/b.mjs")), Loader::Js);
    assert_eq!(Loader::from_path(&PathBuf::from("a/b.jsx")), Loader::Jsx);
    assert_eq!(Loader::from_path(&PathBuf::from("a/b.vue")), Loader::Js);
    assert_eq!(Loader::from_path(&PathBuf::from("a/b")), Loader::Js);
  }

  #[test]
  fn unknown_loader_value() {
    let err = Loader::from_str("ts").unwrap_err();
    assert_eq!(err.to_string(), r#"Unknown loader value "ts""#);
  }
}
