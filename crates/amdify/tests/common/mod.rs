use std::path::{Path, PathBuf};

use amdify::{Loader, Transformer};
use amdify_compiler::Compiler;
use amdify_test_utils::TestConfig;

/// Both sides go through the same printer, then whitespace and quote style
/// are ignored.
fn normalize(code: &str) -> String {
  code
    .chars()
    .filter(|c| !c.is_whitespace())
    .map(|c| if c == '\'' { '"' } else { c })
    .collect()
}

fn reprint(path: &Path, code: String, loader: Loader) -> String {
  let compiler = Compiler::default();
  let fm = compiler.create_source_file(path.to_path_buf(), code);
  let module = compiler
    .parse(fm, loader)
    .unwrap_or_else(|e| panic!("{} is not valid JavaScript: {e}", path.display()));
  compiler.print(&module, None).unwrap()
}

pub fn run_test(input_path: &Path) {
  let fixture_path = input_path.parent().unwrap();
  let config = TestConfig::from_config_path(&fixture_path.join("test.config.json"));
  let transformer = Transformer::new(config.transform_options(fixture_path));
  let loader = config.options.loader.unwrap_or(Loader::Js);

  let result = transformer.transform_file(input_path);

  // If the test config has an expected error, assert that the error matches
  if let Some(expected_error) = config.expected_error {
    let error = result.expect_err("Expected error but got success");
    assert_eq!(error.kind.code(), expected_error.code);
    assert_eq!(
      error.kind.to_readable_string(fixture_path),
      expected_error.message
    );
    return;
  }

  // Otherwise, assert that the output matches `output.js`
  let output = result.unwrap_or_else(|e| panic!("{}: {e}", fixture_path.display()));
  let expected_path: PathBuf = fixture_path.join("output.js");
  let expected = std::fs::read_to_string(&expected_path)
    .unwrap_or_else(|_| panic!("missing {}", expected_path.display()));
  let expected = if output.is_modular {
    reprint(&expected_path, expected, loader)
  } else {
    expected
  };

  assert_eq!(
    normalize(&output.code),
    normalize(&expected),
    "\n--- actual ---\n{}\n--- expected ---\n{}",
    output.code,
    expected
  );
}
