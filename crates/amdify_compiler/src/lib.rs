use std::{path::PathBuf, sync::Arc};

use amdify_common::Loader;
use amdify_error::{Error, Result};
use swc_core::{
  common::{comments::Comments, FileName, SourceFile, SourceMap},
  ecma::{
    ast::{self, EsVersion},
    codegen::{self as swc_ecma_codegen, text_writer::JsWriter},
    parser::{lexer::Lexer, EsConfig, Parser, StringInput, Syntax},
  },
};

#[derive(Default)]
pub struct Compiler {
  pub cm: Arc<SourceMap>,
}

impl Compiler {
  pub fn with_cm(cm: Arc<SourceMap>) -> Self {
    Self { cm }
  }

  pub fn create_source_file(&self, filename: PathBuf, code: String) -> Arc<SourceFile> {
    self.cm.new_source_file(FileName::Real(filename), code)
  }

  pub fn print(&self, ast: &ast::Module, comments: Option<&dyn Comments>) -> Result<String> {
    let mut output = Vec::new();

    let mut emitter = swc_ecma_codegen::Emitter {
      cfg: Default::default(),
      cm: self.cm.clone(),
      comments,
      wr: Box::new(JsWriter::new(self.cm.clone(), "\n", &mut output, None)),
    };

    emitter.emit_module(ast)?;
    String::from_utf8(output).map_err(|e| Error::panic(e.to_string()))
  }

  pub fn parse(&self, source_file: Arc<SourceFile>, loader: Loader) -> Result<ast::Module> {
    self.parse_with_comments(source_file, loader, None)
  }

  /// Input is always parsed as a module, so `import`/`export` are accepted
  /// anywhere at the top level.
  pub fn parse_with_comments(
    &self,
    source_file: Arc<SourceFile>,
    loader: Loader,
    comments: Option<&dyn Comments>,
  ) -> Result<ast::Module> {
    let lexer = Lexer::new(
      syntax_by_loader(loader),
      EsVersion::latest(),
      StringInput::from(source_file.as_ref()),
      comments,
    );
    let mut parser = Parser::new_from(lexer);
    let module = parser
      .parse_module()
      .map_err(|e| Error::parse_js_failed(source_file.clone(), e))?;
    // Recovered errors still mean the input is not valid JavaScript.
    if let Some(e) = parser.take_errors().into_iter().next() {
      return Err(Error::parse_js_failed(source_file, e));
    }
    Ok(module)
  }
}

/// `export v from 'mod'` is a proposal, but it has a `define(...)` rewrite,
/// so it is always enabled.
pub fn syntax_by_loader(loader: Loader) -> Syntax {
  Syntax::Es(EsConfig {
    jsx: loader.is_jsx(),
    export_default_from: true,
    ..Default::default()
  })
}

#[cfg(test)]
mod tests {
  use swc_core::common::comments::SingleThreadedComments;

  use super::*;

  #[test]
  fn parse_and_print() {
    let compiler = Compiler::default();
    let fm = compiler.create_source_file(
      PathBuf::from("input.js"),
      "import a from 'a';\nexport default a;\n".to_string(),
    );
    let module = compiler.parse(fm, Loader::Js).unwrap();
    assert_eq!(module.body.len(), 2);
    let code = compiler.print(&module, None).unwrap();
    assert!(code.contains("import a from 'a'") || code.contains("import a from \"a\""));
    assert!(code.contains("export default a;"));
  }

  #[test]
  fn export_default_from_is_enabled() {
    let compiler = Compiler::default();
    let fm = compiler.create_source_file(PathBuf::from("input.js"), "export v from 'mod';".to_string());
    let module = compiler.parse(fm, Loader::Js).unwrap();
    assert!(matches!(
      &module.body[0],
      ast::ModuleItem::ModuleDecl(ast::ModuleDecl::ExportNamed(named))
        if matches!(named.specifiers.as_slice(), [ast::ExportSpecifier::Default(_)])
    ));
  }

  #[test]
  fn jsx_depends_on_loader() {
    let compiler = Compiler::default();
    let code = "export default <div />;".to_string();
    let fm = compiler.create_source_file(PathBuf::from("input.jsx"), code.clone());
    assert!(compiler.parse(fm, Loader::Jsx).is_ok());

    let fm = compiler.create_source_file(PathBuf::from("input.js"), code);
    let err = compiler.parse(fm, Loader::Js).unwrap_err();
    assert_eq!(err.kind.code(), "PARSE_ERROR");
  }

  #[test]
  fn parse_errors_name_the_file() {
    let compiler = Compiler::default();
    let fm = compiler.create_source_file(PathBuf::from("broken.js"), "import { from 'a';".to_string());
    let err = compiler.parse(fm, Loader::Js).unwrap_err();
    assert_eq!(err.kind.code(), "PARSE_ERROR");
    assert!(err.to_string().starts_with("Parse failed: broken.js: "));
  }

  #[test]
  fn comments_are_printed_when_given() {
    let compiler = Compiler::default();
    let comments = SingleThreadedComments::default();
    let fm = compiler.create_source_file(
      PathBuf::from("input.js"),
      "// leading\nfoo();\n".to_string(),
    );
    let module = compiler
      .parse_with_comments(fm, Loader::Js, Some(&comments))
      .unwrap();
    assert!(compiler
      .print(&module, Some(&comments))
      .unwrap()
      .contains("// leading"));
    assert!(!compiler.print(&module, None).unwrap().contains("leading"));
  }
}
