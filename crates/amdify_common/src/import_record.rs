use swc_core::ecma::{ast, atoms::JsWord};

/// One import source of the module and how the factory function receives it.
///
/// Records are collected in source order and consumed once, when the
/// `define(...)` call is built.
#[derive(Debug, Clone)]
pub struct ImportRecord {
  pub source: ast::Str,
  pub binding: ImportBinding,
}

impl ImportRecord {
  pub fn new(source: ast::Str, binding: ImportBinding) -> Self {
    Self { source, binding }
  }

  /// `import 'src'`
  pub fn anonymous(source: ast::Str) -> Self {
    Self::new(source, ImportBinding::None)
  }

  pub fn source_value(&self) -> &JsWord {
    &self.source.value
  }
}

#[derive(Debug, Clone)]
pub enum ImportBinding {
  /// `import foo from 'src'`. The local name is the factory parameter.
  Default(ast::Ident),
  /// `import { a, b as c } from 'src'`. `namespace` is a generated parameter,
  /// every member is read off it at the top of the factory body.
  Named {
    namespace: ast::Ident,
    members: Vec<NamedImport>,
  },
  /// `import 'src'`. Loaded for side effects only.
  None,
}

/// For `import { foo as foo2 } from './foo'`.
/// `foo` is `imported` and `foo2` is `local`.
#[derive(Debug, Clone)]
pub struct NamedImport {
  pub imported: JsWord,
  pub local: ast::Ident,
}
