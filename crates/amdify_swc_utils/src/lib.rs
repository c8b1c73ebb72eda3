use swc_core::ecma::{ast, atoms::JsWord};

pub trait ModuleExportNameExt {
  /// `foo` for `foo` and `"foo-bar"` for `"foo-bar"`.
  fn name(&self) -> &JsWord;

  fn as_ident(&self) -> Option<&ast::Ident>;
}

impl ModuleExportNameExt for ast::ModuleExportName {
  fn name(&self) -> &JsWord {
    match self {
      ast::ModuleExportName::Ident(ident) => &ident.sym,
      ast::ModuleExportName::Str(str) => &str.value,
    }
  }

  fn as_ident(&self) -> Option<&ast::Ident> {
    match self {
      ast::ModuleExportName::Ident(ident) => Some(ident),
      ast::ModuleExportName::Str(_) => None,
    }
  }
}

pub trait ImportNamedSpecifierExt {
  /// `a` for both `import { a }` and `import { a as b }`.
  fn imported_name(&self) -> &JsWord;
}

impl ImportNamedSpecifierExt for ast::ImportNamedSpecifier {
  fn imported_name(&self) -> &JsWord {
    match &self.imported {
      Some(imported) => imported.name(),
      None => &self.local.sym,
    }
  }
}

pub trait ExportNamedSpecifierExt {
  fn orig_name(&self) -> &JsWord;
  fn exported_as_name(&self) -> &JsWord;

  fn is_exported_as_default(&self) -> bool {
    &**self.exported_as_name() == "default"
  }
}

impl ExportNamedSpecifierExt for ast::ExportNamedSpecifier {
  fn orig_name(&self) -> &JsWord {
    self.orig.name()
  }

  fn exported_as_name(&self) -> &JsWord {
    match &self.exported {
      Some(exported) => exported.name(),
      None => self.orig.name(),
    }
  }
}

pub trait ModuleItemExt {
  /// `"use strict";` and other string literal statements of the directive prologue.
  fn is_directive(&self) -> bool;
}

impl ModuleItemExt for ast::ModuleItem {
  fn is_directive(&self) -> bool {
    matches!(
      self,
      ast::ModuleItem::Stmt(ast::Stmt::Expr(ast::ExprStmt { expr, .. }))
        if matches!(expr.as_ref(), ast::Expr::Lit(ast::Lit::Str(_)))
    )
  }
}
