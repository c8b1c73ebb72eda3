use amdify_ast_template::{
  build_define_stmt, build_member_binding_stmt, build_return_stmt, build_var_stmt,
};
use amdify_common::{ImportBinding, ImportRecord, NamedImport};
use amdify_error::{Error, Result};
use amdify_swc_utils::{
  ExportNamedSpecifierExt, ImportNamedSpecifierExt, ModuleExportNameExt, ModuleItemExt,
};
use hashlink::LinkedHashMap;
use swc_core::ecma::{
  ast::{
    self, ClassDecl, ClassExpr, Decl, DefaultDecl, ExportSpecifier, Expr, FnDecl, FnExpr,
    ImportSpecifier, ModuleDecl, ModuleItem, Stmt,
  },
  atoms::JsWord,
  utils::var::VarCollector,
  visit::VisitWith,
};
use tracing::instrument;

use crate::UidGenerator;

/// Whether the module uses any `import` or `export` at the top level.
pub fn is_modular(module: &ast::Module) -> bool {
  module
    .body
    .iter()
    .any(|item| matches!(item, ModuleItem::ModuleDecl(_)))
}

/// Rewrites
///
/// ```js
/// import a from 'a';
/// import { b, c as d } from 'b';
/// import 'c';
/// export default a(b, d);
/// ```
///
/// into
///
/// ```js
/// define(['a', 'b', 'c'], function(a, _b) {
///   var b = _b.b;
///   var d = _b.c;
///   return a(b, d);
/// });
/// ```
///
/// Modules without `import`/`export` are returned as they are.
#[instrument(skip_all)]
pub fn to_amd(module: ast::Module) -> Result<ast::Module> {
  if !is_modular(&module) {
    tracing::trace!("no import or export found, module left untouched");
    return Ok(module);
  }
  let uid = UidGenerator::from_module(&module);
  AmdTransformer::new(uid).transform(module)
}

struct AmdTransformer {
  uid: UidGenerator,
  /// In source order. Re-exported defaults are recorded here as well.
  imports: Vec<ImportRecord>,
  default_export: Option<Box<Expr>>,
}

impl AmdTransformer {
  fn new(uid: UidGenerator) -> Self {
    Self {
      uid,
      imports: vec![],
      default_export: None,
    }
  }

  fn transform(mut self, mut module: ast::Module) -> Result<ast::Module> {
    let body = std::mem::take(&mut module.body);
    let last_index = body.len().saturating_sub(1);

    let mut directives = vec![];
    let mut stmts = Vec::with_capacity(body.len());
    let mut in_prologue = true;
    for (index, item) in body.into_iter().enumerate() {
      // The directive prologue stays in front of `define(...)`.
      in_prologue = in_prologue && item.is_directive();
      if in_prologue {
        directives.push(item);
        continue;
      }
      match item {
        ModuleItem::Stmt(stmt) => stmts.push(stmt),
        ModuleItem::ModuleDecl(decl) => {
          if let Some(stmt) = self.rewrite_module_decl(decl, index == last_index)? {
            stmts.push(stmt);
          }
        }
      }
    }

    if let Some(default_export) = self.default_export.take() {
      stmts.push(build_return_stmt(default_export));
    }

    module.body = directives;
    module.body.push(self.into_define_stmt(stmts));
    Ok(module)
  }

  fn rewrite_module_decl(&mut self, decl: ModuleDecl, is_last: bool) -> Result<Option<Stmt>> {
    match decl {
      ModuleDecl::Import(import) => {
        self.collect_import(import)?;
        Ok(None)
      }
      ModuleDecl::ExportDecl(export) => {
        tracing::warn!(
          "exported names {:?} have no AMD equivalent, only the declaration is kept",
          declared_names(&export.decl)
        );
        Ok(Some(Stmt::Decl(export.decl)))
      }
      ModuleDecl::ExportNamed(export) => {
        self.rewrite_named_export(export)?;
        Ok(None)
      }
      ModuleDecl::ExportDefaultDecl(export) => self.rewrite_default_decl(export.decl),
      ModuleDecl::ExportDefaultExpr(export) => self.rewrite_default_expr(export.expr, is_last),
      ModuleDecl::ExportAll(export) => Err(Error::export_all(export.src.value.to_string())),
      ModuleDecl::TsImportEquals(_) => Err(Error::typescript_module_syntax("import = require()")),
      ModuleDecl::TsExportAssignment(_) => Err(Error::typescript_module_syntax("export =")),
      ModuleDecl::TsNamespaceExport(_) => {
        Err(Error::typescript_module_syntax("export as namespace"))
      }
    }
  }

  fn collect_import(&mut self, import: ast::ImportDecl) -> Result<()> {
    let ast::ImportDecl {
      specifiers, src, ..
    } = import;
    let src = *src;

    let binding = match specifiers.as_slice() {
      // import 'src'
      [] => ImportBinding::None,
      // import foo from 'src'
      [ImportSpecifier::Default(default)] => ImportBinding::Default(default.local.clone()),
      // import { a, b as c } from 'src'
      _ => self.collect_named_import(specifiers, &src)?,
    };

    let record = ImportRecord::new(src, binding);
    tracing::trace!("import {:?} bound as {:?}", record.source_value(), record.binding);
    self.imports.push(record);
    Ok(())
  }

  fn collect_named_import(
    &mut self,
    specifiers: Vec<ImportSpecifier>,
    src: &ast::Str,
  ) -> Result<ImportBinding> {
    let mut members = Vec::with_capacity(specifiers.len());
    for specifier in specifiers {
      match specifier {
        ImportSpecifier::Named(named) => members.push(NamedImport {
          imported: named.imported_name().clone(),
          local: named.local,
        }),
        ImportSpecifier::Default(_) => {
          return Err(Error::mixed_default_and_named_import(src.value.to_string()))
        }
        ImportSpecifier::Namespace(_) => {
          return Err(Error::namespace_import(src.value.to_string()))
        }
      }
    }
    Ok(ImportBinding::Named {
      namespace: self.uid.generate(&src.value),
      members,
    })
  }

  fn rewrite_named_export(&mut self, export: ast::NamedExport) -> Result<()> {
    let ast::NamedExport {
      specifiers, src, ..
    } = export;
    let src = src.map(|src| *src);

    let mut is_bound = false;
    let mut dropped: Vec<JsWord> = vec![];
    for specifier in specifiers {
      match specifier {
        ExportSpecifier::Named(named) if named.is_exported_as_default() => match &src {
          // export { default } from 'src'
          // export { default as default } from 'src'
          Some(src) if &**named.orig_name() == "default" => {
            let namespace = self.uid.generate(&src.value);
            self.establish_default_export(Box::new(Expr::Ident(namespace.clone())))?;
            self
              .imports
              .push(ImportRecord::new(src.clone(), ImportBinding::Default(namespace)));
            is_bound = true;
          }
          // export { foo as default } from 'src'
          Some(src) => {
            return Err(Error::named_reexport_as_default(
              named.orig_name(),
              src.value.to_string(),
            ))
          }
          // export { foo as default }
          None => {
            let local = named
              .orig
              .as_ident()
              .ok_or_else(Error::string_local_as_default)?;
            self.establish_default_export(Box::new(Expr::Ident(local.clone())))?;
          }
        },
        // export foo from 'src'
        ExportSpecifier::Default(default) => {
          if let Some(src) = &src {
            self.imports.push(ImportRecord::new(
              src.clone(),
              ImportBinding::Default(default.exported.clone()),
            ));
            is_bound = true;
          }
          self.establish_default_export(Box::new(Expr::Ident(default.exported)))?;
        }
        // export * as ns from 'src'
        ExportSpecifier::Namespace(_) => {
          return Err(Error::export_namespace(
            src
              .as_ref()
              .map(|src| src.value.to_string())
              .unwrap_or_default(),
          ))
        }
        ExportSpecifier::Named(named) => dropped.push(named.exported_as_name().clone()),
      }
    }

    if !dropped.is_empty() {
      tracing::warn!(
        "exported names {:?} have no AMD equivalent and are dropped",
        dropped
      );
    }
    // The re-exporting module still has to be loaded.
    if let Some(src) = src.filter(|_| !is_bound) {
      self.imports.push(ImportRecord::anonymous(src));
    }
    Ok(())
  }

  fn rewrite_default_decl(&mut self, decl: DefaultDecl) -> Result<Option<Stmt>> {
    match decl {
      // export default function foo() {}
      DefaultDecl::Fn(FnExpr {
        ident: Some(ident),
        function,
      }) => {
        self.establish_default_export(Box::new(Expr::Ident(ident.clone())))?;
        Ok(Some(Stmt::Decl(Decl::Fn(FnDecl {
          ident,
          declare: false,
          function,
        }))))
      }
      // export default class Foo {}
      DefaultDecl::Class(ClassExpr {
        ident: Some(ident),
        class,
      }) => {
        self.establish_default_export(Box::new(Expr::Ident(ident.clone())))?;
        Ok(Some(Stmt::Decl(Decl::Class(ClassDecl {
          ident,
          declare: false,
          class,
        }))))
      }
      // export default function() {}
      DefaultDecl::Fn(fn_expr) => self
        .capture_default_export(Box::new(Expr::Fn(fn_expr)))
        .map(Some),
      // export default class {}
      DefaultDecl::Class(class_expr) => self
        .capture_default_export(Box::new(Expr::Class(class_expr)))
        .map(Some),
      DefaultDecl::TsInterfaceDecl(_) => {
        Err(Error::typescript_module_syntax("export default interface"))
      }
    }
  }

  fn rewrite_default_expr(&mut self, expr: Box<Expr>, is_last: bool) -> Result<Option<Stmt>> {
    if is_last {
      // Returned right where it was evaluated.
      self.establish_default_export(expr)?;
      Ok(None)
    } else {
      self.capture_default_export(expr).map(Some)
    }
  }

  /// `var _export_default = expr;`
  fn capture_default_export(&mut self, expr: Box<Expr>) -> Result<Stmt> {
    let name = self.uid.generate("export_default");
    self.establish_default_export(Box::new(Expr::Ident(name.clone())))?;
    Ok(build_var_stmt(name, expr))
  }

  fn establish_default_export(&mut self, expr: Box<Expr>) -> Result<()> {
    if self.default_export.is_some() {
      return Err(Error::multiple_default_exports());
    }
    self.default_export = Some(expr);
    Ok(())
  }

  fn into_define_stmt(self, body: Vec<Stmt>) -> ModuleItem {
    let mut dependencies = Vec::with_capacity(self.imports.len());
    let mut params = Vec::with_capacity(self.imports.len());
    let mut named_imports = vec![];
    let mut anonymous_sources = LinkedHashMap::<JsWord, ast::Str>::new();

    for record in self.imports {
      match record.binding {
        ImportBinding::Default(local) => {
          dependencies.push(record.source);
          params.push(local);
        }
        ImportBinding::Named { namespace, members } => {
          named_imports.extend(members.into_iter().map(|member| {
            build_member_binding_stmt(member.local, namespace.clone(), &member.imported)
          }));
          dependencies.push(record.source);
          params.push(namespace);
        }
        ImportBinding::None => {
          anonymous_sources
            .entry(record.source.value.clone())
            .or_insert(record.source);
        }
      }
    }
    dependencies.extend(anonymous_sources.into_iter().map(|(_, source)| source));

    tracing::debug!(
      "wrapping module in define() with {} dependencies and {} parameters",
      dependencies.len(),
      params.len()
    );

    named_imports.extend(body);
    build_define_stmt(dependencies, params, named_imports)
  }
}

fn declared_names(decl: &Decl) -> Vec<JsWord> {
  match decl {
    Decl::Fn(decl) => vec![decl.ident.sym.clone()],
    Decl::Class(decl) => vec![decl.ident.sym.clone()],
    Decl::Var(decl) => {
      let mut collected = vec![] as Vec<ast::Ident>;
      let mut collector = VarCollector { to: &mut collected };
      decl.visit_with(&mut collector);
      collected.into_iter().map(|ident| ident.sym).collect()
    }
    _ => vec![],
  }
}
