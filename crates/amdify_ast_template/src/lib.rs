use once_cell::sync::Lazy;
use swc_core::{
  common::DUMMY_SP,
  ecma::{
    ast,
    atoms::JsWord,
    utils::{quote_ident, quote_str},
  },
};

static IDENTIFIER_NAME: Lazy<regex::Regex> =
  Lazy::new(|| regex::Regex::new(r"^[\p{ID_Start}$_][\p{ID_Continue}$\x{200C}\x{200D}]*$").unwrap());

pub fn is_identifier_name(name: &str) -> bool {
  IDENTIFIER_NAME.is_match(name)
}

/// Builds
///
/// ```js
/// define([dependencies], function(params) {
///   body;
/// });
/// ```
///
/// `dependencies` and `params` correspond by position. Trailing dependencies
/// without a parameter are only loaded.
pub fn build_define_stmt(
  dependencies: Vec<ast::Str>,
  params: Vec<ast::Ident>,
  body: Vec<ast::Stmt>,
) -> ast::ModuleItem {
  use ast::*;
  debug_assert!(params.len() <= dependencies.len());

  let dependencies = Expr::Array(ArrayLit {
    span: DUMMY_SP,
    elems: dependencies
      .into_iter()
      .map(|dep| {
        Some(ExprOrSpread {
          spread: None,
          expr: Box::new(Expr::Lit(Lit::Str(dep))),
        })
      })
      .collect(),
  });

  let factory = Expr::Fn(FnExpr {
    ident: None,
    function: Box::new(Function {
      params: params
        .into_iter()
        .map(|id| Param {
          span: DUMMY_SP,
          decorators: vec![],
          pat: Pat::Ident(BindingIdent { id, type_ann: None }),
        })
        .collect(),
      decorators: vec![],
      span: DUMMY_SP,
      body: Some(BlockStmt {
        span: DUMMY_SP,
        stmts: body,
      }),
      is_generator: false,
      is_async: false,
      type_params: None,
      return_type: None,
    }),
  });

  ModuleItem::Stmt(Stmt::Expr(ExprStmt {
    span: DUMMY_SP,
    expr: Box::new(Expr::Call(CallExpr {
      span: DUMMY_SP,
      callee: Callee::Expr(Box::new(Expr::Ident(quote_ident!("define")))),
      args: vec![
        ExprOrSpread {
          spread: None,
          expr: Box::new(dependencies),
        },
        ExprOrSpread {
          spread: None,
          expr: Box::new(factory),
        },
      ],
      type_args: None,
    })),
  }))
}

/// `var name = init;`
pub fn build_var_stmt(name: ast::Ident, init: Box<ast::Expr>) -> ast::Stmt {
  use ast::*;
  Stmt::Decl(Decl::Var(Box::new(VarDecl {
    span: DUMMY_SP,
    kind: VarDeclKind::Var,
    declare: false,
    decls: vec![VarDeclarator {
      span: DUMMY_SP,
      name: Pat::Ident(BindingIdent {
        id: name,
        type_ann: None,
      }),
      init: Some(init),
      definite: false,
    }],
  })))
}

/// `var local = object.member;`, or `var local = object["member"];` when
/// `member` is not an identifier name.
pub fn build_member_binding_stmt(local: ast::Ident, object: ast::Ident, member: &JsWord) -> ast::Stmt {
  use ast::*;
  let prop = if is_identifier_name(member) {
    MemberProp::Ident(quote_ident!(member.clone()))
  } else {
    MemberProp::Computed(ComputedPropName {
      span: DUMMY_SP,
      expr: Box::new(Expr::Lit(Lit::Str(quote_str!(member.clone())))),
    })
  };
  build_var_stmt(
    local,
    Box::new(Expr::Member(MemberExpr {
      span: DUMMY_SP,
      obj: Box::new(Expr::Ident(object)),
      prop,
    })),
  )
}

/// `return arg;`
pub fn build_return_stmt(arg: Box<ast::Expr>) -> ast::Stmt {
  ast::Stmt::Return(ast::ReturnStmt {
    span: DUMMY_SP,
    arg: Some(arg),
  })
}

#[cfg(test)]
mod tests {
  use swc_core::ecma::ast::*;

  use super::*;

  #[test]
  fn identifier_names() {
    assert!(is_identifier_name("foo"));
    assert!(is_identifier_name("$foo_1"));
    assert!(is_identifier_name("default"));
    assert!(is_identifier_name("ünïcode"));
    assert!(!is_identifier_name("a-b"));
    assert!(!is_identifier_name("1a"));
    assert!(!is_identifier_name(""));
  }

  #[test]
  fn define_keeps_dependency_order() {
    let item = build_define_stmt(
      vec![quote_str!("a"), quote_str!("b"), quote_str!("c")],
      vec![quote_ident!("a"), quote_ident!("b")],
      vec![build_return_stmt(Box::new(Expr::Ident(quote_ident!("a"))))],
    );
    let ModuleItem::Stmt(Stmt::Expr(ExprStmt { expr, .. })) = item else {
      panic!("expected an expression statement");
    };
    let Expr::Call(CallExpr { callee: Callee::Expr(callee), args, .. }) = *expr else {
      panic!("expected a call");
    };
    assert!(matches!(callee.as_ref(), Expr::Ident(ident) if &*ident.sym == "define"));
    assert_eq!(args.len(), 2);

    let Expr::Array(ArrayLit { elems, .. }) = args[0].expr.as_ref() else {
      panic!("expected an array of dependencies");
    };
    let deps = elems
      .iter()
      .map(|elem| match elem.as_ref().map(|e| e.expr.as_ref()) {
        Some(Expr::Lit(Lit::Str(s))) => s.value.to_string(),
        _ => panic!("expected a string dependency"),
      })
      .collect::<Vec<_>>();
    assert_eq!(deps, ["a", "b", "c"]);

    let Expr::Fn(FnExpr { function, .. }) = args[1].expr.as_ref() else {
      panic!("expected a factory function");
    };
    let params = function
      .params
      .iter()
      .map(|p| match &p.pat {
        Pat::Ident(BindingIdent { id, .. }) => id.sym.to_string(),
        _ => panic!("expected an identifier parameter"),
      })
      .collect::<Vec<_>>();
    assert_eq!(params, ["a", "b"]);
    assert_eq!(function.body.as_ref().map(|b| b.stmts.len()), Some(1));
  }

  #[test]
  fn member_binding_uses_computed_access_for_non_identifiers() {
    let stmt = build_member_binding_stmt(quote_ident!("c"), quote_ident!("_m"), &"a-b".into());
    let Stmt::Decl(Decl::Var(var)) = stmt else {
      panic!("expected a var declaration");
    };
    assert_eq!(var.kind, VarDeclKind::Var);
    let init = var.decls[0].init.as_deref();
    assert!(matches!(
      init,
      Some(Expr::Member(MemberExpr { prop: MemberProp::Computed(_), .. }))
    ));

    let stmt = build_member_binding_stmt(quote_ident!("a"), quote_ident!("_m"), &"a".into());
    let Stmt::Decl(Decl::Var(var)) = stmt else {
      panic!("expected a var declaration");
    };
    assert!(matches!(
      var.decls[0].init.as_deref(),
      Some(Expr::Member(MemberExpr { prop: MemberProp::Ident(ident), .. })) if &*ident.sym == "a"
    ));
  }
}
