use rustc_hash::FxHashSet as HashSet;
use swc_core::ecma::{
  ast,
  atoms::JsWord,
  utils::quote_ident,
  visit::{noop_visit_type, Visit, VisitWith},
};

use crate::uid_stem;

/// Hands out identifiers that appear nowhere in the module and were not
/// handed out before.
///
/// Every identifier of the module counts as used, bindings and references
/// alike, so a generated name can't shadow or be shadowed by anything.
#[derive(Debug, Default, Clone)]
pub struct UidGenerator {
  used_names: HashSet<JsWord>,
}

impl UidGenerator {
  pub fn from_module(module: &ast::Module) -> Self {
    let mut collector = UsedNamesCollector::default();
    module.visit_with(&mut collector);
    Self {
      used_names: collector.names,
    }
  }

  pub fn with_used_names(names: impl IntoIterator<Item = JsWord>) -> Self {
    Self {
      used_names: names.into_iter().collect(),
    }
  }

  pub fn is_used(&self, name: &str) -> bool {
    self.used_names.contains(&JsWord::from(name))
  }

  /// `hint` is made legal first, so `generate("./foo-bar")` gives `_fooBar`,
  /// then `_fooBar2`, `_fooBar3`, ...
  pub fn generate(&mut self, hint: &str) -> ast::Ident {
    let stem = uid_stem(hint);
    let mut i = 1;
    loop {
      let candidate: JsWord = if i > 1 {
        format!("_{stem}{i}").into()
      } else {
        format!("_{stem}").into()
      };
      if self.used_names.insert(candidate.clone()) {
        return quote_ident!(candidate);
      }
      i += 1;
    }
  }
}

#[derive(Default)]
struct UsedNamesCollector {
  names: HashSet<JsWord>,
}

impl Visit for UsedNamesCollector {
  noop_visit_type!();

  fn visit_ident(&mut self, ident: &ast::Ident) {
    self.names.insert(ident.sym.clone());
  }
}
