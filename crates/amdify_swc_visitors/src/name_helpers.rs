use once_cell::sync::Lazy;
use regex::Captures;

static ILLEGAL_CHARACTERS: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"[^\w$]").unwrap());

static LEADING_DASHES_OR_DIGITS: Lazy<regex::Regex> =
  Lazy::new(|| regex::Regex::new(r"^[-0-9]+").unwrap());

static CAPTURE_WORD_RE: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"-+(.)?").unwrap());

static LEADING_UNDERSCORES: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"^_+").unwrap());

static TRAILING_DIGITS: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"[0-9]+$").unwrap());

/// Turns an arbitrary string, usually an import source, into a camel cased
/// identifier. `./foo-bar.js` becomes `fooBarJs`.
pub fn make_legal(value: &str) -> String {
  let value = ILLEGAL_CHARACTERS.replace_all(value, "-");
  let value = LEADING_DASHES_OR_DIGITS.replace(&value, "");
  CAPTURE_WORD_RE
    .replace_all(&value, |caps: &Captures| {
      caps
        .get(1)
        .map(|c| c.as_str().to_uppercase())
        .unwrap_or_default()
    })
    .into_owned()
}

/// The stem of a generated name. Generated names are `_{stem}`, `_{stem}2`, ...
/// so leading underscores and trailing digits of the hint are dropped.
pub fn uid_stem(hint: &str) -> String {
  let legal = make_legal(hint);
  let legal = LEADING_UNDERSCORES.replace(&legal, "");
  TRAILING_DIGITS.replace(&legal, "").into_owned()
}
