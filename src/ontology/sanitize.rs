/// Turns a free-text name into a PascalCase identifier fragment.
///
/// Only ASCII letters, digits and whitespace survive, every word gets an
/// upper-case first letter and the words are glued together. The rest of
/// each word is kept as written, so `sanitize_name` applied to its own
/// output gives the same identifier back. Returns `None` when nothing is
/// left to build an identifier from.
///
/// Distinct names may collide (`"Cost-Analysis"` and `"Cost Analysis"` both
/// give `CostAnalysis`), callers get no warning about it here.
pub fn sanitize_name(name: &str) -> Option<String> {
  let stripped: String = name
    .trim()
    .chars()
    .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
    .collect();
  let ident: String = stripped
    .split_whitespace()
    .map(capitalize)
    .collect();
  if ident.is_empty() {
    None
  }
  else {
    Some(ident)
  }
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    None => String::new(),
  }
}
