use std::fmt;

/// A label could not be parsed from a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
  target: &'static str,
  src: String,
  reason: Option<&'static str>,
}

impl ParseError {
  pub(crate) fn new(target: &'static str, src: &str, reason: Option<&'static str>) -> Self {
    Self { target, src: src.into(), reason }
  }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Parse error attempting to parse {} from {}{}",
      self.target,
      self.src,
      self.reason.map(|r| format!(": {}", r)).unwrap_or_default(),
    )
  }
}
