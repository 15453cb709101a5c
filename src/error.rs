use std::fmt;

/// The result type for lookups against the lunar calendar.
pub type LunarResult<T> = Result<T, OutOfRange>;

/// A year or month value fell outside the span a lookup supports.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutOfRange {
  field: Field,
  value: i32,
  min: i32,
  max: i32,
}

/// The input that was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
  Year,
  Month,
}

impl OutOfRange {
  pub(crate) fn year(value: i32, min: i32, max: i32) -> Self {
    Self::reject(Field::Year, value, min, max)
  }

  pub(crate) fn month(value: u8) -> Self {
    Self::reject(Field::Month, value as i32, 1, 12)
  }

  fn reject(field: Field, value: i32, min: i32, max: i32) -> Self {
    #[cfg(feature = "log")]
    log::debug!(value = value, min = min, max = max; "Rejected {} outside supported range", field);
    Self { field, value, min, max }
  }

  /// Which input was out of range.
  pub const fn field(&self) -> Field {
    self.field
  }

  /// The rejected value.
  pub const fn value(&self) -> i32 {
    self.value
  }

  /// The inclusive bounds the value had to fall within.
  ///
  /// Label lookups have no upper bound; they report `i32::MAX`.
  pub const fn bounds(&self) -> (i32, i32) {
    (self.min, self.max)
  }
}

impl std::error::Error for OutOfRange {}

impl fmt::Display for OutOfRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.max {
      i32::MAX => {
        write!(f, "{} {} out of range (must be at least {})", self.field, self.value, self.min)
      },
      max => {
        write!(f, "{} {} out of range (must be {}..={})", self.field, self.value, self.min, max)
      },
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Year => "year",
      Self::Month => "month",
    })
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_display() {
    check!(
      OutOfRange::year(1899, 1900, 2049).to_string()
        == "year 1899 out of range (must be 1900..=2049)"
    );
    check!(OutOfRange::month(13).to_string() == "month 13 out of range (must be 1..=12)");
    check!(
      OutOfRange::year(3, 4, i32::MAX).to_string() == "year 3 out of range (must be at least 4)"
    );
  }

  #[test]
  fn test_accessors() {
    let err = OutOfRange::month(0);
    check!(err.field() == Field::Month);
    check!(err.value() == 0);
    check!(err.bounds() == (1, 12));
  }

  #[test]
  fn test_is_error() {
    fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
    assert_impl::<OutOfRange>();
  }

  #[cfg(feature = "log")]
  #[test]
  fn test_rejection_is_logged() {
    use std::sync::Mutex;

    use log::Level;
    use log::LevelFilter;
    use log::Log;
    use log::Metadata;
    use log::Record;

    static RECORDS: Mutex<Vec<(Level, String, Option<String>)>> = Mutex::new(Vec::new());

    struct CaptureLogger;

    impl Log for CaptureLogger {
      fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
      }

      fn log(&self, record: &Record<'_>) {
        let value = record.key_values().get("value".into()).map(|v| v.to_string());
        RECORDS.lock().unwrap().push((record.level(), record.args().to_string(), value));
      }

      fn flush(&self) {}
    }

    log::set_logger(&CaptureLogger).unwrap();
    log::set_max_level(LevelFilter::Debug);
    check!(crate::year_days(1776).is_err());
    let records = RECORDS.lock().unwrap();
    check!(records.iter().any(|(level, message, value)| {
      *level == Level::Debug
        && message == "Rejected year outside supported range"
        && value.as_deref() == Some("1776")
    }));
  }
}
