use crate::LunarResult;
use crate::OutOfRange;
use crate::iter::MonthIterator;
use crate::sexagenary::StemBranch;
use crate::table::YearEncoding;
use crate::utils;
use crate::zodiac::Zodiac;

/// A lunar year known to be present in a [`LunarTable`](crate::LunarTable).
///
/// Lookups on a `LunarYear` cannot fail on account of the year; only month numbers are checked.
///
/// ## Examples
///
/// ```
/// use lunar::LunarTable;
///
/// let year = LunarTable::STANDARD.year(2023).unwrap();
/// assert_eq!(year.leap_month(), 2);
/// assert_eq!(year.months().count(), 13);
/// assert_eq!(year.sexagenary().to_string(), "癸卯");
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LunarYear {
  year: i32,
  encoding: YearEncoding,
}

impl LunarYear {
  pub(crate) const fn new(year: i32, encoding: YearEncoding) -> Self {
    Self { year, encoding }
  }

  /// The year number.
  #[inline]
  pub const fn year(&self) -> i32 {
    self.year
  }

  /// The packed table entry for this year.
  #[inline]
  pub const fn encoding(&self) -> YearEncoding {
    self.encoding
  }

  /// The ordinary month the leap month follows, or 0 for no leap month.
  #[inline]
  pub const fn leap_month(&self) -> u8 {
    self.encoding.leap_month()
  }

  /// The number of days in the leap month, or 0 for no leap month.
  #[inline]
  pub const fn leap_month_days(&self) -> u8 {
    self.encoding.leap_month_days()
  }

  /// The number of days in the given ordinary month (1-12).
  pub fn month_days(&self, month: u8) -> LunarResult<u8> {
    match (1..=12).contains(&month) {
      true => Ok(self.encoding.month_days(month)),
      false => Err(OutOfRange::month(month)),
    }
  }

  /// The total number of days in the year.
  #[inline]
  pub const fn year_days(&self) -> u16 {
    self.encoding.year_days()
  }

  /// The year's zodiac animal.
  pub const fn zodiac(&self) -> Zodiac {
    Zodiac::ALL[utils::zodiac_index(self.year)]
  }

  /// The year's name in the stem-branch cycle.
  pub const fn sexagenary(&self) -> StemBranch {
    StemBranch::from_index(utils::cycle_offset(self.year).rem_euclid(60) as u8)
  }

  /// The months of the year in calendar order, with the leap month following the ordinary month
  /// it repeats.
  pub fn months(&self) -> MonthIterator {
    MonthIterator::new(self.encoding)
  }
}
