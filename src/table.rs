//! The packed lunar year table.
//!
//! Each year of the table is stored in 17 bits:
//!
//! | Bits    | Meaning                                                               |
//! |---------|-----------------------------------------------------------------------|
//! | 16      | Set if the leap month has 30 days (29 otherwise); unused with no leap |
//! | 15-4    | One flag per ordinary month, month 1 at bit 15: set for 30 days       |
//! | 3-0     | The ordinary month the leap month follows, or 0 for no leap month     |

use std::fmt;

use crate::LunarResult;
use crate::OutOfRange;
use crate::utils;
use crate::year::LunarYear;

const LEAP_LONG: u32 = 0x10000;
const LEAP_MONTH: u32 = 0xf;
const FIRST_MONTH: u32 = 0x8000;
const LAST_MONTH: u32 = 0x10;

/// Twelve months of 29 days.
const BASE_YEAR_DAYS: u16 = 348;

/// Years 1900 through 2049.
#[rustfmt::skip]
const STANDARD_ENTRIES: [u32; 150] = [
  0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,  // 1900
  0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,  // 1910
  0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,  // 1920
  0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,  // 1930
  0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,  // 1940
  0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0,  // 1950
  0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,  // 1960
  0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6,  // 1970
  0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,  // 1980
  0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0,  // 1990
  0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,  // 2000
  0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,  // 2010
  0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,  // 2020
  0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,  // 2030
  0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,  // 2040
];

/// The month lengths and leap month of a single lunar year.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct YearEncoding(u32);

impl YearEncoding {
  /// Wrap a packed year value.
  ///
  /// ## Panic
  ///
  /// This function panics if the value uses bits above bit 16 or names a leap month above 12.
  pub const fn new(bits: u32) -> Self {
    assert!(bits >> 17 == 0, "Encoding uses more than 17 bits");
    assert!(bits & LEAP_MONTH <= 12, "Leap month out-of-bounds");
    Self(bits)
  }

  /// The raw packed value.
  #[inline]
  pub const fn bits(&self) -> u32 {
    self.0
  }

  /// The ordinary month (1-12) the leap month follows, or 0 if the year has no leap month.
  #[inline]
  pub const fn leap_month(&self) -> u8 {
    (self.0 & LEAP_MONTH) as u8
  }

  /// The number of days in the leap month: 29 or 30, or 0 if the year has no leap month.
  pub const fn leap_month_days(&self) -> u8 {
    match self.leap_month() {
      0 => 0,
      _ if self.0 & LEAP_LONG != 0 => 30,
      _ => 29,
    }
  }

  /// The number of days (29 or 30) in the given ordinary month.
  ///
  /// ## Panic
  ///
  /// This function panics if the month is not between 1 and 12; use
  /// [`LunarTable::month_days`] for a checked lookup.
  pub const fn month_days(&self, month: u8) -> u8 {
    assert!(month >= 1 && month <= 12, "Month out-of-bounds");
    match self.0 & (LEAP_LONG >> month) {
      0 => 29,
      _ => 30,
    }
  }

  /// The total number of days in the year, including the leap month.
  pub const fn year_days(&self) -> u16 {
    let mut sum = BASE_YEAR_DAYS;
    let mut bit = FIRST_MONTH;
    while bit >= LAST_MONTH {
      if self.0 & bit != 0 {
        sum += 1;
      }
      bit >>= 1;
    }
    sum + self.leap_month_days() as u16
  }

  /// The number of months in the year: 13 with a leap month, 12 otherwise.
  pub const fn month_count(&self) -> u8 {
    match self.leap_month() {
      0 => 12,
      _ => 13,
    }
  }
}

impl fmt::Debug for YearEncoding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "YearEncoding({:#07x})", self.0)
  }
}

/// A contiguous run of packed lunar years, beginning at a fixed first year.
///
/// ## Examples
///
/// ```
/// use lunar::LunarTable;
///
/// let table = LunarTable::STANDARD;
/// assert_eq!(table.first_year(), 1900);
/// assert_eq!(table.last_year(), 2049);
/// assert_eq!(table.leap_month(2023), Ok(2));
/// assert_eq!(table.year_days(2024), Ok(354));
/// assert!(table.year_days(2050).is_err());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LunarTable {
  first_year: i32,
  entries: &'static [u32],
}

impl LunarTable {
  /// The built-in table, covering lunar years 1900 through 2049.
  pub const STANDARD: Self = Self::new(1900, &STANDARD_ENTRIES);

  /// Construct a table whose first entry describes `first_year`.
  ///
  /// ## Panic
  ///
  /// This function panics if the table is empty, begins before year 4 (where the stem-branch
  /// cycle is anchored), would run past `i32::MAX`, or contains an entry [`YearEncoding::new`]
  /// would reject.
  pub const fn new(first_year: i32, entries: &'static [u32]) -> Self {
    assert!(!entries.is_empty(), "Empty lunar table");
    assert!(first_year >= utils::LABEL_EPOCH, "Lunar table begins before year 4");
    assert!(
      entries.len() - 1 <= (i32::MAX - first_year) as usize,
      "Lunar table runs past the last representable year"
    );
    let mut i = 0;
    while i < entries.len() {
      YearEncoding::new(entries[i]);
      i += 1;
    }
    Self { first_year, entries }
  }

  /// The first year the table describes.
  #[inline]
  pub const fn first_year(&self) -> i32 {
    self.first_year
  }

  /// The last year the table describes.
  #[inline]
  pub const fn last_year(&self) -> i32 {
    self.first_year + (self.entries.len() - 1) as i32
  }

  /// The number of years in the table.
  #[inline]
  pub const fn year_count(&self) -> usize {
    self.entries.len()
  }

  /// Whether the table describes the given year.
  #[inline]
  pub const fn contains(&self, year: i32) -> bool {
    year >= self.first_year && year <= self.last_year()
  }

  /// The packed encoding for the given year.
  pub fn encoding(&self, year: i32) -> LunarResult<YearEncoding> {
    match self.contains(year) {
      true => Ok(YearEncoding(self.entries[(year - self.first_year) as usize])),
      false => Err(OutOfRange::year(year, self.first_year, self.last_year())),
    }
  }

  /// The given year, validated against this table.
  pub fn year(&self, year: i32) -> LunarResult<LunarYear> {
    Ok(LunarYear::new(year, self.encoding(year)?))
  }

  /// Every year in the table, in order.
  pub fn years(&self) -> impl Iterator<Item = LunarYear> + '_ {
    (self.first_year..=self.last_year())
      .zip(self.entries)
      .map(|(year, bits)| LunarYear::new(year, YearEncoding(*bits)))
  }

  /// The ordinary month (1-12) after which the year's leap month falls, or 0 if the year has no
  /// leap month.
  pub fn leap_month(&self, year: i32) -> LunarResult<u8> {
    Ok(self.encoding(year)?.leap_month())
  }

  /// The number of days in the year's leap month: 29 or 30, or 0 if it has none.
  pub fn leap_month_days(&self, year: i32) -> LunarResult<u8> {
    Ok(self.encoding(year)?.leap_month_days())
  }

  /// The number of days (29 or 30) in the given ordinary month (1-12) of the year.
  ///
  /// This never describes the leap month; see [`LunarTable::leap_month_days`].
  pub fn month_days(&self, year: i32, month: u8) -> LunarResult<u8> {
    let encoding = self.encoding(year)?;
    if !(1..=12).contains(&month) {
      return Err(OutOfRange::month(month));
    }
    Ok(encoding.month_days(month))
  }

  /// The total number of days in the year, including any leap month.
  pub fn year_days(&self, year: i32) -> LunarResult<u16> {
    Ok(self.encoding(year)?.year_days())
  }
}

impl Default for LunarTable {
  fn default() -> Self {
    Self::STANDARD
  }
}
