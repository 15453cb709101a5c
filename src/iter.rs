//! Iteration over the months of a lunar year

use std::fmt;
use std::iter::FusedIterator;

use crate::table::YearEncoding;

/// A single month of a lunar year.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LunarMonth {
  number: u8,
  leap: bool,
  days: u8,
}

impl LunarMonth {
  /// The month number (1-12). A leap month shares the number of the month it follows.
  #[inline]
  pub const fn number(&self) -> u8 {
    self.number
  }

  /// Whether this is the year's leap month.
  #[inline]
  pub const fn is_leap(&self) -> bool {
    self.leap
  }

  /// The number of days in the month: 29 or 30.
  #[inline]
  pub const fn days(&self) -> u8 {
    self.days
  }
}

impl fmt::Display for LunarMonth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.leap {
      true => write!(f, "{}L", self.number),
      false => write!(f, "{}", self.number),
    }
  }
}

/// An iterator over the months of a lunar year, in calendar order.
#[derive(Clone, Debug)]
pub struct MonthIterator {
  encoding: YearEncoding,
  next_month: u8,
  leap_pending: bool,
}

impl MonthIterator {
  pub(crate) const fn new(encoding: YearEncoding) -> Self {
    Self { encoding, next_month: 1, leap_pending: false }
  }

  fn remaining(&self) -> usize {
    let ordinary = 13 - self.next_month as usize;
    let leap = match self.encoding.leap_month() {
      0 => false,
      m => self.leap_pending || m >= self.next_month,
    };
    ordinary + leap as usize
  }
}

impl Iterator for MonthIterator {
  type Item = LunarMonth;

  fn next(&mut self) -> Option<Self::Item> {
    if self.leap_pending {
      self.leap_pending = false;
      return Some(LunarMonth {
        number: self.encoding.leap_month(),
        leap: true,
        days: self.encoding.leap_month_days(),
      });
    }
    match self.next_month > 12 {
      true => None,
      false => {
        let number = self.next_month;
        self.next_month += 1;
        self.leap_pending = number == self.encoding.leap_month();
        Some(LunarMonth { number, leap: false, days: self.encoding.month_days(number) })
      },
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.remaining();
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for MonthIterator {}

impl FusedIterator for MonthIterator {}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;
  use crate::LunarResult;
  use crate::LunarTable;

  #[test]
  fn test_leap_order() -> LunarResult<()> {
    let months: Vec<LunarMonth> = LunarTable::STANDARD.year(1903)?.months().collect();
    let labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
    check!(labels == ["1", "2", "3", "4", "5", "5L", "6", "7", "8", "9", "10", "11", "12"]);
    check!(months[5].is_leap());
    check!(months[5].days() == 29);
    check!(months[4].days() == 29);
    check!(months[6].days() == 30);
    Ok(())
  }

  #[test]
  fn test_no_leap() -> LunarResult<()> {
    let months: Vec<LunarMonth> = LunarTable::STANDARD.year(2024)?.months().collect();
    check!(months.len() == 12);
    check!(months.iter().all(|m| !m.is_leap()));
    check!(months.iter().map(|m| m.number()).eq(1..=12));
    Ok(())
  }

  #[test]
  fn test_leap_after_last_month() {
    let months: Vec<LunarMonth> = MonthIterator::new(YearEncoding::new(0x1000c)).collect();
    check!(months.len() == 13);
    check!(months[12].number() == 12);
    check!(months[12].is_leap());
    check!(months[12].days() == 30);
  }

  #[test]
  fn test_sums_to_year() {
    for year in LunarTable::STANDARD.years() {
      let months = year.months();
      check!(months.len() == year.encoding().month_count() as usize);
      let days: u16 = months.map(|m| m.days() as u16).sum();
      check!(days == year.year_days(), "Incorrect on: {}", year.year());
    }
  }

  #[test]
  fn test_size_hint() -> LunarResult<()> {
    let mut months = LunarTable::STANDARD.year(1903)?.months();
    for remaining in (0..=13).rev() {
      check!(months.len() == remaining);
      months.next();
    }
    check!(months.next().is_none());
    Ok(())
  }
}
