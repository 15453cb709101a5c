use crate::LunarResult;
use crate::OutOfRange;

/// The first year with a label: 甲子, a rat year, opening the cycle.
pub(crate) const LABEL_EPOCH: i32 = 4;

/// Stem-branch cycle position of 1900 (庚子).
const CYCLE_1900: i32 = 36;

/// Reject years before the label epoch.
pub(crate) fn check_label_year(year: i32) -> LunarResult<()> {
  match year >= LABEL_EPOCH {
    true => Ok(()),
    false => Err(OutOfRange::year(year, LABEL_EPOCH, i32::MAX)),
  }
}

/// The position of the year within the twelve-year animal cycle.
pub(crate) const fn zodiac_index(year: i32) -> usize {
  (year - LABEL_EPOCH).rem_euclid(12) as usize
}

/// The offset of the year into the stem-branch cycle; reduce by 10 for the stem and by 12 for
/// the branch.
pub(crate) const fn cycle_offset(year: i32) -> i32 {
  year - 1900 + CYCLE_1900
}
