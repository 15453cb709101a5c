//! The `lunar-rs` crate describes the structure of years in the Chinese lunisolar calendar, along
//! with the zodiac animal and sexagenary (stem-branch) name of each year.
//!
//! Month lengths and leap months come from a precomputed table, [`LunarTable::STANDARD`], which
//! covers lunar years 1900 through 2049. Each year is packed into 17 bits; the decoding is exposed
//! only through named lookups. Lookups for a year outside the table fail with [`OutOfRange`].
//!
//! ## Examples
//!
//! Month structure:
//!
//! ```
//! use lunar::LunarTable;
//!
//! let table = LunarTable::STANDARD;
//! assert_eq!(table.leap_month(1903), Ok(5));
//! assert_eq!(table.leap_month_days(1903), Ok(29));
//! assert_eq!(table.month_days(1903, 6), Ok(30));
//! assert_eq!(table.year_days(1903), Ok(383));
//! ```
//!
//! The same lookups are available as free functions against the standard table:
//!
//! ```
//! assert_eq!(lunar::year_days(2024), Ok(354));
//! assert!(lunar::year_days(2050).is_err());
//! ```
//!
//! Year labels:
//!
//! ```
//! assert_eq!(lunar::zodiac(1900).unwrap().to_string(), "鼠");
//! assert_eq!(lunar::sexagenary(1900).unwrap().to_string(), "庚子");
//! ```

mod error;
pub mod iter;
mod parse;
mod sexagenary;
#[cfg(feature = "serde")]
mod serde;
mod table;
mod utils;
mod year;
mod zodiac;

pub use error::Field;
pub use error::LunarResult;
pub use error::OutOfRange;
pub use iter::LunarMonth;
pub use parse::ParseError;
pub use sexagenary::Branch;
pub use sexagenary::Stem;
pub use sexagenary::StemBranch;
pub use table::LunarTable;
pub use table::YearEncoding;
pub use year::LunarYear;
pub use zodiac::Zodiac;

/// The ordinary month (1-12) after which the year's leap month falls, or 0 if the year has no
/// leap month.
#[inline]
pub fn leap_month(year: i32) -> LunarResult<u8> {
  LunarTable::STANDARD.leap_month(year)
}

/// The number of days in the year's leap month: 29 or 30, or 0 if it has none.
#[inline]
pub fn leap_month_days(year: i32) -> LunarResult<u8> {
  LunarTable::STANDARD.leap_month_days(year)
}

/// The number of days (29 or 30) in the given ordinary month (1-12) of the year.
#[inline]
pub fn month_days(year: i32, month: u8) -> LunarResult<u8> {
  LunarTable::STANDARD.month_days(year, month)
}

/// The total number of days in the lunar year.
#[inline]
pub fn year_days(year: i32) -> LunarResult<u16> {
  LunarTable::STANDARD.year_days(year)
}

/// The zodiac animal of the lunar year.
#[inline]
pub fn zodiac(year: i32) -> LunarResult<Zodiac> {
  Zodiac::from_year(year)
}

/// The stem-branch name of the lunar year.
#[inline]
pub fn sexagenary(year: i32) -> LunarResult<StemBranch> {
  StemBranch::from_year(year)
}
