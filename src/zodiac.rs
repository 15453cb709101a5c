use std::fmt;
use std::str::FromStr;

use crate::LunarResult;
use crate::parse::ParseError;
use crate::sexagenary::Branch;
use crate::utils;

/// The twelve animals of the zodiac, in cycle order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Zodiac {
  Rat = 0,
  Ox = 1,
  Tiger = 2,
  Rabbit = 3,
  Dragon = 4,
  Snake = 5,
  Horse = 6,
  Goat = 7,
  Monkey = 8,
  Rooster = 9,
  Dog = 10,
  Pig = 11,
}

impl Zodiac {
  /// The animal assigned to the given lunar year.
  ///
  /// ## Examples
  ///
  /// ```
  /// use lunar::Zodiac;
  ///
  /// assert_eq!(Zodiac::from_year(1900), Ok(Zodiac::Rat));
  /// assert_eq!(Zodiac::from_year(2024), Ok(Zodiac::Dragon));
  /// assert_eq!(Zodiac::from_year(2024).unwrap().to_string(), "龙");
  /// ```
  ///
  /// Years before 4 (the first rat year of the stem-branch cycle) are rejected.
  pub fn from_year(year: i32) -> LunarResult<Self> {
    utils::check_label_year(year)?;
    Ok(Self::ALL[utils::zodiac_index(year)])
  }

  /// The earthly branch paired with this animal.
  #[inline]
  pub const fn branch(&self) -> Branch {
    Branch::ALL[*self as usize]
  }
}

macro_rules! zodiac_str {
  ($($animal:ident => $hanzi:literal)*) => {
    impl Zodiac {
      /// Every animal, in cycle order.
      pub const ALL: [Zodiac; 12] = [$(Zodiac::$animal),*];

      /// The Chinese character for the animal.
      pub const fn hanzi(&self) -> &'static str {
        match self {
          $(Self::$animal => $hanzi,)*
        }
      }

      /// The English name of the animal.
      pub const fn english(&self) -> &'static str {
        match self {
          $(Self::$animal => stringify!($animal),)*
        }
      }
    }

    impl FromStr for Zodiac {
      type Err = ParseError;

      /// Parse either the Chinese character or the (case-insensitive) English name.
      fn from_str(s: &str) -> Result<Self, Self::Err> {
        $(
          if s == $hanzi || s.eq_ignore_ascii_case(stringify!($animal)) {
            return Ok(Self::$animal);
          }
        )*
        Err(ParseError::new("Zodiac", s, None))
      }
    }
  };
}
zodiac_str! {
  Rat => "鼠"
  Ox => "牛"
  Tiger => "虎"
  Rabbit => "兔"
  Dragon => "龙"
  Snake => "蛇"
  Horse => "马"
  Goat => "羊"
  Monkey => "猴"
  Rooster => "鸡"
  Dog => "狗"
  Pig => "猪"
}

impl fmt::Display for Zodiac {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.hanzi())
  }
}
