//! The sexagenary (stem-branch) cycle.
//!
//! Ten heavenly stems and twelve earthly branches advance together, one step per year, so a
//! given pairing recurs every sixty years. Only pairings of matching parity occur.

use std::fmt;
use std::str::FromStr;

use crate::LunarResult;
use crate::parse::ParseError;
use crate::utils;
use crate::zodiac::Zodiac;

macro_rules! cycle_enum {
  (
    $(#[$meta:meta])*
    $name:ident[$len:literal] {
      $($variant:ident = $n:literal => $hanzi:literal)*
    }
  ) => {
    $(#[$meta])*
    #[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
    #[repr(u8)]
    pub enum $name {
      $($variant = $n,)*
    }

    impl $name {
      /// Every member, in cycle order.
      pub const ALL: [$name; $len] = [$($name::$variant),*];

      /// The Chinese character.
      pub const fn hanzi(&self) -> &'static str {
        match self {
          $(Self::$variant => $hanzi,)*
        }
      }

      /// The romanized (pinyin) name, without tone marks.
      pub const fn pinyin(&self) -> &'static str {
        match self {
          $(Self::$variant => stringify!($variant),)*
        }
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
      }
    }

    impl FromStr for $name {
      type Err = ParseError;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        $(
          if s == $hanzi || s.eq_ignore_ascii_case(stringify!($variant)) {
            return Ok(Self::$variant);
          }
        )*
        Err(ParseError::new(stringify!($name), s, None))
      }
    }
  };
}

cycle_enum! {
  /// The ten heavenly stems.
  Stem[10] {
    Jia = 0 => "甲"
    Yi = 1 => "乙"
    Bing = 2 => "丙"
    Ding = 3 => "丁"
    Wu = 4 => "戊"
    Ji = 5 => "己"
    Geng = 6 => "庚"
    Xin = 7 => "辛"
    Ren = 8 => "壬"
    Gui = 9 => "癸"
  }
}

cycle_enum! {
  /// The twelve earthly branches.
  Branch[12] {
    Zi = 0 => "子"
    Chou = 1 => "丑"
    Yin = 2 => "寅"
    Mao = 3 => "卯"
    Chen = 4 => "辰"
    Si = 5 => "巳"
    Wu = 6 => "午"
    Wei = 7 => "未"
    Shen = 8 => "申"
    You = 9 => "酉"
    Xu = 10 => "戌"
    Hai = 11 => "亥"
  }
}

impl Branch {
  /// The zodiac animal paired with this branch.
  #[inline]
  pub const fn zodiac(&self) -> Zodiac {
    Zodiac::ALL[*self as usize]
  }
}

/// A year's name in the sexagenary cycle: one stem followed by one branch.
///
/// ## Examples
///
/// ```
/// use lunar::StemBranch;
///
/// let name = StemBranch::from_year(1900).unwrap();
/// assert_eq!(name.to_string(), "庚子");
/// assert_eq!(name.index(), 36);
/// assert_eq!(StemBranch::from_year(1960), Ok(name));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StemBranch {
  stem: Stem,
  branch: Branch,
}

impl StemBranch {
  /// The cycle name of the given lunar year.
  ///
  /// Years before 4 (甲子, the opening of the cycle) are rejected.
  pub fn from_year(year: i32) -> LunarResult<Self> {
    utils::check_label_year(year)?;
    let n = utils::cycle_offset(year);
    Ok(Self {
      stem: Stem::ALL[n.rem_euclid(10) as usize],
      branch: Branch::ALL[n.rem_euclid(12) as usize],
    })
  }

  /// The name at the given (0-based) position in the cycle.
  ///
  /// ## Panic
  ///
  /// This function panics if the index is 60 or greater.
  pub const fn from_index(index: u8) -> Self {
    assert!(index < 60, "Cycle index out-of-bounds");
    Self { stem: Stem::ALL[index as usize % 10], branch: Branch::ALL[index as usize % 12] }
  }

  /// Pair a stem with a branch, or `None` if the pairing never occurs in the cycle.
  pub const fn pair(stem: Stem, branch: Branch) -> Option<Self> {
    match (stem as u8 ^ branch as u8) & 1 {
      0 => Some(Self { stem, branch }),
      _ => None,
    }
  }

  /// The heavenly stem.
  #[inline]
  pub const fn stem(&self) -> Stem {
    self.stem
  }

  /// The earthly branch.
  #[inline]
  pub const fn branch(&self) -> Branch {
    self.branch
  }

  /// The zodiac animal of the year, determined by the branch.
  #[inline]
  pub const fn zodiac(&self) -> Zodiac {
    self.branch.zodiac()
  }

  /// The (0-based) position in the sixty-name cycle; 甲子 is 0.
  pub const fn index(&self) -> u8 {
    // n = 6s - 5b satisfies n ≡ s (mod 10) and n ≡ b (mod 12) whenever s and b share parity.
    (6 * self.stem as i16 - 5 * self.branch as i16).rem_euclid(60) as u8
  }
}

impl fmt::Display for StemBranch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", self.stem, self.branch)
  }
}

impl FromStr for StemBranch {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut chars = s.char_indices();
    let (stem, branch) = match (chars.next(), chars.next(), chars.next()) {
      (Some(_), Some((split, _)), None) => s.split_at(split),
      _ => return Err(ParseError::new("StemBranch", s, Some("Expected two characters"))),
    };
    let fail = |reason| ParseError::new("StemBranch", s, Some(reason));
    let stem = stem.parse::<Stem>().map_err(|_| fail("Bad stem"))?;
    let branch = branch.parse::<Branch>().map_err(|_| fail("Bad branch"))?;
    Self::pair(stem, branch).ok_or_else(|| fail("Stem and branch parity differ"))
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_from_year() {
    for (year, name) in [
      (4, "甲子"),
      (1900, "庚子"),
      (1901, "辛丑"),
      (1949, "己丑"),
      (1984, "甲子"),
      (2000, "庚辰"),
      (2023, "癸卯"),
      (2024, "甲辰"),
      (2049, "己巳"),
    ] {
      check!(StemBranch::from_year(year).unwrap().to_string() == name, "Incorrect on: {}", year);
    }
  }

  #[test]
  fn test_period() {
    for year in 4..3000 {
      let name = StemBranch::from_year(year);
      check!(name == StemBranch::from_year(year + 60), "Incorrect on: {}", year);
    }
    let names: std::collections::HashSet<StemBranch> =
      (1900..1960).map(|y| StemBranch::from_year(y).unwrap()).collect();
    check!(names.len() == 60);
  }

  #[test]
  fn test_out_of_range() {
    check!(StemBranch::from_year(3).is_err());
    check!(StemBranch::from_year(-56).is_err());
  }

  #[test]
  fn test_index() {
    for index in 0..60 {
      let name = StemBranch::from_index(index);
      check!(name.index() == index);
      check!(StemBranch::pair(name.stem(), name.branch()) == Some(name));
    }
    for year in 1900..2050 {
      let name = StemBranch::from_year(year).unwrap();
      check!(name.index() as i32 == (year - 4).rem_euclid(60));
    }
  }

  #[test]
  fn test_pair() {
    check!(StemBranch::pair(Stem::Jia, Branch::Zi).is_some());
    check!(StemBranch::pair(Stem::Jia, Branch::Chou).is_none());
    check!(StemBranch::pair(Stem::Gui, Branch::Hai).map(|n| n.index()) == Some(59));
  }

  #[test]
  fn test_zodiac_agrees() {
    for year in 1900..2050 {
      check!(Zodiac::from_year(year).ok() == Some(StemBranch::from_year(year).unwrap().zodiac()));
    }
  }

  #[test]
  fn test_display() {
    check!(Stem::Geng.to_string() == "庚");
    check!(Branch::Zi.to_string() == "子");
    check!(Stem::Geng.pinyin() == "Geng");
    check!(Branch::Chen.pinyin() == "Chen");
    check!(Stem::ALL.map(|s| s.hanzi()).concat() == "甲乙丙丁戊己庚辛壬癸");
    check!(Branch::ALL.map(|b| b.hanzi()).concat() == "子丑寅卯辰巳午未申酉戌亥");
  }

  #[test]
  fn test_from_str() -> Result<(), ParseError> {
    check!("庚子".parse::<StemBranch>()? == StemBranch::from_index(36));
    check!("geng".parse::<Stem>()? == Stem::Geng);
    check!("亥".parse::<Branch>()? == Branch::Hai);
    check!("庚".parse::<StemBranch>().is_err());
    check!("庚子年".parse::<StemBranch>().is_err());
    check!("子庚".parse::<StemBranch>().is_err());
    check!(
      "甲丑".parse::<StemBranch>().map_err(|e| e.to_string()).unwrap_err().contains("parity")
    );
    Ok(())
  }
}
