use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;

use crate::Branch;
use crate::Stem;
use crate::StemBranch;
use crate::Zodiac;

/// Deserializes any label from its string form.
struct LabelVisitor<T> {
  expecting: &'static str,
  label: PhantomData<T>,
}

impl<T> Visitor<'_> for LabelVisitor<T>
where
  T: FromStr,
  T::Err: fmt::Display,
{
  type Value = T;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str(self.expecting)
  }

  fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
    s.parse().map_err(E::custom)
  }
}

macro_rules! serde_label {
  ($($label:ident => $expecting:literal),* $(,)?) => {
    $(
      impl Serialize for $label {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
          serializer.collect_str(self)
        }
      }

      impl<'de> Deserialize<'de> for $label {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
          deserializer.deserialize_str(LabelVisitor { expecting: $expecting, label: PhantomData })
        }
      }
    )*
  };
}
serde_label! {
  Zodiac => "a zodiac animal",
  Stem => "a heavenly stem",
  Branch => "an earthly branch",
  StemBranch => "a two-character stem-branch name",
}
