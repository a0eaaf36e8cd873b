//! Message spec parsing
//!
//! A message spec names the message types a harness references. `Name`
//! references a single type; `NameN` references `N` sibling types named
//! `Name`, `Name2`, ..., `NameN`, matching the ordinal suffix convention of
//! the synthetic benchmark protos.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GenError, GenResult};

// At least one non-digit before the maximal trailing digit run. `(?s)` so a
// stray newline in the argument stays part of the base.
static COUNT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.*[^0-9])([0-9]+)$").expect("count suffix pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSpec {
    pub base: String,
    pub count: u32,
}

impl MessageSpec {
    /// Split `raw` into base name and variant count.
    ///
    /// A spec made only of digits has no non-digit prefix, so it is taken
    /// literally with a count of 1.
    pub fn parse(raw: &str) -> GenResult<Self> {
        let Some(caps) = COUNT_SUFFIX.captures(raw) else {
            return Ok(Self { base: raw.to_string(), count: 1 });
        };
        let digits = &caps[2];
        let count = digits.parse::<u32>().map_err(|_| GenError::CountOutOfRange {
            spec: raw.to_string(),
            digits: digits.to_string(),
        })?;
        Ok(Self { base: caps[1].to_string(), count })
    }

    /// Variant names in emission order. Always yields the base name first,
    /// even when the count is 0.
    pub fn variants(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.base.clone())
            .chain((2..=self.count).map(move |i| format!("{}{}", self.base, i)))
    }

    pub fn variant_count(&self) -> usize {
        self.count.max(1) as usize
    }
}

impl std::str::FromStr for MessageSpec {
    type Err = GenError;

    fn from_str(s: &str) -> GenResult<Self> {
        Self::parse(s)
    }
}
