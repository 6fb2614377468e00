//! Ban length - symbolic duration of a temporary ban
//!
//! Grammar: `<n> <Unit>` components joined by `", "`, where the unit is one of
//! Year, Month, Week, Minute or Second (singular or plural, either is accepted for
//! any amount). Components may appear in any order and any subset.
//!
//! Rendering is canonical: fixed Year → Month → Week → Minute → Second order,
//! zero units omitted, plural suffix whenever the amount is not 1.
//! Day and hour units are deliberately not part of the grammar.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unit of a ban length component, in canonical rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Year,
    Month,
    Week,
    Minute,
    Second,
}

impl LengthUnit {
    /// All units in canonical rendering order
    pub const ALL: [Self; 5] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Minute,
        Self::Second,
    ];

    pub const fn singular(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Minute => "Minute",
            Self::Second => "Second",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            Self::Year => "Years",
            Self::Month => "Months",
            Self::Week => "Weeks",
            Self::Minute => "Minutes",
            Self::Second => "Seconds",
        }
    }

    /// Suffix to render for the given amount
    pub const fn suffix(self, amount: u32) -> &'static str {
        if amount == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Match a unit suffix exactly (case-sensitive, singular or plural)
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.singular() == suffix || unit.plural() == suffix)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Symbolic length of a ban ("2 Years, 1 Month")
///
/// This is a calendar period, not a fixed number of seconds: months and years vary in
/// length, so it is never converted to an absolute duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BanLength {
    amounts: [u32; 5],
}

impl BanLength {
    /// The empty length (every unit zero)
    pub const ZERO: Self = Self { amounts: [0; 5] };

    /// Return a copy with `unit` set to `amount`
    #[must_use]
    pub fn with(mut self, unit: LengthUnit, amount: u32) -> Self {
        self.amounts[unit.index()] = amount;
        self
    }

    /// Amount of the given unit (zero if absent)
    #[inline]
    pub const fn get(&self, unit: LengthUnit) -> u32 {
        self.amounts[unit.index()]
    }

    #[inline]
    pub const fn years(&self) -> u32 {
        self.get(LengthUnit::Year)
    }

    #[inline]
    pub const fn months(&self) -> u32 {
        self.get(LengthUnit::Month)
    }

    #[inline]
    pub const fn weeks(&self) -> u32 {
        self.get(LengthUnit::Week)
    }

    #[inline]
    pub const fn minutes(&self) -> u32 {
        self.get(LengthUnit::Minute)
    }

    #[inline]
    pub const fn seconds(&self) -> u32 {
        self.get(LengthUnit::Second)
    }

    /// Check if every unit is zero
    pub fn is_zero(&self) -> bool {
        self.amounts.iter().all(|&amount| amount == 0)
    }

    /// Parse the feed duration format
    pub fn parse(s: &str) -> Result<Self, LengthParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LengthParseError::Empty);
        }

        let mut length = Self::ZERO;
        let mut seen = [false; 5];

        for component in trimmed.split(", ") {
            let invalid = || LengthParseError::InvalidComponent(component.to_string());

            let (amount, suffix) = component.split_once(' ').ok_or_else(invalid)?;
            if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let amount: u32 = amount.parse().map_err(|_| invalid())?;

            let unit = LengthUnit::from_suffix(suffix)
                .ok_or_else(|| LengthParseError::UnknownUnit(suffix.to_string()))?;

            if std::mem::replace(&mut seen[unit.index()], true) {
                return Err(LengthParseError::DuplicateUnit(unit));
            }
            length = length.with(unit, amount);
        }

        Ok(length)
    }
}

/// Error when parsing a feed duration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LengthParseError {
    #[error("empty ban length")]
    Empty,

    #[error("invalid ban length component: {0:?}")]
    InvalidComponent(String),

    #[error("unknown ban length unit: {0:?}")]
    UnknownUnit(String),

    #[error("ban length unit given twice: {0}")]
    DuplicateUnit(LengthUnit),
}

impl fmt::Display for BanLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0 {}", LengthUnit::Second.plural());
        }

        let mut first = true;
        for unit in LengthUnit::ALL {
            let amount = self.get(unit);
            if amount == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{amount} {}", unit.suffix(amount))?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for BanLength {
    type Err = LengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialize in the feed's own text format
impl Serialize for BanLength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BanLength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
