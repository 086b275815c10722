//! Work-time category enum as the single source of truth for category labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of work-time categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    NormalTime,
    PublicHoliday,
    AnnualLeave,
    SickLeave,
    Tafe,
    OvertimeTimeAndHalf,
    OvertimeDouble,
    Rdo,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 8;

    /// Every category, in column order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::NormalTime,
        Self::PublicHoliday,
        Self::AnnualLeave,
        Self::SickLeave,
        Self::Tafe,
        Self::OvertimeTimeAndHalf,
        Self::OvertimeDouble,
        Self::Rdo,
    ];

    /// Display label, also used on the wire and as the CSV header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NormalTime => "Normal Time",
            Self::PublicHoliday => "Public Holiday",
            Self::AnnualLeave => "Annual Leave",
            Self::SickLeave => "Sick Leave",
            Self::Tafe => "Tafe",
            Self::OvertimeTimeAndHalf => "OT x 1.5",
            Self::OvertimeDouble => "OT x 2",
            Self::Rdo => "RDO",
        }
    }

    /// Short command-line friendly name.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::NormalTime => "normal-time",
            Self::PublicHoliday => "public-holiday",
            Self::AnnualLeave => "annual-leave",
            Self::SickLeave => "sick-leave",
            Self::Tafe => "tafe",
            Self::OvertimeTimeAndHalf => "ot-1.5",
            Self::OvertimeDouble => "ot-2",
            Self::Rdo => "rdo",
        }
    }

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.label().eq_ignore_ascii_case(trimmed) || category.slug() == trimmed
            })
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for category strings outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
