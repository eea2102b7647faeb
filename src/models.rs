use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::error::RenewError;

/// Billing cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Frequency {
    Monthly,
    Annual,
}

impl Frequency {
    /// Storage key used in the database and CSV files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Annual => write!(f, "Annual"),
        }
    }
}

impl FromStr for Frequency {
    type Err = RenewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "annual" => Ok(Self::Annual),
            _ => Err(RenewError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Contractual minimum duration. While a term is running the subscription
/// auto-renews regardless of its next due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommitmentTerm {
    #[value(name = "none")]
    None,
    #[value(name = "12m")]
    TwelveMonths,
    #[value(name = "24m")]
    TwentyFourMonths,
}

impl CommitmentTerm {
    pub fn key(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::TwelveMonths => "12m",
            Self::TwentyFourMonths => "24m",
        }
    }
}

impl fmt::Display for CommitmentTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::TwelveMonths => write!(f, "12 months"),
            Self::TwentyFourMonths => write!(f, "24 months"),
        }
    }
}

impl FromStr for CommitmentTerm {
    type Err = RenewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "12m" | "12 months" => Ok(Self::TwelveMonths),
            "24m" | "24 months" => Ok(Self::TwentyFourMonths),
            _ => Err(RenewError::UnknownCommitment(s.to_string())),
        }
    }
}

/// Status classification recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Incomplete,
    Finished,
    AutoRenewing,
    Active,
    DueToday,
    WatchClosely,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Incomplete => "Incomplete",
            Self::Finished => "Finished",
            Self::AutoRenewing => "Auto-renewing",
            Self::Active => "Active",
            Self::DueToday => "Due today",
            Self::WatchClosely => "Watch closely",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub frequency: Frequency,
    /// Absent when the user never provided a start date or it failed to
    /// parse; the subscription is then classified Incomplete.
    pub start_date: Option<NaiveDate>,
    pub category: String,
    pub commitment: CommitmentTerm,
}

/// Fields derived from a [`Subscription`] and a reference date. Never
/// persisted; recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    pub monthly_equivalent: f64,
    pub next_due: Option<NaiveDate>,
    pub commitment_end: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    pub status: Status,
}

/// Lenient ISO date parsing. Bad input is a missing date, never an error.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_roundtrip() {
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("Annual".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert_eq!(Frequency::Monthly.key().parse::<Frequency>().unwrap(), Frequency::Monthly);
    }

    #[test]
    fn test_frequency_rejects_unknown() {
        assert!("weekly".parse::<Frequency>().is_err());
        assert!("".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_commitment_roundtrip() {
        assert_eq!("none".parse::<CommitmentTerm>().unwrap(), CommitmentTerm::None);
        assert_eq!("12m".parse::<CommitmentTerm>().unwrap(), CommitmentTerm::TwelveMonths);
        assert_eq!("24 months".parse::<CommitmentTerm>().unwrap(), CommitmentTerm::TwentyFourMonths);
    }

    #[test]
    fn test_commitment_empty_means_none() {
        assert_eq!("".parse::<CommitmentTerm>().unwrap(), CommitmentTerm::None);
    }

    #[test]
    fn test_commitment_rejects_unknown() {
        assert!("36m".parse::<CommitmentTerm>().is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-31"), NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(parse_date(" 2024-01-31 "), NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(parse_date("31/01/2024"), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }
}
