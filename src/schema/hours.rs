//! Opening hours: day-of-week tokens and `OpeningHoursSpecification`.
//!
//! Day tokens use two-letter abbreviations:
//!
//! | Token    | `dayOfWeek`                          |
//! |----------|--------------------------------------|
//! | `mo-we`  | `["Monday","Tuesday","Wednesday"]`   |
//! | `mo,we`  | `["Monday","Wednesday"]`             |
//! | `tu`     | `"Tuesday"`                          |
//! | (empty)  | omitted                              |
//!
//! Ranges do not wrap around the end of the week: `fr-mo` yields Friday
//! through Sunday.

use crate::config::OpeningHours;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Week order with abbreviations.
const WEEK: [(&str, Weekday); 7] = [
    ("mo", Weekday::Monday),
    ("tu", Weekday::Tuesday),
    ("we", Weekday::Wednesday),
    ("th", Weekday::Thursday),
    ("fr", Weekday::Friday),
    ("sa", Weekday::Saturday),
    ("su", Weekday::Sunday),
];

impl Weekday {
    /// Look up a two-letter abbreviation (`"mo"` → Monday).
    pub fn from_abbr(abbr: &str) -> Option<Self> {
        WEEK.iter().find(|(a, _)| *a == abbr).map(|(_, day)| *day)
    }
}

/// `dayOfWeek` value: one day, or a list. Unknown abbreviations in a list
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DayOfWeek {
    Single(Weekday),
    List(Vec<Option<Weekday>>),
}

/// Lexical shape of a day token.
enum DayToken<'a> {
    Empty,
    Range(&'a str, &'a str),
    List(Vec<&'a str>),
    Single(&'a str),
}

impl<'a> DayToken<'a> {
    fn classify(token: &'a str) -> Self {
        if token.is_empty() {
            return Self::Empty;
        }

        if token.contains('-') {
            let mut parts = token.split('-');
            let first = parts.next().unwrap_or_default().trim();
            let last = parts.next().unwrap_or_default().trim();
            return Self::Range(first, last);
        }

        if token.contains(',') {
            return Self::List(token.split(',').map(str::trim).collect());
        }

        Self::Single(token.trim())
    }
}

/// Parse a day token into a `dayOfWeek` value.
///
/// Returns `None` for an empty token or an unknown single abbreviation.
pub fn parse_day_of_week(token: &str) -> Option<DayOfWeek> {
    match DayToken::classify(token) {
        DayToken::Empty => None,
        DayToken::Range(first, last) => Some(DayOfWeek::List(
            day_range(first, last).into_iter().map(Some).collect(),
        )),
        DayToken::List(abbrs) => Some(DayOfWeek::List(
            abbrs.into_iter().map(Weekday::from_abbr).collect(),
        )),
        DayToken::Single(abbr) => Weekday::from_abbr(abbr).map(DayOfWeek::Single),
    }
}

/// Days from `first` through `last` inclusive, in week order.
///
/// The scan stops at Sunday: an end day before the start day is never
/// reached. With an unknown start day only the end day is kept.
fn day_range(first: &str, last: &str) -> Vec<Weekday> {
    let Some(start) = WEEK.iter().position(|(abbr, _)| *abbr == first) else {
        return Weekday::from_abbr(last).into_iter().collect();
    };

    let mut days = Vec::new();
    for (abbr, day) in &WEEK[start..] {
        days.push(*day);
        if *abbr == last {
            break;
        }
    }
    days
}

/// Abbreviations in `token` that name no weekday.
pub fn unknown_days(token: &str) -> Vec<&str> {
    let abbrs = match DayToken::classify(token) {
        DayToken::Empty => return Vec::new(),
        DayToken::Range(first, last) => vec![first, last],
        DayToken::List(abbrs) => abbrs,
        DayToken::Single(abbr) => vec![abbr],
    };

    abbrs
        .into_iter()
        .filter(|abbr| Weekday::from_abbr(abbr).is_none())
        .collect()
}

/// `OpeningHoursSpecification` JSON-LD node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "dayOfWeek", skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    pub opens: String,
    pub closes: String,
}

impl OpeningHoursSpecification {
    pub fn from_config(hours: &OpeningHours) -> Self {
        Self {
            kind: "OpeningHoursSpecification",
            day_of_week: parse_day_of_week(hours.days()),
            opens: hours.opens().to_string(),
            closes: hours.closes().to_string(),
        }
    }
}
