//! Age-windowed retrieval over a snapshot of the quote collection.
//!
//! [`filter_quotes`] is pure: it takes the collection, the optional window, the
//! current time and the policy for unparsable timestamps, and returns a new
//! vector sorted ascending by `time`. It never fails; damaged records are
//! handled by [`MalformedPolicy`].

use chrono::{NaiveDateTime, TimeDelta};
use clap::ValueEnum;
use strum::{Display, EnumString};

use crate::error::QuoteError;
use crate::quote::Quote;

/// Non-negative age window in days. `0` means "no window".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxAge(u64);

impl MaxAge {
    /// Window of `days` days.
    pub fn days(days: u64) -> Self {
        MaxAge(days)
    }

    /// Window length in days.
    pub fn as_days(self) -> u64 {
        self.0
    }

    /// Oldest instant still inside the window, `None` for an unbounded window
    /// or when the subtraction leaves the representable calendar.
    pub fn cutoff(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        if self.0 == 0 {
            return None;
        }
        i64::try_from(self.0)
            .ok()
            .and_then(TimeDelta::try_days)
            .and_then(|d| now.checked_sub_signed(d))
    }
}

impl TryFrom<i64> for MaxAge {
    type Error = QuoteError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(MaxAge)
            .map_err(|_| QuoteError::InvalidMaxAge(value))
    }
}

/// What to do with a quote whose `time` cannot be parsed while a window is active.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    ValueEnum,
    Display,
    EnumString,
)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MalformedPolicy {
    /// Keep the record (fail-open).
    #[default]
    Include,
    /// Drop the record.
    Exclude,
}

impl MalformedPolicy {
    fn keeps(self) -> bool {
        matches!(self, MalformedPolicy::Include)
    }
}

/// Quotes within `max_age` of `now`, sorted ascending by `time`.
///
/// `None` and a zero window both return the whole collection. With an active
/// window a quote is kept when its parsed time is `>= now - max_age`; quotes
/// whose time does not parse are kept or dropped according to `policy`. The
/// sort is stable, so equal timestamps keep their insertion order.
pub fn filter_quotes(
    quotes: &[Quote],
    max_age: Option<MaxAge>,
    now: NaiveDateTime,
    policy: MalformedPolicy,
) -> Vec<Quote> {
    let mut selected: Vec<Quote> = match max_age.filter(|age| age.as_days() > 0) {
        None => quotes.to_vec(),
        Some(age) => {
            let cutoff = age.cutoff(now);
            quotes
                .iter()
                .filter(|q| match (q.parsed_time(), cutoff) {
                    (None, _) => policy.keeps(),
                    (Some(_), None) => true,
                    (Some(t), Some(cutoff)) => t >= cutoff,
                })
                .cloned()
                .collect()
        }
    };
    selected.sort_by(|a, b| a.time.cmp(&b.time));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::TIME_FORMAT;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIME_FORMAT).unwrap()
    }

    fn quote(name: &str, time: &str) -> Quote {
        Quote {
            name: name.to_string(),
            message: format!("said by {}", name),
            time: time.to_string(),
        }
    }

    fn sample() -> Vec<Quote> {
        vec![
            quote("c", "2024-05-31T09:00:00"),
            quote("a", "2024-01-01T00:00:00"),
            quote("d", "2024-06-01T23:59:59"),
            quote("b", "2024-03-15T12:00:00"),
        ]
    }

    fn names(quotes: &[Quote]) -> Vec<&str> {
        quotes.iter().map(|q| q.name.as_str()).collect()
    }

    #[test]
    fn none_and_zero_return_everything_sorted() {
        let now = at("2024-06-02T00:00:00");
        let all = filter_quotes(&sample(), None, now, MalformedPolicy::Include);
        let zero = filter_quotes(&sample(), Some(MaxAge::days(0)), now, MalformedPolicy::Include);
        assert_eq!(all, zero);
        assert_eq!(names(&all), ["a", "b", "c", "d"]);
    }

    #[test]
    fn one_day_window_keeps_only_recent() {
        let quotes = vec![quote("old", "2024-01-01T00:00:00"), quote("new", "2024-06-01T00:00:00")];
        let now = at("2024-06-02T00:00:00");
        let result = filter_quotes(&quotes, Some(MaxAge::days(1)), now, MalformedPolicy::Include);
        assert_eq!(names(&result), ["new"]);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let quotes = vec![quote("edge", "2024-06-01T00:00:00"), quote("just-out", "2024-05-31T23:59:59")];
        let now = at("2024-06-02T00:00:00");
        let result = filter_quotes(&quotes, Some(MaxAge::days(1)), now, MalformedPolicy::Include);
        assert_eq!(names(&result), ["edge"]);
    }

    #[test]
    fn malformed_time_follows_policy() {
        let quotes = vec![quote("broken", "not-a-date"), quote("old", "2020-01-01T00:00:00")];
        let now = at("2024-06-02T00:00:00");
        for days in [1, 7, 365] {
            let kept = filter_quotes(&quotes, Some(MaxAge::days(days)), now, MalformedPolicy::Include);
            assert_eq!(names(&kept), ["broken"]);
            let dropped = filter_quotes(&quotes, Some(MaxAge::days(days)), now, MalformedPolicy::Exclude);
            assert!(dropped.is_empty());
        }
    }

    #[test]
    fn malformed_time_kept_without_window_regardless_of_policy() {
        let quotes = vec![quote("broken", "not-a-date")];
        let now = at("2024-06-02T00:00:00");
        let result = filter_quotes(&quotes, None, now, MalformedPolicy::Exclude);
        assert_eq!(names(&result), ["broken"]);
    }

    #[test]
    fn empty_collection_stays_empty() {
        let now = at("2024-06-02T00:00:00");
        for age in [None, Some(MaxAge::days(0)), Some(MaxAge::days(30))] {
            assert!(filter_quotes(&[], age, now, MalformedPolicy::Include).is_empty());
        }
    }

    #[test]
    fn result_is_subset_within_window_and_sorted() {
        let mut quotes = sample();
        quotes.push(quote("junk", "yesterday"));
        let now = at("2024-06-02T00:00:00");
        let days = 80;
        let cutoff = MaxAge::days(days).cutoff(now).unwrap();
        let result = filter_quotes(&quotes, Some(MaxAge::days(days)), now, MalformedPolicy::Include);

        assert!(result.iter().all(|q| quotes.contains(q)));
        assert!(result.iter().all(|q| q.parsed_time().is_none_or(|t| t >= cutoff)));
        assert!(result.windows(2).all(|w| w[0].time <= w[1].time));
        assert_eq!(names(&result), ["b", "c", "d", "junk"]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let now = at("2024-06-02T00:00:00");
        let first = filter_quotes(&sample(), Some(MaxAge::days(30)), now, MalformedPolicy::Include);
        let second = filter_quotes(&sample(), Some(MaxAge::days(30)), now, MalformedPolicy::Include);
        assert_eq!(first, second);
    }

    #[test]
    fn equal_times_keep_insertion_order() {
        let quotes = vec![quote("first", "2024-06-01T10:00:00"), quote("second", "2024-06-01T10:00:00")];
        let result = filter_quotes(&quotes, None, at("2024-06-02T00:00:00"), MalformedPolicy::Include);
        assert_eq!(names(&result), ["first", "second"]);
    }

    #[test]
    fn huge_window_keeps_everything_parsable() {
        let now = at("2024-06-02T00:00:00");
        for days in [5_000_000_000, u64::MAX] {
            let result = filter_quotes(&sample(), Some(MaxAge::days(days)), now, MalformedPolicy::Exclude);
            assert_eq!(result.len(), 4);
        }
    }

    #[test]
    fn negative_max_age_is_rejected() {
        assert!(matches!(MaxAge::try_from(-1), Err(QuoteError::InvalidMaxAge(-1))));
        assert_eq!(MaxAge::try_from(0).unwrap(), MaxAge::days(0));
        assert_eq!(MaxAge::try_from(7).unwrap().as_days(), 7);
        assert_eq!(MaxAge::try_from(5_000_000_000).unwrap().as_days(), 5_000_000_000);
        assert_eq!(MaxAge::try_from(i64::MAX).unwrap().as_days(), i64::MAX as u64);
        assert!(matches!(MaxAge::try_from(i64::MIN), Err(QuoteError::InvalidMaxAge(i64::MIN))));
    }

    #[test]
    fn policy_parses_from_text() {
        assert_eq!("include".parse::<MalformedPolicy>().unwrap(), MalformedPolicy::Include);
        assert_eq!("EXCLUDE".parse::<MalformedPolicy>().unwrap(), MalformedPolicy::Exclude);
        assert_eq!(MalformedPolicy::default().to_string(), "include");
    }
}
