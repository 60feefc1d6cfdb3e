//! Rule-based date recognition with a future bias.
//!
//! Recognizes absolute dates (ISO, US slash, day-month and month-day with
//! English month names) and a small vocabulary of relative phrases
//! ("tomorrow", "next week", "in 3 days", "friday"). Relative phrases keep
//! the reference time of day; absolute dates resolve to midnight.

use std::sync::LazyLock;

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::{Captures, Regex};

use crate::capability::{DateMatch, DateParser};
use crate::error::CapabilityResult;

const MONTHS: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

static RE_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").unwrap());

static RE_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap());

static RE_DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTHS})\b(?:,?\s+(\d{{4}}))?"
    ))
    .unwrap()
});

static RE_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({MONTHS})\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(\d{{4}}))?"
    ))
    .unwrap()
});

static RE_IN_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bin\s+(\d{1,3})\s+(hours?|days?|weeks?)\b").unwrap()
});

static RE_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:next|this|on|by)\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
    )
    .unwrap()
});

static RE_NAMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(day after tomorrow|today|tonight|tomorrow|next week|next month)\b").unwrap()
});

/// Whole-text formats accepted by `parse_whole`.
const WHOLE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
];

const WHOLE_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Default `DateParser` backed by regex rules and `chrono` arithmetic.
#[derive(Debug, Clone, Default)]
pub struct RuleDateParser {
    reference: Option<NaiveDateTime>,
}

impl RuleDateParser {
    /// Resolve relative phrases against the local wall clock.
    pub fn new() -> Self {
        Self { reference: None }
    }

    /// Resolve relative phrases against a fixed instant.
    pub fn with_reference(reference: NaiveDateTime) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    fn now(&self) -> NaiveDateTime {
        self.reference.unwrap_or_else(|| Local::now().naive_local())
    }

    fn scan(&self, text: &str) -> Vec<(usize, usize, NaiveDateTime)> {
        let now = self.now();
        let mut found = Vec::new();

        collect(&mut found, &RE_ISO, text, |c| {
            absolute(num(&c[1])?, num(&c[2])?, num(&c[3])?)
        });
        collect(&mut found, &RE_SLASH, text, |c| {
            absolute(num(&c[3])?, num(&c[1])?, num(&c[2])?)
        });
        collect(&mut found, &RE_DAY_MONTH, text, |c| {
            let day = num(&c[1])?;
            let month = month_number(&c[2])?;
            dated(now, c.get(3).map(|m| m.as_str()), month, day)
        });
        collect(&mut found, &RE_MONTH_DAY, text, |c| {
            let month = month_number(&c[1])?;
            let day = num(&c[2])?;
            dated(now, c.get(3).map(|m| m.as_str()), month, day)
        });
        collect(&mut found, &RE_IN_SPAN, text, |c| {
            let n: i64 = c[1].parse().ok()?;
            let unit = c[2].to_lowercase();
            let span = if unit.starts_with("hour") {
                Duration::hours(n)
            } else if unit.starts_with("week") {
                Duration::weeks(n)
            } else {
                Duration::days(n)
            };
            now.checked_add_signed(span)
        });
        collect(&mut found, &RE_WEEKDAY, text, |c| {
            let target: Weekday = c[1].parse().ok()?;
            next_weekday(now, target)
        });
        collect(&mut found, &RE_NAMED, text, |c| {
            match c[1].to_lowercase().as_str() {
                "today" => Some(now),
                "tonight" => Some(now.date().and_time(NaiveTime::from_hms_opt(23, 59, 0)?)),
                "tomorrow" => now.checked_add_signed(Duration::days(1)),
                "day after tomorrow" => now.checked_add_signed(Duration::days(2)),
                "next week" => now.checked_add_signed(Duration::weeks(1)),
                "next month" => now.checked_add_months(Months::new(1)),
                _ => None,
            }
        });

        found.sort_by_key(|(start, end, _)| (*start, std::cmp::Reverse(*end)));

        // Drop phrases nested inside (or overlapping) an earlier, longer one.
        let mut accepted: Vec<(usize, usize, NaiveDateTime)> = Vec::new();
        for hit in found {
            if accepted.last().is_some_and(|prev| hit.0 < prev.1) {
                continue;
            }
            accepted.push(hit);
        }
        accepted
    }
}

impl DateParser for RuleDateParser {
    fn find_dates(&self, text: &str) -> CapabilityResult<Vec<DateMatch>> {
        Ok(self
            .scan(text)
            .into_iter()
            .map(|(start, end, at)| DateMatch {
                phrase: text[start..end].to_string(),
                at,
            })
            .collect())
    }

    fn parse_whole(&self, text: &str) -> CapabilityResult<Option<NaiveDateTime>> {
        let text = text.trim();
        for fmt in WHOLE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
                return Ok(Some(dt));
            }
        }
        for fmt in WHOLE_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
                return Ok(Some(date.and_time(NaiveTime::MIN)));
            }
        }
        Ok(None)
    }
}

/// Run `re` over `text`, resolving each match with `resolve`.
fn collect<F>(out: &mut Vec<(usize, usize, NaiveDateTime)>, re: &Regex, text: &str, resolve: F)
where
    F: Fn(&Captures<'_>) -> Option<NaiveDateTime>,
{
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if let Some(at) = resolve(&caps) {
            out.push((whole.start(), whole.end(), at));
        }
    }
}

fn num<T: std::str::FromStr>(s: &str) -> Option<T> {
    s.parse().ok()
}

fn absolute(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}

/// Absolute date with an optional year; a yearless date already past rolls forward.
fn dated(now: NaiveDateTime, year: Option<&str>, month: u32, day: u32) -> Option<NaiveDateTime> {
    if let Some(year) = year {
        return absolute(num(year)?, month, day);
    }
    let this_year = absolute(now.year(), month, day)?;
    if this_year.date() < now.date() {
        absolute(now.year() + 1, month, day)
    } else {
        Some(this_year)
    }
}

/// Next occurrence of `target` strictly after the reference day.
fn next_weekday(now: NaiveDateTime, target: Weekday) -> Option<NaiveDateTime> {
    let today = now.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;
    let mut ahead = (wanted - today).rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }
    now.checked_add_signed(Duration::days(ahead))
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monday 2026-10-19 10:30:00.
    fn parser() -> RuleDateParser {
        let reference = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        RuleDateParser::with_reference(reference)
    }

    fn first(text: &str) -> Option<String> {
        parser()
            .find_dates(text)
            .unwrap()
            .into_iter()
            .next()
            .map(|m| m.at.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    #[test]
    fn tomorrow_keeps_time_of_day() {
        assert_eq!(
            first("due tomorrow").as_deref(),
            Some("2026-10-20T10:30:00")
        );
    }

    #[test]
    fn tonight_is_end_of_today() {
        assert_eq!(
            first("need this tonight").as_deref(),
            Some("2026-10-19T23:59:00")
        );
    }

    #[test]
    fn next_week_adds_seven_days() {
        assert_eq!(
            first("due next week").as_deref(),
            Some("2026-10-26T10:30:00")
        );
    }

    #[test]
    fn day_after_tomorrow_beats_tomorrow() {
        let matches = parser().find_dates("by the day after tomorrow").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].phrase, "day after tomorrow");
    }

    #[test]
    fn in_n_days() {
        assert_eq!(
            first("finish in 3 days").as_deref(),
            Some("2026-10-22T10:30:00")
        );
        assert_eq!(
            first("in 2 weeks please").as_deref(),
            Some("2026-11-02T10:30:00")
        );
    }

    #[test]
    fn weekday_is_strictly_in_the_future() {
        assert_eq!(
            first("submit by friday").as_deref(),
            Some("2026-10-23T10:30:00")
        );
        assert_eq!(first("on Monday").as_deref(), Some("2026-10-26T10:30:00"));
    }

    #[test]
    fn iso_date_is_midnight() {
        assert_eq!(
            first("deadline 2026-11-05").as_deref(),
            Some("2026-11-05T00:00:00")
        );
    }

    #[test]
    fn slash_date_is_month_first() {
        assert_eq!(
            first("due 12/01/2026").as_deref(),
            Some("2026-12-01T00:00:00")
        );
    }

    #[test]
    fn yearless_past_date_rolls_to_next_year() {
        assert_eq!(first("by 15 March").as_deref(), Some("2027-03-15T00:00:00"));
        assert_eq!(
            first("December 3rd").as_deref(),
            Some("2026-12-03T00:00:00")
        );
    }

    #[test]
    fn explicit_year_is_respected() {
        assert_eq!(
            first("on 4 July 2025").as_deref(),
            Some("2025-07-04T00:00:00")
        );
    }

    #[test]
    fn invalid_calendar_date_is_skipped() {
        assert!(first("Feb 30").is_none());
    }

    #[test]
    fn earliest_phrase_wins() {
        assert_eq!(
            first("tomorrow or 2026-12-01 at the latest").as_deref(),
            Some("2026-10-20T10:30:00")
        );
    }

    #[test]
    fn page_counts_are_not_dates() {
        assert!(parser().find_dates("a 6 page report").unwrap().is_empty());
        assert!(parser().find_dates("hello there").unwrap().is_empty());
    }

    #[test]
    fn parse_whole_accepts_month_names() {
        let dt = parser().parse_whole("  March 5, 2027 ").unwrap().unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2027-03-05");
    }

    #[test]
    fn parse_whole_rejects_sentences() {
        assert!(parser().parse_whole("write me an essay").unwrap().is_none());
    }
}
