//! Day resolution for free-text queries.
//!
//! An utterance is matched against an ordered rule table: relative markers
//! ("сегодня", "завтра", "послезавтра") in priority order, then a scan for
//! an explicit weekday name. The order is a deliberate tie-break: an
//! utterance containing both "сегодня" and a day name resolves via
//! "сегодня".

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::weekday::{find_weekday, ru_name, DayReference, WEEK};

/// Outcome of day resolution: the canonical day plus which rule produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDay {
    pub day: Weekday,
    pub reference: DayReference,
}

impl ResolvedDay {
    /// Phrase used when reading the schedule back ("сегодня", "завтра",
    /// "в понедельник").
    pub fn phrase(&self) -> String {
        match self.reference {
            DayReference::Today => "сегодня".to_string(),
            DayReference::Tomorrow => "завтра".to_string(),
            DayReference::AfterTomorrow => "послезавтра".to_string(),
            DayReference::Named => format!("в {}", ru_name(self.day)),
        }
    }
}

/// Relative-day rules, checked in priority order before any explicit day
/// name: (keywords, offset in days from today, reference for phrasing).
const RELATIVE_RULES: &[(&[&str], u32, DayReference)] = &[
    (&["сегодня", "сейчас"], 0, DayReference::Today),
    (&["завтра"], 1, DayReference::Tomorrow),
    (&["послезавтра"], 2, DayReference::AfterTomorrow),
];

/// Resolve an utterance to a weekday, or `None` when no rule matches.
/// Pure function of the utterance and `today`.
pub fn resolve(utterance: &str, today: NaiveDate) -> Option<ResolvedDay> {
    let utterance = utterance.to_lowercase();
    for (keywords, offset, reference) in RELATIVE_RULES {
        if keywords.iter().any(|kw| utterance.contains(kw)) {
            let index = (today.weekday().num_days_from_monday() + offset) % 7;
            return Some(ResolvedDay {
                day: WEEK[index as usize],
                reference: *reference,
            });
        }
    }
    find_weekday(&utterance).map(|day| ResolvedDay {
        day,
        reference: DayReference::Named,
    })
}

/// Resolve an utterance to just the weekday.
pub fn resolve_day(utterance: &str, today: NaiveDate) -> Option<Weekday> {
    resolve(utterance, today).map(|resolved| resolved.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-09-04 is a Wednesday.
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 4).unwrap()
    }

    #[test]
    fn test_resolve_today() {
        let resolved = resolve("что сегодня", wednesday()).unwrap();
        assert_eq!(resolved.day, Weekday::Wed);
        assert_eq!(resolved.reference, DayReference::Today);
        assert_eq!(resolved.phrase(), "сегодня");
    }

    #[test]
    fn test_resolve_now_keyword() {
        assert_eq!(resolve_day("что сейчас", wednesday()), Some(Weekday::Wed));
    }

    #[test]
    fn test_resolve_tomorrow() {
        let resolved = resolve("что завтра", wednesday()).unwrap();
        assert_eq!(resolved.day, Weekday::Thu);
        assert_eq!(resolved.reference, DayReference::Tomorrow);
    }

    #[test]
    fn test_resolve_tomorrow_wraps_week() {
        // Sunday + 1 wraps to Monday.
        let sunday = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        assert_eq!(resolve_day("что завтра", sunday), Some(Weekday::Mon));
    }

    #[test]
    fn test_resolve_named_day() {
        let resolved = resolve("расписание пятница", wednesday()).unwrap();
        assert_eq!(resolved.day, Weekday::Fri);
        assert_eq!(resolved.reference, DayReference::Named);
        assert_eq!(resolved.phrase(), "в пятница");
    }

    #[test]
    fn test_relative_marker_beats_named_day() {
        // "сегодня" wins over the explicit day name.
        let resolved = resolve("сегодня или в понедельник", wednesday()).unwrap();
        assert_eq!(resolved.day, Weekday::Wed);
        assert_eq!(resolved.reference, DayReference::Today);
    }

    #[test]
    fn test_unresolvable() {
        assert_eq!(resolve_day("какая погода", wednesday()), None);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve_day("Что Сегодня", wednesday()), Some(Weekday::Wed));
    }
}
