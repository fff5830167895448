//! Russian weekday vocabulary.
//!
//! The skill speaks Russian, so every weekday has a lowercase display name
//! that is also the keyword looked for in utterances. `chrono::Weekday` is
//! the canonical identifier throughout the crate.

use chrono::Weekday;

/// Canonical Monday-to-Sunday order. Every scan for a day name in an
/// utterance walks this array, first match wins.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase Russian name of a weekday, as it appears in user utterances.
pub fn ru_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "понедельник",
        Weekday::Tue => "вторник",
        Weekday::Wed => "среда",
        Weekday::Thu => "четверг",
        Weekday::Fri => "пятница",
        Weekday::Sat => "суббота",
        Weekday::Sun => "воскресенье",
    }
}

/// First Russian weekday name appearing as a substring of `utterance`,
/// scanned in Monday-to-Sunday order. The utterance must already be
/// lowercase.
pub fn find_weekday(utterance: &str) -> Option<Weekday> {
    WEEK.into_iter().find(|&day| utterance.contains(ru_name(day)))
}

/// Which resolution tier produced a day: a relative marker or an explicit
/// day name. Only affects reply phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayReference {
    Today,
    Tomorrow,
    AfterTomorrow,
    Named,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_order_starts_monday() {
        assert_eq!(WEEK[0], Weekday::Mon);
        assert_eq!(WEEK[6], Weekday::Sun);
    }

    #[test]
    fn test_ru_name() {
        assert_eq!(ru_name(Weekday::Mon), "понедельник");
        assert_eq!(ru_name(Weekday::Wed), "среда");
        assert_eq!(ru_name(Weekday::Sun), "воскресенье");
    }

    #[test]
    fn test_find_weekday_substring() {
        assert_eq!(
            find_weekday("расписание на понедельник"),
            Some(Weekday::Mon)
        );
        assert_eq!(find_weekday("что в среду нет среда"), Some(Weekday::Wed));
        assert_eq!(find_weekday("что завтра"), None);
    }

    #[test]
    fn test_find_weekday_first_match_wins() {
        // Both days present: Monday comes first in scan order.
        assert_eq!(
            find_weekday("вторник или понедельник"),
            Some(Weekday::Mon)
        );
    }
}
