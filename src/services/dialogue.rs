//! Per-request orchestration and reply text.
//!
//! Every incoming utterance takes the same path: run the weekly reset gate,
//! try to interpret the utterance as an edit command, otherwise resolve it
//! to a day and read the schedule back. Nothing here fails; unrecognized
//! input falls through to a hint reply.

use chrono::{NaiveDate, Weekday};

use crate::models::weekday::ru_name;

use super::engine::{EditOutcome, ScheduleEngine};
use super::{interpreter, resolver};

/// Every reply the skill can produce, one variant per outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillReply {
    /// First request of a session: introduce the skill.
    Greeting,
    /// An edit command was applied.
    Edited {
        day: Weekday,
        old_lesson: String,
        new_lesson: String,
    },
    /// An edit command named a lesson the day does not have.
    LessonNotFound { day: Weekday, old_lesson: String },
    /// A day query with at least one lesson scheduled.
    Lessons {
        phrase: String,
        lessons: Vec<String>,
    },
    /// A day query for a day without lessons.
    NoLessons { phrase: String },
    /// No relative marker and no day name found in the utterance.
    DayNotUnderstood,
}

impl SkillReply {
    /// Russian reply text read out by the assistant.
    pub fn text(&self) -> String {
        match self {
            SkillReply::Greeting => "Привет! Я твой помощник с расписанием уроков. \
                Спроси меня: 'расписание на сегодня', 'что завтра' или 'уроки на понедельник'."
                .to_string(),
            SkillReply::Edited {
                day,
                old_lesson,
                new_lesson,
            } => format!(
                "Хорошо, заменила '{}' на '{}' в {}. \
                 Изменение будет действовать до следующего понедельника.",
                old_lesson,
                new_lesson,
                ru_name(*day)
            ),
            SkillReply::LessonNotFound { day, old_lesson } => format!(
                "Не нашла урок '{}' в расписании на {}.",
                old_lesson,
                ru_name(*day)
            ),
            SkillReply::Lessons { phrase, lessons } => {
                format!("Расписание {}:\n{}", phrase, lessons.join("\n"))
            }
            SkillReply::NoLessons { phrase } => format!("В {} уроков нет.", phrase),
            SkillReply::DayNotUnderstood => "Извини, я не поняла, на какой день нужно \
                расписание. Спроси, например, 'расписание на понедельник' или 'что завтра'."
                .to_string(),
        }
    }
}

/// Handle one utterance end to end: reset gate, then edit command or day
/// query. `new_session` short-circuits to the greeting, but only after the
/// reset gate has run; the gate must see every request.
pub fn handle_utterance(
    engine: &ScheduleEngine,
    today: NaiveDate,
    utterance: &str,
    new_session: bool,
) -> SkillReply {
    engine.store().apply_reset(today);

    if new_session {
        return SkillReply::Greeting;
    }

    let command = utterance.to_lowercase();

    if let Some(edit) = interpreter::interpret_command(&command) {
        return match engine.apply_edit(edit.day, &edit.old_lesson, &edit.new_lesson) {
            EditOutcome::Applied { .. } => SkillReply::Edited {
                day: edit.day,
                old_lesson: edit.old_lesson,
                new_lesson: edit.new_lesson,
            },
            EditOutcome::NotFound => SkillReply::LessonNotFound {
                day: edit.day,
                old_lesson: edit.old_lesson,
            },
        };
    }

    match resolver::resolve(&command, today) {
        None => SkillReply::DayNotUnderstood,
        Some(resolved) => {
            let lessons = engine.render(resolved.day);
            let phrase = resolved.phrase();
            if lessons.is_empty() {
                SkillReply::NoLessons { phrase }
            } else {
                SkillReply::Lessons { phrase, lessons }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timetable;
    use crate::store::ChangeStore;
    use std::sync::Arc;

    // 2024-09-04 is a Wednesday.
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 4).unwrap()
    }

    fn engine() -> ScheduleEngine {
        let timetable = Timetable::new()
            .with_day(Weekday::Wed, ["Математика", "Физика"])
            .with_day(Weekday::Mon, ["Математика", "Русский", "Физика"]);
        ScheduleEngine::new(Arc::new(timetable), ChangeStore::new())
    }

    #[test]
    fn test_new_session_greets() {
        let reply = handle_utterance(&engine(), wednesday(), "", true);
        assert_eq!(reply, SkillReply::Greeting);
    }

    #[test]
    fn test_day_query_renders_lessons() {
        let reply = handle_utterance(&engine(), wednesday(), "что сегодня", false);
        assert_eq!(
            reply,
            SkillReply::Lessons {
                phrase: "сегодня".to_string(),
                lessons: vec!["Математика".to_string(), "Физика".to_string()],
            }
        );
        assert!(reply.text().starts_with("Расписание сегодня:\n"));
    }

    #[test]
    fn test_empty_day_is_not_an_error() {
        let reply = handle_utterance(&engine(), wednesday(), "что завтра", false);
        assert_eq!(
            reply,
            SkillReply::NoLessons {
                phrase: "завтра".to_string()
            }
        );
        assert_eq!(reply.text(), "В завтра уроков нет.");
    }

    #[test]
    fn test_unresolvable_day() {
        let reply = handle_utterance(&engine(), wednesday(), "какая погода", false);
        assert_eq!(reply, SkillReply::DayNotUnderstood);
    }

    #[test]
    fn test_malformed_edit_falls_through_to_day_query() {
        // Trigger present but no separator: treated as a plain day query.
        let reply = handle_utterance(
            &engine(),
            wednesday(),
            "замени математику в понедельник",
            false,
        );
        assert!(matches!(reply, SkillReply::Lessons { .. }));
    }

    #[test]
    fn test_edit_reply_text() {
        let reply = handle_utterance(
            &engine(),
            wednesday(),
            "замени математику на физику в понедельник",
            false,
        );
        assert_eq!(
            reply,
            SkillReply::Edited {
                day: Weekday::Mon,
                old_lesson: "математику".to_string(),
                new_lesson: "физику".to_string(),
            }
        );
        assert!(reply.text().contains("до следующего понедельника"));
    }
}
