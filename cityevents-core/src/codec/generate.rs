//! Event to line.

use super::{DATETIME_FORMAT, ESCAPE, SEPARATOR};
use crate::event::Event;

/// Encode an event as one data-file line (without the trailing newline).
pub fn encode(event: &Event) -> String {
    let fields = [
        event.id.to_string(),
        escape(&event.name),
        escape(&event.address),
        event.category.name().to_string(),
        event.start.format(DATETIME_FORMAT).to_string(),
        escape(&event.description),
        event.duration_hours.to_string(),
    ];

    fields.join("|")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == SEPARATOR || c == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, EventId};
    use chrono::NaiveDate;

    fn event() -> Event {
        Event {
            id: EventId(4),
            name: "Jazz night".to_string(),
            address: "Rua A, 10".to_string(),
            category: Category::Show,
            start: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            description: "Live band".to_string(),
            duration_hours: 2,
        }
    }

    #[test]
    fn encodes_seven_fields() {
        assert_eq!(
            encode(&event()),
            "4|Jazz night|Rua A, 10|SHOW|2024-01-01T10:00:00|Live band|2"
        );
    }

    #[test]
    fn escapes_pipes_in_every_text_field() {
        let mut e = event();
        e.name = "A|B".to_string();
        e.address = "x|y".to_string();
        e.description = "one|two".to_string();

        assert_eq!(
            encode(&e),
            r"4|A\|B|x\|y|SHOW|2024-01-01T10:00:00|one\|two|2"
        );
    }

    #[test]
    fn escapes_backslashes() {
        let mut e = event();
        e.description = r"a|b\c".to_string();

        assert!(encode(&e).contains(r"|a\|b\\c|"));
    }
}
