//! Line to event.

use chrono::NaiveDateTime;

use super::{ESCAPE, FIELD_COUNT, SEPARATOR};
use crate::error::CodecError;
use crate::event::{Category, Event, EventId};

/// Accepted start-time layouts, tried in order. Older files omit the seconds.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Decode one data-file line into an event with the given id.
///
/// The id stored in the line is ignored; ids follow file position so they
/// stay dense after lines are removed or rejected.
pub fn decode(line: &str, id: EventId) -> Result<Event, CodecError> {
    let fields = split_fields(line);
    let [_stored_id, name, address, category, start, description, duration]: [String; FIELD_COUNT] =
        fields
            .try_into()
            .map_err(|fields: Vec<String>| CodecError::FieldCount(fields.len()))?;

    let category = Category::from_name(&category)
        .ok_or_else(|| CodecError::UnknownCategory(category.clone()))?;
    let start = parse_datetime(&start)?;
    let duration_hours = duration
        .parse::<u32>()
        .map_err(|_| CodecError::InvalidDuration(duration.clone()))?;

    Ok(Event {
        id,
        name,
        address,
        category,
        start,
        description,
        duration_hours,
    })
}

/// Split on unescaped separators, unescaping `\|` and `\\` as it goes.
/// A backslash before any other character is kept as written.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.peek() {
                Some(&next) if next == SEPARATOR || next == ESCAPE => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push(ESCAPE),
            },
            SEPARATOR => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, CodecError> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .ok_or_else(|| CodecError::InvalidDateTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use chrono::NaiveDate;

    fn jan_first(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn event(name: &str, address: &str, description: &str) -> Event {
        Event {
            id: EventId(1),
            name: name.to_string(),
            address: address.to_string(),
            category: Category::Cultural,
            start: jan_first(10, 0),
            description: description.to_string(),
            duration_hours: 2,
        }
    }

    #[test]
    fn decodes_a_plain_line() {
        let e = decode("9|Fair|Park|PARTY|2024-01-01T10:00:00|Food|3", EventId(2)).unwrap();

        assert_eq!(e.id, EventId(2));
        assert_eq!(e.name, "Fair");
        assert_eq!(e.address, "Park");
        assert_eq!(e.category, Category::Party);
        assert_eq!(e.start, jan_first(10, 0));
        assert_eq!(e.description, "Food");
        assert_eq!(e.duration_hours, 3);
    }

    #[test]
    fn round_trips_text_with_pipes_and_backslashes() {
        let original = event("A|B", r"C:\venue|hall", r"a|b\c");
        let decoded = decode(&encode(&original), original.id).unwrap();
        assert_eq!(decoded, original);

        let double = event("x", "y", r"a|b\\c");
        assert_eq!(decode(&encode(&double), double.id).unwrap(), double);
    }

    #[test]
    fn round_trips_trailing_backslash_and_empty_fields() {
        let original = event("", "", r"ends with \");
        assert_eq!(decode(&encode(&original), original.id).unwrap(), original);
    }

    #[test]
    fn accepts_minute_precision_timestamps() {
        let e = decode("1|Fair|Park|SHOW|2024-01-01T10:30|Food|2", EventId(1)).unwrap();
        assert_eq!(e.start, jan_first(10, 30));
    }

    #[test]
    fn accepts_legacy_category_names() {
        let e = decode("1|Run|Beach|ESPORTIVO|2024-01-01T10:00|5k|1", EventId(1)).unwrap();
        assert_eq!(e.category, Category::Sports);
    }

    #[test]
    fn keeps_backslash_before_ordinary_characters() {
        let e = decode(r"1|a\nb|Park|SHOW|2024-01-01T10:00|x|2", EventId(1)).unwrap();
        assert_eq!(e.name, r"a\nb");
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            decode("1|Fair|Park|SHOW|2024-01-01T10:00|Food", EventId(1)),
            Err(CodecError::FieldCount(6))
        );
        assert_eq!(
            decode("1|Fair|Park|SHOW|2024-01-01T10:00|Food|2|extra", EventId(1)),
            Err(CodecError::FieldCount(8))
        );
        assert_eq!(decode("", EventId(1)), Err(CodecError::FieldCount(1)));
    }

    #[test]
    fn escaped_pipe_does_not_split() {
        assert_eq!(
            decode(r"1|Fair\|Park|SHOW|2024-01-01T10:00|Food|2", EventId(1)),
            Err(CodecError::FieldCount(6))
        );
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert_eq!(
            decode("1|Fair|Park|KARAOKE|2024-01-01T10:00|Food|2", EventId(1)),
            Err(CodecError::UnknownCategory("KARAOKE".to_string()))
        );
        assert!(decode("1|Fair|Park|show|2024-01-01T10:00|Food|2", EventId(1)).is_err());
    }

    #[test]
    fn bad_date_or_duration_is_an_error() {
        assert_eq!(
            decode("1|Fair|Park|SHOW|01/01/2024 10:00|Food|2", EventId(1)),
            Err(CodecError::InvalidDateTime("01/01/2024 10:00".to_string()))
        );
        assert_eq!(
            decode("1|Fair|Park|SHOW|2024-01-01T10:00|Food|two", EventId(1)),
            Err(CodecError::InvalidDuration("two".to_string()))
        );
        assert_eq!(
            decode("1|Fair|Park|SHOW|2024-01-01T10:00|Food|-1", EventId(1)),
            Err(CodecError::InvalidDuration("-1".to_string()))
        );
    }
}
