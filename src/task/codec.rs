//! Store encoding for tasks
//!
//! Canonical form is `name,M/D/YYYY,H:MM`: the minute is zero-padded to two
//! digits, nothing else is padded. Older files used a space between date and
//! time (`name,M/D/YYYY H:MM`); those still decode, but are always written
//! back in canonical form.

use super::item::Task;
use super::timestamp::Timestamp;
use crate::error::RecordError;
use crate::record::Record;
use std::str::FromStr;

impl Record for Task {
    fn encode(&self) -> String {
        let due = self.due();
        format!("{},{},{}", self.name(), due.encode_date(), due.encode_time())
    }

    fn decode(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(',').collect();
        let (name, date, time) = match fields.as_slice() {
            [name, date, time] => (*name, *date, *time),
            [name, date_time] => {
                let (date, time) = date_time
                    .trim()
                    .split_once(' ')
                    .ok_or(RecordError::MissingField("due time"))?;
                (*name, date, time)
            }
            [_] => return Err(RecordError::MissingField("due date")),
            [.., date, time] => {
                // A well-formed date and time at the end means the extra
                // comma sits inside the name; otherwise the tail is garbage
                return Err(match parse_due(date.trim(), time.trim()) {
                    Ok(_) => RecordError::UnexpectedComma,
                    Err(_) => RecordError::BadShape {
                        expected: "name,M/D/YYYY,H:MM",
                        found: line.to_string(),
                    },
                });
            }
            [] => return Err(RecordError::MissingField("name")),
        };

        if name.is_empty() {
            return Err(RecordError::MissingField("name"));
        }

        let due = parse_due(date.trim(), time.trim())?;
        Task::new(name, due).map_err(|_| RecordError::BadShape {
            expected: "a single-line name",
            found: name.to_string(),
        })
    }
}

fn parse_due(date: &str, time: &str) -> Result<Timestamp, RecordError> {
    let [month, day, year] = split_exact(date, '/', "M/D/YYYY")?;
    let [hour, minute] = split_exact(time, ':', "H:MM")?;

    Ok(Timestamp::new(
        parse_number("year", year)?,
        parse_number("month", month)?,
        parse_number("day", day)?,
        parse_number("hour", hour)?,
        parse_number("minute", minute)?,
    ))
}

fn split_exact<'a, const N: usize>(
    text: &'a str,
    separator: char,
    expected: &'static str,
) -> Result<[&'a str; N], RecordError> {
    let parts: Vec<&str> = text.split(separator).collect();
    parts.try_into().map_err(|_| RecordError::BadShape {
        expected,
        found: text.to_string(),
    })
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, RecordError> {
    value.trim().parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
