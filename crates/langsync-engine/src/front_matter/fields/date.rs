use std::path::Path;

use crate::error::FatalError;
use crate::front_matter::cursor::Cursor;
use crate::models::{DateValue, FieldName};

use super::take_line;

const DATE_LEN: usize = 10;
const TIME_LEN: usize = 8;
const ZONE_LEN: usize = 5;

/// Parses `YYYY-MM-DD HH:MM:SS ±HHMM`.
///
/// Only the zone hours are read; the two trailing zone bytes are accepted
/// as they are. Day is checked against 1..=31 without regard to the month.
pub fn parse_date(cur: &mut Cursor<'_>, path: &Path) -> Result<DateValue, FatalError> {
    let (line, eol) = take_line(cur);
    let date = date_literal(line)
        .map_err(|reason| FatalError::malformed(path, FieldName::Date, line, reason))?;
    cur.jump_to(eol);
    Ok(date)
}

fn date_literal(line: &[u8]) -> Result<DateValue, &'static str> {
    let parts: Vec<&[u8]> = line.split(|&b| b == b' ').collect();
    let &[date, time, zone] = parts.as_slice() else {
        return Err("expected `YYYY-MM-DD HH:MM:SS +ZZZZ`");
    };
    if date.len() != DATE_LEN {
        return Err("date part is invalid");
    }
    if time.len() != TIME_LEN {
        return Err("time part is invalid");
    }
    if zone.len() != ZONE_LEN {
        return Err("timezone part is invalid");
    }

    let [year, month, day] = fields::<3>(date, b'-', [4, 2, 2]).ok_or("date part is invalid")?;
    let [hour, minute, second] =
        fields::<3>(time, b':', [2, 2, 2]).ok_or("time part is invalid")?;

    let sign: i8 = match zone[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err("timezone must start with `+` or `-`"),
    };
    let zone_hours = number(&zone[1..3]).ok_or("timezone part is invalid")?;
    if zone_hours > 24 {
        return Err("timezone out of range");
    }

    if !(1..=9999).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err("date part out of range");
    }
    if hour > 23 || minute > 59 || second > 59 {
        return Err("time part out of range");
    }

    Ok(DateValue {
        year: year as u16,
        month: month as u8,
        day: day as u8,
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
        zone_hours: sign * zone_hours as i8,
    })
}

/// Splits `part` on `sep` into exactly `N` all-digit fields of the given
/// widths.
fn fields<const N: usize>(part: &[u8], sep: u8, widths: [usize; N]) -> Option<[u32; N]> {
    let mut out = [0; N];
    let mut pieces = part.split(|&b| b == sep);
    for (slot, width) in out.iter_mut().zip(widths) {
        let piece = pieces.next()?;
        if piece.len() != width {
            return None;
        }
        *slot = number(piece)?;
    }
    if pieces.next().is_some() {
        return None;
    }
    Some(out)
}

/// Parses a run of ASCII digits. Signs and other characters are rejected.
fn number(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(
        digits
            .iter()
            .fold(0, |acc, d| acc * 10 + u32::from(d - b'0')),
    )
}
