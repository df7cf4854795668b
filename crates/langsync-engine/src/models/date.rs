use std::fmt;

/// Publish date of a post as written in its front matter.
///
/// The zone offset only carries whole hours. Two dates are equal only when
/// every field is equal, so `10:00:00 +0100` and `09:00:00 +0000` differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateValue {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub zone_hours: i8,
}

impl fmt::Display for DateValue {
    /// Renders the same fixed layout the date parser accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.zone_hours < 0 { '-' } else { '+' };
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} {}{:02}00",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            sign,
            self.zone_hours.unsigned_abs()
        )
    }
}
