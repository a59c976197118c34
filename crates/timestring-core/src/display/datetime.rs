//! Wall-clock display of timestamps.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Shows the time of day of a `Timestamp` in the system time zone, as
/// `HH:MM:SS TZ`. Step timings of a run all fall on the same day, so the date
/// is left out.
pub struct LocalTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        match jiff::fmt::strtime::format("%H:%M:%S %Z", &zoned) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_has_clock_shape() {
        let text = LocalTime(&Timestamp::UNIX_EPOCH).to_string();
        let clock = text.split(' ').next().unwrap();
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.matches(':').count(), 2);
    }
}
