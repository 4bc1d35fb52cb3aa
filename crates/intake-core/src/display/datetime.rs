//! Date/time display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::Appointment;

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats an appointment slot as `YYYY-MM-DD HH:MM (Zone)`, with
/// placeholders for the parts not picked yet.
pub struct AppointmentSlot<'a>(pub &'a Appointment);

impl<'a> fmt::Display for AppointmentSlot<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.date {
            Some(date) => write!(f, "{}", date.strftime("%Y-%m-%d"))?,
            None => write!(f, "no date")?,
        }
        match self.0.time {
            Some(time) => write!(f, " {}", time.strftime("%H:%M"))?,
            None => write!(f, ", no time")?,
        }
        write!(f, " ({})", self.0.timezone)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    #[test]
    fn test_appointment_slot_format() {
        let booked = Appointment {
            date: Some(date(2026, 11, 3)),
            time: Some(time(14, 30, 0, 0)),
            timezone: "Europe/Berlin".to_string(),
        };
        assert_eq!(
            AppointmentSlot(&booked).to_string(),
            "2026-11-03 14:30 (Europe/Berlin)"
        );

        let empty = Appointment {
            timezone: "UTC".to_string(),
            ..Appointment::default()
        };
        assert_eq!(AppointmentSlot(&empty).to_string(), "no date, no time (UTC)");
    }
}
