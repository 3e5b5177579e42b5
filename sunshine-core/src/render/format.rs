//! Text formatting for the face
//!
//! All output is built in fixed-capacity strings so a frame never
//! allocates.

use core::fmt::Write;

use heapless::String;
use jiff::civil::DateTime;

use crate::config::TemperatureFormat;

pub type TimeText = String<8>;
pub type DateText = String<16>;
pub type TemperatureText = String<32>;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `H:MM:SS` while interactive, `H:MM` in ambient
pub fn format_time(now: &DateTime, ambient: bool) -> TimeText {
    let mut out = TimeText::new();
    let _ = if ambient {
        write!(out, "{}:{:02}", now.hour(), now.minute())
    } else {
        write!(out, "{}:{:02}:{:02}", now.hour(), now.minute(), now.second())
    };
    out
}

/// Short weekday, short month, zero-padded day and year: `Fri,Oct 16 2026`
pub fn format_date(now: &DateTime) -> DateText {
    let weekday = WEEKDAYS[now.weekday().to_monday_zero_offset() as usize];
    let month = MONTHS[(now.month() - 1) as usize];

    let mut out = DateText::new();
    let _ = write!(
        out,
        "{},{} {:02} {:04}",
        weekday,
        month,
        now.day(),
        now.year()
    );
    out
}

/// Temperature rounded half away from zero to the configured decimals,
/// followed by the suffix
///
/// Non-finite values, and values too long to print with their suffix,
/// render as `--`.
pub fn format_temperature(value: f64, format: &TemperatureFormat) -> TemperatureText {
    let decimals = format.decimals as usize;
    let scale = libm::pow(10.0, decimals as f64);
    let mut rounded = libm::round(value * scale) / scale;
    if rounded == 0.0 {
        // No "-0°"
        rounded = 0.0;
    }

    let mut out = TemperatureText::new();
    let printed = rounded.is_finite()
        && write!(out, "{:.*}", decimals, rounded).is_ok()
        && out.push_str(&format.suffix).is_ok();
    if !printed {
        out.clear();
        let _ = out.push_str("--");
        let _ = out.push_str(&format.suffix);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_time_interactive_and_ambient() {
        let now = date(2026, 10, 16).at(9, 5, 3, 0);
        assert_eq!(format_time(&now, false).as_str(), "9:05:03");
        assert_eq!(format_time(&now, true).as_str(), "9:05");
    }

    #[test]
    fn test_time_two_digit_hour() {
        let now = date(2026, 10, 16).at(23, 59, 0, 0);
        assert_eq!(format_time(&now, false).as_str(), "23:59:00");
        let midnight = date(2026, 10, 16).at(0, 0, 9, 0);
        assert_eq!(format_time(&midnight, true).as_str(), "0:00");
    }

    #[test]
    fn test_date() {
        let now = date(2026, 10, 16).at(12, 0, 0, 0);
        assert_eq!(format_date(&now).as_str(), "Fri,Oct 16 2026");
        let now = date(2027, 1, 4).at(0, 0, 0, 0);
        assert_eq!(format_date(&now).as_str(), "Mon,Jan 04 2027");
    }

    #[test]
    fn test_temperature_default_format() {
        let format = TemperatureFormat::default();
        assert_eq!(format_temperature(72.0, &format).as_str(), "72°");
        assert_eq!(format_temperature(72.5, &format).as_str(), "73°");
        assert_eq!(format_temperature(72.4, &format).as_str(), "72°");
        assert_eq!(format_temperature(-3.5, &format).as_str(), "-4°");
        assert_eq!(format_temperature(-0.4, &format).as_str(), "0°");
        assert_eq!(format_temperature(0.0, &format).as_str(), "0°");
    }

    #[test]
    fn test_temperature_decimals() {
        let format = TemperatureFormat::new(1, "°C").unwrap();
        assert_eq!(format_temperature(21.25, &format).as_str(), "21.3°C");
        assert_eq!(format_temperature(-7.0, &format).as_str(), "-7.0°C");
    }

    #[test]
    fn test_temperature_unprintable() {
        let format = TemperatureFormat::default();
        assert_eq!(format_temperature(f64::NAN, &format).as_str(), "--°");
        assert_eq!(format_temperature(1e300, &format).as_str(), "--°");
    }

    #[test]
    fn test_temperature_suffix_never_truncated() {
        let format = TemperatureFormat::default();
        // 31 digits fit on their own, but not with the suffix
        assert_eq!(format_temperature(1e30, &format).as_str(), "--°");

        let format = TemperatureFormat::new(3, "degreesF").unwrap();
        assert_eq!(format_temperature(1e25, &format).as_str(), "--degreesF");
        assert_eq!(format_temperature(-12.5, &format).as_str(), "-12.500degreesF");
    }
}
