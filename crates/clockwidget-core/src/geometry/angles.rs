use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Hand angles in degrees, all in `[0, 360)`.
///
/// Each value carries the fractional contribution of the smaller units so
/// hand motion stays continuous at display refresh rate: the second hand
/// advances with the milliseconds, the minute hand with the seconds, and
/// the hour hand with the minutes. No integer snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

impl HandAngles {
    /// Compute the three hand angles for a time of day.
    pub fn at(time: NaiveTime) -> Self {
        let ms = f64::from(time.nanosecond() / 1_000_000 % 1000);
        let seconds = f64::from(time.second()) + ms / 1000.0;
        let minutes = f64::from(time.minute()) + seconds / 60.0;
        let hours = f64::from(time.hour() % 12) + minutes / 60.0;

        Self {
            hour_deg: 30.0 * hours,
            minute_deg: 6.0 * minutes,
            second_deg: 6.0 * seconds,
        }
    }
}
