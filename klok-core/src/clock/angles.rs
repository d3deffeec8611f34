use chrono::Timelike;

use crate::theme::layer::Layer;

/// Hand rotation angles in degrees, derived from one wall-clock reading.
///
/// Angles are measured clockwise from the logical artwork's rest position
/// (hands pointing at 3 o'clock before the fixed −90° base rotation). The
/// second component carries fractional nanoseconds, so all three angles move
/// continuously rather than jumping once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    /// Hour hand angle in degrees.
    pub hour_deg: f64,
    /// Minute hand angle in degrees.
    pub minute_deg: f64,
    /// Second hand angle in degrees.
    pub second_deg: f64,
}

impl HandAngles {
    /// Derive angles from clock components; `second` includes the
    /// fractional part.
    pub fn from_clock(hour: u32, minute: u32, second: f64) -> Self {
        let hour = f64::from(hour % 12);
        let minute = f64::from(minute);
        Self {
            hour_deg: hour * 30.0 + minute * 0.5 + second * (0.5 / 60.0),
            minute_deg: minute * 6.0 + second * 0.1,
            second_deg: second * 6.0,
        }
    }

    /// Read the current local time down to nanoseconds.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        // chrono folds leap seconds into nanosecond values >= 1e9; clamp so
        // the second hand never overshoots a full tick.
        let nanos = now.nanosecond().min(999_999_999);
        let second = f64::from(now.second()) + f64::from(nanos) / 1e9;
        Self::from_clock(now.hour(), now.minute(), second)
    }

    /// Rotation for a hand or hand-shadow layer; `None` for static layers.
    pub fn for_layer(self, layer: Layer) -> Option<f64> {
        match layer {
            Layer::HourHand | Layer::HourHandShadow => Some(self.hour_deg),
            Layer::MinuteHand | Layer::MinuteHandShadow => Some(self.minute_deg),
            Layer::SecondHand | Layer::SecondHandShadow => Some(self.second_deg),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/angles.rs"]
mod tests;
