#[cfg(test)]
mod tests;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt::Display;

// unfortunately, due to rustfmt not having the blank_lines_upper_bound feature
// stable yet, we gotta put comments in between the different sections. otherwise
// its just too much

//

/// Renders a float the way it is put on the wire, with exactly 4 decimals
///
/// The device splits every command at whitespace and parses the fields by
/// position, so a value must never contain a space or an exponent.
/// Negative zero is written as `0.0000`, NaN as `nan` and infinities as `inf`
/// and `-inf`.
///
/// # Examples
/// ```
/// # use odrive_ascii_driver::Fixed4;
/// assert_eq!(Fixed4(2.5).to_string(), "2.5000");
/// assert_eq!(Fixed4(-0.1).to_string(), "-0.1000");
/// assert_eq!(Fixed4(-0.0).to_string(), "0.0000");
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Fixed4(pub f32);

impl Display for Fixed4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("nan")
        } else if v == 0.0 {
            // also catches -0.0
            f.write_str("0.0000")
        } else {
            // {:.4} already prints inf and -inf
            write!(f, "{:.4}", v)
        }
    }
}

impl From<f32> for Fixed4 {
    fn from(v: f32) -> Self {
        Fixed4(v)
    }
}

//

/// Binding for the values of `axis<n>.requested_state` and `axis<n>.current_state`
///
/// The driver itself only ever looks for [`AxisState::Idle`], every other state
/// is passed through as is. Codes which aren't listed here (newer firmware might
/// add some) can still be sent as plain `i32`s, see [`Driver::run_state`][crate::Driver::run_state].
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, FromPrimitive)]
pub enum AxisState {
    Undefined = 0,
    Idle = 1,
    StartupSequence = 2,
    FullCalibrationSequence = 3,
    MotorCalibration = 4,
    EncoderIndexSearch = 6,
    EncoderOffsetCalibration = 7,
    ClosedLoopControl = 8,
    LockinSpin = 9,
    EncoderDirFind = 10,
    Homing = 11,
    EncoderHallPolarityCalibration = 12,
    EncoderHallPhaseCalibration = 13,
}

impl AxisState {
    /// Returns the state with the given code, or `None` if the code is unknown
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_i32(code)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

impl Display for AxisState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as i32)
    }
}

impl From<AxisState> for i32 {
    fn from(s: AxisState) -> Self {
        s as i32
    }
}
