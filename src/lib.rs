//! Rust driver for ODrive motor controllers using the ASCII protocol over a
//! serial connection (USB CDC or UART).
//!
//! For more information see the [ASCII protocol docs](https://docs.odriverobotics.com/v/0.5.6/ascii-protocol.html)
//!
//! # Usage
//! A [`Driver`] borrows an interface, usually a serialport, and sends every
//! command as a single line of text. Commands that set something (e.g.
//! [`Driver::set_position`]) return right after sending, commands that get
//! something (e.g. [`Driver::get_position`]) wait up to one second for the
//! answer of the device. [`Driver::run_state`] requests a state for an axis and
//! can wait for the axis to become idle again, which is how calibration is
//! usually done.
//!
//! The protocol is very forgiving, and so is the driver: a device that doesn't
//! answer or answers with something that isn't a number results in a value of 0,
//! not in an error. Only invalid arguments and failures of the interface itself
//! are returned as a [`DriverError`].
//!
//! # Examples
//! ```no_run
//! # use odrive_ascii_driver::{AxisState, Driver, DEFAULT_STATE_TIMEOUT};
//! use std::time::Duration;
//! use serialport;
//!
//! let mut s = serialport::new("/dev/ttyACM0", 115200)
//!     .timeout(Duration::from_millis(10))
//!     .open()
//!     .unwrap();
//! let mut driver = Driver::new(&mut s);
//!
//! if driver
//!     .run_state(0, AxisState::FullCalibrationSequence, true, DEFAULT_STATE_TIMEOUT)
//!     .unwrap()
//! {
//!     driver
//!         .run_state(0, AxisState::ClosedLoopControl, false, DEFAULT_STATE_TIMEOUT)
//!         .unwrap();
//!     driver.set_velocity(0, 2.5, 0.0).unwrap();
//!     let vel = driver.get_velocity(0).unwrap();
//!     println!("axis0 turns at {} turns/s", vel);
//! }
//! ```
//!

mod driver;
pub(crate) mod util;

pub use driver::{
    clock::{Clock, SystemClock},
    cmd::{AxisState, Fixed4},
    Config, Driver, DriverError, AXIS_COUNT, DEFAULT_STATE_TIMEOUT,
};
