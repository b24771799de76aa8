
pub mod clock;
pub mod cmd;
mod map;
mod parse;

use self::{
    clock::{Clock, SystemClock},
    cmd::{AxisState, Fixed4},
};
use crate::util::ensure;
use log::{debug, trace, warn};
use std::{
    fmt::{Arguments, Debug, Display},
    io::{self, Read, Write},
    time::Duration,
};
use thiserror::Error;

// unfortunately, due to rustfmt not having the blank_lines_upper_bound feature
// stable yet, we gotta put comments in between the different sections. otherwise
// its just too much

//

/// Number of axes of a device, axes are addressed with 0 and 1
pub const AXIS_COUNT: u8 = 2;

/// Timeout usually given to [`Driver::run_state`]
pub const DEFAULT_STATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors returned by the driver
///
/// None of these are protocol errors. A device that doesn't answer or answers
/// with garbage never causes an error, see [`Driver`].
#[derive(Error, Debug)]
pub enum DriverError {
    /// Thrown if an axis index other than 0 or 1 was given
    #[error("axis must be 0 or 1, was {0}")]
    InvalidAxis(u8),
    /// Thrown by [`Driver::with_config`] if the given [`Config`] can't be used
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Wrapper around [`io::Error`], thrown if the interface itself failed
    #[error(transparent)]
    IoError(#[from] io::Error),
}

//

/// Timing of the driver
///
/// The defaults match what the device expects, usually there's no need to
/// change them except for tests.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Config {
    /// How long [`Driver::read_line`] waits for a complete line, counted from
    /// the start of the read
    pub read_timeout: Duration,
    /// Pause before each poll in [`Driver::run_state`]. A timeout given to
    /// `run_state` is converted into a number of these.
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            read_timeout: Duration::from_millis(1000),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl Config {
    fn validate(&self) -> Result<(), DriverError> {
        ensure!(
            !self.poll_interval.is_zero(),
            DriverError::InvalidConfig("poll_interval must not be zero")
        );
        Ok(())
    }

    // number of polls that fit into timeout, rounded to the nearest one
    fn poll_ticks(&self, timeout: Duration) -> u32 {
        // as saturates, so huge timeouts just end up as u32::MAX polls
        (timeout.as_secs_f64() / self.poll_interval.as_secs_f64()).round() as u32
    }
}

//

/// Talks to a single device over its ASCII protocol
///
/// `I` is the interface the device is connected to, usually a serialport. It is
/// only borrowed, the driver never opens or closes it. Reads from `I` should not
/// block for long: a read that returns `Ok(0)` or fails with
/// [`WouldBlock`][io::ErrorKind::WouldBlock], [`TimedOut`][io::ErrorKind::TimedOut]
/// or [`Interrupted`][io::ErrorKind::Interrupted] is treated as "nothing
/// received yet". For a serialport that means setting a short timeout, a few
/// milliseconds are plenty.
///
/// The protocol is strictly request/response and there is no way to tell which
/// request a reply belongs to. Every method takes `&mut self`, so as long as
/// there is only one driver per interface, replies can't get mixed up.
///
/// Protocol errors are not reported as errors. If the device doesn't answer in
/// time, a read returns whatever was received so far, and if an answer isn't a
/// number it is read as 0. Use [`try_read_float`][Driver::try_read_float] and
/// [`try_read_int`][Driver::try_read_int] to tell those cases apart from an
/// actual 0. [`DriverError`]s are only returned on invalid arguments or if the
/// interface itself fails.
pub struct Driver<'a, I, C = SystemClock>
where
    I: Read + Write + ?Sized,
    C: Clock,
{
    interface: &'a mut I,
    clock: C,
    config: Config,
}

impl<'a, I> Driver<'a, I, SystemClock>
where
    I: Read + Write + ?Sized,
{
    /// Returns a new Driver with the default [`Config`]
    ///
    /// # Examples
    /// ```no_run
    /// # use odrive_ascii_driver::Driver;
    /// use std::time::Duration;
    /// use serialport;
    ///
    /// let mut s = serialport::new("/dev/ttyACM0", 115200)
    ///     .timeout(Duration::from_millis(10))
    ///     .open()
    ///     .unwrap();
    /// let driver = Driver::new(&mut s);
    /// ```
    pub fn new(interface: &'a mut I) -> Self {
        Driver {
            interface,
            clock: SystemClock::new(),
            config: Config::default(),
        }
    }
}

impl<'a, I, C> Driver<'a, I, C>
where
    I: Read + Write + ?Sized,
    C: Clock,
{
    /// Returns a new Driver using the given clock and config
    ///
    /// # Errors
    /// Returns [`DriverError::InvalidConfig`] if `config.poll_interval` is zero.
    pub fn with_config(
        interface: &'a mut I,
        clock: C,
        config: Config,
    ) -> Result<Self, DriverError> {
        config.validate()?;
        Ok(Driver {
            interface,
            clock,
            config,
        })
    }

    /// Returns the config the driver was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn check_axis(axis: u8) -> Result<(), DriverError> {
        ensure!(axis < AXIS_COUNT, DriverError::InvalidAxis(axis));
        Ok(())
    }

    // sends a single line, the '\n' is added here
    fn send_fmt(&mut self, args: Arguments<'_>) -> Result<(), DriverError> {
        trace!("sending {}", args);
        // size chosen more or less randomly, should fit every command
        let mut line: Vec<u8> = Vec::with_capacity(48);
        line.write_fmt(args)?;
        line.push(b'\n');
        self.interface.write_all(&line)?;
        self.interface.flush()?;
        Ok(())
    }

    fn send_axis_read(&mut self, axis: u8, property: &str) -> Result<(), DriverError> {
        Self::check_axis(axis)?;
        self.send_fmt(format_args!("{} axis{}.{}", map::READ, axis, property))
    }

    // None if there's nothing to read right now
    fn read_byte(&mut self) -> Result<Option<u8>, DriverError> {
        let mut buf = [0u8; 1];
        match self.interface.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) => match e.kind() {
                io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut | io::ErrorKind::Interrupted => {
                    Ok(None)
                }
                _ => Err(e.into()),
            },
        }
    }

    //

    /// Sets the position of an axis with the given feed-forwards
    ///
    /// Sends `p <axis> <position> <velocity_feedforward> <torque_feedforward>`.
    /// Position is in turns, velocity in turns/s and torque in Nm. If you don't
    /// know what a feed-forward is, pass 0. Refreshes the watchdog of the axis.
    ///
    /// # Errors
    /// [`DriverError::InvalidAxis`] if `axis` isn't 0 or 1.
    pub fn set_position(
        &mut self,
        axis: u8,
        position: f32,
        velocity_feedforward: f32,
        torque_feedforward: f32,
    ) -> Result<(), DriverError> {
        Self::check_axis(axis)?;
        self.send_fmt(format_args!(
            "{} {} {} {} {}",
            map::SET_POSITION,
            axis,
            Fixed4(position),
            Fixed4(velocity_feedforward),
            Fixed4(torque_feedforward)
        ))
    }

    /// Sets the velocity of an axis in turns/s, with a torque feed-forward in Nm
    /// (usually 0). Refreshes the watchdog of the axis.
    pub fn set_velocity(
        &mut self,
        axis: u8,
        velocity: f32,
        torque_feedforward: f32,
    ) -> Result<(), DriverError> {
        Self::check_axis(axis)?;
        self.send_fmt(format_args!(
            "{} {} {} {}",
            map::SET_VELOCITY,
            axis,
            Fixed4(velocity),
            Fixed4(torque_feedforward)
        ))
    }

    /// Sets the torque of an axis in Nm. Refreshes the watchdog of the axis.
    pub fn set_torque(&mut self, axis: u8, torque: f32) -> Result<(), DriverError> {
        Self::check_axis(axis)?;
        self.send_fmt(format_args!("{} {} {}", map::SET_TORQUE, axis, Fixed4(torque)))
    }

    /// Sets the position of an axis in turns, without any feed-forwards. This is
    /// the recommended command for general moving around. Refreshes the watchdog
    /// of the axis.
    pub fn set_simple_position(&mut self, axis: u8, position: f32) -> Result<(), DriverError> {
        Self::check_axis(axis)?;
        self.send_fmt(format_args!(
            "{} {} {}",
            map::SET_SIMPLE_POSITION,
            axis,
            Fixed4(position)
        ))
    }

    //

    /// Returns the estimated velocity of an axis in turns/s, 0 if the device
    /// didn't answer
    pub fn get_velocity(&mut self, axis: u8) -> Result<f32, DriverError> {
        self.send_axis_read(axis, map::VEL_ESTIMATE)?;
        self.read_float()
    }

    /// Returns the estimated position of an axis in turns, 0 if the device
    /// didn't answer
    ///
    /// # Examples
    /// ```no_run
    /// # use odrive_ascii_driver::Driver;
    /// use std::time::Duration;
    /// use serialport;
    ///
    /// let mut s = serialport::new("/dev/ttyACM0", 115200)
    ///     .timeout(Duration::from_millis(10))
    ///     .open()
    ///     .unwrap();
    /// let mut driver = Driver::new(&mut s);
    /// driver.set_simple_position(0, 2.0).unwrap();
    /// println!("axis0 is at {} turns", driver.get_position(0).unwrap());
    /// ```
    pub fn get_position(&mut self, axis: u8) -> Result<f32, DriverError> {
        self.send_axis_read(axis, map::POS_ESTIMATE)?;
        self.read_float()
    }

    /// Returns the raw code of the current state of an axis, 0
    /// ([`AxisState::Undefined`]) if the device didn't answer. Use
    /// [`AxisState::from_code`] to get the actual state.
    pub fn get_current_state(&mut self, axis: u8) -> Result<i32, DriverError> {
        self.send_axis_read(axis, map::CURRENT_STATE)?;
        self.read_int()
    }

    /// Reads any property, e.g. `vbus_voltage` or `axis0.error`, and returns
    /// the reply as is
    pub fn read_property(&mut self, path: &str) -> Result<String, DriverError> {
        self.send_fmt(format_args!("{} {}", map::READ, path))?;
        self.read_line()
    }

    /// Writes any property. `value` is written using its [`Display`]
    /// implementation, wrap floats into [`Fixed4`] to avoid exponents. The
    /// device doesn't answer writes.
    pub fn write_property<V: Display>(&mut self, path: &str, value: V) -> Result<(), DriverError> {
        self.send_fmt(format_args!("{} {} {}", map::WRITE, path, value))
    }

    //

    /// Requests a state for an axis and optionally waits for the axis to
    /// return to idle
    ///
    /// `requested_state` is usually an [`AxisState`], but any raw state code
    /// works as well. If `wait_for_idle` is false this returns `true` right after
    /// sending the request. Otherwise the current state is polled every
    /// [`Config::poll_interval`] until the axis reports [`AxisState::Idle`].
    /// `timeout` is converted to a number of polls (rounded, so with the default
    /// config 1s means 10 polls) and there's always at least one poll.
    ///
    /// Returns `true` if the axis was idle before the polls ran out, `false`
    /// otherwise. A timeout that rounds to 0 polls (below 50ms with the default
    /// config) still polls once, but always returns `false`. The wait can't be
    /// interrupted.
    ///
    /// # Examples
    /// ```no_run
    /// # use odrive_ascii_driver::{AxisState, Driver, DEFAULT_STATE_TIMEOUT};
    /// use std::time::Duration;
    /// use serialport;
    ///
    /// let mut s = serialport::new("/dev/ttyACM0", 115200)
    ///     .timeout(Duration::from_millis(10))
    ///     .open()
    ///     .unwrap();
    /// let mut driver = Driver::new(&mut s);
    /// let calibrated = driver
    ///     .run_state(0, AxisState::FullCalibrationSequence, true, DEFAULT_STATE_TIMEOUT)
    ///     .unwrap();
    /// if calibrated {
    ///     driver
    ///         .run_state(0, AxisState::ClosedLoopControl, false, DEFAULT_STATE_TIMEOUT)
    ///         .unwrap();
    /// }
    /// ```
    pub fn run_state<S: Into<i32>>(
        &mut self,
        axis: u8,
        requested_state: S,
        wait_for_idle: bool,
        timeout: Duration,
    ) -> Result<bool, DriverError> {
        Self::check_axis(axis)?;
        let requested_state = requested_state.into();
        self.send_fmt(format_args!(
            "{} axis{}.{} {}",
            map::WRITE,
            axis,
            map::REQUESTED_STATE,
            requested_state
        ))?;
        if !wait_for_idle {
            return Ok(true);
        }
        let mut remaining = self.config.poll_ticks(timeout);
        loop {
            self.clock.sleep(self.config.poll_interval);
            if self.get_current_state(axis)? == AxisState::Idle.code() {
                // a timeout that rounds to no polls at all is exhausted from the start
                return Ok(remaining > 0);
            }
            remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                warn!(
                    "axis{} didn't return to idle within {:?} after requesting state {}",
                    axis, timeout, requested_state
                );
                return Ok(false);
            }
        }
    }

    //

    /// Reads a single line
    ///
    /// Reads until a `'\n'` (which isn't part of the returned line) or until
    /// [`Config::read_timeout`] has passed since the start of the call. In the
    /// latter case everything received until then is returned, which might be
    /// nothing at all. Invalid UTF-8 is replaced.
    ///
    /// The timeout is checked after every byte as well, so a device that keeps
    /// sending without ever ending the line can't block longer than
    /// [`Config::read_timeout`] either. The line is cut off there, the rest
    /// stays in the interface.
    pub fn read_line(&mut self) -> Result<String, DriverError> {
        let start = self.clock.now();
        // size chosen more or less randomly, should fit most replies
        let mut buf: Vec<u8> = Vec::with_capacity(32);
        loop {
            match self.read_byte()? {
                Some(b'\n') => break,
                Some(b) => buf.push(b),
                None => std::hint::spin_loop(),
            }
            if self.clock.now().saturating_sub(start) >= self.config.read_timeout {
                debug!(
                    "no complete line within {:?}, got {:?}",
                    self.config.read_timeout,
                    String::from_utf8_lossy(&buf)
                );
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        trace!("received {:?}", line);
        Ok(line)
    }

    /// Reads a line and parses its leading number, `None` if the line doesn't
    /// start with one (which includes the device not answering)
    pub fn try_read_float(&mut self) -> Result<Option<f32>, DriverError> {
        Ok(parse::float_prefix(&self.read_line()?))
    }

    /// Like [`try_read_float`][Driver::try_read_float] but returns 0 instead of `None`
    pub fn read_float(&mut self) -> Result<f32, DriverError> {
        Ok(self.try_read_float()?.unwrap_or(0.0))
    }

    /// Reads a line and parses its leading integer, `None` if the line doesn't
    /// start with one. Values outside of the `i32` range saturate.
    pub fn try_read_int(&mut self) -> Result<Option<i32>, DriverError> {
        Ok(parse::int_prefix(&self.read_line()?))
    }

    /// Like [`try_read_int`][Driver::try_read_int] but returns 0 instead of `None`
    pub fn read_int(&mut self) -> Result<i32, DriverError> {
        Ok(self.try_read_int()?.unwrap_or(0))
    }
}

// have to do it manually because the interface doesn't have to be Debug
impl<'a, I, C> Debug for Driver<'a, I, C>
where
    I: Read + Write + ?Sized,
    C: Clock + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Driver {{ interface: _, clock: {:?}, config: {:?} }}",
            self.clock, self.config
        )
    }
}
