#[cfg(test)]
mod tests;

use std::{
    cell::{Cell, RefCell},
    io::{self, Read, Write},
    rc::Rc,
    time::Duration,
};

// used to mock an interface to test the odrive driver
// the idea is that read contains bytes which can be read and write bytes
// that are expected to be written. once they are written/read they are removed
// from the corresponding buffer. if read is empty we behave like a serialport
// whose timeout ran out and if the content in write didnt match what is being
// written (or write is empty) we panic.
// add_read and add_write add bytes to the corresponding buffers
//
// don't be alarmed if you think it's slow or inefficient or anything, it doesn't
// need to be fast nor pretty nor efficient, its just for testing. it needs to be
// easy
pub struct Interface {
    read: Rc<RefCell<Vec<u8>>>,
    write: Rc<RefCell<Vec<u8>>>,
}

impl Read for Interface {
    fn read(&mut self, mut buf: &mut [u8]) -> io::Result<usize> {
        let mut q = self.read.as_ref().borrow_mut();
        if q.is_empty() {
            Err(io::Error::new(io::ErrorKind::TimedOut, "nothing to read"))
        } else if buf.len() > q.len() {
            buf.write_all(&*q)?;
            let res = q.len();
            q.drain(..);
            Ok(res)
        } else {
            buf.write_all(&q[..buf.len()])?;
            q.drain(..buf.len());
            Ok(buf.len())
        }
    }
}

impl Write for Interface {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut q = self.write.as_ref().borrow_mut();
        if q.is_empty() {
            panic!(
                "write was emtpy, tried to write {:?}",
                String::from_utf8_lossy(buf)
            )
        } else if q.starts_with(buf) {
            q.drain(..buf.len());
            Ok(buf.len())
        } else {
            panic!(
                "write didn't start with {:?}, write was {:?}",
                String::from_utf8_lossy(buf),
                String::from_utf8_lossy(&q)
            )
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Clone for Interface {
    fn clone(&self) -> Self {
        Interface {
            read: self.read.clone(),
            write: self.write.clone(),
        }
    }
}

impl Interface {
    pub fn new() -> Self {
        Interface {
            read: Rc::new(RefCell::new(Vec::new())),
            write: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn add_read(&mut self, buf: &[u8]) {
        self.read.as_ref().borrow_mut().extend_from_slice(buf)
    }

    pub fn add_write(&mut self, buf: &[u8]) {
        self.write.as_ref().borrow_mut().extend_from_slice(buf)
    }

    // expects cmd to be written and queues reply as the answer of the device
    pub fn add_query(&mut self, cmd: &[u8], reply: &[u8]) {
        self.add_write(cmd);
        self.add_read(reply);
    }

    /// Returns `true` if everything queued was read and written
    pub fn is_empty(&self) -> bool {
        self.read.borrow().is_empty() && self.write.borrow().is_empty()
    }

    pub fn pending_read(&self) -> usize {
        self.read.borrow().len()
    }

    pub fn pending_write(&self) -> usize {
        self.write.borrow().len()
    }
}

impl Default for Interface {
    fn default() -> Self {
        Self::new()
    }
}

//

/// Mock clock
///
/// Every call to `now` advances the time by `step` (1ms by default), so loops
/// waiting on a timeout always terminate. `sleep` advances the time by the given
/// duration and records it. Clones share the same time and records.
#[derive(Debug, Clone)]
pub struct Clock {
    now: Rc<Cell<Duration>>,
    step: Duration,
    sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl Clock {
    pub fn new() -> Self {
        Self::with_step(Duration::from_millis(1))
    }

    pub fn with_step(step: Duration) -> Self {
        Clock {
            now: Rc::new(Cell::new(Duration::ZERO)),
            step,
            sleeps: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Current time without advancing it
    pub fn elapsed(&self) -> Duration {
        self.now.get()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    pub fn sleep_count(&self) -> usize {
        self.sleeps.borrow().len()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl odrive_ascii_driver::Clock for Clock {
    fn now(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }

    fn sleep(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
        self.sleeps.borrow_mut().push(duration);
    }
}
