use super::{Clock, Interface};
use odrive_ascii_driver::Clock as _;
use std::{
    io::{ErrorKind, Read, Write},
    time::Duration,
};

#[test]
fn read_small_buffer() {
    let mut i = Interface::new();
    let mut buf = [0u8; 8];
    let expected = b"1.234567\n";
    i.add_read(expected);
    assert_eq!(i.read(&mut buf).unwrap(), 8);
    assert_eq!(buf, expected[..8]);
    assert_eq!(i.read(&mut buf).unwrap(), expected.len() - 8);
    assert_eq!(buf[..expected.len() - 8], expected[8..]);
}

#[test]
fn read_single_bytes() {
    let mut i = Interface::new();
    let mut buf = [0u8; 1];
    i.add_read(b"42");
    assert_eq!(i.read(&mut buf).unwrap(), 1);
    assert_eq!(buf[0], b'4');
    assert_eq!(i.read(&mut buf).unwrap(), 1);
    assert_eq!(buf[0], b'2');
    assert_eq!(i.pending_read(), 0);
}

#[test]
fn read_empty_times_out() {
    let mut i = Interface::new();
    let mut buf = [0u8; 32];
    let e = i.read(&mut buf).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::TimedOut);
}

#[test]
fn write_small_buffer() {
    let mut i = Interface::new();
    let expected = b"v 1 2.5000 0.1000\n";
    i.add_write(expected);
    assert_eq!(i.write(&expected[..8]).unwrap(), 8);
    assert_eq!(i.write(&expected[8..]).unwrap(), expected.len() - 8);
    assert!(i.is_empty());
}

#[test]
#[should_panic]
fn write_wrong_buf() {
    let mut i = Interface::new();
    i.add_write(b"c 0 1.0000\n");
    let _ = i.write(b"c 1 1.0000\n");
}

#[test]
#[should_panic]
fn write_empty() {
    let mut i = Interface::new();
    let _ = i.write(b"t 0 1.0000\n");
}

#[test]
fn query_shares_buffers_between_clones() {
    let mut i = Interface::new();
    let mut other = i.clone();
    i.add_query(b"r axis0.current_state\n", b"1\n");
    assert_eq!(other.pending_write(), 22);
    other.write_all(b"r axis0.current_state\n").unwrap();
    let mut buf = [0u8; 8];
    assert_eq!(other.read(&mut buf).unwrap(), 2);
    assert!(i.is_empty());
}

#[test]
fn clock_advances() {
    let c = Clock::new();
    assert_eq!(c.now(), Duration::ZERO);
    assert_eq!(c.now(), Duration::from_millis(1));
    c.sleep(Duration::from_millis(100));
    assert_eq!(c.elapsed(), Duration::from_millis(102));
    assert_eq!(c.sleeps(), vec![Duration::from_millis(100)]);
    assert_eq!(c.clone().sleep_count(), 1);
}
