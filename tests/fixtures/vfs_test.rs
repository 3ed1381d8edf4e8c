// Code generated with embedvfs. DO NOT EDIT.

//! Smoke tests for the embedded `vfs` module.
//!
//! Declare next to the module: `#[cfg(test)] mod vfs_test;`

use super::vfs::{open, Error, Whence};

const PATH: &str = "/docs/hello.txt";
const VERSION: &str = "013b00d2";
const SIZE: i64 = 2;

#[test]
fn test_path() {
    let file = open(PATH, VERSION).unwrap();
    assert_eq!(file.path(), PATH);
}

#[test]
fn test_version() {
    let file = open(PATH, VERSION).unwrap();
    assert_eq!(file.version(), VERSION);
}

#[test]
fn test_size() {
    let file = open(PATH, VERSION).unwrap();
    assert_eq!(file.size(), SIZE);
}

#[test]
fn test_reader() {
    let mut file = open(PATH, VERSION).unwrap();
    let mut buf = vec![0u8; SIZE as usize];
    let read = match file.read(&mut buf) {
        Ok(n) => n,
        Err(Error::EndOfStream) => 0,
        Err(err) => panic!("unexpected error: {}", err),
    };
    assert_eq!(read as i64, SIZE);
}

#[test]
fn test_seeker() {
    let mut file = open(PATH, VERSION).unwrap();
    assert_eq!(file.seek(0, Whence::FromEnd).unwrap(), SIZE);
}
