//! std::io adapter behavior: only transferred bytes are hashed.

use std::io::{Cursor, Read, Write};

use checksum::{Checksum, ChecksumReader, ChecksumWriter, Crc16Ibm3740, Crc16Xmodem};

/// Reader that returns at most `cap` bytes per call, forcing short reads.
struct Dribble<R> {
  inner: R,
  cap: usize,
}

impl<R: Read> Read for Dribble<R> {
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let cap = self.cap.min(buf.len());
    self.inner.read(&mut buf[..cap])
  }
}

#[test]
fn reader_hashes_exactly_the_bytes_read() {
  let data = b"123456789".to_vec();
  let mut reader = ChecksumReader::<_, Crc16Xmodem>::new(Dribble {
    inner: Cursor::new(data.clone()),
    cap: 3,
  });

  let mut contents = Vec::new();
  reader.read_to_end(&mut contents).unwrap();

  assert_eq!(contents, data);
  assert_eq!(reader.crc(), 0x31C3);
}

#[test]
fn reader_crc_is_a_snapshot() {
  let mut reader = Crc16Ibm3740::reader(Cursor::new(b"123456789".to_vec()));

  let mut head = [0u8; 4];
  reader.read_exact(&mut head).unwrap();
  assert_eq!(reader.crc(), Crc16Ibm3740::checksum(b"1234"));

  let mut rest = Vec::new();
  reader.read_to_end(&mut rest).unwrap();
  assert_eq!(reader.crc(), 0x29B1);

  let (_, crc) = reader.into_parts();
  assert_eq!(crc, 0x29B1);
}

#[test]
fn writer_hashes_written_bytes() {
  let mut writer = ChecksumWriter::<_, Crc16Xmodem>::new(Vec::new());
  writer.write_all(b"1234").unwrap();
  writer.write_all(b"56789").unwrap();

  let (out, crc) = writer.into_parts();
  assert_eq!(out, b"123456789");
  assert_eq!(crc, 0x31C3);
}

#[test]
fn writer_resumes_from_initial() {
  let first = Crc16Ibm3740::checksum(b"1234");

  let mut writer = ChecksumWriter::<_, Crc16Ibm3740>::with_initial(Vec::new(), first);
  writer.write_all(b"56789").unwrap();

  assert_eq!(writer.crc(), 0x29B1);
}
