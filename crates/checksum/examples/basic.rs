//! Basic checksum usage: one-shot, streaming, and resume.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Crc16, Crc16Ibm3740, Crc16Kermit, Crc16Params, Crc16SpiFujitsu, Crc16Xmodem};

fn main() {
  println!("=== CRC-16 Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  resume_example();
  runtime_params_example();
}

/// One-shot computation over the catalogue check string.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // CRC-16/XMODEM - XMODEM/ZMODEM transfers, MMC
  let xmodem = Crc16Xmodem::checksum(data);
  println!("CRC-16/XMODEM:      0x{xmodem:04X}");
  assert_eq!(xmodem, 0x31C3);

  // CRC-16/KERMIT - Kermit, Bluetooth
  let kermit = Crc16Kermit::checksum(data);
  println!("CRC-16/KERMIT:      0x{kermit:04X}");
  assert_eq!(kermit, 0x2189);

  // CRC-16/IBM-3740 - IBM 3740, AUTOSAR
  let ibm = Crc16Ibm3740::checksum(data);
  println!("CRC-16/IBM-3740:    0x{ibm:04X}");
  assert_eq!(ibm, 0x29B1);

  // CRC-16/SPI-FUJITSU - FlexRay ASSP SPI
  let fujitsu = Crc16SpiFujitsu::checksum(data);
  println!("CRC-16/SPI-FUJITSU: 0x{fujitsu:04X}");
  assert_eq!(fujitsu, 0xE5CC);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let data = b"123456789";

  // Process in chunks - result matches one-shot
  let mut hasher = Crc16Xmodem::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let crc = hasher.finalize();

  println!("Streaming CRC-16: 0x{crc:04X}");
  assert_eq!(crc, Crc16Xmodem::checksum(data));

  // finalize() is a snapshot: the hasher keeps going afterwards
  hasher.update(b"...");
  let extended = hasher.finalize();
  println!("Extended CRC-16:  0x{extended:04X}");

  // reset() clears state for reuse
  hasher.reset();
  hasher.update(b"new data");
  let new_crc = hasher.finalize();
  println!("Reset CRC-16:     0x{new_crc:04X}");

  println!();
}

/// Resume computation from a saved checksum.
fn resume_example() {
  println!("--- Resume from Saved State ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  // Compute partial CRC and save it
  let mut hasher = Crc16Kermit::new();
  hasher.update(part1);
  let saved = hasher.finalize();
  println!("Saved state after part1: 0x{saved:04X}");

  // Later, resume from the saved checksum
  let mut resumed = Crc16Kermit::resume(saved);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume:  0x{final_crc:04X}");

  // Verify: should match processing all at once
  let mut full = Crc16Kermit::new();
  full.update(part1);
  full.update(part2);
  assert_eq!(final_crc, full.finalize());
  println!("Verified: matches full computation");

  println!();
}

/// Runtime parameter selection for variants without a preset type.
fn runtime_params_example() {
  println!("--- Runtime Parameter Selection ---\n");

  // CRC-16/GSM, straight from its catalogue parameters
  let gsm = Crc16Params::new(0x1021, 0x0000, false, false, 0xFFFF);
  let crc = Crc16::checksum(gsm, b"123456789");
  println!("CRC-16/GSM: 0x{crc:04X}");
  assert_eq!(crc, 0xCE3C);

  println!();
}
