//! CRC-16/KERMIT checksum.
//!
//! Parameters (CRC Catalogue):
//! - width: 16
//! - poly: 0x1021
//! - init: 0x0000
//! - refin/refout: true
//! - xorout: 0x0000
//! - check: 0x2189
//!
//! Aliases: CRC-16/BLUETOOTH, CRC-16/CCITT, CRC-16/CCITT-TRUE,
//! CRC-16/V-41-LSB, CRC-CCITT. V.41 is endianness-agnostic, referring only
//! to bit sequences, but the CRC appears reflected when used with LSB-first
//! modems; the unreflected form is CRC-16/XMODEM. Used in Bluetooth error
//! detection.

use super::Crc16Params;

define_crc16_variant! {
  /// CRC-16/KERMIT checksum.
  ///
  /// The fully reflected member of the V.41 family: input bytes are
  /// processed LSB-first and the output register is bit-reversed.
  ///
  /// ```
  /// use checksum::Crc16Kermit;
  ///
  /// assert_eq!(Crc16Kermit::checksum(b"123456789"), 0x2189);
  /// ```
  pub struct Crc16Kermit {
    params: Crc16Params::KERMIT,
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;

  #[test]
  fn test_check_string() {
    assert_eq!(Crc16Kermit::checksum(b"123456789"), 0x2189);
  }

  #[test]
  fn test_empty() {
    assert_eq!(Crc16Kermit::checksum(b""), 0x0000);
  }

  #[test]
  fn test_incremental() {
    let oneshot = Crc16Kermit::checksum(b"123456789");
    for chunk in 1..=9 {
      let mut h = Crc16Kermit::new();
      for part in b"123456789".chunks(chunk) {
        h.update(part);
      }
      assert_eq!(h.finalize(), oneshot, "chunk size {chunk} diverged");
    }
  }

  #[test]
  fn test_resume() {
    let data = b"reflected resume";
    let (a, b) = data.split_at(9);

    let crc_a = Crc16Kermit::checksum(a);
    let mut h = Crc16Kermit::resume(crc_a);
    h.update(b);
    assert_eq!(h.finalize(), Crc16Kermit::checksum(data));
  }

  #[test]
  fn test_clone() {
    let mut h = Crc16Kermit::new();
    h.update(b"1234");

    let mut clone = h.clone();
    h.update(b"56789");
    clone.update(b"56789");

    assert_eq!(h.finalize(), clone.finalize());
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_io_write() {
    use std::io::Write;

    let mut h = Crc16Kermit::new();
    h.write_all(b"1234").unwrap();
    h.write_all(b"56789").unwrap();
    h.flush().unwrap();
    assert_eq!(h.finalize(), 0x2189);
  }
}
