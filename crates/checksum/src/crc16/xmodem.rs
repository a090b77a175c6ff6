//! CRC-16/XMODEM checksum.
//!
//! Parameters (CRC Catalogue):
//! - width: 16
//! - poly: 0x1021
//! - init: 0x0000
//! - refin/refout: false
//! - xorout: 0x0000
//! - check: 0x31C3
//!
//! Aliases: CRC-16/ACORN, CRC-16/LTE, CRC-16/V-41-MSB, ZMODEM. The
//! MSB-first form of the V.41 algorithm; for the LSB-first form see
//! CRC-16/KERMIT. Used in XMODEM transfers and the MultiMediaCard
//! interface.

use super::Crc16Params;

define_crc16_variant! {
  /// CRC-16/XMODEM checksum.
  ///
  /// ```
  /// use checksum::Crc16Xmodem;
  ///
  /// assert_eq!(Crc16Xmodem::checksum(b"123456789"), 0x31C3);
  /// ```
  pub struct Crc16Xmodem {
    params: Crc16Params::XMODEM,
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use traits::Checksum;

  use super::*;

  #[test]
  fn test_check_string() {
    assert_eq!(Crc16Xmodem::checksum(b"123456789"), 0x31C3);
  }

  #[test]
  fn test_empty() {
    assert_eq!(Crc16Xmodem::checksum(b""), 0x0000);
  }

  #[test]
  fn test_incremental() {
    let mut h = Crc16Xmodem::new();
    h.update(b"1234");
    h.update(b"56789");
    assert_eq!(h.finalize(), 0x31C3);
  }

  #[test]
  fn test_resume() {
    let data = b"hello world";
    let (a, b) = data.split_at(6);

    let crc_a = Crc16Xmodem::checksum(a);
    let mut h = Crc16Xmodem::resume(crc_a);
    h.update(b);
    assert_eq!(h.finalize(), Crc16Xmodem::checksum(data));
  }

  #[test]
  fn test_reset() {
    let mut h = Crc16Xmodem::new();
    h.update(b"garbage");
    h.reset();
    h.update(b"123456789");
    assert_eq!(h.finalize(), 0x31C3);
  }

  #[test]
  fn test_trait_impl() {
    fn check_trait<T: Checksum>() {}

    check_trait::<Crc16Xmodem>();
    assert_eq!(<Crc16Xmodem as Checksum>::checksum(b"123456789"), 0x31C3);
  }
}
