//! CRC-16/IBM-3740 checksum.
//!
//! Parameters (CRC Catalogue):
//! - width: 16
//! - poly: 0x1021
//! - init: 0xFFFF
//! - refin/refout: false
//! - xorout: 0x0000
//! - check: 0x29B1
//!
//! Aliases: CRC-16/AUTOSAR, CRC-16/CCITT-FALSE. An algorithm commonly
//! misidentified as CRC-CCITT, which customarily refers to the LSB-first
//! form of V.41 (see CRC-16/KERMIT).

use super::Crc16Params;

define_crc16_variant! {
  /// CRC-16/IBM-3740 checksum.
  ///
  /// The all-ones init distinguishes it from CRC-16/XMODEM; leading zero
  /// bytes therefore perturb the register instead of leaving it unchanged.
  ///
  /// ```
  /// use checksum::Crc16Ibm3740;
  ///
  /// assert_eq!(Crc16Ibm3740::checksum(b"123456789"), 0x29B1);
  /// ```
  pub struct Crc16Ibm3740 {
    params: Crc16Params::IBM_3740,
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use traits::Checksum;

  use super::*;

  #[test]
  fn test_check_string() {
    assert_eq!(Crc16Ibm3740::checksum(b"123456789"), 0x29B1);
  }

  #[test]
  fn test_empty() {
    assert_eq!(Crc16Ibm3740::checksum(b""), 0xFFFF);
  }

  #[test]
  fn test_zeros() {
    // CRC-16/IBM-3740 of 32 zero bytes
    assert_eq!(Crc16Ibm3740::checksum(&[0u8; 32]), 0xF14C);
  }

  #[test]
  fn test_ones() {
    // CRC-16/IBM-3740 of 32 0xFF bytes
    assert_eq!(Crc16Ibm3740::checksum(&[0xFFu8; 32]), 0x75F8);
  }

  #[test]
  fn test_incremental() {
    let mut h = Crc16Ibm3740::new();
    h.update(b"1234");
    h.update(b"56789");
    assert_eq!(h.finalize(), 0x29B1);
  }

  #[test]
  fn test_resume() {
    let data = b"hello world";
    let (a, b) = data.split_at(6);

    let crc_a = Crc16Ibm3740::checksum(a);
    let mut h = Crc16Ibm3740::resume(crc_a);
    h.update(b);
    assert_eq!(h.finalize(), Crc16Ibm3740::checksum(data));
  }

  #[test]
  fn test_reset() {
    let mut h = Crc16Ibm3740::new();
    h.update(b"garbage");
    h.reset();
    h.update(b"123456789");
    assert_eq!(h.finalize(), 0x29B1);
  }

  #[test]
  fn test_clone() {
    let mut h = Crc16Ibm3740::new();
    h.update(b"1234");

    let mut clone = h.clone();
    h.update(b"56789");
    clone.update(b"56789");

    assert_eq!(h.finalize(), clone.finalize());
  }

  #[test]
  fn test_with_initial_resumes() {
    let data = b"autosar frame";
    let (a, b) = data.split_at(4);

    let crc_a = Crc16Ibm3740::checksum(a);
    let mut h = <Crc16Ibm3740 as Checksum>::with_initial(crc_a);
    h.update(b);
    assert_eq!(h.finalize(), Crc16Ibm3740::checksum(data));
  }
}
