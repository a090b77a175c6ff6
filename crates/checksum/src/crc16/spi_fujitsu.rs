//! CRC-16/SPI-FUJITSU checksum.
//!
//! Parameters (CRC Catalogue):
//! - width: 16
//! - poly: 0x1021
//! - init: 0x1D0F
//! - refin/refout: false
//! - xorout: 0x0000
//! - check: 0xE5CC
//!
//! Alias: CRC-16/AUG-CCITT. The init value is equivalent to an augment of
//! 0xFFFF prepended to the message. Specified for the FlexRay ASSP
//! MB88121B SPI interface.

use super::Crc16Params;

define_crc16_variant! {
  /// CRC-16/SPI-FUJITSU checksum.
  ///
  /// ```
  /// use checksum::Crc16SpiFujitsu;
  ///
  /// assert_eq!(Crc16SpiFujitsu::checksum(b"123456789"), 0xE5CC);
  /// ```
  pub struct Crc16SpiFujitsu {
    params: Crc16Params::SPI_FUJITSU,
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;
  use crate::crc16::Crc16;

  #[test]
  fn test_check_string() {
    assert_eq!(Crc16SpiFujitsu::checksum(b"123456789"), 0xE5CC);
  }

  #[test]
  fn test_empty() {
    assert_eq!(Crc16SpiFujitsu::checksum(b""), 0x1D0F);
  }

  #[test]
  fn test_incremental() {
    let mut h = Crc16SpiFujitsu::new();
    h.update(b"1234");
    h.update(b"56789");
    assert_eq!(h.finalize(), 0xE5CC);
  }

  #[test]
  fn test_matches_runtime_engine() {
    let data = b"augmented ccitt";
    assert_eq!(
      Crc16SpiFujitsu::checksum(data),
      Crc16::checksum(Crc16Params::SPI_FUJITSU, data)
    );
  }
}
